//! Classification and parsing of individual corpus lines.

use crate::config::StreamConfig;

/// What a single corpus line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusLine<'a> {
    /// Empty or whitespace-only
    Blank,
    /// Corpus header line
    Header(&'a str),
    /// Document-boundary line (not yet validated)
    Document(&'a str),
    /// Structural noise such as reference or caption lines
    Noise,
    /// Regular text
    Content(&'a str),
}

/// Classify a line with its line terminator already removed.
pub fn classify<'a>(line: &'a str, config: &StreamConfig) -> CorpusLine<'a> {
    if line.trim().is_empty() {
        CorpusLine::Blank
    } else if line.starts_with(config.header_marker.as_str()) {
        CorpusLine::Header(line)
    } else if line.starts_with(config.document_marker.as_str()) {
        CorpusLine::Document(line)
    } else if config
        .noise_prefixes
        .iter()
        .any(|prefix| line.starts_with(prefix.as_str()))
    {
        CorpusLine::Noise
    } else {
        CorpusLine::Content(line)
    }
}

/// Parsed corpus header: `marker\tlang\tcorpus class\twikifier class\tcreated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusHeader {
    pub language: String,
    pub corpus_class: String,
    pub wikifier_class: String,
    pub creation_time: String,
}

impl CorpusHeader {
    /// Parse a header line; `None` unless it has exactly five tab fields.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 5 {
            return None;
        }
        Some(Self {
            language: fields[1].trim().to_string(),
            corpus_class: fields[2].trim().to_string(),
            wikifier_class: fields[3].trim().to_string(),
            creation_time: fields[4].trim().to_string(),
        })
    }
}

/// Parsed document-boundary line: `marker\tid\ttitle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    pub id: i64,
    pub title: String,
}

impl DocumentHeader {
    /// Parse a document-boundary line. Returns a short reason on failure.
    pub fn parse(line: &str, marker: &str) -> Result<Self, &'static str> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err("expected three tab-separated fields `marker\\tid\\ttitle`");
        }
        if fields[0].trim() != marker {
            return Err("first field is not the document marker");
        }
        let id = fields[1]
            .trim()
            .parse::<i64>()
            .map_err(|_| "document id is not an integer")?;

        Ok(Self {
            id,
            title: fields[2].trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let config = StreamConfig::default();
        assert_eq!(classify("", &config), CorpusLine::Blank);
        assert_eq!(classify("  \t ", &config), CorpusLine::Blank);
        assert!(matches!(
            classify("@WikiBrainCorpus\ten\tX\tY\tnow", &config),
            CorpusLine::Header(_)
        ));
        assert!(matches!(
            classify("@WikiBrainDoc\t5\tDog", &config),
            CorpusLine::Document(_)
        ));
        assert_eq!(classify("References", &config), CorpusLine::Noise);
        assert_eq!(classify("thumb|a dog", &config), CorpusLine::Noise);
        assert_eq!(
            classify("the dog barked", &config),
            CorpusLine::Content("the dog barked")
        );
    }

    #[test]
    fn test_parse_document() {
        let doc = DocumentHeader::parse("@WikiBrainDoc\t5\tDog Breeds", "@WikiBrainDoc").unwrap();
        assert_eq!(doc.id, 5);
        assert_eq!(doc.title, "Dog Breeds");
    }

    #[test]
    fn test_parse_document_wrong_field_count() {
        assert!(DocumentHeader::parse("@WikiBrainDoc\t5", "@WikiBrainDoc").is_err());
        assert!(DocumentHeader::parse("@WikiBrainDoc\t5\tA\tB", "@WikiBrainDoc").is_err());
    }

    #[test]
    fn test_parse_document_bad_id() {
        assert!(DocumentHeader::parse("@WikiBrainDoc\tfive\tDog", "@WikiBrainDoc").is_err());
    }

    #[test]
    fn test_parse_corpus_header() {
        let header =
            CorpusHeader::parse("@WikiBrainCorpus\tsimple\tPlainText\tWikifier\t2014-01-01").unwrap();
        assert_eq!(header.language, "simple");
        assert_eq!(header.creation_time, "2014-01-01");
        assert!(CorpusHeader::parse("@WikiBrainCorpus").is_none());
    }
}
