//! Parsing of single dictionary lines.

/// Kind tag of a dictionary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `w`: a unigram and its count
    Word,
    /// `t`: total number of words counted
    Total,
    /// `m`: article id and its mention count
    Mention,
    /// Any other tag (phrases, titles, ...)
    Other,
}

impl EntryKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "w" => EntryKind::Word,
            "t" => EntryKind::Total,
            "m" => EntryKind::Mention,
            _ => EntryKind::Other,
        }
    }
}

/// One parsed dictionary line, borrowing from the line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry<'a> {
    pub kind: EntryKind,
    pub count: u64,
    pub surface: &'a str,
}

impl<'a> DictionaryEntry<'a> {
    /// Parse a `kind count word` line.
    ///
    /// The word is everything after the second space, so phrases containing
    /// spaces survive intact. Returns a short reason on failure.
    pub fn parse(line: &'a str) -> Result<Self, &'static str> {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let mut fields = line.splitn(3, ' ');

        let (Some(tag), Some(count), Some(surface)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err("expected three space-separated fields `kind count word`");
        };

        if tag.is_empty() {
            return Err("empty kind field");
        }

        let count = count
            .parse::<u64>()
            .map_err(|_| "count is not a non-negative integer")?;

        let kind = EntryKind::from_tag(tag);
        let surface = surface.trim();
        if kind == EntryKind::Word && surface.is_empty() {
            return Err("empty word");
        }

        Ok(Self {
            kind,
            count,
            surface,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word() {
        let entry = DictionaryEntry::parse("w 12 dog\n").unwrap();
        assert_eq!(entry.kind, EntryKind::Word);
        assert_eq!(entry.count, 12);
        assert_eq!(entry.surface, "dog");
    }

    #[test]
    fn test_parse_phrase_keeps_spaces() {
        let entry = DictionaryEntry::parse("p 3 new york city").unwrap();
        assert_eq!(entry.kind, EntryKind::Other);
        assert_eq!(entry.surface, "new york city");
    }

    #[test]
    fn test_parse_total_and_mention() {
        assert_eq!(
            DictionaryEntry::parse("t 5000 _").unwrap().kind,
            EntryKind::Total
        );
        let mention = DictionaryEntry::parse("m 1000 42").unwrap();
        assert_eq!(mention.kind, EntryKind::Mention);
        assert_eq!(mention.count, 1000);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert!(DictionaryEntry::parse("w 12").is_err());
        assert!(DictionaryEntry::parse("").is_err());
    }

    #[test]
    fn test_parse_non_integer_count() {
        assert!(DictionaryEntry::parse("w twelve dog").is_err());
        assert!(DictionaryEntry::parse("w -3 dog").is_err());
    }

    #[test]
    fn test_parse_crlf() {
        let entry = DictionaryEntry::parse("w 1 cat\r\n").unwrap();
        assert_eq!(entry.surface, "cat");
    }
}
