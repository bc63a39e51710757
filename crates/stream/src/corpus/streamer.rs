//! The corpus streamer.
//!
//! Reads one line at a time and yields one [`LabeledRecord`] per content
//! line. Memory use is bounded by the longest line, the vocabulary and the
//! mention cache; the corpus itself is never buffered.

use super::document::DocumentState;
use super::line::{classify, CorpusHeader, CorpusLine, DocumentHeader};
use super::record::LabeledRecord;
use crate::config::StreamConfig;
use crate::io::{open_source, Source};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::BufRead;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use wbcorpus_core::{CacheStats, CorpusError, MentionCache, Result, TokenTranslator, VocabularySet};

/// A streamer over a file opened with [`open_source`].
pub type FileStreamer = CorpusStreamer<Source, StdRng>;

/// Pull-based iterator of labeled records over an annotated corpus.
///
/// Each streamer owns its document cursor, its mention cache and its
/// random source. It is single-pass: to restart, open the source again.
/// After the first error the iterator is exhausted.
pub struct CorpusStreamer<R, G = StdRng> {
    reader: R,
    origin: PathBuf,
    vocabulary: Arc<VocabularySet>,
    translator: TokenTranslator,
    cache: MentionCache,
    rng: G,
    config: StreamConfig,
    document: DocumentState,
    header: Option<CorpusHeader>,
    buf: String,
    line_number: usize,
    records: u64,
    finished: bool,
}

impl FileStreamer {
    /// Open `path` and stream it with an entropy-seeded random source.
    ///
    /// A missing or unreadable file is reported here, before any record is
    /// requested.
    pub fn open(path: &Path, vocabulary: Arc<VocabularySet>, config: StreamConfig) -> Result<Self> {
        Self::open_with_rng(path, vocabulary, config, StdRng::from_entropy())
    }

    /// Open `path` with a seeded random source, for reproducible output.
    pub fn open_seeded(
        path: &Path,
        vocabulary: Arc<VocabularySet>,
        config: StreamConfig,
        seed: u64,
    ) -> Result<Self> {
        Self::open_with_rng(path, vocabulary, config, StdRng::seed_from_u64(seed))
    }

    fn open_with_rng(
        path: &Path,
        vocabulary: Arc<VocabularySet>,
        config: StreamConfig,
        rng: StdRng,
    ) -> Result<Self> {
        config.validate()?;
        let reader = open_source(path)?;
        CorpusStreamer::from_reader(reader, path, vocabulary, config, rng)
    }
}

impl<R: BufRead, G: Rng> CorpusStreamer<R, G> {
    /// Stream from any line reader. `origin` is only used in error messages.
    pub fn from_reader(
        reader: R,
        origin: impl Into<PathBuf>,
        vocabulary: Arc<VocabularySet>,
        config: StreamConfig,
        rng: G,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            origin: origin.into(),
            vocabulary,
            translator: TokenTranslator::new(config.mention.clone()),
            cache: MentionCache::new(),
            rng,
            config,
            document: DocumentState::new(),
            header: None,
            buf: String::new(),
            line_number: 0,
            records: 0,
            finished: false,
        })
    }

    /// Replace the (empty) mention cache, e.g. to carry one over from a
    /// previous pass.
    pub fn with_cache(mut self, cache: MentionCache) -> Self {
        self.cache = cache;
        self
    }

    /// Parsed corpus header, once a well-formed one has been read.
    pub fn header(&self) -> Option<&CorpusHeader> {
        self.header.as_ref()
    }

    /// The document currently being read.
    pub fn current_document(&self) -> Option<&DocumentHeader> {
        self.document.current()
    }

    /// Label of the document currently being read.
    pub fn current_label(&self) -> Option<&str> {
        self.document.current_label()
    }

    /// Number of document markers read so far.
    pub fn documents_seen(&self) -> usize {
        self.document.documents()
    }

    /// Number of records yielded so far.
    pub fn records_emitted(&self) -> u64 {
        self.records
    }

    /// 1-based number of the last line read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &MentionCache {
        &self.cache
    }

    /// Consume the streamer and keep its mention cache.
    pub fn into_cache(self) -> MentionCache {
        self.cache
    }

    fn handle_line(&mut self, line: &str) -> Result<Option<LabeledRecord>> {
        match classify(line, &self.config) {
            CorpusLine::Blank | CorpusLine::Noise => Ok(None),
            CorpusLine::Header(raw) => {
                self.header = CorpusHeader::parse(raw);
                match &self.header {
                    Some(header) => debug!(?header, "corpus header"),
                    None => debug!(line = self.line_number, "ignoring malformed corpus header"),
                }
                Ok(None)
            }
            CorpusLine::Document(raw) => {
                let header = DocumentHeader::parse(raw, &self.config.document_marker).map_err(
                    |reason| CorpusError::MalformedDocument {
                        path: self.origin.clone(),
                        line: self.line_number,
                        content: raw.to_string(),
                        reason: reason.to_string(),
                    },
                )?;
                let label = self
                    .config
                    .mention
                    .label
                    .document_label(&header.id.to_string(), &header.title);
                debug!(id = header.id, %label, "document start");
                self.document.begin(header, label);
                Ok(None)
            }
            CorpusLine::Content(text) => {
                let mut tokens = Vec::new();
                for raw in text.split_whitespace() {
                    self.translator.translate_into(
                        raw,
                        &self.vocabulary,
                        &mut self.cache,
                        &mut self.rng,
                        &mut tokens,
                    );
                }
                let tags = self.document.next_tags(self.config.tagged_lines);
                Ok(Some(LabeledRecord { tokens, tags }))
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        if self.records > 0 && self.document.documents() == 0 {
            warn!(path = %self.origin.display(), "no document markers found; records are untagged");
        }
        let stats = self.cache.stats();
        info!(
            path = %self.origin.display(),
            lines = self.line_number,
            records = self.records,
            documents = self.document.documents(),
            mentions = stats.entries,
            unresolved = stats.unresolved,
            "finished corpus stream"
        );
    }
}

impl<R: BufRead, G: Rng> Iterator for CorpusStreamer<R, G> {
    type Item = Result<LabeledRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => {
                    self.finish();
                    return None;
                }
                Ok(_) => self.line_number += 1,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(CorpusError::io(&self.origin, err)));
                }
            }

            // Take the buffer so the line can be borrowed while `self` is mutated.
            let buf = std::mem::take(&mut self.buf);
            let line = buf.trim_end_matches(|c: char| c == '\n' || c == '\r');
            let handled = self.handle_line(line);
            self.buf = buf;

            match handled {
                Ok(Some(record)) => {
                    self.records += 1;
                    return Some(Ok(record));
                }
                Ok(None) => continue,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<R: BufRead, G: Rng> FusedIterator for CorpusStreamer<R, G> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use wbcorpus_core::{Normalizer, VocabularyBuilder};

    fn vocab(words: &[&str]) -> Arc<VocabularySet> {
        Arc::new(VocabularySet::from_tokens(
            words.iter().map(|w| (*w, 10)),
            Normalizer::lowercase(),
        ))
    }

    fn stream(corpus: &str, vocabulary: Arc<VocabularySet>) -> Vec<LabeledRecord> {
        streamer(corpus, vocabulary)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    fn streamer(
        corpus: &str,
        vocabulary: Arc<VocabularySet>,
    ) -> CorpusStreamer<&[u8], ChaCha8Rng> {
        CorpusStreamer::from_reader(
            corpus.as_bytes(),
            "corpus.txt",
            vocabulary,
            StreamConfig::default(),
            ChaCha8Rng::seed_from_u64(3),
        )
        .unwrap()
    }

    #[test]
    fn test_end_to_end() {
        let vocabulary = Arc::new(
            VocabularyBuilder::new()
                .min_freq(5)
                .build_reader("w 10 dog\n".as_bytes(), Path::new("dict.txt"))
                .unwrap(),
        );
        let corpus = "@WikiBrainCorpus\ten\tPlain\tWikifier\tnow\n\
                      @WikiBrainDoc\t5\tDog_Breeds\n\
                      dog\ndog\ndog\ndog\ndog\n";

        let records = stream(corpus, vocabulary);
        assert_eq!(records.len(), 5);
        for record in &records {
            assert_eq!(record.tokens, vec!["dog".to_string()]);
            assert_eq!(record.tags, vec!["t:5:Dog_Breeds".to_string()]);
        }
    }

    #[test]
    fn test_document_boundary_reset() {
        let corpus = "@WikiBrainDoc\t1\tFirst\n\
                      a\na\na\na\na\na\n\
                      @WikiBrainDoc\t2\tSecond\n\
                      a\n";

        let records = stream(corpus, vocab(&["a"]));
        assert_eq!(records.len(), 7);
        for record in &records[..5] {
            assert_eq!(record.tags, vec!["t:1:First".to_string()]);
        }
        assert!(records[5].tags.is_empty());
        assert_eq!(records[6].tags, vec!["t:2:Second".to_string()]);
    }

    #[test]
    fn test_title_spaces_become_underscores() {
        let records = stream("@WikiBrainDoc\t7\tDog Breeds of Europe\ndog\n", vocab(&["dog"]));
        assert_eq!(records[0].tags, vec!["t:7:Dog_Breeds_of_Europe".to_string()]);
    }

    #[test]
    fn test_empty_record_pass_through() {
        let corpus = "@WikiBrainDoc\t1\tFirst\nzebra yak\n";
        let records = stream(corpus, vocab(&["dog"]));
        assert_eq!(records.len(), 1);
        assert!(records[0].tokens.is_empty());
        assert_eq!(records[0].tags, vec!["t:1:First".to_string()]);
    }

    #[test]
    fn test_skipped_lines_do_not_advance_window() {
        let corpus = "@WikiBrainDoc\t1\tFirst\n\
                      \n\
                      References\n\
                      thumb|a caption\n\
                      a\na\na\na\na\na\n";
        let records = stream(corpus, vocab(&["a"]));
        assert_eq!(records.len(), 6);
        assert_eq!(records.iter().filter(|r| r.is_tagged()).count(), 5);
    }

    #[test]
    fn test_lines_before_first_document_are_untagged() {
        let records = stream("dog\n@WikiBrainDoc\t1\tFirst\ndog\n", vocab(&["dog"]));
        assert_eq!(records.len(), 2);
        assert!(records[0].tags.is_empty());
        assert_eq!(records[1].tags, vec!["t:1:First".to_string()]);
    }

    #[test]
    fn test_mentions_in_content() {
        let corpus = "@WikiBrainDoc\t1\tPets\nthe Cat:/w/en/123/Cat sat\n";
        let records = stream(corpus, vocab(&["the", "sat"]));
        let tokens = &records[0].tokens;

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], "the");
        assert_eq!(tokens[3], "sat");
        let mut middle = vec![tokens[1].clone(), tokens[2].clone()];
        middle.sort();
        assert_eq!(middle, vec!["Cat".to_string(), "t:123:Cat".to_string()]);
    }

    #[test]
    fn test_cache_spans_the_whole_stream() {
        let corpus = "@WikiBrainDoc\t1\tA\nCat:/w/en/123/Cat\n\
                      @WikiBrainDoc\t2\tB\nKitty:/w/en/123/Cat Dog:/w/en/9\n";
        let mut s = streamer(corpus, vocab(&[]));
        let records: Vec<_> = s.by_ref().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].tokens.len(), 2);

        let stats = s.cache_stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.unresolved, 1);
    }

    #[test]
    fn test_cache_carried_into_next_pass() {
        let corpus = "@WikiBrainDoc\t1\tA\nCat:/w/en/123/Cat dog\n";

        let mut first = streamer(corpus, vocab(&["dog"]));
        let records: Vec<_> = first.by_ref().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(first.records_emitted(), records.len() as u64);
        assert_eq!(first.cache().len(), 1);
        let cache = first.into_cache();

        let mut second = streamer(corpus, vocab(&["dog"])).with_cache(cache);
        let again: Vec<_> = second.by_ref().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(again.len(), 1);

        let stats = second.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(second.records_emitted(), 1);
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let corpus = "dog\n@WikiBrainDoc\t5\ndog\n";
        let mut s = streamer(corpus, vocab(&["dog"]));

        assert!(s.next().unwrap().is_ok());
        match s.next() {
            Some(Err(CorpusError::MalformedDocument { line, path, .. })) => {
                assert_eq!(line, 2);
                assert_eq!(path, PathBuf::from("corpus.txt"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(s.next().is_none());
    }

    #[test]
    fn test_header_and_current_document() {
        let corpus = "@WikiBrainCorpus\tsimple\tPlain\tWikifier\t2014\n@WikiBrainDoc\t42\tAnswer\nx\n";
        let mut s = streamer(corpus, vocab(&[]));
        let record = s.next().unwrap().unwrap();

        assert!(record.tokens.is_empty());
        assert_eq!(s.header().map(|h| h.language.as_str()), Some("simple"));
        assert_eq!(s.current_document().map(|d| d.id), Some(42));
        assert_eq!(s.current_label(), Some("t:42:Answer"));
        assert_eq!(s.documents_seen(), 1);
        assert_eq!(s.line_number(), 3);
    }

    #[test]
    fn test_crlf_lines() {
        let records = stream("@WikiBrainDoc\t3\tWin\r\ndog\r\n", vocab(&["dog"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tags, vec!["t:3:Win".to_string()]);
        assert_eq!(records[0].tokens, vec!["dog".to_string()]);
    }

    #[test]
    fn test_open_missing_file_fails_fast() {
        let result = FileStreamer::open(
            Path::new("/nonexistent/corpus.txt"),
            vocab(&[]),
            StreamConfig::default(),
        );
        assert!(matches!(result, Err(CorpusError::Io { .. })));
    }

    #[test]
    fn test_open_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "@WikiBrainDoc\t1\tOne\ndog cat\n").unwrap();

        let records: Vec<_> = FileStreamer::open_seeded(
            file.path(),
            vocab(&["dog"]),
            StreamConfig::default(),
            11,
        )
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();

        assert_eq!(records, vec![LabeledRecord::new(
            vec!["dog".to_string()],
            vec!["t:1:One".to_string()],
        )]);
    }

    #[test]
    fn test_custom_window() {
        let config = StreamConfig {
            tagged_lines: 2,
            ..Default::default()
        };
        let records: Vec<_> = CorpusStreamer::from_reader(
            "@WikiBrainDoc\t1\tA\nx\nx\nx\n".as_bytes(),
            "corpus.txt",
            vocab(&[]),
            config,
            ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();

        let tagged: Vec<bool> = records.iter().map(|r| r.is_tagged()).collect();
        assert_eq!(tagged, vec![true, true, false]);
    }
}
