//! Per-token translation: mention resolution plus vocabulary filtering.

use super::cache::MentionCache;
use super::syntax::MentionSyntax;
use crate::vocab::VocabularySet;
use rand::Rng;

/// Translates raw corpus tokens into zero, one or two output tokens.
///
/// * A resolvable mention yields its surface form and its label, in a
///   random order (each order with probability 1/2).
/// * An unresolvable mention falls back to its surface form, kept only if
///   the vocabulary contains it.
/// * A plain token is kept, normalized, only if the vocabulary contains it.
#[derive(Debug, Clone, Default)]
pub struct TokenTranslator {
    syntax: MentionSyntax,
}

impl TokenTranslator {
    pub fn new(syntax: MentionSyntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &MentionSyntax {
        &self.syntax
    }

    /// Translate one raw token, appending the result to `out`.
    ///
    /// Normalization follows the vocabulary's own normalizer.
    pub fn translate_into<G: Rng + ?Sized>(
        &self,
        raw: &str,
        vocabulary: &VocabularySet,
        cache: &mut MentionCache,
        rng: &mut G,
        out: &mut Vec<String>,
    ) {
        let surface = match self.syntax.split(raw) {
            Some((surface, path)) => {
                let syntax = &self.syntax;
                if let Some(label) = cache.get_or_resolve(path, |p| syntax.resolve(p)) {
                    let label = label.to_string();
                    if rng.gen_bool(0.5) {
                        out.push(surface.to_string());
                        out.push(label);
                    } else {
                        out.push(label);
                        out.push(surface.to_string());
                    }
                    return;
                }
                surface
            }
            None => raw,
        };

        if let Some(normalized) = vocabulary.lookup(surface) {
            out.push(normalized.into_owned());
        }
    }

    /// Translate one raw token into a fresh vector.
    pub fn translate<G: Rng + ?Sized>(
        &self,
        raw: &str,
        vocabulary: &VocabularySet,
        cache: &mut MentionCache,
        rng: &mut G,
    ) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        self.translate_into(raw, vocabulary, cache, rng, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Normalizer;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn vocab(words: &[&str]) -> VocabularySet {
        VocabularySet::from_tokens(words.iter().map(|w| (*w, 10)), Normalizer::lowercase())
    }

    #[test]
    fn test_resolved_mention_set_is_stable() {
        let translator = TokenTranslator::default();
        let vocabulary = vocab(&[]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut surface_first = 0;
        let trials = 2000;
        for _ in 0..trials {
            let mut cache = MentionCache::new();
            let out = translator.translate("Cat:/w/en/123/Cat", &vocabulary, &mut cache, &mut rng);

            let mut sorted = out.clone();
            sorted.sort();
            assert_eq!(sorted, vec!["Cat".to_string(), "t:123:Cat".to_string()]);
            if out[0] == "Cat" {
                surface_first += 1;
            }
        }

        // Both orders show up in roughly equal proportion.
        assert!(surface_first > trials * 2 / 5, "{surface_first}");
        assert!(surface_first < trials * 3 / 5, "{surface_first}");
    }

    #[test]
    fn test_cache_reuse_across_surfaces() {
        let translator = TokenTranslator::default();
        let vocabulary = vocab(&[]);
        let mut cache = MentionCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let first = translator.translate("Cat:/w/en/123/Cat", &vocabulary, &mut cache, &mut rng);
        let second = translator.translate("Kitty:/w/en/123/Cat", &vocabulary, &mut cache, &mut rng);

        assert!(first.contains(&"t:123:Cat".to_string()));
        assert!(second.contains(&"t:123:Cat".to_string()));
        assert!(second.contains(&"Kitty".to_string()));

        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_unresolved_mention_falls_back_to_surface() {
        let translator = TokenTranslator::default();
        let vocabulary = vocab(&["cat"]);
        let mut cache = MentionCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let out = translator.translate("Cat:/w/en/123", &vocabulary, &mut cache, &mut rng);
        assert_eq!(out, vec!["cat".to_string()]);
        assert_eq!(cache.get("en/123"), Some(None));

        let out = translator.translate("Dog:/w/en/124", &vocabulary, &mut cache, &mut rng);
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_numeric_id_is_unresolved() {
        let translator = TokenTranslator::default();
        let vocabulary = vocab(&["cat"]);
        let mut cache = MentionCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let out = translator.translate("Cat:/w/en/abc/Cat", &vocabulary, &mut cache, &mut rng);
        assert_eq!(out, vec!["cat".to_string()]);
        assert_eq!(cache.get("en/abc/Cat"), Some(None));

        let out = translator.translate("x:/w/en//", &vocabulary, &mut cache, &mut rng);
        assert!(out.is_empty());
        assert_eq!(cache.stats().unresolved, 2);
    }

    #[test]
    fn test_custom_syntax() {
        let syntax = MentionSyntax {
            marker: "|@".to_string(),
            ..MentionSyntax::default()
        };
        let translator = TokenTranslator::new(syntax);
        assert_eq!(translator.syntax().marker, "|@");

        let vocabulary = vocab(&[]);
        let mut cache = MentionCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut out = translator.translate("Cat|@en/7/Cat", &vocabulary, &mut cache, &mut rng);
        out.sort();
        assert_eq!(out, vec!["Cat".to_string(), "t:7:Cat".to_string()]);
    }

    #[test]
    fn test_plain_token_filtering() {
        let translator = TokenTranslator::default();
        let vocabulary = vocab(&["dog"]);
        let mut cache = MentionCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(
            translator.translate("Dog", &vocabulary, &mut cache, &mut rng),
            vec!["dog".to_string()]
        );
        assert!(translator
            .translate("zebra", &vocabulary, &mut cache, &mut rng)
            .is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_marker_at_start_is_plain_token() {
        let translator = TokenTranslator::default();
        let vocabulary = vocab(&[]);
        let mut cache = MentionCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let out = translator.translate(":/w/en/123/Cat", &vocabulary, &mut cache, &mut rng);
        assert!(out.is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_fixed_seed_hits_both_orders() {
        let translator = TokenTranslator::default();
        let vocabulary = vocab(&[]);
        let mut cache = MentionCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut seen_surface_first = false;
        let mut seen_label_first = false;
        for _ in 0..64 {
            let out = translator.translate("Cat:/w/en/123/Cat", &vocabulary, &mut cache, &mut rng);
            if out[0] == "Cat" {
                seen_surface_first = true;
            } else {
                seen_label_first = true;
            }
        }
        assert!(seen_surface_first && seen_label_first);
    }
}
