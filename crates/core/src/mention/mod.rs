//! Inline entity-mention handling.
//!
//! Tokens such as `Cat:/w/en/123/Cat` carry an entity path after the
//! mention marker. The [`TokenTranslator`] resolves that path into a
//! synthetic label (memoized in a [`MentionCache`]) and filters everything
//! else through the vocabulary.

pub mod cache;
pub mod syntax;
pub mod translator;

pub use cache::{CacheStats, MentionCache};
pub use syntax::{EntityPath, LabelFormat, MentionSyntax};
pub use translator::TokenTranslator;
