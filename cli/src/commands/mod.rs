//! CLI commands for wbcorpus.

pub mod export;
pub mod stats;
pub mod vocab;

pub use export::ExportCommand;
pub use stats::StatsCommand;
pub use vocab::VocabCommand;

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use wbcorpus_core::{NormalizationForm, VocabularyBuilder};

/// Unicode normalization applied to dictionary words and corpus tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    #[default]
    None,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl From<FormArg> for NormalizationForm {
    fn from(form: FormArg) -> Self {
        match form {
            FormArg::None => NormalizationForm::None,
            FormArg::Nfc => NormalizationForm::NFC,
            FormArg::Nfd => NormalizationForm::NFD,
            FormArg::Nfkc => NormalizationForm::NFKC,
            FormArg::Nfkd => NormalizationForm::NFKD,
        }
    }
}

/// Options shared by every command that builds a vocabulary.
#[derive(Args, Debug, Clone)]
pub struct VocabularyArgs {
    /// Dictionary file (`w <count> <word>` lines)
    #[arg(short, long)]
    pub dictionary: PathBuf,

    /// Minimum aggregated count for a word to be kept
    #[arg(long, default_value_t = 5)]
    pub min_freq: u64,

    /// Keep case instead of lower-casing
    #[arg(long, default_value_t = false)]
    pub no_lower: bool,

    /// Keep only the N most frequent words
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Unicode normalization form, applied before lower-casing
    #[arg(long, value_enum, default_value_t = FormArg::None)]
    pub form: FormArg,
}

impl VocabularyArgs {
    pub fn builder(&self) -> VocabularyBuilder {
        VocabularyBuilder::new()
            .min_freq(self.min_freq)
            .lower(!self.no_lower)
            .max_words(self.max_words)
            .normalization_form(self.form.into())
    }
}
