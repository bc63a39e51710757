//! Token normalization shared by vocabulary construction and lookup.
//!
//! A [`Normalizer`] applies an optional Unicode normalization form followed by
//! optional lowercasing. The same value is stored inside a built vocabulary so
//! that lookups always fold tokens exactly the way the dictionary was folded.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use unicode_normalization::{is_nfc_quick, is_nfkc_quick, IsNormalized, UnicodeNormalization};

/// Unicode normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizationForm {
    /// Canonical composition
    NFC,
    /// Canonical decomposition
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
    /// No normalization
    #[default]
    None,
}

impl FromStr for NormalizationForm {
    type Err = String;

    /// Parse a form name, case-insensitively (`nfc`, `nfkd`, `none`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nfc" => Ok(NormalizationForm::NFC),
            "nfd" => Ok(NormalizationForm::NFD),
            "nfkc" => Ok(NormalizationForm::NFKC),
            "nfkd" => Ok(NormalizationForm::NFKD),
            "none" => Ok(NormalizationForm::None),
            other => Err(format!("unknown normalization form {other:?}")),
        }
    }
}

/// Token normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Normalizer {
    /// Normalization form to apply
    pub form: NormalizationForm,
    /// Lowercase after normalizing
    pub lower: bool,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm, lower: bool) -> Self {
        Self { form, lower }
    }

    /// A normalizer that only lowercases.
    pub fn lowercase() -> Self {
        Self::new(NormalizationForm::None, true)
    }

    /// A normalizer that leaves tokens untouched.
    pub fn identity() -> Self {
        Self::new(NormalizationForm::None, false)
    }

    /// Normalize a token, borrowing when nothing changes.
    pub fn normalize<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let formed: Cow<'a, str> = match self.form {
            NormalizationForm::None => Cow::Borrowed(token),
            NormalizationForm::NFC => {
                if is_nfc_quick(token.chars()) == IsNormalized::Yes {
                    Cow::Borrowed(token)
                } else {
                    Cow::Owned(token.nfc().collect())
                }
            }
            NormalizationForm::NFKC => {
                if is_nfkc_quick(token.chars()) == IsNormalized::Yes {
                    Cow::Borrowed(token)
                } else {
                    Cow::Owned(token.nfkc().collect())
                }
            }
            NormalizationForm::NFD => Cow::Owned(token.nfd().collect()),
            NormalizationForm::NFKD => Cow::Owned(token.nfkd().collect()),
        };

        if !self.lower {
            return formed;
        }

        // Titlecase letters are not uppercase but still fold.
        let lowered = formed.to_lowercase();
        if lowered == formed.as_ref() {
            formed
        } else {
            Cow::Owned(lowered)
        }
    }

    /// Check if normalization changes anything at all.
    pub fn is_enabled(&self) -> bool {
        self.lower || self.form != NormalizationForm::None
    }
}
