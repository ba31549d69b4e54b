use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::language::Language;

/// One line of user text and the language it was detected as.
#[derive(Debug, Clone)]
pub struct RawInput {
    pub text: String,
    pub language: Language,
}

impl RawInput {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self { text: text.into(), language }
    }

    /// Build an input with the language detected from the text itself.
    pub fn detect(text: impl Into<String>) -> Self {
        let text = text.into();
        let language = Language::detect(&text);
        Self { text, language }
    }
}

/// A validated flight search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Origin IATA code, 3 uppercase letters
    pub from: String,
    /// Destination IATA code, 3 uppercase letters
    pub to: String,
    /// Canonical `DD/MM/YYYY`
    pub date: String,
    /// Date exactly as the user typed it (after digit folding)
    pub original_date: String,
    pub travel_date: NaiveDate,
}

impl ParsedQuery {
    pub fn date_was_corrected(&self) -> bool {
        self.original_date != self.date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseFailure {
    /// Line grammar mismatch, nonexistent date, or unresolved airport
    #[error("input is malformed")]
    Malformed,
    #[error("travel date is in the past")]
    PastDate,
    #[error("input could not be processed")]
    ProcessingError,
}

impl ParseFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            ParseFailure::Malformed => "malformed",
            ParseFailure::PastDate => "past_date",
            ParseFailure::ProcessingError => "processing_error",
        }
    }
}
