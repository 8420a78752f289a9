use thiserror::Error;

use crate::arn::{Section, ARN_SECTIONS};

/// Failure to split a string into the six ARN sections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid prefix")]
    InvalidPrefix,

    #[error("not enough sections: expected {expected}, found {0}", expected = ARN_SECTIONS)]
    InvalidSectionCount(usize),
}

#[derive(Error, Debug)]
pub enum ArnLikeError {
    #[error("could not parse input value: {0}")]
    Value(#[source] ParseError),

    #[error("could not parse pattern: {0}")]
    Pattern(#[source] ParseError),

    #[error("could not compile pattern field `{field}` ({section}): {source}")]
    PatternCompilation {
        section: Section,
        field: String,
        #[source]
        source: regex::Error,
    },
}

impl ArnLikeError {
    /// The parse failure behind a `Value` or `Pattern` error.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            ArnLikeError::Value(e) | ArnLikeError::Pattern(e) => Some(e),
            ArnLikeError::PatternCompilation { .. } => None,
        }
    }

    pub fn is_invalid_prefix(&self) -> bool {
        matches!(self.parse_error(), Some(ParseError::InvalidPrefix))
    }

    pub fn is_invalid_section_count(&self) -> bool {
        matches!(self.parse_error(), Some(ParseError::InvalidSectionCount(_)))
    }
}

pub type Result<T> = std::result::Result<T, ArnLikeError>;
