use thiserror::Error;

use crate::scanpath::Fixation;

/// Which side of a pairwise comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSide {
    First,
    Second,
}

impl std::fmt::Display for PathSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSide::First => write!(f, "first"),
            PathSide::Second => write!(f, "second"),
        }
    }
}

/// Errors raised by the comparison and Forrest layers.
#[derive(Debug, Error, PartialEq)]
pub enum MultiMatchError {
    #[error("{path} scanpath has {fixations} fixation(s), at least {required} required")]
    InsufficientData {
        path: PathSide,
        fixations: usize,
        required: usize,
    },

    #[error("{path} scanpath has an invalid fixation at index {index}: {fixation:?}")]
    InvalidFixation {
        path: PathSide,
        index: usize,
        fixation: Fixation,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl MultiMatchError {
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, MultiMatchError::InsufficientData { .. })
    }
}

pub type Result<T> = std::result::Result<T, MultiMatchError>;
