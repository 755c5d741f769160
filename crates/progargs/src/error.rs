//! Error types for declaration, parsing and lookup.

use crate::value::ValueType;
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, ArgError>;

/// Every usage error the registry can report.
///
/// None of these are retryable: the operation that produced one has already
/// stopped, and earlier mutations of the same call are kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// A short or long name was declared twice.
    #[error("parameter '{0}' already defined")]
    DuplicateName(String),

    /// A declaration used an empty long name.
    #[error("parameter declared without a long name (short name '{short}')")]
    InvalidName { short: String },

    /// A flag or lookup referenced a name that was never declared.
    #[error("parameter '{0}' not found")]
    UnknownName(String),

    /// A flag was the last token, with nothing left to serve as its value.
    #[error("missing value for '{0}'")]
    MissingValue(String),

    #[error("parameter '{0}' cannot be set more than once")]
    AlreadySet(String),

    #[error("value '{value}' for parameter '{name}' cannot be converted to {expected}")]
    ConversionFailed {
        name: String,
        value: String,
        expected: ValueType,
    },

    #[error("parameter '{0}' is required but not set")]
    MissingRequired(String),

    /// A typed read asked for a type other than the declared one.
    #[error("parameter '{name}' holds {declared}, not {requested}")]
    TypeMismatch {
        name: String,
        declared: ValueType,
        requested: ValueType,
    },
}

impl ArgError {
    /// Emit the error to the logging sink and hand it back for propagation.
    pub(crate) fn logged(self) -> Self {
        tracing::error!(parameter = self.name(), "{self}");
        self
    }

    /// Name of the argument (or flag token) the error is about.
    pub fn name(&self) -> &str {
        match self {
            Self::DuplicateName(name)
            | Self::UnknownName(name)
            | Self::MissingValue(name)
            | Self::AlreadySet(name)
            | Self::MissingRequired(name) => name,
            Self::InvalidName { short } => short,
            Self::ConversionFailed { name, .. } | Self::TypeMismatch { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let err = ArgError::ConversionFailed {
            name: "ratio".to_string(),
            value: "abc".to_string(),
            expected: ValueType::F64,
        };
        assert_eq!(
            err.to_string(),
            "value 'abc' for parameter 'ratio' cannot be converted to f64"
        );
        assert_eq!(err.name(), "ratio");

        let err = ArgError::MissingRequired("input".to_string());
        assert_eq!(err.to_string(), "parameter 'input' is required but not set");
    }
}
