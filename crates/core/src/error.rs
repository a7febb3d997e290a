use std::fmt::Display;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown parameter `{}`", .0)]
    UnknownParameter(String),

    #[error("No value was given to parameter `{}`", .0)]
    MissingValue(String),

    #[error("Parameter `{}` {}", .name, .reason)]
    UnexpectedValue { name: String, reason: String },

    #[error("Value `{}` given to parameter `{}` is not a valid {}", .value, .name, .type_name)]
    ConversionFailure {
        name: String,
        value: String,
        type_name: String,
    },

    #[error("Value `{}` given to parameter `{}` is not between {} and {}", .value, .name, .min, .max)]
    OutOfRange {
        name: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Every parameter needs at least one name")]
    NoAliases,

    #[error("Parameter names may not be empty")]
    EmptyAlias,

    #[error("Parameter name `{}` is registered more than once", .0)]
    DuplicateAlias(String),
}

impl Error {
    pub fn value_given_to_flag(name: &str) -> Self {
        Self::UnexpectedValue {
            name: name.to_string(),
            reason: "does not take a value".to_string(),
        }
    }

    pub fn value_required_in_cluster(name: &str) -> Self {
        Self::UnexpectedValue {
            name: name.to_string(),
            reason: "needs a value, so it can only be the last letter of a short flag group"
                .to_string(),
        }
    }

    pub fn conversion_failure(name: &str, value: &str, type_name: String) -> Self {
        Self::ConversionFailure {
            name: name.to_string(),
            value: value.to_string(),
            type_name,
        }
    }

    pub fn out_of_range<T: Display>(name: &str, value: &str, min: &T, max: &T) -> Self {
        Self::OutOfRange {
            name: name.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Whether this error came from the command line itself rather than from
    /// how the parser was put together.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::UnknownParameter(_)
                | Self::MissingValue(_)
                | Self::UnexpectedValue { .. }
                | Self::ConversionFailure { .. }
                | Self::OutOfRange { .. }
        )
    }
}
