//! Error types for the colorops library

use thiserror::Error;

/// Result type alias for colorops operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error taxonomy for color construction, parsing and configuration
#[derive(Error, Debug)]
pub enum ColorError {
    /// A component value is outside its type's valid numeric range
    #[error("{component} must be in the {min} to {max} range (got {value})")]
    Range {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Input text did not match any recognized color notation
    #[error("Invalid string format {input:?}")]
    Format { input: String },

    /// An operation received a structurally invalid argument
    #[error("Invalid argument: {message}")]
    Argument { message: String },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create a range error for a named component
    pub fn range(component: &'static str, value: impl Into<f64>, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        Self::Range {
            component,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create a format error for unparseable input
    pub fn format(input: impl Into<String>) -> Self {
        Self::Format { input: input.into() }
    }

    /// Create an argument error
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error was caused by caller-supplied values rather than I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ColorError::Range { .. } | ColorError::Format { .. } | ColorError::Argument { .. }
        )
    }
}
