use thiserror::Error;

#[derive(Error, Debug)]
pub enum KpiError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Failed to format {input}: {message}")]
    Format { input: String, message: String },

    #[error("Text measurement failed for {text:?}: {message}")]
    Measurement { text: String, message: String },

    #[error("Malformed payload: {0}")]
    Schema(String),

    #[error("Invalid container geometry: {0}")]
    Geometry(String),

    #[error("Invalid format spec: '{0}'")]
    InvalidFormatSpec(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KpiError {
    /// Stable variant name, used in machine-readable error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InsufficientData(_) => "InsufficientData",
            Self::Format { .. } => "Format",
            Self::Measurement { .. } => "Measurement",
            Self::Schema(_) => "Schema",
            Self::Geometry(_) => "Geometry",
            Self::InvalidFormatSpec(_) => "InvalidFormatSpec",
            Self::Config(_) => "Config",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::Json(_) => "Json",
        }
    }

    /// Build a formatting failure for `input`.
    pub fn format(input: impl ToString, message: impl Into<String>) -> Self {
        Self::Format {
            input: input.to_string(),
            message: message.into(),
        }
    }

    /// Build a measurement failure for `text`.
    pub fn measurement(text: &str, message: impl Into<String>) -> Self {
        Self::Measurement {
            text: text.to_string(),
            message: message.into(),
        }
    }

    /// Whether the error came from configuration rather than the data being rendered.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::TomlParse(_) | Self::InvalidFormatSpec(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, KpiError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
