use thiserror::Error;

/// Portfolio builder error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown field '{field}' for template {template}")]
    UnknownField { template: String, field: String },

    #[error("Field '{field}' ({kind}): {message}")]
    FieldKind {
        field: String,
        kind: String,
        message: String,
    },

    #[error("Index {index} out of range for '{field}' (len {len})")]
    IndexOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for portfolio builder operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create an unknown field error
    pub fn unknown_field(template: impl Into<String>, field: impl Into<String>) -> Self {
        Error::UnknownField {
            template: template.into(),
            field: field.into(),
        }
    }

    /// Create a field kind mismatch error
    pub fn field_kind(
        field: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::FieldKind {
            field: field.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an archive error
    pub fn archive(msg: impl Into<String>) -> Self {
        Error::Archive(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

#[cfg(feature = "archive")]
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Archive(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_unknown_template_display() {
        let err = Error::UnknownTemplate("retro".to_string());
        assert_eq!(err.to_string(), "Unknown template: retro");
    }

    #[test]
    fn test_unknown_field_display() {
        let err = Error::unknown_field("codecraft", "twitter");
        assert_eq!(
            err.to_string(),
            "Unknown field 'twitter' for template codecraft"
        );
    }

    #[test]
    fn test_field_kind_display() {
        let err = Error::field_kind("skills", "array", "expected a text field");
        assert_eq!(
            err.to_string(),
            "Field 'skills' (array): expected a text field"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = Error::IndexOutOfRange {
            field: "projects".to_string(),
            index: 3,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "Index 3 out of range for 'projects' (len 1)"
        );
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("brand must not be empty");
        assert_eq!(
            err.to_string(),
            "Config validation error: brand must not be empty"
        );
    }

    #[test]
    fn test_other_error() {
        let err = Error::other("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
