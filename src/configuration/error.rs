use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;


/// All errors that can occur while loading, decoding or encoding
/// a controller configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationError {
    /// The configuration file path was empty or could not be made absolute.
    #[error("invalid configuration file path: {reason}")]
    #[diagnostic(code(configfile::invalid_path))]
    InvalidPath { reason: String },

    /// The injected read function failed.
    #[error("failed to read configuration file {}", path.display())]
    #[diagnostic(code(configfile::read_failure))]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a valid YAML/JSON document, or a value does not
    /// match the type declared for its field.
    #[error("malformed configuration document: {reason}")]
    #[diagnostic(
        code(configfile::malformed_document),
        help(
            "the document must be a YAML or JSON mapping with `apiVersion` and `kind`, \
             using only known fields with values of their declared types"
        )
    )]
    MalformedDocument {
        reason: String,
        #[source]
        source: Option<serde_yaml::Error>,
    },

    #[error("unexpected kind \"{found}\", expected \"{expected}\"")]
    #[diagnostic(code(configfile::unexpected_kind))]
    UnexpectedKind {
        found: String,
        expected: &'static str,
    },

    #[error("unsupported apiVersion \"{found}\" (supported: {supported})")]
    #[diagnostic(code(configfile::unsupported_api_version))]
    UnsupportedApiVersion { found: String, supported: String },

    /// A decoded value cannot be represented in the current configuration shape.
    #[error("failed to convert field {field}: {reason}")]
    #[diagnostic(code(configfile::conversion))]
    ConversionError { field: &'static str, reason: String },

    #[error("failed to encode configuration as {format}: {reason}")]
    #[diagnostic(code(configfile::encode))]
    EncodeFailure {
        format: &'static str,
        reason: String,
    },
}

impl ConfigurationError {
    pub(crate) fn malformed(source: serde_yaml::Error) -> Self {
        Self::MalformedDocument {
            reason: source.to_string(),
            source: Some(source),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_document_help_describes_the_expected_document() {
        let error = ConfigurationError::MalformedDocument {
            reason: "missing required field `kind`".to_string(),
            source: None,
        };

        let help = error.help().unwrap().to_string();
        assert!(help.contains("`apiVersion` and `kind`"));
        assert!(help.contains("known fields"));
        assert!(!help.contains("typos"));
    }
}
