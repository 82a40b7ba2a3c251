//! Turns raw YAML/JSON bytes into a [`ControllerConfiguration`] and back.

use serde::Deserialize;
use tracing::debug;

use super::{
    error::ConfigurationError,
    structure::ControllerConfiguration,
    traits::ResolvableConfiguration,
    versions::{ApiVersion, VersionedConfiguration, KIND},
};


/// The identifying header of a document. Everything else is ignored
/// on this first pass.
#[derive(Deserialize, Debug)]
struct TypeMeta {
    #[serde(rename = "apiVersion")]
    api_version: Option<String>,

    kind: Option<String>,
}

fn missing_header_field(field: &str) -> ConfigurationError {
    ConfigurationError::MalformedDocument {
        reason: format!("missing required field `{field}`"),
        source: None,
    }
}


/// Decodes a configuration document.
///
/// The `kind` must be [`KIND`] and the `apiVersion` one of [`ApiVersion::ALL`].
/// The document is then decoded strictly into the schema of that version,
/// defaulted, and converted into the current configuration shape.
pub fn decode(bytes: &[u8]) -> Result<ControllerConfiguration, ConfigurationError> {
    let type_meta: TypeMeta =
        serde_yaml::from_slice(bytes).map_err(ConfigurationError::malformed)?;

    let kind = type_meta.kind.ok_or_else(|| missing_header_field("kind"))?;
    if kind != KIND {
        return Err(ConfigurationError::UnexpectedKind {
            found: kind,
            expected: KIND,
        });
    }

    let api_version = type_meta
        .api_version
        .ok_or_else(|| missing_header_field("apiVersion"))?
        .parse::<ApiVersion>()?;

    debug!(%api_version, "Decoding configuration document.");

    VersionedConfiguration::decode(api_version, bytes)?.resolve()
}


/// Represents `configuration` as a document of the latest supported version.
pub fn encode(configuration: &ControllerConfiguration) -> VersionedConfiguration {
    VersionedConfiguration::encode(configuration, ApiVersion::LATEST)
}

/// Encodes `configuration` as a YAML document of the latest supported version.
pub fn encode_yaml(configuration: &ControllerConfiguration) -> Result<String, ConfigurationError> {
    serde_yaml::to_string(&encode(configuration)).map_err(|error| {
        ConfigurationError::EncodeFailure {
            format: "YAML",
            reason: error.to_string(),
        }
    })
}

/// Encodes `configuration` as a pretty-printed JSON document of the latest supported version.
pub fn encode_json(configuration: &ControllerConfiguration) -> Result<String, ConfigurationError> {
    serde_json::to_string_pretty(&encode(configuration)).map_err(|error| {
        ConfigurationError::EncodeFailure {
            format: "JSON",
            reason: error.to_string(),
        }
    })
}
