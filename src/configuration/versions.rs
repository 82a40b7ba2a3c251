use std::{fmt, str::FromStr};

use serde::Serialize;

use super::{
    error::ConfigurationError,
    structure::ControllerConfiguration,
    traits::ResolvableConfiguration,
};

pub mod v1alpha1;


/// The only `kind` a controller configuration document may have.
pub const KIND: &str = "ControllerConfiguration";

/// API group shared by every supported `apiVersion`.
pub const GROUP: &str = "controller.config.cert-manager.io";



/// Every `apiVersion` this crate knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1Alpha1,
}

impl ApiVersion {
    pub const ALL: &'static [ApiVersion] = &[ApiVersion::V1Alpha1];

    /// Version used when encoding a configuration back into a document.
    pub const LATEST: ApiVersion = ApiVersion::V1Alpha1;

    /// The version component, without the group.
    pub fn version(self) -> &'static str {
        match self {
            ApiVersion::V1Alpha1 => "v1alpha1",
        }
    }

    fn supported_list() -> String {
        ApiVersion::ALL
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", GROUP, self.version())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ApiVersion::ALL
            .iter()
            .copied()
            .find(|api_version| api_version.to_string() == value)
            .ok_or_else(|| ConfigurationError::UnsupportedApiVersion {
                found: value.to_string(),
                supported: ApiVersion::supported_list(),
            })
    }
}



/// A fully decoded (and defaulted) document of one specific `apiVersion`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VersionedConfiguration {
    V1Alpha1(v1alpha1::ControllerConfiguration),
}

impl VersionedConfiguration {
    /// Strictly decodes `bytes` as the schema of `api_version`, then applies
    /// that version's defaults to every key the document left out or set to null.
    pub fn decode(api_version: ApiVersion, bytes: &[u8]) -> Result<Self, ConfigurationError> {
        match api_version {
            ApiVersion::V1Alpha1 => {
                let mut configuration: v1alpha1::ControllerConfiguration =
                    serde_yaml::from_slice(bytes).map_err(ConfigurationError::malformed)?;
                configuration.set_defaults();

                Ok(VersionedConfiguration::V1Alpha1(configuration))
            }
        }
    }

    /// Represents `configuration` as a document of `api_version`.
    pub fn encode(configuration: &ControllerConfiguration, api_version: ApiVersion) -> Self {
        match api_version {
            ApiVersion::V1Alpha1 => VersionedConfiguration::V1Alpha1(configuration.into()),
        }
    }

    pub fn api_version(&self) -> ApiVersion {
        match self {
            VersionedConfiguration::V1Alpha1(_) => ApiVersion::V1Alpha1,
        }
    }
}

impl ResolvableConfiguration for VersionedConfiguration {
    type Resolved = ControllerConfiguration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationError> {
        match self {
            VersionedConfiguration::V1Alpha1(configuration) => configuration.resolve(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_version_parses_its_own_display() {
        for api_version in ApiVersion::ALL {
            assert_eq!(
                api_version.to_string().parse::<ApiVersion>().unwrap(),
                *api_version
            );
        }
    }

    #[test]
    fn unknown_api_versions_are_rejected() {
        for candidate in [
            "",
            "v1alpha1",
            "controller.config.cert-manager.io/v1",
            "webhook.config.cert-manager.io/v1alpha1",
        ] {
            assert!(matches!(
                candidate.parse::<ApiVersion>(),
                Err(ConfigurationError::UnsupportedApiVersion { .. })
            ));
        }
    }
}
