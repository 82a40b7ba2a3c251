use std::{path::Path, time::Duration};

use crate::configuration::{
    error::ConfigurationError,
    traits::ResolvableConfigurationWithContext,
    utilities::resolve_relative_path,
};


/// TLS for the metrics endpoint. At most one of the two sources is expected
/// to be in use; an empty configuration means plain HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsTlsConfiguration {
    pub filesystem: FilesystemServingConfiguration,

    pub dynamic: DynamicServingConfiguration,
}

/// Certificate and key loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilesystemServingConfiguration {
    pub cert_file: String,

    pub key_file: String,
}

/// Self-signed serving certificate kept in a Kubernetes secret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicServingConfiguration {
    pub secret_namespace: String,

    pub secret_name: String,

    pub dns_names: Vec<String>,

    pub leaf_duration: Duration,
}


impl ResolvableConfigurationWithContext for MetricsTlsConfiguration {
    type Context = Path;
    type Resolved = MetricsTlsConfiguration;

    fn resolve(mut self, context: &Self::Context) -> Result<Self::Resolved, ConfigurationError> {
        resolve_relative_path(context, &mut self.filesystem.cert_file)?;
        resolve_relative_path(context, &mut self.filesystem.key_file)?;

        Ok(self)
    }
}
