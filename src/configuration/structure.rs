use std::{collections::BTreeMap, path::Path};

pub use self::acme::{AcmeDns01Configuration, AcmeHttp01Configuration};
pub use self::ingress_shim::IngressShimConfiguration;
pub use self::leader_election::LeaderElectionConfiguration;
pub use self::metrics_tls::{
    DynamicServingConfiguration,
    FilesystemServingConfiguration,
    MetricsTlsConfiguration,
};
use super::{
    error::ConfigurationError,
    traits::ResolvableConfigurationWithContext,
    utilities::resolve_relative_path,
};

mod acme;
mod ingress_shim;
mod leader_election;
mod metrics_tls;



/// The entire controller configuration, independent of the `apiVersion`
/// it was loaded from.
///
/// [`ControllerConfiguration::new`] gives a zero-valued instance. After a
/// successful load every field holds either the value from the document
/// or the default of the document's `apiVersion`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerConfiguration {
    /// Address of the Kubernetes API server, overriding the one in the kubeconfig.
    pub api_server_host: String,

    /// Path to a kubeconfig file. Absolute after loading (unless empty).
    pub kube_config: String,

    pub kubernetes_api_qps: f32,

    pub kubernetes_api_burst: i32,

    /// Namespace to limit the controller to. Empty means all namespaces.
    pub namespace: String,

    /// Namespace in which cluster-scoped resources keep their secrets.
    pub cluster_resource_namespace: String,

    pub leader_election: LeaderElectionConfiguration,

    /// Controllers to enable. `*` enables all default controllers,
    /// a `-` prefix disables one.
    pub controllers: Vec<String>,

    pub issuer_ambient_credentials: bool,

    pub cluster_issuer_ambient_credentials: bool,

    pub enable_certificate_owner_ref: bool,

    pub copied_annotation_prefixes: Vec<String>,

    pub number_of_concurrent_workers: i32,

    pub max_concurrent_challenges: i32,

    pub metrics_listen_address: String,

    pub metrics_tls: MetricsTlsConfiguration,

    pub healthz_listen_address: String,

    pub pprof_address: String,

    pub enable_pprof: bool,

    pub ingress_shim: IngressShimConfiguration,

    pub acme_http01: AcmeHttp01Configuration,

    pub acme_dns01: AcmeDns01Configuration,

    pub feature_gates: BTreeMap<String, bool>,
}

impl ControllerConfiguration {
    /// Zero-valued configuration, meant to be filled by a loader.
    pub fn new() -> Self {
        Self::default()
    }
}


/// Resolves every path-valued field against the directory containing
/// the configuration file.
impl ResolvableConfigurationWithContext for ControllerConfiguration {
    type Context = Path;
    type Resolved = ControllerConfiguration;

    fn resolve(mut self, context: &Self::Context) -> Result<Self::Resolved, ConfigurationError> {
        resolve_relative_path(context, &mut self.kube_config)?;

        let metrics_tls = self.metrics_tls.resolve(context)?;

        Ok(Self {
            metrics_tls,
            ..self
        })
    }
}
