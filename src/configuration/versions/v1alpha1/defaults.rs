use std::{collections::BTreeMap, time::Duration};

use super::{
    AcmeDns01Config,
    AcmeHttp01Config,
    ControllerConfiguration,
    DynamicServingConfig,
    FilesystemServingConfig,
    IngressShimConfig,
    LeaderElectionConfig,
    MetricsTlsConfig,
};


pub(crate) const DEFAULT_KUBERNETES_API_QPS: f64 = 20.0;
pub(crate) const DEFAULT_KUBERNETES_API_BURST: i64 = 50;
pub(crate) const DEFAULT_CLUSTER_RESOURCE_NAMESPACE: &str = "kube-system";

pub(crate) const DEFAULT_LEADER_ELECTION_NAMESPACE: &str = "kube-system";
pub(crate) const DEFAULT_LEASE_DURATION: Duration = Duration::from_secs(60);
pub(crate) const DEFAULT_RENEW_DEADLINE: Duration = Duration::from_secs(40);
pub(crate) const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(15);
pub(crate) const DEFAULT_HEALTHZ_TIMEOUT: Duration = Duration::from_secs(20);

pub(crate) const DEFAULT_NUMBER_OF_CONCURRENT_WORKERS: i64 = 5;
pub(crate) const DEFAULT_MAX_CONCURRENT_CHALLENGES: i64 = 60;

pub(crate) const DEFAULT_METRICS_LISTEN_ADDRESS: &str = "0.0.0.0:9402";
pub(crate) const DEFAULT_HEALTHZ_LISTEN_ADDRESS: &str = "0.0.0.0:9403";
pub(crate) const DEFAULT_PPROF_ADDRESS: &str = "localhost:6060";
pub(crate) const DEFAULT_TLS_LEAF_DURATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub(crate) const DEFAULT_ISSUER_KIND: &str = "Issuer";
pub(crate) const DEFAULT_ISSUER_GROUP: &str = "cert-manager.io";
pub(crate) const DEFAULT_AUTO_CERTIFICATE_ANNOTATIONS: &[&str] = &["kubernetes.io/tls-acme"];

pub(crate) const DEFAULT_ACME_SOLVER_IMAGE: &str = "quay.io/jetstack/cert-manager-acmesolver:canary";
pub(crate) const DEFAULT_ACME_SOLVER_REQUEST_CPU: &str = "10m";
pub(crate) const DEFAULT_ACME_SOLVER_REQUEST_MEMORY: &str = "64Mi";
pub(crate) const DEFAULT_ACME_SOLVER_LIMITS_CPU: &str = "100m";
pub(crate) const DEFAULT_ACME_SOLVER_LIMITS_MEMORY: &str = "64Mi";
pub(crate) const DEFAULT_DNS01_CHECK_RETRY_PERIOD: Duration = Duration::from_secs(10);

pub(crate) const DEFAULT_ENABLED_CONTROLLERS: &[&str] = &["*"];
pub(crate) const DEFAULT_COPIED_ANNOTATION_PREFIXES: &[&str] = &[
    "*",
    "-kubectl.kubernetes.io/",
    "-fluxcd.io/",
    "-argocd.argoproj.io/",
];


fn owned_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}


/*
 * Defaulting: every field that is still `None` after decoding receives
 * its v1alpha1 default. Explicitly set fields, including empty lists, are kept.
 */

impl ControllerConfiguration {
    pub(crate) fn set_defaults(&mut self) {
        self.api_server_host.get_or_insert_with(String::new);
        self.kube_config.get_or_insert_with(String::new);
        self.kubernetes_api_qps.get_or_insert(DEFAULT_KUBERNETES_API_QPS);
        self.kubernetes_api_burst.get_or_insert(DEFAULT_KUBERNETES_API_BURST);
        self.namespace.get_or_insert_with(String::new);
        self.cluster_resource_namespace
            .get_or_insert_with(|| DEFAULT_CLUSTER_RESOURCE_NAMESPACE.to_string());
        self.leader_election_config
            .get_or_insert_with(LeaderElectionConfig::default)
            .set_defaults();
        self.controllers
            .get_or_insert_with(|| owned_strings(DEFAULT_ENABLED_CONTROLLERS));
        self.issuer_ambient_credentials.get_or_insert(false);
        self.cluster_issuer_ambient_credentials.get_or_insert(true);
        self.enable_certificate_owner_ref.get_or_insert(false);
        self.copied_annotation_prefixes
            .get_or_insert_with(|| owned_strings(DEFAULT_COPIED_ANNOTATION_PREFIXES));
        self.number_of_concurrent_workers
            .get_or_insert(DEFAULT_NUMBER_OF_CONCURRENT_WORKERS);
        self.max_concurrent_challenges
            .get_or_insert(DEFAULT_MAX_CONCURRENT_CHALLENGES);
        self.metrics_listen_address
            .get_or_insert_with(|| DEFAULT_METRICS_LISTEN_ADDRESS.to_string());
        self.metrics_tls_config
            .get_or_insert_with(MetricsTlsConfig::default)
            .set_defaults();
        self.healthz_listen_address
            .get_or_insert_with(|| DEFAULT_HEALTHZ_LISTEN_ADDRESS.to_string());
        self.pprof_address
            .get_or_insert_with(|| DEFAULT_PPROF_ADDRESS.to_string());
        self.enable_pprof.get_or_insert(false);
        self.ingress_shim_config
            .get_or_insert_with(IngressShimConfig::default)
            .set_defaults();
        self.acme_http01_config
            .get_or_insert_with(AcmeHttp01Config::default)
            .set_defaults();
        self.acme_dns01_config
            .get_or_insert_with(AcmeDns01Config::default)
            .set_defaults();
        self.feature_gates.get_or_insert_with(BTreeMap::new);
    }
}

impl LeaderElectionConfig {
    fn set_defaults(&mut self) {
        self.enabled.get_or_insert(true);
        self.namespace
            .get_or_insert_with(|| DEFAULT_LEADER_ELECTION_NAMESPACE.to_string());
        self.lease_duration.get_or_insert(DEFAULT_LEASE_DURATION);
        self.renew_deadline.get_or_insert(DEFAULT_RENEW_DEADLINE);
        self.retry_period.get_or_insert(DEFAULT_RETRY_PERIOD);
        self.healthz_timeout.get_or_insert(DEFAULT_HEALTHZ_TIMEOUT);
    }
}

impl MetricsTlsConfig {
    fn set_defaults(&mut self) {
        self.filesystem
            .get_or_insert_with(FilesystemServingConfig::default)
            .set_defaults();
        self.dynamic
            .get_or_insert_with(DynamicServingConfig::default)
            .set_defaults();
    }
}

impl FilesystemServingConfig {
    fn set_defaults(&mut self) {
        self.cert_file.get_or_insert_with(String::new);
        self.key_file.get_or_insert_with(String::new);
    }
}

impl DynamicServingConfig {
    fn set_defaults(&mut self) {
        self.secret_namespace.get_or_insert_with(String::new);
        self.secret_name.get_or_insert_with(String::new);
        self.dns_names.get_or_insert_with(Vec::new);
        self.leaf_duration.get_or_insert(DEFAULT_TLS_LEAF_DURATION);
    }
}

impl IngressShimConfig {
    fn set_defaults(&mut self) {
        self.default_issuer_name.get_or_insert_with(String::new);
        self.default_issuer_kind
            .get_or_insert_with(|| DEFAULT_ISSUER_KIND.to_string());
        self.default_issuer_group
            .get_or_insert_with(|| DEFAULT_ISSUER_GROUP.to_string());
        self.default_auto_certificate_annotations
            .get_or_insert_with(|| owned_strings(DEFAULT_AUTO_CERTIFICATE_ANNOTATIONS));
    }
}

impl AcmeHttp01Config {
    fn set_defaults(&mut self) {
        self.solver_image
            .get_or_insert_with(|| DEFAULT_ACME_SOLVER_IMAGE.to_string());
        self.solver_resource_request_cpu
            .get_or_insert_with(|| DEFAULT_ACME_SOLVER_REQUEST_CPU.to_string());
        self.solver_resource_request_memory
            .get_or_insert_with(|| DEFAULT_ACME_SOLVER_REQUEST_MEMORY.to_string());
        self.solver_resource_limits_cpu
            .get_or_insert_with(|| DEFAULT_ACME_SOLVER_LIMITS_CPU.to_string());
        self.solver_resource_limits_memory
            .get_or_insert_with(|| DEFAULT_ACME_SOLVER_LIMITS_MEMORY.to_string());
        self.solver_run_as_non_root.get_or_insert(true);
        self.solver_nameservers.get_or_insert_with(Vec::new);
    }
}

impl AcmeDns01Config {
    fn set_defaults(&mut self) {
        self.recursive_nameservers.get_or_insert_with(Vec::new);
        self.recursive_nameservers_only.get_or_insert(false);
        self.check_retry_period
            .get_or_insert(DEFAULT_DNS01_CHECK_RETRY_PERIOD);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_survive_defaulting() {
        let mut document = ControllerConfiguration {
            controllers: Some(Vec::new()),
            kubernetes_api_qps: Some(1.0),
            leader_election_config: Some(LeaderElectionConfig {
                enabled: Some(false),
                ..LeaderElectionConfig::default()
            }),
            ..ControllerConfiguration::default()
        };
        document.set_defaults();

        assert_eq!(document.controllers, Some(Vec::new()));
        assert_eq!(document.kubernetes_api_qps, Some(1.0));

        let leader_election = document.leader_election_config.unwrap();
        assert_eq!(leader_election.enabled, Some(false));
        assert_eq!(leader_election.lease_duration, Some(DEFAULT_LEASE_DURATION));
    }

    #[test]
    fn defaulting_is_idempotent() {
        let mut once = ControllerConfiguration::default();
        once.set_defaults();

        let mut twice = once.clone();
        twice.set_defaults();

        assert_eq!(once, twice);
    }
}
