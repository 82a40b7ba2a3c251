//! The `controller.config.cert-manager.io/v1alpha1` document schema.
//!
//! Every optional field is an `Option`, so a missing key and an explicit
//! `null` (or a bare `key:`) both decode to `None`. `set_defaults` in
//! `defaults.rs` then fills every `None` from this version's default table,
//! before the document is converted. Unknown keys are rejected.

use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

mod conversion;
mod defaults;


#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ControllerConfiguration {
    pub api_version: String,

    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_server_host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube_config: Option<String>,

    #[serde(rename = "kubernetesAPIQPS", skip_serializing_if = "Option::is_none")]
    pub kubernetes_api_qps: Option<f64>,

    #[serde(rename = "kubernetesAPIBurst", skip_serializing_if = "Option::is_none")]
    pub kubernetes_api_burst: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_resource_namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_election_config: Option<LeaderElectionConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub controllers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_ambient_credentials: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_issuer_ambient_credentials: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_certificate_owner_ref: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copied_annotation_prefixes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_concurrent_workers: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_challenges: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_listen_address: Option<String>,

    #[serde(rename = "metricsTLSConfig", skip_serializing_if = "Option::is_none")]
    pub metrics_tls_config: Option<MetricsTlsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthz_listen_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pprof_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_pprof: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_shim_config: Option<IngressShimConfig>,

    #[serde(rename = "acmeHTTP01Config", skip_serializing_if = "Option::is_none")]
    pub acme_http01_config: Option<AcmeHttp01Config>,

    #[serde(rename = "acmeDNS01Config", skip_serializing_if = "Option::is_none")]
    pub acme_dns01_config: Option<AcmeDns01Config>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_gates: Option<BTreeMap<String, bool>>,
}


#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct LeaderElectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub lease_duration: Option<Duration>,

    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub renew_deadline: Option<Duration>,

    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub retry_period: Option<Duration>,

    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub healthz_timeout: Option<Duration>,
}


#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MetricsTlsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FilesystemServingConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<DynamicServingConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FilesystemServingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_file: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct DynamicServingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,

    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub leaf_duration: Option<Duration>,
}


#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct IngressShimConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_issuer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_issuer_kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_issuer_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_auto_certificate_annotations: Option<Vec<String>>,
}


#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AcmeHttp01Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_image: Option<String>,

    #[serde(rename = "solverResourceRequestCPU", skip_serializing_if = "Option::is_none")]
    pub solver_resource_request_cpu: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_resource_request_memory: Option<String>,

    #[serde(rename = "solverResourceLimitsCPU", skip_serializing_if = "Option::is_none")]
    pub solver_resource_limits_cpu: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_resource_limits_memory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_run_as_non_root: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_nameservers: Option<Vec<String>>,
}


#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AcmeDns01Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive_nameservers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive_nameservers_only: Option<bool>,

    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub check_retry_period: Option<Duration>,
}
