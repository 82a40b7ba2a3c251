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
use crate::configuration::{
    error::ConfigurationError,
    structure,
    traits::ResolvableConfiguration,
    versions::{ApiVersion, KIND},
};


/// Takes a value that defaulting must have filled in.
fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ConfigurationError> {
    value.ok_or_else(|| ConfigurationError::ConversionError {
        field,
        reason: "no value after defaulting".to_string(),
    })
}

fn narrow_float(field: &'static str, value: f64) -> Result<f32, ConfigurationError> {
    let narrowed = value as f32;

    if !narrowed.is_finite() {
        return Err(ConfigurationError::ConversionError {
            field,
            reason: format!("{value} is not representable as a finite 32-bit float"),
        });
    }

    Ok(narrowed)
}

fn narrow_integer(field: &'static str, value: i64) -> Result<i32, ConfigurationError> {
    i32::try_from(value).map_err(|_| ConfigurationError::ConversionError {
        field,
        reason: format!("{value} does not fit into a 32-bit integer"),
    })
}


impl ResolvableConfiguration for ControllerConfiguration {
    type Resolved = structure::ControllerConfiguration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationError> {
        Ok(structure::ControllerConfiguration {
            api_server_host: required("apiServerHost", self.api_server_host)?,
            kube_config: required("kubeConfig", self.kube_config)?,
            kubernetes_api_qps: narrow_float(
                "kubernetesAPIQPS",
                required("kubernetesAPIQPS", self.kubernetes_api_qps)?,
            )?,
            kubernetes_api_burst: narrow_integer(
                "kubernetesAPIBurst",
                required("kubernetesAPIBurst", self.kubernetes_api_burst)?,
            )?,
            namespace: required("namespace", self.namespace)?,
            cluster_resource_namespace: required(
                "clusterResourceNamespace",
                self.cluster_resource_namespace,
            )?,
            leader_election: required("leaderElectionConfig", self.leader_election_config)?
                .resolve()?,
            controllers: required("controllers", self.controllers)?,
            issuer_ambient_credentials: required(
                "issuerAmbientCredentials",
                self.issuer_ambient_credentials,
            )?,
            cluster_issuer_ambient_credentials: required(
                "clusterIssuerAmbientCredentials",
                self.cluster_issuer_ambient_credentials,
            )?,
            enable_certificate_owner_ref: required(
                "enableCertificateOwnerRef",
                self.enable_certificate_owner_ref,
            )?,
            copied_annotation_prefixes: required(
                "copiedAnnotationPrefixes",
                self.copied_annotation_prefixes,
            )?,
            number_of_concurrent_workers: narrow_integer(
                "numberOfConcurrentWorkers",
                required("numberOfConcurrentWorkers", self.number_of_concurrent_workers)?,
            )?,
            max_concurrent_challenges: narrow_integer(
                "maxConcurrentChallenges",
                required("maxConcurrentChallenges", self.max_concurrent_challenges)?,
            )?,
            metrics_listen_address: required("metricsListenAddress", self.metrics_listen_address)?,
            metrics_tls: required("metricsTLSConfig", self.metrics_tls_config)?.resolve()?,
            healthz_listen_address: required("healthzListenAddress", self.healthz_listen_address)?,
            pprof_address: required("pprofAddress", self.pprof_address)?,
            enable_pprof: required("enablePprof", self.enable_pprof)?,
            ingress_shim: required("ingressShimConfig", self.ingress_shim_config)?.resolve()?,
            acme_http01: required("acmeHTTP01Config", self.acme_http01_config)?.resolve()?,
            acme_dns01: required("acmeDNS01Config", self.acme_dns01_config)?.resolve()?,
            feature_gates: required("featureGates", self.feature_gates)?,
        })
    }
}

impl ResolvableConfiguration for LeaderElectionConfig {
    type Resolved = structure::LeaderElectionConfiguration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationError> {
        Ok(structure::LeaderElectionConfiguration {
            enabled: required("leaderElectionConfig.enabled", self.enabled)?,
            namespace: required("leaderElectionConfig.namespace", self.namespace)?,
            lease_duration: required("leaderElectionConfig.leaseDuration", self.lease_duration)?,
            renew_deadline: required("leaderElectionConfig.renewDeadline", self.renew_deadline)?,
            retry_period: required("leaderElectionConfig.retryPeriod", self.retry_period)?,
            healthz_timeout: required("leaderElectionConfig.healthzTimeout", self.healthz_timeout)?,
        })
    }
}

impl ResolvableConfiguration for MetricsTlsConfig {
    type Resolved = structure::MetricsTlsConfiguration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationError> {
        let filesystem = required("metricsTLSConfig.filesystem", self.filesystem)?;
        let dynamic = required("metricsTLSConfig.dynamic", self.dynamic)?;

        Ok(structure::MetricsTlsConfiguration {
            filesystem: structure::FilesystemServingConfiguration {
                cert_file: required("metricsTLSConfig.filesystem.certFile", filesystem.cert_file)?,
                key_file: required("metricsTLSConfig.filesystem.keyFile", filesystem.key_file)?,
            },
            dynamic: structure::DynamicServingConfiguration {
                secret_namespace: required(
                    "metricsTLSConfig.dynamic.secretNamespace",
                    dynamic.secret_namespace,
                )?,
                secret_name: required("metricsTLSConfig.dynamic.secretName", dynamic.secret_name)?,
                dns_names: required("metricsTLSConfig.dynamic.dnsNames", dynamic.dns_names)?,
                leaf_duration: required(
                    "metricsTLSConfig.dynamic.leafDuration",
                    dynamic.leaf_duration,
                )?,
            },
        })
    }
}

impl ResolvableConfiguration for IngressShimConfig {
    type Resolved = structure::IngressShimConfiguration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationError> {
        Ok(structure::IngressShimConfiguration {
            default_issuer_name: required(
                "ingressShimConfig.defaultIssuerName",
                self.default_issuer_name,
            )?,
            default_issuer_kind: required(
                "ingressShimConfig.defaultIssuerKind",
                self.default_issuer_kind,
            )?,
            default_issuer_group: required(
                "ingressShimConfig.defaultIssuerGroup",
                self.default_issuer_group,
            )?,
            default_auto_certificate_annotations: required(
                "ingressShimConfig.defaultAutoCertificateAnnotations",
                self.default_auto_certificate_annotations,
            )?,
        })
    }
}

impl ResolvableConfiguration for AcmeHttp01Config {
    type Resolved = structure::AcmeHttp01Configuration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationError> {
        Ok(structure::AcmeHttp01Configuration {
            solver_image: required("acmeHTTP01Config.solverImage", self.solver_image)?,
            solver_resource_request_cpu: required(
                "acmeHTTP01Config.solverResourceRequestCPU",
                self.solver_resource_request_cpu,
            )?,
            solver_resource_request_memory: required(
                "acmeHTTP01Config.solverResourceRequestMemory",
                self.solver_resource_request_memory,
            )?,
            solver_resource_limits_cpu: required(
                "acmeHTTP01Config.solverResourceLimitsCPU",
                self.solver_resource_limits_cpu,
            )?,
            solver_resource_limits_memory: required(
                "acmeHTTP01Config.solverResourceLimitsMemory",
                self.solver_resource_limits_memory,
            )?,
            solver_run_as_non_root: required(
                "acmeHTTP01Config.solverRunAsNonRoot",
                self.solver_run_as_non_root,
            )?,
            solver_nameservers: required(
                "acmeHTTP01Config.solverNameservers",
                self.solver_nameservers,
            )?,
        })
    }
}

impl ResolvableConfiguration for AcmeDns01Config {
    type Resolved = structure::AcmeDns01Configuration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationError> {
        Ok(structure::AcmeDns01Configuration {
            recursive_nameservers: required(
                "acmeDNS01Config.recursiveNameservers",
                self.recursive_nameservers,
            )?,
            recursive_nameservers_only: required(
                "acmeDNS01Config.recursiveNameserversOnly",
                self.recursive_nameservers_only,
            )?,
            check_retry_period: required(
                "acmeDNS01Config.checkRetryPeriod",
                self.check_retry_period,
            )?,
        })
    }
}



/*
 * Reverse direction, used when encoding the current configuration
 * back into a v1alpha1 document. Widening never fails.
 */

impl From<&structure::ControllerConfiguration> for ControllerConfiguration {
    fn from(value: &structure::ControllerConfiguration) -> Self {
        Self {
            api_version: ApiVersion::V1Alpha1.to_string(),
            kind: KIND.to_string(),
            api_server_host: Some(value.api_server_host.clone()),
            kube_config: Some(value.kube_config.clone()),
            kubernetes_api_qps: Some(f64::from(value.kubernetes_api_qps)),
            kubernetes_api_burst: Some(i64::from(value.kubernetes_api_burst)),
            namespace: Some(value.namespace.clone()),
            cluster_resource_namespace: Some(value.cluster_resource_namespace.clone()),
            leader_election_config: Some(LeaderElectionConfig {
                enabled: Some(value.leader_election.enabled),
                namespace: Some(value.leader_election.namespace.clone()),
                lease_duration: Some(value.leader_election.lease_duration),
                renew_deadline: Some(value.leader_election.renew_deadline),
                retry_period: Some(value.leader_election.retry_period),
                healthz_timeout: Some(value.leader_election.healthz_timeout),
            }),
            controllers: Some(value.controllers.clone()),
            issuer_ambient_credentials: Some(value.issuer_ambient_credentials),
            cluster_issuer_ambient_credentials: Some(value.cluster_issuer_ambient_credentials),
            enable_certificate_owner_ref: Some(value.enable_certificate_owner_ref),
            copied_annotation_prefixes: Some(value.copied_annotation_prefixes.clone()),
            number_of_concurrent_workers: Some(i64::from(value.number_of_concurrent_workers)),
            max_concurrent_challenges: Some(i64::from(value.max_concurrent_challenges)),
            metrics_listen_address: Some(value.metrics_listen_address.clone()),
            metrics_tls_config: Some(MetricsTlsConfig {
                filesystem: Some(FilesystemServingConfig {
                    cert_file: Some(value.metrics_tls.filesystem.cert_file.clone()),
                    key_file: Some(value.metrics_tls.filesystem.key_file.clone()),
                }),
                dynamic: Some(DynamicServingConfig {
                    secret_namespace: Some(value.metrics_tls.dynamic.secret_namespace.clone()),
                    secret_name: Some(value.metrics_tls.dynamic.secret_name.clone()),
                    dns_names: Some(value.metrics_tls.dynamic.dns_names.clone()),
                    leaf_duration: Some(value.metrics_tls.dynamic.leaf_duration),
                }),
            }),
            healthz_listen_address: Some(value.healthz_listen_address.clone()),
            pprof_address: Some(value.pprof_address.clone()),
            enable_pprof: Some(value.enable_pprof),
            ingress_shim_config: Some(IngressShimConfig {
                default_issuer_name: Some(value.ingress_shim.default_issuer_name.clone()),
                default_issuer_kind: Some(value.ingress_shim.default_issuer_kind.clone()),
                default_issuer_group: Some(value.ingress_shim.default_issuer_group.clone()),
                default_auto_certificate_annotations: Some(
                    value.ingress_shim.default_auto_certificate_annotations.clone(),
                ),
            }),
            acme_http01_config: Some(AcmeHttp01Config {
                solver_image: Some(value.acme_http01.solver_image.clone()),
                solver_resource_request_cpu: Some(
                    value.acme_http01.solver_resource_request_cpu.clone(),
                ),
                solver_resource_request_memory: Some(
                    value.acme_http01.solver_resource_request_memory.clone(),
                ),
                solver_resource_limits_cpu: Some(value.acme_http01.solver_resource_limits_cpu.clone()),
                solver_resource_limits_memory: Some(
                    value.acme_http01.solver_resource_limits_memory.clone(),
                ),
                solver_run_as_non_root: Some(value.acme_http01.solver_run_as_non_root),
                solver_nameservers: Some(value.acme_http01.solver_nameservers.clone()),
            }),
            acme_dns01_config: Some(AcmeDns01Config {
                recursive_nameservers: Some(value.acme_dns01.recursive_nameservers.clone()),
                recursive_nameservers_only: Some(value.acme_dns01.recursive_nameservers_only),
                check_retry_period: Some(value.acme_dns01.check_retry_period),
            }),
            feature_gates: Some(value.feature_gates.clone()),
        }
    }
}
