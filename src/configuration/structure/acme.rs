use std::time::Duration;


/// Settings for the pods that solve ACME HTTP-01 challenges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcmeHttp01Configuration {
    pub solver_image: String,

    pub solver_resource_request_cpu: String,

    pub solver_resource_request_memory: String,

    pub solver_resource_limits_cpu: String,

    pub solver_resource_limits_memory: String,

    pub solver_run_as_non_root: bool,

    /// `host:port` nameservers used by the solver's self check.
    pub solver_nameservers: Vec<String>,
}


/// Settings for ACME DNS-01 propagation checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcmeDns01Configuration {
    pub recursive_nameservers: Vec<String>,

    /// Only use `recursive_nameservers`, never the authoritative ones.
    pub recursive_nameservers_only: bool,

    pub check_retry_period: Duration,
}
