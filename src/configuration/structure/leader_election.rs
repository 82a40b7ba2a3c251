use std::time::Duration;


#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderElectionConfiguration {
    /// Whether the controller competes for a lease before doing any work.
    pub enabled: bool,

    /// Namespace holding the leader election lease.
    pub namespace: String,

    pub lease_duration: Duration,

    pub renew_deadline: Duration,

    pub retry_period: Duration,

    /// How long the leader election health check may lag before
    /// the controller is reported unhealthy.
    pub healthz_timeout: Duration,
}
