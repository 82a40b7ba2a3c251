use super::error::ConfigurationError;

/// Represents a configuration that can be converted (resolved) into
/// another, more canonical shape without any outside information.
///
/// Every versioned configuration implements this to produce the current
/// in-memory configuration.
pub trait ResolvableConfiguration {
    type Resolved;

    /// Resolve the configuration into its `Resolved` type.
    /// If the value cannot be represented in the resolved shape, you may return `Err`
    /// to indicate that the configuration is invalid.
    fn resolve(self) -> Result<Self::Resolved, ConfigurationError>;
}


/// Represents a configuration that can be resolved,
/// but where that process requires some additional context.
pub trait ResolvableConfigurationWithContext {
    type Context: ?Sized;
    type Resolved;

    /// Resolve the configuration into its `Resolved` type.
    /// If the resolution fails, you may return `Err` to indicate
    /// that the configuration is invalid.
    fn resolve(self, context: &Self::Context) -> Result<Self::Resolved, ConfigurationError>;
}
