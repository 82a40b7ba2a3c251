//! This module contains all configuration-relevant code, including
//! the full controller configuration structure as well as the methods needed
//! to load and decode it.
//!
//! Your starting point should probably be [`ConfigurationFsLoader`].
//!
//! # Internals
//! Loading is split into a versioned ("unresolved") and a current ("resolved")
//! configuration structure.
//!
//! A document is first sniffed for its `apiVersion` and `kind`, then decoded
//! strictly into the [`VersionedConfiguration`] of that version. Any key the
//! document leaves out or sets to null is then filled in from that version's
//! defaults.
//! The versioned structure's `resolve` method then converts it
//! into the [`ControllerConfiguration`] the rest of the controller works with.
//!
//! Finally, the loader resolves the [`ControllerConfiguration`] once more, this time
//! with the configuration file's directory as context, turning relative
//! path-valued fields (`kubeConfig`, the metrics TLS certificate and key files)
//! into absolute ones.

pub mod decoder;
mod error;
mod loader;
mod structure;
mod traits;
mod utilities;
pub mod versions;

pub use error::ConfigurationError;
pub use loader::{ConfigurationFsLoader, ReadFileFn};
pub use structure::*;
pub use traits::{ResolvableConfiguration, ResolvableConfigurationWithContext};
pub use utilities::{absolute_path, clean_path};
pub use versions::{ApiVersion, VersionedConfiguration};
