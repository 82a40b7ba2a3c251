//! Loader for versioned controller configuration files.
//!
//! See the [`configuration`] module for the loading pipeline.

pub mod configuration;
