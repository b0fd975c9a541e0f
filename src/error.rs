//! Error types for registration, style document loading and configuration.
//!
//! Lookups and layer construction never fail with an error: unknown types
//! and unsupported capabilities come back as `None`. These errors cover the
//! operations that can be rejected outright.

use std::fmt;

/// Errors returned when adding a layer type to a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The metadata has an empty identifier.
    EmptyName,
    /// A layer type with this identifier is already registered.
    DuplicateType(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::EmptyName => write!(f, "Symbol layer type has an empty name"),
            RegistryError::DuplicateType(name) => {
                write!(f, "Symbol layer type already registered: {}", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors that can occur while loading a style document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SldError {
    /// The XML reader rejected the input.
    Xml(String),
    /// The document has no root element.
    EmptyDocument,
    /// An end tag closed an element that was never opened.
    UnbalancedTag(String),
}

impl fmt::Display for SldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SldError::Xml(msg) => write!(f, "Malformed style document: {}", msg),
            SldError::EmptyDocument => write!(f, "Style document has no root element"),
            SldError::UnbalancedTag(name) => write!(f, "Unexpected end tag: {}", name),
        }
    }
}

impl std::error::Error for SldError {}

/// Errors that can occur while loading registry configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(String),
    /// The configuration JSON could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Failed to read registry config: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Failed to parse registry config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
