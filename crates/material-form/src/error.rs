//! Error types for the material form
//!
//! ## Table of Contents
//! - **ConfigError**: the page did not supply a usable initialization contract
//! - **Rejection**: a drop batch failed the allow-list check (user visible)
//! - **SessionError**: a handler referenced a field or map type that does not exist
//! - **ColorParseError**: a color string is not `rgb(...)`/`rgba(...)`

use thiserror::Error;

use crate::config::Role;
use crate::extension::AllowList;
use crate::session::Zone;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Initialization contract failures. Any of these disables the form builder.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required constant was not rendered into the page
    #[error("missing configuration constant `{0}`")]
    Missing(&'static str),

    /// A required list was rendered but holds nothing
    #[error("configuration constant `{0}` is empty")]
    Empty(&'static str),

    /// The three catalog lists must line up index by index
    #[error(
        "texture map catalog lists differ in length: {types} types, \
         {descriptions} descriptions, {channels} channel flags"
    )]
    CatalogLength {
        types: usize,
        descriptions: usize,
        channels: usize,
    },

    /// The same identifier appears twice in the catalog
    #[error("duplicate texture map type `{0}`")]
    DuplicateMapType(String),

    /// The type inferencer can produce an identifier the catalog lacks
    #[error("texture map catalog has no entry for `{0}`")]
    UncoveredMapType(String),

    /// A role the builder cannot work without has no DOM class
    #[error("no class name configured for the {0} role")]
    MissingRole(Role),

    /// The embedded JSON document did not parse
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A drop batch was refused. Carries the inline text shown next to the zone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Rejection {
    pub zone: Zone,
    pub message: String,
    /// Names of the files that failed the check, in drop order
    pub offending: Vec<String>,
}

impl Rejection {
    pub fn new(zone: Zone, allowed: &AllowList, offending: Vec<String>) -> Self {
        Self {
            zone,
            message: format!("{}{}", zone.rejection_prefix(), allowed),
            offending,
        }
    }
}

/// Programming errors surfaced by session handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no field group with id {0}")]
    UnknownField(u32),

    #[error("unknown texture map type `{0}`")]
    UnknownMapType(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse color `{0}`")]
pub struct ColorParseError(pub String);
