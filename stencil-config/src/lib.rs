// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for stencilpack.
//!
//! Two documents are read here: the project's `stencil.toml`, which describes
//! the build units and is fatal when broken, and the optional per-unit JSON
//! config, which degrades to defaults when broken.

mod error;
mod loader;
pub mod manifest;

pub use error::{ConfigError, Error, Result};
pub use loader::{ConfigLoader, PHASE as CONFIG_PHASE};
pub use manifest::{Manifest, ProjectConfig, StencilToml, UnitConfig};
