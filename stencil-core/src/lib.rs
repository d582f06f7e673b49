//! Core types for stencilpack.
//!
//! This crate provides the pieces shared by the config loader, the
//! generation driver and the CLI:
//!
//! - [`BuildUnit`] - one module or test module processed by a generation pass
//! - [`Flavor`] - a generator configuration: templates, options, config file
//! - [`ConfigSchema`] / [`GenerationConfig`] - typed generator options
//! - [`resolve`] - which sources and imports a unit hands to the generator
//! - [`Diagnostic`] - non-fatal messages collected along the way

mod diagnostic;
mod flavor;
mod options;
pub mod resolve;
mod unit;
mod utils;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use flavor::Flavor;
pub use options::{
    ACCESS_LEVELS, ConfigSchema, DecodeError, GenerationConfig, OptionKind, OptionSpec,
    OptionValue,
};
pub use resolve::{Resolution, resolve};
pub use unit::{BuildUnit, Dependency};
pub use utils::{format_string_list, to_camel_case};
