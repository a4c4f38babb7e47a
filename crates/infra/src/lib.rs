// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod context;
pub mod localization;

pub use context::PropertyContext;
pub use localization::StaticLocalizer;
