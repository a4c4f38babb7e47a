//! # Shared kernel
//!
//! Error hierarchy and value objects shared by every length-rule crate.

// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, LengthRulesError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{LengthBound, TextLength};
