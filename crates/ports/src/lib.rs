//! # Ports
//!
//! Interface definitions for the collaborators a length rule works with.
//!
//! - [`context`]: the validation context and its message-argument sink
//! - [`localization`]: lookup of default message templates
//! - [`validator`]: the surface a rule offers to the validation framework
//!
//! These ports keep the rule logic independent of any particular
//! validation pipeline.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod context;
pub mod localization;
pub mod validator;

pub use context::{ArgumentValue, MAX_LENGTH, MIN_LENGTH, MessageFormatter, TOTAL_LENGTH, ValidationContext};
pub use localization::Localizer;
pub use validator::{LengthBounds, PropertyValidator};
