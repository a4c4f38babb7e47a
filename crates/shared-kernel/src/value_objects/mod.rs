// crates/shared-kernel/src/value_objects/mod.rs
pub mod bounds;
pub mod counts;

pub use bounds::LengthBound;
pub use counts::TextLength;
