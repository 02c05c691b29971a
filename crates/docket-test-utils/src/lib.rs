//! Test helpers shared across docket crates.

pub mod sink;

pub use sink::RecordingSink;
