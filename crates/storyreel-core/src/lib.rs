//! StoryReel Core - Foundation types for draft synthesis
//!
//! This crate provides the fundamental types used throughout StoryReel:
//! - Time representation (Micros, TimeRange) in integer microseconds
//! - Document identifiers (uppercase UUID-v4 strings)
//! - The shared error type

pub mod error;
pub mod id;
pub mod time;

pub use error::{Result, StoryReelError};
pub use id::Id;
pub use time::{Micros, TimeRange};
