//! Integration test crate for StoryReel.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the media, draft, and engine crates to verify the whole
//! synthesis pipeline against real files on disk.

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod document;

#[cfg(test)]
mod synthesis;
