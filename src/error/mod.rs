//! # Error Types
//!
//! Typed errors for URL construction. Only the identity checks can fail;
//! see [`BuildError`].

pub mod build;

pub use build::BuildError;
