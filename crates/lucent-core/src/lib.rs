//! Lucent Core
//!
//! This crate contains the core functionality shared by the Lucent
//! rendering crates.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod profiling;
