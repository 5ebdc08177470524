//! Test utilities for the Lucent rendering crates.
//!
//! The main component is `MockBackend` (behind the `mock` feature): a
//! [`RenderBackend`](lucent_render::RenderBackend) implementation that
//! records every operation as a typed `RenderCall` instead of touching a
//! GPU, so command-stream replay can be verified call by call.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use lucent_render::{CommandRecorder, GeometryArena, replay};
//! use lucent_test_utils::{MockBackend, RenderCall};
//!
//! let mut recorder = CommandRecorder::new();
//! let mut arena = GeometryArena::default();
//! let mut backend = MockBackend::new();
//!
//! recorder.push_draw(6);
//! recorder.flush();
//! replay(&recorder, &mut arena, &mut backend);
//!
//! assert_eq!(backend.count_draws(), 1);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_backend;

#[cfg(feature = "mock")]
pub use mock_backend::*;
