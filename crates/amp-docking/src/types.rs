//! Core type definitions for the docking engine
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Ids are handed out by the platform window layer. The engine only
/// references them and never allocates its own.
pub type WindowId = u64;
