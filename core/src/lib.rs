//! # sceneflat core
//!
//! Scene data container and math types shared by the sceneflat tools.
//!
//! A [`scene::SceneData`] stores per-object attributes as flat fields of
//! `(object, value)` entries, with object identifiers in
//! `0..mapping_bound`. The hierarchy is just another field
//! ([`scene::SceneField::Parent`]), so any ordering or flattening of it lives
//! in the `sceneflat-tools` crate.

pub mod math;
pub mod profiling;
pub mod scene;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
