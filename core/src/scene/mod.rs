//! Flat scene representation.
//!
//! These types are format-agnostic and can be produced by any loader or
//! built programmatically.
//!
//! - [`SceneData`] - Validated container of named fields over `0..mapping_bound`
//! - [`SceneFieldData`] / [`SceneFieldValues`] - One field and its typed values
//! - [`SceneField`] / [`SceneDimensions`] - Field names and 2D/3D selection
//! - [`SceneNode`] / [`NodeTransform`] - Nested trees, see [`flatten_node_tree`]

mod data;
mod tree;
mod types;

pub use data::{SceneData, SceneDataError, SceneDataResult};
pub use tree::{NodeTransform, SceneNode, flatten_node_tree};
pub use types::{SceneDimensions, SceneField, SceneFieldData, SceneFieldValues};
