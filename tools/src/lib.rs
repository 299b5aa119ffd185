//! # sceneflat tools
//!
//! Hierarchy operations on [`SceneData`](sceneflat_core::scene::SceneData):
//!
//! - [`order`] - Orderings of the parent field in which every parent precedes
//!   its children, with cycle and duplicate detection
//! - [`absolute`] - Absolute (world-space) transformations for every entry of
//!   a field, generic over [`HierarchyTransform`] and instantiated for 2D
//!   ([`Mat3`](sceneflat_core::math::Mat3)) and 3D
//!   ([`Mat4`](sceneflat_core::math::Mat4))
//!
//! Every operation is single-threaded, runs in time linear in the field size
//! plus the scene mapping bound, and borrows the scene read-only, so the same
//! scene can be processed from several threads at once.
//!
//! ```ignore
//! use sceneflat_core::math::Mat4;
//! use sceneflat_core::scene::SceneField;
//! use sceneflat_tools::absolute_field_transformations_3d;
//!
//! let world = absolute_field_transformations_3d(&scene, SceneField::Mesh, Mat4::identity())?;
//! for (transform, mesh) in world.iter().zip(meshes) {
//!     // bake `transform` into `mesh`
//! }
//! ```

pub mod absolute;
mod error;
pub mod order;
mod selector;
mod transform;

pub use absolute::{
    absolute_field_transformations, absolute_field_transformations_2d,
    absolute_field_transformations_2d_into, absolute_field_transformations_3d,
    absolute_field_transformations_3d_into, absolute_field_transformations_into,
};
pub use error::{HierarchyError, HierarchyResult};
pub use order::{
    children_depth_first, order_cluster_parents, order_cluster_parents_into,
    parents_breadth_first,
};
pub use selector::FieldSelector;
pub use transform::HierarchyTransform;
