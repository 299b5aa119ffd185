//! Field selection by ID or by name.

use sceneflat_core::scene::{SceneData, SceneField};

use crate::error::{HierarchyError, HierarchyResult};

/// Something that identifies a field of a [`SceneData`].
///
/// Implemented for a field ID (`usize`) and for a field name
/// ([`SceneField`]), so every operation taking a field accepts either.
pub trait FieldSelector {
    /// Resolves to a field ID that is valid for `scene`.
    fn field_id(self, scene: &SceneData) -> HierarchyResult<usize>;
}

impl FieldSelector for usize {
    fn field_id(self, scene: &SceneData) -> HierarchyResult<usize> {
        if self < scene.field_count() {
            Ok(self)
        } else {
            Err(HierarchyError::FieldOutOfRange {
                field_id: self,
                field_count: scene.field_count(),
            })
        }
    }
}

impl FieldSelector for SceneField {
    fn field_id(self, scene: &SceneData) -> HierarchyResult<usize> {
        scene
            .field_id(self)
            .ok_or(HierarchyError::FieldNotFound(self))
    }
}
