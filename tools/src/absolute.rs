//! Absolute transformations of field entries.
//!
//! For every entry of a field, computes the transformation of the object it
//! is attached to relative to the scene root, with a global transformation
//! prepended:
//!
//! ```text
//! absolute(object) = global * local(root) * ... * local(parent) * local(object)
//! ```
//!
//! The hierarchy is ordered once with [`order_cluster_parents`], then walked
//! in that order so every parent's absolute transformation is already known
//! when its children are reached. The whole operation is `O(m + n)` in time
//! and memory, `m` being the field size and `n` the scene mapping bound.
//!
//! # Objects outside the hierarchy
//!
//! Entries attached to objects that have no parent entry, or that sit in a
//! loose subtree (an ancestor chain ending in an object with no parent entry),
//! have no meaningful absolute transformation. Both the allocating and the
//! `_into` variants write the identity for them, so the two always produce
//! identical output and an `_into` buffer never keeps stale contents.
//! Callers should still treat these values as placeholders.
//!
//! # Example
//!
//! ```ignore
//! use sceneflat_core::math::Mat4;
//! use sceneflat_core::scene::SceneField;
//! use sceneflat_tools::absolute_field_transformations_3d;
//!
//! // One absolute transformation per mesh entry, ready to be baked.
//! let transforms = absolute_field_transformations_3d(&scene, SceneField::Mesh, Mat4::identity())?;
//! ```

use fixedbitset::FixedBitSet;
use sceneflat_core::math::{Mat3, Mat4};
use sceneflat_core::scene::{SceneData, SceneField};

use crate::error::{HierarchyError, HierarchyResult};
use crate::order::order_cluster_parents;
use crate::selector::FieldSelector;
use crate::transform::HierarchyTransform;

/// Validates the call and returns the resolved field ID.
fn check_preconditions<T: HierarchyTransform>(
    scene: &SceneData,
    field: impl FieldSelector,
) -> HierarchyResult<usize> {
    let field_id = field.field_id(scene)?;
    if scene.dimensions() != T::DIMENSIONS {
        return Err(HierarchyError::DimensionMismatch {
            expected: T::DIMENSIONS,
            actual: scene.dimensions(),
        });
    }
    if !scene.has_field(SceneField::Parent) {
        return Err(HierarchyError::MissingParentField);
    }
    Ok(field_id)
}

/// Fills `out` for a field that already passed [`check_preconditions`].
fn fill<T: HierarchyTransform>(
    scene: &SceneData,
    field_id: usize,
    out: &mut [T],
    global: T,
) -> HierarchyResult<()> {
    let mapping = scene.field_mapping(field_id).unwrap_or_default();
    if out.len() != mapping.len() {
        return Err(HierarchyError::OutputSizeMismatch {
            expected: mapping.len(),
            actual: out.len(),
        });
    }
    if mapping.is_empty() {
        return Ok(());
    }

    let order = {
        sceneflat_core::profile_scope!("order_cluster_parents");
        order_cluster_parents(scene)?
    };

    sceneflat_core::profile_scope!("propagate");

    // Starts as local transformations, and each ordered object is replaced by
    // its absolute one. A parent is always replaced before its children read
    // it.
    let bound = scene.mapping_bound();
    let mut absolute = vec![T::identity(); bound];
    for (object, local) in T::local_transformations(scene) {
        absolute[object as usize] = local;
    }
    let mut resolved = FixedBitSet::with_capacity(bound);
    for &(object, parent) in &order {
        let base = match parent {
            Some(parent) => absolute[parent as usize],
            None => global,
        };
        absolute[object as usize] = base * absolute[object as usize];
        resolved.insert(object as usize);
    }

    let mut unresolved = 0usize;
    for (out, &object) in out.iter_mut().zip(mapping) {
        *out = if resolved.contains(object as usize) {
            absolute[object as usize]
        } else {
            unresolved += 1;
            T::identity()
        };
    }

    sceneflat_core::profile_plot!("absolute_transformations_objects", order.len());
    log::debug!(
        "Computed {} absolute transformations from {} ordered objects ({} outside the hierarchy)",
        mapping.len(),
        order.len(),
        unresolved
    );
    Ok(())
}

/// Calculates absolute transformations for all entries of `field`.
///
/// `field` is a field ID or a [`SceneField`] name. The result has one
/// transformation per field entry, in field order, each with `global`
/// prepended; pass `T::identity()` for none. An empty field yields an empty
/// result without touching the hierarchy.
///
/// Fails if `field` doesn't exist, the scene dimensionality doesn't match
/// `T`, or the scene's parent field is missing, has duplicates or cycles.
/// See the [module docs](self) for entries outside the hierarchy.
pub fn absolute_field_transformations<T: HierarchyTransform>(
    scene: &SceneData,
    field: impl FieldSelector,
    global: T,
) -> HierarchyResult<Vec<T>> {
    sceneflat_core::profile_function!();

    let field_id = check_preconditions::<T>(scene, field)?;
    let mut out = vec![T::identity(); scene.field_size(field_id).unwrap_or_default()];
    fill(scene, field_id, &mut out, global)?;
    Ok(out)
}

/// Like [`absolute_field_transformations`], but fills existing memory.
///
/// `out` is expected to have exactly as many entries as `field`. On error it
/// is left unmodified.
pub fn absolute_field_transformations_into<T: HierarchyTransform>(
    scene: &SceneData,
    field: impl FieldSelector,
    out: &mut [T],
    global: T,
) -> HierarchyResult<()> {
    sceneflat_core::profile_function!();

    let field_id = check_preconditions::<T>(scene, field)?;
    fill(scene, field_id, out, global)
}

/// 2D variant of [`absolute_field_transformations`].
pub fn absolute_field_transformations_2d(
    scene: &SceneData,
    field: impl FieldSelector,
    global: Mat3,
) -> HierarchyResult<Vec<Mat3>> {
    absolute_field_transformations(scene, field, global)
}

/// 2D variant of [`absolute_field_transformations_into`].
pub fn absolute_field_transformations_2d_into(
    scene: &SceneData,
    field: impl FieldSelector,
    out: &mut [Mat3],
    global: Mat3,
) -> HierarchyResult<()> {
    absolute_field_transformations_into(scene, field, out, global)
}

/// 3D variant of [`absolute_field_transformations`].
pub fn absolute_field_transformations_3d(
    scene: &SceneData,
    field: impl FieldSelector,
    global: Mat4,
) -> HierarchyResult<Vec<Mat4>> {
    absolute_field_transformations(scene, field, global)
}

/// 3D variant of [`absolute_field_transformations_into`].
pub fn absolute_field_transformations_3d_into(
    scene: &SceneData,
    field: impl FieldSelector,
    out: &mut [Mat4],
    global: Mat4,
) -> HierarchyResult<()> {
    absolute_field_transformations_into(scene, field, out, global)
}
