//! Transform types the hierarchy can be flattened into.

use std::ops::Mul;

use sceneflat_core::math::{Mat3, Mat4};
use sceneflat_core::scene::{SceneData, SceneDimensions};

/// An affine transform that composes by multiplication.
///
/// `a * b` applies `b` first, matching `matrix * point`. Implemented for
/// [`Mat3`] (2D scenes) and [`Mat4`] (3D scenes).
pub trait HierarchyTransform: Copy + Mul<Output = Self> {
    /// Dimensionality of scenes this transform belongs to.
    const DIMENSIONS: SceneDimensions;

    /// The identity transform.
    fn identity() -> Self;

    /// `(object, local transform)` pairs of `scene`, in field order.
    fn local_transformations(scene: &SceneData) -> Vec<(u32, Self)>;
}

impl HierarchyTransform for Mat3 {
    const DIMENSIONS: SceneDimensions = SceneDimensions::Two;

    fn identity() -> Self {
        Mat3::identity()
    }

    fn local_transformations(scene: &SceneData) -> Vec<(u32, Self)> {
        scene.transformations_2d_as_array()
    }
}

impl HierarchyTransform for Mat4 {
    const DIMENSIONS: SceneDimensions = SceneDimensions::Three;

    fn identity() -> Self {
        Mat4::identity()
    }

    fn local_transformations(scene: &SceneData) -> Vec<(u32, Self)> {
        scene.transformations_3d_as_array()
    }
}
