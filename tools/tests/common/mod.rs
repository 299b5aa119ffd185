//! Shared helpers for hierarchy integration tests.
//!
//! Tests describe transforms with dimension-independent [`Op`]s and run the
//! same body against 2D and 3D scenes. Results are compared as dynamically
//! sized matrices so both dimensionalities share assertions.

#![allow(dead_code)]

use sceneflat_core::math::nalgebra::DMatrix;
use sceneflat_core::math::{
    Mat3, Mat4, Vec2, Vec3, mat3_from_rotation, mat3_from_scaling, mat3_from_translation,
    mat4_from_scale_rotation_translation, mat4_from_scaling, mat4_from_translation,
    quat_from_rotation_z,
};
use sceneflat_core::scene::{SceneData, SceneDimensions, SceneFieldData};
use sceneflat_tools::{
    FieldSelector, HierarchyResult, absolute_field_transformations_2d,
    absolute_field_transformations_2d_into, absolute_field_transformations_3d,
    absolute_field_transformations_3d_into,
};

/// Either transform type, for assertions shared between 2D and 3D.
pub type Matrix = DMatrix<f32>;

/// Installs the test logger once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A transform expressed the same way for 2D and 3D. 3D variants act in the
/// XY plane.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dims {
    Two,
    Three,
}

impl Dims {
    pub fn scene_dimensions(self) -> SceneDimensions {
        match self {
            Self::Two => SceneDimensions::Two,
            Self::Three => SceneDimensions::Three,
        }
    }

    pub fn mat3(ops: &[Op]) -> Mat3 {
        ops.iter().fold(Mat3::identity(), |acc, op| {
            acc * match *op {
                Op::Translate(x, y) => mat3_from_translation(Vec2::new(x, y)),
                Op::Rotate(angle) => mat3_from_rotation(angle),
                Op::Scale(x, y) => mat3_from_scaling(Vec2::new(x, y)),
            }
        })
    }

    pub fn mat4(ops: &[Op]) -> Mat4 {
        ops.iter().fold(Mat4::identity(), |acc, op| {
            acc * match *op {
                Op::Translate(x, y) => mat4_from_translation(Vec3::new(x, y, 0.0)),
                Op::Rotate(angle) => mat4_from_scale_rotation_translation(
                    Vec3::new(1.0, 1.0, 1.0),
                    quat_from_rotation_z(angle),
                    Vec3::zeros(),
                ),
                Op::Scale(x, y) => mat4_from_scaling(Vec3::new(x, y, 1.0)),
            }
        })
    }

    /// The product of `ops`, leftmost first.
    pub fn compose(self, ops: &[Op]) -> Matrix {
        match self {
            Self::Two => to_dynamic_3(&Self::mat3(ops)),
            Self::Three => to_dynamic_4(&Self::mat4(ops)),
        }
    }

    pub fn identity(self) -> Matrix {
        self.compose(&[])
    }

    /// Transformation field with one op per object.
    pub fn transformations(self, locals: &[(u32, Op)]) -> SceneFieldData {
        match self {
            Self::Two => SceneFieldData::transformations_2d(
                locals.iter().map(|&(object, op)| (object, Self::mat3(&[op]))),
            ),
            Self::Three => SceneFieldData::transformations_3d(
                locals.iter().map(|&(object, op)| (object, Self::mat4(&[op]))),
            ),
        }
    }

    /// Scene with a parent field, a transformation field and `extra` fields.
    pub fn scene(
        self,
        mapping_bound: usize,
        parents: &[(u32, Option<u32>)],
        locals: &[(u32, Op)],
        extra: Vec<SceneFieldData>,
    ) -> SceneData {
        let mut fields = vec![
            SceneFieldData::parents(parents.iter().copied()),
            self.transformations(locals),
        ];
        fields.extend(extra);
        SceneData::new(self.scene_dimensions(), mapping_bound, fields).unwrap()
    }

    /// Allocating call shape for this dimensionality.
    pub fn absolute(
        self,
        scene: &SceneData,
        field: impl FieldSelector,
        global: &[Op],
    ) -> HierarchyResult<Vec<Matrix>> {
        match self {
            Self::Two => absolute_field_transformations_2d(scene, field, Self::mat3(global))
                .map(|v| v.iter().map(to_dynamic_3).collect()),
            Self::Three => absolute_field_transformations_3d(scene, field, Self::mat4(global))
                .map(|v| v.iter().map(to_dynamic_4).collect()),
        }
    }

    /// In-place call shape for this dimensionality, on a buffer of `len`
    /// entries pre-filled with `fill`.
    pub fn absolute_into(
        self,
        scene: &SceneData,
        field: impl FieldSelector,
        len: usize,
        fill: &[Op],
        global: &[Op],
    ) -> HierarchyResult<Vec<Matrix>> {
        match self {
            Self::Two => {
                let mut out = vec![Self::mat3(fill); len];
                absolute_field_transformations_2d_into(scene, field, &mut out, Self::mat3(global))
                    .map(|()| out.iter().map(to_dynamic_3).collect())
            }
            Self::Three => {
                let mut out = vec![Self::mat4(fill); len];
                absolute_field_transformations_3d_into(scene, field, &mut out, Self::mat4(global))
                    .map(|()| out.iter().map(to_dynamic_4).collect())
            }
        }
    }
}

fn to_dynamic_3(m: &Mat3) -> Matrix {
    Matrix::from_column_slice(3, 3, m.as_slice())
}

fn to_dynamic_4(m: &Mat4) -> Matrix {
    Matrix::from_column_slice(4, 4, m.as_slice())
}

/// Asserts two matrices agree up to float rounding.
#[track_caller]
pub fn assert_close(actual: &Matrix, expected: &Matrix) {
    assert!(
        (actual - expected).norm() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
