//! Field names, dimensionality and typed field buffers.

use std::fmt;

use crate::math::{Mat3, Mat4, Quat, Vec2, Vec3};

/// Name of a scene field.
///
/// Each field name can appear at most once in a [`SceneData`](super::SceneData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneField {
    /// Parent object of each mapped object. `None` marks a root.
    Parent,
    /// Local transformation matrix.
    Transformation,
    /// Local translation, combined with [`Rotation`](Self::Rotation) and
    /// [`Scaling`](Self::Scaling) when no [`Transformation`](Self::Transformation)
    /// field is present.
    Translation,
    /// Local rotation. An angle in radians for 2D scenes, a quaternion for 3D.
    Rotation,
    /// Local scaling.
    Scaling,
    /// Mesh index.
    Mesh,
    /// Material index for the mesh attached to the same object.
    MeshMaterial,
    /// Light index.
    Light,
    /// Camera index.
    Camera,
    /// Skin index.
    Skin,
    /// Application-defined field.
    Custom(u32),
}

impl SceneField {
    /// Whether this field contributes to the local transformation.
    pub fn is_transformation(self) -> bool {
        matches!(
            self,
            Self::Transformation | Self::Translation | Self::Rotation | Self::Scaling
        )
    }
}

impl fmt::Display for SceneField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent => write!(f, "Parent"),
            Self::Transformation => write!(f, "Transformation"),
            Self::Translation => write!(f, "Translation"),
            Self::Rotation => write!(f, "Rotation"),
            Self::Scaling => write!(f, "Scaling"),
            Self::Mesh => write!(f, "Mesh"),
            Self::MeshMaterial => write!(f, "MeshMaterial"),
            Self::Light => write!(f, "Light"),
            Self::Camera => write!(f, "Camera"),
            Self::Skin => write!(f, "Skin"),
            Self::Custom(id) => write!(f, "Custom({id})"),
        }
    }
}

/// Dimensionality of a scene. Decides whether transformations are [`Mat3`]
/// or [`Mat4`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneDimensions {
    /// 2D scene with 3x3 homogeneous transforms.
    Two,
    /// 3D scene with 4x4 homogeneous transforms.
    Three,
}

impl fmt::Display for SceneDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two => write!(f, "2D"),
            Self::Three => write!(f, "3D"),
        }
    }
}

/// Typed value buffer of a field, one value per mapping entry.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneFieldValues {
    /// Parent links. `None` is a root.
    Parent(Vec<Option<u32>>),
    /// 2D transformation matrices.
    Matrix3(Vec<Mat3>),
    /// 3D transformation matrices.
    Matrix4(Vec<Mat4>),
    /// 2D translations or scalings.
    Vector2(Vec<Vec2>),
    /// 3D translations or scalings.
    Vector3(Vec<Vec3>),
    /// 2D rotation angles in radians.
    Angle(Vec<f32>),
    /// 3D rotations.
    Quaternion(Vec<Quat>),
    /// Indices into external resource lists.
    Index(Vec<u32>),
}

impl SceneFieldValues {
    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Parent(v) => v.len(),
            Self::Matrix3(v) => v.len(),
            Self::Matrix4(v) => v.len(),
            Self::Vector2(v) => v.len(),
            Self::Vector3(v) => v.len(),
            Self::Angle(v) => v.len(),
            Self::Quaternion(v) => v.len(),
            Self::Index(v) => v.len(),
        }
    }

    /// Returns whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the value type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Parent(_) => "parent",
            Self::Matrix3(_) => "3x3 matrix",
            Self::Matrix4(_) => "4x4 matrix",
            Self::Vector2(_) => "2D vector",
            Self::Vector3(_) => "3D vector",
            Self::Angle(_) => "angle",
            Self::Quaternion(_) => "quaternion",
            Self::Index(_) => "index",
        }
    }

    /// Whether these values are acceptable for `field` in a scene of the
    /// given dimensionality.
    pub(crate) fn is_valid_for(&self, field: SceneField, dimensions: SceneDimensions) -> bool {
        use SceneDimensions::{Three, Two};
        match (field, dimensions, self) {
            (SceneField::Parent, _, Self::Parent(_)) => true,
            (SceneField::Transformation, Two, Self::Matrix3(_)) => true,
            (SceneField::Transformation, Three, Self::Matrix4(_)) => true,
            (SceneField::Translation | SceneField::Scaling, Two, Self::Vector2(_)) => true,
            (SceneField::Translation | SceneField::Scaling, Three, Self::Vector3(_)) => true,
            (SceneField::Rotation, Two, Self::Angle(_)) => true,
            (SceneField::Rotation, Three, Self::Quaternion(_)) => true,
            (
                SceneField::Mesh
                | SceneField::MeshMaterial
                | SceneField::Light
                | SceneField::Camera
                | SceneField::Skin,
                _,
                Self::Index(_),
            ) => true,
            (SceneField::Custom(_), _, _) => true,
            _ => false,
        }
    }
}

/// A named field: `mapping[i]` is the object that `values[i]` belongs to.
///
/// Objects may appear in any order, more than once, or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFieldData {
    /// Field name.
    pub name: SceneField,
    /// Object identifier of each entry.
    pub mapping: Vec<u32>,
    /// Value of each entry.
    pub values: SceneFieldValues,
}

impl SceneFieldData {
    /// Creates a field. Lengths are checked when the field is added to a scene.
    pub fn new(name: SceneField, mapping: Vec<u32>, values: SceneFieldValues) -> Self {
        Self {
            name,
            mapping,
            values,
        }
    }

    /// Creates a [`SceneField::Parent`] field from `(object, parent)` pairs.
    pub fn parents(pairs: impl IntoIterator<Item = (u32, Option<u32>)>) -> Self {
        let (mapping, parents) = pairs.into_iter().unzip();
        Self::new(SceneField::Parent, mapping, SceneFieldValues::Parent(parents))
    }

    /// Creates a 2D [`SceneField::Transformation`] field.
    pub fn transformations_2d(pairs: impl IntoIterator<Item = (u32, Mat3)>) -> Self {
        let (mapping, values) = pairs.into_iter().unzip();
        Self::new(
            SceneField::Transformation,
            mapping,
            SceneFieldValues::Matrix3(values),
        )
    }

    /// Creates a 3D [`SceneField::Transformation`] field.
    pub fn transformations_3d(pairs: impl IntoIterator<Item = (u32, Mat4)>) -> Self {
        let (mapping, values) = pairs.into_iter().unzip();
        Self::new(
            SceneField::Transformation,
            mapping,
            SceneFieldValues::Matrix4(values),
        )
    }

    /// Creates an index field such as [`SceneField::Mesh`].
    pub fn indices(name: SceneField, pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let (mapping, values) = pairs.into_iter().unzip();
        Self::new(name, mapping, SceneFieldValues::Index(values))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Returns whether the field has no entries.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
