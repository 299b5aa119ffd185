//! The scene data container.

use thiserror::Error;

use super::types::{SceneDimensions, SceneField, SceneFieldData, SceneFieldValues};
use crate::math::{self, Mat3, Mat4};

/// Errors detected when assembling a [`SceneData`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneDataError {
    #[error("field {field} has {mapping} mapping entries but {values} values")]
    LengthMismatch {
        field: SceneField,
        mapping: usize,
        values: usize,
    },
    #[error("field {field} references object {object}, out of bounds for {bound} objects")]
    ObjectOutOfBounds {
        field: SceneField,
        object: u32,
        bound: usize,
    },
    #[error("object {object} has parent {parent}, out of bounds for {bound} objects")]
    ParentOutOfBounds { object: u32, parent: u32, bound: usize },
    #[error("field {0} is present more than once")]
    DuplicateField(SceneField),
    #[error("field {field} can't hold {found} values in a {dimensions} scene")]
    InvalidValues {
        field: SceneField,
        found: &'static str,
        dimensions: SceneDimensions,
    },
    #[error("field {field} doesn't share the object mapping of the other TRS fields")]
    TrsMappingMismatch { field: SceneField },
}

pub type SceneDataResult<T> = Result<T, SceneDataError>;

/// A flat scene: named fields of `(object, value)` entries over objects
/// `0..mapping_bound`.
///
/// All fields are validated once in [`SceneData::new`]; every accessor can
/// then rely on object and parent identifiers being in bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneData {
    dimensions: SceneDimensions,
    mapping_bound: usize,
    fields: Vec<SceneFieldData>,
}

impl SceneData {
    /// Creates a scene, validating every field against `mapping_bound` and
    /// `dimensions`.
    pub fn new(
        dimensions: SceneDimensions,
        mapping_bound: usize,
        fields: Vec<SceneFieldData>,
    ) -> SceneDataResult<Self> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SceneDataError::DuplicateField(field.name));
            }
            if field.mapping.len() != field.values.len() {
                return Err(SceneDataError::LengthMismatch {
                    field: field.name,
                    mapping: field.mapping.len(),
                    values: field.values.len(),
                });
            }
            if !field.values.is_valid_for(field.name, dimensions) {
                return Err(SceneDataError::InvalidValues {
                    field: field.name,
                    found: field.values.type_name(),
                    dimensions,
                });
            }
            if let Some(&object) = field
                .mapping
                .iter()
                .find(|&&object| object as usize >= mapping_bound)
            {
                return Err(SceneDataError::ObjectOutOfBounds {
                    field: field.name,
                    object,
                    bound: mapping_bound,
                });
            }
            if let SceneFieldValues::Parent(parents) = &field.values {
                let out_of_bounds = field
                    .mapping
                    .iter()
                    .zip(parents)
                    .find(|(_, parent)| parent.is_some_and(|p| p as usize >= mapping_bound));
                if let Some((&object, &Some(parent))) = out_of_bounds {
                    return Err(SceneDataError::ParentOutOfBounds {
                        object,
                        parent,
                        bound: mapping_bound,
                    });
                }
            }
        }

        let mut trs = fields.iter().filter(|f| {
            matches!(
                f.name,
                SceneField::Translation | SceneField::Rotation | SceneField::Scaling
            )
        });
        if let Some(first) = trs.next()
            && let Some(other) = trs.find(|f| f.mapping != first.mapping)
        {
            return Err(SceneDataError::TrsMappingMismatch { field: other.name });
        }

        log::trace!(
            "SceneData: {} scene, {} fields, mapping bound {}",
            dimensions,
            fields.len(),
            mapping_bound
        );

        Ok(Self {
            dimensions,
            mapping_bound,
            fields,
        })
    }

    /// Wraps fields that were built consistent by construction.
    pub(crate) fn from_validated(
        dimensions: SceneDimensions,
        mapping_bound: usize,
        fields: Vec<SceneFieldData>,
    ) -> Self {
        debug_assert!(Self::new(dimensions, mapping_bound, fields.clone()).is_ok());
        Self {
            dimensions,
            mapping_bound,
            fields,
        }
    }

    /// Scene dimensionality.
    pub fn dimensions(&self) -> SceneDimensions {
        self.dimensions
    }

    /// Whether the scene is 2D.
    pub fn is_2d(&self) -> bool {
        self.dimensions == SceneDimensions::Two
    }

    /// Whether the scene is 3D.
    pub fn is_3d(&self) -> bool {
        self.dimensions == SceneDimensions::Three
    }

    /// Exclusive upper bound on object identifiers.
    pub fn mapping_bound(&self) -> usize {
        self.mapping_bound
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// All fields, in insertion order. The position is the field ID.
    pub fn fields(&self) -> &[SceneFieldData] {
        &self.fields
    }

    /// Field with given ID.
    pub fn field(&self, id: usize) -> Option<&SceneFieldData> {
        self.fields.get(id)
    }

    /// Whether a field with given name exists.
    pub fn has_field(&self, name: SceneField) -> bool {
        self.field_id(name).is_some()
    }

    /// ID of the field with given name.
    pub fn field_id(&self, name: SceneField) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Name of the field with given ID.
    pub fn field_name(&self, id: usize) -> Option<SceneField> {
        self.field(id).map(|f| f.name)
    }

    /// Entry count of the field with given ID.
    pub fn field_size(&self, id: usize) -> Option<usize> {
        self.field(id).map(SceneFieldData::len)
    }

    /// Object mapping of the field with given ID.
    pub fn field_mapping(&self, id: usize) -> Option<&[u32]> {
        self.field(id).map(|f| f.mapping.as_slice())
    }

    fn named(&self, name: SceneField) -> Option<&SceneFieldData> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// `(object, parent)` pairs of the [`SceneField::Parent`] field, in field
    /// order, or `None` if the scene has no hierarchy.
    pub fn parents_as_array(&self) -> Option<Vec<(u32, Option<u32>)>> {
        let field = self.named(SceneField::Parent)?;
        let SceneFieldValues::Parent(parents) = &field.values else {
            return None;
        };
        Some(
            field
                .mapping
                .iter()
                .copied()
                .zip(parents.iter().copied())
                .collect(),
        )
    }

    /// `(object, local transformation)` pairs of a 2D scene.
    ///
    /// Uses [`SceneField::Transformation`] if present, otherwise combines
    /// translation, rotation and scaling. Empty for 3D scenes or scenes
    /// without transformation fields.
    pub fn transformations_2d_as_array(&self) -> Vec<(u32, Mat3)> {
        if !self.is_2d() {
            return Vec::new();
        }
        if let Some(field) = self.named(SceneField::Transformation)
            && let SceneFieldValues::Matrix3(values) = &field.values
        {
            return field.mapping.iter().copied().zip(values.iter().copied()).collect();
        }

        let Some(mapping) = self.trs_mapping() else {
            return Vec::new();
        };
        let translations = match self.named(SceneField::Translation).map(|f| &f.values) {
            Some(SceneFieldValues::Vector2(v)) => Some(v),
            _ => None,
        };
        let rotations = match self.named(SceneField::Rotation).map(|f| &f.values) {
            Some(SceneFieldValues::Angle(v)) => Some(v),
            _ => None,
        };
        let scalings = match self.named(SceneField::Scaling).map(|f| &f.values) {
            Some(SceneFieldValues::Vector2(v)) => Some(v),
            _ => None,
        };

        mapping
            .iter()
            .enumerate()
            .map(|(i, &object)| {
                let t = translations.map_or_else(math::Vec2::zeros, |v| v[i]);
                let r = rotations.map_or(0.0, |v| v[i]);
                let s = scalings.map_or_else(|| math::Vec2::new(1.0, 1.0), |v| v[i]);
                (object, math::mat3_from_translation_rotation_scaling(t, r, s))
            })
            .collect()
    }

    /// `(object, local transformation)` pairs of a 3D scene.
    ///
    /// Uses [`SceneField::Transformation`] if present, otherwise combines
    /// translation, rotation and scaling. Empty for 2D scenes or scenes
    /// without transformation fields.
    pub fn transformations_3d_as_array(&self) -> Vec<(u32, Mat4)> {
        if !self.is_3d() {
            return Vec::new();
        }
        if let Some(field) = self.named(SceneField::Transformation)
            && let SceneFieldValues::Matrix4(values) = &field.values
        {
            return field.mapping.iter().copied().zip(values.iter().copied()).collect();
        }

        let Some(mapping) = self.trs_mapping() else {
            return Vec::new();
        };
        let translations = match self.named(SceneField::Translation).map(|f| &f.values) {
            Some(SceneFieldValues::Vector3(v)) => Some(v),
            _ => None,
        };
        let rotations = match self.named(SceneField::Rotation).map(|f| &f.values) {
            Some(SceneFieldValues::Quaternion(v)) => Some(v),
            _ => None,
        };
        let scalings = match self.named(SceneField::Scaling).map(|f| &f.values) {
            Some(SceneFieldValues::Vector3(v)) => Some(v),
            _ => None,
        };

        mapping
            .iter()
            .enumerate()
            .map(|(i, &object)| {
                let t = translations.map_or_else(math::Vec3::zeros, |v| v[i]);
                let r = rotations.map_or_else(math::Quat::identity, |v| v[i]);
                let s = scalings.map_or_else(|| math::Vec3::new(1.0, 1.0, 1.0), |v| v[i]);
                (object, math::mat4_from_scale_rotation_translation(s, r, t))
            })
            .collect()
    }

    /// Mapping shared by the TRS fields, validated identical in [`Self::new`].
    fn trs_mapping(&self) -> Option<&[u32]> {
        [
            SceneField::Translation,
            SceneField::Rotation,
            SceneField::Scaling,
        ]
        .into_iter()
        .find_map(|name| self.named(name))
        .map(|f| f.mapping.as_slice())
    }
}
