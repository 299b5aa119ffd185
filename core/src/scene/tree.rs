//! Nested node trees and their conversion to flat [`SceneData`].
//!
//! Loaders and hand-written scenes often describe a hierarchy as nested
//! nodes. [`flatten_node_tree`] turns such a tree into a 3D scene whose
//! [`SceneField::Parent`] field encodes the same hierarchy.

use super::data::SceneData;
use super::types::{SceneDimensions, SceneField, SceneFieldData, SceneFieldValues};
use crate::math::{self, Mat4, Vec3};

/// Node transform decomposed into translation, rotation, and scale.
///
/// Uses plain arrays for portability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    /// Translation [x, y, z].
    pub translation: [f32; 3],
    /// Rotation quaternion [x, y, z, w].
    pub rotation: [f32; 4],
    /// Scale [x, y, z].
    pub scale: [f32; 3],
}

impl NodeTransform {
    /// Identity transform: no translation, identity rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0, 1.0, 1.0],
    };

    /// Returns this transform with a different translation.
    #[must_use]
    pub const fn with_translation(mut self, translation: [f32; 3]) -> Self {
        self.translation = translation;
        self
    }

    /// Returns this transform with a different rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: [f32; 4]) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns this transform with a different scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: [f32; 3]) -> Self {
        self.scale = scale;
        self
    }

    /// Local matrix, scale applied first and translation last.
    pub fn to_matrix(&self) -> Mat4 {
        math::mat4_from_scale_rotation_translation(
            Vec3::from(self.scale),
            math::quat_from_array(self.rotation),
            Vec3::from(self.translation),
        )
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A node in a nested scene tree.
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    /// Node name, if any.
    pub name: Option<String>,
    /// Local transform relative to parent.
    pub transform: NodeTransform,
    /// Mesh indices. Each one becomes a separate [`SceneField::Mesh`] entry.
    pub meshes: Vec<u32>,
    /// Child nodes forming the sub-tree.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates a new node with identity transform and no attachments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: NodeTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the mesh indices.
    #[must_use]
    pub fn with_meshes(mut self, meshes: Vec<u32>) -> Self {
        self.meshes = meshes;
        self
    }

    /// Set the child nodes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }
}

/// Converts a forest of nested nodes into a flat 3D scene.
///
/// Objects are numbered in depth-first pre-order, so the first root is object
/// `0`. The result carries [`SceneField::Parent`], [`SceneField::Translation`],
/// [`SceneField::Rotation`] and [`SceneField::Scaling`] for every node, plus
/// one [`SceneField::Mesh`] entry per mesh reference. Node names are returned
/// alongside, indexed by object.
pub fn flatten_node_tree(roots: &[SceneNode]) -> (SceneData, Vec<Option<String>>) {
    let mut parents = Vec::new();
    let mut translations = Vec::new();
    let mut rotations = Vec::new();
    let mut scalings = Vec::new();
    let mut mesh_mapping = Vec::new();
    let mut meshes = Vec::new();
    let mut names = Vec::new();

    // Explicit stack so arbitrarily deep trees don't overflow.
    let mut stack: Vec<(&SceneNode, Option<u32>)> =
        roots.iter().rev().map(|node| (node, None)).collect();
    while let Some((node, parent)) = stack.pop() {
        let object = parents.len() as u32;
        parents.push(parent);
        translations.push(Vec3::from(node.transform.translation));
        rotations.push(math::quat_from_array(node.transform.rotation));
        scalings.push(Vec3::from(node.transform.scale));
        names.push(node.name.clone());
        for &mesh in &node.meshes {
            mesh_mapping.push(object);
            meshes.push(mesh);
        }
        stack.extend(node.children.iter().rev().map(|child| (child, Some(object))));
    }

    let count = parents.len();
    let mapping: Vec<u32> = (0..count as u32).collect();
    log::debug!(
        "Flattened node tree: {} objects, {} mesh references",
        count,
        meshes.len()
    );

    let fields = vec![
        SceneFieldData::new(
            SceneField::Parent,
            mapping.clone(),
            SceneFieldValues::Parent(parents),
        ),
        SceneFieldData::new(
            SceneField::Translation,
            mapping.clone(),
            SceneFieldValues::Vector3(translations),
        ),
        SceneFieldData::new(
            SceneField::Rotation,
            mapping.clone(),
            SceneFieldValues::Quaternion(rotations),
        ),
        SceneFieldData::new(
            SceneField::Scaling,
            mapping,
            SceneFieldValues::Vector3(scalings),
        ),
        SceneFieldData::new(
            SceneField::Mesh,
            mesh_mapping,
            SceneFieldValues::Index(meshes),
        ),
    ];

    (
        SceneData::from_validated(SceneDimensions::Three, count, fields),
        names,
    )
}
