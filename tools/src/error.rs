//! Error types for hierarchy operations.

use sceneflat_core::scene::{SceneDimensions, SceneField};
use thiserror::Error;

/// Caller contract violations detected before any traversal starts.
///
/// Nothing is written to output buffers when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("field {field_id} out of range for {field_count} fields")]
    FieldOutOfRange { field_id: usize, field_count: usize },
    #[error("field {0} not found")]
    FieldNotFound(SceneField),
    #[error("the scene has no parent field")]
    MissingParentField,
    #[error("expected a {expected} scene but got a {actual} one")]
    DimensionMismatch {
        expected: SceneDimensions,
        actual: SceneDimensions,
    },
    #[error("expected an output of {expected} entries but got {actual}")]
    OutputSizeMismatch { expected: usize, actual: usize },
    #[error("object {object} has more than one parent entry")]
    DuplicateParent { object: u32 },
    #[error("the hierarchy contains a cycle through object {object}")]
    Cycle { object: u32 },
}

pub type HierarchyResult<T> = Result<T, HierarchyError>;
