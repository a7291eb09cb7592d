//! Backend field schema and the UI groupings derived from it.

pub mod classifier;
pub mod groups;
pub mod metadata;

pub use classifier::{FieldGroup, classify};
pub use groups::{GroupIndex, build_groups, visible_fields};
pub use metadata::{FieldMetadata, MetadataError};
