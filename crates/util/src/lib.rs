//! gyb-util - Utility functions for the gyb syntax-node boilerplate generator
//!
//! This crate provides the small, stateless helpers the generator uses while
//! assembling syntax-node definitions: string matching predicates, collection
//! tagging, required-key validation, and description line splitting.

pub mod collection_tag;
pub mod require_keys;
pub mod strings;

// Re-exports for convenience
pub use collection_tag::{tag_as_collection, BASE_KIND_KEY, SYNTAX_COLLECTION};
pub use require_keys::{
    ensure_required_keys, ensure_required_keys_hashmap, ensure_required_keys_map, MissingKeysError,
};
pub use strings::{contains, dedented_lines, ends_with, starts_with};
