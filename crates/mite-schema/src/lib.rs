//! # mite-schema
//!
//! JSON Schema generation, registry and validation for MITE entries.
//!
//! Entity types are defined in `mite-core` with `#[derive(JsonSchema)]`, so
//! the schemas here are generated from the same definitions that drive
//! serialization. This crate adds:
//! - [`SchemaRegistry`]: named schemas for every entity type
//! - [`Validator`]: the `validate(document) -> ok | [(path, message)]` contract
//! - [`EntryValidator`]: a compiled validator for whole entry documents, built
//!   from the registry or from an external, versioned schema file

pub mod error;
pub mod registry;
pub mod validator;

pub use error::{SchemaError, ValidationIssue};
pub use registry::SchemaRegistry;
pub use validator::{EntryValidator, Validator};
