//! # mite-core
//!
//! Entity model, controlled vocabularies, and error types shared by every
//! MITE crate.
//!
//! This crate provides:
//! - Entity structs for an annotation record (entry, enzyme, reactions, changelog)
//! - Controlled-vocabulary enums (status, quality, tailoring function, evidence code)
//! - `DocPath`, the JSON-Pointer-like locator used in error reports
//! - `DecodeError`, the error kinds every decoder reports
//!
//! Entities are plain values. They are built once by a decoder through their
//! validating constructors and never mutated afterwards.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod path;
