//! Common types and utilities for the javelin static analyzer.
//!
//! This crate provides foundational types used across all javelin crates:
//! - Binary-name string utilities (`names`)
//! - Opaque handles into the host parser's syntax tree (`FileId`,
//!   `NodeIndex`, `SyntaxRef`)

// Binary names, canonical names, array suffixes
pub mod names;

// Syntax-tree handles - the boundary with the parser layer
pub mod syntax;
pub use syntax::{FileId, NodeIndex, SyntaxRef};
