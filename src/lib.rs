//! # ember-analysis
//!
//! Language intelligence for Ember, a small embedded-scripting language
//! for microcontroller firmware. The engine answers point-in-time editor
//! queries (completion, hover, signature help, document outline) from a
//! static vocabulary catalog and lightweight lexical scanning. There is no
//! parser, no AST, and no state carried across queries.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide        → Query resolvers (completion, hover, signature help, outline)
//!   ↓
//! catalog    → Immutable language vocabulary, loaded once
//!   ↓
//! core       → Word-boundary scanning over lines of text
//!   ↓
//! base       → Primitives (Position, Span)
//!
//! toolchain  → `emberc` process adapter (standalone; ide never calls it)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → catalog → ide)
// ============================================================================

/// Foundation types: Position, Span
pub mod base;

/// Text scanning: word boundaries, line access
pub mod core;

/// The static language vocabulary: keywords, types, builtins, directives
pub mod catalog;

/// IDE features: completion, hover, signature help, document outline
pub mod ide;

/// External toolchain invocation: build, upload, run, version
pub mod toolchain;

// Re-export foundation types
pub use base::{Position, Span};
pub use catalog::{Catalog, CatalogError};
pub use ide::{Analysis, AnalysisHost};
