//! Foundation types for the Ember analysis engine.
//!
//! This module provides the types shared by every query resolver:
//! - [`Position`] - A cursor location (0-indexed line/column)
//! - [`Span`] - A line/column range with containment checks
//!
//! This module has NO dependencies on other ember-analysis modules.

mod position;

pub use position::{Position, Span};
