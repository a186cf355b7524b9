//! AnalysisHost and Analysis — entry points for editor queries.
//!
//! The `AnalysisHost` owns the current text of open documents and hands
//! out per-document `Analysis` snapshots for querying. A snapshot pairs
//! one immutable text snapshot with the process-wide catalog; every query
//! is a pure function over that pair, so overlapping queries from
//! concurrent editor events need no locking.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new();
//! host.set_file_content("blink.emb", "fn setup(pin: int) {\n}");
//!
//! let analysis = host.analysis("blink.emb").unwrap();
//! let symbols = analysis.document_symbols();
//! let hover = analysis.hover(Position::new(0, 1));
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;

use crate::base::Position;
use crate::catalog::Catalog;

use super::{CompletionItem, HoverResult, SignatureHelp, SymbolInfo};

/// Owns the current text of open documents.
///
/// Apply changes via `set_file_content()` and `remove_file()`, then query
/// through an `analysis()` snapshot. No derived state is kept between
/// calls; the engine is stateless and single-file-scoped, so changing one
/// document never affects queries on another.
#[derive(Default)]
pub struct AnalysisHost {
    files: HashMap<PathBuf, String>,
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Set the content of a document.
    pub fn set_file_content(&mut self, path: &str, content: &str) {
        self.files.insert(PathBuf::from(path), content.to_owned());
    }

    /// Remove a document.
    pub fn remove_file(&mut self, path: &str) {
        self.files.remove(Path::new(path));
    }

    /// Check if a document is present.
    pub fn has_file(&self, path: &str) -> bool {
        self.files.contains_key(Path::new(path))
    }

    /// Get the stored text of a document.
    pub fn file_text(&self, path: &str) -> Option<&str> {
        self.files.get(Path::new(path)).map(String::as_str)
    }

    /// Get the number of documents loaded.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Get a query snapshot for one document.
    pub fn analysis(&self, path: &str) -> Option<Analysis<'_>> {
        let text = self.file_text(path)?;
        Some(Analysis::new(text))
    }

    /// Get a query snapshot for one document, tied to a cancellation token.
    pub fn analysis_with_cancellation(
        &self,
        path: &str,
        cancel: CancellationToken,
    ) -> Option<Analysis<'_>> {
        let text = self.file_text(path)?;
        Some(Analysis::with_cancellation(text, cancel))
    }
}

/// An immutable snapshot of one document plus the catalog.
///
/// All queries go through this struct. Each one polls the snapshot's
/// cancellation token first and degrades to no-result when it is
/// signalled; cancellation is best-effort, since every query is a bounded
/// scan over a single line or the catalog.
pub struct Analysis<'a> {
    catalog: &'static Catalog,
    text: &'a str,
    cancel: CancellationToken,
}

impl<'a> Analysis<'a> {
    /// Create a snapshot over a text, never cancelled.
    pub fn new(text: &'a str) -> Self {
        Self::with_cancellation(text, CancellationToken::new())
    }

    /// Create a snapshot over a text, tied to a cancellation token.
    pub fn with_cancellation(text: &'a str, cancel: CancellationToken) -> Self {
        Self {
            catalog: Catalog::global(),
            text,
            cancel,
        }
    }

    /// Get completions at a position.
    /// Returns no candidates if the cancellation token is signalled.
    pub fn completions(&self, position: Position) -> Vec<CompletionItem> {
        if self.cancel.is_cancelled() {
            return Vec::new();
        }
        super::completions(self.catalog, self.text, position)
    }

    /// Get hover information at a position.
    /// Returns `None` if the cancellation token is signalled.
    pub fn hover(&self, position: Position) -> Option<HoverResult> {
        if self.cancel.is_cancelled() {
            return None;
        }
        super::hover(self.catalog, self.text, position)
    }

    /// Get signature help at a position.
    /// Returns `None` if the cancellation token is signalled.
    pub fn signature_help(&self, position: Position) -> Option<SignatureHelp> {
        if self.cancel.is_cancelled() {
            return None;
        }
        super::signature_help(self.catalog, self.text, position)
    }

    /// Get the outline symbols of the document.
    /// Returns no symbols if the cancellation token is signalled.
    pub fn document_symbols(&self) -> Vec<SymbolInfo> {
        if self.cancel.is_cancelled() {
            return Vec::new();
        }
        super::document_symbols(self.text)
    }

    /// Get the snapshot's text.
    pub fn text(&self) -> &str {
        self.text
    }

    /// Get the catalog the snapshot queries against.
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }
}
