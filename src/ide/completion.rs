//! Completion suggestions implementation.

use std::sync::Arc;

use crate::base::Position;
use crate::catalog::Catalog;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Keyword,
    Storage,
    Type,
    Constant,
    Function,
    Directive,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Keyword => 14,  // Keyword
            CompletionKind::Storage => 14,  // Keyword
            CompletionKind::Type => 7,      // Class
            CompletionKind::Constant => 21, // Constant
            CompletionKind::Function => 3,  // Function
            CompletionKind::Directive => 10, // Property
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Arc<str>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(
        label: impl Into<Arc<str>>,
        kind: CompletionKind,
        detail: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: detail.into(),
            documentation: None,
            insert_text: None,
        }
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }
}

/// Get completion suggestions at a position.
///
/// Completion is context-free: the full catalog is offered regardless of
/// the surrounding text, so `text` and `position` are accepted only for
/// interface symmetry with the other resolvers. The candidate count always
/// equals [`Catalog::candidate_count`], and candidates come out grouped by
/// category (keywords, storage keywords, types, constants, functions,
/// directives) in catalog declaration order within each group.
pub fn completions(catalog: &Catalog, _text: &str, _position: Position) -> Vec<CompletionItem> {
    let mut items = Vec::with_capacity(catalog.candidate_count());

    for keyword in catalog.keywords() {
        items.push(CompletionItem::new(keyword, CompletionKind::Keyword, "keyword"));
    }

    for storage in catalog.storage_keywords() {
        items.push(CompletionItem::new(
            storage,
            CompletionKind::Storage,
            "storage keyword",
        ));
    }

    for ty in catalog.types() {
        items.push(CompletionItem::new(ty, CompletionKind::Type, "type"));
    }

    for constant in catalog.constants() {
        items.push(CompletionItem::new(
            constant,
            CompletionKind::Constant,
            "constant",
        ));
    }

    for function in catalog.functions() {
        items.push(
            CompletionItem::new(function.name, CompletionKind::Function, function.signature())
                .with_documentation(function.doc)
                .with_insert_text(format!("{}($0)", function.name)),
        );
    }

    for directive in catalog.directives() {
        items.push(
            CompletionItem::new(directive.name, CompletionKind::Directive, "directive")
                .with_documentation(directive.doc),
        );
    }

    items
}
