//! Hover information implementation.

use crate::base::{Position, Span};
use crate::catalog::{BuiltinFunction, Catalog};
use crate::core::text_utils::{find_word_boundaries, line_at};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// The span of the hovered word.
    pub span: Span,
}

/// Get hover information for a position.
///
/// Extracts the identifier word under the cursor and probes the catalog
/// categories in a fixed precedence order: builtin function, keyword
/// (storage keywords included), type, constant, directive. The first
/// category containing the exact word wins; a word matching nothing is a
/// normal no-result, not an error. The directive probe additionally
/// requires the `@` marker right before the word in the source.
pub fn hover(catalog: &Catalog, text: &str, position: Position) -> Option<HoverResult> {
    let line = line_at(text, position.line)?;
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = find_word_boundaries(&chars, position.column as usize)?;
    let word: String = chars[start..end].iter().collect();
    let marked = start > 0 && chars[start - 1] == '@';

    let Some(contents) = catalog_entry_content(catalog, &word, marked) else {
        tracing::trace!("[HOVER] '{}' matched no catalog entry", word);
        return None;
    };

    Some(HoverResult {
        contents,
        span: Span::on_line(position.line, start as u32, end as u32),
    })
}

fn catalog_entry_content(catalog: &Catalog, word: &str, marked: bool) -> Option<String> {
    if let Some(function) = catalog.function(word) {
        return Some(build_function_content(function));
    }
    if catalog.is_keyword(word) || catalog.is_storage_keyword(word) {
        return Some(format!("Keyword: {word}"));
    }
    if catalog.is_type(word) {
        return Some(format!("Type: {word}"));
    }
    if catalog.is_constant(word) {
        return Some(format!("Constant: {word}"));
    }
    // Word extraction never captures the `@` marker, so the directive
    // probe fires only when the source carries the marker, and looks the
    // word up with the marker restored.
    if marked {
        if let Some(directive) = catalog.directive(&format!("@{word}")) {
            return Some(format!("**{}** — {}", directive.name, directive.doc));
        }
    }
    None
}

/// Build markdown hover content for a builtin function.
fn build_function_content(function: &BuiltinFunction) -> String {
    let mut content = String::new();
    content.push_str("```ember\n");
    content.push_str("fn ");
    content.push_str(&function.signature());
    content.push_str("\n```\n\n");
    content.push_str(function.doc);
    content
}
