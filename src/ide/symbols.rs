//! Document outline extraction.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::Span;
use crate::core::text_utils::is_word_character;

/// Kind of outline symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Class,
    Struct,
    Enum,
    Constant,
    Variable,
    Event,
    Task,
    Interrupt,
}

impl SymbolKind {
    /// Convert to LSP symbol kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            SymbolKind::Function => 12,  // Function
            SymbolKind::Class => 5,      // Class
            SymbolKind::Struct => 23,    // Struct
            SymbolKind::Enum => 10,      // Enum
            SymbolKind::Constant => 14,  // Constant
            SymbolKind::Variable => 13,  // Variable
            SymbolKind::Event => 24,     // Event
            SymbolKind::Task => 12,      // Function
            SymbolKind::Interrupt => 24, // Event
        }
    }
}

/// A symbol for the document outline.
#[derive(Clone, Debug)]
pub struct SymbolInfo {
    /// Symbol name.
    pub name: SmolStr,
    /// Detail text (declaration shape).
    pub detail: Arc<str>,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Range of the symbol, always the whole declaration line.
    pub span: Span,
}

/// Extract the outline symbols of a document.
///
/// Every line is tested independently against nine declaration patterns, in
/// a fixed order: function, class, struct, enum, constant, variable, event,
/// task, interrupt. Each pattern that matches emits one symbol, so a single
/// line can produce several entries. Patterns are purely textual: the
/// trigger keyword matches anywhere in the line, with no word-boundary
/// check and no awareness of comments or strings.
///
/// Each symbol's range spans its entire source line, from column 0 to the
/// line's character length, regardless of where the match sits. Output
/// follows line order, then pattern order within a line.
pub fn document_symbols(text: &str) -> Vec<SymbolInfo> {
    let mut symbols = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let span = Span::on_line(index as u32, 0, chars.len() as u32);
        collect_line_symbols(&chars, span, &mut symbols);
    }
    symbols
}

fn collect_line_symbols(chars: &[char], span: Span, out: &mut Vec<SymbolInfo>) {
    if let Some(name) = keyword_then_name(chars, "fn", NameTail::OpenParen) {
        out.push(symbol(name, "fn", SymbolKind::Function, span));
    }
    if let Some(name) = keyword_then_name(chars, "class", NameTail::Bare) {
        out.push(symbol(name, "class", SymbolKind::Class, span));
    }
    if let Some(name) = keyword_then_name(chars, "struct", NameTail::Bare) {
        out.push(symbol(name, "struct", SymbolKind::Struct, span));
    }
    if let Some(name) = keyword_then_name(chars, "enum", NameTail::Bare) {
        out.push(symbol(name, "enum", SymbolKind::Enum, span));
    }
    if let Some((name, ty)) = typed_declaration(chars, "const") {
        out.push(symbol(name, format!("const {ty}"), SymbolKind::Constant, span));
    }
    if let Some((name, ty)) = typed_declaration(chars, "mut") {
        out.push(symbol(name, format!("mut {ty}"), SymbolKind::Variable, span));
    }
    if let Some(phrase) = event_phrase(chars) {
        out.push(symbol(
            SmolStr::new_static(phrase),
            "event handler",
            SymbolKind::Event,
            span,
        ));
    }
    if let Some(name) = keyword_then_name(chars, "task", NameTail::Whitespace) {
        out.push(symbol(name, "task", SymbolKind::Task, span));
    }
    if let Some(name) = keyword_then_name(chars, "interrupt", NameTail::Whitespace) {
        out.push(symbol(name, "interrupt", SymbolKind::Interrupt, span));
    }
}

fn symbol(name: SmolStr, detail: impl Into<Arc<str>>, kind: SymbolKind, span: Span) -> SymbolInfo {
    SymbolInfo {
        name,
        detail: detail.into(),
        kind,
        span,
    }
}

/// What must follow the captured name for the pattern to count.
#[derive(Clone, Copy)]
enum NameTail {
    /// Nothing further.
    Bare,
    /// A `(`, optionally after whitespace.
    OpenParen,
    /// At least one whitespace character.
    Whitespace,
}

/// Scan for `keyword`, one-or-more whitespace, then a captured word,
/// constrained by what must follow the word. Scanning resumes past a
/// keyword occurrence whose shape does not complete, so the first position
/// where the whole pattern matches wins.
fn keyword_then_name(chars: &[char], keyword: &str, tail: NameTail) -> Option<SmolStr> {
    let needle: Vec<char> = keyword.chars().collect();
    let mut from = 0;
    while let Some(start) = find_from(chars, from, &needle) {
        from = start + 1;
        let mut i = start + needle.len();
        if i >= chars.len() || !chars[i].is_whitespace() {
            continue;
        }
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let name_start = i;
        while i < chars.len() && is_word_character(chars[i]) {
            i += 1;
        }
        if i == name_start {
            continue;
        }
        let complete = match tail {
            NameTail::Bare => true,
            NameTail::OpenParen => {
                let mut j = i;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                j < chars.len() && chars[j] == '('
            }
            NameTail::Whitespace => i < chars.len() && chars[i].is_whitespace(),
        };
        if complete {
            return Some(chars[name_start..i].iter().copied().collect());
        }
    }
    None
}

/// Scan for `keyword`, a type word, a name word, then `=`, the shape of
/// `const int LED = 13` and `mut int counter = 0`. Returns name and type.
fn typed_declaration(chars: &[char], keyword: &str) -> Option<(SmolStr, SmolStr)> {
    let needle: Vec<char> = keyword.chars().collect();
    let mut from = 0;
    while let Some(start) = find_from(chars, from, &needle) {
        from = start + 1;
        let mut i = start + needle.len();
        if i >= chars.len() || !chars[i].is_whitespace() {
            continue;
        }
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let ty_start = i;
        while i < chars.len() && is_word_character(chars[i]) {
            i += 1;
        }
        if i == ty_start {
            continue;
        }
        let ty_end = i;
        if i >= chars.len() || !chars[i].is_whitespace() {
            continue;
        }
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let name_start = i;
        while i < chars.len() && is_word_character(chars[i]) {
            i += 1;
        }
        if i == name_start {
            continue;
        }
        let name_end = i;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i < chars.len() && chars[i] == '=' {
            return Some((
                chars[name_start..name_end].iter().copied().collect(),
                chars[ty_start..ty_end].iter().copied().collect(),
            ));
        }
    }
    None
}

/// Scan for `on` followed by whitespace and the literal `start` or `loop`.
/// The symbol name is the normalized two-word phrase.
fn event_phrase(chars: &[char]) -> Option<&'static str> {
    const ON: &[char] = &['o', 'n'];
    const START: &[char] = &['s', 't', 'a', 'r', 't'];
    const LOOP: &[char] = &['l', 'o', 'o', 'p'];

    let mut from = 0;
    while let Some(start) = find_from(chars, from, ON) {
        from = start + 1;
        let mut i = start + ON.len();
        if i >= chars.len() || !chars[i].is_whitespace() {
            continue;
        }
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if starts_at(chars, i, START) {
            return Some("on start");
        }
        if starts_at(chars, i, LOOP) {
            return Some("on loop");
        }
    }
    None
}

/// First occurrence of `needle` in `chars` at or after `from`.
fn find_from(chars: &[char], from: usize, needle: &[char]) -> Option<usize> {
    if needle.is_empty() || chars.len() < needle.len() {
        return None;
    }
    (from..=chars.len() - needle.len()).find(|&i| chars[i..i + needle.len()] == *needle)
}

fn starts_at(chars: &[char], at: usize, needle: &[char]) -> bool {
    at + needle.len() <= chars.len() && chars[at..at + needle.len()] == *needle
}
