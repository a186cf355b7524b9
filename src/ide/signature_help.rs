//! Signature help implementation.

use crate::base::Position;
use crate::catalog::{BuiltinFunction, Catalog};
use crate::core::text_utils::{line_at, trailing_word};

/// One rendered callable signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureInfo {
    /// Rendered label, e.g. `digitalWrite(pin: int, value: int) -> void`.
    pub label: String,
    /// Documentation for the callable.
    pub doc: &'static str,
    /// Ordered parameter labels.
    pub parameters: Vec<&'static str>,
}

impl SignatureInfo {
    fn from_function(function: &BuiltinFunction) -> Self {
        Self {
            label: function.signature(),
            doc: function.doc,
            parameters: function.param_labels().collect(),
        }
    }
}

/// Result of a signature help request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureHelp {
    /// Matching signatures. Builtins are not overloaded, so this always
    /// holds exactly one entry.
    pub signatures: Vec<SignatureInfo>,
    /// Index of the active signature (always 0).
    pub active_signature: u32,
    /// Zero-based index of the parameter the cursor sits in.
    pub active_parameter: u32,
}

/// Get signature help for a call in progress.
///
/// Only the current line up to the cursor column is inspected. The call is
/// located by a single backward character scan: the first `(` encountered
/// from the cursor wins, and the identifier immediately before it is the
/// callee. The scan is not nesting-aware; a `)` sitting between the cursor
/// and that `(` is not matched off, so `map(random(1,2), ` resolves against
/// `random`, not `map`.
///
/// The callee is looked up among builtin functions only; user-defined
/// functions never resolve here. The active parameter is the flat count of
/// `,` characters strictly between the located `(` and the cursor (commas
/// inside nested parentheses, brackets, or string literals all contribute),
/// clamped to the callee's last parameter index. A zero-parameter callee
/// reports parameter 0.
///
/// Every failure along the way (no line, no `(`, no callee, unknown callee)
/// is a normal no-result.
pub fn signature_help(catalog: &Catalog, text: &str, position: Position) -> Option<SignatureHelp> {
    let line = line_at(text, position.line)?;
    let chars: Vec<char> = line.chars().collect();
    let cursor = (position.column as usize).min(chars.len());
    let prefix = &chars[..cursor];

    let open = prefix.iter().rposition(|&c| c == '(')?;
    let callee = trailing_word(prefix, open)?;
    let function = catalog.function(&callee)?;

    let commas = prefix[open + 1..].iter().filter(|&&c| c == ',').count();
    let active_parameter = commas.min(function.params.len().saturating_sub(1)) as u32;

    Some(SignatureHelp {
        signatures: vec![SignatureInfo::from_function(function)],
        active_signature: 0,
        active_parameter,
    })
}
