//! IDE features — High-level APIs for editor integration.
//!
//! This module answers the point-in-time editor queries: completion,
//! hover, signature help, and document outline. Each function corresponds
//! to one editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a text snapshot and position in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the editor boundary
//! 3. **Stateless**: Resolvers share only the read-only catalog
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use ember_analysis::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("blink.emb", "@main\n\non start {\n  delay(500)\n}");
//!
//! let analysis = host.analysis("blink.emb").unwrap();
//! let symbols = analysis.document_symbols();
//! ```

mod analysis;
mod completion;
mod hover;
mod signature_help;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use hover::{HoverResult, hover};
pub use signature_help::{SignatureHelp, SignatureInfo, signature_help};
pub use symbols::{SymbolInfo, SymbolKind, document_symbols};
