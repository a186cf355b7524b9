//! The Ember symbol catalog — immutable, load-once language vocabulary.
//!
//! The catalog holds everything the resolvers know about Ember: keyword
//! sets, storage keywords, primitive types, named constants, builtin
//! function signatures, and file-level directives. It is built once at
//! engine startup, validated, and never mutated afterwards, so concurrent
//! reads need no synchronization.
//!
//! Lookups are exact string matches, never fuzzy or case-insensitive.
//! Iteration order within each category is declaration order, which is
//! also the order completion candidates are emitted in.

mod data;
mod error;

pub use error::CatalogError;

use std::fmt;
use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;
type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The category a catalog name belongs to.
///
/// Categories are disjoint; the same name may appear in several categories
/// and hover resolves such collisions by its fixed probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Storage,
    Type,
    Constant,
    Function,
    Directive,
}

impl Category {
    /// Human-readable category label.
    pub fn display(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Storage => "storage keyword",
            Category::Type => "type",
            Category::Constant => "constant",
            Category::Function => "builtin function",
            Category::Directive => "directive",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// One parameter of a builtin function.
///
/// The label already carries the `name: type` rendering used at call sites;
/// parameter order maps to argument order and is never rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub label: &'static str,
}

/// A builtin callable known to the engine: name, ordered parameters,
/// return type, and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub params: &'static [Param],
    pub return_type: &'static str,
    pub doc: &'static str,
}

impl BuiltinFunction {
    /// Render the call signature, e.g. `digitalWrite(pin: int, value: int) -> void`.
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.params.iter().map(|p| p.label).collect();
        format!("{}({}) -> {}", self.name, params.join(", "), self.return_type)
    }

    /// The ordered parameter labels.
    pub fn param_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|p| p.label)
    }
}

/// A file-level directive such as `@main`. The name includes the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub name: &'static str,
    pub doc: &'static str,
}

/// The immutable vocabulary table shared by all resolvers.
///
/// Construct via [`Catalog::load`] (validates the builtin tables) or reach
/// the process-wide instance through [`Catalog::global`].
#[derive(Debug, Clone)]
pub struct Catalog {
    keywords: FxIndexSet<&'static str>,
    storage_keywords: FxIndexSet<&'static str>,
    types: FxIndexSet<&'static str>,
    constants: FxIndexSet<&'static str>,
    functions: FxIndexMap<&'static str, &'static BuiltinFunction>,
    directives: FxIndexMap<&'static str, &'static Directive>,
}

static GLOBAL: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::load().expect("builtin vocabulary tables are malformed"));

impl Catalog {
    /// Build and validate the catalog from the builtin vocabulary tables.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_parts(
            data::KEYWORDS,
            data::STORAGE_KEYWORDS,
            data::PRIMITIVE_TYPES,
            data::CONSTANTS,
            data::BUILTIN_FUNCTIONS,
            data::DIRECTIVES,
        )?;
        tracing::debug!(
            "[CATALOG] Loaded {} keywords, {} storage keywords, {} types, {} constants, {} builtins, {} directives",
            catalog.keywords.len(),
            catalog.storage_keywords.len(),
            catalog.types.len(),
            catalog.constants.len(),
            catalog.functions.len(),
            catalog.directives.len()
        );
        Ok(catalog)
    }

    /// The process-wide catalog. Malformed builtin tables abort here:
    /// that is a fatal startup error, never a per-query one.
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    /// Build a catalog from explicit tables, validating every invariant:
    /// names are non-empty and unique within their category, directive
    /// names carry their `@` marker, parameter labels are non-empty.
    pub fn from_parts(
        keywords: &'static [&'static str],
        storage_keywords: &'static [&'static str],
        types: &'static [&'static str],
        constants: &'static [&'static str],
        functions: &'static [BuiltinFunction],
        directives: &'static [Directive],
    ) -> Result<Self, CatalogError> {
        let keywords = build_set(Category::Keyword, keywords)?;
        let storage_keywords = build_set(Category::Storage, storage_keywords)?;
        let types = build_set(Category::Type, types)?;
        let constants = build_set(Category::Constant, constants)?;

        let mut function_map =
            FxIndexMap::with_capacity_and_hasher(functions.len(), FxBuildHasher);
        for function in functions {
            if function.name.is_empty() {
                return Err(CatalogError::EmptyName {
                    category: Category::Function,
                });
            }
            if function.params.iter().any(|p| p.label.is_empty()) {
                return Err(CatalogError::EmptyParamLabel {
                    function: function.name,
                });
            }
            if function_map.insert(function.name, function).is_some() {
                return Err(CatalogError::DuplicateName {
                    category: Category::Function,
                    name: function.name,
                });
            }
        }

        let mut directive_map =
            FxIndexMap::with_capacity_and_hasher(directives.len(), FxBuildHasher);
        for directive in directives {
            if directive.name.is_empty() {
                return Err(CatalogError::EmptyName {
                    category: Category::Directive,
                });
            }
            if !directive.name.starts_with('@') {
                return Err(CatalogError::UnmarkedDirective {
                    name: directive.name,
                });
            }
            if directive_map.insert(directive.name, directive).is_some() {
                return Err(CatalogError::DuplicateName {
                    category: Category::Directive,
                    name: directive.name,
                });
            }
        }

        Ok(Self {
            keywords,
            storage_keywords,
            types,
            constants,
            functions: function_map,
            directives: directive_map,
        })
    }

    // ==================== Iteration (declaration order) ====================

    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keywords.iter().copied()
    }

    pub fn storage_keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.storage_keywords.iter().copied()
    }

    pub fn types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.iter().copied()
    }

    pub fn constants(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constants.iter().copied()
    }

    pub fn functions(&self) -> impl Iterator<Item = &'static BuiltinFunction> + '_ {
        self.functions.values().copied()
    }

    pub fn directives(&self) -> impl Iterator<Item = &'static Directive> + '_ {
        self.directives.values().copied()
    }

    // ==================== Exact-match lookups ====================

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_storage_keyword(&self, word: &str) -> bool {
        self.storage_keywords.contains(word)
    }

    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(word)
    }

    pub fn is_constant(&self, word: &str) -> bool {
        self.constants.contains(word)
    }

    /// Look up a builtin function by exact name.
    pub fn function(&self, name: &str) -> Option<&'static BuiltinFunction> {
        self.functions.get(name).copied()
    }

    /// Look up a directive by exact name (including its `@` marker).
    pub fn directive(&self, name: &str) -> Option<&'static Directive> {
        self.directives.get(name).copied()
    }

    /// Total number of entries across all six categories, which is also
    /// the size of the completion candidate set.
    pub fn candidate_count(&self) -> usize {
        self.keywords.len()
            + self.storage_keywords.len()
            + self.types.len()
            + self.constants.len()
            + self.functions.len()
            + self.directives.len()
    }
}

fn build_set(
    category: Category,
    names: &'static [&'static str],
) -> Result<FxIndexSet<&'static str>, CatalogError> {
    let mut set = FxIndexSet::with_capacity_and_hasher(names.len(), FxBuildHasher);
    for &name in names {
        if name.is_empty() {
            return Err(CatalogError::EmptyName { category });
        }
        if !set.insert(name) {
            return Err(CatalogError::DuplicateName { category, name });
        }
    }
    Ok(set)
}
