//! Catalog content and validation tests.

use ember_analysis::catalog::{BuiltinFunction, Catalog, CatalogError, Category, Directive, Param};

// ============================================================================
// Vocabulary contents
// ============================================================================

#[test]
fn test_category_sizes() {
    let catalog = Catalog::global();
    assert_eq!(catalog.keywords().count(), 19);
    assert_eq!(catalog.storage_keywords().count(), 2);
    assert_eq!(catalog.types().count(), 8);
    assert_eq!(catalog.constants().count(), 11);
    assert_eq!(catalog.functions().count(), 14);
    assert_eq!(catalog.directives().count(), 4);
    assert_eq!(catalog.candidate_count(), 19 + 2 + 8 + 11 + 14 + 4);
}

#[test]
fn test_core_vocabulary_present() {
    let catalog = Catalog::global();

    for keyword in ["fn", "if", "else", "while", "for", "task", "interrupt"] {
        assert!(catalog.is_keyword(keyword), "missing keyword: {keyword}");
    }
    for storage in ["const", "mut"] {
        assert!(
            catalog.is_storage_keyword(storage),
            "missing storage keyword: {storage}"
        );
    }
    for ty in ["int", "uint", "long", "float", "bool", "byte", "string", "void"] {
        assert!(catalog.is_type(ty), "missing type: {ty}");
    }
    for constant in ["HIGH", "LOW", "INPUT_PULLUP", "LED_BUILTIN", "true", "false"] {
        assert!(catalog.is_constant(constant), "missing constant: {constant}");
    }
    for function in ["pinMode", "digitalWrite", "delay", "millis", "map", "random"] {
        assert!(
            catalog.function(function).is_some(),
            "missing builtin: {function}"
        );
    }
    for directive in ["@main", "@board", "@import", "@baud"] {
        assert!(
            catalog.directive(directive).is_some(),
            "missing directive: {directive}"
        );
    }
}

#[test]
fn test_builtin_signatures() {
    let catalog = Catalog::global();

    let digital_write = catalog.function("digitalWrite").unwrap();
    assert_eq!(digital_write.params.len(), 2);
    assert_eq!(
        digital_write.signature(),
        "digitalWrite(pin: int, value: int) -> void"
    );

    let millis = catalog.function("millis").unwrap();
    assert!(millis.params.is_empty());
    assert_eq!(millis.signature(), "millis() -> long");

    let map = catalog.function("map").unwrap();
    assert_eq!(map.params.len(), 5);

    let delay = catalog.function("delay").unwrap();
    assert!(
        delay.doc.contains("Pauses the program"),
        "delay doc should describe the pause. Got: {}",
        delay.doc
    );
}

#[test]
fn test_every_builtin_is_documented() {
    let catalog = Catalog::global();
    for function in catalog.functions() {
        assert!(
            !function.doc.is_empty(),
            "builtin {} has no documentation",
            function.name
        );
        assert!(
            !function.return_type.is_empty(),
            "builtin {} has no return type",
            function.name
        );
    }
    for directive in catalog.directives() {
        assert!(
            !directive.doc.is_empty(),
            "directive {} has no documentation",
            directive.name
        );
    }
}

// ============================================================================
// Lookup semantics
// ============================================================================

#[test]
fn test_lookups_are_case_sensitive() {
    let catalog = Catalog::global();
    assert!(catalog.function("DigitalWrite").is_none());
    assert!(!catalog.is_constant("high"));
    assert!(!catalog.is_keyword("FN"));
}

#[test]
fn test_directive_lookup_requires_marker() {
    let catalog = Catalog::global();
    assert!(catalog.directive("@main").is_some());
    assert!(catalog.directive("main").is_none());
}

#[test]
fn test_iteration_follows_declaration_order() {
    let catalog = Catalog::global();

    let keywords: Vec<&str> = catalog.keywords().collect();
    assert_eq!(keywords[0], "fn");
    assert_eq!(*keywords.last().unwrap(), "when");

    let functions: Vec<&str> = catalog.functions().map(|f| f.name).collect();
    assert_eq!(functions[0], "pinMode");
    assert_eq!(*functions.last().unwrap(), "random");

    let directives: Vec<&str> = catalog.directives().map(|d| d.name).collect();
    assert_eq!(directives, ["@main", "@board", "@import", "@baud"]);
}

// ============================================================================
// Validation invariants
// ============================================================================

const DUPLICATED_BUILTINS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "tone",
        params: &[Param { label: "pin: int" }],
        return_type: "void",
        doc: "Plays a tone.",
    },
    BuiltinFunction {
        name: "tone",
        params: &[Param { label: "pin: int" }, Param { label: "freq: int" }],
        return_type: "void",
        doc: "Plays a tone at a frequency.",
    },
];

#[test]
fn test_duplicate_builtin_fails_load() {
    let result = Catalog::from_parts(&[], &[], &[], &[], DUPLICATED_BUILTINS, &[]);
    assert_eq!(
        result.unwrap_err(),
        CatalogError::DuplicateName {
            category: Category::Function,
            name: "tone"
        }
    );
}

#[test]
fn test_duplicate_constant_fails_load() {
    const CONSTANTS: &[&str] = &["HIGH", "LOW", "HIGH"];
    let result = Catalog::from_parts(&[], &[], &[], CONSTANTS, &[], &[]);
    assert!(matches!(
        result,
        Err(CatalogError::DuplicateName {
            category: Category::Constant,
            name: "HIGH"
        })
    ));
}

#[test]
fn test_cross_category_collision_is_permitted() {
    const KEYWORDS: &[&str] = &["start"];
    const CONSTANTS: &[&str] = &["start"];
    let catalog = Catalog::from_parts(KEYWORDS, &[], &[], CONSTANTS, &[], &[]).unwrap();
    assert!(catalog.is_keyword("start"));
    assert!(catalog.is_constant("start"));
}

#[test]
fn test_error_messages_name_the_offender() {
    const UNMARKED: &[Directive] = &[Directive {
        name: "main",
        doc: "Entry point.",
    }];
    let error = Catalog::from_parts(&[], &[], &[], &[], &[], UNMARKED).unwrap_err();
    let message = error.to_string();
    assert!(
        message.contains("main") && message.contains('@'),
        "message should name the directive and the marker. Got: {message}"
    );
}
