//! Completion tests for the IDE layer.

use rstest::rstest;

use ember_analysis::base::Position;
use ember_analysis::catalog::Catalog;
use ember_analysis::ide::{CompletionKind, completions};

use crate::helpers::source_fixtures::{BLINK_PROGRAM, NO_DECLARATIONS};

// ============================================================================
// Context independence
// ============================================================================

#[rstest]
#[case("", 0, 0)]
#[case("", 5, 80)]
#[case(BLINK_PROGRAM, 0, 0)]
#[case(BLINK_PROGRAM, 6, 3)]
#[case(BLINK_PROGRAM, 16, 14)]
#[case(NO_DECLARATIONS, 1, 6)]
fn test_candidate_count_is_position_independent(
    #[case] text: &str,
    #[case] line: u32,
    #[case] column: u32,
) {
    let catalog = Catalog::global();
    let items = completions(catalog, text, Position::new(line, column));
    assert_eq!(
        items.len(),
        catalog.candidate_count(),
        "completion must always offer the whole catalog"
    );
}

#[test]
fn test_candidates_are_identical_across_contexts() {
    let catalog = Catalog::global();
    let empty = completions(catalog, "", Position::new(0, 0));
    let in_program = completions(catalog, BLINK_PROGRAM, Position::new(12, 2));

    let empty_labels: Vec<&str> = empty.iter().map(|i| i.label.as_ref()).collect();
    let program_labels: Vec<&str> = in_program.iter().map(|i| i.label.as_ref()).collect();
    assert_eq!(empty_labels, program_labels);
}

// ============================================================================
// Candidate shape
// ============================================================================

#[test]
fn test_every_category_is_represented() {
    let items = completions(Catalog::global(), "", Position::new(0, 0));

    let find = |label: &str| {
        items
            .iter()
            .find(|i| i.label.as_ref() == label)
            .unwrap_or_else(|| panic!("missing candidate: {label}"))
    };

    assert_eq!(find("while").kind, CompletionKind::Keyword);
    assert_eq!(find("mut").kind, CompletionKind::Storage);
    assert_eq!(find("float").kind, CompletionKind::Type);
    assert_eq!(find("LED_BUILTIN").kind, CompletionKind::Constant);
    assert_eq!(find("analogRead").kind, CompletionKind::Function);
    assert_eq!(find("@import").kind, CompletionKind::Directive);
}

#[test]
fn test_function_candidates_insert_call_template() {
    let items = completions(Catalog::global(), "", Position::new(0, 0));

    for item in items.iter().filter(|i| i.kind == CompletionKind::Function) {
        let expected = format!("{}($0)", item.label);
        assert_eq!(
            item.insert_text.as_deref(),
            Some(expected.as_str()),
            "function {} should insert a call template",
            item.label
        );
        assert!(
            item.documentation.is_some(),
            "function {} should carry documentation",
            item.label
        );
    }
}

#[test]
fn test_non_function_candidates_have_no_insert_text() {
    let items = completions(Catalog::global(), "", Position::new(0, 0));
    for item in items.iter().filter(|i| i.kind != CompletionKind::Function) {
        assert!(
            item.insert_text.is_none(),
            "{} should insert its label verbatim",
            item.label
        );
    }
}

#[test]
fn test_detail_strings_describe_the_category() {
    let items = completions(Catalog::global(), "", Position::new(0, 0));

    let keyword = items.iter().find(|i| i.label.as_ref() == "return").unwrap();
    assert_eq!(keyword.detail.as_ref(), "keyword");

    let constant = items.iter().find(|i| i.label.as_ref() == "RISING").unwrap();
    assert_eq!(constant.detail.as_ref(), "constant");

    let function = items.iter().find(|i| i.label.as_ref() == "delay").unwrap();
    assert_eq!(function.detail.as_ref(), "delay(ms: long) -> void");
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_groups_follow_catalog_category_order() {
    let catalog = Catalog::global();
    let items = completions(catalog, "", Position::new(0, 0));

    let expected_kinds: Vec<CompletionKind> = std::iter::empty()
        .chain(catalog.keywords().map(|_| CompletionKind::Keyword))
        .chain(catalog.storage_keywords().map(|_| CompletionKind::Storage))
        .chain(catalog.types().map(|_| CompletionKind::Type))
        .chain(catalog.constants().map(|_| CompletionKind::Constant))
        .chain(catalog.functions().map(|_| CompletionKind::Function))
        .chain(catalog.directives().map(|_| CompletionKind::Directive))
        .collect();
    let actual_kinds: Vec<CompletionKind> = items.iter().map(|i| i.kind).collect();
    assert_eq!(actual_kinds, expected_kinds);
}

#[test]
fn test_declaration_order_within_groups() {
    let items = completions(Catalog::global(), "", Position::new(0, 0));

    let keyword_labels: Vec<&str> = items
        .iter()
        .filter(|i| i.kind == CompletionKind::Keyword)
        .map(|i| i.label.as_ref())
        .collect();
    assert_eq!(keyword_labels[0], "fn");

    let directive_labels: Vec<&str> = items
        .iter()
        .filter(|i| i.kind == CompletionKind::Directive)
        .map(|i| i.label.as_ref())
        .collect();
    assert_eq!(directive_labels, ["@main", "@board", "@import", "@baud"]);
}
