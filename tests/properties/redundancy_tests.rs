use proptest::prelude::*;

use bootlint::document::Document;
use bootlint::grid::GridToken;
use bootlint::lint::LintRule;
use bootlint::lint::rules::RedundantColumnClassesRule;
use bootlint::lint::rules::redundancy::{redundant_tokens, simplify};

fn class_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(vec!["xs", "sm", "md", "lg"]), 1u8..=12)
            .prop_map(|(bp, width)| format!("col-{bp}-{width}")),
        "[a-z]{1,8}",
    ]
}

fn class_string() -> impl Strategy<Value = String> {
    prop::collection::vec(class_token(), 0..8).prop_map(|tokens| tokens.join(" "))
}

fn non_grid(classes: &str) -> Vec<&str> {
    classes
        .split_whitespace()
        .filter(|class| GridToken::parse(class).is_none())
        .collect()
}

proptest! {
    #[test]
    fn test_simplify_is_idempotent(classes in class_string()) {
        if let Some(simplified) = simplify(&classes) {
            prop_assert_eq!(simplify(&simplified), None);
            prop_assert!(redundant_tokens(&simplified).is_empty());
        }
    }

    #[test]
    fn test_simplify_keeps_other_classes_in_order(classes in class_string()) {
        if let Some(simplified) = simplify(&classes) {
            prop_assert_eq!(non_grid(&simplified), non_grid(&classes));
        }
    }

    #[test]
    fn test_simplify_only_when_redundant(classes in class_string()) {
        prop_assert_eq!(
            simplify(&classes).is_some(),
            !redundant_tokens(&classes).is_empty()
        );
    }

    #[test]
    fn test_no_grid_classes_no_redundancy(classes in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let html = format!("<div class=\"{}\"></div>", classes.join(" "));
        let diagnostics = RedundantColumnClassesRule
            .check(&Document::parse(&html))
            .unwrap();
        prop_assert!(diagnostics.is_empty());
    }
}
