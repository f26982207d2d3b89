use proptest::prelude::*;

use bootlint::lint::{LintConfig, LintEngine};
use bootlint::lint_html;

fn class_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(vec!["xs", "sm", "md", "lg"]), 1u8..=12)
            .prop_map(|(bp, width)| format!("col-{bp}-{width}")),
        prop::sample::select(vec!["row", "container", "btn", "form-group", "input-group", "panel"])
            .prop_map(String::from),
    ]
}

fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["div", "span", "button", "form"]),
            prop::collection::vec(class_token(), 0..4),
        ),
        0..6,
    )
    .prop_map(|elements| {
        elements
            .into_iter()
            .map(|(tag, classes)| format!("<{tag} class=\"{}\"></{tag}>", classes.join(" ")))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_lint_html_deterministic(html in markup()) {
        let first = lint_html(&html).unwrap();
        let second = lint_html(&html).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential(html in markup()) {
        let sequential = LintEngine::with_all_rules(LintConfig::new())
            .lint_markup(&html)
            .unwrap();
        let parallel = LintEngine::with_all_rules(LintConfig::new().parallel())
            .lint_markup(&html)
            .unwrap();
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_arbitrary_text_never_errors(text in ".*") {
        prop_assert!(lint_html(&text).is_ok());
    }
}
