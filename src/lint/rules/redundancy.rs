//! Redundant grid column class detection.
//!
//! A grid class applies at its breakpoint and every wider one unless a wider
//! class overrides it. So on one element, `col-xs-6 col-sm-6` says nothing
//! that `col-xs-6` alone doesn't. This module finds such runs per width and
//! proposes the minimal class string.

use std::collections::{BTreeMap, HashSet};

use tracing::trace;

use crate::document::{Document, ElementExt};
use crate::error::Result;
use crate::grid::{self, Breakpoint, GridToken};
use crate::lint::diagnostic::{Diagnostic, RuleCategory};
use crate::lint::rule::LintRule;

const CASCADE_EXPLANATION: &str = "Since grid classes apply to devices with screen widths greater than or equal to the breakpoint sizes (unless overridden by grid classes targeting larger screens), ";

/// Width → ascending, de-duplicated breakpoint ranks declaring that width.
pub type WidthGroups = BTreeMap<u8, Vec<usize>>;

/// Group the grid tokens of a class string by width.
#[must_use]
pub fn width_groups(classes: &str) -> WidthGroups {
    let mut groups = WidthGroups::new();
    for token in classes.split_whitespace().filter_map(GridToken::parse) {
        groups
            .entry(token.width)
            .or_default()
            .push(token.breakpoint.rank());
    }
    for ranks in groups.values_mut() {
        ranks.sort_unstable();
        ranks.dedup();
    }
    groups
}

/// Maximal runs of consecutive integers (length >= 2) in a sorted slice,
/// as inclusive `(start, end)` pairs.
///
/// `[0, 2, 3, 5]` has one run, `(2, 3)`; `[0, 2, 4]` has none.
#[must_use]
pub fn incrementing_runs(sorted: &[usize]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let Some((&first, rest)) = sorted.split_first() else {
        return runs;
    };

    let mut start = first;
    let mut prev = first;
    for &current in rest {
        if current != prev + 1 {
            if start != prev {
                runs.push((start, prev));
            }
            start = current;
        }
        prev = current;
    }
    if start != prev {
        runs.push((start, prev));
    }
    runs
}

/// Grid tokens made redundant by a narrower token of the same width.
#[must_use]
pub fn redundant_tokens(classes: &str) -> Vec<GridToken> {
    let mut redundant = Vec::new();
    for (width, ranks) in width_groups(classes) {
        for (start, end) in incrementing_runs(&ranks) {
            redundant.extend(
                (start + 1..=end)
                    .filter_map(Breakpoint::from_rank)
                    .map(|breakpoint| GridToken::new(breakpoint, width)),
            );
        }
    }
    redundant
}

/// Minimal equivalent of a class string, or `None` if nothing is redundant.
///
/// Non-grid classes keep their relative order; the surviving grid classes
/// move to the end, narrowest breakpoint first.
#[must_use]
pub fn simplify(classes: &str) -> Option<String> {
    let redundant: HashSet<GridToken> = redundant_tokens(classes).into_iter().collect();
    if redundant.is_empty() {
        return None;
    }

    let mut others = Vec::new();
    let mut kept: Vec<GridToken> = Vec::new();
    for class in classes.split_whitespace() {
        match GridToken::parse(class) {
            Some(token) if redundant.contains(&token) || kept.contains(&token) => {}
            Some(token) => kept.push(token),
            None => others.push(class.to_string()),
        }
    }
    kept.sort_by_key(|token| token.breakpoint.rank());

    others.extend(kept.iter().map(GridToken::class_name));
    Some(others.join(" "))
}

/// Rule that reports grid classes made redundant by narrower breakpoints.
pub struct RedundantColumnClassesRule;

impl LintRule for RedundantColumnClassesRule {
    fn id(&self) -> &'static str {
        "redundant-column-classes"
    }

    fn description(&self) -> &'static str {
        "Grid column classes must not repeat a width already implied by a narrower breakpoint"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Grid
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        for column in doc.select(grid::any_column_selector())? {
            let Some(classes) = column.class_attr() else {
                continue;
            };
            let Some(simplified) = simplify(classes) else {
                continue;
            };
            trace!(tag = column.tag(), classes, %simplified, "redundant grid classes");
            diagnostics.push(Diagnostic::new(format!(
                "{CASCADE_EXPLANATION}class=\"{classes}\" is redundant and can be simplified to class=\"{simplified}\""
            )));
        }
        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lint(markup: &str) -> Vec<String> {
        RedundantColumnClassesRule
            .check(&Document::parse(markup))
            .unwrap()
            .into_iter()
            .map(Diagnostic::into_message)
            .collect()
    }

    #[test]
    fn test_incrementing_runs() {
        assert_eq!(incrementing_runs(&[0, 2, 3, 5]), vec![(2, 3)]);
        assert_eq!(
            incrementing_runs(&[0, 2, 3, 4, 6, 8, 9, 11]),
            vec![(2, 4), (8, 9)]
        );
        assert!(incrementing_runs(&[0, 2, 4]).is_empty());
        assert!(incrementing_runs(&[1]).is_empty());
        assert!(incrementing_runs(&[]).is_empty());
        assert_eq!(incrementing_runs(&[0, 1, 2, 3]), vec![(0, 3)]);
    }

    #[test]
    fn test_width_groups_sort_and_dedup() {
        let groups = width_groups("col-md-6 foo col-xs-6 col-md-6 col-sm-4");
        assert_eq!(groups.get(&6), Some(&vec![0, 2]));
        assert_eq!(groups.get(&4), Some(&vec![1]));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_width_groups_skip_malformed_tokens() {
        let groups = width_groups("col-md- col-sm-x col-lg-13 col-xs-3");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(&3), Some(&vec![0]));
    }

    #[test]
    fn test_simplify_drops_whole_run_after_narrowest() {
        assert_eq!(
            simplify("col-xs-6 col-sm-6 col-md-6").as_deref(),
            Some("col-xs-6")
        );
    }

    #[test]
    fn test_simplify_keeps_non_adjacent_start() {
        assert_eq!(
            simplify("col-xs-6 col-md-6 col-lg-6").as_deref(),
            Some("col-xs-6 col-md-6")
        );
    }

    #[test]
    fn test_non_adjacent_breakpoints_are_not_redundant() {
        assert_eq!(simplify("col-xs-6 col-lg-6"), None);
        assert_eq!(simplify("col-xs-6 col-sm-4 col-md-6"), None);
        assert_eq!(simplify("foo bar"), None);
    }

    #[test]
    fn test_simplify_moves_grid_classes_to_end_sorted() {
        assert_eq!(
            simplify("  col-md-4 foo col-sm-12   col-lg-4 bar col-xs-12 ").as_deref(),
            Some("foo bar col-xs-12 col-md-4")
        );
    }

    #[test]
    fn test_simplify_leaves_malformed_tokens_in_place() {
        assert_eq!(
            simplify("col-md- col-sm-2 x col-md-2").as_deref(),
            Some("col-md- x col-sm-2")
        );
    }

    #[test]
    fn test_simplify_handles_multiple_widths() {
        assert_eq!(
            simplify("col-xs-12 col-sm-12 col-md-6 col-lg-6").as_deref(),
            Some("col-xs-12 col-md-6")
        );
    }

    #[test]
    fn test_simplified_output_is_minimal() {
        for classes in [
            "col-xs-6 col-sm-6 col-md-6",
            "col-xs-6 col-md-6 col-lg-6",
            "a col-sm-3 col-md-3 b col-xs-9 col-sm-9 col-md-9 col-lg-9",
        ] {
            let simplified = simplify(classes).unwrap();
            assert_eq!(simplify(&simplified), None, "{classes}");
        }
    }

    #[test]
    fn test_rule_reports_original_and_simplified_class() {
        let messages =
            lint(r#"<div class="row"><div class="col-xs-6 col-sm-6 col-md-6">x</div></div>"#);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Since grid classes apply to devices"));
        assert!(messages[0].contains(
            r#"class="col-xs-6 col-sm-6 col-md-6" is redundant and can be simplified to class="col-xs-6""#
        ));
    }

    #[test]
    fn test_rule_reports_one_diagnostic_per_element() {
        let messages = lint(
            r#"<div class="col-xs-1 col-sm-1"></div>
               <div class="col-md-2"></div>
               <div class="col-md-3 col-lg-3"></div>"#,
        );
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains(r#"class="col-xs-1""#));
        assert!(messages[1].contains(r#"class="col-md-3""#));
    }

    #[test]
    fn test_equal_breakpoints_keep_source_order() {
        assert_eq!(
            simplify("col-md-3 col-md-4 col-lg-4 col-md-1").as_deref(),
            Some("col-md-3 col-md-4 col-md-1")
        );
        assert_eq!(
            simplify("col-sm-5 col-xs-8 col-sm-1 col-md-1").as_deref(),
            Some("col-xs-8 col-sm-5 col-sm-1")
        );
    }

    #[test]
    fn test_rule_ignores_documents_without_grid() {
        assert!(lint("<p class=\"lead\">hello</p>").is_empty());
    }
}
