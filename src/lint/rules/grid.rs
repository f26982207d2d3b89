//! Grid structure rules: containers, rows and columns.

use crate::document::{self, Document, ElementExt};
use crate::error::Result;
use crate::grid::{self, MAX_COLUMNS};
use crate::lint::diagnostic::{Diagnostic, RuleCategory};
use crate::lint::rule::{LintRule, flag_if};

use super::is_column;

const CONTAINERS: &str = ".container, .container-fluid";

/// Rule that flags Bootstrap v2 `.spanN` grid classes.
pub struct BootstrapV2Rule;

impl LintRule for BootstrapV2Rule {
    fn id(&self) -> &'static str {
        "bootstrap-v2"
    }

    fn description(&self) -> &'static str {
        "Bootstrap v2 `.spanN` grid classes are obsolete"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Grid
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let selector = (1..=MAX_COLUMNS)
            .map(|n| format!(".span{n}"))
            .collect::<Vec<_>>()
            .join(",");
        Ok(flag_if(
            doc.exists(&selector)?,
            "Found one or more uses of outdated Bootstrap v2 `.spanN` grid classes",
        ))
    }
}

/// Rule that requires rows to live in a column or a container.
pub struct RowOutsideContainerRule;

impl LintRule for RowOutsideContainerRule {
    fn id(&self) -> &'static str {
        "row-outside-container"
    }

    fn description(&self) -> &'static str {
        "`.row`s must be children of a column or descendants of a container"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Grid
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let containers = document::compile(CONTAINERS)?;
        let stray = doc.select(".row")?.into_iter().any(|row| {
            row.parent_element().is_some_and(|parent| {
                !is_column(&parent) && parent.closest(&containers).is_none()
            })
        });
        Ok(flag_if(
            stray,
            "Found one or more `.row`s that were not children of a grid column or descendants of a `.container` or `.container-fluid`",
        ))
    }
}

/// Rule that forbids containers directly inside containers.
pub struct NestedContainersRule;

impl LintRule for NestedContainersRule {
    fn id(&self) -> &'static str {
        "nested-containers"
    }

    fn description(&self) -> &'static str {
        "Containers are not nestable"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Grid
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let containers = document::compile(CONTAINERS)?;
        let nested = doc.select(CONTAINERS)?.into_iter().any(|container| {
            container
                .parent_element()
                .is_some_and(|parent| containers.matches(&parent))
        });
        Ok(flag_if(
            nested,
            "Containers (`.container` and `.container-fluid`) are not nestable",
        ))
    }
}

crate::impl_rule!(
    RowAndColOnSameElementRule,
    id: "row-and-col-on-same-element",
    description: "`.row` and `.col-*-*` must not share an element",
    category: RuleCategory::Grid,
    check: |doc| Ok(flag_if(
        doc.select(".row")?.iter().any(is_column),
        "Found both `.row` and `.col-*-*` used on the same element",
    ))
);

crate::impl_rule!(
    RowChildrenAreColsRule,
    id: "row-children-are-cols",
    description: "Only columns may be children of `.row`s",
    category: RuleCategory::Grid,
    check: |doc| Ok(flag_if(
        doc.select(".row > *")?
            .iter()
            .any(|child| !is_column(child) && !child.has_any_class(&["clearfix", "bs-customizer-input"])),
        "Only columns (.col-*-*) may be children of `.row`s",
    ))
);

/// Rule that requires columns to sit directly in a row or form group.
pub struct ColParentsAreRowsOrFormGroupsRule;

impl LintRule for ColParentsAreRowsOrFormGroupsRule {
    fn id(&self) -> &'static str {
        "col-parents-are-rows-or-form-groups"
    }

    fn description(&self) -> &'static str {
        "Columns must be children of `.row`s or `.form-group`s"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Grid
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let orphaned = doc
            .select(grid::any_column_selector())?
            .into_iter()
            .filter(|column| !matches!(column.tag(), "col" | "th" | "td"))
            .any(|column| {
                column
                    .parent_element()
                    .is_some_and(|parent| !parent.has_any_class(&["row", "form-group"]))
            });
        Ok(flag_if(
            orphaned,
            "Columns (.col-*-*) can only be children of `.row`s or `.form-group`s",
        ))
    }
}
