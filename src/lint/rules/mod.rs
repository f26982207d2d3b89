//! Built-in lint rules.
//!
//! Rules are organized by category:
//!
//! - **Document rules** (`document`): doctype, `<meta>` tags, script includes
//! - **Grid rules** (`grid`, `redundancy`): containers, rows, columns
//! - **Form rules** (`forms`): input groups, checkboxes, radios
//! - **Component rules** (`components`): buttons, tooltips, modals, panels
//!
//! # Usage
//!
//! ```
//! use bootlint::document::Document;
//! use bootlint::lint::rules::all_rules;
//! use bootlint::lint::LintEngine;
//!
//! let mut engine = LintEngine::with_defaults();
//! for rule in all_rules() {
//!     engine.register(rule);
//! }
//! let diagnostics = engine.lint(&Document::parse("<!DOCTYPE html>")).unwrap();
//! assert!(!diagnostics.is_empty());
//! ```

pub mod components;
pub mod document;
pub mod forms;
pub mod grid;
pub mod redundancy;

use scraper::ElementRef;

use crate::grid::is_grid_column;
use crate::lint::rule::BoxedRule;

pub use components::{
    BtnToggleRule, BtnTypeRule, ButtonsCheckedActiveRule, ModalsWithinOtherComponentsRule,
    PanelParentRule, RemoteModalsRule, TableResponsiveRule, TooltipsInBtnGroupsRule,
    TooltipsOnDisabledElementsRule,
};
pub use document::{
    BootstrapJsRule, DoctypeRule, JqueryRule, MetaCharsetUtf8Rule, ViewportRule, XUaCompatibleRule,
};
pub use forms::{
    BlockControlRule, FormControlFeedbackRule, FormGroupMixedWithInputGroupRule,
    GridClassMixedWithInputGroupRule, InlineControlRule, InputGroupFormControlTypesRule,
    InputGroupMultipleAddOnsRule, MissingInputGroupSizesRule, MultipleFormControlsInInputGroupRule,
};
pub use grid::{
    BootstrapV2Rule, ColParentsAreRowsOrFormGroupsRule, NestedContainersRule,
    RowAndColOnSameElementRule, RowChildrenAreColsRule, RowOutsideContainerRule,
};
pub use redundancy::RedundantColumnClassesRule;

/// Whether an element carries at least one grid column class.
pub(crate) fn is_column(el: &ElementRef<'_>) -> bool {
    is_grid_column(el.value().classes())
}

/// Returns every built-in rule in registry order.
///
/// The order is the diagnostic ordering contract: single-finding rules come
/// first, then the rules that can report several findings.
pub fn all_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(DoctypeRule),
        Box::new(MetaCharsetUtf8Rule),
        Box::new(XUaCompatibleRule),
        Box::new(BootstrapV2Rule),
        Box::new(RowOutsideContainerRule),
        Box::new(NestedContainersRule),
        Box::new(ViewportRule),
        Box::new(RowAndColOnSameElementRule),
        Box::new(RowChildrenAreColsRule),
        Box::new(ColParentsAreRowsOrFormGroupsRule),
        Box::new(RemoteModalsRule),
        Box::new(JqueryRule),
        Box::new(BootstrapJsRule),
        Box::new(TooltipsOnDisabledElementsRule),
        Box::new(TooltipsInBtnGroupsRule),
        Box::new(MultipleFormControlsInInputGroupRule),
        Box::new(MissingInputGroupSizesRule),
        Box::new(FormGroupMixedWithInputGroupRule),
        Box::new(GridClassMixedWithInputGroupRule),
        Box::new(InputGroupMultipleAddOnsRule),
        Box::new(BtnToggleRule),
        Box::new(BtnTypeRule),
        Box::new(forms::BLOCK_CHECKBOXES),
        Box::new(forms::BLOCK_RADIOS),
        Box::new(ButtonsCheckedActiveRule),
        Box::new(ModalsWithinOtherComponentsRule),
        Box::new(components::PANEL_BODY),
        Box::new(components::PANEL_HEADING),
        Box::new(components::PANEL_TITLE),
        Box::new(components::PANEL_FOOTER),
        Box::new(TableResponsiveRule),
        Box::new(FormControlFeedbackRule),
        Box::new(InputGroupFormControlTypesRule),
        Box::new(forms::INLINE_CHECKBOXES),
        Box::new(forms::INLINE_RADIOS),
        Box::new(RedundantColumnClassesRule),
    ]
}

/// Returns the built-in rules of one category, in registry order.
pub fn rules_in(category: crate::lint::RuleCategory) -> Vec<BoxedRule> {
    all_rules()
        .into_iter()
        .filter(|rule| rule.category() == category)
        .collect()
}
