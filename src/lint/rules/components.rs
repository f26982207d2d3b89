//! Component rules: buttons, tooltips, modals, panels and tables.

use crate::document::{Document, ElementExt};
use crate::error::Result;
use crate::lint::diagnostic::{Diagnostic, RuleCategory};
use crate::lint::rule::{LintRule, flag_if};

crate::impl_rule!(
    RemoteModalsRule,
    id: "remote-modals",
    description: "The modal `remote` option is deprecated",
    category: RuleCategory::Components,
    check: |doc| Ok(flag_if(
        doc.exists(r#"[data-toggle="modal"][data-remote]"#)?,
        "Found one or more modals using the deprecated `remote` option",
    ))
);

crate::impl_rule!(
    TooltipsOnDisabledElementsRule,
    id: "tooltips-on-disabled-elements",
    description: "Tooltips and popovers on disabled elements never trigger",
    category: RuleCategory::Components,
    check: |doc| Ok(flag_if(
        doc.exists(
            r#"[disabled][data-toggle="tooltip"], .disabled[data-toggle="tooltip"], [disabled][data-toggle="popover"], .disabled[data-toggle="popover"]"#,
        )?,
        "Tooltips and popovers on disabled elements cannot be triggered by user interaction unless the element becomes enabled. \
         To have tooltips and popovers be triggerable by the user even when their associated element is disabled, \
         put the disabled element inside a wrapper <div> and apply the tooltip or popover to the wrapper <div> instead.",
    ))
);

crate::impl_rule!(
    TooltipsInBtnGroupsRule,
    id: "tooltips-in-btn-groups",
    description: "Tooltips and popovers in button groups need `container: 'body'`",
    category: RuleCategory::Components,
    check: |doc| Ok(flag_if(
        doc.exists(
            r#".btn-group [data-toggle="tooltip"]:not([data-container="body"]), .btn-group [data-toggle="popover"]:not([data-container="body"])"#,
        )?,
        "Tooltips and popovers within button groups should have their `container` set to 'body'. Found tooltips/popovers that might lack this setting.",
    ))
);

crate::impl_rule!(
    BtnToggleRule,
    id: "btn-toggle",
    description: "A dropdown toggle must be the last button in its group",
    category: RuleCategory::Components,
    check: |doc| Ok(flag_if(
        doc.exists(".btn.dropdown-toggle ~ .btn")?,
        "`.btn.dropdown-toggle` must be the last button in a button group.",
    ))
);

/// Rule that requires an explicit `type` on every `<button>`.
pub struct BtnTypeRule;

impl LintRule for BtnTypeRule {
    fn id(&self) -> &'static str {
        "btn-type"
    }

    fn description(&self) -> &'static str {
        "Every <button> needs an explicit submit, reset or button `type`"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Components
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let untyped = doc.select("button")?.into_iter().any(|button| {
            !matches!(button.attr("type"), Some("submit" | "reset" | "button"))
        });
        Ok(flag_if(untyped, "Always set a `type` on `<button>`s."))
    }
}

const MISMATCHED_TOGGLE_BUTTONS: &str = concat!(
    r#"[data-toggle="buttons"] > label:not(.active) > input[type="checkbox"][checked], "#,
    r#"[data-toggle="buttons"] > label.active > input[type="checkbox"]:not([checked]), "#,
    r#"[data-toggle="buttons"] > label:not(.active) > input[type="radio"][checked], "#,
    r#"[data-toggle="buttons"] > label.active > input[type="radio"]:not([checked])"#,
);

crate::impl_rule!(
    ButtonsCheckedActiveRule,
    id: "buttons-checked-active",
    description: "`.active` and `checked` must agree in button.js toggle groups",
    category: RuleCategory::Components,
    check: |doc| Ok(flag_if(
        doc.exists(MISMATCHED_TOGGLE_BUTTONS)?,
        ".active class used without the `checked` attribute (or vice-versa) in a button group using the button.js plugin",
    ))
);

crate::impl_rule!(
    ModalsWithinOtherComponentsRule,
    id: "modals-within-other-components",
    description: "Modal markup must not be nested inside other components",
    category: RuleCategory::Components,
    check: |doc| Ok(flag_if(
        doc.exists(".table .modal")?,
        "Modal markup should not be placed within other components, so as to avoid the component's styles interfering with the modal's appearance or functionality",
    ))
);

crate::impl_rule!(
    TableResponsiveRule,
    id: "table-responsive",
    description: "`.table-responsive` belongs on the wrapper, not the table",
    category: RuleCategory::Components,
    check: |doc| Ok(flag_if(
        doc.exists(".table.table-responsive, table.table-responsive")?,
        "`.table-responsive` is supposed to be used on the table's parent wrapper <div>, not on the table itself",
    ))
);

/// Rule that requires a panel part to sit directly inside a given parent.
pub struct PanelParentRule {
    id: &'static str,
    class: &'static str,
    parents: &'static [&'static str],
    message: &'static str,
}

pub const PANEL_BODY: PanelParentRule = PanelParentRule {
    id: "panel-body-without-panel",
    class: "panel-body",
    parents: &["panel", "panel-collapse"],
    message: "`.panel-body` must have a `.panel` or `.panel-collapse` parent",
};

pub const PANEL_HEADING: PanelParentRule = PanelParentRule {
    id: "panel-heading-without-panel",
    class: "panel-heading",
    parents: &["panel"],
    message: "`.panel-heading` must have a `.panel` parent",
};

pub const PANEL_TITLE: PanelParentRule = PanelParentRule {
    id: "panel-title-without-panel-heading",
    class: "panel-title",
    parents: &["panel-heading"],
    message: "`.panel-title` must have a `.panel-heading` parent",
};

pub const PANEL_FOOTER: PanelParentRule = PanelParentRule {
    id: "panel-footer-without-panel",
    class: "panel-footer",
    parents: &["panel"],
    message: "`.panel-footer` must have a `.panel` parent",
};

impl LintRule for PanelParentRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn description(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Components
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let misplaced = doc
            .select(&format!(".{}", self.class))?
            .into_iter()
            .filter_map(|part| part.parent_element())
            .any(|parent| !parent.has_any_class(self.parents));
        Ok(flag_if(misplaced, self.message))
    }
}
