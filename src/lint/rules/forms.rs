//! Form rules: input groups, form groups, checkboxes and radios.

use crate::document::{self, Document, ElementExt};
use crate::error::Result;
use crate::lint::diagnostic::{Diagnostic, RuleCategory};
use crate::lint::rule::{LintRule, flag_if};

use super::is_column;

/// Rule that forbids more than one `.form-control` per input group.
pub struct MultipleFormControlsInInputGroupRule;

impl LintRule for MultipleFormControlsInInputGroupRule {
    fn id(&self) -> &'static str {
        "multiple-form-controls-in-input-group"
    }

    fn description(&self) -> &'static str {
        "Input groups may contain only one `.form-control`"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Forms
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let controls = document::compile(".form-control")?;
        let crowded = doc
            .select(".input-group")?
            .into_iter()
            .any(|group| group.select(&controls).nth(1).is_some());
        Ok(flag_if(
            crowded,
            "Input groups cannot contain multiple `.form-control`s",
        ))
    }
}

crate::impl_rule!(
    MissingInputGroupSizesRule,
    id: "missing-input-group-sizes",
    description: "Size input groups with `.input-group-lg`/`.input-group-sm`, not their children",
    category: RuleCategory::Forms,
    check: |doc| Ok(flag_if(
        doc.exists(
            ".input-group:not(.input-group-lg) .btn-lg, \
             .input-group:not(.input-group-lg) .input-lg, \
             .input-group:not(.input-group-sm) .btn-sm, \
             .input-group:not(.input-group-sm) .input-sm",
        )?,
        "Button and input sizing within `.input-group`s can cause issues. Instead, use input group sizing classes `.input-group-lg` or `.input-group-sm`",
    ))
);

crate::impl_rule!(
    FormGroupMixedWithInputGroupRule,
    id: "form-group-mixed-with-input-group",
    description: "`.input-group` and `.form-group` must not share an element",
    category: RuleCategory::Forms,
    check: |doc| Ok(flag_if(
        doc.exists(".input-group.form-group")?,
        ".input-group and .form-group cannot be used directly on the same element. Instead, nest the .input-group within the .form-group",
    ))
);

crate::impl_rule!(
    GridClassMixedWithInputGroupRule,
    id: "grid-class-mixed-with-input-group",
    description: "`.input-group` and `.col-*-*` must not share an element",
    category: RuleCategory::Forms,
    check: |doc| Ok(flag_if(
        doc.select(".input-group")?.iter().any(is_column),
        ".input-group and .col-*-* cannot be used directly on the same element. Instead, nest the .input-group within the .col-*-*",
    ))
);

crate::impl_rule!(
    InputGroupMultipleAddOnsRule,
    id: "input-group-multiple-addons",
    description: "Input groups support one add-on per side",
    category: RuleCategory::Forms,
    check: |doc| Ok(flag_if(
        doc.exists(
            ".input-group > .input-group-addon + .input-group-addon, \
             .input-group > .input-group-addon + .input-group-btn, \
             .input-group > .input-group-btn + .input-group-addon, \
             .input-group > .input-group-btn + .input-group-btn",
        )?,
        "Having multiple add-ons on a single side of an input group is not supported",
    ))
);

/// Rule that checks `.checkbox`/`.radio` wrapper markup.
pub struct BlockControlRule {
    id: &'static str,
    class: &'static str,
    input_type: &'static str,
    message: &'static str,
}

/// `.checkbox>label>input[type="checkbox"]`
pub const BLOCK_CHECKBOXES: BlockControlRule = BlockControlRule {
    id: "block-checkboxes",
    class: "checkbox",
    input_type: "checkbox",
    message: r#"Incorrect markup used with the `.checkbox` class. The correct markup structure is .checkbox>label>input[type="checkbox"]"#,
};

/// `.radio>label>input[type="radio"]`
pub const BLOCK_RADIOS: BlockControlRule = BlockControlRule {
    id: "block-radios",
    class: "radio",
    input_type: "radio",
    message: r#"Incorrect markup used with the `.radio` class. The correct markup structure is .radio>label>input[type="radio"]"#,
};

impl LintRule for BlockControlRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn description(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Forms
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let malformed = doc
            .select(&format!(".{}", self.class))?
            .into_iter()
            .any(|wrapper| {
                !wrapper
                    .child_elements()
                    .filter(|label| label.tag() == "label")
                    .any(|label| has_input_child(&label, self.input_type))
            });
        Ok(flag_if(malformed, self.message))
    }
}

/// Rule that checks `.checkbox-inline`/`.radio-inline` markup. Reports the
/// wrong-element and wrong-structure cases separately.
pub struct InlineControlRule {
    id: &'static str,
    class: &'static str,
    input_type: &'static str,
    wrong_element: &'static str,
    wrong_structure: &'static str,
}

pub const INLINE_CHECKBOXES: InlineControlRule = InlineControlRule {
    id: "inline-checkboxes",
    class: "checkbox-inline",
    input_type: "checkbox",
    wrong_element: ".checkbox-inline should only be used on <label> elements",
    wrong_structure: r#"Incorrect markup used with the `.checkbox-inline` class. The correct markup structure is label.checkbox-inline>input[type="checkbox"]"#,
};

pub const INLINE_RADIOS: InlineControlRule = InlineControlRule {
    id: "inline-radios",
    class: "radio-inline",
    input_type: "radio",
    wrong_element: ".radio-inline should only be used on <label> elements",
    wrong_structure: r#"Incorrect markup used with the `.radio-inline` class. The correct markup structure is label.radio-inline>input[type="radio"]"#,
};

impl LintRule for InlineControlRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn description(&self) -> &'static str {
        self.wrong_structure
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Forms
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let inline = doc.select(&format!(".{}", self.class))?;
        let mut diagnostics =
            flag_if(inline.iter().any(|el| el.tag() != "label"), self.wrong_element);
        diagnostics.extend(flag_if(
            inline.iter().any(|el| !has_input_child(el, self.input_type)),
            self.wrong_structure,
        ));
        Ok(diagnostics)
    }
}

fn has_input_child(parent: &scraper::ElementRef<'_>, input_type: &str) -> bool {
    parent
        .child_elements()
        .any(|child| child.tag() == "input" && child.attr("type") == Some(input_type))
}

/// Rule that keeps `<select>` and `<textarea>` out of input groups.
pub struct InputGroupFormControlTypesRule;

impl LintRule for InputGroupFormControlTypesRule {
    fn id(&self) -> &'static str {
        "input-group-form-control-types"
    }

    fn description(&self) -> &'static str {
        "Only text-based <input>s belong in an `.input-group`"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Forms
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let mut diagnostics = flag_if(
            doc.exists(".input-group select")?,
            "`.input-group` contains a <select>; this should be avoided as <select>s cannot be fully styled in WebKit browsers",
        );
        diagnostics.extend(flag_if(
            doc.exists(".input-group textarea")?,
            "`.input-group` contains a <textarea>; only text-based <input>s are permitted in an `.input-group`",
        ));
        Ok(diagnostics)
    }
}

/// Rule that requires feedback icons to sit inside `.form-group.has-feedback`.
pub struct FormControlFeedbackRule;

impl LintRule for FormControlFeedbackRule {
    fn id(&self) -> &'static str {
        "form-control-feedback"
    }

    fn description(&self) -> &'static str {
        "`.form-control-feedback` needs a `.form-group.has-feedback` ancestor"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Forms
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let group = document::compile(".form-group.has-feedback")?;
        let detached = doc
            .select(".form-control-feedback")?
            .into_iter()
            .any(|feedback| feedback.closest(&group).is_none());
        Ok(flag_if(
            detached,
            "`.form-control-feedback` must have a `.form-group.has-feedback` ancestor",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: &dyn LintRule, markup: &str) -> Vec<String> {
        rule.check(&Document::parse(markup))
            .unwrap()
            .into_iter()
            .map(Diagnostic::into_message)
            .collect()
    }

    #[test]
    fn test_multiple_form_controls() {
        let two = r#"<div class="input-group"><input class="form-control"><span><input class="form-control"></span></div>"#;
        assert_eq!(check(&MultipleFormControlsInInputGroupRule, two).len(), 1);
        let one = r#"<div class="input-group"><input class="form-control"></div>"#;
        assert!(check(&MultipleFormControlsInInputGroupRule, one).is_empty());
    }

    #[test]
    fn test_missing_input_group_sizes() {
        let bad = r#"<div class="input-group"><button class="btn btn-lg"></button></div>"#;
        assert_eq!(check(&MissingInputGroupSizesRule, bad).len(), 1);
        let good = r#"<div class="input-group input-group-lg"><button class="btn btn-lg"></button></div>"#;
        assert!(check(&MissingInputGroupSizesRule, good).is_empty());
    }

    #[test]
    fn test_form_group_and_grid_mixed_with_input_group() {
        let mixed = r#"<div class="input-group form-group col-xs-4"></div>"#;
        assert_eq!(check(&FormGroupMixedWithInputGroupRule, mixed).len(), 1);
        assert_eq!(check(&GridClassMixedWithInputGroupRule, mixed).len(), 1);

        let nested = r#"<div class="form-group col-xs-4"><div class="input-group"></div></div>"#;
        assert!(check(&FormGroupMixedWithInputGroupRule, nested).is_empty());
        assert!(check(&GridClassMixedWithInputGroupRule, nested).is_empty());
    }

    #[test]
    fn test_multiple_addons() {
        let bad = r#"<div class="input-group"><span class="input-group-addon">$</span><span class="input-group-btn"></span><input class="form-control"></div>"#;
        assert_eq!(check(&InputGroupMultipleAddOnsRule, bad).len(), 1);
        let good = r#"<div class="input-group"><span class="input-group-addon">$</span><input class="form-control"><span class="input-group-btn"></span></div>"#;
        assert!(check(&InputGroupMultipleAddOnsRule, good).is_empty());
    }

    #[test]
    fn test_block_checkboxes_and_radios() {
        let good = r#"<div class="checkbox"><label><input type="checkbox"> ok</label></div>"#;
        assert!(check(&BLOCK_CHECKBOXES, good).is_empty());

        let bad = r#"<div class="checkbox"><input type="checkbox"><label>no</label></div>"#;
        assert_eq!(check(&BLOCK_CHECKBOXES, bad).len(), 1);

        let radio = r#"<div class="radio"><label><input type="checkbox"></label></div>"#;
        let messages = check(&BLOCK_RADIOS, radio);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("`.radio` class"));
    }

    #[test]
    fn test_block_checkbox_needs_direct_label_and_input() {
        let deep = r#"<div class="checkbox"><span><label><input type="checkbox"></label></span></div>"#;
        assert_eq!(check(&BLOCK_CHECKBOXES, deep).len(), 1);

        let wrapped_input = r#"<div class="checkbox"><label><span><input type="checkbox"></span></label></div>"#;
        assert_eq!(check(&BLOCK_CHECKBOXES, wrapped_input).len(), 1);

        let second_label = r#"<div class="checkbox"><label>hint</label><label><input type="checkbox"></label></div>"#;
        assert!(check(&BLOCK_CHECKBOXES, second_label).is_empty());
    }

    #[test]
    fn test_inline_checkboxes_report_both_conditions() {
        let messages = check(&INLINE_CHECKBOXES, r#"<span class="checkbox-inline">x</span>"#);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("only be used on <label> elements"));
        assert!(messages[1].contains("label.checkbox-inline>input"));

        let good = r#"<label class="checkbox-inline"><input type="checkbox"> a</label>"#;
        assert!(check(&INLINE_CHECKBOXES, good).is_empty());
    }

    #[test]
    fn test_inline_radios() {
        let messages = check(&INLINE_RADIOS, r#"<label class="radio-inline"></label>"#);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("label.radio-inline>input[type=\"radio\"]"));
    }

    #[test]
    fn test_input_group_form_control_types() {
        let messages = check(
            &InputGroupFormControlTypesRule,
            r#"<div class="input-group"><select></select><textarea></textarea></div>"#,
        );
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("<select>"));
        assert!(messages[1].contains("<textarea>"));
    }

    #[test]
    fn test_form_control_feedback() {
        let bad = r#"<div class="form-group"><span class="form-control-feedback"></span></div>"#;
        assert_eq!(check(&FormControlFeedbackRule, bad).len(), 1);
        let good = r#"<div class="form-group has-feedback"><div><span class="form-control-feedback"></span></div></div>"#;
        assert!(check(&FormControlFeedbackRule, good).is_empty());
    }
}
