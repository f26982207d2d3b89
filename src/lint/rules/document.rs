//! Document-level rules: doctype, required `<meta>` tags and script includes.

use crate::document::Document;
use crate::error::Result;
use crate::lint::diagnostic::{Diagnostic, RuleCategory};
use crate::lint::rule::{LintRule, flag_if};

/// Rule that requires an HTML5 doctype.
pub struct DoctypeRule;

impl LintRule for DoctypeRule {
    fn id(&self) -> &'static str {
        "doctype"
    }

    fn description(&self) -> &'static str {
        "Documents must declare the HTML5 doctype"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Document
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let Some(doctype) = doc.doctype() else {
            return Ok(vec![Diagnostic::new(
                "Document is missing a DOCTYPE declaration",
            )]);
        };

        let legacy = !doctype.public_id().is_empty()
            || !matches!(doctype.system_id(), "" | "about:legacy-compat");
        Ok(flag_if(legacy, "Document declares a non-HTML5 DOCTYPE"))
    }
}

/// Rule that requires a UTF-8 charset declaration.
pub struct MetaCharsetUtf8Rule;

impl LintRule for MetaCharsetUtf8Rule {
    fn id(&self) -> &'static str {
        "meta-charset-utf8"
    }

    fn description(&self) -> &'static str {
        "<head> must declare a UTF-8 charset with <meta charset>"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Document
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let charset = doc
            .select("head > meta[charset]")?
            .first()
            .and_then(|meta| meta.attr("charset"))
            .filter(|charset| !charset.is_empty());

        Ok(match charset {
            None => vec![Diagnostic::new(
                "<head> is missing UTF-8 charset <meta> tag",
            )],
            Some(charset) if !charset.eq_ignore_ascii_case("utf-8") => vec![Diagnostic::new(
                "charset <meta> tag is specifying a legacy, non-UTF-8 charset",
            )],
            Some(_) => Vec::new(),
        })
    }
}

crate::impl_rule!(
    XUaCompatibleRule,
    id: "x-ua-compatible",
    description: "<head> must disable IE compatibility modes with X-UA-Compatible",
    category: RuleCategory::Document,
    check: |doc| Ok(flag_if(
        !doc.exists(r#"head > meta[http-equiv="X-UA-Compatible"][content="IE=edge"]"#)?,
        "<head> is missing X-UA-Compatible <meta> tag that disables old IE compatibility modes",
    ))
);

crate::impl_rule!(
    ViewportRule,
    id: "viewport",
    description: "<head> must declare a viewport <meta> tag",
    category: RuleCategory::Document,
    check: |doc| Ok(flag_if(
        !doc.exists(r#"head > meta[name="viewport"][content]"#)?,
        "<head> is missing viewport <meta> tag that enables responsiveness",
    ))
);

crate::impl_rule!(
    JqueryRule,
    id: "jquery",
    description: "jQuery must be included for Bootstrap's JavaScript plugins",
    category: RuleCategory::Document,
    check: |doc| Ok(flag_if(
        !doc.exists(r#"script[src*="jquery"], script[src*="jQuery"]"#)?,
        "Unable to locate jQuery, which is required for Bootstrap's JavaScript plugins to work",
    ))
);

/// Rule that flags pages including both the full and minified Bootstrap JS.
pub struct BootstrapJsRule;

impl LintRule for BootstrapJsRule {
    fn id(&self) -> &'static str {
        "bootstrap-js"
    }

    fn description(&self) -> &'static str {
        "Only one of bootstrap.js and bootstrap.min.js may be included"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Document
    }

    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>> {
        let includes = |needle: &str| -> Result<bool> {
            let scripts = doc.select(&format!(r#"script[src*="{needle}"]"#))?;
            Ok(scripts
                .iter()
                .filter_map(|script| script.attr("src"))
                .any(|src| filename_from_url(src) == needle))
        };

        Ok(flag_if(
            includes("bootstrap.js")? && includes("bootstrap.min.js")?,
            "Only one copy of Bootstrap's JS should be included; currently the webpage includes both bootstrap.js and bootstrap.min.js",
        ))
    }
}

/// Last path segment of a URL, ignoring any query string or fragment.
fn filename_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}
