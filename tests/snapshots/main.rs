//! Snapshot tests for the full lint pass and grid class simplification.

use insta::assert_snapshot;

use bootlint::lint::rules::redundancy::simplify;
use bootlint::{Diagnostic, lint_html};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta http-equiv="X-UA-Compatible" content="IE=edge">
<meta name="viewport" content="width=device-width">
<script src="jquery.js"></script>
</head>
<body>
<div class="container">
  <div class="row">
    <div class="col-xs-6 col-sm-6 col-md-6 col-lg-6">a</div>
    <div class="col-xs-5 col-md-5 col-lg-5 pull-right">b</div>
    <button>c</button>
  </div>
</div>
</body>
</html>
"#;

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::message)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_lint_pass() {
    let diagnostics = lint_html(PAGE).unwrap();
    assert_snapshot!(render(&diagnostics), @r#"
    Only columns (.col-*-*) may be children of `.row`s
    Always set a `type` on `<button>`s.
    Since grid classes apply to devices with screen widths greater than or equal to the breakpoint sizes (unless overridden by grid classes targeting larger screens), class="col-xs-6 col-sm-6 col-md-6 col-lg-6" is redundant and can be simplified to class="col-xs-6"
    Since grid classes apply to devices with screen widths greater than or equal to the breakpoint sizes (unless overridden by grid classes targeting larger screens), class="col-xs-5 col-md-5 col-lg-5 pull-right" is redundant and can be simplified to class="pull-right col-xs-5 col-md-5"
    "#);
}

#[test]
fn snapshot_simplifications() {
    let inputs = [
        "col-xs-6 col-sm-6",
        "col-sm-4 col-md-4 col-lg-4",
        "col-xs-12 col-sm-6 col-md-6",
        "col-xs-6 col-md-6",
        "foo col-lg-3 bar col-md-3",
        "col-xs-1 col-sm-1 col-md-2 col-lg-2",
    ];
    let rendered = inputs
        .iter()
        .map(|input| {
            let result = simplify(input).unwrap_or_else(|| "(unchanged)".to_string());
            format!("{input} => {result}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(rendered, @r"
    col-xs-6 col-sm-6 => col-xs-6
    col-sm-4 col-md-4 col-lg-4 => col-sm-4
    col-xs-12 col-sm-6 col-md-6 => col-xs-12 col-sm-6
    col-xs-6 col-md-6 => (unchanged)
    foo col-lg-3 bar col-md-3 => foo bar col-md-3
    col-xs-1 col-sm-1 col-md-2 col-lg-2 => col-xs-1 col-md-2
    ");
}
