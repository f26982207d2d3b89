//! Lint rule trait and helpers.

use crate::document::Document;
use crate::error::Result;

use super::diagnostic::{Diagnostic, RuleCategory};

/// A lint rule that checks a document for one authoring mistake.
///
/// Rules are stateless and independent of each other. Finding nothing is the
/// common case and is reported as an empty vector. An `Err` means the query
/// layer itself failed; it aborts the whole lint pass.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g., "nested-containers")
    fn id(&self) -> &str;

    /// What this rule checks
    fn description(&self) -> &str;

    /// Category this rule belongs to
    fn category(&self) -> RuleCategory;

    /// Run the check. Must not mutate the document and must be idempotent.
    fn check(&self, doc: &Document) -> Result<Vec<Diagnostic>>;
}

/// A boxed lint rule for dynamic dispatch
pub type BoxedRule = Box<dyn LintRule>;

/// One diagnostic when `found` holds, none otherwise.
pub fn flag_if(found: bool, message: &str) -> Vec<Diagnostic> {
    if found {
        vec![Diagnostic::new(message)]
    } else {
        Vec::new()
    }
}

/// Helper macro to simplify rule implementation
#[macro_export]
macro_rules! impl_rule {
    (
        $struct_name:ident,
        id: $id:expr,
        description: $desc:expr,
        category: $cat:expr,
        check: |$doc:ident| $check_body:expr
    ) => {
        pub struct $struct_name;

        impl $crate::lint::rule::LintRule for $struct_name {
            fn id(&self) -> &str {
                $id
            }

            fn description(&self) -> &str {
                $desc
            }

            fn category(&self) -> $crate::lint::diagnostic::RuleCategory {
                $cat
            }

            fn check(
                &self,
                $doc: &$crate::document::Document,
            ) -> $crate::error::Result<Vec<$crate::lint::diagnostic::Diagnostic>> {
                $check_body
            }
        }
    };
}

pub use impl_rule;
