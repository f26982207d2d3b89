//! Read-only query layer over a parsed HTML document.
//!
//! Wraps `scraper` so rules can evaluate CSS selectors and walk the element
//! tree without touching the parser directly. Nothing here mutates the tree.

use scraper::node::Doctype;
use scraper::{ElementRef, Html, Selector};

use crate::error::{BootlintError, Result};

/// A parsed markup document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw markup. HTML parsing is error-tolerant, so this never fails.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>> {
        let compiled = compile(selector)?;
        Ok(self.html.select(&compiled).collect())
    }

    /// Whether any element matches `selector`.
    pub fn exists(&self, selector: &str) -> Result<bool> {
        let compiled = compile(selector)?;
        Ok(self.html.select(&compiled).next().is_some())
    }

    /// The document's DOCTYPE node, if it declares one.
    #[must_use]
    pub fn doctype(&self) -> Option<&Doctype> {
        self.html
            .tree
            .root()
            .children()
            .find_map(|node| node.value().as_doctype())
    }
}

/// Compile a CSS selector, mapping parser failures into [`BootlintError::Selector`].
pub fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|err| BootlintError::Selector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Tree navigation helpers on top of [`ElementRef`].
pub trait ElementExt<'a> {
    /// Lowercase tag name.
    fn tag(&self) -> &'a str;

    /// Raw `class` attribute text, verbatim.
    fn class_attr(&self) -> Option<&'a str>;

    fn has_class(&self, class: &str) -> bool;

    fn has_any_class(&self, classes: &[&str]) -> bool {
        classes.iter().any(|class| self.has_class(class))
    }

    fn parent_element(&self) -> Option<ElementRef<'a>>;

    /// Nearest element, starting with this one, that matches `selector`.
    fn closest(&self, selector: &Selector) -> Option<ElementRef<'a>>;
}

impl<'a> ElementExt<'a> for ElementRef<'a> {
    fn tag(&self) -> &'a str {
        self.value().name()
    }

    fn class_attr(&self) -> Option<&'a str> {
        self.value().attr("class")
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|candidate| candidate == class)
    }

    fn parent_element(&self) -> Option<ElementRef<'a>> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn closest(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        if selector.matches(self) {
            return Some(*self);
        }
        self.ancestors()
            .filter_map(ElementRef::wrap)
            .find(|ancestor| selector.matches(ancestor))
    }
}
