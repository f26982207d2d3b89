//! Grid token catalog.
//!
//! Static knowledge about the framework's responsive grid: which breakpoints
//! exist (narrowest to widest), how many columns a row has, and how a
//! `col-<breakpoint>-<width>` class is recognised.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Number of columns in a grid row; also the widest valid column width.
pub const MAX_COLUMNS: u8 = 12;

/// Anchored per-class grid token pattern. The width group is deliberately
/// lax (`\d{0,2}`); [`GridToken::parse`] rejects widths that don't parse.
static COL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^col-(xs|sm|md|lg)-(\d{0,2})$").expect("valid regex"));

static COLUMN_SELECTORS: LazyLock<Vec<String>> = LazyLock::new(|| {
    Breakpoint::ALL
        .iter()
        .flat_map(|bp| (1..=MAX_COLUMNS).map(move |width| format!(".col-{bp}-{width}")))
        .collect()
});

static ANY_COLUMN_SELECTOR: LazyLock<String> = LazyLock::new(|| COLUMN_SELECTORS.join(","));

/// A responsive screen-size tier.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    /// Every breakpoint, narrowest first.
    pub const ALL: [Self; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

    /// Position in [`Breakpoint::ALL`].
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::Xs => 0,
            Self::Sm => 1,
            Self::Md => 2,
            Self::Lg => 3,
        }
    }

    #[must_use]
    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.as_str() == name)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `col-<breakpoint>-<width>` declaration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridToken {
    pub breakpoint: Breakpoint,
    pub width: u8,
}

impl GridToken {
    #[must_use]
    pub const fn new(breakpoint: Breakpoint, width: u8) -> Self {
        Self { breakpoint, width }
    }

    /// Parse a single class name. Returns `None` for anything that is not a
    /// well-formed grid token, including `col-md-` (empty width), leading
    /// zeros and widths outside `1..=MAX_COLUMNS`.
    #[must_use]
    pub fn parse(class: &str) -> Option<Self> {
        let caps = COL_REGEX.captures(class)?;
        let breakpoint = Breakpoint::from_name(caps.get(1)?.as_str())?;
        let digits = caps.get(2)?.as_str();
        if digits.starts_with('0') {
            return None;
        }
        let width = digits.parse::<u8>().ok()?;
        (1..=MAX_COLUMNS)
            .contains(&width)
            .then_some(Self::new(breakpoint, width))
    }

    /// Class name for this token, e.g. `col-md-6`.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GridToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col-{}-{}", self.breakpoint, self.width)
    }
}

/// Every grid column class selector, `.col-xs-1` through `.col-lg-12`.
#[must_use]
pub fn column_selectors() -> &'static [String] {
    &COLUMN_SELECTORS
}

/// Selector group matching any grid column.
#[must_use]
pub fn any_column_selector() -> &'static str {
    &ANY_COLUMN_SELECTOR
}

/// Whether a whitespace-separated class list contains at least one grid token.
#[must_use]
pub fn is_grid_column<'a>(mut classes: impl Iterator<Item = &'a str>) -> bool {
    classes.any(|class| GridToken::parse(class).is_some())
}
