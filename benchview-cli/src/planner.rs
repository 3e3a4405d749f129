//! Macro Selection
//!
//! Picks the macro benchmarks of a search result to render.
//!
//! Filtering: regex pattern matching on the macro benchmark name.
//! Ordering: macros are sorted alphabetically by name for deterministic output.

use benchview_core::{MacroData, SearchData};
use regex::Regex;

/// Macro benchmarks selected for rendering
pub struct RenderPlan<'a> {
    /// `(name, data)` pairs in name order
    pub macros: Vec<(&'a str, &'a MacroData)>,
}

/// Build a render plan from a search result
pub fn build_plan<'a>(search: &'a SearchData, filter: Option<&Regex>) -> RenderPlan<'a> {
    let macros = search
        .macros
        .iter()
        .filter(|(name, _)| filter.is_none_or(|re| re.is_match(name)))
        .map(|(name, data)| (name.as_str(), data))
        .collect();

    RenderPlan { macros }
}
