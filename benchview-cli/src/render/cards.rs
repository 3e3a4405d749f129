//! Card Rendering
//!
//! Parallel rendering of macro benchmark cards.
//!
//! Each card is a pure function of its own macro data, so cards are rendered
//! independently with Rayon. Results come back in plan order regardless of
//! scheduling.

use crate::planner::RenderPlan;
use benchview_format::FormatError;
use benchview_report::MacroReport;
use rayon::prelude::*;

/// Result of rendering one card
pub struct CardOutcome {
    /// Macro benchmark name
    pub name: String,
    /// Rendered card, or the formatting error that prevented it
    pub card: Result<MacroReport, FormatError>,
}

/// Render every card of a plan (parallelized with Rayon)
///
/// # Arguments
/// * `plan` - Selected macro benchmarks
/// * `git_ref` - Ref to label cards with; empty uses each macro's own ref
/// * `repository_url` - Repository commit links point into
pub fn render_cards(plan: &RenderPlan<'_>, git_ref: &str, repository_url: &str) -> Vec<CardOutcome> {
    plan.macros
        .par_iter()
        .map(|(name, data)| CardOutcome {
            name: name.to_string(),
            card: MacroReport::build(name, data, git_ref, repository_url),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::build_plan;
    use benchview_core::{MacroData, MetricValue, Range, SearchData};

    fn data(cpu: MetricValue) -> MacroData {
        let v = MetricValue::new(10.0, Range::bounded(0.5));
        MacroData {
            git_ref: "abc".to_string(),
            total_qps: v.clone(),
            reads_qps: v.clone(),
            writes_qps: v.clone(),
            other_qps: v.clone(),
            tps: v.clone(),
            latency: v.clone(),
            errors: v.clone(),
            total_components_cpu_time: cpu,
            components_cpu_time: Default::default(),
            total_components_mem_stats_alloc_bytes: v,
            components_mem_stats_alloc_bytes: Default::default(),
        }
    }

    #[test]
    fn test_render_cards_keeps_order_and_errors() {
        let mut search = SearchData::default();
        for i in 0..16 {
            search.macros.insert(
                format!("macro-{:02}", i),
                data(MetricValue::new(0.001, Range::unknown())),
            );
        }
        search
            .macros
            .insert("broken".to_string(), data(MetricValue::new("n/a", Range::unknown())));

        let plan = build_plan(&search, None);
        let outcomes = render_cards(&plan, "", "https://example.com/repo");

        assert_eq!(outcomes.len(), 17);
        assert_eq!(outcomes[0].name, "broken");
        assert!(outcomes[0].card.is_err());
        assert_eq!(outcomes[1].name, "macro-00");
        assert_eq!(outcomes[16].name, "macro-15");
        assert!(outcomes[1..].iter().all(|o| o.card.is_ok()));

        let card = outcomes[1].card.as_ref().unwrap();
        assert_eq!(card.git_ref, "abc");
        assert_eq!(card.lines[7].value, "1.00 ms (n/a)");
    }
}
