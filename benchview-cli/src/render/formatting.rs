//! Output Formatting
//!
//! Human-readable output formatting for benchmark reports.
//!
//! Generates terminal-friendly output with:
//! - Macro cards with right-aligned metric titles and commit links
//! - Comparison tables with delta, p-value and verdict icons (▲/▼/=/~)
//! - Run status, pull request and release listings

use benchview_report::{MISSING, Report, Verdict, short_ref};

/// Format a report for human-readable terminal display
///
/// # Arguments
/// * `report` - Complete rendered report
///
/// # Returns
/// Formatted string suitable for terminal output
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    // Macro cards
    for card in &report.macros {
        output.push('\n');
        output.push_str(&format!("{}  @ {}\n", card.name, short_ref(&card.git_ref)));
        output.push_str(&format!("{}\n", card.commit_url));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let title_width = card
            .lines
            .iter()
            .map(|l| l.title.chars().count())
            .max()
            .unwrap_or(20);

        for line in &card.lines {
            output.push_str(&format!(
                "  {:>width$} │ {}\n",
                line.title,
                line.value,
                width = title_width
            ));
        }
    }

    // Comparisons
    for cmp in &report.comparisons {
        output.push_str(&format!(
            "\n{}: {} → {}\n",
            cmp.kind,
            short_ref(&cmp.old_ref),
            short_ref(&cmp.new_ref)
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let title_width = cmp
            .lines
            .iter()
            .map(|l| l.title.chars().count())
            .max()
            .unwrap_or(12);
        let value_width = cmp
            .lines
            .iter()
            .flat_map(|l| [l.old.chars().count(), l.new.chars().count()])
            .max()
            .unwrap_or(12)
            .max(3);

        // Header
        output.push_str(&format!(
            "    {:<tw$}  {:>vw$}  {:>vw$}  {:>9}  {:>6}\n",
            "Metric",
            "Old",
            "New",
            "Delta",
            "p",
            tw = title_width,
            vw = value_width
        ));

        for line in &cmp.lines {
            let icon = match line.verdict {
                Verdict::Improvement => "▲",
                Verdict::Regression => "▼",
                Verdict::Unchanged => "=",
                Verdict::Insignificant => "~",
            };
            output.push_str(&format!(
                "  {} {:<tw$}  {:>vw$}  {:>vw$}  {:>9}  {:>6}\n",
                icon,
                line.title,
                line.old,
                line.new,
                line.delta,
                line.p_value,
                tw = title_width,
                vw = value_width
            ));
        }
    }

    // Status
    if !report.status.is_empty() {
        output.push_str("\nStatus\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for s in &report.status {
            let pr = s
                .pull_request
                .map(|n| format!(" (PR #{})", n))
                .unwrap_or_default();
            output.push_str(&format!(
                "  {:<8} {:<10} {:<9} {}{}  {}  [{}]\n",
                short_ref(&s.git_ref),
                s.kind,
                s.status,
                s.source,
                pr,
                s.started_at,
                s.duration
            ));
        }
    }

    // Pull requests
    if !report.pull_requests.is_empty() {
        output.push_str("\nPull Requests\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for pr in &report.pull_requests {
            output.push_str(&format!("  #{:<6} {} ({})\n", pr.number, pr.title, pr.author));
            output.push_str(&format!("          {}\n", pr.url));
            if let Some(error) = &pr.error {
                output.push_str(&format!("          error: {}\n", error));
            }
        }
    }

    // Releases
    if !report.releases.is_empty() {
        output.push_str("\nReleases\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for r in &report.releases {
            let rc = r
                .release_candidate
                .map(|n| format!("rc{}", n))
                .unwrap_or_else(|| MISSING.to_string());
            output.push_str(&format!(
                "  {:<16} {:<10} {:<4} {}\n",
                r.name,
                r.version,
                rc,
                short_ref(&r.commit)
            ));
        }
    }

    if report.is_empty() {
        output.push_str("\nNothing to display.\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::build_report_meta;
    use benchview_report::{ComparisonLine, ComparisonReport, DisplayLine, MacroReport};

    fn report() -> Report {
        Report::new(build_report_meta("https://github.com/vitessio/vitess", None))
    }

    #[test]
    fn test_empty_report() {
        assert!(format_human_output(&report()).contains("Nothing to display."));
    }

    #[test]
    fn test_card_titles_are_right_aligned() {
        let mut report = report();
        report.macros.push(MacroReport {
            name: "oltp".to_string(),
            git_ref: "0123456789abcdef".to_string(),
            commit_url: "https://github.com/vitessio/vitess/commit/0123456789abcdef".to_string(),
            lines: vec![
                DisplayLine {
                    title: "TPS".to_string(),
                    value: "75 (±1.00)".to_string(),
                },
                DisplayLine {
                    title: "QPS Total".to_string(),
                    value: "1500.4 (±10.20)".to_string(),
                },
            ],
        });

        let out = format_human_output(&report);
        assert!(out.contains("oltp  @ 0123456"));
        assert!(out.contains("        TPS │ 75 (±1.00)\n"));
        assert!(out.contains("  QPS Total │ 1500.4 (±10.20)\n"));
        assert!(!out.contains("Nothing to display."));
    }

    #[test]
    fn test_comparison_icons() {
        let mut report = report();
        let line = |title: &str, verdict| ComparisonLine {
            title: title.to_string(),
            old: "1 (±0.00)".to_string(),
            new: "2 (±0.00)".to_string(),
            delta: "+100.00%".to_string(),
            p_value: "0.001".to_string(),
            samples: (3, 3),
            verdict,
        };
        report.comparisons.push(ComparisonReport {
            kind: "oltp".to_string(),
            old_ref: "abc".to_string(),
            new_ref: "def".to_string(),
            old_url: String::new(),
            new_url: String::new(),
            lines: vec![
                line("QPS Total", Verdict::Improvement),
                line("TPS", Verdict::Regression),
                line("QPS Other", Verdict::Insignificant),
            ],
        });

        let out = format_human_output(&report);
        assert!(out.contains("oltp: abc → def"));
        assert!(out.contains("▲ QPS Total"));
        assert!(out.contains("▼ TPS"));
        assert!(out.contains("~ QPS Other"));
    }
}
