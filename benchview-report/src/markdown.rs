//! Markdown Summary
//!
//! GitHub-flavoured tables, suitable for `$GITHUB_STEP_SUMMARY` or PR comments.

use crate::links::short_ref;
use crate::listing::MISSING;
use crate::report::Report;

/// Generate a Markdown summary of every non-empty report section.
pub fn generate_markdown_summary(report: &Report) -> String {
    let mut output = String::new();

    for card in &report.macros {
        output.push_str(&format!("## {}\n\n", cell(&card.name)));
        output.push_str(&format!(
            "Commit: [`{}`]({})\n\n",
            short_ref(&card.git_ref),
            card.commit_url
        ));
        output.push_str("| Metric | Value |\n");
        output.push_str("|---|---:|\n");
        for line in &card.lines {
            output.push_str(&format!("| {} | {} |\n", cell(&line.title), cell(&line.value)));
        }
        output.push('\n');
    }

    for cmp in &report.comparisons {
        output.push_str(&format!("## Comparison: {}\n\n", cell(&cmp.kind)));
        output.push_str(&format!(
            "[`{}`]({}) → [`{}`]({})\n\n",
            short_ref(&cmp.old_ref),
            cmp.old_url,
            short_ref(&cmp.new_ref),
            cmp.new_url
        ));
        output.push_str("| Metric | Old | New | Delta | p | Verdict |\n");
        output.push_str("|---|---:|---:|---:|---:|---|\n");
        for line in &cmp.lines {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                cell(&line.title),
                cell(&line.old),
                cell(&line.new),
                line.delta,
                line.p_value,
                line.verdict
            ));
        }
        output.push('\n');
    }

    if !report.status.is_empty() {
        output.push_str("## Status\n\n");
        output.push_str("| Ref | Type | Source | PR | Status | Started | Duration |\n");
        output.push_str("|---|---|---|---:|---|---|---:|\n");
        for s in &report.status {
            let pr = s
                .pull_request
                .map(|n| format!("#{}", n))
                .unwrap_or_else(|| MISSING.to_string());
            output.push_str(&format!(
                "| `{}` | {} | {} | {} | {} | {} | {} |\n",
                short_ref(&s.git_ref),
                cell(&s.kind),
                cell(&s.source),
                pr,
                cell(&s.status),
                cell(&s.started_at),
                s.duration
            ));
        }
        output.push('\n');
    }

    if !report.pull_requests.is_empty() {
        output.push_str("## Pull Requests\n\n");
        output.push_str("| PR | Title | Author | Created |\n");
        output.push_str("|---:|---|---|---|\n");
        for pr in &report.pull_requests {
            let title = match &pr.error {
                Some(err) => format!("{} ⚠ {}", cell(&pr.title), cell(err)),
                None => cell(&pr.title),
            };
            output.push_str(&format!(
                "| [#{}]({}) | {} | {} | {} |\n",
                pr.number,
                pr.url,
                title,
                cell(&pr.author),
                cell(&pr.created_at)
            ));
        }
        output.push('\n');
    }

    if !report.releases.is_empty() {
        output.push_str("## Releases\n\n");
        output.push_str("| Name | Version | RC | Commit |\n");
        output.push_str("|---|---|---:|---|\n");
        for r in &report.releases {
            let rc = r
                .release_candidate
                .map(|n| n.to_string())
                .unwrap_or_else(|| MISSING.to_string());
            output.push_str(&format!(
                "| {} | {} | {} | [`{}`]({}) |\n",
                cell(&r.name),
                r.version,
                rc,
                short_ref(&r.commit),
                r.commit_url
            ));
        }
        output.push('\n');
    }

    output
}

/// Escape pipe characters and flatten newlines so text stays in its cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
