//! CSV Output
//!
//! One record per metric line: `section,name,title,value`. Comparison records
//! put `old -> new` in `value` and carry delta, p-value and verdict in their
//! own columns. Listings (status, PRs, releases) are not metric data and are
//! left out.

use crate::report::Report;

const HEADER: [&str; 7] = ["section", "name", "title", "value", "delta", "p_value", "verdict"];

/// Generate a CSV export of macro cards and comparisons.
pub fn generate_csv_report(report: &Report) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(HEADER)?;

    for card in &report.macros {
        for line in &card.lines {
            wtr.write_record([
                "macro",
                card.name.as_str(),
                line.title.as_str(),
                line.value.as_str(),
                "",
                "",
                "",
            ])?;
        }
    }

    for cmp in &report.comparisons {
        for line in &cmp.lines {
            let value = format!("{} -> {}", line.old, line.new);
            let verdict = line.verdict.to_string();
            wtr.write_record([
                "compare",
                cmp.kind.as_str(),
                line.title.as_str(),
                value.as_str(),
                line.delta.as_str(),
                line.p_value.as_str(),
                verdict.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
