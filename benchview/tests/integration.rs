//! Integration tests for Benchview
//!
//! These tests drive the public API end to end: JSON as served by the results
//! API in, rendered report text out.

use benchview::{
    CompareData, ComparisonReport, DisplayLine, FormatKind, INFINITE_MARKER, MacroReport,
    MetricRow, MetricValue, Range, Report, SearchData, StatusEntry, StatusLine, UNKNOWN_MARKER,
    Verdict, build_report_meta, format_bytes, format_duration, format_human_output, format_range,
    generate_csv_report, generate_json_report, generate_markdown_summary, render_row,
};
use serde_json::json;

const REPO: &str = "https://github.com/vitessio/vitess";

fn metric(center: f64, range: f64) -> serde_json::Value {
    json!({"center": center, "confidence": 0.95,
           "range": {"infinite": false, "unknown": false, "value": range}})
}

fn search_fixture() -> serde_json::Value {
    json!({
        "Macros": {
            "oltp": {
                "total_qps": metric(1500.4, 10.2),
                "reads_qps": metric(1050.0, 8.0),
                "writes_qps": metric(300.0, 2.5),
                "other_qps": metric(150.4, 1.0),
                "tps": metric(75.0, 0.5),
                "latency": metric(12.3, 0.2),
                "errors": {"center": 0, "range": {"infinite": false, "unknown": true, "value": 0}},
                "total_components_cpu_time": metric(0.000412, 0.5),
                "components_cpu_time": {
                    "vttablet": metric(0.0003, 0.4),
                    "vtgate": metric(0.000112, 0.3)
                },
                "total_components_mem_stats_alloc_bytes": metric(1310720.0, 1.0),
                "components_mem_stats_alloc_bytes": {
                    "vtgate": metric(524288.0, 1.0),
                    "vttablet": {"center": 786432.0, "range": {"infinite": true, "unknown": false, "value": 0}}
                }
            },
            "tpcc": {
                "total_qps": metric(900.0, 5.0),
                "reads_qps": metric(600.0, 5.0),
                "writes_qps": metric(250.0, 5.0),
                "other_qps": metric(50.0, 5.0),
                "tps": metric(30.0, 1.0),
                "latency": metric(40.0, 1.0),
                "errors": metric(2.0, 0.0),
                "total_components_cpu_time": metric(0.0015, 1.0),
                "total_components_mem_stats_alloc_bytes": metric(2048.0, 1.0)
            }
        }
    })
}

/// The row renderer end-to-end scenario
#[test]
fn test_qps_total_row() {
    let row: MetricRow = serde_json::from_value(json!({
        "title": "QPS Total",
        "value": {"center": 1500.4, "range": {"infinite": false, "unknown": false, "value": 10.2}},
        "format": "none"
    }))
    .unwrap();

    let line = render_row(&row).unwrap();
    assert_eq!(line.title, "QPS Total");
    assert!(line.value.contains("1500.4"));
    assert!(line.value.contains("10.2"));
}

/// Unit formatter scenarios
#[test]
fn test_unit_formatter_scenarios() {
    assert_eq!(format_bytes(1048576.0).unwrap(), "1.00 MB");
    assert_eq!(format_duration(0.000123).unwrap(), "123.00 μs");
    assert_eq!(format_duration(0.0).unwrap(), "0.00 ns");
    assert_eq!(format_bytes(0.0).unwrap(), "0.00 B");
}

/// Range markers are distinct, non-numeric, and bounded ranges show their value
#[test]
fn test_range_markers() {
    let infinite = format_range(&Range::infinite()).unwrap();
    let unknown = format_range(&Range::unknown()).unwrap();

    assert_eq!(infinite, INFINITE_MARKER);
    assert_eq!(unknown, UNKNOWN_MARKER);
    assert_ne!(infinite, unknown);
    assert!(format_range(&Range::bounded(5.0)).unwrap().contains("5.00"));
}

/// A full macro card from search JSON
#[test]
fn test_macro_card_from_search_json() {
    let search: SearchData = serde_json::from_value(search_fixture()).unwrap();
    let card = MacroReport::build("oltp", &search.macros["oltp"], "0123456789abcdef", REPO).unwrap();

    let lines: Vec<(&str, &str)> = card
        .lines
        .iter()
        .map(|l| (l.title.as_str(), l.value.as_str()))
        .collect();

    let expected_unknown = format!("0 ({})", UNKNOWN_MARKER);
    let expected_infinite = format!("768.00 KB ({})", INFINITE_MARKER);
    assert_eq!(
        lines,
        vec![
            ("QPS Total", "1500.4 (±10.20)"),
            ("QPS Reads", "1050 (±8.00)"),
            ("QPS Writes", "300 (±2.50)"),
            ("QPS Other", "150.4 (±1.00)"),
            ("TPS", "75 (±0.50)"),
            ("Latency", "12.3 (±0.20)"),
            ("Errors", expected_unknown.as_str()),
            ("Total CPU / query", "412.00 μs (±0.50)"),
            ("CPU / query (vtgate)", "112.00 μs (±0.30)"),
            ("CPU / query (vttablet)", "300.00 μs (±0.40)"),
            ("Total Allocated / query", "1.25 MB (±1.00)"),
            ("Allocated / query (vtgate)", "512.00 KB (±1.00)"),
            ("Allocated / query (vttablet)", expected_infinite.as_str()),
        ]
    );
    assert_eq!(card.commit_url, format!("{}/commit/0123456789abcdef", REPO));
}

/// Macros without component breakdowns render totals only
#[test]
fn test_macro_card_without_components() {
    let search: SearchData = serde_json::from_value(search_fixture()).unwrap();
    let card = MacroReport::build("tpcc", &search.macros["tpcc"], "abc", REPO).unwrap();

    assert_eq!(card.lines.len(), 9);
    assert_eq!(card.lines[7].value, "1.50 ms (±1.00)");
    assert_eq!(card.lines[8].value, "2.00 KB (±1.00)");
}

/// Every output format carries the rendered card
#[test]
fn test_report_outputs() {
    let search: SearchData = serde_json::from_value(search_fixture()).unwrap();
    let mut report = Report::new(build_report_meta(REPO, Some("search.json".to_string())));
    for (name, data) in &search.macros {
        report
            .macros
            .push(MacroReport::build(name, data, "0123456789abcdef", REPO).unwrap());
    }

    let human = format_human_output(&report);
    assert!(human.contains("oltp  @ 0123456"));
    assert!(human.contains("QPS Total │ 1500.4 (±10.20)"));

    let markdown = generate_markdown_summary(&report);
    assert!(markdown.contains("## oltp"));
    assert!(markdown.contains("## tpcc"));
    assert!(markdown.contains(&format!("({}/commit/0123456789abcdef)", REPO)));

    let csv = generate_csv_report(&report).unwrap();
    assert!(csv.contains("macro,oltp,Total CPU / query,412.00 μs (±0.50),,,"));
    assert_eq!(csv.lines().count(), 1 + 13 + 9);

    let json: serde_json::Value = serde_json::from_str(&generate_json_report(&report).unwrap()).unwrap();
    assert_eq!(json["macros"][1]["name"], "tpcc");
    assert_eq!(json["meta"]["source"], "search.json");
}

/// Comparison JSON renders with verdicts
#[test]
fn test_comparison_from_json() {
    let value = |delta: f64, insignificant: bool| {
        json!({"insignificant": insignificant, "delta": delta, "p": 0.004, "n1": 10, "n2": 10,
               "old": metric(1000.0, 5.0), "new": metric(1000.0 + delta * 10.0, 5.0)})
    };
    let data: CompareData = serde_json::from_value(json!({
        "type": "oltp",
        "result": {
            "total_qps": value(4.0, false),
            "reads_qps": value(-2.5, false),
            "writes_qps": value(0.3, true),
            "other_qps": value(0.0, false),
            "tps": value(4.0, false)
        }
    }))
    .unwrap();

    let report = ComparisonReport::build(&data, "v17.0.0", "0123456789abcdef", REPO).unwrap();

    assert_eq!(report.lines[0].new, "1040 (±5.00)");
    assert_eq!(report.lines[0].delta, "+4.00%");
    assert_eq!(report.lines[1].delta, "-2.50%");
    assert_eq!(report.lines[1].verdict, Verdict::Regression);
    assert_eq!(report.lines[2].verdict, Verdict::Insignificant);
    assert_eq!(report.lines[3].verdict, Verdict::Unchanged);
    assert_eq!(report.count(Verdict::Improvement), 2);
    assert_eq!(report.old_url, format!("{}/commit/v17.0.0", REPO));
}

/// Status entries get a run duration
#[test]
fn test_status_from_json() {
    let entries: Vec<StatusEntry> = serde_json::from_value(json!([
        {"uuid": "1", "git_ref": "abc", "source": "cron", "started_at": "2023-05-10 12:00:00",
         "finished_at": "2023-05-10 13:01:05", "type_of": "oltp", "golang_version": "1.20",
         "status": "finished"},
        {"uuid": "2", "git_ref": "def", "source": "cron_pr", "started_at": "2023-05-10 12:00:00",
         "finished_at": null, "type_of": "tpcc", "pull_nb": 13000, "golang_version": "1.20",
         "status": "started"}
    ]))
    .unwrap();

    let lines: Vec<StatusLine> = entries.iter().map(StatusLine::from_entry).collect();
    assert_eq!(lines[0].duration, "1h 01m 05s");
    assert_eq!(lines[1].duration, "-");
    assert_eq!(lines[1].pull_request, Some(13000));
}

/// Format kinds dispatch to the matching formatter
#[test]
fn test_format_kind_dispatch() {
    let value = MetricValue::new(2048.0, Range::bounded(0.0));
    let render = |format| {
        render_row(&MetricRow::new("x", value.clone()).with_format(format))
            .unwrap()
            .value
    };

    assert_eq!(render(FormatKind::None), "2048 (±0.00)");
    assert_eq!(render(FormatKind::Memory), "2.00 KB (±0.00)");
    assert_eq!(render(FormatKind::Time), "2048.00 s (±0.00)");
}

/// Display lines print as "title: value"
#[test]
fn test_display_line() {
    let line = DisplayLine {
        title: "TPS".to_string(),
        value: "75 (±0.50)".to_string(),
    };
    assert_eq!(line.to_string(), "TPS: 75 (±0.50)");
}
