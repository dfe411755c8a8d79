// tests/integration_tests/report_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use wordtally::{ReportConfig, Separators, count_file, rank, render_report};

fn render_file(name: &str, config: &ReportConfig) -> Result<String> {
    let temp_dir = setup_test_directory()?;
    let table = count_file(&temp_dir.path().join(name), &config.separators())?;
    let mut out = Vec::new();
    render_report(&mut out, name, rank(table), config)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_report_for_scenario() -> Result<()> {
    let html = render_file("mat.txt", &ReportConfig::default())?;
    let lines: Vec<&str> = html.lines().collect();

    assert_eq!(
        lines.first().copied(),
        Some(
            "<html> <head><title>Words Counted in mat.txt</title> </head><body style = \"background-color: #FFFF99\" ><h2>Words Counted in mat.txt</h2><hr />"
        )
    );
    assert_eq!(
        lines.get(1).copied(),
        Some(
            "<div><table style = \"float: left \" border=\"4\"><caption><b>Ordered Alphabetically</b></caption><tr><th>Words</th><th>Counts</th></tr>"
        )
    );
    assert_eq!(lines.get(2).copied(), Some("<tr><td>cat</td><td>1</td></tr>"));
    assert_eq!(lines.get(6).copied(), Some("<tr><td>the</td><td>2</td></tr>"));
    assert_eq!(lines.get(7).copied(), Some("</table></div>"));
    assert_eq!(lines.get(9).copied(), Some("<tr><td>the</td><td>2</td></tr>"));
    assert_eq!(lines.last().copied(), Some("</body></html>"));
    assert_eq!(lines.len(), 16, "Header, two tables of five rows, footer");

    Ok(())
}

#[test]
fn test_report_for_empty_input() -> Result<()> {
    let html = render_file("empty.txt", &ReportConfig::default())?;

    assert_eq!(html.matches("<table").count(), 2, "Both tables are present");
    assert_eq!(html.matches("<th>Words</th>").count(), 2);
    assert!(!html.contains("<td>"), "Tables have no data rows");

    Ok(())
}

#[test]
fn test_report_uses_config() -> Result<()> {
    let config = ReportConfig {
        separators: Some(String::from(" ")),
        background_color: String::from("#FFFFFF"),
        border: 1,
        occurrence_caption: String::from("Most Common"),
        ..ReportConfig::default()
    };
    let html = render_file("separators.txt", &config)?;

    assert!(html.contains("background-color: #FFFFFF"));
    assert_eq!(html.matches("border=\"1\"").count(), 2);
    assert!(html.contains("<caption><b>Most Common</b></caption>"));
    assert!(
        html.contains("<tr><td>123</td><td>1</td></tr>"),
        "Digits are words once only spaces separate"
    );
    assert_ne!(config.separators(), Separators::default());

    Ok(())
}
