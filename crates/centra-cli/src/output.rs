//! Human/JSON output for centrality reports.
//!
//! Every command builds one or more [`MeasureReport`]s and hands them to
//! [`render`] with the [`OutputMode`] picked from the `--json` flag.

use std::io::{self, Write};

use serde::Serialize;

use crate::report::{MeasureReport, ReferenceComparison};

/// Shared width for human separators.
pub const PRETTY_RULE_WIDTH: usize = 48;

/// The output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Sections and aligned columns for people.
    Human,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Write a horizontal separator used by human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<12} {}", format!("{key}:"), value.as_ref())
}

/// Render a serializable value to `w` in the requested format.
///
/// In JSON mode, the value is serialized with `serde_json`. Otherwise the
/// `human_fn` closure produces the text.
pub fn render<T: Serialize + ?Sized>(
    mode: OutputMode,
    w: &mut dyn Write,
    value: &T,
    human_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    if mode.is_json() {
        serde_json::to_writer_pretty(&mut *w, value)?;
        writeln!(w)?;
    } else {
        human_fn(value, w)?;
    }
    Ok(())
}

/// Human rendering of one measure.
pub fn write_report(report: &MeasureReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("{} centrality", report.measure))?;
    pretty_kv(w, "graph", format!("{} nodes, {} edges", report.nodes, report.edges))?;
    if let (Some(iterations), Some(converged)) = (report.iterations, report.converged) {
        let state = if converged { "converged" } else { "not converged" };
        pretty_kv(w, "iterations", format!("{iterations} ({state})"))?;
    }

    writeln!(w)?;
    writeln!(w, "{:>4}  {:>10}  {:>12}", "rank", "node", "score")?;
    for (i, ranked) in report.top.iter().enumerate() {
        writeln!(w, "{:>4}  {:>10}  {:>12.6}", i + 1, ranked.node, ranked.score)?;
    }

    if let Some(reference) = &report.reference {
        writeln!(w)?;
        write_reference(reference, w)?;
    }
    Ok(())
}

/// Human rendering of several measures, separated by blank lines.
pub fn write_reports(reports: &[MeasureReport], w: &mut dyn Write) -> io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        write_report(report, w)?;
    }
    Ok(())
}

fn write_reference(cmp: &ReferenceComparison, w: &mut dyn Write) -> io::Result<()> {
    pretty_kv(w, "matched", join_ids(&cmp.matched))?;
    if !cmp.missed.is_empty() {
        pretty_kv(w, "missed", join_ids(&cmp.missed))?;
    }
    if !cmp.unexpected.is_empty() {
        pretty_kv(w, "unexpected", join_ids(&cmp.unexpected))?;
    }
    Ok(())
}

fn join_ids(ids: &[u64]) -> String {
    if ids.is_empty() {
        return "(none)".to_string();
    }
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Ranked;

    fn sample() -> MeasureReport {
        MeasureReport {
            measure: "pagerank",
            nodes: 3,
            edges: 2,
            iterations: Some(12),
            converged: Some(true),
            top: vec![
                Ranked { node: 2, score: 0.5 },
                Ranked { node: 1, score: 0.3 },
            ],
            reference: Some(ReferenceComparison {
                matched: vec![2],
                missed: vec![7],
                unexpected: vec![1],
            }),
        }
    }

    #[test]
    fn human_report_lists_ranks_and_reference() {
        let mut buf = Vec::new();
        render(OutputMode::Human, &mut buf, &sample(), write_report).expect("render");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.starts_with("pagerank centrality\n"));
        assert!(text.contains("12 (converged)"));
        assert!(text.contains(&format!("{:>4}  {:>10}  {:>12.6}", 1, 2, 0.5)));
        assert!(text.contains(&format!("{:<12} 7", "missed:")));
        assert!(text.contains(&format!("{:<12} 1", "unexpected:")));
    }

    #[test]
    fn json_report_is_structured() {
        let mut buf = Vec::new();
        render(OutputMode::Json, &mut buf, &sample(), write_report).expect("render");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");

        assert_eq!(value["measure"], "pagerank");
        assert_eq!(value["top"][0]["node"], 2);
        assert_eq!(value["reference"]["missed"][0], 7);
    }

    #[test]
    fn json_omits_absent_fields() {
        let report = MeasureReport {
            iterations: None,
            converged: None,
            reference: None,
            ..sample()
        };
        let mut buf = Vec::new();
        render(OutputMode::Json, &mut buf, &report, write_report).expect("render");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        assert!(value.get("iterations").is_none());
        assert!(value.get("reference").is_none());
    }
}
