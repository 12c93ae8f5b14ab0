//! Output formatters for suite results
//!
//! Provides Table, JSON, CSV and summary output formats.

use crate::models::{RunSummary, ScenarioResult, ScenarioStatus};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single scenario result
    pub fn format_result(&self, result: &ScenarioResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Csv => self.format_result_csv(result),
            OutputFormat::Summary => format!("{result}"),
        }
    }

    fn status_cell(&self, status: ScenarioStatus) -> &'static str {
        if self.colorize {
            match status {
                ScenarioStatus::Pass => "\x1b[32m✓ PASS\x1b[0m",
                ScenarioStatus::Fail => "\x1b[31m✗ FAIL\x1b[0m",
                ScenarioStatus::Skip => "\x1b[33m○ SKIP\x1b[0m",
                ScenarioStatus::Error => "\x1b[31m! ERROR\x1b[0m",
            }
        } else {
            match status {
                ScenarioStatus::Pass => "✓ PASS",
                ScenarioStatus::Fail => "✗ FAIL",
                ScenarioStatus::Skip => "○ SKIP",
                ScenarioStatus::Error => "! ERROR",
            }
        }
    }

    fn format_result_table(&self, result: &ScenarioResult) -> String {
        format!(
            "{:2}. {:30} {} [{:>6}ms]",
            result.scenario.number(),
            result.scenario.name(),
            self.status_cell(result.status),
            result.duration_ms
        )
    }

    fn format_result_csv(&self, result: &ScenarioResult) -> String {
        format!(
            "{},{},{},{},\"{}\"",
            result.scenario.number(),
            result.scenario.name(),
            result.status,
            result.duration_ms,
            result
                .message
                .as_deref()
                .unwrap_or("")
                .replace('"', "\"\"")
                .replace('\n', "; ")
        )
    }

    /// Format a full run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Csv => self.format_summary_csv(summary),
            _ => self.format_summary_table(summary),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n=== Round {} - {} ===\n",
            summary.round, summary.endpoint
        ));

        let mut category = "";
        for result in &summary.results {
            if result.scenario.category() != category {
                category = result.scenario.category();
                out.push_str(&format!("\n[{category}]\n"));
            }
            out.push_str(&self.format_result_table(result));
            out.push('\n');
        }

        out.push_str(&format!(
            "\nTotal: {} | Pass: {} | Fail: {} | Skip: {} | Error: {} | {:.1}% in {}ms\n",
            summary.total,
            summary.passed,
            summary.failed,
            summary.skipped,
            summary.errors,
            summary.pass_rate(),
            summary.total_duration_ms
        ));
        out
    }

    fn format_summary_csv(&self, summary: &RunSummary) -> String {
        let mut out = String::from("number,name,status,duration_ms,message\n");
        for result in &summary.results {
            out.push_str(&self.format_result_csv(result));
            out.push('\n');
        }
        out
    }

    /// Detail lines for failed scenarios (table output only)
    pub fn format_failures(&self, summary: &RunSummary) -> String {
        let mut out = String::new();
        for result in summary
            .results
            .iter()
            .filter(|r| !r.status.is_success() && r.status != ScenarioStatus::Skip)
        {
            out.push_str(&format!("\n--- {} ---\n", result.scenario));
            if let Some(message) = &result.message {
                out.push_str(message);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scenario;

    fn sample_summary() -> RunSummary {
        RunSummary::new(
            1,
            "http://127.0.0.1:8080",
            vec![
                ScenarioResult::pass(Scenario::CreatePublicGist, 100),
                ScenarioResult::fail(Scenario::CreateNoFiles, 50, "✗ expected 422"),
            ],
        )
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(
            OutputFormat::from_str("JSON-Pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("bogus"), None);
    }

    #[test]
    fn test_table_format_contains_counts() {
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let rendered = formatter.format_summary(&sample_summary());

        assert!(rendered.contains("Create Public Gist"));
        assert!(rendered.contains("Pass: 1"));
        assert!(rendered.contains("Fail: 1"));
    }

    #[test]
    fn test_csv_escapes_message() {
        let formatter = ResultFormatter::new(OutputFormat::Csv);
        let result = ScenarioResult::fail(Scenario::CreateNoFiles, 10, "say \"no\"\ntwice");
        let line = formatter.format_result(&result);

        assert!(line.contains("\"say \"\"no\"\"; twice\""));
    }

    #[test]
    fn test_json_round_trips() {
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let rendered = formatter.format_summary(&sample_summary());
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["total"], 2);
    }
}
