// src/report.rs
// =============================================================================
// Collects ValidationResults into the run report and prints it.
//
// Four buckets, each kept in the order results were recorded:
// - valid:    external links that answered
// - invalid:  anything broken (external or internal)
// - skipped:  mailto:/tel:/#anchor and relative links
// - internal: internal links that resolved to a file
//
// The run fails (exit code 1) if and only if `invalid` is non-empty.
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use crate::checker::{LinkKind, Outcome, ValidationResult};

const RULE: &str = "================================";

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub valid: Vec<ValidationResult>,
    pub invalid: Vec<ValidationResult>,
    pub skipped: Vec<ValidationResult>,
    pub internal: Vec<ValidationResult>,
}

/// Bucket sizes, printed in the summary and included in JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
    pub internal: usize,
    pub skipped: usize,
}

impl Report {
    pub fn record(&mut self, result: ValidationResult) {
        let bucket = match (result.outcome, result.kind) {
            (Outcome::Skipped, _) => &mut self.skipped,
            (Outcome::Invalid, _) => &mut self.invalid,
            (Outcome::Valid, LinkKind::Internal) => &mut self.internal,
            (Outcome::Valid, _) => &mut self.valid,
        };
        bucket.push(result);
    }

    pub fn summary(&self) -> Summary {
        Summary {
            valid: self.valid.len(),
            invalid: self.invalid.len(),
            internal: self.internal.len(),
            skipped: self.skipped.len(),
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.invalid.is_empty()
    }

    // 0 = every link checked out, 1 = at least one broken link
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() {
            1
        } else {
            0
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary();

        writeln!(f, "\n{}", RULE)?;
        writeln!(f, "📊 Validation Summary\n")?;
        writeln!(f, "✅ Valid links: {}", summary.valid)?;
        writeln!(f, "❌ Invalid links: {}", summary.invalid)?;
        writeln!(f, "📁 Valid internal links: {}", summary.internal)?;
        writeln!(f, "⏭️  Skipped: {}", summary.skipped)?;

        if self.has_failures() {
            writeln!(f, "\n❌ Invalid Links:\n")?;
            for result in &self.invalid {
                let note = if result.is_internal() { " (internal)" } else { "" };
                writeln!(f, "  {}: {}{}", result.article, result.link, note)?;
            }
        } else {
            writeln!(f, "\n✨ All links are valid!")?;
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    #[serde(flatten)]
    report: &'a Report,
}

// Prints the report either as a summary or as JSON
pub fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        let output = JsonReport {
            summary: report.summary(),
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::classify::SkipReason;

    fn result(article: &str, link: &str, kind: LinkKind, outcome: Outcome) -> ValidationResult {
        ValidationResult {
            article: article.to_string(),
            link: link.to_string(),
            kind,
            outcome,
        }
    }

    fn sample() -> Report {
        let mut report = Report::default();
        report.record(result("a.md", "https://ok.example", LinkKind::External, Outcome::Valid));
        report.record(result("a.md", "/docs/missing", LinkKind::Internal, Outcome::Invalid));
        report.record(result("a.md", "/docs/intro", LinkKind::Internal, Outcome::Valid));
        report.record(result("b.md", "https://gone.example", LinkKind::External, Outcome::Invalid));
        report.record(result(
            "b.md",
            "mailto:hello@example.com",
            LinkKind::Excluded(SkipReason::ProtocolOrAnchor),
            Outcome::Skipped,
        ));
        report
    }

    #[test]
    fn test_buckets() {
        let report = sample();
        assert_eq!(
            report.summary(),
            Summary {
                valid: 1,
                invalid: 2,
                internal: 1,
                skipped: 1,
            }
        );
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_invalid_listing_keeps_order_and_marks_internal() {
        let text = sample().to_string();

        let first = text.find("  a.md: /docs/missing (internal)").unwrap();
        let second = text.find("  b.md: https://gone.example\n").unwrap();
        assert!(first < second);
        assert!(!text.contains("mailto:"));
        assert!(!text.contains("All links are valid"));
    }

    #[test]
    fn test_empty_report_passes() {
        let report = Report::default();
        let text = report.to_string();

        assert_eq!(report.exit_code(), 0);
        assert!(text.contains("✅ Valid links: 0"));
        assert!(text.contains("❌ Invalid links: 0"));
        assert!(text.contains("📁 Valid internal links: 0"));
        assert!(text.contains("⏭️  Skipped: 0"));
        assert!(text.contains("All links are valid"));
    }

    #[test]
    fn test_json_shape() {
        let report = sample();
        let output = JsonReport {
            summary: report.summary(),
            report: &report,
        };
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["summary"]["invalid"], 2);
        assert_eq!(value["invalid"][0]["link"], "/docs/missing");
        assert_eq!(value["invalid"][0]["kind"], "internal");
        assert_eq!(value["skipped"][0]["reason"], "protocol_or_anchor");
    }
}
