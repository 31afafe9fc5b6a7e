//! Composition of an assessment into pages of draw commands.

mod cursor;
pub mod sections;

use chrono::NaiveDate;

use crate::canvas::Canvas;
use crate::config::ReportConfig;
use crate::error::Error;
use crate::filename::report_filename_with;
use crate::model::AssessmentReport;

pub use cursor::{RenderState, ReportWriter};
pub use sections::SectionInput;

/// Lays out reports with one configuration. Holds no per-report state, so a
/// single composer can serve any number of reports, concurrently included.
#[derive(Clone, Debug, Default)]
pub struct ReportComposer {
    config: ReportConfig,
}

/// A fully laid-out report, ready to be encoded.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedReport {
    pub canvas: Canvas,
    pub filename: String,
    /// Document title for the PDF info dictionary.
    pub title: String,
    pub page_breaks: usize,
}

impl ComposedReport {
    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    /// Text runs of one page in draw order.
    pub fn page_texts(&self, page: usize) -> Vec<&str> {
        self.canvas
            .pages()
            .get(page)
            .map(|p| p.texts().collect())
            .unwrap_or_default()
    }

    /// Text runs of every page in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.canvas.pages().iter().flat_map(|p| p.texts()).collect()
    }
}

impl ReportComposer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Renders every section in order onto a fresh canvas.
    ///
    /// `generated_on` is the only clock input: composing the same report with
    /// the same date twice yields identical output.
    pub fn compose(&self, report: &AssessmentReport, generated_on: NaiveDate) -> Result<ComposedReport, Error> {
        report.warn_inconsistencies();
        let input = SectionInput {
            report,
            generated_on,
        };
        let mut writer = ReportWriter::new(&self.config);
        for (name, render) in sections::SECTIONS {
            render(&mut writer, &input)?;
            log::debug!(
                "section {name} done: page {}, y={:.1}",
                writer.canvas().page_count(),
                writer.cursor_y()
            );
        }

        let page_breaks = writer.state().page_breaks;
        let canvas = writer.into_canvas();
        let company = report.contact_info.company.trim();
        let title = format!(
            "{} - {}",
            self.config.copy.title,
            if company.is_empty() {
                self.config.copy.subtitle_fallback.as_str()
            } else {
                company
            }
        );
        Ok(ComposedReport {
            canvas,
            filename: report_filename_with(&report.contact_info.company, &self.config.copy),
            title,
            page_breaks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryScore, CategoryScores, ContactInfo, Priority, Recommendation};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date")
    }

    fn report() -> AssessmentReport {
        AssessmentReport {
            overall_percentage: 72,
            category_scores: CategoryScores::new()
                .with(
                    "Talent Acquisition",
                    CategoryScore {
                        score: 16.0,
                        max_score: 20.0,
                        percentage: 80,
                    },
                )
                .with(
                    "Compliance",
                    CategoryScore {
                        score: 9.0,
                        max_score: 20.0,
                        percentage: 45,
                    },
                ),
            readiness_level: "Good".to_string(),
            contact_info: ContactInfo {
                name: "Dana Reyes".to_string(),
                company: "Acme Co".to_string(),
            },
            recommendations: vec![Recommendation {
                title: "Close compliance gaps".to_string(),
                description: "Audit employment policies against current regulation.".to_string(),
                actions: vec!["Engage outside counsel".to_string()],
                priority: Priority::High,
            }],
        }
    }

    #[test]
    fn sections_render_in_order() {
        let composed = ReportComposer::default().compose(&report(), date()).unwrap();
        let texts = composed.texts();
        let position = |needle: &str| {
            texts
                .iter()
                .position(|t| *t == needle)
                .unwrap_or_else(|| panic!("missing {needle:?}"))
        };
        let order = [
            "HR Readiness Assessment Report",
            "Prepared for Acme Co",
            "Executive Summary",
            "Category Breakdown",
            "Talent Acquisition",
            "Compliance",
            "Recommendations",
            "Actions:",
            "Next Steps",
        ];
        let positions: Vec<usize> = order.iter().map(|n| position(*n)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert_eq!(composed.filename, "AcmeCo_HR_Readiness_Assessment.pdf");
        assert_eq!(composed.title, "HR Readiness Assessment Report - Acme Co");
    }

    #[test]
    fn empty_sections_are_skipped() {
        let mut report = report();
        report.category_scores = CategoryScores::new();
        report.recommendations.clear();
        let composed = ReportComposer::default().compose(&report, date()).unwrap();
        let texts = composed.texts();
        assert!(!texts.contains(&"Category Breakdown"));
        assert!(!texts.contains(&"Recommendations"));
        assert!(texts.contains(&"Next Steps"));
    }

    #[test]
    fn short_report_fits_on_one_page() {
        let composed = ReportComposer::default().compose(&report(), date()).unwrap();
        assert_eq!(composed.page_count(), 1);
        assert_eq!(composed.page_breaks, 0);
        assert!(composed.page_texts(1).is_empty());
    }
}
