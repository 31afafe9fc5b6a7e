mod canvas;
mod config;
mod error;
mod filename;
mod fonts;
mod layout;
mod model;
pub mod pdf;
pub mod report;
mod tier;

pub use canvas::{Canvas, DrawCommand, Page};
pub use config::{MM, PageGeometry, ReportConfig, ReportCopy, Rgb, Theme, Thresholds};
pub use error::Error;
pub use filename::{report_filename, report_filename_with, sanitize_company};
pub use fonts::FontFace;
pub use layout::{TextLine, wrap_lines, wrap_text};
pub use model::{
    AssessmentReport, CategoryScore, CategoryScores, ContactInfo, Priority, Recommendation,
};
pub use pdf::DocumentMetadata;
pub use report::{ComposedReport, ReportComposer};
pub use tier::ReadinessTier;

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;

/// A finished report: its download filename and the PDF bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Composes and encodes a report with the default configuration.
pub fn generate_report_pdf(report: &AssessmentReport, generated_on: NaiveDate) -> Result<GeneratedReport, Error> {
    generate_report_pdf_with(&ReportComposer::default(), report, generated_on)
}

pub fn generate_report_pdf_with(
    composer: &ReportComposer,
    report: &AssessmentReport,
    generated_on: NaiveDate,
) -> Result<GeneratedReport, Error> {
    let t0 = Instant::now();

    let composed = composer.compose(report, generated_on)?;
    let t_compose = t0.elapsed();

    let copy = &composer.config().copy;
    let metadata = DocumentMetadata {
        title: composed.title.clone(),
        author: copy.author.clone(),
        subject: copy.title.clone(),
        producer: copy.producer.clone(),
    };
    let bytes = pdf::render(&composed.canvas, composer.config(), &metadata)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: compose={:.1}ms, pdf={:.1}ms, total={:.1}ms ({} pages, {} bytes)",
        t_compose.as_secs_f64() * 1000.0,
        (t_total - t_compose).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        composed.page_count(),
        bytes.len(),
    );

    Ok(GeneratedReport {
        page_count: composed.page_count(),
        filename: composed.filename,
        bytes,
    })
}

/// Generates the report dated today and writes it into `out_dir` under its
/// derived filename. Returns the written path.
pub fn save_report(report: &AssessmentReport, out_dir: &Path) -> Result<PathBuf, Error> {
    let today = chrono::Local::now().date_naive();
    let generated = generate_report_pdf(report, today)?;
    write_report(&generated, out_dir)
}

/// Writes an already generated report into `out_dir`.
pub fn write_report(generated: &GeneratedReport, out_dir: &Path) -> Result<PathBuf, Error> {
    let path = out_dir.join(&generated.filename);
    std::fs::write(&path, &generated.bytes).map_err(Error::Io)?;
    Ok(path)
}
