#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use readiness_report::{
    AssessmentReport, CategoryScore, CategoryScores, ContactInfo, Priority, Recommendation,
};

pub const FIXTURE: &str = "tests/fixtures/acme_assessment.json";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date")
}

/// Output directory for artifacts of one test: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    std::fs::create_dir_all(&dir).expect("create output dir");
    dir
}

pub fn load_fixture(path: &Path) -> AssessmentReport {
    let json = std::fs::read_to_string(path).expect("read fixture");
    AssessmentReport::from_json(&json).expect("parse fixture")
}

/// Score whose points agree with its percentage.
pub fn score(percentage: u32) -> CategoryScore {
    CategoryScore {
        score: percentage as f64 / 5.0,
        max_score: 20.0,
        percentage,
    }
}

pub fn report(overall: u32, level: &str, company: &str) -> AssessmentReport {
    AssessmentReport {
        overall_percentage: overall,
        category_scores: CategoryScores::new(),
        readiness_level: level.to_string(),
        contact_info: ContactInfo {
            name: "Dana Reyes".to_string(),
            company: company.to_string(),
        },
        recommendations: Vec::new(),
    }
}

pub fn recommendation(title: &str, description: &str, actions: &[&str], priority: Priority) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
        priority,
    }
}

/// `count` distinct tokens `w0 w1 ...` so every word can be traced on the page.
pub fn numbered_words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numbered tokens in the order they were drawn.
pub fn numbered_tokens<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<usize> {
    texts
        .into_iter()
        .flat_map(str::split_whitespace)
        .filter_map(|token| token.strip_prefix('w')?.parse().ok())
        .collect()
}

/// Decompressed content streams of a PDF produced by this crate.
pub fn content_streams(pdf: &[u8]) -> Vec<Vec<u8>> {
    const START: &[u8] = b"\nstream\n";
    const END: &[u8] = b"\nendstream";
    let mut streams = Vec::new();
    let mut rest = pdf;
    while let Some(start) = find(rest, START) {
        let data = &rest[start + START.len()..];
        let Some(end) = find(data, END) else {
            break;
        };
        if let Ok(decoded) = miniz_oxide::inflate::decompress_to_vec_zlib(&data[..end]) {
            streams.push(decoded);
        }
        rest = &data[end + END.len()..];
    }
    streams
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

pub fn contains(haystack: &[u8], needle: &str) -> bool {
    find(haystack, needle.as_bytes()).is_some()
}
