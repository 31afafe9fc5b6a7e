mod common;

use std::path::Path;

use rayon::prelude::*;
use readiness_report::{
    AssessmentReport, Error, Priority, ReportComposer, ReportConfig, generate_report_pdf,
    generate_report_pdf_with, save_report,
};

fn long_report(company: &str, recommendations: usize) -> AssessmentReport {
    let mut report = common::load_fixture(Path::new(common::FIXTURE));
    report.contact_info.company = company.to_string();
    for i in 0..recommendations {
        report.recommendations.push(common::recommendation(
            &format!("Follow-up area {i}"),
            &common::numbered_words(80),
            &["Assign an owner", "Report back within 90 days"],
            Priority::Medium,
        ));
    }
    report
}

#[test]
fn output_is_a_well_formed_pdf() {
    common::init_logging();
    let report = long_report("Acme, Inc.", 6);
    let generated = generate_report_pdf(&report, common::fixed_date()).unwrap();
    assert!(generated.page_count > 1);
    assert_eq!(generated.filename, "AcmeInc_HR_Readiness_Assessment.pdf");

    let bytes = &generated.bytes;
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(String::from_utf8_lossy(bytes).trim_end().ends_with("%%EOF"));
    assert!(common::contains(
        bytes,
        &format!("/Count {}", generated.page_count)
    ));
    assert!(common::contains(bytes, "/FlateDecode"));
    assert!(common::contains(bytes, "HR Readiness Assessment Report - Acme, Inc."));

    let streams = common::content_streams(bytes);
    assert_eq!(streams.len(), generated.page_count);

    let dir = common::output_dir("well_formed");
    std::fs::write(dir.join(&generated.filename), bytes).unwrap();
}

#[test]
fn every_page_carries_its_folio() {
    let generated = generate_report_pdf(&long_report("Acme Co", 6), common::fixed_date()).unwrap();
    let streams = common::content_streams(&generated.bytes);
    let total = generated.page_count;
    for (i, stream) in streams.iter().enumerate() {
        let folio = format!("(Page {} of {total})", i + 1);
        assert!(common::contains(stream, &folio), "page {} lacks {folio}", i + 1);
    }
}

#[test]
fn folio_can_be_disabled() {
    let mut config = ReportConfig::default();
    config.geometry.folio = false;
    let composer = ReportComposer::new(config);
    let generated =
        generate_report_pdf_with(&composer, &long_report("Acme Co", 2), common::fixed_date()).unwrap();
    for stream in common::content_streams(&generated.bytes) {
        assert!(!common::contains(&stream, "(Page "));
    }
}

#[test]
fn same_input_and_date_give_identical_bytes() {
    let report = long_report("Acme Co", 3);
    let first = generate_report_pdf(&report, common::fixed_date()).unwrap();
    let second = generate_report_pdf(&report, common::fixed_date()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn concurrent_generation_matches_sequential() {
    let reports: Vec<AssessmentReport> = (0..16)
        .map(|i| long_report(&format!("Company {i}"), i % 5))
        .collect();
    let sequential: Vec<_> = reports
        .iter()
        .map(|r| generate_report_pdf(r, common::fixed_date()).unwrap())
        .collect();
    let parallel: Vec<_> = reports
        .par_iter()
        .map(|r| generate_report_pdf(r, common::fixed_date()).unwrap())
        .collect();
    assert_eq!(sequential, parallel);
    assert_eq!(parallel[3].filename, "Company3_HR_Readiness_Assessment.pdf");
}

#[test]
fn save_report_writes_under_the_derived_name() {
    let dir = common::output_dir("save_report");
    let report = common::report(88, "Advanced", "");
    let path = save_report(&report, &dir).unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("HR_Readiness_Assessment.pdf")
    );
    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-"));
}

#[test]
fn save_report_into_missing_directory_fails() {
    let report = common::report(88, "Advanced", "Acme Co");
    let err = save_report(&report, Path::new("tests/output/does/not/exist")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_json_is_reported() {
    let err = AssessmentReport::from_json(r#"{"overallPercentage": "high"}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(std::error::Error::source(&err).is_some());
}
