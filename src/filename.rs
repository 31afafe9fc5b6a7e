use crate::config::ReportCopy;

/// Keeps ASCII letters and digits only.
pub fn sanitize_company(company: &str) -> String {
    company.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// `AcmeInc_HR_Readiness_Assessment.pdf` for "Acme, Inc.", the generic name
/// when the company is empty. A non-empty company always takes the suffix,
/// even if nothing survives sanitizing. The participant name never takes part.
pub fn report_filename(company: &str) -> String {
    report_filename_with(company, &ReportCopy::default())
}

pub fn report_filename_with(company: &str, copy: &ReportCopy) -> String {
    if company.is_empty() {
        return copy.generic_filename.clone();
    }
    format!("{}{}", sanitize_company(company), copy.filename_suffix)
}
