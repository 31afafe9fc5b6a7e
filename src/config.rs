//! Layout, colour and wording defaults for the assessment report.
//!
//! Everything the renderers would otherwise hard-code lives here so callers
//! and tests can override a single value without touching the renderers.

use crate::error::Error;

/// 1 mm in PDF points.
pub const MM: f32 = 72.0 / 25.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Result<Self, Error> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(value.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(value.to_string()))
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub(crate) fn to_unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

/// Page size, margins and vertical rhythm, all in points. `y` grows downwards
/// from the top edge of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Height of the running header banner, measured from `margin_top`.
    pub header_height: f32,
    pub header_gap: f32,
    pub section_gap: f32,
    /// Vertical increment consumed by every category row, whatever its content.
    pub category_row_height: f32,
    pub bar_height: f32,
    pub summary_box_height: f32,
    pub line_height_factor: f32,
    pub title_size: f32,
    pub heading_size: f32,
    pub subheading_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub score_size: f32,
    /// Stamp "Page X of Y" into the bottom margin at flush time.
    pub folio: bool,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // A4
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin_top: 0.0,
            margin_bottom: 20.0 * MM,
            margin_left: 20.0 * MM,
            margin_right: 20.0 * MM,
            header_height: 30.0 * MM,
            header_gap: 10.0 * MM,
            section_gap: 8.0 * MM,
            category_row_height: 15.0 * MM,
            bar_height: 4.0 * MM,
            summary_box_height: 45.0 * MM,
            line_height_factor: 1.4,
            title_size: 20.0,
            heading_size: 14.0,
            subheading_size: 12.0,
            body_size: 10.0,
            small_size: 9.0,
            score_size: 32.0,
            folio: true,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Lowest `y` any body content may reach.
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.margin_bottom
    }

    /// First writable `y` below the running header.
    pub fn content_top(&self) -> f32 {
        self.margin_top + self.header_height + self.header_gap
    }

    /// Writable height of a page that only carries the running header.
    pub fn writable_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }

    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.line_height_factor
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub header_primary: Rgb,
    pub header_accent: Rgb,
    pub header_text: Rgb,
    pub header_tagline: Rgb,
    pub heading: Rgb,
    pub body: Rgb,
    pub muted: Rgb,
    pub summary_fill: Rgb,
    pub summary_border: Rgb,
    pub track: Rgb,
    pub advanced: Rgb,
    pub good: Rgb,
    pub developing: Rgb,
    pub foundational: Rgb,
    pub badge_high: Rgb,
    pub badge_other: Rgb,
    pub badge_text: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_primary: Rgb(30, 58, 138),
            header_accent: Rgb(59, 130, 246),
            header_text: Rgb::WHITE,
            header_tagline: Rgb(219, 234, 254),
            heading: Rgb(17, 24, 39),
            body: Rgb(55, 65, 81),
            muted: Rgb(107, 114, 128),
            summary_fill: Rgb(239, 246, 255),
            summary_border: Rgb(191, 219, 254),
            track: Rgb(229, 231, 235),
            advanced: Rgb(16, 185, 129),
            good: Rgb(59, 130, 246),
            developing: Rgb(245, 158, 11),
            foundational: Rgb(239, 68, 68),
            badge_high: Rgb(239, 68, 68),
            badge_other: Rgb(245, 158, 11),
            badge_text: Rgb::WHITE,
        }
    }
}

/// Fixed wording of the report. `{company}` in `subtitle_template` is replaced
/// with the company name, or with `subtitle_fallback` when it is empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportCopy {
    pub product_name: String,
    pub tagline: String,
    pub title: String,
    pub subtitle_template: String,
    pub subtitle_fallback: String,
    pub summary_heading: String,
    pub categories_heading: String,
    pub recommendations_heading: String,
    pub next_steps_heading: String,
    pub actions_label: String,
    pub generated_label: String,
    pub participant_label: String,
    pub readiness_suffix: String,
    pub priority_suffix: String,
    pub bullet: String,
    pub interpretation_advanced: String,
    pub interpretation_good: String,
    pub interpretation_developing: String,
    pub interpretation_foundational: String,
    pub next_steps: Vec<String>,
    pub footer_lines: Vec<String>,
    pub generic_filename: String,
    pub filename_suffix: String,
    pub author: String,
    pub producer: String,
}

impl Default for ReportCopy {
    fn default() -> Self {
        Self {
            product_name: "HR Readiness Academy".to_string(),
            tagline: "Corporate Training & Development".to_string(),
            title: "HR Readiness Assessment Report".to_string(),
            subtitle_template: "Prepared for {company}".to_string(),
            subtitle_fallback: "Your Organization".to_string(),
            summary_heading: "Executive Summary".to_string(),
            categories_heading: "Category Breakdown".to_string(),
            recommendations_heading: "Recommendations".to_string(),
            next_steps_heading: "Next Steps".to_string(),
            actions_label: "Actions:".to_string(),
            generated_label: "Generated on".to_string(),
            participant_label: "Participant:".to_string(),
            readiness_suffix: "Readiness".to_string(),
            priority_suffix: "Priority".to_string(),
            bullet: "\u{2022}".to_string(),
            interpretation_advanced: "Your organization demonstrates advanced readiness, with strong foundations across the core HR capabilities.".to_string(),
            interpretation_good: "Your organization shows good readiness, with solid capabilities and room for targeted growth.".to_string(),
            interpretation_developing: "Your organization has developing readiness and needs focused improvement in several capability areas.".to_string(),
            interpretation_foundational: "Your organization requires significant preparation to close fundamental gaps in its HR capabilities.".to_string(),
            next_steps: vec![
                "Review this report with your leadership and HR teams.".to_string(),
                "Prioritize the high-priority recommendations for the coming quarter.".to_string(),
                "Enroll key team members in targeted training programs.".to_string(),
                "Define measurable goals for each capability area.".to_string(),
                "Retake the assessment in six months to track progress.".to_string(),
            ],
            footer_lines: vec![
                "This report was generated by the HR Readiness Assessment.".to_string(),
                "To discuss your results or schedule a consultation, contact our training team.".to_string(),
                "\u{a9} HR Readiness Academy. All rights reserved.".to_string(),
            ],
            generic_filename: "HR_Readiness_Assessment.pdf".to_string(),
            filename_suffix: "_HR_Readiness_Assessment.pdf".to_string(),
            author: "HR Readiness Academy".to_string(),
            producer: concat!("readiness-report ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ReportCopy {
    pub fn subtitle(&self, company: &str) -> String {
        let company = company.trim();
        let name = if company.is_empty() {
            self.subtitle_fallback.as_str()
        } else {
            company
        };
        self.subtitle_template.replace("{company}", name)
    }
}

/// Lower bounds of the three upper tiers. Each bound belongs to its own tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub advanced: u32,
    pub good: u32,
    pub developing: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            advanced: 85,
            good: 70,
            developing: 55,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportConfig {
    pub geometry: PageGeometry,
    pub theme: Theme,
    pub copy: ReportCopy,
    pub thresholds: Thresholds,
}
