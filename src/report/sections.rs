//! Section renderers, one per report block.
//!
//! Each renderer asks the page-break decider for room before it writes and
//! advances the cursor afterwards. The geometry of every fixed block is built
//! by a pure `*_block`/`*_row` function so it can be checked without a writer.

use chrono::NaiveDate;

use crate::canvas::DrawCommand;
use crate::config::{MM, ReportConfig, Rgb};
use crate::error::Error;
use crate::fonts::FontFace;
use crate::layout::wrap_text;
use crate::model::{AssessmentReport, CategoryScore, Priority, Recommendation};
use crate::tier::ReadinessTier;

use super::cursor::ReportWriter;

const BULLET_INDENT: f32 = 5.0 * MM;
const BOX_PADDING: f32 = 6.0 * MM;
const BADGE_PADDING: f32 = 2.5 * MM;
const BADGE_GAP: f32 = 4.0 * MM;
const RULE_GAP: f32 = 4.0 * MM;
const ITEM_GAP: f32 = 4.0 * MM;

/// Everything a section may read. The generation date comes from the caller,
/// never from the record itself.
pub struct SectionInput<'r> {
    pub report: &'r AssessmentReport,
    pub generated_on: NaiveDate,
}

pub(crate) type SectionRenderer = fn(&mut ReportWriter<'_>, &SectionInput<'_>) -> Result<(), Error>;

/// Body sections in render order. The running header is drawn by the writer
/// on every page it starts.
pub(crate) const SECTIONS: [(&str, SectionRenderer); 7] = [
    ("title", render_title),
    ("metadata", render_metadata),
    ("summary", render_summary),
    ("categories", render_categories),
    ("recommendations", render_recommendations),
    ("next_steps", render_next_steps),
    ("footer", render_footer),
];

fn text(x: f32, y: f32, value: impl Into<String>, face: FontFace, size: f32, color: Rgb) -> DrawCommand {
    DrawCommand::Text {
        x,
        y,
        text: value.into(),
        face,
        size,
        color,
    }
}

/// Baseline that centres a line of `size` in a line box starting at `top`.
fn baseline(top: f32, line_h: f32, face: FontFace, size: f32) -> f32 {
    top + (line_h - size) / 2.0 + face.ascent() * size
}

/// Running header: two-colour banner, product name left, tagline right.
pub fn header_block(config: &ReportConfig, top: f32) -> Vec<DrawCommand> {
    let g = &config.geometry;
    let theme = &config.theme;
    let copy = &config.copy;
    let band = g.header_height * 0.8;
    let name_size = g.title_size * 0.9;
    let tag_size = g.body_size;
    let tag_width = FontFace::Regular.text_width(&copy.tagline, tag_size);

    vec![
        DrawCommand::FillRect {
            x: 0.0,
            y: top,
            width: g.page_width,
            height: band,
            color: theme.header_primary,
        },
        DrawCommand::FillRect {
            x: 0.0,
            y: top + band,
            width: g.page_width,
            height: g.header_height - band,
            color: theme.header_accent,
        },
        text(
            g.margin_left,
            top + band / 2.0 + name_size * 0.35,
            copy.product_name.as_str(),
            FontFace::Bold,
            name_size,
            theme.header_text,
        ),
        text(
            g.page_width - g.margin_right - tag_width,
            top + band / 2.0 + tag_size * 0.35,
            copy.tagline.as_str(),
            FontFace::Regular,
            tag_size,
            theme.header_tagline,
        ),
    ]
}

/// Section heading at the cursor. The caller has already reserved the space.
fn heading(w: &mut ReportWriter<'_>, label: &str) {
    let config = w.config();
    let g = &config.geometry;
    let size = g.heading_size;
    let line_h = g.line_height(size);
    let top = w.cursor_y();
    w.draw(text(
        g.margin_left,
        baseline(top, line_h, FontFace::Bold, size),
        label,
        FontFace::Bold,
        size,
        config.theme.heading,
    ));
    w.advance(line_h);
}

struct Bullet<'b> {
    glyph: &'b str,
    x: f32,
}

/// Writes pre-wrapped lines at `x`. A paragraph that fits on an empty page
/// is kept together; a taller one flows line by line.
fn write_paragraph(
    w: &mut ReportWriter<'_>,
    lines: &[String],
    x: f32,
    face: FontFace,
    size: f32,
    color: Rgb,
    bullet: Option<Bullet<'_>>,
) -> Result<(), Error> {
    let g = &w.config().geometry;
    let block_h = g.line_height(size) * lines.len() as f32;
    let keep_together = block_h <= g.writable_height();
    if keep_together {
        w.ensure_space(block_h)?;
    }
    write_lines(w, lines, x, face, size, color, bullet, !keep_together)
}

/// Writes lines at the cursor. With `per_line` every line asks for its own
/// space, so the block may break between any two lines.
fn write_lines(
    w: &mut ReportWriter<'_>,
    lines: &[String],
    x: f32,
    face: FontFace,
    size: f32,
    color: Rgb,
    bullet: Option<Bullet<'_>>,
    per_line: bool,
) -> Result<(), Error> {
    let line_h = w.config().geometry.line_height(size);
    for (i, line) in lines.iter().enumerate() {
        if per_line {
            w.ensure_space(line_h)?;
        }
        let y = baseline(w.cursor_y(), line_h, face, size);
        if i == 0
            && let Some(bullet) = &bullet
        {
            w.draw(text(bullet.x, y, bullet.glyph, face, size, color));
        }
        w.draw(text(x, y, line.as_str(), face, size, color));
        w.advance(line_h);
    }
    Ok(())
}

fn render_title(w: &mut ReportWriter<'_>, input: &SectionInput<'_>) -> Result<(), Error> {
    let config = w.config();
    let g = &config.geometry;
    let title_h = g.line_height(g.title_size);
    let sub_size = g.subheading_size;
    let subtitle = config.copy.subtitle(&input.report.contact_info.company);
    let sub_lines = wrap_text(&subtitle, FontFace::Regular, sub_size, g.content_width());

    w.ensure_space(title_h + g.line_height(sub_size))?;
    let top = w.cursor_y();
    w.draw(text(
        g.margin_left,
        baseline(top, title_h, FontFace::Bold, g.title_size),
        config.copy.title.as_str(),
        FontFace::Bold,
        g.title_size,
        config.theme.heading,
    ));
    w.advance(title_h);
    write_paragraph(
        w,
        &sub_lines,
        g.margin_left,
        FontFace::Regular,
        sub_size,
        config.theme.body,
        None,
    )
}

/// "Generated on <date>", followed by the participant only when a name was given.
pub fn metadata_line(config: &ReportConfig, report: &AssessmentReport, generated_on: NaiveDate) -> String {
    let copy = &config.copy;
    let mut line = format!(
        "{} {}",
        copy.generated_label,
        generated_on.format("%B %-d, %Y")
    );
    let name = report.contact_info.name.trim();
    if !name.is_empty() {
        line.push_str(&format!(" | {} {name}", copy.participant_label));
    }
    line
}

fn render_metadata(w: &mut ReportWriter<'_>, input: &SectionInput<'_>) -> Result<(), Error> {
    let config = w.config();
    let g = &config.geometry;
    let line = metadata_line(config, input.report, input.generated_on);
    let lines = wrap_text(&line, FontFace::Regular, g.small_size, g.content_width());
    write_paragraph(
        w,
        &lines,
        g.margin_left,
        FontFace::Regular,
        g.small_size,
        config.theme.muted,
        None,
    )?;
    w.gap(g.section_gap);
    Ok(())
}

/// Fixed-height executive summary box with its top edge at `top`.
pub fn summary_block(config: &ReportConfig, top: f32, overall_percentage: u32, readiness_level: &str) -> Vec<DrawCommand> {
    let g = &config.geometry;
    let theme = &config.theme;
    let copy = &config.copy;
    let tier = ReadinessTier::for_percentage(overall_percentage.min(100), &config.thresholds);
    let left = g.margin_left;
    let width = g.content_width();

    let mut commands = vec![
        DrawCommand::FillRect {
            x: left,
            y: top,
            width,
            height: g.summary_box_height,
            color: theme.summary_fill,
        },
        DrawCommand::StrokeRect {
            x: left,
            y: top,
            width,
            height: g.summary_box_height,
            color: theme.summary_border,
            line_width: 1.0,
        },
    ];

    let score_text = format!("{overall_percentage}%");
    let score_y = top + BOX_PADDING + FontFace::Bold.ascent() * g.score_size;
    let score_w = FontFace::Bold.text_width(&score_text, g.score_size);
    commands.push(text(
        left + BOX_PADDING,
        score_y,
        score_text,
        FontFace::Bold,
        g.score_size,
        theme.bar_color(tier),
    ));

    let label = format!("{} {}", readiness_level.trim(), copy.readiness_suffix)
        .trim()
        .to_string();
    commands.push(text(
        left + BOX_PADDING + score_w + BADGE_GAP,
        score_y,
        label,
        FontFace::Bold,
        g.heading_size,
        theme.heading,
    ));

    let body_h = g.line_height(g.body_size);
    let text_top = top + BOX_PADDING + g.score_size * 1.1;
    let text_bottom = top + g.summary_box_height - BOX_PADDING;
    let max_lines = ((text_bottom - text_top) / body_h).floor().max(0.0) as usize;
    let lines = wrap_text(
        copy.interpretation(tier),
        FontFace::Regular,
        g.body_size,
        width - 2.0 * BOX_PADDING,
    );
    if lines.len() > max_lines {
        log::warn!(
            "interpretation needs {} lines, summary box holds {max_lines}",
            lines.len()
        );
    }
    for (i, line) in lines.into_iter().take(max_lines).enumerate() {
        let line_top = text_top + i as f32 * body_h;
        commands.push(text(
            left + BOX_PADDING,
            baseline(line_top, body_h, FontFace::Regular, g.body_size),
            line,
            FontFace::Regular,
            g.body_size,
            theme.body,
        ));
    }
    commands
}

fn render_summary(w: &mut ReportWriter<'_>, input: &SectionInput<'_>) -> Result<(), Error> {
    let config = w.config();
    let g = &config.geometry;
    w.ensure_space(g.line_height(g.heading_size) + g.summary_box_height)?;
    heading(w, &config.copy.summary_heading);
    let top = w.cursor_y();
    w.draw_all(summary_block(
        config,
        top,
        input.report.overall_percentage,
        &input.report.readiness_level,
    ));
    w.advance(g.summary_box_height);
    w.gap(g.section_gap);
    Ok(())
}

/// Foreground width of a score bar: proportional to the percentage, with
/// 0 giving an empty bar and 100 (or more) the full track.
pub fn bar_fill_width(percentage: u32, track_width: f32) -> f32 {
    track_width * percentage.min(100) as f32 / 100.0
}

/// Whole points print without a fraction, anything else with one decimal.
fn format_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// One category row: name, right-aligned points, background track and fill.
pub fn category_row(config: &ReportConfig, top: f32, name: &str, score: &CategoryScore) -> Vec<DrawCommand> {
    let g = &config.geometry;
    let theme = &config.theme;
    let size = g.body_size;
    let line_h = g.line_height(size);
    let y = baseline(top, line_h, FontFace::Bold, size);
    let right = g.margin_left + g.content_width();
    let points = format!(
        "{}/{} points ({}%)",
        format_points(score.score),
        format_points(score.max_score),
        score.percentage
    );
    let points_w = FontFace::Regular.text_width(&points, size);

    let track_top = top + line_h + 1.0 * MM;
    let track_width = g.content_width();
    let fill_width = bar_fill_width(score.percentage, track_width);
    let tier = ReadinessTier::for_percentage(score.clamped_percentage(), &config.thresholds);

    let mut commands = vec![
        text(g.margin_left, y, name, FontFace::Bold, size, theme.heading),
        text(right - points_w, y, points, FontFace::Regular, size, theme.body),
        DrawCommand::FillRect {
            x: g.margin_left,
            y: track_top,
            width: track_width,
            height: g.bar_height,
            color: theme.track,
        },
    ];
    if fill_width > 0.0 {
        commands.push(DrawCommand::FillRect {
            x: g.margin_left,
            y: track_top,
            width: fill_width,
            height: g.bar_height,
            color: theme.bar_color(tier),
        });
    }
    commands
}

fn render_categories(w: &mut ReportWriter<'_>, input: &SectionInput<'_>) -> Result<(), Error> {
    let scores = &input.report.category_scores;
    if scores.is_empty() {
        return Ok(());
    }
    let config = w.config();
    let g = &config.geometry;
    let row_h = g.category_row_height;

    w.ensure_space(g.line_height(g.heading_size) + row_h)?;
    heading(w, &config.copy.categories_heading);
    for (name, score) in scores.iter() {
        w.ensure_space(row_h)?;
        let top = w.cursor_y();
        w.draw_all(category_row(config, top, name, score));
        w.advance(row_h);
    }
    w.gap(g.section_gap);
    Ok(())
}

fn badge_label(config: &ReportConfig, priority: Priority) -> String {
    format!("{} {}", priority.label(), config.copy.priority_suffix)
}

pub fn badge_width(config: &ReportConfig, priority: Priority) -> f32 {
    let label = badge_label(config, priority);
    FontFace::Bold.text_width(&label, config.geometry.small_size) + 2.0 * BADGE_PADDING
}

/// Priority pill right-aligned at `right`, vertically centred in the line box.
pub fn priority_badge(config: &ReportConfig, right: f32, top: f32, line_h: f32, priority: Priority) -> Vec<DrawCommand> {
    let theme = &config.theme;
    let size = config.geometry.small_size;
    let width = badge_width(config, priority);
    let height = size * 1.6;
    let x = right - width;
    let y = top + (line_h - height) / 2.0;
    let color = match priority {
        Priority::High => theme.badge_high,
        Priority::Medium => theme.badge_other,
    };
    vec![
        DrawCommand::FillPill {
            x,
            y,
            width,
            height,
            color,
        },
        text(
            x + BADGE_PADDING,
            y + height / 2.0 + size * 0.35,
            badge_label(config, priority),
            FontFace::Bold,
            size,
            theme.badge_text,
        ),
    ]
}

/// A recommendation card. The title stays with the first line of its
/// description; the description then flows, so a long one breaks between
/// lines instead of leaving the title stranded. The "Actions:" label is
/// kept with the first action.
fn render_recommendation(w: &mut ReportWriter<'_>, number: usize, rec: &Recommendation) -> Result<(), Error> {
    let config = w.config();
    let g = &config.geometry;
    let theme = &config.theme;
    let right = g.margin_left + g.content_width();
    let writable = g.writable_height();
    let body = g.body_size;
    let body_h = g.line_height(body);

    let title_size = g.subheading_size;
    let title_h = g.line_height(title_size);
    let title_width = g.content_width() - badge_width(config, rec.priority) - BADGE_GAP;
    let title_lines = wrap_text(
        &format!("{number}. {}", rec.title),
        FontFace::Bold,
        title_size,
        title_width,
    );
    let description = wrap_text(&rec.description, FontFace::Regular, body, g.content_width());

    let lead = if description.is_empty() { 0.0 } else { body_h };
    let title_block = title_h * title_lines.len() as f32 + lead;
    let keep_title = title_block <= writable;
    // The badge sits on the first title line either way.
    w.ensure_space(if keep_title { title_block } else { title_h })?;
    let top = w.cursor_y();
    w.draw_all(priority_badge(config, right, top, title_h, rec.priority));
    write_lines(
        w,
        &title_lines,
        g.margin_left,
        FontFace::Bold,
        title_size,
        theme.heading,
        None,
        !keep_title,
    )?;

    write_lines(w, &description, g.margin_left, FontFace::Regular, body, theme.body, None, true)?;

    if !rec.actions.is_empty() {
        let action_width = g.content_width() - 2.0 * BULLET_INDENT;
        let actions: Vec<Vec<String>> = rec
            .actions
            .iter()
            .map(|action| wrap_text(action, FontFace::Regular, body, action_width))
            .collect();
        let first_h = actions.first().map_or(0.0, |lines| body_h * lines.len() as f32);
        let lead = if body_h + first_h <= writable { first_h } else { body_h };
        w.ensure_space(body_h + lead)?;
        let y = baseline(w.cursor_y(), body_h, FontFace::Bold, body);
        w.draw(text(
            g.margin_left,
            y,
            config.copy.actions_label.as_str(),
            FontFace::Bold,
            body,
            theme.heading,
        ));
        w.advance(body_h);

        let indent = g.margin_left + BULLET_INDENT;
        for lines in &actions {
            write_paragraph(
                w,
                lines,
                indent + BULLET_INDENT,
                FontFace::Regular,
                body,
                theme.body,
                Some(Bullet {
                    glyph: &config.copy.bullet,
                    x: indent,
                }),
            )?;
        }
    }
    w.gap(ITEM_GAP);
    Ok(())
}

fn render_recommendations(w: &mut ReportWriter<'_>, input: &SectionInput<'_>) -> Result<(), Error> {
    let recommendations = &input.report.recommendations;
    if recommendations.is_empty() {
        return Ok(());
    }
    let config = w.config();
    let g = &config.geometry;
    w.ensure_space(g.line_height(g.heading_size) + g.line_height(g.subheading_size))?;
    heading(w, &config.copy.recommendations_heading);
    for (i, rec) in recommendations.iter().enumerate() {
        render_recommendation(w, i + 1, rec)?;
    }
    w.gap(g.section_gap);
    Ok(())
}

fn render_next_steps(w: &mut ReportWriter<'_>, _input: &SectionInput<'_>) -> Result<(), Error> {
    let config = w.config();
    let g = &config.geometry;
    let steps = &config.copy.next_steps;
    if steps.is_empty() {
        return Ok(());
    }
    let body = g.body_size;
    w.ensure_space(g.line_height(g.heading_size) + g.line_height(body))?;
    heading(w, &config.copy.next_steps_heading);
    for step in steps {
        let lines = wrap_text(step, FontFace::Regular, body, g.content_width() - BULLET_INDENT);
        write_paragraph(
            w,
            &lines,
            g.margin_left + BULLET_INDENT,
            FontFace::Regular,
            body,
            config.theme.body,
            Some(Bullet {
                glyph: &config.copy.bullet,
                x: g.margin_left,
            }),
        )?;
    }
    w.gap(g.section_gap);
    Ok(())
}

/// Thin rule followed by the fixed footer lines, centred.
pub fn footer_block(config: &ReportConfig, top: f32) -> Vec<DrawCommand> {
    let g = &config.geometry;
    let size = g.small_size;
    let line_h = g.line_height(size);
    let centre = g.margin_left + g.content_width() / 2.0;
    let mut commands = vec![DrawCommand::FillRect {
        x: g.margin_left,
        y: top,
        width: g.content_width(),
        height: 0.5,
        color: config.theme.track,
    }];
    for (i, line) in config.copy.footer_lines.iter().enumerate() {
        let line_top = top + RULE_GAP + i as f32 * line_h;
        let width = FontFace::Regular.text_width(line, size);
        commands.push(text(
            centre - width / 2.0,
            baseline(line_top, line_h, FontFace::Regular, size),
            line.as_str(),
            FontFace::Regular,
            size,
            config.theme.muted,
        ));
    }
    commands
}

pub fn footer_height(config: &ReportConfig) -> f32 {
    let line_h = config.geometry.line_height(config.geometry.small_size);
    RULE_GAP + line_h * config.copy.footer_lines.len() as f32
}

fn render_footer(w: &mut ReportWriter<'_>, _input: &SectionInput<'_>) -> Result<(), Error> {
    let config = w.config();
    let height = footer_height(config);
    w.ensure_space(height)?;
    let top = w.cursor_y();
    w.draw_all(footer_block(config, top));
    w.advance(height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryScores, ContactInfo};

    fn report(name: &str) -> AssessmentReport {
        AssessmentReport {
            overall_percentage: 92,
            category_scores: CategoryScores::new(),
            readiness_level: "Advanced".to_string(),
            contact_info: ContactInfo {
                name: name.to_string(),
                company: "Acme Co".to_string(),
            },
            recommendations: Vec::new(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date")
    }

    fn score(percentage: u32) -> CategoryScore {
        CategoryScore {
            score: percentage as f64 / 5.0,
            max_score: 20.0,
            percentage,
        }
    }

    fn fill_rects(commands: &[DrawCommand]) -> Vec<(f32, Rgb)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { width, color, .. } => Some((*width, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn metadata_omits_participant_when_name_is_empty() {
        let config = ReportConfig::default();
        assert_eq!(
            metadata_line(&config, &report(""), date()),
            "Generated on March 7, 2026"
        );
        assert_eq!(
            metadata_line(&config, &report("Dana Reyes"), date()),
            "Generated on March 7, 2026 | Participant: Dana Reyes"
        );
    }

    #[test]
    fn bar_width_is_proportional_and_clamped() {
        assert_eq!(bar_fill_width(0, 400.0), 0.0);
        assert_eq!(bar_fill_width(100, 400.0), 400.0);
        assert_eq!(bar_fill_width(25, 400.0), 100.0);
        assert_eq!(bar_fill_width(130, 400.0), 400.0);
    }

    #[test]
    fn category_row_draws_track_and_tier_colored_fill() {
        let config = ReportConfig::default();
        let track = config.geometry.content_width();
        let rects = fill_rects(&category_row(&config, 100.0, "Compliance", &score(90)));
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], (track, config.theme.track));
        assert!((rects[1].0 - track * 0.9).abs() < 1e-3);
        assert_eq!(rects[1].1, config.theme.advanced);
    }

    #[test]
    fn zero_percent_row_has_no_fill() {
        let config = ReportConfig::default();
        let rects = fill_rects(&category_row(&config, 100.0, "Compliance", &score(0)));
        assert_eq!(rects, vec![(config.geometry.content_width(), config.theme.track)]);
    }

    #[test]
    fn category_row_stays_inside_its_increment() {
        let config = ReportConfig::default();
        let top = 200.0;
        for command in category_row(&config, top, "Compliance", &score(60)) {
            let (upper, lower) = command.vertical_extent();
            assert!(upper >= top, "{command:?}");
            assert!(lower <= top + config.geometry.category_row_height, "{command:?}");
        }
    }

    #[test]
    fn category_points_label_is_right_aligned() {
        let config = ReportConfig::default();
        let commands = category_row(&config, 0.0, "Compliance", &score(90));
        let Some(DrawCommand::Text { x, text, size, .. }) = commands.get(1) else {
            panic!("expected points label");
        };
        assert_eq!(text, "18/20 points (90%)");
        let right = x + FontFace::Regular.text_width(text, *size);
        let margin_edge = config.geometry.page_width - config.geometry.margin_right;
        assert!((right - margin_edge).abs() < 1e-2);
    }

    #[test]
    fn summary_box_shows_score_label_and_interpretation() {
        let config = ReportConfig::default();
        let commands = summary_block(&config, 150.0, 92, "Advanced");
        let texts: Vec<&str> = commands.iter().filter_map(DrawCommand::text).collect();
        assert_eq!(texts[0], "92%");
        assert_eq!(texts[1], "Advanced Readiness");
        let sentence = texts[2..].join(" ");
        assert_eq!(sentence, config.copy.interpretation_advanced);
        for command in &commands {
            let (_, lower) = command.vertical_extent();
            assert!(lower <= 150.0 + config.geometry.summary_box_height + 1.0);
        }
    }

    #[test]
    fn badge_is_sized_to_its_label() {
        let config = ReportConfig::default();
        let high = priority_badge(&config, 500.0, 0.0, 20.0, Priority::High);
        let medium = priority_badge(&config, 500.0, 0.0, 20.0, Priority::Medium);
        let pill = |commands: &[DrawCommand]| match &commands[0] {
            DrawCommand::FillPill { x, width, color, .. } => (*x, *width, *color),
            other => panic!("unexpected {other:?}"),
        };
        let (hx, hw, hc) = pill(&high);
        let (_, mw, mc) = pill(&medium);
        assert_eq!(hc, config.theme.badge_high);
        assert_eq!(mc, config.theme.badge_other);
        assert!(mw > hw, "'Medium Priority' is wider than 'High Priority'");
        assert!((hx + hw - 500.0).abs() < 1e-3);
    }

    #[test]
    fn points_formatting_drops_whole_fractions() {
        assert_eq!(format_points(18.0), "18");
        assert_eq!(format_points(7.5), "7.5");
    }
}
