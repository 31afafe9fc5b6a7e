use crate::canvas::{Canvas, DrawCommand};
use crate::config::ReportConfig;
use crate::error::Error;

use super::sections::header_block;

/// Mutable layout state of one report generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderState {
    /// Current vertical write position on the active page.
    pub cursor_y: f32,
    /// Pages started by the page-break decider (the first page is not counted).
    pub page_breaks: usize,
}

/// Owns the canvas and the cursor while sections are written.
pub struct ReportWriter<'a> {
    pub(crate) config: &'a ReportConfig,
    pub(crate) state: RenderState,
    pub(crate) canvas: Canvas,
}

impl<'a> ReportWriter<'a> {
    /// Creates the writer with the first page and its running header in place.
    pub fn new(config: &'a ReportConfig) -> Self {
        let mut writer = Self {
            config,
            state: RenderState::default(),
            canvas: Canvas::new(),
        };
        writer.start_page();
        writer
    }

    pub fn config(&self) -> &'a ReportConfig {
        self.config
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn cursor_y(&self) -> f32 {
        self.state.cursor_y
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Space left between the cursor and the bottom margin.
    pub fn remaining(&self) -> f32 {
        self.config.geometry.content_bottom() - self.state.cursor_y
    }

    /// Adds a page, resets the cursor to the top margin and redraws the
    /// running header, leaving the cursor below it.
    fn start_page(&mut self) {
        let config = self.config;
        let geometry = &config.geometry;
        self.canvas.add_page();
        self.state.cursor_y = geometry.margin_top;
        let header = header_block(config, self.state.cursor_y);
        self.canvas.extend(header);
        self.state.cursor_y = geometry.content_top();
    }

    /// Page-break decider. Starts a new page when a block of `required`
    /// height would cross the bottom margin; returns whether it did.
    ///
    /// A block taller than an empty page can never fit and is reported as
    /// [`Error::BlockTooTall`] instead of churning pages.
    pub fn ensure_space(&mut self, required: f32) -> Result<bool, Error> {
        let geometry = &self.config().geometry;
        if self.state.cursor_y + required <= geometry.content_bottom() {
            return Ok(false);
        }
        let available = geometry.writable_height();
        if required > available {
            return Err(Error::BlockTooTall {
                required,
                available,
            });
        }
        self.state.page_breaks += 1;
        log::debug!(
            "page break at y={:.1} for block of {:.1}pt, starting page {}",
            self.state.cursor_y,
            required,
            self.canvas.page_count() + 1
        );
        self.start_page();
        Ok(true)
    }

    pub fn advance(&mut self, dy: f32) {
        self.state.cursor_y += dy;
    }

    /// Moves the cursor down by a gap without breaking the page. A gap that
    /// would cross the bottom margin is absorbed at the margin.
    pub fn gap(&mut self, dy: f32) {
        let bottom = self.config.geometry.content_bottom();
        self.state.cursor_y = (self.state.cursor_y + dy).min(bottom);
    }

    pub fn draw(&mut self, command: DrawCommand) {
        self.canvas.push(command);
    }

    pub fn draw_all(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.canvas.extend(commands);
    }
}
