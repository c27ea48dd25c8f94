//! TUI screen components
//!
//! Contains one component per session screen, and the frame renderer that
//! routes screen payloads to them.

pub mod presentation;
pub mod quiz;
pub mod results;
pub mod review;
pub mod welcome;

pub use presentation::PresentationScreen;
pub use quiz::QuizScreen;
pub use results::{ResultAction, ResultsScreen};
pub use review::ReviewScreen;
pub use welcome::WelcomeScreen;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::render::{QuestionView, Renderer, ResultsView, ReviewView, SlideView, WelcomeView};
use crate::Result;

/// All screen components, kept alive for the whole run so their UI state
/// (cursor, scroll offset, selected action) survives between frames
#[derive(Debug, Default)]
pub struct Screens {
    pub welcome: WelcomeScreen,
    pub presentation: PresentationScreen,
    pub quiz: QuizScreen,
    pub results: ResultsScreen,
    pub review: ReviewScreen,
}

impl Screens {
    pub fn new(show_running_score: bool) -> Self {
        Self {
            quiz: QuizScreen::new(show_running_score),
            ..Self::default()
        }
    }
}

/// Paints screen payloads into one ratatui frame
pub struct FrameRenderer<'s, 'f, 'a> {
    screens: &'s mut Screens,
    frame: &'f mut Frame<'a>,
}

impl<'s, 'f, 'a> FrameRenderer<'s, 'f, 'a> {
    pub fn new(screens: &'s mut Screens, frame: &'f mut Frame<'a>) -> Self {
        Self { screens, frame }
    }
}

impl Renderer for FrameRenderer<'_, '_, '_> {
    fn render_welcome(&mut self, view: &WelcomeView) -> Result<()> {
        self.screens.welcome.render(self.frame, view);
        Ok(())
    }

    fn render_slide(&mut self, view: &SlideView<'_>) -> Result<()> {
        self.screens.presentation.render(self.frame, view);
        Ok(())
    }

    fn render_question(&mut self, view: &QuestionView<'_>) -> Result<()> {
        self.screens.quiz.render(self.frame, view);
        Ok(())
    }

    fn render_results(&mut self, view: &ResultsView) -> Result<()> {
        self.screens.results.render(self.frame, view);
        Ok(())
    }

    fn render_review(&mut self, view: &ReviewView<'_>) -> Result<()> {
        self.screens.review.render(self.frame, view);
        Ok(())
    }
}

/// Vertical scroll position of a wrapped, bordered paragraph
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    offset: u16,
    max: u16,
}

impl Scroll {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Move down one row, stopping once the last row is visible
    pub fn down(&mut self) {
        if self.offset < self.max {
            self.offset += 1;
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Measure `paragraph` in wrapped rows for a bordered `area` and clamp the
    /// offset so the last row can reach the bottom edge but no further
    pub fn fit(&mut self, paragraph: &Paragraph<'_>, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        let rows = u16::try_from(paragraph.line_count(inner_width)).unwrap_or(u16::MAX);
        self.max = rows.saturating_sub(inner_height);
        self.offset = self.offset.min(self.max);
    }
}

/// Bordered, centered title bar
pub(crate) fn title_bar(title: &str, color: Color) -> Paragraph<'_> {
    Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
}

/// Key hints such as `Enter Select  Esc Back`
pub(crate) fn help_bar<'a>(keys: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, label) in keys {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", label)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    /// Buffer rows joined with newlines, wide-glyph padding cells included
    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Wrap;

    #[test]
    fn test_scroll_fits_wrapped_rows() {
        // 12 wrapped rows in a 10-column inner width, 4 visible rows
        let paragraph = Paragraph::new("a".repeat(120)).wrap(Wrap { trim: false });
        let mut scroll = Scroll::default();
        scroll.fit(&paragraph, Rect::new(0, 0, 12, 6));

        for _ in 0..100 {
            scroll.down();
        }
        assert_eq!(scroll.offset(), 8);

        scroll.up();
        assert_eq!(scroll.offset(), 7);
        scroll.reset();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_scroll_without_overflow() {
        let paragraph = Paragraph::new("short").wrap(Wrap { trim: false });
        let mut scroll = Scroll::default();
        scroll.fit(&paragraph, Rect::new(0, 0, 40, 10));
        scroll.down();
        assert_eq!(scroll.offset(), 0);
    }
}
