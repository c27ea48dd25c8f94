//! Presentation screen
//!
//! Shows one slide at a time with its markup styled, a slide counter, and the
//! navigation controls that apply on the current slide. Bodies taller than the
//! terminal scroll; the offset starts over on every slide.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, Scroll};
use crate::content::markup::{self, RichLine};
use crate::render::SlideView;

#[derive(Debug, Default)]
pub struct PresentationScreen {
    scroll: Scroll,
    /// Slide the scroll offset belongs to
    slide_index: Option<usize>,
}

impl PresentationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn scroll_up(&mut self) {
        self.scroll.up();
    }

    pub fn scroll_down(&mut self) {
        self.scroll.down();
    }

    pub fn render(&mut self, f: &mut Frame, view: &SlideView<'_>) {
        if self.slide_index != Some(view.current_index) {
            self.slide_index = Some(view.current_index);
            self.scroll.reset();
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Slide title
                Constraint::Min(10),   // Slide body
                Constraint::Length(3), // Navigation
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        self.render_header(f, chunks[0], view);
        self.render_body(f, chunks[1], view);
        self.render_navigation(f, chunks[2], view);

        let mut keys = vec![("←/h", "Previous"), ("→/l", "Next"), ("↑↓", "Scroll")];
        if view.begin_quiz_visible {
            keys.push(("Enter", "Begin Quiz"));
        }
        keys.push(("Esc", "Restart"));
        keys.push(("q", "Quit"));
        f.render_widget(help_bar(&keys), chunks[3]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, view: &SlideView<'_>) {
        let title = view
            .current_slide()
            .map(|slide| format!("{} {}", slide.icon, slide.title))
            .unwrap_or_default();

        let header = Paragraph::new(title)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" Slide {} of {} ", view.current_number, view.total)),
            );

        f.render_widget(header, area);
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect, view: &SlideView<'_>) {
        let lines: Vec<Line> = view
            .current_slide()
            .map(|slide| markup::parse(&slide.content).into_iter().map(styled_line).collect())
            .unwrap_or_default();

        let body = Paragraph::new(lines).wrap(Wrap { trim: false });
        self.scroll.fit(&body, area);

        let body = body
            .scroll((self.scroll.offset(), 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            );

        f.render_widget(body, area);
    }

    fn render_navigation(&self, f: &mut Frame, area: Rect, view: &SlideView<'_>) {
        let enabled = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(Color::DarkGray);

        let mut spans = vec![
            Span::styled(
                "◀ Previous",
                if view.previous_enabled { enabled } else { disabled },
            ),
            Span::raw(format!("    {} / {}    ", view.current_number, view.total)),
        ];
        if view.next_visible {
            spans.push(Span::styled("Next ▶", enabled));
        }
        if view.begin_quiz_visible {
            spans.push(Span::styled(
                "Begin Quiz ▶",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let nav = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(nav, area);
    }
}

fn styled_line(line: RichLine<'_>) -> Line<'_> {
    match line {
        RichLine::Heading(text) => Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        RichLine::Bullet(text) => Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Yellow)),
            Span::raw(text),
        ]),
        RichLine::Code(text) => Line::from(Span::styled(
            format!("    {}", text),
            Style::default().fg(Color::Green),
        )),
        RichLine::Callout(text) => Line::from(Span::styled(
            format!("  ▌ {}", text),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        )),
        RichLine::Text(text) => Line::from(text),
        RichLine::Blank => Line::from(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::{buffer_text, terminal};
    use crate::app::tui::{MIN_HEIGHT, MIN_WIDTH};
    use crate::content::ContentTables;
    use crate::render::ScreenView;
    use crate::session::ScreenController;

    fn on_slide(index: usize) -> ScreenController {
        let mut c = ScreenController::new(ContentTables::builtin()).unwrap();
        c.start_presentation().unwrap();
        c.go_to_slide(index).unwrap();
        c
    }

    fn draw(screen: &mut PresentationScreen, controller: &ScreenController) -> String {
        let ScreenView::Presentation(view) = controller.view() else {
            panic!("not on the presentation screen");
        };
        let mut terminal = terminal(MIN_WIDTH, MIN_HEIGHT);
        terminal.draw(|f| screen.render(f, &view)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_long_slide_scrolls_to_its_end_at_minimum_size() {
        let controller = on_slide(1);
        let mut screen = PresentationScreen::new();

        let first = draw(&mut screen, &controller);
        assert!(first.contains("Why Use Python?"));
        assert!(!first.contains("memorizing"));

        for _ in 0..200 {
            screen.scroll_down();
        }
        let last = draw(&mut screen, &controller);
        assert!(last.contains("memorizing"));
        assert!(screen.scroll() > 0);
    }

    #[test]
    fn test_scroll_resets_on_slide_change() {
        let mut screen = PresentationScreen::new();
        draw(&mut screen, &on_slide(1));
        screen.scroll_down();
        screen.scroll_down();
        assert_eq!(screen.scroll(), 2);

        draw(&mut screen, &on_slide(2));
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn test_styled_line_kinds() {
        assert_eq!(styled_line(RichLine::Blank), Line::from(""));
        let code = styled_line(RichLine::Code("motor.run(100)"));
        assert_eq!(code.spans[0].content, "    motor.run(100)");
    }
}
