//! Answer review screen
//!
//! Scrollable transcript of every answer with the right answer shown for
//! misses and each question's explanation.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{help_bar, title_bar, Scroll};
use crate::render::ReviewView;
use crate::session::ReviewEntry;
use crate::util::format::format_score;

#[derive(Debug, Default)]
pub struct ReviewScreen {
    scroll: Scroll,
}

impl ReviewScreen {
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

    pub fn reset_scroll(&mut self) {
        self.scroll.reset();
    }

    pub fn render(&mut self, f: &mut Frame, view: &ReviewView<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Transcript
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        let title = format!(
            "Review Your Answers ({})",
            format_score(view.results.score, view.results.total)
        );
        f.render_widget(title_bar(&title, Color::Cyan), chunks[0]);
        self.render_transcript(f, chunks[1], view);
        f.render_widget(
            help_bar(&[("↑↓", "Scroll"), ("Enter/Esc", "Back to Results"), ("q", "Quit")]),
            chunks[2],
        );
    }

    fn render_transcript(&mut self, f: &mut Frame, area: Rect, view: &ReviewView<'_>) {
        let lines: Vec<Line> = view.entries.iter().flat_map(entry_lines).collect();

        let transcript = Paragraph::new(lines).wrap(Wrap { trim: false });
        self.scroll.fit(&transcript, area);

        let transcript = transcript
            .scroll((self.scroll.offset(), 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            );

        f.render_widget(transcript, area);
    }
}

fn entry_lines<'a>(entry: &ReviewEntry<'a>) -> Vec<Line<'a>> {
    let (mark, color) = if entry.correct {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} {}. ", mark, entry.ordinal),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.prompt, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("   Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(entry.selected_answer, Style::default().fg(color)),
        ]),
    ];

    if let Some(correct_answer) = entry.correct_answer {
        lines.push(Line::from(vec![
            Span::styled("   Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(correct_answer, Style::default().fg(Color::Green)),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("   {}", entry.explanation),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::screens::test_support::{buffer_text, terminal};
    use crate::content::ContentTables;
    use crate::render::ScreenView;
    use crate::session::ScreenController;

    fn all_wrong_review() -> ScreenController {
        let mut c = ScreenController::new(ContentTables::builtin()).unwrap();
        c.start_presentation().unwrap();
        while c.next_slide().is_ok() {}
        c.start_quiz().unwrap();
        let keys: Vec<usize> = c.content().questions.iter().map(|q| q.correct_index).collect();
        for key in keys {
            c.select_answer((key + 1) % 4).unwrap();
            c.advance().unwrap();
        }
        c.view_review().unwrap();
        c
    }

    fn draw(screen: &mut ReviewScreen, controller: &ScreenController) -> String {
        let ScreenView::Review(view) = controller.view() else {
            panic!("not on the review screen");
        };
        let mut terminal = terminal(80, 24);
        terminal.draw(|f| screen.render(f, &view)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_scroll_stays_within_bounds() {
        let mut screen = ReviewScreen::new();
        screen.scroll_up();
        assert_eq!(screen.scroll(), 0);

        // Nothing rendered yet, so there is nothing to scroll
        screen.scroll_down();
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn test_last_explanation_reachable_by_scrolling() {
        let controller = all_wrong_review();
        let mut screen = ReviewScreen::new();

        let first = draw(&mut screen, &controller);
        assert!(first.contains("1. "));
        assert!(!first.contains("new_mission.py!"));

        for _ in 0..2000 {
            screen.scroll_down();
        }
        let last = draw(&mut screen, &controller);
        assert!(last.contains("new_mission.py!"));
        assert!(screen.scroll() > 0);

        // Scrolling further does not move past the end
        let offset = screen.scroll();
        screen.scroll_down();
        draw(&mut screen, &controller);
        assert_eq!(screen.scroll(), offset);
    }

    #[test]
    fn test_entry_lines_show_correct_answer_only_for_misses() {
        let hit = ReviewEntry {
            ordinal: 1,
            prompt: "What is a library?",
            selected_answer: "Prewritten code",
            correct_answer: None,
            explanation: "Libraries hold reusable code.",
            correct: true,
        };
        let miss = ReviewEntry {
            correct_answer: Some("Prewritten code"),
            selected_answer: "A bookshelf",
            correct: false,
            ..hit.clone()
        };

        assert_eq!(entry_lines(&hit).len(), 4);
        assert_eq!(entry_lines(&miss).len(), 5);
    }
}
