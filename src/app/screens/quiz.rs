//! Quiz screen implementation
//!
//! One question at a time: progress gauge, the prompt, four answer options
//! with a selection cursor, and the feedback panel once an answer is locked in.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::help_bar;
use crate::render::{OptionView, QuestionView};
use crate::session::OptionMark;
use crate::util::format::{format_score, progress_label};
use crate::ANSWER_COUNT;

const OPTION_LETTERS: [char; ANSWER_COUNT] = ['A', 'B', 'C', 'D'];

/// Quiz screen component with an option cursor
#[derive(Debug)]
pub struct QuizScreen {
    cursor: usize,
    list_state: ListState,
    show_running_score: bool,
}

impl QuizScreen {
    pub fn new(show_running_score: bool) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            cursor: 0,
            list_state,
            show_running_score,
        }
    }

    /// Option under the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor up, wrapping to the last option
    pub fn select_previous(&mut self) {
        self.cursor = if self.cursor == 0 {
            ANSWER_COUNT - 1
        } else {
            self.cursor - 1
        };
        self.list_state.select(Some(self.cursor));
    }

    /// Move the cursor down, wrapping to the first option
    pub fn select_next(&mut self) {
        self.cursor = (self.cursor + 1) % ANSWER_COUNT;
        self.list_state.select(Some(self.cursor));
    }

    /// Put the cursor back on the first option for a new question
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.list_state.select(Some(0));
    }

    pub fn render(&mut self, f: &mut Frame, view: &QuestionView<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress
                Constraint::Min(4),    // Prompt
                Constraint::Length(6), // Options
                Constraint::Length(5), // Feedback
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        self.render_progress(f, chunks[0], view);
        self.render_prompt(f, chunks[1], view);
        self.render_options(f, chunks[2], view);
        self.render_feedback(f, chunks[3], view);

        let keys: &[(&str, &str)] = if view.is_answered() {
            &[("Enter", "Next"), ("Esc", "Restart"), ("q", "Quit")]
        } else {
            &[
                ("↑↓", "Navigate"),
                ("Enter", "Answer"),
                ("1-4/a-d", "Pick"),
                ("Esc", "Restart"),
                ("q", "Quit"),
            ]
        };
        f.render_widget(help_bar(keys), chunks[4]);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, view: &QuestionView<'_>) {
        let mut label = progress_label(view.number, view.total);
        if self.show_running_score {
            label.push_str(&format!("  ·  Score {}", view.score));
        }

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Progress")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(view.progress.clamp(0.0, 1.0))
            .label(label);

        f.render_widget(gauge, area);
    }

    fn render_prompt(&self, f: &mut Frame, area: Rect, view: &QuestionView<'_>) {
        let prompt = Paragraph::new(view.question.prompt.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" Question {} ", view.number))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );

        f.render_widget(prompt, area);
    }

    fn render_options(&mut self, f: &mut Frame, area: Rect, view: &QuestionView<'_>) {
        let items: Vec<ListItem> = view
            .options
            .iter()
            .zip(OPTION_LETTERS)
            .map(|(option, letter)| option_item(option, letter))
            .collect();

        let mut list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Answers"),
        );

        // Once locked in, the marks carry the information and the cursor hides
        if view.is_answered() {
            f.render_widget(list, area);
        } else {
            list = list
                .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, area, &mut self.list_state);
        }
    }

    fn render_feedback(&self, f: &mut Frame, area: Rect, view: &QuestionView<'_>) {
        let Some(feedback) = view.feedback else {
            let hint = Paragraph::new(format!("Score so far: {}", format_score(view.score, view.total)))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(hint, area);
            return;
        };

        let color = if feedback.correct { Color::Green } else { Color::Red };
        let text = vec![
            Line::from(Span::styled(
                feedback.headline(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(feedback.explanation),
        ];

        let panel = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        f.render_widget(panel, area);
    }
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new(true)
    }
}

fn option_item<'a>(option: &OptionView<'a>, letter: char) -> ListItem<'a> {
    let (marker, style) = match option.mark {
        OptionMark::Correct => (
            "✓ ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        OptionMark::Incorrect => ("✗ ", Style::default().fg(Color::Red)),
        OptionMark::Unmarked if !option.enabled => ("  ", Style::default().fg(Color::DarkGray)),
        OptionMark::Unmarked => ("  ", Style::default()),
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{}) ", letter), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{}{}", marker, option.text), style),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_down() {
        let mut screen = QuizScreen::new(true);
        for _ in 0..ANSWER_COUNT {
            screen.select_next();
        }
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_cursor_wraps_up() {
        let mut screen = QuizScreen::new(true);
        screen.select_previous();
        assert_eq!(screen.cursor(), ANSWER_COUNT - 1);

        screen.select_previous();
        assert_eq!(screen.cursor(), ANSWER_COUNT - 2);
    }

    #[test]
    fn test_reset_cursor() {
        let mut screen = QuizScreen::new(false);
        screen.select_next();
        screen.select_next();
        screen.reset_cursor();
        assert_eq!(screen.cursor(), 0);
    }
}
