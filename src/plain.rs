//! Plain front end
//!
//! Runs the trainer over ordinary line-based input and output, for terminals
//! where the full-screen interface is unwanted or unavailable. Quiz progress
//! is drawn with an `indicatif` bar on stderr.

use std::io::{BufRead, Write};

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::content::markup::{self, RichLine};
use crate::render::{QuestionView, Renderer, ResultsView, ReviewView, SlideView, WelcomeView};
use crate::session::{OptionMark, Screen, ScreenController};
use crate::util::{format_elapsed, format_percentage, format_score, progress_label, AttemptClock};
use crate::Result;

const RULE: &str = "============================================================";

/// Writes screens as plain text
pub struct PlainRenderer<W: Write> {
    out: W,
    progress: ProgressBar,
    show_running_score: bool,
}

impl<W: Write> PlainRenderer<W> {
    /// Renderer with a quiz progress bar on stderr
    pub fn new(out: W) -> Self {
        let progress = ProgressBar::new(0);
        progress.set_style(
            ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self::with_progress(out, progress)
    }

    /// Renderer without any progress bar output
    pub fn hidden(out: W) -> Self {
        Self::with_progress(out, ProgressBar::hidden())
    }

    fn with_progress(out: W, progress: ProgressBar) -> Self {
        Self {
            out,
            progress,
            show_running_score: true,
        }
    }

    pub fn with_show_running_score(mut self, show: bool) -> Self {
        self.show_running_score = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.progress.finish_and_clear();
        self.out
    }

    /// Write a prompt marker without a trailing newline
    pub fn prompt(&mut self) -> Result<()> {
        self.emit("> ")
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        let out = &mut self.out;
        self.progress.suspend(|| {
            out.write_all(text.as_bytes())?;
            out.flush()
        })?;
        Ok(())
    }
}

fn push_rich_text(text: &mut String, block: &str) {
    for line in markup::parse(block) {
        match line {
            RichLine::Heading(s) => text.push_str(&format!("## {}\n", s)),
            RichLine::Bullet(s) => text.push_str(&format!("  • {}\n", s)),
            RichLine::Code(s) => text.push_str(&format!("    {}\n", s)),
            RichLine::Callout(s) => text.push_str(&format!("  » {}\n", s)),
            RichLine::Text(s) => text.push_str(&format!("{}\n", s)),
            RichLine::Blank => text.push('\n'),
        }
    }
}

fn option_label(index: usize) -> char {
    (b'a' + index as u8) as char
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn render_welcome(&mut self, view: &WelcomeView) -> Result<()> {
        let text = format!(
            "{rule}\nRadioactive Pybrix - Robotics Training\n{rule}\n\
             Learn Python and PyBricks: {} slides, then a {}-question quiz.\n\n\
             [Enter] start the presentation   [q] quit\n",
            view.slide_count,
            view.question_count,
            rule = RULE
        );
        self.emit(&text)
    }

    fn render_slide(&mut self, view: &SlideView<'_>) -> Result<()> {
        let mut text = format!("\n--- Slide {} of {} ---\n", view.current_number, view.total);
        if let Some(slide) = view.current_slide() {
            text.push_str(&format!("{}  {}\n\n", slide.icon, slide.title));
            push_rich_text(&mut text, &slide.content);
        }

        let mut controls = Vec::new();
        if view.previous_enabled {
            controls.push("[p] previous");
        }
        if view.next_visible {
            controls.push("[n/Enter] next");
        }
        if view.begin_quiz_visible {
            controls.push("[s/Enter] start the quiz");
        }
        controls.push("[x] restart");
        controls.push("[q] quit");
        text.push_str(&format!("\n{}\n", controls.join("  ")));

        self.emit(&text)
    }

    fn render_question(&mut self, view: &QuestionView<'_>) -> Result<()> {
        self.progress.set_length(view.total as u64);
        self.progress.set_position(view.number as u64);
        self.progress
            .set_message(progress_label(view.number, view.total));

        let mut text = format!("\n{}", progress_label(view.number, view.total));
        if self.show_running_score {
            text.push_str(&format!("   (score {})", view.score));
        }
        text.push_str(&format!("\n{}\n", view.question.prompt));

        for (i, option) in view.options.iter().enumerate() {
            let mark = match option.mark {
                OptionMark::Unmarked => "  ",
                OptionMark::Correct => "✓ ",
                OptionMark::Incorrect => "✗ ",
            };
            text.push_str(&format!("  {}) {}{}\n", option_label(i), mark, option.text));
        }

        match view.feedback {
            Some(feedback) => {
                text.push_str(&format!(
                    "\n{}\n{}\n\n[Enter] continue\n",
                    feedback.headline(),
                    feedback.explanation
                ));
            }
            None => text.push_str("\n[1-4 / a-d] choose an answer  [x] restart  [q] quit\n"),
        }

        self.emit(&text)
    }

    fn render_results(&mut self, view: &ResultsView) -> Result<()> {
        self.progress.finish_and_clear();

        let results = &view.results;
        let mut text = format!(
            "\n{rule}\nQuiz Complete!\n{rule}\nScore: {} ({})\n",
            format_score(results.score, results.total),
            format_percentage(results.percentage),
            rule = RULE
        );
        if let Some(elapsed) = view.elapsed {
            text.push_str(&format!("Time: {}\n", format_elapsed(elapsed)));
        }
        text.push_str(&format!(
            "\n{}\n\n[r] review answers  [x] restart  [q] quit\n",
            results.tier.message()
        ));

        self.emit(&text)
    }

    fn render_review(&mut self, view: &ReviewView<'_>) -> Result<()> {
        let mut text = format!(
            "\n--- Review: {} ---\n",
            format_score(view.results.score, view.results.total)
        );

        for entry in &view.entries {
            let verdict = if entry.correct { "✓" } else { "✗" };
            text.push_str(&format!("\n{}. {} {}\n", entry.ordinal, entry.prompt, verdict));
            text.push_str(&format!("   Your answer: {}\n", entry.selected_answer));
            if let Some(correct) = entry.correct_answer {
                text.push_str(&format!("   Correct answer: {}\n", correct));
            }
            text.push_str(&format!("   Explanation: {}\n", entry.explanation));
        }

        text.push_str("\n[Enter] back to results  [x] restart  [q] quit\n");
        self.emit(&text)
    }
}

/// One line of plain-mode input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlainCommand {
    Continue,
    Next,
    Previous,
    StartQuiz,
    /// Zero-based answer index, not yet bounds-checked
    Choose(usize),
    Review,
    Back,
    Restart,
    Quit,
    Unknown(String),
}

impl PlainCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Self::Continue,
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "s" | "start" => Self::StartQuiz,
            "r" | "review" => Self::Review,
            "back" => Self::Back,
            "x" | "restart" => Self::Restart,
            "q" | "quit" | "exit" => Self::Quit,
            "a" => Self::Choose(0),
            "b" => Self::Choose(1),
            "c" => Self::Choose(2),
            "d" => Self::Choose(3),
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Self::Choose(n - 1),
                _ => Self::Unknown(line.to_string()),
            },
        }
    }
}

/// Line-driven session over any reader and writer
pub struct PlainSession<R: BufRead, W: Write> {
    controller: ScreenController,
    input: R,
    renderer: PlainRenderer<W>,
    clock: AttemptClock,
}

impl<R: BufRead, W: Write> PlainSession<R, W> {
    pub fn new(controller: ScreenController, input: R, renderer: PlainRenderer<W>) -> Self {
        Self {
            controller,
            input,
            renderer,
            clock: AttemptClock::new(),
        }
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn into_renderer(self) -> PlainRenderer<W> {
        self.renderer
    }

    /// Run until the learner quits or input ends
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;
        let mut line = String::new();

        loop {
            if dirty {
                let view = self.controller.view().with_elapsed(self.clock.elapsed());
                self.renderer.render(&view)?;
            }
            self.renderer.prompt()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let command = PlainCommand::parse(&line);
            if command == PlainCommand::Quit {
                break;
            }

            dirty = self.apply(command);
            self.clock.observe(self.controller.screen());
        }

        Ok(())
    }

    /// Apply one command; returns whether the session changed
    fn apply(&mut self, command: PlainCommand) -> bool {
        let c = &mut self.controller;
        let outcome = match (c.screen(), &command) {
            (_, PlainCommand::Restart) => c.restart(),
            (Screen::Welcome, PlainCommand::Continue) => c.start_presentation(),
            (Screen::Presentation, PlainCommand::Previous) => c.previous_slide(),
            (Screen::Presentation, PlainCommand::Next) => c.next_slide(),
            (Screen::Presentation, PlainCommand::StartQuiz) => c.start_quiz(),
            (Screen::Presentation, PlainCommand::Continue) => {
                if c.presentation().map(|p| p.is_last()).unwrap_or(false) {
                    c.start_quiz()
                } else {
                    c.next_slide()
                }
            }
            (Screen::Quiz, PlainCommand::Choose(index)) => c.select_answer(*index).map(|_| ()),
            (Screen::Quiz, PlainCommand::Continue) => c.advance(),
            (Screen::Results, PlainCommand::Review) => c.view_review(),
            (Screen::Review, PlainCommand::Back | PlainCommand::Continue) => c.finish_review(),
            (screen, _) => Err(crate::session::Rejected::WrongScreen(screen)),
        };

        match outcome {
            Ok(()) => true,
            Err(reason) => {
                debug!("ignored {:?}: {}", command, reason);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentTables;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, ScreenController) {
        let controller = ScreenController::new(ContentTables::builtin()).unwrap();
        let renderer = PlainRenderer::hidden(Vec::new());
        let mut session = PlainSession::new(controller, Cursor::new(script.to_string()), renderer);
        session.run().unwrap();
        let controller = session.controller.clone();
        let output = String::from_utf8(session.renderer.into_inner()).unwrap();
        (output, controller)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(PlainCommand::parse("\n"), PlainCommand::Continue);
        assert_eq!(PlainCommand::parse(" N "), PlainCommand::Next);
        assert_eq!(PlainCommand::parse("1"), PlainCommand::Choose(0));
        assert_eq!(PlainCommand::parse("4"), PlainCommand::Choose(3));
        assert_eq!(PlainCommand::parse("9"), PlainCommand::Choose(8));
        assert_eq!(PlainCommand::parse("c"), PlainCommand::Choose(2));
        assert_eq!(PlainCommand::parse("b"), PlainCommand::Choose(1));
        assert_eq!(PlainCommand::parse("back"), PlainCommand::Back);
        assert_eq!(PlainCommand::parse("0"), PlainCommand::Unknown("0".to_string()));
        assert_eq!(PlainCommand::parse("zzz"), PlainCommand::Unknown("zzz".to_string()));
    }

    #[test]
    fn test_welcome_and_first_slide() {
        let (output, controller) = run_script("\n");
        assert!(output.contains("Radioactive Pybrix - Robotics Training"));
        assert!(output.contains("--- Slide 1 of 15 ---"));
        assert!(output.contains("What is Python?"));
        assert!(!output.contains("[p] previous"));
        assert_eq!(controller.screen(), Screen::Presentation);
    }

    #[test]
    fn test_rejected_answer_does_not_rerender() {
        let mut script = String::from("\n");
        script.push_str(&"n\n".repeat(14));
        script.push_str("s\n7\n");
        let (output, controller) = run_script(&script);

        assert_eq!(output.matches("Question 1 of 23").count(), 1);
        assert!(controller.quiz().answers().is_empty());
    }

    #[test]
    fn test_answer_feedback_is_printed() {
        let mut script = String::from("\n");
        script.push_str(&"\n".repeat(15));
        script.push_str("a\n");
        let (output, controller) = run_script(&script);

        assert!(output.contains("✗ Not quite..."));
        assert!(output.contains("b) ✓ A programming language"));
        assert!(output.contains("a) ✗ A type of snake"));
        assert_eq!(controller.quiz().score(), 0);
    }
}
