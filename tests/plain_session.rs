use std::io::Cursor;

use pybrix_trainer::content::ContentTables;
use pybrix_trainer::plain::{PlainRenderer, PlainSession};
use pybrix_trainer::session::{Screen, ScreenController, Tier};

fn run(script: &str) -> (String, Screen, ScreenController) {
    let controller = ScreenController::new(ContentTables::builtin()).unwrap();
    let renderer = PlainRenderer::hidden(Vec::new());
    let mut session = PlainSession::new(controller, Cursor::new(script.to_string()), renderer);
    session.run().unwrap();

    let controller = session.controller().clone();
    let screen = controller.screen();
    let output = String::from_utf8(session.into_renderer().into_inner()).unwrap();
    (output, screen, controller)
}

/// Welcome, walk all slides, start the quiz
fn through_presentation() -> String {
    let mut script = String::from("\n");
    script.push_str(&"n\n".repeat(14));
    script.push_str("s\n");
    script
}

fn answer_key() -> Vec<usize> {
    ContentTables::builtin()
        .questions
        .iter()
        .map(|q| q.correct_index)
        .collect()
}

#[test]
fn test_perfect_run_with_review() {
    let mut script = through_presentation();
    for key in answer_key() {
        script.push_str(&format!("{}\n\n", key + 1));
    }
    script.push_str("r\nback\n");

    let (output, screen, controller) = run(&script);

    assert!(output.contains("Quiz Complete!"));
    assert!(output.contains("Score: 23 / 23 (100%)"));
    assert!(output.contains(Tier::Perfect.message()));
    assert!(output.contains("--- Review: 23 / 23 ---"));
    assert!(!output.contains("Correct answer:"));
    assert_eq!(screen, Screen::Results);
    assert_eq!(controller.results().percentage, 100);
}

#[test]
fn test_all_wrong_run() {
    let mut script = through_presentation();
    for key in answer_key() {
        let wrong = (key + 1) % 4;
        script.push_str(&format!("{}\n\n", wrong + 1));
    }
    script.push_str("r\n");

    let (output, screen, controller) = run(&script);

    assert!(output.contains("Score: 0 / 23 (0%)"));
    assert!(output.contains(Tier::KeepLearning.message()));
    assert_eq!(output.matches("Correct answer:").count(), 23);
    assert_eq!(screen, Screen::Review);
    assert_eq!(controller.quiz().score(), 0);
}

#[test]
fn test_restart_mid_quiz_returns_to_welcome() {
    let mut script = through_presentation();
    script.push_str("1\n\nx\n");

    let (output, screen, controller) = run(&script);

    assert_eq!(output.matches("Radioactive Pybrix - Robotics Training").count(), 2);
    assert_eq!(screen, Screen::Welcome);
    assert!(controller.quiz().answers().is_empty());
}

#[test]
fn test_quit_stops_reading() {
    let (output, screen, _) = run("\nq\nn\nn\n");
    assert!(output.contains("--- Slide 1 of 15 ---"));
    assert!(!output.contains("--- Slide 2 of 15 ---"));
    assert_eq!(screen, Screen::Presentation);
}

#[test]
fn test_unknown_commands_are_ignored() {
    let (output, screen, _) = run("\nhello\np\n");
    assert_eq!(output.matches("--- Slide 1 of 15 ---").count(), 1);
    assert_eq!(screen, Screen::Presentation);
}
