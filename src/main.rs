use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use pybrix_trainer::{
    app::App,
    config::TrainerConfig,
    content::ContentTables,
    error::user_friendly_message,
    plain::{PlainRenderer, PlainSession},
    session::ScreenController,
    Result,
};

/// Terminal presentation and quiz trainer for PyBricks robot programming
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Use the line-based front end instead of the full-screen interface
    #[arg(long)]
    plain: bool,

    /// Slide deck and question bank to use instead of the built-in course (TOML or JSON)
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Save the resulting configuration and exit
    #[arg(long)]
    write_config: bool,
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut config = TrainerConfig::load()?;
    if let Some(path) = args.content {
        config = config.with_content_path(path);
    }
    if args.plain {
        config = config.with_plain(true);
    }
    config.validate()?;
    debug!("configuration: {:?}", config);

    if args.write_config {
        let path = config.save()?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let content = ContentTables::load_or_builtin(config.content_path.as_deref())?;
    info!(
        "loaded {} slides and {} questions",
        content.slide_count(),
        content.question_count()
    );
    let controller = ScreenController::new(content)?;

    if config.plain {
        let stdin = io::stdin();
        let renderer = PlainRenderer::new(io::stdout())
            .with_show_running_score(config.show_running_score);
        PlainSession::new(controller, stdin.lock(), renderer).run()
    } else {
        let mut app = App::new(controller, &config)?;
        app.init()?;
        app.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["pybrix-trainer"]).unwrap();
        assert!(!args.plain);
        assert!(!args.write_config);
        assert!(args.content.is_none());
    }

    #[test]
    fn test_args_content_forms() {
        let args = Args::try_parse_from(["pybrix-trainer", "--content=deck.toml"]).unwrap();
        assert_eq!(args.content, Some(PathBuf::from("deck.toml")));

        let args =
            Args::try_parse_from(["pybrix-trainer", "--plain", "--content", "deck.json"]).unwrap();
        assert!(args.plain);
        assert_eq!(args.content, Some(PathBuf::from("deck.json")));
    }

    #[test]
    fn test_args_rejects_unknown_and_missing_values() {
        assert!(Args::try_parse_from(["pybrix-trainer", "--bogus"]).is_err());
        assert!(Args::try_parse_from(["pybrix-trainer", "--content"]).is_err());
    }
}
