use std::path::PathBuf;

use clap::Parser;
use quiz_text::{Quiz, QuizConfig, QuizError, SourceFormat, config::DEFAULT_TITLE, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to load the questions from
    #[arg(short, long)]
    questions: PathBuf,

    /// How the question file is written
    #[arg(short, long, value_enum, default_value_t = SourceFormat::Text)]
    format: SourceFormat,

    /// Title shown on the welcome screen
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Print the parsed questions as JSON instead of starting the quiz
    #[arg(long)]
    dump: bool,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Args> for QuizConfig {
    fn from(args: Args) -> Self {
        Self {
            questions: args.questions,
            format: args.format,
            title: args.title,
            dump: args.dump,
            log_file: args.log_file,
        }
    }
}

fn main() {
    let config = QuizConfig::from(Args::parse());

    if let Err(e) = run(&config) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &QuizConfig) -> Result<(), QuizError> {
    logging::init(config)?;
    let quiz = Quiz::from_config(config)?;

    if config.dump {
        println!("{}", quiz.to_json()?);
        return Ok(());
    }

    quiz.run()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn defaults_map_to_text_quiz() {
        let args = Args::try_parse_from(["quiz-text", "-q", "quiz.txt"]).unwrap();
        let config = QuizConfig::from(args);

        assert_eq!(config.questions, Path::new("quiz.txt"));
        assert_eq!(config.format, SourceFormat::Text);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert!(!config.dump);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn flags_map_to_config() {
        let args = Args::try_parse_from([
            "quiz-text",
            "--questions",
            "quiz.json",
            "--format",
            "json",
            "--title",
            "Flight School",
            "--dump",
            "--log-file",
            "run.log",
        ])
        .unwrap();
        let config = QuizConfig::from(args);

        assert_eq!(config.format, SourceFormat::Json);
        assert_eq!(config.title, "Flight School");
        assert!(config.dump);
        assert_eq!(config.log_file.as_deref(), Some(Path::new("run.log")));
    }

    #[test]
    fn questions_flag_is_required() {
        assert!(Args::try_parse_from(["quiz-text"]).is_err());
        assert!(Args::try_parse_from(["quiz-text", "-q", "x", "-f", "yaml"]).is_err());
    }
}
