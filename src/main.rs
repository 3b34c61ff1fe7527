use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use udiff::areas::session::Session;
use udiff::artifacts::unified::options::{ColorMode, OptionsError, validate_name};
use udiff::commands::diff::{DEFAULT_CONTEXT, DiffRequest, DiffStatus};
use udiff::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn resolve(self) -> ColorMode {
        match self {
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
            ColorChoice::Auto => ColorMode::from(
                std::io::stdout().is_terminal()
                    && colored::control::SHOULD_COLORIZE.should_colorize(),
            ),
        }
    }
}

fn parse_label(value: &str) -> Result<String, OptionsError> {
    validate_name(value)?;
    Ok(value.to_string())
}

#[derive(Parser)]
#[command(
    name = "udiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two files line by line",
    long_about = "Prints the shortest line-based edit script turning FILE_A into FILE_B \
    as a unified diff. Exits with 0 when the files are identical, 1 when they differ \
    and 2 when something went wrong.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The original file, or - for standard input")]
    file_a: PathBuf,
    #[arg(index = 2, help = "The changed file, or - for standard input")]
    file_b: PathBuf,
    #[arg(
        short = 'U',
        long = "unified",
        default_value_t = DEFAULT_CONTEXT,
        help = "Number of unchanged lines shown around each change"
    )]
    context: usize,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to color the output")]
    color: ColorChoice,
    #[arg(
        long,
        value_parser = parse_label,
        help = "Name shown for the original file in the header"
    )]
    label_a: Option<String>,
    #[arg(
        long,
        value_parser = parse_label,
        help = "Name shown for the changed file in the header"
    )]
    label_b: Option<String>,
    #[arg(long, help = "Give up if the comparison takes longer than this many milliseconds")]
    timeout_ms: Option<u64>,
    #[arg(short, long, action = ArgAction::Count, help = "Log progress to standard error")]
    verbose: u8,
}

impl Cli {
    fn request(&self) -> DiffRequest {
        let labels = match (&self.label_a, &self.label_b) {
            (None, None) => None,
            (label_a, label_b) => Some((
                label_a
                    .clone()
                    .unwrap_or_else(|| self.file_a.display().to_string()),
                label_b
                    .clone()
                    .unwrap_or_else(|| self.file_b.display().to_string()),
            )),
        };

        DiffRequest::new(self.file_a.clone(), self.file_b.clone())
            .with_context(self.context)
            .with_color(self.color.resolve())
            .with_labels(labels)
            .with_timeout(self.timeout_ms.map(Duration::from_millis))
    }
}

fn run(cli: &Cli) -> Result<DiffStatus> {
    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd, Box::new(std::io::stdout()))?;

    session.diff(&cli.request())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_log(logging::level_for_verbosity(cli.verbose));

    match run(&cli) {
        Ok(DiffStatus::Identical) => ExitCode::SUCCESS,
        Ok(DiffStatus::Different) => ExitCode::from(1),
        Err(error) => {
            eprintln!("udiff: {error:#}");
            ExitCode::from(2)
        }
    }
}
