use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::data::{SAMPLE_QUIZ, read_quiz_file};
use crate::error::Result;
use crate::ui::view::QuizView;

pub const DEFAULT_TITLE: &str = "Quiz";

/// Command line of the native host.
#[derive(Parser, Debug)]
#[command(
    name = "quiz_overlay_bin",
    version,
    about = "Show a quiz document in a fullscreen overlay"
)]
pub struct Cli {
    /// Quiz document (.json, .yaml or .yml). The embedded sample is shown when omitted.
    #[arg(value_name = "PATH")]
    pub document: Option<PathBuf>,
}

/// Host settings resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub document: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            document: None,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let title = match cli.document.as_deref().and_then(|p| p.file_stem()?.to_str()) {
            Some(stem) => format!("{DEFAULT_TITLE} - {stem}"),
            None => DEFAULT_TITLE.to_owned(),
        };
        Self {
            title,
            document: cli.document,
        }
    }
}

impl AppConfig {
    /// Parses `std::env::args()`; `--help`, `--version` and usage errors exit the process.
    pub fn parse() -> Self {
        Cli::parse().into()
    }

    /// `args` includes the program name, as `std::env::args()` does.
    pub fn try_from_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from)
    }

    /// Reads and decodes the configured document, or the embedded sample.
    pub fn load_view(&self) -> Result<QuizView> {
        match &self.document {
            Some(path) => {
                let (content, format) = read_quiz_file(path)?;
                log::info!("loading quiz from {}", path.display());
                QuizView::parse(&content, format)
            }
            None => {
                log::info!("no quiz document given, showing the sample quiz");
                QuizView::from_json(SAMPLE_QUIZ)
            }
        }
    }
}
