// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use ytcaptions::app_config::{self, Config, OutputFormat};
use ytcaptions::app_controller::Controller;

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Json,
    Pretty,
    Srt,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Pretty => OutputFormat::Pretty,
            CliOutputFormat::Srt => OutputFormat::Srt,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the caption tracks available for a video
    Info {
        /// Video ID or watch URL
        #[arg(value_name = "REFERENCE")]
        reference: String,

        /// Write the listing to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite of an existing output file
        #[arg(short = 'F', long)]
        force_overwrite: bool,
    },

    /// Fetch the transcript of one caption track
    Transcript {
        /// Video ID or watch URL
        #[arg(value_name = "REFERENCE")]
        reference: String,

        /// Language code (e.g. 'en', 'es'); first track when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<CliOutputFormat>,

        /// Write the transcript to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite of an existing output file
        #[arg(short = 'F', long)]
        force_overwrite: bool,
    },

    /// Generate shell completions for ytcaptions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ytcaptions - fetch video captions as structured data
#[derive(Parser, Debug)]
#[command(name = "ytcaptions")]
#[command(version)]
#[command(about = "Fetch video caption tracks and transcripts")]
#[command(long_about = "ytcaptions lists the caption tracks of a video and fetches their timed text.

EXAMPLES:
    ytcaptions info CLkkj3aka4g                              # List available tracks
    ytcaptions transcript CLkkj3aka4g                        # First track, indented JSON
    ytcaptions transcript -l es -f json CLkkj3aka4g          # Spanish track, compact JSON
    ytcaptions transcript -f srt -o talk.srt \"https://www.youtube.com/watch?v=CLkkj3aka4g\"
    ytcaptions completions bash > ytcaptions.bash            # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json when it exists. Use --config-path to point
    at a different file. Command line options override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // Info until the configuration says otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: CommandLineOptions) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "ytcaptions", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load_or_default(&cli.config_path)?;
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Info { reference, output, force_overwrite } => {
            let listing = controller.info(&reference).await?;
            controller.write_output(&listing, output.as_deref(), force_overwrite)?;
        }
        Commands::Transcript { reference, language, format, output, force_overwrite } => {
            let transcript = controller
                .transcript(&reference, language.as_deref(), format.map(Into::into))
                .await?;
            controller.write_output(&transcript, output.as_deref(), force_overwrite)?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
