//! CLI entry point for `emlextract`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use emlextract::config::Config;
use emlextract::discover::collect_files;
use emlextract::error::ExtractError;
use emlextract::export::write_report;
use emlextract::extract::{extract_files, ExtractOptions, RandomToken};

#[derive(Parser)]
#[command(name = "emlextract", version, about)]
/// Extract headers, bodies and attachments from .eml files into a JSON report
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// .eml file or directory of .eml files (prompted for when omitted)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory receiving extracted attachments
    #[arg(short, long, value_name = "DIR", env = "EMLEXTRACT_ATTACHMENTS_DIR")]
    attachments_dir: Option<PathBuf>,

    /// Skip files that fail instead of stopping at the first error
    #[arg(long)]
    keep_going: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// One line for problems with the input the user gave, the full chain otherwise.
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ExtractError>() {
        Some(e) if e.is_user_facing() => e.to_string(),
        _ => format!("Error: {err:?}"),
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = emlextract::config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);
    if let Err(e) = &loaded {
        tracing::warn!("{e:#}, using defaults");
    }

    match cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
        None => {
            let path = match cli.path {
                Some(path) => path,
                None => prompt_for_path()?,
            };
            let output = cli
                .output
                .unwrap_or_else(|| config.extract.output_file.clone());
            let mut options = ExtractOptions::default();
            if let Some(dir) = cli
                .attachments_dir
                .or_else(|| config.extract.attachment_dir.clone())
            {
                options.output_dir = dir;
            }
            options.keep_going = cli.keep_going || config.extract.keep_going;
            cmd_extract(&path, &output, &options, &config)
        }
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let log_dir = emlextract::config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "emlextract.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Ask for the input path on stdin.
///
/// Empty input, or a path that does not exist, means the current directory.
fn prompt_for_path() -> anyhow::Result<PathBuf> {
    println!("Enter the path/directory of your file: (If current directory then press enter)");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let candidate = PathBuf::from(line.trim());

    if !candidate.as_os_str().is_empty() && candidate.exists() {
        Ok(candidate)
    } else {
        Ok(std::env::current_dir()?)
    }
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "emlextract", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::stdout().write_all(&buf)?;
    Ok(())
}

/// Extract every email under `path` and write the report to `output`.
fn cmd_extract(
    path: &Path,
    output: &Path,
    options: &ExtractOptions,
    config: &Config,
) -> anyhow::Result<()> {
    let files = collect_files(path, &config.extract.extension)?;

    if !options.output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&options.output_dir)
            .map_err(|e| ExtractError::io(&options.output_dir, e))?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} Extracting [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("valid template")
            .progress_chars("#>-"),
    );

    let mut tokens = RandomToken::new();
    let entries = extract_files(&files, options, &mut tokens, &|done, _total| {
        pb.set_position(done as u64);
    })?;
    pb.finish_and_clear();

    write_report(output, &entries)?;

    println!(
        "\n\nPlease check the {} file for the output result\n",
        output.display()
    );
    Ok(())
}
