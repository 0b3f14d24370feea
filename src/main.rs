//! CLI entry point for ofexport

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ofexport::{
    ExportConfig, ExportError, Exporter, Formatter, JsonFormatter, MarkdownFormatter, Node,
    OutputConfig, OutputError, Stats, TextFormatter, XmlFormatter, load_tree,
    load_tree_from_reader, traverse,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented outline
    #[default]
    Text,
    /// Headings and checkbox lists
    Markdown,
    /// The tree as JSON, readable as input again
    Json,
    /// The tree as XML, one element per node
    Xml,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ofexport")]
#[command(about = "Export a task tree as text, Markdown, JSON or XML")]
#[command(version)]
struct Args {
    /// JSON task document to read ("-" for stdin)
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: OutputFormat,

    /// Keep tasks whose name matches REGEX (and their parents)
    #[arg(short = 't', long = "tasks", value_name = "REGEX")]
    tasks: Option<String>,

    /// Keep projects whose name matches GLOB
    #[arg(short = 'p', long = "project", value_name = "GLOB")]
    project: Option<String>,

    /// Keep flagged tasks only
    #[arg(long = "flagged")]
    flagged: bool,

    /// Keep tasks due within DURATION from today (e.g. 3d, 2w)
    #[arg(long = "due-within", value_name = "DURATION")]
    due_within: Option<String>,

    /// Hide completed tasks
    #[arg(long = "hide-completed")]
    hide_completed: bool,

    /// Remove projects, folders and contexts left without tasks
    #[arg(long = "prune")]
    prune: bool,

    /// Sort every level by name
    #[arg(short = 's', long = "sort")]
    sort: bool,

    /// Show project and task notes
    #[arg(short = 'n', long = "notes")]
    notes: bool,

    /// Descend only N levels deep (applies to every format and --stats)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print node counts instead of the tree
    #[arg(long = "stats")]
    stats: bool,

    /// Log traversal details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Parse a duration string like "3d" or "2w" using humantime.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Initialize tracing on stderr so stdout carries only the export.
fn init_tracing(verbose: bool) {
    let default = if verbose { "ofexport=debug" } else { "ofexport=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(file: &Path) -> Result<Node, ExportError> {
    if file.as_os_str() == "-" {
        load_tree_from_reader(io::stdin().lock())
    } else {
        load_tree(file)
    }
}

fn run(args: &Args, today: NaiveDate) -> Result<(), ExportError> {
    let due_within = args.due_within.as_ref().map(|s| {
        parse_duration_string(s).unwrap_or_else(|e| {
            eprintln!("ofexport: invalid --due-within duration '{}': {}", s, e);
            process::exit(1);
        })
    });

    let export_config = ExportConfig {
        task_pattern: args.tasks.clone(),
        project_pattern: args.project.clone(),
        flagged_only: args.flagged,
        due_within,
        hide_completed: args.hide_completed,
        prune: args.prune,
        sort: args.sort,
        max_depth: args.level,
    };
    let mut exporter = Exporter::new(&export_config, today)?;

    let mut root = read_input(&args.file)?;
    exporter.prepare(&mut root)?;

    if args.stats {
        let mut stats = Stats::new();
        traverse(&mut stats, &mut root)?;
        let stats = stats.finalize();
        if args.format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(&stats).map_err(OutputError::from)?;
            println!("{}", json);
        } else {
            println!("{}", stats);
        }
        return Ok(());
    }

    let use_color = args.format == OutputFormat::Text && should_use_color(args.color);
    let output_config = OutputConfig {
        use_color,
        show_notes: args.notes,
        today: Some(today),
        ..Default::default()
    };

    match args.format {
        OutputFormat::Text => {
            let choice = if use_color {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            };
            let stdout = StandardStream::stdout(choice);
            TextFormatter::new(output_config, stdout).format(&mut root)?;
        }
        OutputFormat::Markdown => {
            MarkdownFormatter::new(output_config, io::stdout().lock()).format(&mut root)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(io::stdout().lock()).format(&mut root)?;
        }
        OutputFormat::Xml => {
            XmlFormatter::new(io::stdout().lock()).format(&mut root)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let today = Local::now().date_naive();
    if let Err(e) = run(&args, today) {
        eprintln!("ofexport: {}", e);
        process::exit(1);
    }
}
