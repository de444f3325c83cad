mod echo;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use lexmetric_core::{
    Analyzer, AnalyzerConfig, BatchRunner, EmptyPolicy, ExtractConfig, FetchConfig, HttpSource, LexiconPaths, Lexicons,
    MetricRecord, Report, ReportFormat, TextDirSource, extract_article_from_html, fetch_file, fetch_stdin,
    read_input_file,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::echo::{
    format_size, print_banner, print_batch_summary, print_error, print_info, print_metrics, print_step, print_success,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the single-document `text` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextFormat {
    Table,
    Csv,
    Json,
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: table, csv, json", s)),
        }
    }
}

/// Compute readability, sentiment and lexical metrics for web articles
#[derive(Parser, Debug)]
#[command(name = "lexmetric")]
#[command(author = "lexmetric contributors")]
#[command(version)]
#[command(about = "Compute readability and sentiment metrics for web articles", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Lexicon root containing StopWords/ and MasterDictionary/
    #[arg(long, global = true, value_name = "DIR")]
    lexicons: Option<PathBuf>,

    /// Stopword directory (overrides <lexicons>/StopWords)
    #[arg(long, global = true, value_name = "DIR")]
    stopwords: Option<PathBuf>,

    /// Positive word list (overrides <lexicons>/MasterDictionary/positive-words.txt)
    #[arg(long, global = true, value_name = "FILE")]
    positive: Option<PathBuf>,

    /// Negative word list (overrides <lexicons>/MasterDictionary/negative-words.txt)
    #[arg(long, global = true, value_name = "FILE")]
    negative: Option<PathBuf>,

    /// How to treat documents with no words or sentences (skip, zero, zero-record)
    #[arg(long, global = true, default_value = "skip", value_name = "POLICY")]
    empty_policy: EmptyPolicy,

    /// Tokenize text as-is, without inserting word boundaries
    #[arg(long, global = true)]
    no_normalize: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Input list (csv with URL_ID and URL columns)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format (csv, json)
    #[arg(short, long, default_value = "csv", value_name = "FORMAT")]
    format: ReportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Read pre-extracted <URL_ID>.txt files from this directory instead of fetching
    #[arg(long, value_name = "DIR")]
    text_dir: Option<PathBuf>,

    /// Save each extracted article as <URL_ID>.txt in this directory
    #[arg(long, value_name = "DIR")]
    archive_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and analyze every article listed in a URL_ID,URL csv file
    Analyze(AnalyzeArgs),

    /// Analyze a single text file, HTML file, or "-" for stdin
    Text {
        /// Text file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Treat the input as an HTML page and extract its article first
        #[arg(long)]
        html: bool,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table", value_name = "FORMAT")]
        format: TextFormat,
    },

    /// Generate a shell completion script
    Completions {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,lexmetric_core=debug,lexmetric=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn lexicon_paths(args: &Args) -> anyhow::Result<LexiconPaths> {
    let root = match &args.lexicons {
        Some(root) => Some(root.clone()),
        None => LexiconPaths::default_root(),
    };

    let defaults = root.as_deref().map(LexiconPaths::from_root);
    let pick = |explicit: &Option<PathBuf>, fallback: Option<&PathBuf>, what: &str| {
        explicit
            .clone()
            .or_else(|| fallback.cloned())
            .with_context(|| format!("No {} lexicon location: pass --lexicons or --{}", what, what))
    };

    Ok(LexiconPaths {
        stopword_dir: pick(&args.stopwords, defaults.as_ref().map(|d| &d.stopword_dir), "stopwords")?,
        positive: pick(&args.positive, defaults.as_ref().map(|d| &d.positive), "positive")?,
        negative: pick(&args.negative, defaults.as_ref().map(|d| &d.negative), "negative")?,
    })
}

fn load_analyzer(args: &Args) -> anyhow::Result<Analyzer> {
    let paths = lexicon_paths(args)?;
    let lexicons = Lexicons::load(&paths)
        .with_context(|| format!("Failed to load lexicons from {}", paths.stopword_dir.display()))?;

    if args.verbose {
        eprintln!(
            "  {} {} stopwords, {} positive, {} negative",
            "Lexicons:".dimmed(),
            lexicons.stopwords.len().to_string().bright_white(),
            lexicons.positive.len().to_string().bright_white(),
            lexicons.negative.len().to_string().bright_white()
        );
        eprintln!();
    }

    let config = AnalyzerConfig::builder()
        .empty_policy(args.empty_policy)
        .normalize(!args.no_normalize)
        .build();
    Ok(Analyzer::with_config(lexicons, config))
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

async fn run_analyze(args: &Args, opts: &AnalyzeArgs) -> anyhow::Result<()> {
    let started = Instant::now();
    let input = opts.input.as_path();
    let output = opts.output.as_deref();

    if opts.timeout == 0 {
        bail!("--timeout must be at least 1 second");
    }

    if args.verbose {
        print_step(1, 4, &format!("Reading input list {}", input.display().bright_white()));
    }
    let docs = read_input_file(input).with_context(|| format!("Failed to read input list: {}", input.display()))?;
    if args.verbose {
        eprintln!("  {} {}", "Documents:".dimmed(), docs.len().to_string().bright_white());
        eprintln!();
        print_step(2, 4, "Loading lexicons");
    }

    let analyzer = load_analyzer(args)?;
    let mut runner = BatchRunner::new(analyzer);
    if let Some(dir) = &opts.archive_dir {
        runner = runner.with_archive_dir(dir);
    }

    let report = match &opts.text_dir {
        Some(dir) => {
            if args.verbose {
                print_step(3, 4, &format!("Analyzing saved texts in {}", dir.display().bright_white()));
            }
            runner.run(&TextDirSource::new(dir), &docs).await?
        }
        None => {
            if args.verbose {
                print_step(3, 4, "Fetching and analyzing articles");
            }
            let mut fetch_config = FetchConfig { timeout: opts.timeout, ..Default::default() };
            if let Some(ua) = &opts.user_agent {
                fetch_config.user_agent = ua.clone();
            }
            let source = HttpSource::new(fetch_config, ExtractConfig::default()).context("Failed to build HTTP client")?;
            runner.run(&source, &docs).await?
        }
    };

    if args.verbose {
        print_step(4, 4, "Writing report");
    }
    write_report(&report, output, opts.format, opts.pretty)?;

    if args.verbose {
        print_batch_summary(&report.summary(), &report.failures, started.elapsed());
    } else {
        for failure in &report.failures {
            print_error(&failure.to_string());
        }
    }

    if let Some(path) = output {
        print_success(&format!(
            "Report for {} written to {}",
            report.summary(),
            path.display().bright_white()
        ));
    }

    Ok(())
}

fn write_report(report: &Report, output: Option<&Path>, format: ReportFormat, pretty: bool) -> anyhow::Result<()> {
    let mut writer = open_output(output)?;
    report.write(&mut writer, format, pretty).context("Failed to write report")?;
    writer.flush().context("Failed to flush report")?;
    Ok(())
}

fn run_text(args: &Args, input: &str, html: bool, format: TextFormat) -> anyhow::Result<()> {
    let content = if input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(content.len()).bright_white());
        eprintln!();
    }

    let text = if html {
        let article =
            extract_article_from_html(&content, &ExtractConfig::default()).context("Failed to extract article")?;
        if args.verbose {
            if let Some(title) = &article.title {
                eprintln!("  {} {}", "Title:".dimmed(), title.bright_white());
            }
            eprintln!();
        }
        article.text()
    } else {
        content
    };

    if args.verbose {
        print_step(2, 3, "Loading lexicons");
    }
    let analyzer = load_analyzer(args)?;

    if args.verbose {
        print_step(3, 3, "Computing metrics");
    }
    let metrics = analyzer.analyze(&text).context("Failed to analyze text")?;

    let name = if input == "-" {
        "stdin".to_string()
    } else {
        Path::new(input)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.to_string())
    };

    match format {
        TextFormat::Table => print_metrics(&name, &metrics),
        TextFormat::Csv | TextFormat::Json => {
            let mut report = Report::new();
            report.push_record(MetricRecord::new(name, input, metrics));
            let report_format = if format == TextFormat::Csv { ReportFormat::Csv } else { ReportFormat::Json };
            write_report(&report, None, report_format, true)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    match &args.command {
        Command::Analyze(opts) => run_analyze(&args, opts).await,
        Command::Text { input, html, format } => run_text(&args, input, *html, *format),
        Command::Completions { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(*shell, &mut cmd, "lexmetric", &mut io::stdout());
            Ok(())
        }
    }
}
