//! `mindmap`: print a keyword mind map for a paragraph as DOT or JSON, and
//! optionally render it to PNG with Graphviz.

use clap::{Parser, ValueEnum};
use rapid_mindmap::render::export::{PngExporter, EXPORT_FILENAME};
use rapid_mindmap::{
    MindMapConfig, MindMapPipeline, MindMapResult, Result, RuleBasedAnalyzer, EXAMPLE_TEXT,
};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Graphviz DOT source
    Dot,
    /// Topic, keywords, evidence and graph as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "mindmap",
    version,
    about = "Generate a keyword mind map from a paragraph"
)]
struct Cli {
    /// Paragraph to analyse (`-` reads stdin); the built-in example is used when omitted
    #[arg(long, short = 'i', value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Label of the central node
    #[arg(long, short = 't')]
    topic: Option<String>,

    /// Number of keywords to rank
    #[arg(long, short = 'k', value_name = "N")]
    keywords: Option<usize>,

    /// Maximum phrase evidence per keyword
    #[arg(long = "max-points", short = 'm', value_name = "N")]
    max_points: Option<usize>,

    /// JSON configuration file; flags override its values
    #[arg(long, short = 'c', value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Format printed to stdout
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Also render a PNG with Graphviz `dot`
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = EXPORT_FILENAME,
        value_hint = clap::ValueHint::FilePath
    )]
    png: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,rapid_mindmap=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_warning() => {
            eprintln!("warning: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let text = read_input(cli.input.as_deref())?;

    let analyzer = RuleBasedAnalyzer::from_config(&config);
    let result = MindMapPipeline::with_config(&analyzer, config).run(&text)?;

    match cli.format {
        OutputFormat::Dot => print!("{}", result.to_dot()),
        OutputFormat::Json => println!("{}", result.to_json()?),
    }

    if let Some(path) = &cli.png {
        export_png(&result, path);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<MindMapConfig> {
    let mut config = match &cli.config {
        Some(path) => MindMapConfig::from_json(&fs::read_to_string(path)?)?,
        None => MindMapConfig::default(),
    };

    if let Some(topic) = &cli.topic {
        config = config.with_topic(topic.clone());
    }
    if let Some(n) = cli.keywords {
        config = config.with_num_keywords(n);
    }
    if let Some(n) = cli.max_points {
        config = config.with_max_per_keyword(n);
    }

    config.validate()?;
    Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        None => Ok(EXAMPLE_TEXT.to_string()),
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

/// Export failures are reported but do not fail the run
fn export_png(result: &MindMapResult, path: &Path) {
    match PngExporter::new().export_to(&result.graph, path) {
        Ok(()) => tracing::info!(path = %path.display(), "saved mind map image"),
        Err(err) => {
            tracing::error!(%err, "png export failed");
            eprintln!("{err}");
        }
    }
}
