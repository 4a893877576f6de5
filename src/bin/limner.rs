use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "limner", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline: analyze, pick a concept, compile the prompt,
    /// invoke the generation backend, and save a project folder.
    Generate(GenerateArgs),
    /// Print the content analysis and candidate concepts as JSON.
    Analyze(AnalyzeArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Content description to illustrate.
    #[arg(required_unless_present = "content_file", conflicts_with = "content_file")]
    content: Option<String>,

    /// Read the content description from a file instead.
    #[arg(long)]
    content_file: Option<PathBuf>,

    /// Output root for project folders.
    #[arg(long, default_value = "brand-projects")]
    out: PathBuf,

    /// Directory holding the brand guideline documents.
    #[arg(long, default_value = "brand")]
    guidelines: PathBuf,

    /// Number of concept candidates to generate.
    #[arg(long, default_value_t = limner::DEFAULT_CONCEPT_COUNT)]
    count: usize,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Content description to analyze.
    content: String,

    /// Number of concept candidates to generate.
    #[arg(long, default_value_t = limner::DEFAULT_CONCEPT_COUNT)]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Analyze(args) => cmd_analyze(args),
    }
}

fn read_content(args: &GenerateArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.content_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("read content file '{}'", path.display()));
    }
    // clap guarantees one of the two is present.
    Ok(args.content.clone().unwrap_or_default())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let content = read_content(&args)?;

    let store = limner::FsGuidelineStore::new(&args.guidelines);
    let guidelines = limner::GuidelineSet::load(&store);

    let client = limner::PlaceholderClient;
    let selector = limner::SelectFirst;
    let orchestrator = limner::Orchestrator::new(
        guidelines,
        &client,
        &selector,
        limner::ProjectStore::new(&args.out),
        args.count,
    );

    let project = orchestrator.run(&content)?;

    println!("{}", project.path.display());
    Ok(())
}

fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let analysis = limner::analyze(&args.content);
    let concepts = limner::generate_concepts(&analysis, args.count)?;

    let out = serde_json::json!({
        "analysis": &analysis,
        "style_brief": analysis.style.brief(),
        "concepts": concepts,
    });
    println!("{}", serde_json::to_string_pretty(&out).context("encode analysis JSON")?);
    Ok(())
}
