use std::{
    io::{self, Write},
    num::NonZeroUsize,
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use questions::{
    corpus::load_corpus,
    search::{SearchConfig, SearchEngine, SearchResult},
    tokenizer::{StopWords, Tokenizer},
    Result,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory of .txt files to answer from
    corpus: PathBuf,

    /// Number of files shortlisted by TF-IDF
    #[arg(long, default_value = "5")]
    file_matches: NonZeroUsize,

    /// Number of sentences to print
    #[arg(long, default_value = "1")]
    sentence_matches: NonZeroUsize,

    /// File with one stopword per line, replacing the English list
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Answer this query instead of prompting for one
    #[arg(short, long)]
    query: Option<String>,

    /// Print results as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("questions={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_query() -> Result<String> {
    print!("Query: ");
    io::stdout().flush()?;

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

fn print_results(results: &[SearchResult], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        for result in results {
            println!("{}", result.sentence);
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let stop_words = match &args.stop_words {
        Some(path) => StopWords::from_path(path)?,
        None => StopWords::english(),
    };
    let tokenizer = Tokenizer::with_stop_words(stop_words)?;
    let config = SearchConfig::new(args.file_matches.get(), args.sentence_matches.get());

    let corpus = load_corpus(&args.corpus)?;
    let engine = SearchEngine::new(corpus, tokenizer, config)?;

    let query = match args.query {
        Some(query) => query,
        None => read_query()?,
    };

    let results = engine.search(&query)?;
    print_results(&results, args.json)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
