mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use vsm_core::corpus::{load_corpus, load_queries, load_stopwords};
use vsm_core::search::{DEFAULT_KEYWORDS, DEFAULT_TOP_K};
use vsm_core::{search_all, SearchOptions, Stopwords, TermFilter, TextCollection};

#[derive(Parser)]
#[command(name = "vsm")]
#[command(about = "Rank paragraphs against queries with TF-IDF cosine similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every query of a query file against the corpus
    Search {
        /// Corpus file (blank-line separated paragraphs) or directory of .txt files
        #[arg(long, default_value = "collection-100.txt")]
        corpus: PathBuf,
        /// Query file, one query per line
        #[arg(long, default_value = "query-10.txt")]
        queries: PathBuf,
        /// Documents reported per query
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
        /// Keywords reported per document
        #[arg(long, default_value_t = DEFAULT_KEYWORDS)]
        keywords: usize,
        /// Stopword file replacing the built-in English list
        #[arg(long)]
        stopwords: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the keyword report of one document
    Doc {
        #[arg(long, default_value = "collection-100.txt")]
        corpus: PathBuf,
        #[arg(long)]
        id: u32,
        #[arg(long, default_value_t = DEFAULT_KEYWORDS)]
        keywords: usize,
        #[arg(long)]
        stopwords: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print collection statistics
    Stats {
        #[arg(long, default_value = "collection-100.txt")]
        corpus: PathBuf,
        #[arg(long)]
        stopwords: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, queries, top_k, keywords, stopwords, json } => {
            let filter = term_filter(stopwords.as_deref())?;
            let collection = build_collection(&corpus, &filter)?;
            let queries = load_queries(&queries, &filter)?;
            let results = search_all(&collection, &queries, SearchOptions { top_k, keywords });
            tracing::info!(queries = results.len(), "search complete");
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                render::results(&mut io::stdout().lock(), &results)?;
            }
        }
        Commands::Doc { corpus, id, keywords, stopwords, json } => {
            let filter = term_filter(stopwords.as_deref())?;
            let collection = build_collection(&corpus, &filter)?;
            let report = collection
                .document_report(id, keywords)
                .with_context(|| format!("document {id} not found ({} documents)", collection.len()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render::document(&mut io::stdout().lock(), &report)?;
            }
        }
        Commands::Stats { corpus, stopwords } => {
            let filter = term_filter(stopwords.as_deref())?;
            let collection = build_collection(&corpus, &filter)?;
            println!("{}", serde_json::to_string_pretty(&collection.stats())?);
        }
    }
    Ok(())
}

fn term_filter(stopwords: Option<&Path>) -> Result<TermFilter> {
    let stopwords = match stopwords {
        Some(path) => load_stopwords(path)?,
        None => Stopwords::english(),
    };
    Ok(TermFilter::new(stopwords))
}

fn build_collection(corpus: &Path, filter: &TermFilter) -> Result<TextCollection> {
    let paragraphs = load_corpus(corpus)?;
    tracing::info!(path = %corpus.display(), paragraphs = paragraphs.len(), "loaded corpus");
    TextCollection::build(&paragraphs, filter).with_context(|| format!("building collection from {}", corpus.display()))
}
