extern crate crossbeam_channel;
extern crate tokio;

use std::path::PathBuf;

use clap::Parser;
use crossbeam_channel::{unbounded, Sender};
use serde::Serialize;
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use kwix::{
    document::Document,
    error::{ConfigError, Error},
    index::Index,
    normalizer::{Alphabetic, Lowercase, NormalizerPipeline, TrailingPunctuation},
    tokenizer::{Tokenizer, Whitespace},
};

use kwix_repo::{
    cli::{Cli, SearchCommand},
    descriptor::Descriptor,
    engine::KwixFacade,
    query::Query,
    read::{load_manifest, load_noise_words, read_document},
};

const INDEX_CAPACITY: usize = 1_000;

#[derive(Debug, Serialize)]
struct SearchResults {
    first: String,
    second: String,
    documents: Vec<String>,
}

/// Streams `(name, contents)` buffers to the indexing loop, in manifest
/// order, from a dedicated thread with its own runtime. The channel keeps
/// that order, so the index build stays sequential and deterministic.
fn spawn_reader(
    manifest: Vec<PathBuf>,
    tx: Sender<Result<(String, String), Error>>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create runtime in reader thread.");

        rt.block_on(async move {
            for path in manifest {
                let name = path.display().to_string();
                let outcome = read_document(&path).await.map(|buffer| (name, buffer));

                let failed = outcome.is_err();
                if tx.send(outcome).is_err() || failed {
                    break;
                }
            }
        });
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let stopwords = load_noise_words(&cli.noise).await?;
    let manifest = load_manifest(&cli.docs).await?;
    info!(
        documents = manifest.len(),
        noise_words = stopwords.len(),
        "manifest loaded"
    );

    let tokenizer = Tokenizer::Whitespace(Whitespace::new());

    let mut pipeline = NormalizerPipeline::new();
    pipeline.insert(Box::new(TrailingPunctuation::new()));
    pipeline.insert(Box::new(Lowercase::new()));
    pipeline.insert(Box::new(Alphabetic::new()));
    pipeline.insert(Box::new(stopwords));

    let mut engine: KwixFacade<Index<String>> =
        KwixFacade::new(INDEX_CAPACITY, tokenizer, pipeline);

    let (tx, rx) = unbounded();
    let reader = spawn_reader(manifest, tx);

    for outcome in rx {
        let (name, buffer) = outcome?;
        engine.insert(Descriptor::new(name, Document::from(buffer)));
    }

    reader.join().expect("Reader thread panicked.");

    let SearchCommand::Search(search) = cli.command;
    let documents = engine.get(Query::new(&search.first, &search.second));
    info!(matches = documents.len(), "query answered");

    let results = SearchResults {
        first: search.first,
        second: search.second,
        documents,
    };

    let rendered = serde_json::to_string_pretty(&results)
        .map_err(|error| ConfigError::Serialization(error.to_string()))?;
    println!("{rendered}");

    Ok(())
}
