//! gen-fixtures: writes the pickle relay reference corpus.
//!
//! ```text
//! gen-fixtures --out-dir testdata --protocol 0
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pickle_corpus::{generate, CatalogBuilder, GeneratorConfig};
use pickle_pack::Protocol;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gen-fixtures",
    version,
    about = "Generate pickle batches and the plaintext lines a relay must emit for them"
)]
struct Args {
    #[arg(short, long, env = "PICKLE_CORPUS_OUT_DIR", default_value = "testdata")]
    #[arg(help = "Directory receiving the artifacts")]
    out_dir: PathBuf,

    #[arg(short, long, env = "PICKLE_CORPUS_PROTOCOL", default_value_t = 0)]
    #[arg(value_parser = clap::value_parser!(u8).range(0..=2))]
    #[arg(help = "Pickle protocol version")]
    protocol: u8,

    #[arg(long, env = "PICKLE_CORPUS_EXTENSION", default_value = "pickle")]
    #[arg(help = "Extension of the binary artifacts")]
    extension: String,

    #[arg(long, env = "PICKLE_CORPUS_TIMESTAMP")]
    #[arg(help = "Fixed capture time in epoch seconds, for reproducible runs")]
    timestamp: Option<f64>,

    #[arg(long, value_delimiter = ',')]
    #[arg(help = "Only generate these fixtures (comma separated)")]
    only: Vec<String>,

    #[arg(long, help = "Print fixture names and exit")]
    list: bool,

    #[arg(long, env = "PICKLE_CORPUS_LOG", default_value = "info")]
    #[arg(help = "Log filter used when RUST_LOG is unset")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log)?;

    if args.list {
        for fixture in &CatalogBuilder::at(0.0).build() {
            println!("{}\t{:?}", fixture.name, fixture.class);
        }
        return Ok(());
    }

    let mut config = GeneratorConfig::new(args.out_dir)
        .with_protocol(Protocol::try_from(args.protocol)?)
        .with_extension(args.extension)
        .with_only(args.only);
    if let Some(ts) = args.timestamp {
        config = config.with_timestamp(ts);
    }

    generate(&config)
        .with_context(|| format!("generating fixtures into {}", config.out_dir.display()))?;
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log filter `{level}`"))?,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init()
        .context("installing log subscriber")?;
    Ok(())
}
