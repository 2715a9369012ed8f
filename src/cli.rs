extern crate clap;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kwix")]
#[command(about = "Index a document collection and search it for two keywords", long_about = None)]
pub struct Cli {
    /// File listing the document files to index, one path per line
    #[arg(long, short = 'd')]
    pub docs: PathBuf,

    /// File of whitespace-separated noise words excluded from indexing
    #[arg(long, short = 'n')]
    pub noise: PathBuf,

    #[command(subcommand)]
    pub command: SearchCommand,
}

#[derive(Debug, Subcommand)]
pub enum SearchCommand {
    Search(Search),
}

/// Ranked OR search over exactly two keywords.
#[derive(Debug, Parser)]
pub struct Search {
    /// First keyword; wins ties in the ranking
    #[arg(long, short = 'f')]
    pub first: String,

    /// Second keyword
    #[arg(long, short = 's')]
    pub second: String,
}
