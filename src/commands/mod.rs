pub mod export;
pub mod init;
pub mod list;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Fetch issues and export them to a report file")]
    Export(export::ExportArgs),
    #[command(about = "Fetch issues and display them in the terminal")]
    List(list::ListArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Export(args) => export::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
        }
    }
}
