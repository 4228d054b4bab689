pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blogctl")]
#[command(about = "Operator tooling for the Blog API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign a development token for a user id with JWT_SECRET")]
    Token(commands::token::TokenArgs),

    #[command(about = "Check /health on a running server")]
    Ping(commands::ping::PingArgs),
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Token(args) => commands::token::handle(args),
        Commands::Ping(args) => commands::ping::handle(args).await,
    }
}
