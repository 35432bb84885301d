//! express-kit CLI — scaffold Express backend services from the terminal.
//!
//! One command, `new`, creates a runnable project skeleton: JavaScript or
//! TypeScript, with Mongoose, Prisma, Sequelize, or no database wiring.
//! Axes not given as flags are collected interactively.
//!
//! The customization pipeline itself lives in [`express_kit_core`].

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};

use express_kit_core::plan::{LanguageVariant, OrmChoice};

#[derive(Parser)]
#[command(
    name = "express-kit",
    about = "Scaffold Express backend services — JavaScript or TypeScript, with optional ORM wiring",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new Express project
    New {
        /// App name (creates a directory with this name)
        name: Option<String>,

        /// Language variant
        #[arg(long, value_enum)]
        variant: Option<VariantChoice>,

        /// Data-access library to wire in
        #[arg(long, value_enum)]
        orm: Option<OrmArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VariantChoice {
    #[value(alias = "js")]
    Javascript,
    #[value(alias = "ts")]
    Typescript,
}

impl VariantChoice {
    pub fn to_variant(self) -> LanguageVariant {
        match self {
            Self::Javascript => LanguageVariant::JavaScript,
            Self::Typescript => LanguageVariant::TypeScript,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OrmArg {
    None,
    Mongoose,
    Prisma,
    Sequelize,
}

impl OrmArg {
    pub fn to_choice(self) -> OrmChoice {
        match self {
            Self::None => OrmChoice::None,
            Self::Mongoose => OrmChoice::Mongoose,
            Self::Prisma => OrmChoice::Prisma,
            Self::Sequelize => OrmChoice::Sequelize,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::New { name, variant, orm } => {
            commands::new::run(name, variant, orm).await?;
        }
    }

    Ok(())
}
