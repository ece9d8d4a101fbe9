//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::models::Domain;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "agrimed")]
#[command(about = "Agri-Med retrieval chatbot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .agrimed/
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize agrimed configuration
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Ask a single question
    Ask {
        /// Question text (positional argument)
        question: String,

        /// Domain to consult
        #[arg(short, long, default_value = "medical")]
        domain: Domain,
    },

    /// Interactive chat session
    Chat {
        /// Domain to start in (switchable with /domain)
        #[arg(short, long, default_value = "medical")]
        domain: Domain,
    },

    /// List loaded domains and their index statistics
    Domains,
}
