//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// viewsitter - inspect a view manifest through a multi-index container.
#[derive(Debug, Parser)]
#[command(name = "viewsitter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the view manifest (defaults to ./views.yml)
    #[arg(short, long, global = true, env = "VIEWSITTER_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List views in container order (default if no command specified)
    List(ListArgs),

    /// Find a single view by cid, model, collection, custom key or position
    Find(FindArgs),

    /// Read one attribute from every view
    Pluck(PluckArgs),

    /// Invoke a method on every view and show the results
    Call(CallArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `find` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FindArgs {
    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// How `find` locates a view. Exactly one must be given.
#[derive(Debug, Clone, Default, clap::Args)]
#[group(required = true, multiple = false)]
pub struct LookupArgs {
    /// Identity token of the view
    #[arg(long)]
    pub cid: Option<String>,

    /// Identity token of the attached model
    #[arg(long)]
    pub model: Option<String>,

    /// Identity token of the attached collection
    #[arg(long)]
    pub collection: Option<String>,

    /// Custom index key (integers and booleans are matched as such)
    #[arg(long)]
    pub custom: Option<String>,

    /// Zero-based position in container order
    #[arg(long)]
    pub index: Option<usize>,
}

/// Arguments for the `pluck` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PluckArgs {
    /// Attribute to read
    pub attribute: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `call` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CallArgs {
    /// Method to invoke
    pub method: String,

    /// Arguments, parsed as JSON when possible and as strings otherwise
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
