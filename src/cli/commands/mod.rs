//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the view
//! manifest once, seeds a container from it and routes the subcommand to
//! its implementation.

pub mod call;
pub mod dispatcher;
pub mod display;
pub mod find;
pub mod list;
pub mod pluck;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
