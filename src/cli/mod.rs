//! Command-line interface for todo
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule. The root command also
//! carries the legacy single-flag mode (`todo -a "buy milk"`, `todo -l`,
//! `todo -c 1`, `todo -d 2`) kept for compatibility with older releases.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::storage::Storage;

mod add;
mod complete;
mod delete;
mod list;

/// todo - personal task list manager
///
/// Add, list, complete, and delete short text tasks. State is persisted
/// across invocations in a single JSON file.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data file (defaults to data/todos.json)
    #[arg(long, global = true, env = "TODO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Add a new task (legacy flag mode)
    #[arg(short = 'a', long = "add", value_name = "DESCRIPTION")]
    pub legacy_add: Option<String>,

    /// List all tasks (legacy flag mode)
    #[arg(short = 'l', long = "list")]
    pub legacy_list: bool,

    /// Complete the task at a list position (legacy flag mode)
    #[arg(short = 'c', long = "complete", value_name = "POSITION")]
    pub legacy_complete: Option<usize>,

    /// Delete the task at a list position (legacy flag mode)
    #[arg(short = 'd', long = "delete", value_name = "POSITION")]
    pub legacy_delete: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// List all tasks
    #[command(alias = "ls")]
    List,

    /// Mark a task as complete
    #[command(aliases = ["done", "c"])]
    Complete {
        /// List position as shown by `todo list` (or a task id with --by-id)
        position: usize,

        /// Treat the argument as a raw task id instead of a list position
        #[arg(long)]
        by_id: bool,
    },

    /// Delete a task
    #[command(aliases = ["rm", "d"])]
    Delete {
        /// List position as shown by `todo list` (or a task id with --by-id)
        position: usize,

        /// Treat the argument as a raw task id instead of a list position
        #[arg(long)]
        by_id: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Add { description }) => add::run(add::AddOptions {
                description,
                data_file: self.data_file,
                json: self.json,
                quiet: self.quiet,
            }),
            Some(Commands::List) => list::run(list::ListOptions {
                data_file: self.data_file,
                json: self.json,
                quiet: self.quiet,
            }),
            Some(Commands::Complete { position, by_id }) => {
                complete::run(complete::CompleteOptions {
                    position,
                    by_id,
                    data_file: self.data_file,
                    json: self.json,
                    quiet: self.quiet,
                })
            }
            Some(Commands::Delete { position, by_id }) => delete::run(delete::DeleteOptions {
                position,
                by_id,
                data_file: self.data_file,
                json: self.json,
                quiet: self.quiet,
            }),
            None => self.run_legacy(),
        }
    }

    /// Handle the legacy flag mode used before subcommands existed
    fn run_legacy(self) -> Result<()> {
        if let Some(description) = self.legacy_add {
            return add::run(add::AddOptions {
                description,
                data_file: self.data_file,
                json: self.json,
                quiet: self.quiet,
            });
        }

        if self.legacy_list {
            return list::run(list::ListOptions {
                data_file: self.data_file,
                json: self.json,
                quiet: self.quiet,
            });
        }

        if let Some(position) = self.legacy_complete {
            return complete::run(complete::CompleteOptions {
                position,
                by_id: false,
                data_file: self.data_file,
                json: self.json,
                quiet: self.quiet,
            });
        }

        if let Some(position) = self.legacy_delete {
            return delete::run(delete::DeleteOptions {
                position,
                by_id: false,
                data_file: self.data_file,
                json: self.json,
                quiet: self.quiet,
            });
        }

        // No subcommand and no legacy flag
        let mut command = Cli::command();
        let _ = command.print_help();
        println!();
        Err(Error::InvalidArgument(
            "no command given (try `todo add`, `todo list`, `todo complete`, `todo delete`)"
                .to_string(),
        ))
    }
}

/// Build the storage manager for this invocation, resolving the data file
/// from the flag, the environment, the config file, and the default.
fn open_storage(data_file: Option<PathBuf>) -> Result<Storage> {
    let config = Config::load()?;
    Ok(Storage::new(config.resolve_data_file(data_file)))
}
