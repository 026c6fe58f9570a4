//! todo list command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, format_task_line, OutputOptions};
use crate::task::Task;

pub struct ListOptions {
    pub data_file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ListReport {
    tasks: Vec<Task>,
}

pub fn run(options: ListOptions) -> Result<()> {
    let storage = super::open_storage(options.data_file)?;
    let store = storage.load()?;
    // List never mutates, but saving keeps the load/save round-trip uniform
    // across commands and materializes the file on first run.
    storage.save(&store)?;

    let human = if store.is_empty() {
        "No tasks found".to_string()
    } else {
        let mut lines = vec!["Tasks:".to_string()];
        for (index, task) in store.list().iter().enumerate() {
            lines.push(format_task_line(index + 1, task));
        }
        lines.join("\n")
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &ListReport {
            tasks: store.list().to_vec(),
        },
        &human,
    )
}
