//! todo add command implementation

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::{emit_success, OutputOptions};
use crate::task::Task;

pub struct AddOptions {
    pub description: String,
    pub data_file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AddReport {
    task: Task,
}

pub fn run(options: AddOptions) -> Result<()> {
    if options.description.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "task description must not be empty".to_string(),
        ));
    }

    let storage = super::open_storage(options.data_file)?;
    let mut store = storage.load()?;
    let task = store.add(options.description);
    storage.save(&store)?;

    let human = format!("Added task #{}: {}", task.id, task.description);
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &AddReport { task },
        &human,
    )
}
