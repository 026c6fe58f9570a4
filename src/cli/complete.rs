//! todo complete command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::task::Task;

pub struct CompleteOptions {
    /// 1-based list position, or a raw task id when `by_id` is set
    pub position: usize,
    pub by_id: bool,
    pub data_file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct CompleteReport {
    task: Task,
}

pub fn run(options: CompleteOptions) -> Result<()> {
    let storage = super::open_storage(options.data_file)?;
    let mut store = storage.load()?;

    let id = if options.by_id {
        options.position as u64
    } else {
        store.id_at_position(options.position)?
    };

    let task = store.complete(id)?.clone();
    storage.save(&store)?;

    let human = if options.by_id {
        format!("Completed task {}: {}", task.id, task.description)
    } else {
        format!("Completed task #{}: {}", options.position, task.description)
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "complete",
        &CompleteReport { task },
        &human,
    )
}
