//! todo delete command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::task::Task;

pub struct DeleteOptions {
    /// 1-based list position, or a raw task id when `by_id` is set
    pub position: usize,
    pub by_id: bool,
    pub data_file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct DeleteReport {
    task: Task,
}

pub fn run(options: DeleteOptions) -> Result<()> {
    let storage = super::open_storage(options.data_file)?;
    let mut store = storage.load()?;

    let id = if options.by_id {
        options.position as u64
    } else {
        store.id_at_position(options.position)?
    };

    let task = store.delete(id)?;
    storage.save(&store)?;

    let human = if options.by_id {
        format!("Deleted task {}: {}", task.id, task.description)
    } else {
        format!("Deleted task #{}: {}", options.position, task.description)
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "delete",
        &DeleteReport { task },
        &human,
    )
}
