use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("failed to create output file {path}: {source}")]
    OutputFile { path: PathBuf, source: io::Error },
    #[error("failed to launch {tool}: {source}")]
    Spawn { tool: String, source: io::Error },
    #[error("i/o error while running module {module}: {source}")]
    ModuleIo { module: String, source: io::Error },
    #[error("module exited with {status}")]
    ModuleFailed { status: ExitStatus },
}

pub type Result<T> = result::Result<T, JobError>;
