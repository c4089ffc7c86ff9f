use crate::errors::{JobError, Result};
use crate::registry::RunRegistry;
use crate::types::BatchSpec;

use bytes::BytesMut;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};

/// Run one module to completion, streaming the tool's stdout into the
/// module's output file.
///
/// The module is visible in the registry from just before the tool is spawned
/// until it terminates, on every path. If the output file cannot be created
/// the module is skipped without ever being registered.
pub async fn run_module(
    spec: &BatchSpec,
    module: &str,
    registry: &RunRegistry,
) -> Result<Duration> {
    let path = spec.output_path(module);
    let outfile = File::create(&path)
        .await
        .map_err(|source| JobError::OutputFile {
            path: path.clone(),
            source,
        })?;

    let started = Instant::now();
    registry.record(module.to_string(), started);
    let result = execute(spec, module, outfile).await;
    registry.forget(module);
    result.map(|()| started.elapsed())
}

async fn execute(spec: &BatchSpec, module: &str, mut outfile: File) -> Result<()> {
    let mut child = Command::new(&spec.tool)
        .arg("-f")
        .arg(&spec.image)
        .arg("-r")
        .arg("csv")
        .arg(module)
        // the status monitor owns the process's stdin
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        // the tool writes progress spam to stderr; drop it
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| JobError::Spawn {
            tool: spec.tool.clone(),
            source,
        })?;

    pump_stdout(&mut child, &mut outfile, module).await?;

    let status = child.wait().await.map_err(|source| JobError::ModuleIo {
        module: module.to_string(),
        source,
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(JobError::ModuleFailed { status })
    }
}

/// Move the child's stdout into the sink until EOF.
async fn pump_stdout(child: &mut Child, sink: &mut File, module: &str) -> Result<()> {
    let io_err = |source| JobError::ModuleIo {
        module: module.to_string(),
        source,
    };
    if let Some(mut stdout) = child.stdout.take() {
        let mut buf = BytesMut::with_capacity(4096);
        loop {
            match stdout.read_buf(&mut buf).await {
                Ok(n) if n > 0 => {
                    // move the bytes out of buf and into the file
                    sink.write_all(&buf.split()).await.map_err(io_err)?;
                }
                Ok(_) => break,
                Err(source) => return Err(io_err(source)),
            }
        }
        sink.flush().await.map_err(io_err)?;
    }
    Ok(())
}
