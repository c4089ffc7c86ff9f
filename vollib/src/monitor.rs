use crate::registry::RunRegistry;

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const HEADER: &str = "->->->->->->->->->-> Currently running modules <-<-<-<-<-<-<-<-<-<-";
const FOOTER: &str = "->->->->->->->->->->->->->->-> End <-<-<-<-<-<-<-<-<-<-<-<-<-<-<-";

/// Spawn the interactive status monitor.
///
/// Every line read from stdin (content ignored) prints a snapshot of the
/// in-flight modules with their runtimes. The task is read-only and lives
/// until stdin closes or the process exits; the batch never waits for it.
pub fn spawn_status_monitor(registry: RunRegistry) {
    tokio::spawn(async move {
        let stdin = BufReader::new(io::stdin());
        let _ = watch(stdin, io::stdout(), registry).await;
    });
}

async fn watch<R, W>(mut input: R, mut out: W, registry: RunRegistry) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).await? == 0 {
            return Ok(()); // control stream closed
        }
        // the snapshot is an owned copy, so nothing is locked while printing
        let mut report = format!("\n{}\n", HEADER);
        for (module, started) in registry.snapshot().await {
            report.push_str(&format!(
                "Module: {}, Runtime: {:.2} seconds\n",
                module,
                started.elapsed().as_secs_f64()
            ));
        }
        report.push_str(&format!("{}\n\n", FOOTER));
        out.write_all(report.as_bytes()).await?;
        out.flush().await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn prints_one_line_per_in_flight_module() {
        let registry = RunRegistry::spawn();
        registry.record("pslist".into(), Instant::now());
        registry.record("netscan".into(), Instant::now());

        let mut out = Vec::new();
        watch(&b"\n"[..], &mut out, registry).await.expect("watch");

        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.contains(HEADER));
        assert!(printed.contains("Module: pslist, Runtime:"));
        assert!(printed.contains("Module: netscan, Runtime:"));
        assert!(printed.contains(FOOTER));
    }

    #[tokio::test]
    async fn empty_registry_prints_only_header_and_footer() {
        let registry = RunRegistry::spawn();

        let mut out = Vec::new();
        watch(&b"\n"[..], &mut out, registry).await.expect("watch");

        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.contains(HEADER));
        assert!(printed.contains(FOOTER));
        assert!(!printed.contains("Module:"));
    }

    #[tokio::test]
    async fn one_snapshot_per_input_line() {
        let registry = RunRegistry::spawn();

        let mut out = Vec::new();
        watch(&b"\n\n\n"[..], &mut out, registry).await.expect("watch");

        let printed = String::from_utf8(out).expect("utf8");
        assert_eq!(printed.matches(HEADER).count(), 3);
    }
}
