use crate::types::BatchSpec;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable shell script that stands in for the analysis tool.
/// It is invoked as `tool -f <image> -r csv <module>`, so `$5` is the module.
pub fn write_fake_tool(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake_tool.sh");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write fake tool");
    let mut perms = fs::metadata(&path).expect("stat fake tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod fake tool");
    path
}

pub fn batch_spec(dir: &Path, tool: &Path) -> BatchSpec {
    BatchSpec {
        tool: tool.to_string_lossy().into_owned(),
        image: "/evidence/memdump.raw".into(),
        output_dir: dir.to_path_buf(),
    }
}
