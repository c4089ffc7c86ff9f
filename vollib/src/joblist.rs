//! Parsing of the newline-delimited module list.

use crate::types::Module;

/// Each non-blank line is one module name. Order is preserved and duplicate
/// names are kept as independent jobs.
pub fn parse(contents: &str) -> Vec<Module> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
