use std::path::{Path, PathBuf};

pub type Module = String;

/// Everything shared by every job in one batch: the analysis tool to invoke,
/// the memory image it runs against, and the directory output files land in.
#[derive(Clone, Debug)]
pub struct BatchSpec {
    pub tool: String,
    pub image: String,
    pub output_dir: PathBuf,
}

impl BatchSpec {
    /// Output file for one module: `{output_dir}/{image basename}_{module}.csv`.
    /// Deterministic, so a repeated module name overwrites rather than duplicates.
    pub fn output_path(&self, module: &str) -> PathBuf {
        let image_name = Path::new(&self.image)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.image.clone());
        self.output_dir
            .join(format!("{}_{}.csv", image_name, module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_image_basename() {
        let spec = BatchSpec {
            tool: "vol".into(),
            image: "/evidence/memdump.raw".into(),
            output_dir: PathBuf::from("/tmp/out"),
        };
        assert_eq!(
            spec.output_path("pslist"),
            PathBuf::from("/tmp/out/memdump.raw_pslist.csv")
        );
    }

    #[test]
    fn output_path_is_stable_across_calls() {
        let spec = BatchSpec {
            tool: "vol".into(),
            image: "image.dd".into(),
            output_dir: PathBuf::from("out"),
        };
        assert_eq!(spec.output_path("netscan"), spec.output_path("netscan"));
    }
}
