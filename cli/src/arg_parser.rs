use clap::Parser;
use std::path::PathBuf;

/// Run a batch of analysis modules against a memory image
#[derive(Debug, Parser)]
#[clap(after_help = "ADDITIONAL INFORMATION:
    - Enter/Return during execution prints the currently running modules
    - Example usage:
        $ cli -p /path/to/vol -i /path/to/image.dd -m modules.txt -o out/
")]
pub struct ArgParser {
    /// Path to the analysis tool executable
    #[clap(short = 'p', long = "tool")]
    pub tool: String,
    /// Path to the memory image
    #[clap(short = 'i', long = "image")]
    pub image: String,
    /// Path to the file containing the list of modules (newline delimited)
    #[clap(short = 'm', long = "modules")]
    pub modules: PathBuf,
    /// Path to the output directory
    #[clap(short = 'o', long = "output-dir")]
    pub output_dir: PathBuf,
    /// Maximum number of modules to run concurrently [default: CPUs minus one]
    #[clap(short = 'j', long = "parallel")]
    pub parallel: Option<usize>,
}
