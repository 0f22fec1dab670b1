use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "acireport",
    version,
    about = "Extracts tenant and physical-domain configuration from an ACI policy backup archive"
)]
pub struct Cli {
    #[arg(short, long, help = "Path to the .tar.gz configuration backup")]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Directory receiving the report files and the analysis log"
    )]
    pub out: PathBuf,

    #[arg(long, help = "Print report rows as machine-readable JSON")]
    pub json: bool,

    #[arg(short, long, help = "Record per-attribute detail on the analysis trail")]
    pub verbose: bool,
}
