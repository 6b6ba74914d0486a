use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rebuild the .cursor rule bundles from the rules/ document tree"
)]
pub struct Cli {
    /// Project root containing rules/ and .cursor/ (falls back to
    /// MDC_BUILDER_ROOT, then the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}
