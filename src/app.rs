// Declare modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod manifest;
pub mod models;
pub mod scanner;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use self::cli::Cli;
use self::models::RuleConfig;

/// Initializes components and orchestrates the build.
pub fn run() -> Result<()> {
    // 1. Parse args
    let args = Cli::parse();

    // 2. Resolve the project root once; everything downstream takes it
    //    explicitly.
    let root = config::resolve_root(&args)?;

    // 3. Reset previously generated bundles so nothing stale survives
    builder::reset_output_dir(&root.join(config::RULES_DIR))?;

    // 4. Build each bundle, strictly in catalog order
    for rule in config::rule_configurations() {
        build_bundle(&root, &rule)?;
    }

    // 5. Emit the instruction index, skipped bundles included
    let manifest_path = root.join(config::MANIFEST_PATH);
    manifest::write_manifest(&manifest_path, &config::manifest_entries())?;

    log::info!("All mdc files have been successfully generated!");
    Ok(())
}

/// Build one `.mdc` bundle. A missing source directory or an empty match
/// set is a warning and a skip; any other I/O failure aborts the run.
fn build_bundle(root: &Path, rule: &RuleConfig) -> Result<()> {
    let source_dir = root.join(rule.source_dir);
    if !source_dir.is_dir() {
        log::warn!(
            "Source directory {} does not exist, skipping...",
            rule.source_dir
        );
        return Ok(());
    }

    let mut files = scanner::discover_files(&source_dir, rule.file_pattern)?;
    if files.is_empty() {
        log::warn!("No files found in {}, skipping...", rule.source_dir);
        return Ok(());
    }
    scanner::sort_files(&mut files, rule.sort_by);

    let content = builder::assemble(rule.header, &files, &source_dir)?;
    builder::write_artifact(&root.join(rule.output), &content)?;

    log::info!(
        "Generated {} from {} files in {}",
        rule.output,
        files.len(),
        rule.source_dir
    );
    Ok(())
}
