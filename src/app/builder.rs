use anyhow::{Context, Result};
use pathdiff::diff_paths;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Make sure the output directory exists and holds no stale bundle text.
///
/// The first run creates the directory; later runs truncate every `.mdc`
/// file already there, so a bundle whose source tree was removed or renamed
/// cannot keep serving old content.
pub fn reset_output_dir(rules_dir: &Path) -> Result<()> {
    if !rules_dir.is_dir() {
        fs::create_dir_all(rules_dir)
            .with_context(|| format!("Failed to create {}", rules_dir.display()))?;
        return Ok(());
    }

    let mut stale = Vec::new();
    for entry in fs::read_dir(rules_dir)
        .with_context(|| format!("Failed to read {}", rules_dir.display()))?
    {
        let path = entry
            .with_context(|| format!("Failed to read {}", rules_dir.display()))?
            .path();
        if path.extension().map_or(false, |ext| ext == "mdc") {
            stale.push(path);
        }
    }
    // read_dir order is platform-dependent
    stale.sort();

    for path in stale {
        log::info!("Clearing content of MDC file: {}", path.display());
        fs::write(&path, "").with_context(|| format!("Failed to clear {}", path.display()))?;
    }

    Ok(())
}

/// Concatenate `files` (already sorted) under `header`.
///
/// A file living below a subdirectory of `source_dir` gets a `## <dir>`
/// heading the first time that subdirectory appears in the sequence; every
/// file body is followed by one blank line.
pub fn assemble(header: &str, files: &[PathBuf], source_dir: &Path) -> Result<String> {
    let mut content = String::from(header);
    let mut seen_sections: HashSet<PathBuf> = HashSet::new();

    for file in files {
        log::info!("Processing file: {}", file.display());
        let body = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        if let Some(section) = section_name(file, source_dir) {
            if seen_sections.insert(section.clone()) {
                content.push_str(&format!("## {}\n\n", section.display()));
            }
        }

        content.push_str(&body);
        content.push_str("\n\n");
    }

    Ok(content)
}

/// Write a finished bundle, creating parent directories as needed and
/// replacing any previous content in full.
pub fn write_artifact(output: &Path, content: &str) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, content).with_context(|| format!("Failed to write {}", output.display()))
}

/// Relative parent directory of `file` under `source_dir`, or `None` for
/// files sitting directly in `source_dir`.
fn section_name(file: &Path, source_dir: &Path) -> Option<PathBuf> {
    let relative = diff_paths(file, source_dir)?;
    let parent = relative.parent()?;
    if parent.as_os_str().is_empty() {
        None
    } else {
        Some(parent.to_path_buf())
    }
}
