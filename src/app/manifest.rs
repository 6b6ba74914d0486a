use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::app::models::ManifestEntry;

const PREAMBLE: &str = "Cursor rules are user provided instructions for the AI to follow to help work with the codebase.\n\
They may or may not be relevant to the task at hand. If they are, use the fetch_rules tool to fetch the full rule.\n\
Some rules may be automatically attached to the conversation if the user attaches a file that matches the rule's glob, and won't need to be fetched.\n\n";

/// Render the instruction index: preamble, then one `id: description` line
/// per entry in catalog order. Skipped bundles are still listed: the index
/// documents the catalog, not the outcome of the last run.
pub fn render(entries: &[ManifestEntry]) -> String {
    let mut content = String::from(PREAMBLE);
    for entry in entries {
        content.push_str(&format!("{}: {}\n", entry.id, entry.description));
    }
    content
}

pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, render(entries))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Generated {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::manifest_entries;

    #[test]
    fn lists_every_entry_in_declaration_order() {
        let entries = manifest_entries();
        let rendered = render(&entries);

        let mut last_position = 0;
        for entry in &entries {
            let line = format!("{}: {}\n", entry.id, entry.description);
            let position = rendered.find(&line).expect("entry missing from manifest");
            assert!(position >= last_position, "{} out of order", entry.id);
            last_position = position;
        }
    }

    #[test]
    fn starts_with_the_preamble() {
        let rendered = render(&manifest_entries());
        assert!(rendered.starts_with("Cursor rules are user provided instructions"));
    }
}
