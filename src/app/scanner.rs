use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::app::models::SortBy;

/// Find every file under `source_dir` whose path relative to it matches
/// `pattern`. This is a plain walk: no gitignore or hidden-file filtering,
/// so the match set depends only on the directory contents. Order of the
/// returned paths is not significant; callers sort via [`sort_files`].
pub fn discover_files(source_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = build_matcher(pattern)?;
    let mut files = Vec::new();

    let walker = WalkBuilder::new(source_dir).standard_filters(false).build();
    for result in walker {
        let entry =
            result.with_context(|| format!("Failed to walk {}", source_dir.display()))?;
        if !entry.file_type().map_or(false, |t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = match diff_paths(path, source_dir) {
            Some(rel) => rel,
            None => continue,
        };
        if matcher.is_match(&relative) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Order files according to the bundle's sort discipline.
pub fn sort_files(files: &mut [PathBuf], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => files.sort_by(|a, b| compare_by_name(a, b)),
        SortBy::NumericPrefix => files.sort_by(|a, b| compare_by_prefix(a, b)),
    }
}

/// Extract the leading digit run of a filename when it is followed by an
/// underscore, e.g. `10_ten.md` -> 10. Filenames without the prefix return
/// `None` and sort after every prefixed one.
pub fn numeric_prefix(filename: &str) -> Option<u64> {
    let end = filename.find(|c: char| !c.is_ascii_digit())?;
    if end == 0 || !filename[end..].starts_with('_') {
        return None;
    }
    filename[..end].parse().ok()
}

fn compare_by_name(a: &Path, b: &Path) -> Ordering {
    let dir_a = a.parent().unwrap_or_else(|| Path::new(""));
    let dir_b = b.parent().unwrap_or_else(|| Path::new(""));

    dir_a.cmp(dir_b).then_with(|| compare_by_prefix(a, b))
}

fn compare_by_prefix(a: &Path, b: &Path) -> Ordering {
    let name_a = file_name_str(a);
    let name_b = file_name_str(b);

    let key_a = numeric_prefix(name_a).unwrap_or(u64::MAX);
    let key_b = numeric_prefix(name_b).unwrap_or(u64::MAX);

    key_a.cmp(&key_b).then_with(|| name_a.cmp(name_b))
}

fn file_name_str(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// A single glob compiled so that `*` stays within one path component;
/// only an explicit `**` crosses directory boundaries.
fn build_matcher(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
    Ok(glob.compile_matcher())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn numeric_prefix_extraction() {
        assert_eq!(numeric_prefix("1_one.md"), Some(1));
        assert_eq!(numeric_prefix("10_ten.md"), Some(10));
        assert_eq!(numeric_prefix("03_three.md"), Some(3));
        assert_eq!(numeric_prefix("notes.md"), None);
        assert_eq!(numeric_prefix("2025.md"), None);
        assert_eq!(numeric_prefix("_intro.md"), None);
    }

    #[test]
    fn name_sort_orders_directories_then_prefixes() {
        let mut files = vec![
            PathBuf::from("rules/b/2_two.md"),
            PathBuf::from("rules/a/10_ten.md"),
            PathBuf::from("rules/a/1_one.md"),
        ];
        sort_files(&mut files, SortBy::Name);

        assert_eq!(
            files,
            vec![
                PathBuf::from("rules/a/1_one.md"),
                PathBuf::from("rules/a/10_ten.md"),
                PathBuf::from("rules/b/2_two.md"),
            ]
        );
    }

    #[test]
    fn unprefixed_files_sort_last_within_a_directory() {
        let mut files = vec![
            PathBuf::from("rules/notes.md"),
            PathBuf::from("rules/10_b.md"),
            PathBuf::from("rules/appendix.md"),
            PathBuf::from("rules/2_a.md"),
        ];
        sort_files(&mut files, SortBy::Name);

        assert_eq!(
            files,
            vec![
                PathBuf::from("rules/2_a.md"),
                PathBuf::from("rules/10_b.md"),
                PathBuf::from("rules/appendix.md"),
                PathBuf::from("rules/notes.md"),
            ]
        );
    }

    #[test]
    fn prefix_sort_ignores_directories() {
        let mut files = vec![
            PathBuf::from("rules/b/2_second.md"),
            PathBuf::from("rules/a/3_third.md"),
            PathBuf::from("rules/c/1_first.md"),
        ];
        sort_files(&mut files, SortBy::NumericPrefix);

        assert_eq!(
            files,
            vec![
                PathBuf::from("rules/c/1_first.md"),
                PathBuf::from("rules/b/2_second.md"),
                PathBuf::from("rules/a/3_third.md"),
            ]
        );
    }

    #[test]
    fn non_recursive_pattern_stays_in_the_top_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        fs::create_dir(dir.join("sub")).unwrap();
        fs::write(dir.join("top.md"), "top").unwrap();
        fs::write(dir.join("sub").join("nested.md"), "nested").unwrap();

        let flat = discover_files(dir, "*.md").unwrap();
        assert_eq!(flat, vec![dir.join("top.md")]);

        let mut deep = discover_files(dir, "**/*.md").unwrap();
        deep.sort();
        assert_eq!(deep, vec![dir.join("sub").join("nested.md"), dir.join("top.md")]);
    }

    #[test]
    fn discovery_skips_non_matching_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("1_doc.md"), "doc").unwrap();
        fs::write(dir.join("image.png"), "png").unwrap();

        let found = discover_files(dir, "**/*.md").unwrap();
        assert_eq!(found, vec![dir.join("1_doc.md")]);
    }
}
