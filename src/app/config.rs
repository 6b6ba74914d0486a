use crate::app::cli::Cli;
use crate::app::models::{ManifestEntry, RuleConfig, SortBy};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable consulted when `--root` is not given.
pub const ROOT_ENV_VAR: &str = "MDC_BUILDER_ROOT";

/// Directory holding the generated bundles, relative to the project root.
pub const RULES_DIR: &str = ".cursor/rules";

/// Instruction index file, relative to the project root.
pub const MANIFEST_PATH: &str = ".cursor/available_instructions.txt";

/// Resolve the project root once at startup, from the highest-priority
/// source that is set: CLI flag, then [`ROOT_ENV_VAR`], then the working
/// directory. The result is canonical and passed explicitly downstream.
pub fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    let root = match &cli.root {
        Some(path) => path.clone(),
        None => match env::var_os(ROOT_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir().context("Failed to get current directory")?,
        },
    };

    root.canonicalize()
        .with_context(|| format!("Project root {} is not accessible", root.display()))
}

/// The bundle catalog, processed in declaration order.
pub fn rule_configurations() -> Vec<RuleConfig> {
    vec![
        RuleConfig {
            output: ".cursor/rules/000_common_requirements.mdc",
            source_dir: "rules/0_common",
            header: "---\ndescription: Common requirements\nglobs: \"src/**/*.{tsx,jsx,ts,js,md}\"\nalwaysApply: true\n---\n# Common requirements\n\n",
            file_pattern: "**/*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/000_common_tech_stack.mdc",
            source_dir: "rules/0_common/1_common_requirements",
            header: "---\ndescription: Common technology stack\nglobs: \"src/**/*.{tsx,jsx,ts,js,md}\"\nalwaysApply: true\n---\n# Common technology stack\n\n",
            file_pattern: "1_technology_stack.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/000_common_directory_structure.mdc",
            source_dir: "rules/0_common/3_directory_structure",
            header: "---\ndescription: Directory structure\nglobs: \"src/**/*.{tsx,jsx,ts,js,md}\"\nalwaysApply: true\n---\n# Directory structure\n\n",
            file_pattern: "*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/000_common_coding_conventions.mdc",
            source_dir: "rules/0_common/2_coding_conventions",
            header: "---\ndescription: Coding conventions\nglobs: \"src/**/*.{tsx,jsx,ts,js,md}\"\nalwaysApply: true\n---\n# Coding conventions\n\n",
            file_pattern: "*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/000_common_test_strategy.mdc",
            source_dir: "rules/0_common/4_test_strategy",
            header: "---\ndescription: Test strategy\nglobs: \"src/**/*.{tsx,jsx,ts,js,md}\"\nalwaysApply: true\n---\n# Test strategy\n\n",
            file_pattern: "**/*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/001_business_requirements.mdc",
            source_dir: "rules/1_business_requirements",
            header: "---\ndescription: Business requirements definition\nglobs: \"src/**/*.{tsx,jsx,ts,js,md}\"\nalwaysApply: true\n---\n# Business requirements\n\n",
            file_pattern: "*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/002_backend_requirements.mdc",
            source_dir: "rules/2_backend_functional_requirements",
            header: "---\ndescription: Backend functional requirements\nglobs: \"src/app/api/**/*.{tsx,jsx,ts,js}\", \"src/lib/**/*.{tsx,jsx,ts,js}\", \"src/types/api/**/*.{ts,js}\"\nalwaysApply: true\n---\n# Backend functional requirements\n\n",
            file_pattern: "**/*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/003_frontend_requirements.mdc",
            source_dir: "rules/3_frontend_functional_requirements",
            header: "---\ndescription: Frontend functional requirements\nglobs: \"src/app/**/*.{tsx,jsx,ts,js}\", \"!src/app/api/**/*\", \"src/components/**/*.{tsx,jsx,ts,js}\", \"src/hooks/**/*.{tsx,jsx,ts,js}\", \"src/context/**/*.{tsx,jsx,ts,js}\"\nalwaysApply: true\n---\n# Frontend functional requirements\n\n",
            file_pattern: "*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/004_nonFunctional_requirements.mdc",
            source_dir: "rules/4_nonFunctional_requirements",
            header: "---\ndescription: Non-functional requirements\nglobs: \"src/config/**/*.{tsx,jsx,ts,js}\", \"src/middleware/**/*.{tsx,jsx,ts,js}\", \"src/lib/db/**/*.{ts,js}\", \"src/lib/auth/**/*.{ts,js}\"\nalwaysApply: true\n---\n# Non-functional requirements\n\n",
            file_pattern: "*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/005_development_process.mdc",
            source_dir: "rules/5_development_process",
            header: "---\ndescription: Development process\nglobs: \"src/tests/**/*.{tsx,jsx,ts,js}\", \"src/utils/**/*.{tsx,jsx,ts,js}\", \"scripts/**/*.{ts,js}\"\nalwaysApply: true\n---\n# Development process\n\n",
            file_pattern: "*.md",
            sort_by: SortBy::Name,
        },
        RuleConfig {
            output: ".cursor/rules/006_risk_and_release_plan.mdc",
            source_dir: "rules/6_risk_and_release_plan",
            header: "---\ndescription: Risk and release plan\nglobs: \"src/config/constants.{ts,js}\", \"src/config/feature-flags.{ts,js}\", \"src/lib/monitoring/**/*.{ts,js}\"\nalwaysApply: true\n---\n# Risk and release plan\n\n",
            file_pattern: "*.md",
            sort_by: SortBy::Name,
        },
    ]
}

/// Index entries for the manifest, one per rule configuration, same order.
pub fn manifest_entries() -> Vec<ManifestEntry> {
    vec![
        ManifestEntry {
            id: "000_common_requirements",
            description: "Common requirements",
        },
        ManifestEntry {
            id: "000_common_tech_stack",
            description: "Common technology stack",
        },
        ManifestEntry {
            id: "000_common_directory_structure",
            description: "Directory structure",
        },
        ManifestEntry {
            id: "000_common_coding_conventions",
            description: "Coding conventions",
        },
        ManifestEntry {
            id: "000_common_test_strategy",
            description: "Test strategy",
        },
        ManifestEntry {
            id: "001_business_requirements",
            description: "Business requirements definition",
        },
        ManifestEntry {
            id: "002_backend_requirements",
            description: "Backend functional requirements",
        },
        ManifestEntry {
            id: "003_frontend_requirements",
            description: "Frontend functional requirements",
        },
        ManifestEntry {
            id: "004_nonFunctional_requirements",
            description: "Non-functional requirements",
        },
        ManifestEntry {
            id: "005_development_process",
            description: "Development process",
        },
        ManifestEntry {
            id: "006_risk_and_release_plan",
            description: "Risk and release plan",
        },
    ]
}
