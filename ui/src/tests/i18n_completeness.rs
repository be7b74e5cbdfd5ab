//! Source-level guard: every `t!` key used in `src/` exists in the fallback
//! bundle, and the fallback bundle carries no orphaned messages.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK_FTL: &str = include_str!("../../i18n/en-US/fraudcheck-ui.ftl");

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message ids (`id = ...` at the start of a line). Terms and comments are skipped.
fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.starts_with('-') && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal first arguments of `t!(...)`, including the multi-line form.
fn source_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut rest = content;
    while let Some(pos) = rest.find("t!(") {
        rest = &rest[pos + 3..];
        let trimmed = rest.trim_start();
        let Some(literal) = trimmed.strip_prefix('"') else {
            continue;
        };
        if let Some(end) = literal.find('"') {
            let key = &literal[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                keys.insert(key.to_string());
            }
        }
    }
    keys
}

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

fn referenced_keys() -> BTreeSet<String> {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    rust_files(&src, &mut files);
    files
        .iter()
        // Skip the guards themselves; their fixtures are not UI strings.
        .filter(|path| !path.ends_with("tests/i18n_completeness.rs"))
        .filter_map(|path| fs::read_to_string(path).ok())
        .flat_map(|content| source_keys(&content))
        .collect()
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = ftl_keys(FALLBACK_FTL);
    let missing: Vec<_> = referenced_keys()
        .into_iter()
        .filter(|key| !fallback.contains(key))
        .collect();
    assert!(
        missing.is_empty(),
        "t! keys missing from en-US: {}",
        missing.join(", ")
    );
}

#[test]
fn fallback_has_no_orphaned_messages() {
    let referenced = referenced_keys();
    let unused: Vec<_> = ftl_keys(FALLBACK_FTL)
        .into_iter()
        .filter(|key| !referenced.contains(key))
        .collect();
    assert!(
        unused.is_empty(),
        "en-US messages never looked up via t!: {}",
        unused.join(", ")
    );
}

#[test]
fn key_scanner_handles_multiline_calls() {
    let src = "let a = t!(\"tab-manual\");\nlet b = t!(\n    \"error-service\",\n    status = s,\n);";
    let keys = source_keys(src);
    assert!(keys.contains("tab-manual"));
    assert!(keys.contains("error-service"));
}
