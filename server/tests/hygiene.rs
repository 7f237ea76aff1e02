//! Hygiene: enforces coding standards at test time
//!
//! Scans the server crate source tree for antipatterns. Each pattern has a
//! budget; the budget never grows.

use std::fs;
use std::path::Path;

// Panics take the whole server down.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_TODO: usize = 0;

// Silent loss. The one `.ok()` is the env lookup in `config.rs`.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 1;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `server/src/`, excluding `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 { Some((file.path.clone(), count)) } else { None }
        })
        .collect()
}

fn check(pattern: &str, max: usize) {
    let hits = count_in_source(&source_files(), pattern);
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn unwrap_budget() {
    check(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check("panic!(", MAX_PANIC);
}

#[test]
fn todo_budget() {
    check("todo!(", MAX_TODO);
}

#[test]
fn silent_discard_budget() {
    check("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(".ok()", MAX_DOT_OK);
}
