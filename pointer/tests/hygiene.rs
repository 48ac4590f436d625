//! Source hygiene for the pointer engine.
//!
//! Scans `pointer/src/` (test files excluded) for patterns the engine must not
//! carry. Every engine input is total, so there is no place for a panic, a
//! swallowed error, or ad-hoc printing. Budgets only go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics on a host-supplied value" },
    Budget { pattern: ".expect(", max: 0, why: "panics on a host-supplied value" },
    Budget { pattern: "panic!(", max: 0, why: "engine inputs are total" },
    Budget { pattern: "unreachable!(", max: 0, why: "engine inputs are total" },
    Budget { pattern: "todo!(", max: 0, why: "stub left in production code" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stub left in production code" },
    Budget { pattern: "let _ =", max: 0, why: "discards a value without inspecting it" },
    Budget { pattern: ".ok()", max: 0, why: "discards an error without inspecting it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead" },
    Budget { pattern: "println!(", max: 0, why: "log through tracing" },
    Budget { pattern: "eprintln!(", max: 0, why: "log through tracing" },
    Budget { pattern: "dbg!(", max: 0, why: "debugging leftover" },
];

struct SourceFile {
    path: String,
    content: String,
}

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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_were_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the pointer crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("{} ({}): found {count}, max {}\n{detail}", budget.pattern, budget.why, budget.max));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_module_has_a_sibling_test_file() {
    let files = source_files();
    for file in &files {
        let Some(stem) = Path::new(&file.path).file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };
        if matches!(stem.as_str(), "lib" | "consts" | "error") {
            continue;
        }
        let attr = format!("#[path = \"{stem}_test.rs\"]");
        assert!(file.content.contains(&attr), "{} has no {stem}_test.rs module", file.path);
    }
}
