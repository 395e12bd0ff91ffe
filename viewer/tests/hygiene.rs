//! Hygiene — source-scan checks for the viewer crate.
//!
//! The renderer runs inside the browser and must report failures through
//! `Result`, never abort the WASM instance or drop an error on the floor.
//! Each pattern below has a budget of zero in non-test sources.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the WASM instance" },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the WASM instance" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the WASM instance" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics abort the WASM instance" },
    Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "let _ =", max: 0, why: "errors must be propagated" },
    Budget { pattern: ".ok()", max: 0, why: "errors must be propagated" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead" },
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.file_name().is_some_and(|name| name.to_string_lossy().ends_with("_test.rs"));
        if !is_rust || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path, content));
        }
    }
}

#[test]
fn sources_are_found() {
    assert!(!production_sources().is_empty(), "no sources under src/; run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let sources = production_sources();
    let mut failures = Vec::new();

    for budget in BUDGETS {
        let hits: Vec<String> = sources
            .iter()
            .filter_map(|(path, content)| {
                let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
                (count > 0).then(|| format!("  {}: {count}", path.display()))
            })
            .collect();
        let total: usize = sources
            .iter()
            .map(|(_, content)| content.lines().filter(|line| line.contains(budget.pattern)).count())
            .sum();
        if total > budget.max {
            failures.push(format!(
                "`{}` found {total} times (max {}): {}\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                hits.join("\n")
            ));
        }
    }

    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
