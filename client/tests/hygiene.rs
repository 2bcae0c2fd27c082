//! Source hygiene for the portal client.
//!
//! Two kinds of checks run over `src/` (test files excluded):
//!
//! - panic and error-swallowing budgets, ratcheted to what the browser
//!   fallbacks genuinely need;
//! - boundary checks that keep browser storage behind `util::storage` and the
//!   account keys behind the account service.
//!
//! A failing boundary check names the offending file and line.

use std::fs;
use std::path::Path;

struct SourceFile {
    /// Path relative to `src/`, always `/`-separated.
    rel: String,
    content: String,
}

impl SourceFile {
    /// Code lines, skipping `//` comments so docs may mention the patterns.
    fn code_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with("//"))
            .map(|(i, line)| (i + 1, line))
    }
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), "", &mut files);
    files
}

fn collect(dir: &Path, prefix: &str, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = format!("{prefix}{name}");
        if path.is_dir() {
            collect(&path, &format!("{rel}/"), out);
        } else if name.ends_with(".rs") && !name.ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { rel, content });
            }
        }
    }
}

/// Every `file:line` whose code contains `pattern`, outside `allowed` files.
fn offenders(files: &[SourceFile], pattern: &str, allowed: &[&str]) -> Vec<String> {
    files
        .iter()
        .filter(|f| !allowed.contains(&f.rel.as_str()))
        .flat_map(|f| {
            f.code_lines()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, _)| format!("  {}:{n}", f.rel))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn assert_budget(files: &[SourceFile], pattern: &str, max: usize) {
    let hits = offenders(files, pattern, &[]);
    assert!(
        hits.len() <= max,
        "`{pattern}` budget exceeded: found {}, max {max}.\n{}",
        hits.len(),
        hits.join("\n")
    );
}

fn assert_confined(files: &[SourceFile], pattern: &str, allowed: &[&str]) {
    let hits = offenders(files, pattern, allowed);
    assert!(
        hits.is_empty(),
        "`{pattern}` may only appear in {allowed:?}.\n{}",
        hits.join("\n")
    );
}

// =============================================================
// Panics and swallowed errors
// =============================================================

#[test]
fn no_panicking_calls() {
    let files = source_files();
    for pattern in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_budget(&files, pattern, 0);
    }
}

#[test]
fn silent_discards_limited_to_non_browser_fallbacks() {
    // Unused arguments in the non-hydrate branches of storage and dark mode.
    let files = source_files();
    assert_budget(&files, "let _ =", 4);
    assert_confined(&files, "let _ =", &["util/storage.rs", "util/dark_mode.rs"]);
}

#[test]
fn dot_ok_limited_to_web_sys_lookups() {
    let files = source_files();
    assert_budget(&files, ".ok()", 3);
    assert_confined(&files, ".ok()", &["util/storage.rs", "util/dark_mode.rs"]);
}

#[test]
fn no_dead_code_allowances() {
    assert_budget(&source_files(), "#[allow(dead_code)]", 0);
}

// =============================================================
// Storage boundary
// =============================================================

#[test]
fn local_storage_is_reached_only_through_browser_store() {
    assert_confined(&source_files(), "local_storage()", &["util/storage.rs"]);
}

#[test]
fn browser_window_is_touched_only_by_storage_and_theme() {
    assert_confined(
        &source_files(),
        "web_sys::window()",
        &["util/storage.rs", "util/dark_mode.rs"],
    );
}

#[test]
fn account_keys_are_owned_by_the_account_service() {
    let files = source_files();
    for key in ["SESSION_KEY", "USERS_KEY"] {
        assert_confined(&files, key, &["util/storage.rs", "accounts/mod.rs"]);
    }
}

#[test]
fn theme_key_is_owned_by_dark_mode() {
    assert_confined(
        &source_files(),
        "DARK_MODE_KEY",
        &["util/storage.rs", "util/dark_mode.rs"],
    );
}

#[test]
fn raw_store_writes_stay_in_storage_owners() {
    let files = source_files();
    let owners = ["util/storage.rs", "util/dark_mode.rs", "accounts/mod.rs"];
    for call in [".set_item(", ".remove_item("] {
        assert_confined(&files, call, &owners);
    }
}

#[test]
fn scan_finds_the_storage_module() {
    assert!(source_files().iter().any(|f| f.rel == "util/storage.rs"));
}
