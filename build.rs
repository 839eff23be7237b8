use std::path::{Path, PathBuf};
use std::process::Command;

const MAX_LINES: usize = 750;

const CHECKED_EXTENSIONS: &[&str] = &["rs", "md", "yaml", "toml"];

const EXCLUDED_DIRS: &[&str] = &["target", ".git", "examples"];

const SKIP_PATTERNS: &[&str] = &["Skipping test", "skipping test", "Test skipped", "test skipped"];

fn main() {
    let root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set"));
    let files = collect_files_to_check(&root);
    for file in &files {
        println!("cargo:rerun-if-changed={}", file.display());
    }

    let sources: Vec<(PathBuf, String)> = files
        .iter()
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("rs"))
        .filter(|p| p.file_name().and_then(|n| n.to_str()) != Some("build.rs"))
        .filter_map(|p| {
            let rel = p.strip_prefix(&root).unwrap_or(p).to_path_buf();
            std::fs::read_to_string(p).ok().map(|content| (rel, content))
        })
        .collect();

    enforce_line_limits(&root, &files);
    enforce_no_dead_code_allows(&sources);
    enforce_test_hygiene(&sources);
}

fn collect_files_to_check(root: &Path) -> Vec<PathBuf> {
    let listed = Command::new("git")
        .args(["ls-files"])
        .current_dir(root)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok());

    let mut files = Vec::new();
    match listed {
        Some(stdout) => files.extend(stdout.lines().map(|line| root.join(line))),
        None => walk_directory(root, &mut files),
    }
    files.retain(|path| should_check_file(path, root));
    files
}

fn walk_directory(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk_directory(&path, files);
        } else {
            files.push(path);
        }
    }
}

fn should_check_file(path: &Path, root: &Path) -> bool {
    let checked_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| CHECKED_EXTENSIONS.contains(&ext));
    let rel_path = path.strip_prefix(root).unwrap_or(path);
    let excluded = rel_path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
    });
    checked_ext && !excluded && rel_path != Path::new("Cargo.lock")
}

fn enforce_line_limits(root: &Path, files: &[PathBuf]) {
    let violations: Vec<String> = files
        .iter()
        .filter_map(|file| {
            let content = std::fs::read_to_string(file).ok()?;
            let count = content.lines().filter(|l| !l.trim().is_empty()).count();
            let rel = file.strip_prefix(root).unwrap_or(file);
            (count > MAX_LINES).then(|| format!("{} - {} lines (max {})", rel.display(), count, MAX_LINES))
        })
        .collect();
    fail_on("FILE LINE LIMIT EXCEEDED", "Split these files into smaller modules.", &violations);
}

fn enforce_no_dead_code_allows(sources: &[(PathBuf, String)]) {
    let mut violations = Vec::new();
    for (path, content) in sources {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if (trimmed.starts_with("#[allow(") || trimmed.starts_with("#![allow(")) && trimmed.contains("dead_code") {
                violations.push(format!("{}:{}  {}", path.display(), i + 1, trimmed));
            }
        }
    }
    fail_on(
        "#[allow(dead_code)] IS NOT ALLOWED",
        "Delete unused code, or gate test-only code with #[cfg(test)].",
        &violations,
    );
}

/// A `#[test]` function: its attributes, name, first line, and body lines.
struct TestFn<'a> {
    attrs: Vec<&'a str>,
    name: String,
    line: usize,
    body: Vec<&'a str>,
}

fn test_functions(content: &str) -> Vec<TestFn<'_>> {
    let lines: Vec<&str> = content.lines().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i].trim() != "#[test]" {
            i += 1;
            continue;
        }
        let start = i;
        let mut attrs = Vec::new();
        while i < lines.len() && lines[i].trim().starts_with("#[") {
            attrs.push(lines[i].trim());
            i += 1;
        }
        let Some(header) = lines.get(i).filter(|l| l.contains("fn ")) else {
            continue;
        };
        let name = header
            .split("fn ")
            .nth(1)
            .and_then(|rest| rest.split('(').next())
            .unwrap_or_default()
            .trim()
            .to_string();

        let mut depth = 0i32;
        let mut body = Vec::new();
        while i < lines.len() {
            body.push(lines[i]);
            depth += lines[i].matches('{').count() as i32 - lines[i].matches('}').count() as i32;
            i += 1;
            if depth <= 0 && body.iter().any(|l| l.contains('{')) {
                break;
            }
        }
        found.push(TestFn { attrs, name, line: start + 1, body });
    }
    found
}

/// Tests must fail rather than silently skip, and tests touching env vars
/// must be `#[serial]`.
fn enforce_test_hygiene(sources: &[(PathBuf, String)]) {
    let mut skips = Vec::new();
    let mut unserialized = Vec::new();
    for (path, content) in sources {
        for test in test_functions(content) {
            let location = format!("{}:{} `{}`", path.display(), test.line, test.name);
            if test.body.iter().any(|l| SKIP_PATTERNS.iter().any(|p| l.contains(p))) {
                skips.push(format!("{} contains a skip message", location));
            }
            let mutates_env = test.body.iter().any(|l| {
                let t = l.trim();
                !t.starts_with("//") && (t.contains("env::set_var") || t.contains("env::remove_var"))
            });
            let serial = test.attrs.iter().any(|a| *a == "#[serial]" || *a == "#[serial_test::serial]");
            if mutates_env && !serial {
                unserialized.push(format!("{} mutates env without #[serial]", location));
            }
        }
    }
    fail_on(
        "SILENT TEST SKIPS ARE NOT ALLOWED",
        "Tests must FAIL if they cannot run; use assert!() on preconditions or #[ignore] with a reason.",
        &skips,
    );
    fail_on(
        "ENV MUTATIONS REQUIRE #[serial]",
        "Add `use serial_test::serial;` and mark the test #[serial].",
        &unserialized,
    );
}

fn fail_on(title: &str, advice: &str, violations: &[String]) {
    if violations.is_empty() {
        return;
    }
    eprintln!("\n========================================");
    eprintln!("{}", title);
    eprintln!("========================================");
    for violation in violations {
        eprintln!("  {}", violation);
    }
    eprintln!("========================================");
    eprintln!("{}\n", advice);
    panic!("Build failed: {} ({} occurrence(s))", title, violations.len());
}
