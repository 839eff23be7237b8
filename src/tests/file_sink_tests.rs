use super::*;
use tempfile::TempDir;

fn create_test_sink() -> (FileSink, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let sink = FileSink::open(&temp_dir.path().join("logs").join("activity.log"))
        .expect("Failed to open file sink");
    (sink, temp_dir)
}

fn read_lines(sink: &FileSink) -> Vec<String> {
    std::fs::read_to_string(sink.path())
        .expect("Failed to read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_format_timestamp() {
    let ts = format_timestamp();
    // Should be in format: 2026-01-15T14:30:00.123Z
    assert!(ts.ends_with('Z'));
    assert!(ts.contains('T'));
    assert_eq!(ts.len(), 24);
}

#[test]
fn test_open_creates_parent_directories() {
    let (sink, temp_dir) = create_test_sink();
    assert!(temp_dir.path().join("logs").is_dir());
    assert!(sink.path().exists());
}

#[test]
fn test_line_format() {
    let (sink, _temp_dir) = create_test_sink();
    sink.warn("LoginActivity", "mEmail is null");

    let lines = read_lines(&sink);
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with('['));
    assert!(
        line.ends_with("] [WARN] [LoginActivity] mEmail is null"),
        "unexpected line: {}",
        line
    );
}

#[test]
fn test_appends_across_reopen() {
    let (sink, _temp_dir) = create_test_sink();
    sink.debug("Tag", "one");
    let path = sink.path().to_path_buf();
    drop(sink);

    let reopened = FileSink::open(&path).expect("Failed to reopen file sink");
    reopened.info("Tag", "two");

    let lines = read_lines(&reopened);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[DEBUG] [Tag] one"));
    assert!(lines[1].ends_with("[INFO] [Tag] two"));
}

#[test]
fn test_open_fails_when_parent_is_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").expect("Failed to write blocker file");

    let result = FileSink::open(&blocker.join("activity.log"));
    assert!(result.is_err());
}
