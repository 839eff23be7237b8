use super::*;

#[test]
fn test_recording_sink_keeps_order_and_fields() {
    let sink = RecordingSink::new();
    sink.debug("Tag", "first");
    sink.info("Tag", "second");
    sink.warn("Other", "third");

    let records = sink.records();
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        LogRecord {
            level: LogLevel::Debug,
            tag: "Tag".to_string(),
            message: "first".to_string(),
        }
    );
    assert_eq!(records[1].level, LogLevel::Info);
    assert_eq!(records[2].tag, "Other");
    assert_eq!(sink.messages(), vec!["first", "second", "third"]);
}

#[test]
fn test_recording_sink_clear() {
    let sink = RecordingSink::new();
    assert!(sink.is_empty());
    sink.debug("Tag", "line");
    assert_eq!(sink.len(), 1);
    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn test_filtered_sink_drops_less_severe() {
    let filtered = FilteredSink::new(RecordingSink::new(), LogLevel::Info);
    filtered.debug("Tag", "dropped");
    filtered.info("Tag", "kept info");
    filtered.warn("Tag", "kept warn");

    assert!(!filtered.should_log(LogLevel::Debug));
    assert_eq!(filtered.inner().messages(), vec!["kept info", "kept warn"]);
}

#[test]
fn test_filtered_sink_at_debug_passes_everything() {
    let filtered = FilteredSink::new(RecordingSink::new(), LogLevel::Debug);
    filtered.debug("Tag", "a");
    filtered.info("Tag", "b");
    filtered.warn("Tag", "c");
    assert_eq!(filtered.inner().len(), 3);
}

#[test]
fn test_arc_sink_forwards_to_shared_recorder() {
    let recorder = Arc::new(RecordingSink::new());
    let shared: Arc<dyn LogSink> = recorder.clone();
    shared.warn("Tag", "through arc");
    assert_eq!(recorder.messages(), vec!["through arc"]);
}

#[test]
fn test_recording_sink_is_shareable_across_threads() {
    let recorder = Arc::new(RecordingSink::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let sink = recorder.clone();
            std::thread::spawn(move || {
                for j in 0..25 {
                    sink.debug("Worker", &format!("{}-{}", i, j));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
    assert_eq!(recorder.len(), 100);
}

#[test]
fn test_tracing_and_stderr_sinks_do_not_panic() {
    TracingSink.debug("Tag", "debug line");
    TracingSink.info("Tag", "info line");
    TracingSink.warn("Tag", "warn line");
    StderrSink.warn("Tag", "stderr line");
}

#[test]
fn test_log_record_serializes_level_lowercase() {
    let record = LogRecord {
        level: LogLevel::Warn,
        tag: "Login".to_string(),
        message: "mEmail is null".to_string(),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["level"], "warn");
    assert_eq!(json["tag"], "Login");
}
