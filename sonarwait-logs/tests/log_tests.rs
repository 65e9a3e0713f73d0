//! Integration tests for log classification and URL extraction.

use sonarwait_logs::{build_regexp, extract_report_url, read_lines, LogClassifier};

const SCANNER_LOG: &str = "\
INFO: Scanner configuration file: /opt/sonar-scanner/conf/sonar-scanner.properties
INFO: Sensor CxxCompilerSensor [cxx]
ERROR: not an error, no surrounding spaces
INFO: Sensor CxxCompilerSensor [cxx] ERROR Unable to parse compiler output
10:01:02 WARN  Unresolved include 'stdio.h'
10:01:03 WARN  Deprecated property 'sonar.cxx.suffixes'
INFO: Analysis report uploaded in 45ms
INFO: More about the report processing at http://localhost:9000/api/ce/task?id=AYx1
INFO: EXECUTION SUCCESS
";

#[test]
fn test_scanner_log_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scanner.log");
    std::fs::write(&path, SCANNER_LOG).unwrap();

    let lines = read_lines(&path).unwrap();
    assert_eq!(lines.len(), 9);

    let ignore = build_regexp(".*Deprecated property\n").unwrap();
    let result = LogClassifier::with_ignore(ignore).classify_file(&path);
    assert_eq!(result.error_count, 1);
    assert_eq!(result.warning_count, 1);
    assert_eq!(
        result.bad_lines,
        vec![
            "INFO: Sensor CxxCompilerSensor [cxx] ERROR Unable to parse compiler output\n"
                .to_string(),
            "10:01:02 WARN  Unresolved include 'stdio.h'\n".to_string(),
        ]
    );

    assert_eq!(
        extract_report_url(&lines).as_deref(),
        Some("http://localhost:9000/api/ce/task?id=AYx1")
    );
}

#[test]
fn test_ignore_everything() {
    let ignore = build_regexp(".*\n").unwrap();
    let result = LogClassifier::with_ignore(ignore).classify_lines(SCANNER_LOG.lines());
    assert!(result.is_clean());
    assert_eq!(result.total_count(), 0);
}

#[test]
fn test_latin1_log_still_classified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scanner.log");
    std::fs::write(
        &path,
        b"INFO: compiling caf\xe9.cpp\n\
          10:00 ERROR boom here\n\
          INFO: More about the report processing at http://x/api/ce/task?id=1\n",
    )
    .unwrap();

    let result = LogClassifier::new().classify_file(&path);
    assert_eq!(result.error_count, 1);
    assert_eq!(result.bad_lines, vec!["10:00 ERROR boom here\n".to_string()]);

    let lines = read_lines(&path).unwrap();
    assert_eq!(
        extract_report_url(&lines).as_deref(),
        Some("http://x/api/ce/task?id=1")
    );
}

#[test]
fn test_crlf_log_lines_end_with_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scanner.log");
    std::fs::write(&path, "ok\r\n10:00 WARN  odd\r\n").unwrap();

    let result = LogClassifier::new().classify_file(&path);
    assert_eq!(result.bad_lines, vec!["10:00 WARN  odd\n".to_string()]);
}
