//! CLI output formatting tests.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use sonarwait_core::{AnalysisStatus, ClassificationResult, LineSeverity};
    use std::path::Path;

    #[test]
    fn test_bad_line_strips_terminator() {
        let formatter = TextFormatter::new(false);
        assert_eq!(
            formatter.bad_line("a ERROR b\r\n", Some(LineSeverity::Error)),
            "a ERROR b"
        );
    }

    #[test]
    fn test_bad_line_colors() {
        let formatter = TextFormatter::new(true);
        assert_eq!(
            formatter.bad_line("a WARN b\n", Some(LineSeverity::Warning)),
            "\x1b[33ma WARN b\x1b[0m"
        );
        assert_eq!(
            formatter.bad_line("read failed\n", None),
            "\x1b[31mread failed\x1b[0m"
        );
    }

    #[test]
    fn test_summary_clean() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.summary(&ClassificationResult::new()), "OK");
    }

    #[test]
    fn test_summary_counts() {
        let formatter = TextFormatter::new(false);
        let mut result = ClassificationResult::new();
        result.push("x ERROR y\n", LineSeverity::Error);
        result.push("x WARN y\n", LineSeverity::Warning);
        result.push("x WARN z\n", LineSeverity::Warning);

        assert_eq!(formatter.summary(&result), "1 error, 2 warnings");
    }

    #[test]
    fn test_status_failed() {
        let formatter = TextFormatter::new(false);
        let status = AnalysisStatus::failed(Path::new("run/scanner.log"));
        assert_eq!(
            formatter.status(&status),
            "BACKGROUND TASK AS FAILED. CHECK SERVER : run/scanner.log.server"
        );
    }

    #[test]
    fn test_status_success() {
        let formatter = TextFormatter::new(false);
        assert_eq!(
            formatter.status(&AnalysisStatus::Succeeded),
            "Background task ... OK"
        );
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::JsonFormatter;
    use sonarwait_core::{AnalysisStatus, ClassificationResult, LineSeverity};
    use std::path::Path;

    #[test]
    fn test_format_analysis() {
        let formatter = JsonFormatter::new(false);
        let mut result = ClassificationResult::new();
        result.push("x ERROR y\n", LineSeverity::Error);

        let json = formatter
            .format_analysis(Path::new("scanner.log"), &result)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["log"], "scanner.log");
        assert_eq!(value["errors"], 1);
        assert_eq!(value["warnings"], 0);
        assert_eq!(value["badLines"][0], "x ERROR y");
    }

    #[test]
    fn test_format_failed_status() {
        let formatter = JsonFormatter::new(true);
        let status = AnalysisStatus::failed(Path::new("scanner.log"));

        let json = formatter
            .format_status(Path::new("scanner.log"), &status)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["outcome"], "failed");
        assert_eq!(value["server_log"], "scanner.log.server");
        assert!(value["message"].as_str().unwrap().contains("scanner.log"));
    }

    #[test]
    fn test_format_success_status() {
        let formatter = JsonFormatter::new(false);
        let json = formatter
            .format_status(Path::new("scanner.log"), &AnalysisStatus::Succeeded)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["outcome"], "succeeded");
        assert_eq!(value["message"], "");
    }
}
