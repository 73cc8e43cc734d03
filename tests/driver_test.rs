//! Driver Integration Tests
//!
//! End-to-end runs of the line processor over real files, plus the
//! `decimal-add` binary when built with the `cli` feature.

use decimal_strings::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Create a temporary file path
fn temp_input(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("decimal_strings_{}_{}.txt", name, id));
    path
}

const SAMPLE: &str = "\
123.456
  0.544

-1
abc
5.
.5
+007.500
99999999999999999999999999999999.999
";

const EXPECTED: &str = "\
123.456 + -123.456 = 0
0.544 + -123.456 = -122.912
-1 + -123.456 = -124.456
'abc' is not a valid double number.
'5.' is not a valid double number.
.5 + -123.456 = -122.956
+007.500 + -123.456 = -115.956
99999999999999999999999999999999.999 + -123.456 = 99999999999999999999999999999876.543
";

#[test]
fn test_process_file_matches_reference_output() {
    let path = temp_input("sample");
    fs::write(&path, SAMPLE).unwrap();

    let processor = LineProcessor::new(DriverConfig::new(), Arc::new(NoOpEventHandler)).unwrap();
    let mut out = Vec::new();
    let summary = processor.process_file(&path, &mut out).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    assert_eq!(
        summary,
        ProcessSummary {
            accepted: 6,
            rejected: 2,
            skipped: 1
        }
    );
}

#[test]
fn test_one_bad_line_does_not_affect_others() {
    let handler = Arc::new(CollectingEventHandler::new());
    let processor = LineProcessor::new(DriverConfig::new().with_addend("1"), handler.clone()).unwrap();

    let mut out = Vec::new();
    processor
        .process("1\n1..\n2\n".as_bytes(), &mut out)
        .unwrap();

    let sums: Vec<String> = handler
        .events()
        .into_iter()
        .filter_map(|e| match e {
            LineEvent::LineAccepted { sum, .. } => Some(sum),
            _ => None,
        })
        .collect();
    assert_eq!(sums, ["2", "3"]);
}

#[test]
fn test_non_utf8_input_is_an_error() {
    let processor = LineProcessor::new(DriverConfig::new(), Arc::new(NoOpEventHandler)).unwrap();
    let bytes: &[u8] = &[b'1', b'\n', 0xff, 0xfe, b'\n'];

    let err = processor.process(bytes, Vec::new()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use std::process::Command;

    fn binary() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_decimal-add"))
    }

    #[test]
    fn test_binary_prints_sums() {
        let path = temp_input("cli");
        fs::write(&path, SAMPLE).unwrap();

        let output = Command::new(binary())
            .arg(&path)
            .output()
            .expect("Failed to execute decimal-add");
        fs::remove_file(&path).unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    }

    #[test]
    fn test_binary_missing_file() {
        let output = Command::new(binary())
            .arg("/nonexistent/decimal/input.txt")
            .output()
            .expect("Failed to execute decimal-add");

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Could not open file '/nonexistent/decimal/input.txt'"));
    }

    #[test]
    fn test_binary_custom_addend() {
        let path = temp_input("addend");
        fs::write(&path, "0.1\n").unwrap();

        let output = Command::new(binary())
            .args([path.to_str().unwrap(), "--addend", "0.2"])
            .output()
            .expect("Failed to execute decimal-add");
        fs::remove_file(&path).unwrap();

        assert_eq!(String::from_utf8_lossy(&output.stdout), "0.1 + 0.2 = 0.3\n");
    }
}
