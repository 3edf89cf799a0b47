use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fs, path::Path};
use tracing::error;

/// A single automated check run against submitted code.
///
/// `input` and `allowed_outputs` are opaque values supplied by the exercise
/// author; the evaluation engine compares observed output against the allowed
/// set without interpreting either.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestCase {
    pub input: Value,
    pub allowed_outputs: Vec<Value>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl TestCase {
    /// Whether `observed` is one of the outputs this case accepts.
    pub fn matches(&self, observed: &Value) -> bool {
        self.allowed_outputs.iter().any(|allowed| allowed == observed)
    }
}

/// An ordered grouping of test cases, identified by suite id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestSuite {
    pub id: String,
    pub test_cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn case(&self, index: usize) -> Option<&TestCase> {
        self.test_cases.get(index)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestSuiteSet {
    pub generated_at: DateTime<Utc>,
    pub suites: Vec<TestSuite>,
    pub total_cases: usize,
}

impl TestSuiteSet {
    pub fn recompute_total(&mut self) -> usize {
        self.total_cases = self.suites.iter().map(|s| s.test_cases.len()).sum();
        self.total_cases
    }

    pub fn new_now(suites: Vec<TestSuite>) -> Self {
        let mut me = TestSuiteSet {
            generated_at: Utc::now(),
            total_cases: 0,
            suites,
        };
        me.recompute_total();
        me
    }

    pub fn find_suite(&self, id: &str) -> Option<&TestSuite> {
        self.suites.iter().find(|s| s.id == id)
    }
}

/// Read test_suites.json as **normalized**.
pub fn load_test_suites(path: &Path) -> Result<TestSuiteSet, String> {
    use std::io::ErrorKind;

    // Short, standardized I/O errors
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::NotFound => "File not found".to_string(),
                ErrorKind::PermissionDenied => {
                    "Permission denied reading test suites".to_string()
                }
                ErrorKind::InvalidData => "Test suite file is not valid UTF-8".to_string(),
                _ => format!("Failed to read test suites ({})", e.kind()),
            };
            error!("Failed to read test suites at {}: {}", path.display(), msg);
            return Err(msg);
        }
    };

    // Short parse error
    serde_json::from_str::<TestSuiteSet>(&s).map_err(|e| {
        error!("Invalid test suite JSON at {}: {}", path.display(), e);
        "Invalid test suite JSON (normalized expected)".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn sample_set() -> TestSuiteSet {
        TestSuiteSet::new_now(vec![
            TestSuite {
                id: "GENERAL_CASE".to_string(),
                test_cases: vec![
                    TestCase {
                        input: json!("racecar"),
                        allowed_outputs: vec![json!(true)],
                        tag: None,
                    },
                    TestCase {
                        input: json!("banana"),
                        allowed_outputs: vec![json!(false)],
                        tag: Some("not a palindrome".to_string()),
                    },
                ],
            },
            TestSuite {
                id: "EMPTY_STRING".to_string(),
                test_cases: vec![TestCase {
                    input: json!(""),
                    allowed_outputs: vec![json!(true), json!("true")],
                    tag: None,
                }],
            },
        ])
    }

    #[test]
    fn test_total_cases_computed() {
        let set = sample_set();
        assert_eq!(set.total_cases, 3);
    }

    #[test]
    fn test_case_lookup() {
        let set = sample_set();
        let suite = set.find_suite("GENERAL_CASE").unwrap();
        assert_eq!(suite.case(1).unwrap().input, json!("banana"));
        assert!(suite.case(2).is_none());
        assert!(set.find_suite("MISSING").is_none());
    }

    #[test]
    fn test_case_matches_any_allowed_output() {
        let set = sample_set();
        let case = set.find_suite("EMPTY_STRING").unwrap().case(0).unwrap();
        assert!(case.matches(&json!(true)));
        assert!(case.matches(&json!("true")));
        assert!(!case.matches(&json!(false)));
    }

    #[test]
    fn test_load_round_trip() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_suites.json");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(serde_json::to_string_pretty(&set).unwrap().as_bytes())
            .unwrap();

        let loaded = load_test_suites(&path).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_test_suites(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err, "File not found");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_suites.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_test_suites(&path).unwrap_err();
        assert!(err.contains("Invalid test suite JSON"));
    }
}
