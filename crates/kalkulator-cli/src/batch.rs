//! Batch evaluation of request files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kalkulator_core::{evaluate_request, EvaluationReport, EvaluationRequest, Locale};
use tracing::{debug, info};

/// Read a list of requests. `.json` files are parsed as JSON, anything else as YAML.
pub fn load_requests(path: &Path) -> Result<Vec<EvaluationRequest>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let requests: Vec<EvaluationRequest> = if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON batch file {}", path.display()))?
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML batch file {}", path.display()))?
    };

    debug!(path = %path.display(), count = requests.len(), "batch file loaded");
    Ok(requests)
}

/// Evaluate every request in order.
pub fn run_batch(requests: &[EvaluationRequest], locale: Locale) -> Vec<EvaluationReport> {
    let reports: Vec<EvaluationReport> = requests
        .iter()
        .map(|request| evaluate_request(request, locale))
        .collect();

    let rejected = reports.iter().filter(|r| !r.outcome.is_value()).count();
    info!(total = reports.len(), rejected, "batch evaluated");
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalkulator_core::{CalcError, Operation, Outcome};
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml_requests() {
        let file = write_temp(
            ".yaml",
            r#"
- operand1: "4"
  operand2: "2"
  operation: add
- operand1: "5"
  operand2: "0"
  operation: divide
"#,
        );

        let requests = load_requests(file.path()).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1], EvaluationRequest::new("5", "0", Operation::Divide));
    }

    #[test]
    fn test_load_json_requests() {
        let file = write_temp(
            ".json",
            r#"[{"operand1": "3", "operand2": "4", "operation": "multiply"}]"#,
        );

        let requests = load_requests(file.path()).unwrap();
        assert_eq!(requests, vec![EvaluationRequest::new("3", "4", Operation::Multiply)]);
    }

    #[test]
    fn test_load_yaml_operation_symbols() {
        let file = write_temp(
            ".yaml",
            "- operand1: \"4\"\n  operand2: \"2\"\n  operation: \"+\"\n- operand1: \"9\"\n  operand2: \"3\"\n  operation: \"÷\"\n",
        );

        let requests = load_requests(file.path()).unwrap();
        assert_eq!(requests[0].operation, Operation::Add);
        assert_eq!(requests[1].operation, Operation::Divide);
    }

    #[test]
    fn test_missing_operand_defaults_to_blank() {
        let file = write_temp(".yaml", "- operand1: \"1\"\n  operation: subtract\n");
        let requests = load_requests(file.path()).unwrap();
        assert_eq!(requests[0].operand2, "");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = write_temp(".json", "{ not json");
        assert!(load_requests(file.path()).is_err());
    }

    #[test]
    fn test_unknown_operation_is_error() {
        let file = write_temp(".yaml", "- operand1: \"1\"\n  operand2: \"2\"\n  operation: modulo\n");
        assert!(load_requests(file.path()).is_err());
    }

    #[test]
    fn test_run_batch_keeps_order_and_rejections() {
        let requests = vec![
            EvaluationRequest::new("4", "2", Operation::Add),
            EvaluationRequest::new("", "2", Operation::Add),
        ];

        let reports = run_batch(&requests, Locale::En);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].outcome.text(), "6");
        assert!(matches!(
            reports[1].outcome,
            Outcome::Rejected {
                error: CalcError::EmptyInput,
                ..
            }
        ));
    }
}
