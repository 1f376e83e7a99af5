//! `check` subcommand: validate a clause file without starting the server

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clause_engine::{parse_clauses_str, ClauseEngine, InputError};
use thiserror::Error;
use tracing::{error, info};

use crate::api::AnalyzeResponse;
use crate::CheckArgs;

/// Exit code when the file was checked and is clean
const EXIT_CLEAN: u8 = 0;
/// Exit code when the file was checked and issues were found
const EXIT_ISSUES: u8 = 1;
/// Exit code when the file could not be checked at all
const EXIT_INPUT_ERROR: u8 = 2;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Rendered result of one check
#[derive(Debug)]
pub struct CheckOutcome {
    pub output: String,
    pub clean: bool,
}

pub fn run_check(args: &CheckArgs) -> ExitCode {
    ExitCode::from(check_status(args))
}

/// Run the check, print the report and return the process exit status
fn check_status(args: &CheckArgs) -> u8 {
    match check_file(&args.file, args.json) {
        Ok(outcome) => {
            print!("{}", outcome.output);
            if outcome.clean {
                EXIT_CLEAN
            } else {
                EXIT_ISSUES
            }
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            EXIT_INPUT_ERROR
        }
    }
}

pub fn check_file(path: &Path, json: bool) -> Result<CheckOutcome, CheckError> {
    let text = std::fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Checking {}", path.display());
    check_text(&text, json)
}

/// Validate clause JSON text and render the report
pub fn check_text(text: &str, json: bool) -> Result<CheckOutcome, CheckError> {
    let clauses = parse_clauses_str(text)?;
    let analysis = ClauseEngine::new().analyze(&clauses);
    let clean = analysis.issues.is_clean();

    let output = if json {
        let mut rendered = serde_json::to_string_pretty(&AnalyzeResponse::from(analysis))?;
        rendered.push('\n');
        rendered
    } else {
        format!(
            "Checked {} clauses\n{}",
            analysis.clauses.len(),
            analysis.issues.to_text()
        )
    };

    Ok(CheckOutcome { output, clean })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"clause_number": "1", "clause_title": "Intro", "clause_page": "1"},
        {"clause_number": "3", "clause_title": "", "clause_page": "x"}
    ]"#;

    #[test]
    fn test_text_report() {
        let outcome = check_text(SAMPLE, false).unwrap();
        assert!(!outcome.clean);
        assert!(outcome.output.starts_with("Checked 2 clauses\n"));
        assert!(outcome.output.contains("expected 2 at level 1, found 3"));
        assert!(outcome.output.contains("Row 2: Clause \"3\" has no title"));
        assert!(outcome.output.contains("non-numeric: 'x'"));
    }

    #[test]
    fn test_json_report() {
        let outcome = check_text(SAMPLE, true).unwrap();
        let response: AnalyzeResponse = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(response.issue_count, 3);
        assert_eq!(response.issues.continuity_gaps[0].prev_index, 0);
    }

    #[test]
    fn test_clean_file() {
        let outcome = check_text(
            r#"{"clauses": [{"clause_number": "1", "clause_title": "A", "clause_page": 1}]}"#,
            false,
        )
        .unwrap();
        assert!(outcome.clean);
        assert!(outcome.output.contains("No structural issues detected"));
    }

    #[test]
    fn test_input_errors() {
        assert!(matches!(
            check_text("{\"clauses\": 3}", false),
            Err(CheckError::Input(InputError::NotASequence(_)))
        ));
        assert!(matches!(
            check_text("not json", false),
            Err(CheckError::Input(InputError::Json(_)))
        ));
        assert!(matches!(
            check_file(Path::new("/nonexistent/clauses.json"), false),
            Err(CheckError::Read { .. })
        ));
    }

    #[test]
    fn test_check_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let outcome = check_file(file.path(), false).unwrap();
        assert!(!outcome.clean);
    }

    fn args_for(file: &tempfile::NamedTempFile, json: bool) -> CheckArgs {
        CheckArgs {
            file: file.path().to_path_buf(),
            json,
        }
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_exit_status_reflects_outcome() {
        let clean = write_temp(r#"[{"clause_number": "1", "clause_title": "A", "clause_page": "1"}]"#);
        assert_eq!(check_status(&args_for(&clean, false)), EXIT_CLEAN);

        let with_issues = write_temp(SAMPLE);
        assert_eq!(check_status(&args_for(&with_issues, false)), 1);
        assert_eq!(check_status(&args_for(&with_issues, true)), 1);

        let broken = write_temp("{\"clauses\": [");
        assert_eq!(check_status(&args_for(&broken, false)), 2);

        let missing = CheckArgs {
            file: PathBuf::from("/nonexistent/clauses.json"),
            json: false,
        };
        assert_eq!(check_status(&missing), 2);
    }
}
