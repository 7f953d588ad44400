use crate::domain::model::{Existence, ProbeOutcome};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// 單行文字輸出（不含換行）
pub fn text_line(outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Checked(report) => match report.existence {
            Existence::Exists => format!("The path '{}' exists.", report.path.display()),
            Existence::DoesNotExist => {
                format!("The path '{}' does not exist.", report.path.display())
            }
        },
        ProbeOutcome::Failed { path, error } => {
            format!("The path '{}' could not be checked: {}", path.display(), error)
        }
    }
}

pub fn render(outcomes: &[ProbeOutcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcomes)),
        OutputFormat::Json => render_json(outcomes),
        OutputFormat::Csv => render_csv(outcomes),
    }
}

fn render_text(outcomes: &[ProbeOutcome]) -> String {
    let mut output = String::new();
    for outcome in outcomes {
        output.push_str(&text_line(outcome));
        output.push('\n');
    }
    output
}

fn render_json(outcomes: &[ProbeOutcome]) -> Result<String> {
    let mut output = serde_json::to_string_pretty(outcomes)?;
    output.push('\n');
    Ok(output)
}

fn render_csv(outcomes: &[ProbeOutcome]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["path", "exists", "kind", "checked_at", "error"])?;

    for outcome in outcomes {
        let path = outcome.path().to_string_lossy().into_owned();
        let row = match outcome {
            ProbeOutcome::Checked(report) => [
                path,
                report.existence.is_present().to_string(),
                report.kind.map(|k| k.to_string()).unwrap_or_default(),
                report.checked_at.to_rfc3339(),
                String::new(),
            ],
            ProbeOutcome::Failed { error, .. } => [
                path,
                String::new(),
                String::new(),
                String::new(),
                error.clone(),
            ],
        };
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{EntryKind, ProbeReport};
    use chrono::Utc;
    use std::path::PathBuf;

    fn checked(path: &str, existence: Existence, kind: Option<EntryKind>) -> ProbeOutcome {
        ProbeOutcome::Checked(ProbeReport {
            path: PathBuf::from(path),
            existence,
            kind,
            checked_at: Utc::now(),
        })
    }

    fn sample() -> Vec<ProbeOutcome> {
        vec![
            checked("/tmp", Existence::Exists, Some(EntryKind::Directory)),
            checked("/tmp/pepito", Existence::DoesNotExist, None),
            ProbeOutcome::Failed {
                path: PathBuf::from("/root/locked/x"),
                error: "Permission denied (os error 13)".to_string(),
            },
        ]
    }

    #[test]
    fn test_text_lines_match_expected_wording() {
        let output = render(&sample(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "The path '/tmp' exists.");
        assert_eq!(lines[1], "The path '/tmp/pepito' does not exist.");
        assert_eq!(
            lines[2],
            "The path '/root/locked/x' could not be checked: Permission denied (os error 13)"
        );
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_json_output_contains_fields() {
        let output = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = value.as_array().unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["status"], "checked");
        assert_eq!(items[0]["existence"], "exists");
        assert_eq!(items[0]["kind"], "directory");
        assert_eq!(items[1]["existence"], "does_not_exist");
        assert!(items[1]["kind"].is_null());
        assert_eq!(items[2]["status"], "failed");
        assert_eq!(items[2]["path"], "/root/locked/x");
    }

    #[test]
    fn test_csv_output_has_header_and_rows() {
        let output = render(&sample(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4); // Header + 3 rows
        assert_eq!(lines[0], "path,exists,kind,checked_at,error");
        assert!(lines[1].starts_with("/tmp,true,directory,"));
        assert!(lines[2].starts_with("/tmp/pepito,false,,"));
        assert_eq!(lines[3], "/root/locked/x,,,,Permission denied (os error 13)");
    }

    #[test]
    fn test_empty_text_render() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
    }
}
