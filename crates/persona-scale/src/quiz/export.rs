use super::answers::AnswerSet;
use super::catalog::ItemCatalog;
use super::scoring::QuizResult;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

const BYTE_ORDER_MARK: &str = "\u{feff}";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to build CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to build JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unsupported export format `{other}`")),
        }
    }
}

/// `personality_results_<unix millis>.<ext>`
pub fn export_file_name(format: ExportFormat, generated_at: DateTime<Utc>) -> String {
    format!(
        "personality_results_{}.{}",
        generated_at.timestamp_millis(),
        format.extension()
    )
}

#[derive(Serialize)]
struct JsonExport<'a> {
    answers: &'a AnswerSet,
    results: &'a QuizResult,
    meta: ExportMeta<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportMeta<'a> {
    four_letter_type: &'a str,
    generated_at: String,
}

pub fn export_json(
    answers: &AnswerSet,
    result: &QuizResult,
    generated_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    let payload = JsonExport {
        answers,
        results: result,
        meta: ExportMeta {
            four_letter_type: result.full_type(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        },
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Three CSV sections separated by blank lines: per-item answers, group
/// averages, and the result summary. Prefixed with a byte order mark so
/// spreadsheet tools pick UTF-8 for the Chinese item text.
pub fn export_csv(
    answers: &AnswerSet,
    result: &QuizResult,
    catalog: &ItemCatalog,
) -> Result<String, ExportError> {
    let mut sections = Vec::with_capacity(3);

    let mut items = csv::Writer::from_writer(Vec::new());
    items.write_record(["Question ID", "Question Text", "Score"])?;
    for item in catalog.items() {
        let score = answers
            .get(item.id)
            .map(|score| score.to_string())
            .unwrap_or_default();
        items.write_record([item.id.to_string().as_str(), item.text.as_str(), score.as_str()])?;
    }
    sections.push(finish_section(items)?);

    let mut dimensions = csv::Writer::from_writer(Vec::new());
    dimensions.write_record(["Dimension", "Score"])?;
    for (group, average) in result.raw_scores().entries() {
        dimensions.write_record([group.key(), format!("{average:.2}").as_str()])?;
    }
    sections.push(finish_section(dimensions)?);

    let mut summary = csv::Writer::from_writer(Vec::new());
    summary.write_record(["Result Type", "Value"])?;
    summary.write_record(["Full Type", result.full_type_with_variant().as_str()])?;
    summary.write_record(["Core Type", result.core_type().key().as_str()])?;
    summary.write_record(["fourLetterType", result.full_type()])?;
    summary.write_record(["Variant", result.variant().key()])?;
    sections.push(finish_section(summary)?);

    Ok(format!("{BYTE_ORDER_MARK}{}", sections.join("\n")))
}

fn finish_section(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn render_export(
    format: ExportFormat,
    answers: &AnswerSet,
    result: &QuizResult,
    catalog: &ItemCatalog,
    generated_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => export_json(answers, result, generated_at),
        ExportFormat::Csv => export_csv(answers, result, catalog),
    }
}

/// Writes the rendered export into `dir` under [`export_file_name`].
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    answers: &AnswerSet,
    result: &QuizResult,
    catalog: &ItemCatalog,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    let contents = render_export(format, answers, result, catalog, generated_at)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(format, generated_at));
    fs::write(&path, contents)?;
    info!(path = %path.display(), format = format.extension(), "results exported");
    Ok(path)
}
