//! CSV export of the full board tree.

use crate::{
    domain::Board,
    error::{FlowBoardError, Result},
};
use chrono::{NaiveDate, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

/// MIME type of the exported artifact.
pub const EXPORT_MIME: &str = "text/csv";

const HEADER: &str = "Board Name,Column Name,Task Title,Task Description,Created At";

/// Serializes every board, column, and card to CSV text.
///
/// Rows follow store order: boards, then columns within each board, then
/// cards within each column. A column with no cards still contributes one
/// row with empty task fields so the column is represented. Every field
/// is wrapped in double quotes; embedded quotes are escaped by doubling
/// and nothing else is special-cased.
///
/// Fails with [`FlowBoardError::NothingToExport`] when there are no
/// boards at all.
pub fn export_csv(boards: &[Board]) -> Result<String> {
    if boards.is_empty() {
        return Err(FlowBoardError::NothingToExport);
    }

    let mut out = String::from(HEADER);
    out.push('\n');

    for board in boards {
        for column in &board.columns {
            if column.cards.is_empty() {
                push_row(&mut out, &[&board.name, &column.name, "", "", ""]);
            } else {
                for card in &column.cards {
                    let created_at = card
                        .created_at
                        .to_rfc3339_opts(SecondsFormat::Millis, true);
                    push_row(
                        &mut out,
                        &[
                            &board.name,
                            &column.name,
                            &card.title,
                            card.description.as_deref().unwrap_or(""),
                            &created_at,
                        ],
                    );
                }
            }
        }
    }

    Ok(out)
}

fn push_row(out: &mut String, fields: &[&str; 5]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(&escape_csv(field));
        out.push('"');
    }
    out.push('\n');
}

/// Escapes embedded double quotes by doubling them.
fn escape_csv(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Name of the export artifact for a given date, e.g.
/// `flowboard_export_2026-08-30.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("flowboard_export_{}.csv", date)
}

/// Writes today's export artifact into `dir` and returns its path.
pub async fn export_to_file(boards: &[Board], dir: impl AsRef<Path>) -> Result<PathBuf> {
    let csv = export_csv(boards)?;
    let path = dir
        .as_ref()
        .join(export_file_name(Utc::now().date_naive()));
    fs::write(&path, csv).await?;
    Ok(path)
}
