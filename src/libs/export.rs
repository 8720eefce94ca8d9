//! Report document generation in Excel, CSV and JSON formats.
//!
//! Takes the display-ready rows produced by the report transformer and
//! persists them as a tabular document. Excel is the primary format and
//! carries the styled header and sized columns; CSV and JSON render the
//! same rows for toolchains that prefer plain formats.
//!
//! ## Features
//!
//! - **Styled Header**: Bold header row with a solid gray fill on the
//!   Excel sheet, visually separating it from data rows
//! - **Column Sizing**: Each Excel column is sized to its longest value
//!   plus padding, capped to keep very long descriptions in check
//! - **File Naming**: Timestamp-based default filenames when no output
//!   path is given
//!
//! ## Usage
//!
//! ```rust,no_run
//! use glix::libs::export::{ExportFormat, Exporter};
//!
//! # fn run(rows: &[glix::libs::report::ReportRow]) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Excel, None);
//! exporter.export(rows)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::report::{ReportRow, COLUMNS};
use crate::{msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Name of the single sheet in the Excel document.
const SHEET_NAME: &str = "GitLab Issues";

/// Padding added to the longest value when sizing a column.
const COLUMN_PADDING: usize = 2;

/// Upper bound on a column's display width, in characters.
const MAX_COLUMN_WIDTH: usize = 50;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with header styling and sized columns.
    Excel,
}

impl ExportFormat {
    /// File extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Report writer responsible for persisting transformed rows.
///
/// Encapsulates the output format and destination path; the actual
/// per-format rendering is dispatched by [`Exporter::export`].
pub struct Exporter {
    /// The desired output format
    format: ExportFormat,
    /// The destination path for the exported file
    output_path: PathBuf,
}

/// Builds the default output filename for a format, embedding the current
/// local timestamp: `gitlab_issues_20250115_143022.xlsx`.
pub fn default_file_name(format: ExportFormat) -> String {
    format!("gitlab_issues_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension())
}

/// Computes the display width of every report column.
///
/// A column's width is the character count of its longest rendered value
/// (the header included) plus [`COLUMN_PADDING`], capped at
/// [`MAX_COLUMN_WIDTH`].
pub fn column_widths(rows: &[ReportRow]) -> [usize; 10] {
    let mut widths = [0usize; 10];
    for (col, header) in COLUMNS.iter().enumerate() {
        widths[col] = header.chars().count();
    }
    for row in rows {
        for (col, value) in row.cells().iter().enumerate() {
            widths[col] = widths[col].max(value.chars().count());
        }
    }
    for width in widths.iter_mut() {
        *width = (*width + COLUMN_PADDING).min(MAX_COLUMN_WIDTH);
    }
    widths
}

impl Exporter {
    /// Creates a new exporter with the given format and optional output
    /// path. When no path is supplied, a timestamped default filename in
    /// the current directory is used.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_file_name(format)));
        Self { format, output_path }
    }

    /// Writes all rows to the destination in the configured format.
    ///
    /// The row sequence is preserved: data rows appear in the document in
    /// exactly the order they were passed in, starting immediately below
    /// the header.
    pub fn export(&self, rows: &[ReportRow]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(rows)?,
            ExportFormat::Json => self.export_json(rows)?,
            ExportFormat::Excel => self.export_excel(rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Writes the rows as a CSV table with the fixed header record.
    fn export_csv(&self, rows: &[ReportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path).map_err(|e| self.write_error(e))?;

        wtr.write_record(COLUMNS).map_err(|e| self.write_error(e))?;
        for row in rows {
            wtr.write_record(&row.cells()).map_err(|e| self.write_error(e))?;
        }

        wtr.flush().map_err(|e| self.write_error(e))?;
        Ok(())
    }

    /// Writes the rows as a pretty-printed JSON array.
    fn export_json(&self, rows: &[ReportRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)
            .and_then(|mut file| file.write_all(json.as_bytes()))
            .map_err(|e| self.write_error(e))?;
        Ok(())
    }

    /// Writes the rows as an Excel workbook.
    ///
    /// One sheet named "GitLab Issues": a bold, gray-filled header row,
    /// one data row per report row, and per-column widths from
    /// [`column_widths`]. The issue number is written as a number so the
    /// sheet sorts on it naturally; everything else is text.
    fn export_excel(&self, rows: &[ReportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header_format = Format::new().set_bold().set_background_color(Color::RGB(0xCCCCCC));

        for (col, header) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_number(r, 0, row.iid as f64)?;
            worksheet.write_string(r, 1, &row.title)?;
            worksheet.write_string(r, 2, &row.description)?;
            worksheet.write_string(r, 3, &row.author)?;
            worksheet.write_string(r, 4, &row.state)?;
            worksheet.write_string(r, 5, &row.assignees)?;
            worksheet.write_string(r, 6, &row.labels)?;
            worksheet.write_string(r, 7, &row.created_at)?;
            worksheet.write_string(r, 8, &row.time_estimate)?;
            worksheet.write_string(r, 9, &row.time_spent)?;
        }

        for (col, width) in column_widths(rows).iter().enumerate() {
            worksheet.set_column_width(col as u16, *width as f64)?;
        }

        workbook.save(&self.output_path).map_err(|e| self.write_error(e))?;
        Ok(())
    }

    /// Builds the fatal error reported when the destination cannot be
    /// created or written.
    fn write_error(&self, cause: impl Display) -> anyhow::Error {
        msg_error_anyhow!(Message::ExportWriteFailed(self.output_path.display().to_string(), cause.to_string()))
    }
}
