//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Spreadsheet file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Format Errors ===
    /// Extension is not a supported spreadsheet format.
    #[error("unsupported file type for {path} (expected .xlsx, .xls, .xlsm, .xlsb, .ods or .csv)")]
    UnsupportedFormat { path: PathBuf },

    /// CSV text is not UTF-8.
    #[error("{path} is not UTF-8 encoded ({encoding}); save it as \"CSV UTF-8\" and retry")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheets.
    #[error("workbook {path} has no sheets")]
    NoSheets { path: PathBuf },

    // === Content Errors ===
    /// Sheet has no header row or no data rows.
    #[error("{path} is empty or has no data rows")]
    EmptySheet { path: PathBuf },
}

impl IngestError {
    /// Short message suitable for showing to the person who uploaded the file.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::UnsupportedFormat { .. } => {
                "Please upload a valid spreadsheet file (.xlsx, .xls, .csv)"
            }
            Self::EmptySheet { .. } => "Spreadsheet is empty or has no data rows",
            Self::FileTooLarge { .. } => "Spreadsheet is too large to import",
            Self::UnsupportedEncoding { .. } => "Please save the CSV file with UTF-8 encoding",
            Self::FileNotFound { .. } | Self::FileRead { .. } => "Could not read the file",
            Self::CsvParse { .. } | Self::Workbook { .. } | Self::NoSheets { .. } => {
                "Error parsing spreadsheet file"
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/parts.xlsx"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/parts.xlsx");
    }

    #[test]
    fn test_user_message_for_empty_sheet() {
        let err = IngestError::EmptySheet {
            path: PathBuf::from("parts.csv"),
        };
        assert_eq!(err.user_message(), "Spreadsheet is empty or has no data rows");
    }

    #[test]
    fn test_encoding_error_names_the_encoding() {
        let err = IngestError::UnsupportedEncoding {
            path: PathBuf::from("parts.csv"),
            encoding: "UTF-16 LE",
        };
        assert_eq!(
            err.to_string(),
            "parts.csv is not UTF-8 encoded (UTF-16 LE); save it as \"CSV UTF-8\" and retry"
        );
        assert_eq!(err.user_message(), "Please save the CSV file with UTF-8 encoding");
    }
}
