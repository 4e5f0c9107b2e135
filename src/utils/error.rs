use thiserror::Error;

/// Erros da aplicação de exportação
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("ClickUp API error: {0}")]
    ClickUpApi(#[from] clickup::ClickUpError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Nothing to export: no sheet was produced")]
    EmptyExport,
}

pub type ExportResult<T> = Result<T, ExportError>;
