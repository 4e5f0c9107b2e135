//! Escrita do arquivo .xlsx
//!
//! Fronteira fina sobre `rust_xlsxwriter`: acumula uma aba por lista
//! exportada e persiste o arquivo no final. Diferente de bibliotecas que
//! criam uma aba placeholder, aqui um workbook sem nenhuma aba real é um
//! erro de execução - não existe arquivo de backup vazio.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::utils::error::{ExportError, ExportResult};

/// Acumulador do arquivo de exportação (uma aba por lista)
pub struct ExportWorkbook {
    workbook: Workbook,
    sheet_count: usize,
}

impl ExportWorkbook {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            sheet_count: 0,
        }
    }

    /// Acrescenta uma aba com cabeçalho e linhas de células string
    ///
    /// As abas são acrescentadas na ordem de chamada, que segue a ordem das
    /// listas configuradas.
    pub fn append_sheet(
        &mut self,
        label: &str,
        header: &[String],
        rows: &[Vec<String>],
    ) -> ExportResult<()> {
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(label)?;

        for (col, title) in header.iter().enumerate() {
            worksheet.write_string(0, col as u16, title.as_str())?;
        }
        for (row_idx, row) in rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                worksheet.write_string((row_idx + 1) as u32, col as u16, cell.as_str())?;
            }
        }

        self.sheet_count += 1;
        Ok(())
    }

    /// Número de abas já acrescentadas
    pub fn sheet_count(&self) -> usize {
        self.sheet_count
    }

    /// Persiste o arquivo; falha se nenhuma aba foi acrescentada
    pub fn save(mut self, path: &Path) -> ExportResult<()> {
        if self.sheet_count == 0 {
            return Err(ExportError::EmptyExport);
        }

        self.workbook.save(path)?;
        Ok(())
    }
}

impl Default for ExportWorkbook {
    fn default() -> Self {
        Self::new()
    }
}
