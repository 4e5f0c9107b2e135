pub mod sheet;
pub mod workbook;

pub use sheet::{assemble, SheetData};
pub use workbook::ExportWorkbook;
