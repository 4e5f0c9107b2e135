// Biblioteca do exportador ClickUp → Excel
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod export;
pub mod utils;
