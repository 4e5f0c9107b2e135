//! Tipos da API do ClickUp

mod custom_field;
mod task;

pub use custom_field::{CustomField, DropdownOption, TypeConfig};
pub use task::Task;
