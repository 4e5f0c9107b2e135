//! Task types do ClickUp
//!
//! Estrutura mínima de uma tarefa retornada pela API v2, reduzida ao que a
//! exportação consome: identificação, nome de exibição e custom fields.

use serde::{Deserialize, Serialize};

use super::CustomField;

/// Representa uma tarefa do ClickUp (snapshot de leitura)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// ID da tarefa
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Nome/título da tarefa
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Campos personalizados (ordem preservada da API)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
}

impl Task {
    /// Nome de exibição da tarefa (string vazia quando ausente)
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
