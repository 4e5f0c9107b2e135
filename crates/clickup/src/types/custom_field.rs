//! Custom Fields do ClickUp
//!
//! A API do ClickUp suporta mais de uma dúzia de tipos de custom fields,
//! cada um com formato de valor específico. O campo `value` é mantido como
//! JSON cru e interpretado apenas na hora de formatar (ver [`crate::fields`]).
//!
//! ⚠️ IMPORTANTE: Checkbox fields usam string "true"/"false", NÃO boolean!
//! ⚠️ IMPORTANTE: Timestamps são em MILISSEGUNDOS, não segundos!

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Representa um custom field de uma tarefa do ClickUp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    /// ID do custom field (UUID)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Nome do campo (usado como chave de coluna na exportação)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tipo do campo (e.g. "text", "drop_down", "date", "users")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Configuração específica do tipo (opções de dropdown/labels)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_config: Option<TypeConfig>,

    /// Valor do campo (formato depende do tipo; pode ser null/ausente)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
}

impl CustomField {
    /// Tag de tipo do campo (string vazia quando ausente)
    pub fn type_tag(&self) -> &str {
        self.type_.as_deref().unwrap_or("")
    }

    /// Nome do campo como chave de coluna (string vazia quando ausente)
    pub fn column_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Configuração específica de cada tipo de campo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeConfig {
    /// Para dropdown/labels: opções disponíveis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DropdownOption>>,
}

/// Opção de dropdown/labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// ID da opção (UUID)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Nome da opção
    pub name: String,

    /// Cor da opção (hex color)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Ordem da opção
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<i32>,
}
