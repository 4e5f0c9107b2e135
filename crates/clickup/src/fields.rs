//! Formatação de valores de custom fields para exibição
//!
//! Converte o valor cru (JSON) de cada custom field em uma string uniforme
//! para a planilha de exportação. O dispatch é feito pela tag de tipo do
//! campo, nunca pelo formato do valor em runtime; valores malformados
//! degradam para string vazia em vez de abortar a linha.
//!
//! ⚠️ IMPORTANTE: Checkbox fields usam string "true"/"false", NÃO boolean!
//! ⚠️ IMPORTANTE: Timestamps de date/time são em MILISSEGUNDOS — a saída é
//! o valor em segundos (divisão por 1000), sem formatação de calendário.

use serde_json::Value;

use crate::types::CustomField;

/// Famílias de tipo de custom field, derivadas da tag `type` da API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// text / short_text / email / phone / url
    ScalarText,
    /// number / rating / auto_increment
    Numeric,
    /// checkbox
    Checkbox,
    /// drop_down (a API usa "drop_down"; payloads antigos trazem "dropdown")
    Dropdown,
    /// date / time (epoch em milissegundos)
    Temporal,
    /// users
    Users,
    /// labels / multi_select
    Labels,
    /// location
    Location,
    /// relationship
    Relationship,
    /// formula
    Formula,
    /// created_by / updated_by
    IdentityStamp,
    /// Qualquer tag não reconhecida
    Unknown,
}

impl FieldKind {
    /// Classifica a tag de tipo vinda da API
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" | "short_text" | "email" | "phone" | "url" => Self::ScalarText,
            "number" | "rating" | "auto_increment" => Self::Numeric,
            "checkbox" => Self::Checkbox,
            "drop_down" | "dropdown" => Self::Dropdown,
            "date" | "time" => Self::Temporal,
            "users" => Self::Users,
            "labels" | "multi_select" => Self::Labels,
            "location" => Self::Location,
            "relationship" => Self::Relationship,
            "formula" => Self::Formula,
            "created_by" | "updated_by" => Self::IdentityStamp,
            _ => Self::Unknown,
        }
    }
}

/// Formata o valor de um custom field como string de exibição
///
/// Regras por família de tipo:
/// - valor ausente/null → `""`, para qualquer tipo
/// - texto: a própria string (outros formatos degradam para `""`)
/// - numérico: representação decimal (a API também entrega números como string)
/// - checkbox: `"Yes"`/`"No"`
/// - dropdown: nome da opção; valor string é um option ID, resolvido via
///   `type_config.options` (fallback: o próprio ID)
/// - date/time: epoch em milissegundos → segundos decimais (`1700000000000`
///   vira `"1700000000.0"`)
/// - users / labels / relationship: nomes unidos por `", "`, itens nulos
///   ignorados
/// - location / formula / created_by / updated_by: campo aninhado
///   (`name` / `text` / `username`)
/// - tipo desconhecido: conversão genérica do valor para string
pub fn display_value(field: &CustomField) -> String {
    let value = match field.value.as_ref() {
        Some(v) if !v.is_null() => v,
        _ => return String::new(),
    };

    match FieldKind::from_tag(field.type_tag()) {
        FieldKind::ScalarText => value.as_str().unwrap_or_default().to_string(),

        FieldKind::Numeric => match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            _ => String::new(),
        },

        FieldKind::Checkbox => {
            if is_truthy(value) { "Yes" } else { "No" }.to_string()
        }

        FieldKind::Dropdown => match value {
            Value::Object(option) => option
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Value::String(option_id) => resolve_option_name(field, option_id)
                .unwrap_or_else(|| option_id.clone()),
            _ => String::new(),
        },

        FieldKind::Temporal => epoch_millis_to_seconds(value).unwrap_or_default(),

        FieldKind::Users => match value {
            Value::Array(users) => users
                .iter()
                .filter_map(Value::as_object)
                .map(|user| user.get("username").and_then(Value::as_str).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        },

        FieldKind::Labels => match value {
            Value::Array(items) => {
                let mut names = Vec::new();
                for item in items {
                    match item {
                        Value::Object(label) if label.contains_key("name") => names.push(
                            label
                                .get("name")
                                .and_then(Value::as_str)
                                .unwrap_or_default()
                                .to_string(),
                        ),
                        // Payloads com apenas o option ID: resolver pelo type_config
                        Value::String(option_id) => {
                            if let Some(name) = resolve_option_name(field, option_id) {
                                names.push(name);
                            }
                        }
                        _ => {}
                    }
                }
                names.join(", ")
            }
            _ => String::new(),
        },

        FieldKind::Location => value
            .as_object()
            .and_then(|location| location.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),

        FieldKind::Relationship => match value {
            Value::Array(linked) => linked
                .iter()
                .filter_map(Value::as_object)
                .map(|task| task.get("name").and_then(Value::as_str).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        },

        FieldKind::Formula => value
            .as_object()
            .and_then(|formula| formula.get("text"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),

        FieldKind::IdentityStamp => value
            .as_object()
            .and_then(|user| user.get("username"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),

        FieldKind::Unknown => match value {
            Value::String(s) => s.clone(),
            other => serde_json::to_string(other).unwrap_or_else(|_| {
                format!("[unsupported field type: {}]", field.type_tag())
            }),
        },
    }
}

/// Semântica de truthiness do valor JSON de um checkbox
///
/// A API grava o estado como string "true"/"false"; booleans e números
/// aparecem em payloads antigos.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "false" && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
        Value::Null => false,
    }
}

/// Converte epoch em milissegundos para segundos decimais
///
/// Segundos inteiros mantêm o sufixo `.0`; frações de segundo são
/// preservadas. A API entrega timestamps tanto como número quanto como
/// string numérica.
fn epoch_millis_to_seconds(value: &Value) -> Option<String> {
    let millis = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    let seconds = millis / 1000.0;
    if seconds.fract() == 0.0 {
        Some(format!("{:.1}", seconds))
    } else {
        Some(seconds.to_string())
    }
}

/// Resolve um option ID de dropdown/labels para o nome da opção
fn resolve_option_name(field: &CustomField, option_id: &str) -> Option<String> {
    field
        .type_config
        .as_ref()?
        .options
        .as_ref()?
        .iter()
        .find(|option| option.id.as_deref() == Some(option_id))
        .map(|option| option.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(tag: &str, value: Value) -> CustomField {
        serde_json::from_value(json!({
            "id": "field-1",
            "name": "Campo",
            "type": tag,
            "value": value
        }))
        .unwrap()
    }

    #[test]
    fn test_null_value_is_empty_for_every_type() {
        let tags = [
            "text", "short_text", "email", "phone", "url", "number", "rating",
            "auto_increment", "checkbox", "drop_down", "dropdown", "date", "time",
            "users", "labels", "multi_select", "location", "relationship",
            "formula", "created_by", "updated_by", "custom_xyz",
        ];

        for tag in tags {
            assert_eq!(display_value(&field(tag, Value::Null)), "", "tag: {}", tag);
        }
    }

    #[test]
    fn test_scalar_text_passthrough() {
        assert_eq!(display_value(&field("text", json!("hello"))), "hello");
        assert_eq!(display_value(&field("email", json!("a@b.com"))), "a@b.com");
        // Formato inesperado degrada para vazio
        assert_eq!(display_value(&field("text", json!(42))), "");
        assert_eq!(display_value(&field("url", json!({"x": 1}))), "");
    }

    #[test]
    fn test_numeric_decimal_representation() {
        assert_eq!(display_value(&field("number", json!(42))), "42");
        assert_eq!(display_value(&field("number", json!(42.5))), "42.5");
        assert_eq!(display_value(&field("rating", json!(4))), "4");
        // API também entrega números como string
        assert_eq!(display_value(&field("number", json!("1200"))), "1200");
        assert_eq!(display_value(&field("number", json!([1, 2]))), "");
    }

    #[test]
    fn test_checkbox_yes_no() {
        assert_eq!(display_value(&field("checkbox", json!(true))), "Yes");
        assert_eq!(display_value(&field("checkbox", json!(false))), "No");
        // Encoding em string usado pela API
        assert_eq!(display_value(&field("checkbox", json!("true"))), "Yes");
        assert_eq!(display_value(&field("checkbox", json!("false"))), "No");
        assert_eq!(display_value(&field("checkbox", json!(0))), "No");
        assert_eq!(display_value(&field("checkbox", json!(1))), "Yes");
    }

    #[test]
    fn test_dropdown_record_name() {
        assert_eq!(
            display_value(&field("drop_down", json!({"name": "Alta", "orderindex": 1}))),
            "Alta"
        );
        assert_eq!(display_value(&field("dropdown", json!({"name": "Alta"}))), "Alta");
        assert_eq!(display_value(&field("drop_down", json!({"id": "x"}))), "");
        assert_eq!(display_value(&field("drop_down", json!(3.5))), "");
    }

    #[test]
    fn test_dropdown_option_id_resolved_via_type_config() {
        let field: CustomField = serde_json::from_value(json!({
            "id": "field-1",
            "name": "Categoria",
            "type": "drop_down",
            "type_config": {
                "options": [
                    {"id": "opt-1", "name": "Financeiro"},
                    {"id": "opt-2", "name": "Jurídico"}
                ]
            },
            "value": "opt-2"
        }))
        .unwrap();

        assert_eq!(display_value(&field), "Jurídico");
    }

    #[test]
    fn test_dropdown_unmatched_option_id_falls_back_to_raw_id() {
        let field: CustomField = serde_json::from_value(json!({
            "id": "field-1",
            "name": "Categoria",
            "type": "drop_down",
            "type_config": {"options": [{"id": "opt-1", "name": "Financeiro"}]},
            "value": "opt-9"
        }))
        .unwrap();

        assert_eq!(display_value(&field), "opt-9");
    }

    #[test]
    fn test_temporal_millis_to_decimal_seconds() {
        assert_eq!(display_value(&field("date", json!(1700000000000i64))), "1700000000.0");
        // Frações de segundo preservadas
        assert_eq!(display_value(&field("date", json!(1700000000500i64))), "1700000000.5");
        assert_eq!(display_value(&field("time", json!(1700000000000i64))), "1700000000.0");
        // Timestamp entregue como string numérica
        assert_eq!(display_value(&field("date", json!("1700000000000"))), "1700000000.0");
        // Lixo não numérico degrada para vazio
        assert_eq!(display_value(&field("date", json!("amanhã"))), "");
    }

    #[test]
    fn test_users_joined_by_username() {
        let value = json!([
            {"id": 1, "username": "ana"},
            {"id": 2, "username": "bruno"}
        ]);
        assert_eq!(display_value(&field("users", value)), "ana, bruno");

        // Itens que não são records são ignorados
        let value = json!([{"username": "ana"}, 42]);
        assert_eq!(display_value(&field("users", value)), "ana");

        assert_eq!(display_value(&field("users", json!("ana"))), "");
    }

    #[test]
    fn test_labels_skip_nulls_preserve_order() {
        let value = json!([{"name": "A"}, null, {"name": "B"}]);
        assert_eq!(display_value(&field("labels", value.clone())), "A, B");
        assert_eq!(display_value(&field("multi_select", value)), "A, B");
    }

    #[test]
    fn test_labels_option_ids_resolved_via_type_config() {
        let field: CustomField = serde_json::from_value(json!({
            "id": "field-1",
            "name": "Tags",
            "type": "labels",
            "type_config": {
                "options": [
                    {"id": "l-1", "name": "urgente"},
                    {"id": "l-2", "name": "fiscal"}
                ]
            },
            "value": ["l-2", "l-1", "l-99"]
        }))
        .unwrap();

        // IDs não resolvidos são ignorados
        assert_eq!(display_value(&field), "fiscal, urgente");
    }

    #[test]
    fn test_location_name() {
        let value = json!({"name": "Escritório SP", "lat": -23.55, "lng": -46.63});
        assert_eq!(display_value(&field("location", value)), "Escritório SP");
        assert_eq!(display_value(&field("location", json!("SP"))), "");
    }

    #[test]
    fn test_relationship_joined_names() {
        let value = json!([{"name": "Tarefa X"}, null, {"name": "Tarefa Y"}]);
        assert_eq!(display_value(&field("relationship", value)), "Tarefa X, Tarefa Y");
        assert_eq!(display_value(&field("relationship", json!({"name": "X"}))), "");
    }

    #[test]
    fn test_formula_text() {
        assert_eq!(display_value(&field("formula", json!({"text": "42 dias"}))), "42 dias");
        assert_eq!(display_value(&field("formula", json!({"value": 42}))), "");
    }

    #[test]
    fn test_identity_stamp_username() {
        assert_eq!(
            display_value(&field("created_by", json!({"id": 7, "username": "ana"}))),
            "ana"
        );
        assert_eq!(
            display_value(&field("updated_by", json!({"id": 7, "username": "bruno"}))),
            "bruno"
        );
        assert_eq!(display_value(&field("created_by", json!(7))), "");
    }

    #[test]
    fn test_unknown_type_generic_conversion() {
        assert_eq!(display_value(&field("custom_xyz", json!(42))), "42");
        assert_eq!(display_value(&field("custom_xyz", json!("abc"))), "abc");
        assert_eq!(display_value(&field("custom_xyz", json!([1, 2]))), "[1,2]");
    }

    #[test]
    fn test_field_kind_classification() {
        assert_eq!(FieldKind::from_tag("short_text"), FieldKind::ScalarText);
        assert_eq!(FieldKind::from_tag("auto_increment"), FieldKind::Numeric);
        assert_eq!(FieldKind::from_tag("drop_down"), FieldKind::Dropdown);
        assert_eq!(FieldKind::from_tag("dropdown"), FieldKind::Dropdown);
        assert_eq!(FieldKind::from_tag("multi_select"), FieldKind::Labels);
        assert_eq!(FieldKind::from_tag("custom_xyz"), FieldKind::Unknown);
        assert_eq!(FieldKind::from_tag(""), FieldKind::Unknown);
    }
}
