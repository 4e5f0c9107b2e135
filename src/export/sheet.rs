//! Montagem de abas: schema de colunas + linhas de dados
//!
//! Cada lista do ClickUp vira uma aba. O schema da aba é a união dos nomes
//! de custom fields vistos nas tarefas da lista, em ordem de primeira
//! ocorrência; a descoberta de colunas e a materialização das linhas são
//! passos separados para permitir teste independente.

use std::collections::HashMap;

use clickup::fields::display_value;
use clickup::types::Task;

/// Conteúdo de uma aba pronta para escrita: cabeçalho + linhas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetData {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Conjunto ordenado de nomes de colunas (ordem de inserção preservada)
#[derive(Debug, Default)]
pub struct ColumnSet {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra um nome de coluna na primeira vez em que é visto
    pub fn register(&mut self, name: &str) {
        if !self.index.contains_key(name) {
            self.index.insert(name.to_string(), self.names.len());
            self.names.push(name.to_string());
        }
    }

    /// Posição da coluna (None para nomes nunca registrados)
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Monta o conteúdo de uma aba a partir das tarefas de uma lista
///
/// Retorna `None` para uma lista sem tarefas - o chamador pula a aba em vez
/// de criar uma aba vazia.
///
/// A primeira coluna é sempre "Task Name"; as demais seguem a ordem de
/// primeira ocorrência dos nomes de custom fields entre as tarefas. Campos
/// ausentes numa tarefa ficam com célula vazia; um campo cujo nome não foi
/// descoberto no passo de schema é descartado silenciosamente.
pub fn assemble(tasks: &[Task]) -> Option<SheetData> {
    if tasks.is_empty() {
        return None;
    }

    // Passo 1: descoberta de colunas
    let mut columns = ColumnSet::new();
    for task in tasks {
        for field in &task.custom_fields {
            columns.register(field.column_name());
        }
    }

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push("Task Name".to_string());
    header.extend(columns.names().iter().cloned());

    // Passo 2: materialização das linhas, alinhadas ao schema
    let rows = tasks
        .iter()
        .map(|task| {
            let mut row = vec![String::new(); columns.len() + 1];
            row[0] = task.display_name().to_string();
            for field in &task.custom_fields {
                if let Some(idx) = columns.index_of(field.column_name()) {
                    row[idx + 1] = display_value(field);
                }
            }
            row
        })
        .collect();

    Some(SheetData { header, rows })
}
