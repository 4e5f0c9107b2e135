// ============================================================================
// Task Manager - Leitura de tarefas do ClickUp
// ============================================================================
//
// Este módulo encapsula as operações de leitura usadas pela exportação:
//
// 1. **Listagem:**
//    - Tarefas de uma lista, incluindo subtasks (get_tasks_in_list)
//
// 2. **Administração:**
//    - Teste de conectividade/token (test_connection)
//
// # Autenticação
//
// Personal Token fixo, repassado pelo `ClickUpClient` no header
// `Authorization`.

use crate::client::ClickUpClient;
use crate::error::Result;
use crate::types::Task;
use serde_json::Value;

/// Gerenciador de tarefas do ClickUp (somente leitura)
///
/// # Thread-Safety
///
/// Este struct implementa `Clone` e pode ser compartilhado entre threads via `Arc<>`.
#[derive(Clone)]
pub struct TaskManager {
    client: ClickUpClient,
}

impl TaskManager {
    /// Cria uma nova instância do TaskManager
    pub fn new(client: ClickUpClient) -> Self {
        Self { client }
    }

    /// Cria um TaskManager a partir de um token (conveniência)
    pub fn from_token(api_token: impl Into<String>) -> Result<Self> {
        let client = ClickUpClient::new(api_token)?;
        Ok(Self::new(client))
    }

    /// Lista as tarefas de uma lista (não arquivadas, com subtasks)
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v2/list/{list_id}/task?archived=false&include_subtasks=true`
    ///
    /// # Retorno
    ///
    /// - `Ok(Vec<Task>)`: tarefas encontradas (pode ser vazio; uma resposta
    ///   sem o campo `tasks` também resulta em vazio)
    /// - `Err(ClickUpError)`: erro na comunicação com a API
    ///
    /// Tarefas individuais que falham na desserialização são puladas com
    /// warning; o restante da página sobrevive.
    ///
    /// # Paginação
    ///
    /// A API pagina em 100 tarefas; a exportação lê apenas a primeira
    /// página.
    pub async fn get_tasks_in_list(&self, list_id: &str) -> Result<Vec<Task>> {
        let endpoint = format!("/list/{}/task?archived=false&include_subtasks=true", list_id);

        let json_resp: Value = self.client.get_json(&endpoint).await?;

        // Extrair array de tasks e desserializar individualmente
        if let Some(tasks_array) = json_resp.get("tasks").and_then(|v| v.as_array()) {
            let mut tasks = Vec::new();
            for task_value in tasks_array {
                match serde_json::from_value::<Task>(task_value.clone()) {
                    Ok(task) => tasks.push(task),
                    Err(e) => {
                        tracing::warn!("⚠️ Falha ao desserializar task da lista {}: {}", list_id, e);
                        // Continua processando as outras tasks
                    }
                }
            }
            tracing::info!("✅ Listadas {} tasks da lista {}", tasks.len(), list_id);
            Ok(tasks)
        } else {
            tracing::warn!("⚠️ Resposta da API sem campo 'tasks' (lista {})", list_id);
            Ok(Vec::new())
        }
    }

    /// Testa conectividade com a API do ClickUp
    ///
    /// # Endpoint da API
    ///
    /// `GET /api/v2/user`
    ///
    /// # Uso
    ///
    /// - Validação do token no startup da exportação
    /// - Debug de problemas de autenticação
    pub async fn test_connection(&self) -> Result<Value> {
        let user_info: Value = self.client.get_json("/user").await?;
        Ok(user_info)
    }
}
