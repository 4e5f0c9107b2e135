//! Cliente da API ClickUp para a exportação de backup
//!
//! Este crate fornece o subconjunto de leitura da API v2 que a exportação
//! consome, mais a formatação de custom fields para planilha:
//!
//! - `client`: HTTP (reqwest) com timeouts e tratamento de erro da API
//! - `tasks`: listagem de tarefas de uma lista
//! - `fields`: valor de custom field → string de exibição
//! - `types`: Task, CustomField e configuração de opções
//!
//! # Decisão técnica - Crate local
//!
//! O crate permanece local (não publicado) para manter controle total sobre
//! as particularidades da API que afetam a exportação (checkbox como string
//! "true"/"false", timestamps em milissegundos, option IDs de dropdown).
//!
//! # Exemplo básico
//!
//! ```rust,ignore
//! use clickup::{ClickUpClient, tasks::TaskManager};
//!
//! let api_token = std::env::var("CLICKUP_API_TOKEN")
//!     .expect("CLICKUP_API_TOKEN não configurado");
//!
//! let client = ClickUpClient::new(api_token)?;
//! let manager = TaskManager::new(client);
//! let tasks = manager.get_tasks_in_list("901100000001").await?;
//! ```

pub mod client;
pub mod error;
pub mod fields;
pub mod tasks;
pub mod types;

// Re-exports principais
pub use client::ClickUpClient;
pub use error::{ClickUpError, Result};
pub use fields::display_value;
pub use tasks::TaskManager;
pub use types::{CustomField, Task};
