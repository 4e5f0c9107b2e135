//! Exportador de backup ClickUp → Excel
//!
//! Fluxo (one-shot, estritamente sequencial):
//! - Carrega configuração (config/ + variáveis de ambiente)
//! - Para cada lista configurada: busca tarefas → monta aba → acrescenta ao workbook
//! - Salva o arquivo .xlsx com a data no nome
//!
//! Falha de uma lista não aborta a exportação: a aba é pulada e o operador
//! é avisado. Falha ao salvar o arquivo é fatal para a execução.

use clickup::{ClickUpClient, TaskManager};
use clickup_backup_exporter::config::Settings;
use clickup_backup_exporter::export::{assemble, ExportWorkbook};
use clickup_backup_exporter::utils::{logging::*, ExportError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Carregar variáveis de ambiente do arquivo .env (se existir)
    if dotenvy::dotenv().is_err() {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Inicializar tracing
    tracing_subscriber::fmt::init();

    // Carregar configurações
    let settings = Settings::new()
        .map_err(|e| ExportError::Config(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    if settings.clickup.token.is_empty() {
        return Err(ExportError::Config("CLICKUP_API_TOKEN não configurado".to_string()).into());
    }
    if settings.export.lists.is_empty() {
        return Err(
            ExportError::Config("Nenhuma lista configurada em export.lists".to_string()).into(),
        );
    }

    // Criar cliente ClickUp
    let client = match settings.clickup.base_url.as_deref() {
        Some(base_url) => ClickUpClient::with_base_url(settings.clickup.token.clone(), base_url),
        None => ClickUpClient::new(settings.clickup.token.clone()),
    }
    .map_err(ExportError::ClickUpApi)?;
    let manager = TaskManager::new(client);

    // Validar token antes de iniciar (falha aqui vira warning: cada lista
    // reporta a própria falha individualmente)
    match manager.test_connection().await {
        Ok(user) => {
            let username = user
                .pointer("/user/username")
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            log_info(&format!("🔑 Autenticado no ClickUp como '{}'", username));
        }
        Err(e) => log_warning(&format!("⚠️ Falha ao validar token do ClickUp: {}", e)),
    }

    log_export_started(settings.export.lists.len());

    // Uma aba por lista, estritamente na ordem de configuração
    let mut workbook = ExportWorkbook::new();
    for mapping in &settings.export.lists {
        let tasks = match manager.get_tasks_in_list(&mapping.id).await {
            Ok(tasks) => tasks,
            Err(e) => {
                log_list_failed(&mapping.sheet, &mapping.id, &e.to_string());
                continue;
            }
        };

        log_list_fetched(&mapping.sheet, &mapping.id, tasks.len());

        match assemble(&tasks) {
            Some(sheet) => {
                workbook.append_sheet(&mapping.sheet, &sheet.header, &sheet.rows)?;
                log_sheet_appended(&mapping.sheet, sheet.rows.len(), sheet.header.len());
            }
            None => log_list_empty(&mapping.sheet),
        }
    }

    // Persistir com a data no nome do arquivo
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let output_path = settings.export.output_file(&date);

    workbook.save(&output_path)?;
    log_export_saved(&output_path.display().to_string());

    Ok(())
}
