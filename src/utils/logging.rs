use tracing::{error, info, warn};

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_export_started(total_lists: usize) {
    info!("🚀 Exportação iniciada: {} lista(s) configurada(s)", total_lists);
}

pub fn log_list_fetched(sheet: &str, list_id: &str, count: usize) {
    info!("📥 Lista '{}' ({}): {} tarefa(s) recuperada(s)", sheet, list_id, count);
}

pub fn log_list_empty(sheet: &str) {
    info!("ℹ️ Nenhuma tarefa para exportar da lista '{}' - aba não criada", sheet);
}

pub fn log_list_failed(sheet: &str, list_id: &str, error: &str) {
    error!("❌ Falha ao recuperar tarefas da lista '{}' ({}): {} - aba pulada", sheet, list_id, error);
}

pub fn log_sheet_appended(sheet: &str, rows: usize, columns: usize) {
    info!("📄 Aba '{}' montada: {} linha(s), {} coluna(s)", sheet, rows, columns);
}

pub fn log_export_saved(path: &str) {
    info!("✅ Backup salvo em: {}", path);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}
