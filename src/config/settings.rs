use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub clickup: ClickUpSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClickUpSettings {
    pub token: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportSettings {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_filename_format")]
    pub filename_format: String,
    // Array (não tabela) para preservar a ordem das abas
    #[serde(default)]
    pub lists: Vec<ListMapping>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListMapping {
    pub sheet: String,
    pub id: String,
}

fn default_output_path() -> String {
    ".".to_string()
}

fn default_filename_format() -> String {
    "clickup_backup_{date}.xlsx".to_string()
}

impl ExportSettings {
    /// Caminho completo do arquivo de saída, com `{date}` substituído
    pub fn output_file(&self, date: &str) -> PathBuf {
        let filename = self.filename_format.replace("{date}", date);
        Path::new(&self.path).join(filename)
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Variáveis de ambiente específicas
        if let Ok(token) = std::env::var("CLICKUP_API_TOKEN") {
            builder = builder.set_override("clickup.token", token)?;
        }
        if let Ok(path) = std::env::var("EXPORT_OUTPUT_PATH") {
            builder = builder.set_override("export.path", path)?;
        }

        builder = builder.add_source(Environment::with_prefix("CLICKUP_EXPORT"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}
