use crate::core::i18n::Language;
use crate::domain::model::ContentCategory;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

use super::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "paradaim-site")]
#[command(about = "Content engine and contact handler for the Paradaim site")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Content API base URL")]
    pub api_base_url: Option<String>,

    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Preference store file")]
    pub preferences_path: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit JSON log lines")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the contact form handler
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch one content category, substituting bundled data on failure
    Fetch {
        #[arg(value_enum)]
        category: ContentCategory,

        /// Defaults to the stored language preference
        #[arg(long)]
        language: Option<Language>,
    },
    /// Show or change the stored display language
    Language {
        #[command(subcommand)]
        action: Option<LanguageAction>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum LanguageAction {
    Get,
    Set { code: Language },
}

impl CliConfig {
    /// Loads `--config` when given (defaults otherwise) and lets the global
    /// flags override it.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(base_url) = &self.api_base_url {
            settings.api.base_url = base_url.clone();
        }
        if let Some(path) = &self.preferences_path {
            settings.preferences.path = path.clone();
        }
        if self.json_logs {
            settings.logging.json = Some(true);
        }
        if let Command::Serve { host, port } = &self.command {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }

        Ok(settings)
    }
}
