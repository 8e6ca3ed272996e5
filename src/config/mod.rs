pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub mod args;

#[cfg(feature = "cli")]
pub use args::{CliConfig, Command, LanguageAction};
pub use toml_config::TomlConfig;

pub const DEFAULT_API_BASE_URL: &str = "https://api.paradaim.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
/// 內容最多快取一小時
pub const DEFAULT_REVALIDATE_SECONDS: u64 = 3600;
pub const DEFAULT_PREFERENCES_PATH: &str = ".paradaim/preferences.json";
