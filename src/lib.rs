pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, TomlConfig};

pub use core::{
    contact::{ContactForm, HttpContactTransport, SubmissionOutcome},
    fallback::FallbackProvider,
    fetcher::ContentFetcher,
    i18n::{Language, LanguageContext},
    outcome::{ContentOutcome, DataSource},
    presenter::{Section, SectionKind, SectionState},
};
pub use utils::error::{Result, SiteError};
