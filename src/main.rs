use clap::Parser;
use paradaim_site::config::{Command, LanguageAction};
use paradaim_site::core::ConfigProvider;
use paradaim_site::server::{self, AppState};
use paradaim_site::utils::error::{ErrorSeverity, Result};
use paradaim_site::utils::{logger, validation::Validate};
use paradaim_site::{
    CliConfig, ContentFetcher, HttpContactTransport, LanguageContext, LocalStorage, TomlConfig,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs() {
        logger::init_json_logger(settings.logging.level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, settings.logging.level.as_deref());
    }

    tracing::info!("Starting paradaim-site");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(config.command, settings).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: Command, settings: TomlConfig) -> Result<()> {
    let storage = LocalStorage::new(&settings.preferences.path);

    match command {
        Command::Serve { .. } => {
            let forwarder = HttpContactTransport::new(
                settings.forward_endpoint(),
                Duration::from_secs(settings.request_timeout_secs()),
            )?;
            tracing::info!("📮 Forwarding contact submissions to {}", forwarder.endpoint());

            server::serve(
                AppState::new(forwarder),
                &settings.server.host,
                settings.server.port,
            )
            .await
        }
        Command::Fetch { category, language } => {
            let language = match language {
                Some(language) => language,
                None => LanguageContext::load(&storage).await?.language(),
            };

            let fetcher = ContentFetcher::new(&settings, language)?;
            let outcome = fetcher.fetch_json(category).await?;
            tracing::info!("📦 {} resolved from {:?}", category, outcome.source());

            let report = serde_json::json!({
                "category": category,
                "language": language,
                "source": outcome.source(),
                "data": outcome.data(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Language { action } => {
            let mut context = LanguageContext::load(&storage).await?;
            if let Some(LanguageAction::Set { code }) = action {
                context.set_language(&storage, code).await?;
                tracing::info!("🌐 Language preference saved to {}", storage.path().display());
            }
            println!("{}", context.language());
            Ok(())
        }
    }
}
