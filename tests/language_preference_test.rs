use paradaim_site::core::i18n::{translate, LANGUAGE_STORAGE_KEY};
use paradaim_site::core::PreferenceStore;
use paradaim_site::{Language, LanguageContext, LocalStorage};
use tempfile::TempDir;

#[tokio::test]
async fn test_language_survives_reload() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("preferences.json");

    let storage = LocalStorage::new(&path);
    let mut context = LanguageContext::load(&storage).await?;
    assert_eq!(context.language(), Language::En);

    context.set_language(&storage, Language::De).await?;
    assert_eq!(context.t("nav.home"), translate("nav.home", Language::De));

    // 模擬重新開啟網站
    let reopened = LocalStorage::new(&path);
    let restored = LanguageContext::load(&reopened).await?;
    assert_eq!(restored.language(), Language::De);
    assert_eq!(
        reopened.get_item(LANGUAGE_STORAGE_KEY).await?.as_deref(),
        Some("de")
    );
    Ok(())
}

#[tokio::test]
async fn test_unsupported_stored_value_uses_default() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::new(dir.path().join("preferences.json"));
    storage.set_item(LANGUAGE_STORAGE_KEY, "fr").await?;

    let context = LanguageContext::load(&storage).await?;

    assert_eq!(context.language(), Language::En);
    Ok(())
}

#[test]
fn test_missing_key_is_returned_as_is() {
    assert_eq!(translate("nav.nowhere", Language::De), "nav.nowhere");
    assert_eq!(translate("contact.error.title", Language::De), "Fehler");
}
