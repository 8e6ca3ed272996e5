use crate::domain::model::ContactSubmission;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 本機鍵值儲存，對應瀏覽器的 localStorage
pub trait PreferenceStore: Send + Sync {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn contact_endpoint(&self) -> String;
    fn request_timeout_secs(&self) -> u64;
    fn revalidate_secs(&self) -> u64;
}

/// 聯絡表單的單次寫入通道。任何 2xx 即成功，回傳原始回應內容
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<Vec<u8>>;
}
