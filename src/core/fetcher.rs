use crate::core::fallback::FallbackProvider;
use crate::core::i18n::Language;
use crate::core::outcome::ContentOutcome;
use crate::domain::model::{
    Article, ContentCategory, PricingPlan, Project, Service, TeamMember, Testimonial,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// 首頁「最新文章」區塊顯示的筆數
pub const LATEST_ARTICLES_LIMIT: usize = 4;
/// 文章頁「相關文章」查詢的筆數
pub const RELATED_ARTICLES_LIMIT: usize = 3;

/// Issues one read per call against the content API and substitutes the
/// fallback dataset on any failure (network, non-2xx status, decode).
/// No retries.
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    client: Client,
    base_url: String,
    revalidate_secs: u64,
    fallback: FallbackProvider,
}

impl ContentFetcher {
    pub fn new<C: ConfigProvider>(config: &C, language: Language) -> Result<Self> {
        crate::utils::validation::validate_url("api.base_url", config.api_base_url())?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url().to_string(),
            revalidate_secs: config.revalidate_secs(),
            fallback: FallbackProvider::new(language),
        })
    }

    pub fn fallback(&self) -> &FallbackProvider {
        &self.fallback
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| SiteError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|_| SiteError::ConfigValidationError {
                field: "api.base_url".to_string(),
                message: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        revalidate: bool,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        if revalidate {
            request = request.header(CACHE_CONTROL, format!("max-age={}", self.revalidate_secs));
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SiteError::HttpStatusError {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn settle<T>(label: &str, result: Result<T>, fallback: impl FnOnce() -> T) -> ContentOutcome<T> {
        match result {
            Ok(data) => ContentOutcome::Remote(data),
            Err(e) => {
                tracing::warn!("⚠️ Using fallback {} data: {}", label, e);
                ContentOutcome::Fallback(fallback())
            }
        }
    }

    async fn list<T: DeserializeOwned>(
        &self,
        category: ContentCategory,
        fallback: impl FnOnce() -> Vec<T>,
    ) -> ContentOutcome<Vec<T>> {
        let result = self.get_json(&[category.path()], &[], false).await;
        Self::settle(category.path(), result, fallback)
    }

    pub async fn articles(&self) -> ContentOutcome<Vec<Article>> {
        self.list(ContentCategory::Articles, || self.fallback.articles())
            .await
    }

    /// Home page slice: the first four articles of whichever dataset resolved.
    pub async fn latest_articles(&self) -> ContentOutcome<Vec<Article>> {
        self.list(ContentCategory::Articles, || self.fallback.latest_articles())
            .await
            .map(|articles| articles.into_iter().take(LATEST_ARTICLES_LIMIT).collect())
    }

    /// `None` when the slug has neither a remote nor a fallback record.
    pub async fn article(&self, slug: &str) -> ContentOutcome<Option<Article>> {
        let result = self
            .get_json::<Article>(&[ContentCategory::Articles.path(), slug], &[], true)
            .await
            .map(Some);
        Self::settle("article", result, || self.fallback.article(slug))
    }

    pub async fn related_articles(
        &self,
        category: &str,
        exclude_id: &str,
    ) -> ContentOutcome<Vec<Article>> {
        let query = [
            ("category", category.to_string()),
            ("limit", RELATED_ARTICLES_LIMIT.to_string()),
            ("exclude", exclude_id.to_string()),
        ];
        let result = self
            .get_json(&[ContentCategory::Articles.path()], &query, true)
            .await;
        Self::settle("related articles", result, || {
            self.fallback.related_articles()
        })
    }

    pub async fn services(&self) -> ContentOutcome<Vec<Service>> {
        self.list(ContentCategory::Services, || self.fallback.services())
            .await
    }

    pub async fn team(&self) -> ContentOutcome<Vec<TeamMember>> {
        self.list(ContentCategory::Team, || self.fallback.team()).await
    }

    pub async fn pricing(&self) -> ContentOutcome<Vec<PricingPlan>> {
        self.list(ContentCategory::Pricing, || self.fallback.pricing())
            .await
    }

    pub async fn testimonials(&self) -> ContentOutcome<Vec<Testimonial>> {
        self.list(ContentCategory::Testimonials, || {
            self.fallback.testimonials()
        })
        .await
    }

    pub async fn projects(&self) -> ContentOutcome<Vec<Project>> {
        self.list(ContentCategory::Projects, || self.fallback.projects())
            .await
    }

    /// Category-erased read used by the CLI, rendered as JSON.
    pub async fn fetch_json(
        &self,
        category: ContentCategory,
    ) -> Result<ContentOutcome<serde_json::Value>> {
        fn to_json<T: serde::Serialize>(
            outcome: ContentOutcome<T>,
        ) -> Result<ContentOutcome<serde_json::Value>> {
            let value = serde_json::to_value(outcome.data())?;
            Ok(outcome.map(|_| value))
        }

        match category {
            ContentCategory::Articles => to_json(self.articles().await),
            ContentCategory::Services => to_json(self.services().await),
            ContentCategory::Team => to_json(self.team().await),
            ContentCategory::Pricing => to_json(self.pricing().await),
            ContentCategory::Testimonials => to_json(self.testimonials().await),
            ContentCategory::Projects => to_json(self.projects().await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::DataSource;
    use httpmock::prelude::*;

    struct MockConfig {
        api_base_url: String,
    }

    impl MockConfig {
        fn new(api_base_url: String) -> Self {
            Self { api_base_url }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_base_url(&self) -> &str {
            &self.api_base_url
        }

        fn contact_endpoint(&self) -> String {
            format!("{}/contact", self.api_base_url)
        }

        fn request_timeout_secs(&self) -> u64 {
            5
        }

        fn revalidate_secs(&self) -> u64 {
            3600
        }
    }

    fn fetcher(base_url: String) -> ContentFetcher {
        ContentFetcher::new(&MockConfig::new(base_url), Language::En).unwrap()
    }

    #[tokio::test]
    async fn test_services_successful_api_response() {
        let server = MockServer::start_async().await;
        let mock_data = serde_json::json!([
            {"id": "seo", "title": "SEO", "description": "Search visibility", "icon": "code"},
            {"id": "video", "title": "Video", "description": "Motion", "icon": "palette",
             "packages": ["Reels", "Ads"]}
        ]);

        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/services");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(mock_data);
            })
            .await;

        let outcome = fetcher(server.base_url()).services().await;

        api_mock.assert_async().await;
        assert_eq!(outcome.source(), DataSource::Remote);
        let services = outcome.into_inner();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].id, "seo");
        assert_eq!(services[1].packages.as_ref().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_server_error_uses_fallback() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/team");
                then.status(500);
            })
            .await;

        let fetcher = fetcher(server.base_url());
        let outcome = fetcher.team().await;

        api_mock.assert_async().await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_inner(), fetcher.fallback().team());
    }

    #[tokio::test]
    async fn test_empty_remote_list_is_not_a_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/testimonials");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;

        let outcome = fetcher(server.base_url()).testimonials().await;

        assert_eq!(outcome, ContentOutcome::Remote(vec![]));
    }

    #[tokio::test]
    async fn test_latest_articles_takes_first_four_remote() {
        let server = MockServer::start_async().await;
        let articles: Vec<_> = (1..=6)
            .map(|i| {
                serde_json::json!({
                    "id": i.to_string(), "slug": format!("post-{}", i), "title": format!("Post {}", i),
                    "excerpt": "e", "category": "News", "publishedAt": "2025-01-01",
                    "readTime": 3, "image": "/p.png"
                })
            })
            .collect();
        server
            .mock_async(|when, then| {
                when.method(GET).path("/articles");
                then.status(200).json_body(serde_json::Value::Array(articles));
            })
            .await;

        let outcome = fetcher(server.base_url()).latest_articles().await;

        assert_eq!(outcome.source(), DataSource::Remote);
        let latest = outcome.into_inner();
        assert_eq!(latest.len(), 4);
        assert_eq!(latest[3].slug, "post-4");
    }

    #[tokio::test]
    async fn test_single_article_sends_revalidate_hint() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/articles/color-theory")
                    .header("cache-control", "max-age=3600");
                then.status(200).json_body(serde_json::json!({
                    "id": "9", "slug": "color-theory", "title": "Color Theory",
                    "excerpt": "e", "content": "<p>Body</p>", "category": "Design Insights",
                    "publishedAt": "2025-03-01", "readTime": 4, "image": "/c.png",
                    "author": {"name": "Sam", "avatar": "/s.png", "bio": "Designer"},
                    "tags": ["Color"]
                }));
            })
            .await;

        let outcome = fetcher(server.base_url()).article("color-theory").await;

        api_mock.assert_async().await;
        let article = outcome.into_inner().unwrap();
        assert_eq!(article.author.bio, "Designer");
    }

    #[tokio::test]
    async fn test_unknown_slug_without_remote_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/articles/missing");
                then.status(404);
            })
            .await;

        let outcome = fetcher(server.base_url()).article("missing").await;

        assert_eq!(outcome, ContentOutcome::Fallback(None));
    }

    #[tokio::test]
    async fn test_related_articles_query() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/articles")
                    .query_param("category", "Branding")
                    .query_param("limit", "3")
                    .query_param("exclude", "2");
                then.status(200).json_body(serde_json::json!([]));
            })
            .await;

        let outcome = fetcher(server.base_url())
            .related_articles("Branding", "2")
            .await;

        api_mock.assert_async().await;
        assert_eq!(outcome.source(), DataSource::Remote);
    }

    #[tokio::test]
    async fn test_fetch_json_reports_source() {
        let fetcher = fetcher("http://127.0.0.1:1".to_string());
        let outcome = fetcher.fetch_json(ContentCategory::Pricing).await.unwrap();

        assert!(outcome.is_fallback());
        assert_eq!(outcome.data().as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ContentFetcher::new(&MockConfig::new("not a url".to_string()), Language::En);
        assert!(result.is_err());
    }
}
