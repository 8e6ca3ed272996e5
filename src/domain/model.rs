use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// 網站上所有可顯示的內容類別，對應遠端 API 的路徑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Articles,
    Services,
    Team,
    Pricing,
    Testimonials,
    Projects,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 6] = [
        ContentCategory::Articles,
        ContentCategory::Services,
        ContentCategory::Team,
        ContentCategory::Pricing,
        ContentCategory::Testimonials,
        ContentCategory::Projects,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ContentCategory::Articles => "articles",
            ContentCategory::Services => "services",
            ContentCategory::Team => "team",
            ContentCategory::Pricing => "pricing",
            ContentCategory::Testimonials => "testimonials",
            ContentCategory::Projects => "projects",
        }
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
}

/// 文章。`slug` 是唯一的對外查詢鍵，`id` 不用於路由
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub category: String,
    pub published_at: String,
    /// Minutes. Remote data may carry fractions.
    pub read_time: f64,
    pub image: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Accepts both `2025-01-15` and RFC 3339 timestamps.
    pub fn published_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.published_at, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(&self.published_at)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }

    /// e.g. "January 15, 2025"; falls back to the raw value when unparseable.
    pub fn display_date(&self) -> String {
        self.published_date()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.published_at.clone())
    }

    pub fn word_count(&self) -> usize {
        self.content.split(' ').count()
    }

    /// ISO 8601 duration used in structured data, e.g. `PT5M`. Rounded to
    /// whole minutes.
    pub fn time_required(&self) -> String {
        format!("PT{}M", self.read_time.round() as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Palette,
    Code,
    Wrench,
    Printer,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: String,
    pub experience: String,
    pub specialties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanIcon {
    Zap,
    Star,
    Crown,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Default,
    Outline,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
    pub icon: PlanIcon,
    pub button_text: String,
    pub button_variant: ButtonVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    /// 1-5 by convention; not enforced.
    pub rating: i32,
    pub image: String,
}

/// 聯絡表單的一次性輸入，不會被保存
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}
