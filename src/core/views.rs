//! Client-side state layered over a ready snapshot: filtering, carousels,
//! pricing period. None of it triggers a refetch.

use crate::domain::model::Article;
use std::time::Duration;

/// 卡片上最多顯示的標籤、方案或專長數
pub const CARD_PREVIEW_LIMIT: usize = 3;

pub const TESTIMONIAL_ADVANCE_INTERVAL: Duration = Duration::from_secs(6);
pub const OFFICE_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

pub fn card_preview<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(CARD_PREVIEW_LIMIT)]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub search: String,
    pub category: Option<String>,
}

impl ArticleFilter {
    pub fn new(search: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Case-insensitive match on title or excerpt, exact match on category.
    pub fn matches(&self, article: &Article) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = article.title.to_lowercase().contains(&needle)
            || article.excerpt.to_lowercase().contains(&needle);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| article.category == category);
        matches_search && matches_category
    }

    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Distinct categories in first-seen order, for the category selector.
pub fn article_categories(articles: &[Article]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for article in articles {
        if !categories.contains(&article.category) {
            categories.push(article.category.clone());
        }
    }
    categories
}

/// Index-based carousel. `pages` is fixed when the snapshot becomes ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    pages: usize,
    window: usize,
}

impl Carousel {
    /// One testimonial per page.
    pub fn testimonials(len: usize) -> Self {
        Self {
            index: 0,
            pages: len.max(1),
            window: 1,
        }
    }

    /// Three cards visible, sliding by one.
    pub fn latest_articles(len: usize) -> Self {
        Self {
            index: 0,
            pages: len.saturating_sub(2).max(1),
            window: 3,
        }
    }

    pub fn office(len: usize) -> Self {
        Self::testimonials(len)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.pages;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.pages - 1) % self.pages;
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index % self.pages;
    }

    /// Auto-advance only makes sense with more than one page.
    pub fn auto_advances(&self) -> bool {
        self.pages > 1
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.index.min(items.len());
        let end = (start + self.window).min(items.len());
        &items[start..end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficeImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const OFFICE_IMAGES: [OfficeImage; 4] = [
    OfficeImage {
        src: "/modern-creative-office-workspace.jpg",
        alt: "Modern creative office workspace",
    },
    OfficeImage {
        src: "/design-team-collaboration-space.jpg",
        alt: "Design team collaboration space",
    },
    OfficeImage {
        src: "/creative-agency-meeting-room.jpg",
        alt: "Creative agency meeting room",
    },
    OfficeImage {
        src: "/modern-office-interior.png",
        alt: "Modern office interior design",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn toggle(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback::FallbackProvider;

    #[test]
    fn test_filter_by_search_is_case_insensitive() {
        let articles = FallbackProvider::default().articles();
        let filter = ArticleFilter::new("PSYCHOLOGY", None);

        let found = filter.apply(&articles);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "user-experience-psychology");
    }

    #[test]
    fn test_filter_searches_excerpt_and_category() {
        let articles = FallbackProvider::default().articles();

        let by_excerpt = ArticleFilter::new("environmental impact", None).apply(&articles);
        assert_eq!(by_excerpt.len(), 1);

        let by_category = ArticleFilter::new("", Some("Branding".to_string())).apply(&articles);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, "2");

        let none = ArticleFilter::new("psychology", Some("Branding".to_string())).apply(&articles);
        assert!(none.is_empty());

        assert_eq!(ArticleFilter::default().apply(&articles).len(), articles.len());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut articles = FallbackProvider::default().articles();
        articles.push(articles[0].clone());

        let categories = article_categories(&articles);
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0], "Design Insights");
        assert_eq!(categories[5], "Technology");
    }

    #[test]
    fn test_testimonial_carousel_wraps() {
        let mut carousel = Carousel::testimonials(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.auto_advances());
        assert!(!Carousel::testimonials(1).auto_advances());
    }

    #[test]
    fn test_latest_articles_carousel_window() {
        let items = [1, 2, 3, 4];
        let mut carousel = Carousel::latest_articles(items.len());
        assert_eq!(carousel.pages(), 2);
        assert_eq!(carousel.visible(&items), &[1, 2, 3]);
        carousel.next();
        assert_eq!(carousel.visible(&items), &[2, 3, 4]);
        carousel.next();
        assert_eq!(carousel.index(), 0);

        assert_eq!(Carousel::latest_articles(0).pages(), 1);
        assert!(Carousel::latest_articles(0).visible::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_card_preview_limits_to_three() {
        let tags = ["a", "b", "c", "d"];
        assert_eq!(card_preview(&tags), &["a", "b", "c"]);
        assert_eq!(card_preview(&tags[..1]), &["a"]);
    }

    #[test]
    fn test_billing_period_toggle() {
        assert_eq!(BillingPeriod::default().toggle(), BillingPeriod::Yearly);
        assert_eq!(BillingPeriod::Yearly.toggle(), BillingPeriod::Monthly);
        assert_eq!(OFFICE_IMAGES.len(), Carousel::office(OFFICE_IMAGES.len()).pages());
    }
}
