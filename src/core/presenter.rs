use crate::core::outcome::ContentOutcome;
use std::future::Future;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// 頁面上會各自抓取資料的區塊
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    LatestArticles,
    ArticleIndex,
    RelatedArticles,
    Services,
    Team,
    Pricing,
    Testimonials,
    Projects,
}

impl SectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::LatestArticles => "latest-articles",
            SectionKind::ArticleIndex => "article-index",
            SectionKind::RelatedArticles => "related-articles",
            SectionKind::Services => "services",
            SectionKind::Team => "team",
            SectionKind::Pricing => "pricing",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Projects => "projects",
        }
    }

    /// Skeleton cards shown while loading, sized to the ready layout.
    pub fn placeholder_slots(&self) -> usize {
        match self {
            SectionKind::LatestArticles => 3,
            SectionKind::ArticleIndex => 6,
            SectionKind::RelatedArticles => 3,
            SectionKind::Services => 4,
            SectionKind::Team => 6,
            SectionKind::Pricing => 3,
            SectionKind::Testimonials => 1,
            SectionKind::Projects => 6,
        }
    }
}

/// Only two visible states. A failed read is not a state of its own: it
/// arrives as `Ready(ContentOutcome::Fallback(..))`.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Loading,
    Ready(ContentOutcome<T>),
}

impl<T> SectionState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, SectionState::Ready(_))
    }
}

/// A mounted page section. Its single read starts on mount, runs on the
/// tokio runtime and is cancelled on unmount or drop; a cancelled read never
/// moves the section out of `Loading`.
pub struct Section<T> {
    kind: SectionKind,
    state: watch::Receiver<SectionState<T>>,
    cancel: CancellationToken,
}

impl<T> Section<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn mount<F>(kind: SectionKind, read: F) -> Self
    where
        F: Future<Output = ContentOutcome<T>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(SectionState::Loading);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!("Section {} unmounted before its read resolved", kind.name());
                }
                outcome = read => {
                    if token.is_cancelled() {
                        return;
                    }
                    tracing::debug!(
                        "Section {} ready ({:?})",
                        kind.name(),
                        outcome.source()
                    );
                    tx.send_replace(SectionState::Ready(outcome));
                }
            }
        });

        Self {
            kind,
            state: rx,
            cancel,
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn state(&self) -> SectionState<T> {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        !self.state.borrow().is_ready()
    }

    /// Waits for the read to resolve. `None` if the section was unmounted first.
    pub async fn ready(&mut self) -> Option<ContentOutcome<T>> {
        let state = self.state.wait_for(SectionState::is_ready).await.ok()?;
        match &*state {
            SectionState::Ready(outcome) => Some(outcome.clone()),
            SectionState::Loading => None,
        }
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl<T> Drop for Section<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_section_moves_to_ready() {
        let mut section = Section::mount(SectionKind::Pricing, async {
            ContentOutcome::Fallback(vec![1, 2, 3])
        });

        let outcome = section.ready().await.unwrap();
        assert!(outcome.is_fallback());
        assert!(!section.is_loading());
        assert_eq!(
            section.state(),
            SectionState::Ready(ContentOutcome::Fallback(vec![1, 2, 3]))
        );
    }

    #[tokio::test]
    async fn test_unmount_cancels_in_flight_read() {
        let mut section = Section::mount(SectionKind::Team, async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            ContentOutcome::Remote(vec!["late".to_string()])
        });
        assert!(section.is_loading());

        section.unmount();

        assert_eq!(section.ready().await, None);
        assert_eq!(section.state(), SectionState::Loading);
    }

    #[test]
    fn test_placeholder_slots_match_layouts() {
        assert_eq!(SectionKind::ArticleIndex.placeholder_slots(), 6);
        assert_eq!(SectionKind::Pricing.placeholder_slots(), 3);
        assert_eq!(SectionKind::Testimonials.placeholder_slots(), 1);
    }
}
