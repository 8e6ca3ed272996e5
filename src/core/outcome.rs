use serde::Serialize;

/// 資料來源，只用於診斷與測試；畫面渲染不區分兩者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Remote,
    Fallback,
}

/// Result of one content read. Both variants carry the same shape, so
/// rendering code never branches on where the data came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentOutcome<T> {
    Remote(T),
    Fallback(T),
}

impl<T> ContentOutcome<T> {
    pub fn source(&self) -> DataSource {
        match self {
            ContentOutcome::Remote(_) => DataSource::Remote,
            ContentOutcome::Fallback(_) => DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ContentOutcome::Fallback(_))
    }

    pub fn data(&self) -> &T {
        match self {
            ContentOutcome::Remote(data) | ContentOutcome::Fallback(data) => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            ContentOutcome::Remote(data) | ContentOutcome::Fallback(data) => data,
        }
    }

    /// Transforms the payload while keeping the origin.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ContentOutcome<U> {
        match self {
            ContentOutcome::Remote(data) => ContentOutcome::Remote(f(data)),
            ContentOutcome::Fallback(data) => ContentOutcome::Fallback(f(data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_source() {
        let remote = ContentOutcome::Remote(vec![1, 2, 3, 4, 5]).map(|v| v.len());
        assert_eq!(remote, ContentOutcome::Remote(5));

        let fallback = ContentOutcome::Fallback("x").map(str::len);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.source(), DataSource::Fallback);
        assert_eq!(fallback.into_inner(), 1);
    }
}
