pub mod contact;
pub mod fallback;
pub mod fetcher;
pub mod i18n;
pub mod outcome;
pub mod presenter;
pub mod views;

pub use crate::domain::model::{Article, ContactSubmission, ContentCategory};
pub use crate::domain::ports::{ConfigProvider, ContactTransport, PreferenceStore};
pub use crate::utils::error::Result;
