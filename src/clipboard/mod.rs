pub mod system;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::models::error::CatalogError;

pub use system::SystemClipboard;

/// How long the "copied" confirmation stays visible
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Destination for copied text
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), CatalogError>;
}

/// Transient "copied" indicator
#[derive(Debug, Default)]
pub struct CopyIndicator {
    copied_at: Mutex<Option<Instant>>,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_copied(&self) {
        self.mark_copied_at(Instant::now());
    }

    pub fn mark_copied_at(&self, at: Instant) {
        *self.copied_at.lock() = Some(at);
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        match *self.copied_at.lock() {
            Some(at) => now.saturating_duration_since(at) < COPY_FEEDBACK,
            None => false,
        }
    }
}

/// Best-effort copy. Failures are logged; the indicator only flips on success.
pub async fn copy_to_clipboard(
    sink: &dyn ClipboardSink,
    indicator: &CopyIndicator,
    text: &str,
) -> bool {
    match sink.write_text(text).await {
        Ok(()) => {
            indicator.mark_copied();
            true
        }
        Err(e) => {
            tracing::warn!("Failed to copy to clipboard: {}", e);
            false
        }
    }
}
