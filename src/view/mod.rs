// Headless view layer: pure functions from application state to view
// trees, plus the session-local presentation state (collapse flags,
// transient flash/toast). Rendering to text lives in cli::output.

pub mod processes;
pub mod summary;
pub mod timeline;

pub use processes::{
    classify, process_list_view, DimensionRowView, ProcessEntryView, ProcessListView,
    RatingOptionView, SectionView,
};
pub use summary::{summary_view, SummaryView};
pub use timeline::{timeline_view, MarkerStatus, TimelineMarker, TimelineView};

use crate::models::Priority;
use std::time::{Duration, Instant};

/// How long a tapped rating option stays highlighted and a toast stays up
pub const TRANSIENT_TTL: Duration = Duration::from_secs(3);

/// Session-local presentation state. Never persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    critical_collapsed: bool,
    recommended_collapsed: bool,
    future_collapsed: bool,
    flash: Option<Flash>,
    toast: Option<Toast>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Flash {
    process_id: String,
    dimension_id: String,
    index: u8,
    expires_at: Instant,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

impl Default for ViewState {
    /// Critical and recommended sections start expanded, future collapsed
    fn default() -> Self {
        Self {
            critical_collapsed: false,
            recommended_collapsed: false,
            future_collapsed: true,
            flash: None,
            toast: None,
        }
    }
}

impl ViewState {
    pub fn is_collapsed(&self, priority: Priority) -> bool {
        match priority {
            Priority::Critical => self.critical_collapsed,
            Priority::Recommended => self.recommended_collapsed,
            Priority::Future => self.future_collapsed,
        }
    }

    /// Flip one section's visibility; the other sections are untouched
    pub fn toggle(&mut self, priority: Priority) {
        let flag = match priority {
            Priority::Critical => &mut self.critical_collapsed,
            Priority::Recommended => &mut self.recommended_collapsed,
            Priority::Future => &mut self.future_collapsed,
        };
        *flag = !*flag;
    }

    /// Mark a rating option as just-tapped; clears itself after
    /// `TRANSIENT_TTL`
    pub fn flash(&mut self, process_id: &str, dimension_id: &str, index: u8, now: Instant) {
        self.flash = Some(Flash {
            process_id: process_id.to_string(),
            dimension_id: dimension_id.to_string(),
            index,
            expires_at: now + TRANSIENT_TTL,
        });
    }

    pub fn is_flashing(
        &self,
        process_id: &str,
        dimension_id: &str,
        index: u8,
        now: Instant,
    ) -> bool {
        match &self.flash {
            Some(f) => {
                f.process_id == process_id
                    && f.dimension_id == dimension_id
                    && f.index == index
                    && now < f.expires_at
            }
            None => false,
        }
    }

    pub fn show_toast(&mut self, message: &str, now: Instant) {
        self.toast = Some(Toast {
            message: message.to_string(),
            expires_at: now + TRANSIENT_TTL,
        });
    }

    pub fn toast(&self, now: Instant) -> Option<&str> {
        match &self.toast {
            Some(t) if now < t.expires_at => Some(t.message.as_str()),
            _ => None,
        }
    }

    /// Drop expired transient state
    pub fn tick(&mut self, now: Instant) {
        if self.flash.as_ref().is_some_and(|f| now >= f.expires_at) {
            self.flash = None;
        }
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
    }
}
