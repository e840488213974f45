mod card;
pub use card::{SlotPlaceholder, TimeframeCard};

mod utils;
pub use utils::{card_content, CardContent};
pub(crate) use utils::card_slug;

use dioxus::logger::tracing::warn;
use futures::future::join_all;

use crate::core::source::{self, SourceError, TimeframeRecord};

/// Outcome of one render pass: one entry per display slot, in slot order,
/// or a document-level error with no slots at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardsState {
    pub slots: Vec<SlotState>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotState {
    pub index: usize,
    pub outcome: Result<TimeframeRecord, SourceError>,
}

impl CardsState {
    /// Fetches every slot's record concurrently and joins the whole fan-out
    /// before the pass is considered complete. A failed fetch lands in that
    /// slot's outcome and leaves the other slots untouched.
    pub async fn load() -> Self {
        let count = match source::record_count().await {
            Ok(count) => count,
            Err(err) => {
                warn!("tracked-time document failed to load: {err}");
                return Self {
                    slots: Vec::new(),
                    error: Some(format!("Couldn't load tracked time: {err}")),
                };
            }
        };

        let outcomes = join_all((0..count).map(source::fetch_record)).await;
        Self::assemble(outcomes)
    }

    /// Builds a pass from per-slot fetch outcomes, preserving slot order.
    pub fn assemble(outcomes: Vec<Result<TimeframeRecord, SourceError>>) -> Self {
        let slots = outcomes
            .into_iter()
            .enumerate()
            .map(|(index, outcome)| {
                if let Err(err) = &outcome {
                    warn!("slot {index} failed to load: {err}");
                }
                SlotState { index, outcome }
            })
            .collect();

        Self { slots, error: None }
    }
}
