use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::cards::{card_content, card_slug};
use crate::core::{period::Period, source::TimeframeRecord};

#[component]
pub fn TimeframeCard(record: TimeframeRecord, period: Period, previous_label: String) -> Element {
    let content = match card_content(&record, period, &previous_label) {
        Ok(content) => content,
        Err(err) => {
            warn!("card for {:?} not rendered: {err}", record.title);
            return rsx! {
                SlotPlaceholder { message: format!("No {period} figures for {}", record.title) }
            };
        }
    };

    let slug = card_slug(&content.title);

    rsx! {
        article { class: "timeframe-card timeframe-card--{slug}",
            div { class: "timeframe-card__body",
                div { class: "timeframe-card__header",
                    h2 { class: "timeframe-card__title", "{content.title}" }
                    button {
                        r#type: "button",
                        class: "timeframe-card__menu",
                        aria_label: "Card options for {content.title}",
                        "···"
                    }
                }
                div { class: "timeframe-card__figures",
                    p { class: "timeframe-card__tracked", "{content.tracked}" }
                    p { class: "timeframe-card__previous", "{content.previous}" }
                }
            }
        }
    }
}

/// Shown in place of a card when its record couldn't be fetched or lacks the
/// selected period. The other slots render normally around it.
#[component]
pub fn SlotPlaceholder(message: String) -> Element {
    rsx! {
        article { class: "timeframe-card timeframe-card--unavailable",
            div { class: "timeframe-card__body",
                p { class: "timeframe-card__placeholder", "{message}" }
            }
        }
    }
}
