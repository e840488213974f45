use dioxus::prelude::*;

use crate::cards::{CardsState, SlotPlaceholder, SlotState, TimeframeCard};
use crate::components::PeriodSwitcher;
use crate::core::period::Period;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// The dashboard owns the selection state and the render pass. Every card is
/// derived from the one `Period` value read here, so a pass can never mix
/// figures from two selections.
#[component]
pub fn Dashboard() -> Element {
    let period = use_signal(Period::default);
    let cards = use_resource(CardsState::load);

    let active = period();
    let previous_label = active.previous_label();

    let pass = match &*cards.read() {
        Some(state) => render_pass(state, active, previous_label),
        None => rsx! {
            p { class: "dashboard__loading", "Loading tracked time…" }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        section { class: "page page-dashboard",
            ReportCard { selected: period }
            div { class: "dashboard__cards", {pass} }
        }
    }
}

fn render_pass(state: &CardsState, period: Period, previous_label: &'static str) -> Element {
    if let Some(message) = state.error.as_ref() {
        return rsx! {
            p { class: "dashboard__error", "{message}" }
        };
    }

    rsx! {
        for slot in state.slots.iter() {
            {render_slot(slot, period, previous_label)}
        }
    }
}

fn render_slot(slot: &SlotState, period: Period, previous_label: &'static str) -> Element {
    match &slot.outcome {
        Ok(record) => rsx! {
            TimeframeCard {
                key: "{slot.index}",
                record: record.clone(),
                period,
                previous_label: previous_label.to_string(),
            }
        },
        Err(_) => rsx! {
            SlotPlaceholder { key: "{slot.index}", message: "This card couldn't be loaded" }
        },
    }
}

/// Identity block hosting the period controls, as on the original report
/// page.
#[component]
fn ReportCard(selected: Signal<Period>) -> Element {
    rsx! {
        aside { class: "report-card",
            div { class: "report-card__profile",
                span { class: "report-card__avatar", aria_hidden: "true", "JR" }
                div { class: "report-card__identity",
                    span { class: "report-card__eyebrow", "Report for" }
                    h1 { class: "report-card__name", "Jeremy Robson" }
                }
            }
            PeriodSwitcher { selected }
        }
    }
}
