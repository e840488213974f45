use dioxus::prelude::*;

use crate::core::period::Period;

/// The three aggregation controls. The selected signal is the single source
/// of truth, so exactly one control carries the selected modifier at any
/// time; activating a control swaps the selection and every card re-renders
/// for the new period.
#[component]
pub fn PeriodSwitcher(selected: Signal<Period>) -> Element {
    let active = selected();

    rsx! {
        ul { class: "period-switcher",
            for period in Period::ALL {
                li { key: "{period}", class: "period-switcher__item",
                    {render_tag(period, active, selected)}
                }
            }
        }
    }
}

fn render_tag(period: Period, active: Period, mut selected: Signal<Period>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "{tag_class(period, active)}",
            onclick: move |_| selected.set(period),
            "{period.label()}"
        }
    }
}

fn tag_class(period: Period, active: Period) -> &'static str {
    if period == active {
        "period-switcher__tag period-switcher__tag--selected"
    } else {
        "period-switcher__tag"
    }
}

#[cfg(test)]
mod tests {
    use super::tag_class;
    use crate::core::period::Period;

    #[test]
    fn exactly_one_tag_is_selected() {
        for active in Period::ALL {
            let selected_count = Period::ALL
                .iter()
                .filter(|period| tag_class(**period, active).contains("--selected"))
                .count();
            assert_eq!(
                selected_count, 1,
                "expected exactly one selected tag while {active} is active"
            );
        }
    }

    #[test]
    fn selected_tag_tracks_the_active_period() {
        assert!(tag_class(Period::Daily, Period::Daily).ends_with("--selected"));
        assert!(!tag_class(Period::Daily, Period::Monthly).contains("--selected"));
    }
}
