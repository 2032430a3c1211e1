use dioxus::prelude::*;

use crate::core::filter::{FilterSelection, ALL};
use crate::dashboard::FilterOptions;

#[component]
pub fn FilterBar(options: FilterOptions, mut selection: Signal<FilterSelection>) -> Element {
    let current = selection();

    rsx! {
        section { class: "dashboard-card dashboard-filters",
            div { class: "dashboard-card__header",
                h2 { "Filters" }
            }

            div { class: "dashboard-filters__row",
                FilterSelect {
                    label: "District",
                    options: options.districts.clone(),
                    current: current.district.clone(),
                    onpick: move |value| selection.write().district = value,
                }
                FilterSelect {
                    label: "School Name",
                    options: options.schools.clone(),
                    current: current.school.clone(),
                    onpick: move |value| selection.write().school = value,
                }
                FilterSelect {
                    label: "Class",
                    options: options.classes.clone(),
                    current: current.class_name.clone(),
                    onpick: move |value| selection.write().class_name = value,
                }
            }
        }
    }
}

/// One labelled dropdown: "All" first, then the sorted distinct values of
/// the backing column.
#[component]
fn FilterSelect(
    label: &'static str,
    options: Vec<String>,
    current: String,
    onpick: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "dashboard-filters__control",
            span { class: "dashboard-filters__label", "{label}" }
            select {
                class: "dashboard-filters__select",
                onchange: move |event| onpick.call(event.value()),

                option { value: ALL, selected: current == ALL, "{ALL}" }
                for value in options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == current,
                        "{value}"
                    }
                }
            }
        }
    }
}
