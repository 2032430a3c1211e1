use dioxus::prelude::*;

use crate::core::format;
use crate::core::stats::KpiSummary;

#[component]
pub fn KpiStrip(summary: KpiSummary) -> Element {
    let avg_label = format::format_number(summary.avg_previous_class, 2);

    rsx! {
        section { class: "dashboard-kpis",
            div { class: "kpi-card",
                span { class: "kpi-card__label", "Total Students" }
                strong { class: "kpi-card__value", "{summary.total_students}" }
            }
            div { class: "kpi-card",
                span { class: "kpi-card__label", "Total Schools" }
                strong { class: "kpi-card__value", "{summary.total_schools}" }
            }
            div { class: "kpi-card",
                span { class: "kpi-card__label", "Total Districts" }
                strong { class: "kpi-card__value", "{summary.total_districts}" }
            }
            div { class: "kpi-card",
                span { class: "kpi-card__label", "Avg % Previous Class" }
                strong { class: "kpi-card__value", "{avg_label}" }
            }
        }
    }
}
