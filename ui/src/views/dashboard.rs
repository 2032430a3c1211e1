use dioxus::prelude::*;

use crate::core::aggregate::{self, ChartKind, ColumnFamily, FrequencyTable, FAMILIES};
use crate::core::filter::{self, FilterSelection, SCHOOL_COLUMN};
use crate::core::loader;
use crate::core::stats::KpiSummary;
use crate::core::table::RecordTable;
use crate::dashboard::{
    BarChart, DataTablePanel, ExportPanel, FilterBar, FilterOptions, KpiStrip, PieChart,
};

/// The single dashboard page. Every interaction re-runs the whole pipeline:
/// load (cache-gated), filter, aggregate, render.
#[component]
pub fn Dashboard() -> Element {
    let selection = use_signal(FilterSelection::default);
    let snapshot = use_resource(|| async move { loader::load().await });

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Student Career Counselling Dashboard" }
            p { class: "page-dashboard__caption",
                "Filter the latest student snapshot and review tests, results, and career picks."
            }

            match &*snapshot.read_unchecked() {
                None => rsx! {
                    p { class: "dashboard-card__placeholder", "Loading student data…" }
                },
                Some(Err(err)) => rsx! {
                    section { class: "dashboard-card dashboard-card--error",
                        h2 { "Couldn't load student data" }
                        p { "{err}" }
                    }
                },
                Some(Ok(table)) => render_loaded(table, selection),
            }
        }
    }
}

fn render_loaded(table: &RecordTable, selection: Signal<FilterSelection>) -> Element {
    // Options always come from the unfiltered snapshot; combinations made
    // stale by other active filters may yield zero rows.
    let options = FilterOptions::from_table(table);
    let filtered = filter::apply(table, &selection());
    let summary = KpiSummary::compute(&filtered);
    let school_counts = aggregate::aggregate(&filtered, &[SCHOOL_COLUMN]);

    let family_charts: Vec<(&ColumnFamily, FrequencyTable)> = FAMILIES
        .iter()
        .map(|family| (family, aggregate::aggregate(&filtered, family.columns)))
        .filter(|(_, data)| !data.is_empty())
        .collect();

    rsx! {
        FilterBar { options, selection }
        KpiStrip { summary }

        BarChart {
            title: "School Wise Performance",
            value_label: "School Name",
            count_label: "Students",
            data: school_counts,
        }

        for (family, data) in family_charts.into_iter() {
            match family.chart {
                ChartKind::Bar => rsx! {
                    BarChart {
                        key: "{family.key}",
                        title: "{family.title}",
                        value_label: "{family.value_label}",
                        count_label: "{family.count_label}",
                        data,
                    }
                },
                ChartKind::Pie => rsx! {
                    PieChart {
                        key: "{family.key}",
                        title: "{family.title}",
                        value_label: "{family.value_label}",
                        count_label: "{family.count_label}",
                        data,
                    }
                },
            }
        }

        ExportPanel { table: filtered.clone() }
        DataTablePanel { table: filtered }
    }
}
