use dioxus::prelude::*;

use crate::core::table::RecordTable;

/// Full, unpaginated view of the filtered rows — the final inspectable
/// widget on the page.
#[component]
pub fn DataTablePanel(table: RecordTable) -> Element {
    let caption = format!("{} rows × {} columns", table.len(), table.columns().len());

    rsx! {
        section { class: "dashboard-card dashboard-table",
            div { class: "dashboard-card__header",
                h2 { "Live Data Table" }
                span { class: "dashboard-card__meta", "{caption}" }
            }

            if table.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                div { class: "dashboard-table__scroll",
                    table { class: "dashboard-table__grid",
                        thead {
                            tr {
                                for column in table.columns().iter() {
                                    th { "{column}" }
                                }
                            }
                        }
                        tbody {
                            for row in table.rows().iter() {
                                tr {
                                    for cell in row.iter() {
                                        td { "{cell}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
