use dioxus::prelude::*;

/// Scrollable table with a header row built from `columns`.
///
/// An empty column name renders a blank header cell, e.g. above an action column.
#[component]
pub fn DataTable(columns: Vec<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { scope: "col", "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

/// One body row. `row_id` is echoed as `data-row-id` for styling and lookups.
#[component]
pub fn DataTableRow(row_id: String, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", "data-row-id": "{row_id}", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
