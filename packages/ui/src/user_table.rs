use dioxus::prelude::*;
use store::{SortColumn, SortDirection, User};

use crate::icons::{FaChevronDown, FaChevronUp, FaPen, FaTrash};
use crate::table_state::TableState;
use crate::Icon;

/// Sortable, searchable, paginated list of users.
///
/// Shows `users` in the order given. Sorting and searching are reported to the
/// caller through `on_sort` and `on_search`; the caller passes back the new
/// list. Only pagination, the sort indicator and row expansion are local.
#[component]
pub fn UserTable(
    users: Vec<User>,
    page_size: usize,
    page_size_options: Vec<usize>,
    on_edit: EventHandler<Option<User>>,
    on_delete: EventHandler<String>,
    on_search: EventHandler<String>,
    on_sort: EventHandler<(SortDirection, SortColumn)>,
) -> Element {
    let mut table = use_signal(move || TableState::new(page_size));

    let total = users.len();
    let rows = table.read().visible(&users).to_vec();
    let current_size = table.read().page_size();

    rsx! {
        div {
            class: "user-table",

            div {
                class: "user-table-toolbar",
                h1 { class: "user-table-title", "Users" }
                div {
                    class: "user-table-actions",
                    input {
                        class: "form-input user-table-search",
                        r#type: "search",
                        placeholder: "Search",
                        value: "{table.read().search()}",
                        oninput: move |evt: FormEvent| {
                            let query = table.write().set_search(evt.value());
                            on_search.call(query);
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_edit.call(None),
                        "ADD"
                    }
                }
            }

            table {
                thead {
                    tr {
                        for column in SortColumn::ALL {
                            th {
                                key: "{column.label()}",
                                button {
                                    class: if table.read().sort_column() == column { "sort-label active" } else { "sort-label" },
                                    onclick: move |_| {
                                        let order = table.write().request_sort(column);
                                        on_sort.call(order);
                                    },
                                    "{column.label()}"
                                    span {
                                        class: "sort-arrow",
                                        if table.read().sort_column() != column {
                                            ""
                                        } else if table.read().direction() == SortDirection::Asc {
                                            "▲"
                                        } else {
                                            "▼"
                                        }
                                    }
                                }
                            }
                        }
                        th { "Address" }
                        th { "Edit" }
                    }
                }

                if rows.is_empty() {
                    tbody {
                        tr {
                            td {
                                class: "user-table-empty",
                                colspan: 6,
                                "No Data Found"
                            }
                        }
                    }
                }

                for user in rows {
                    UserRow {
                        key: "{user.id}",
                        expanded: table.read().is_expanded(&user.id),
                        on_toggle: move |id: String| table.write().toggle_expanded(&id),
                        on_edit,
                        on_delete,
                        user: user.clone(),
                    }
                }
            }

            div {
                class: "user-table-pagination",
                label {
                    "Rows per page: "
                    select {
                        value: "{current_size}",
                        onchange: move |evt: FormEvent| {
                            if let Ok(size) = evt.value().parse::<usize>() {
                                table.write().set_page_size(size);
                            }
                        },
                        for size in page_size_options.iter().copied() {
                            option {
                                key: "{size}",
                                value: "{size}",
                                selected: size == current_size,
                                "{size}"
                            }
                        }
                    }
                }
                span { class: "user-table-range", "{table.read().range_label(total)}" }
                button {
                    class: "btn btn-outline",
                    disabled: !table.read().has_prev(total),
                    onclick: move |_| table.write().prev_page(total),
                    "‹"
                }
                button {
                    class: "btn btn-outline",
                    disabled: !table.read().has_next(total),
                    onclick: move |_| table.write().next_page(total),
                    "›"
                }
            }
        }
    }
}

/// One user: the summary row, plus the address row when expanded.
#[component]
fn UserRow(
    user: User,
    expanded: bool,
    on_toggle: EventHandler<String>,
    on_edit: EventHandler<Option<User>>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        tbody {
            tr {
                td { "{user.name}" }
                td { "{user.email}" }
                td { "{user.linkedin}" }
                td { "{user.gender}" }
                td {
                    button {
                        class: "icon-btn",
                        title: if expanded { "Hide address" } else { "Show address" },
                        onclick: {
                            let id = user.id.clone();
                            move |_| on_toggle.call(id.clone())
                        },
                        if expanded {
                            Icon { width: 14, height: 14, fill: "currentColor", icon: FaChevronUp }
                        } else {
                            Icon { width: 14, height: 14, fill: "currentColor", icon: FaChevronDown }
                        }
                    }
                }
                td {
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: {
                            let user = user.clone();
                            move |_| on_edit.call(Some(user.clone()))
                        },
                        Icon { width: 14, height: 14, fill: "currentColor", icon: FaPen }
                    }
                    button {
                        class: "icon-btn danger",
                        title: "Delete",
                        onclick: {
                            let id = user.id.clone();
                            move |_| on_delete.call(id.clone())
                        },
                        Icon { width: 14, height: 14, fill: "currentColor", icon: FaTrash }
                    }
                }
            }
            if expanded {
                tr {
                    class: "user-address-row",
                    td {
                        colspan: 6,
                        h3 { "Address" }
                        p { "{user.address.summary()}" }
                    }
                }
            }
        }
    }
}
