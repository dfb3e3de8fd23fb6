use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Yes/no prompt shown before a destructive action.
///
/// Renders nothing while `open` is false. What "Yes" does is up to the caller.
#[component]
pub fn ConfirmationDialog(
    open: bool,
    message: String,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "dialog",
                h2 { class: "dialog-title", "Confirm Deletion" }
                p { class: "dialog-body", "{message}" }
                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "No"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "Yes"
                    }
                }
            }
        }
    }
}
