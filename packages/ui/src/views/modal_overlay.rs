use dioxus::prelude::*;

/// Full-screen backdrop that centers its children in a dialog card.
/// Clicking the backdrop (outside the card) triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    /// Use the wide card (forms) instead of the narrow one (prompts).
    #[props(default)]
    wide: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: if wide { "modal-card modal-card-wide" } else { "modal-card" },
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
