use dioxus::prelude::*;

use ui::views::UserAdminView;

#[component]
pub fn Users() -> Element {
    rsx! {
        UserAdminView {}
    }
}
