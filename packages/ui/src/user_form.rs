use dioxus::prelude::*;
use store::{locations, Field, Gender};

use crate::form_state::UserFormState;
use crate::views::ModalOverlay;

/// Modal add/edit form for a single user.
///
/// Purely presentational: every keystroke is sent to `on_input` and the
/// caller's [`UserFormState`] decides whether to accept it. `on_cancel` fires
/// for the Cancel button and for clicks on the backdrop.
///
/// Text inputs are keyed on [`UserFormState::revision`], so a rejected or
/// trimmed keystroke rebuilds the input from the stored value instead of
/// leaving the typed text on screen.
#[component]
pub fn UserFormDialog(
    form: UserFormState,
    on_input: EventHandler<(Field, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let state = form.value(Field::State).to_string();
    let city = form.value(Field::City).to_string();
    let gender = form.value(Field::Gender).to_string();
    let revision = form.revision();

    rsx! {
        ModalOverlay {
            wide: true,
            on_close: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                h2 { class: "dialog-title", "{form.title()}" }

                for field in [Field::Name, Field::Email, Field::Linkedin] {
                    TextField {
                        key: "{field.as_str()}-{revision}",
                        field,
                        value: form.value(field).to_string(),
                        error: form.error(field).map(str::to_string),
                        on_input,
                    }
                }

                FieldRow {
                    field: Field::Gender,
                    error: form.error(Field::Gender).map(str::to_string),
                    select {
                        id: "{Field::Gender.as_str()}",
                        class: "form-input",
                        value: "{gender}",
                        onchange: move |evt: FormEvent| on_input.call((Field::Gender, evt.value())),
                        for g in Gender::ALL {
                            option {
                                key: "{g}",
                                value: "{g}",
                                selected: g.as_str() == gender,
                                "{g}"
                            }
                        }
                    }
                }

                for field in [Field::Line1, Field::Line2] {
                    TextField {
                        key: "{field.as_str()}-{revision}",
                        field,
                        value: form.value(field).to_string(),
                        error: form.error(field).map(str::to_string),
                        on_input,
                    }
                }

                FieldRow {
                    field: Field::State,
                    error: form.error(Field::State).map(str::to_string),
                    select {
                        id: "{Field::State.as_str()}",
                        class: "form-input",
                        value: "{state}",
                        onchange: move |evt: FormEvent| on_input.call((Field::State, evt.value())),
                        option { value: "", selected: state.is_empty(), "Select state" }
                        for s in locations::states() {
                            option {
                                key: "{s}",
                                value: "{s}",
                                selected: s == state,
                                "{s}"
                            }
                        }
                    }
                }

                FieldRow {
                    field: Field::City,
                    error: form.error(Field::City).map(str::to_string),
                    select {
                        id: "{Field::City.as_str()}",
                        class: "form-input",
                        value: "{city}",
                        disabled: form.cities().is_empty(),
                        onchange: move |evt: FormEvent| on_input.call((Field::City, evt.value())),
                        option { value: "", selected: city.is_empty(), "Select city" }
                        for c in form.cities().iter().copied() {
                            option {
                                key: "{c}",
                                value: "{c}",
                                selected: c == city,
                                "{c}"
                            }
                        }
                    }
                }

                for field in [Field::Pin] {
                    TextField {
                        key: "{field.as_str()}-{revision}",
                        field,
                        value: form.value(field).to_string(),
                        error: form.error(field).map(str::to_string),
                        inputmode: "numeric",
                        digits_only: true,
                        on_input,
                    }
                }

                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_submit.call(()),
                        "Submit"
                    }
                }
            }
        }
    }
}

/// Label, control and inline error message for one field.
#[component]
fn FieldRow(field: Field, error: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: if error.is_some() { "form-field has-error" } else { "form-field" },
            label { r#for: "{field.as_str()}", "{field.label()}" }
            {children}
            if let Some(message) = &error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

#[component]
fn TextField(
    field: Field,
    value: String,
    error: Option<String>,
    #[props(into, default = "text".to_string())] inputmode: String,
    #[props(default)] digits_only: bool,
    on_input: EventHandler<(Field, String)>,
) -> Element {
    let maxlength = field.max_len().map(|n| n.to_string());

    rsx! {
        FieldRow {
            field,
            error,
            input {
                id: "{field.as_str()}",
                class: "form-input",
                r#type: "text",
                inputmode: "{inputmode}",
                maxlength,
                value: "{value}",
                onkeydown: move |evt: KeyboardEvent| {
                    if digits_only && blocks_digit_entry(&evt.key(), evt.modifiers()) {
                        evt.prevent_default();
                    }
                },
                oninput: move |evt: FormEvent| on_input.call((field, evt.value())),
            }
        }
    }
}

/// True for a printable non-digit key. Editing keys and shortcuts pass.
fn blocks_digit_entry(key: &Key, modifiers: Modifiers) -> bool {
    if modifiers.intersects(Modifiers::CONTROL | Modifiers::META | Modifiers::ALT) {
        return false;
    }
    match key {
        Key::Character(text) => !text.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}
