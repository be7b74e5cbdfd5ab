use dioxus::prelude::*;

use crate::core::field::Field;
use crate::core::form::{FieldErrors, ManualForm};
use crate::core::normalize::RawInput;
use crate::t;

/// Thirty numeric inputs plus the sample and submit buttons.
///
/// Validation runs on submit; afterwards a flagged field is re-checked as the
/// user edits it so the inline message clears as soon as the value is valid.
#[component]
pub fn ManualEntry(
    form: Signal<ManualForm>,
    errors: Signal<FieldErrors>,
    loading: bool,
    on_submit: EventHandler<RawInput>,
) -> Element {
    let mut form = form;
    let mut errors = errors;

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().to_raw() {
            Ok(raw) => {
                errors.set(FieldErrors::new());
                on_submit.call(raw);
            }
            Err(invalid) => {
                tracing::debug!(invalid = invalid.len(), "manual entry blocked by validation");
                errors.set(invalid);
            }
        }
    };

    let fill_sample = move |_: MouseEvent| {
        form.set(ManualForm::sample());
        errors.set(FieldErrors::new());
    };

    let current_errors = errors();

    rsx! {
        form { class: "manual-entry", novalidate: true, onsubmit: submit,
            div { class: "manual-entry__grid",
                for field in Field::all() {
                    div {
                        key: "{field}",
                        class: field_class(current_errors.contains_key(&field)),
                        label { r#for: "field-{field.lower_key()}", {field_label(field)} }
                        input {
                            id: "field-{field.lower_key()}",
                            name: field.lower_key(),
                            r#type: "text",
                            placeholder: "0.0",
                            value: "{form.read().value(field)}",
                            oninput: move |evt: FormEvent| {
                                form.with_mut(|f| f.set(field, evt.value()));
                                if errors.peek().contains_key(&field) {
                                    let still_invalid = form.peek().check(field);
                                    errors.with_mut(|errs| match still_invalid {
                                        Some(err) => {
                                            errs.insert(field, err);
                                        }
                                        None => {
                                            errs.remove(&field);
                                        }
                                    });
                                }
                            },
                        }
                        if current_errors.contains_key(&field) {
                            p { class: "manual-entry__error", {t!("field-invalid-number")} }
                        }
                    }
                }
            }

            div { class: "manual-entry__actions",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: loading,
                    onclick: fill_sample,
                    {t!("button-sample")}
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: loading,
                    if loading {
                        span { class: "spinner", aria_hidden: "true" }
                        {t!("button-submitting")}
                    } else {
                        {t!("button-submit")}
                    }
                }
            }
        }
    }
}

fn field_class(invalid: bool) -> &'static str {
    if invalid {
        "manual-entry__field manual-entry__field--invalid"
    } else {
        "manual-entry__field"
    }
}

fn field_label(field: Field) -> String {
    match field {
        Field::Feature(_) => field.canonical_key(),
        Field::Amount => t!("field-amount"),
        Field::Time => t!("field-time"),
    }
}
