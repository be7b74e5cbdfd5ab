use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::client::ScoringClient;
use crate::core::config::ServiceConfig;
use crate::core::coordinator::{prepare, transition, CheckEvent, CheckState, Effect, EntryMode};
use crate::core::form::{FieldErrors, ManualForm};
use crate::core::normalize::RawInput;
use crate::core::record::TransactionRecord;
use crate::t;

use super::{ErrorBanner, ManualEntry, UploadZone, VerdictCard};

type SenderSlot = Rc<RefCell<Option<UnboundedSender<CheckEvent>>>>;

#[component]
pub fn CheckView() -> Element {
    let config =
        use_hook(|| try_consume_context::<ServiceConfig>().unwrap_or_else(ServiceConfig::load));
    let client = use_hook({
        let config = config.clone();
        move || ScoringClient::new(config)
    });

    let state = use_signal(CheckState::default);
    let form = use_signal(ManualForm::empty);
    let field_errors = use_signal(FieldErrors::new);
    // Bumped on reset to remount the file input and drop its selection.
    let input_generation = use_signal(|| 0u32);

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let coordinator = {
        let sender_slot = sender_slot.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<CheckEvent>| {
            let sender_slot = sender_slot.clone();
            let client = client.clone();
            let mut state = state;
            let mut form = form;
            let mut field_errors = field_errors;
            let mut input_generation = input_generation;

            async move {
                while let Some(event) = rx.next().await {
                    if let CheckEvent::Rejected(err) = &event {
                        tracing::info!(kind = ?err.kind(), "input rejected: {err}");
                    }

                    let (next, effect) = transition(&state.peek(), event);
                    state.set(next);

                    match effect {
                        Some(Effect::Dispatch { attempt, record }) => {
                            tracing::info!(attempt, "dispatching scoring request");
                            dispatch(client.clone(), sender_slot.clone(), attempt, record);
                        }
                        Some(Effect::ClearInputs) => {
                            form.set(ManualForm::empty());
                            field_errors.set(FieldErrors::new());
                            input_generation.with_mut(|generation| *generation += 1);
                        }
                        None => {}
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coordinator.tx());

    let send_event = {
        let coordinator = coordinator.clone();
        move |event: CheckEvent| {
            coordinator.send(event);
        }
    };

    let snapshot = state();
    let loading = snapshot.is_loading();
    let mode = snapshot.mode;

    let select_manual = {
        let send_event = send_event.clone();
        move |_: MouseEvent| send_event(CheckEvent::SelectMode(EntryMode::Manual))
    };
    let select_upload = {
        let send_event = send_event.clone();
        move |_: MouseEvent| send_event(CheckEvent::SelectMode(EntryMode::Upload))
    };
    let on_manual_submit = {
        let send_event = send_event.clone();
        let config = config.clone();
        move |raw: RawInput| send_event(prepare(&raw, &config))
    };
    let on_upload_event = {
        let send_event = send_event.clone();
        move |event: CheckEvent| send_event(event)
    };
    let on_reset = {
        let send_event = send_event.clone();
        move |_: MouseEvent| send_event(CheckEvent::Reset)
    };
    let on_retry = {
        let send_event = send_event.clone();
        move |_: MouseEvent| send_event(CheckEvent::Retry)
    };

    rsx! {
        article { class: "check",
            div { class: "check__tabs", role: "tablist",
                button {
                    r#type: "button",
                    role: "tab",
                    class: tab_class(mode == EntryMode::Manual),
                    onclick: select_manual,
                    {t!("tab-manual")}
                }
                button {
                    r#type: "button",
                    role: "tab",
                    class: tab_class(mode == EntryMode::Upload),
                    onclick: select_upload,
                    {t!("tab-upload")}
                }
            }

            div { class: "check__panel",
                {match mode {
                    EntryMode::Manual => rsx! {
                        ManualEntry {
                            form,
                            errors: field_errors,
                            loading,
                            on_submit: on_manual_submit,
                        }
                    },
                    EntryMode::Upload => rsx! {
                        UploadZone {
                            config: config.clone(),
                            drag_active: snapshot.drag_active,
                            loading,
                            input_generation: input_generation(),
                            on_event: on_upload_event,
                        }
                    },
                }}
            }

            if let Some(verdict) = snapshot.verdict() {
                VerdictCard { verdict: *verdict, on_reset }
            }

            if let Some(error) = snapshot.error() {
                ErrorBanner {
                    error: error.clone(),
                    can_retry: snapshot.can_retry(),
                    on_retry,
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "check__tab check__tab--active"
    } else {
        "check__tab"
    }
}

fn dispatch(
    client: ScoringClient,
    sender_slot: SenderSlot,
    attempt: u64,
    record: TransactionRecord,
) {
    spawn(async move {
        let outcome = client.score(&record).await;
        match &outcome {
            Ok(verdict) => tracing::info!(
                attempt,
                is_fraud = verdict.is_fraud,
                probability = verdict.fraud_probability,
                "scoring request settled"
            ),
            Err(err) => tracing::warn!(attempt, kind = ?err.kind(), "scoring request failed: {err}"),
        }

        if !deliver(&sender_slot, CheckEvent::Settled { attempt, outcome }) {
            tracing::debug!(attempt, "settlement dropped; check view is gone");
        }
    });
}

/// Hand `event` back to the coordinator loop. False when nobody is listening.
fn deliver(sender_slot: &SenderSlot, event: CheckEvent) -> bool {
    match sender_slot.borrow().as_ref() {
        Some(sender) => sender.unbounded_send(event).is_ok(),
        None => false,
    }
}
