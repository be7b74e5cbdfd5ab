use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

use crate::core::config::ServiceConfig;
use crate::core::coordinator::{ingest_file, CheckEvent};
use crate::core::upload::JSON_MIME;
use crate::t;

/// Click-to-browse / drag-and-drop zone for a single JSON file.
#[component]
pub fn UploadZone(
    config: ServiceConfig,
    drag_active: bool,
    loading: bool,
    input_generation: u32,
    on_event: EventHandler<CheckEvent>,
) -> Element {
    let drop_config = config.clone();
    let pick_config = config;

    let zone_class = if drag_active {
        "upload-zone upload-zone--active"
    } else {
        "upload-zone"
    };

    rsx! {
        label {
            class: zone_class,
            ondragenter: move |evt: DragEvent| {
                evt.prevent_default();
                on_event.call(CheckEvent::DragEnter);
            },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                if !drag_active {
                    on_event.call(CheckEvent::DragEnter);
                }
            },
            ondragleave: move |_: DragEvent| on_event.call(CheckEvent::DragLeave),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                on_event.call(CheckEvent::DragLeave);
                let files = evt.files();
                let config = drop_config.clone();
                async move {
                    if loading {
                        return;
                    }
                    if let Some(event) = ingest(files, config).await {
                        on_event.call(event);
                    }
                }
            },

            div {
                key: "{input_generation}",
                input {
                    class: "visually-hidden",
                    r#type: "file",
                    accept: ".json,{JSON_MIME}",
                    disabled: loading,
                    onchange: move |evt: FormEvent| {
                        let files = evt.files();
                        let config = pick_config.clone();
                        async move {
                            if let Some(event) = ingest(files, config).await {
                                on_event.call(event);
                            }
                        }
                    },
                }
            }

            span { class: "upload-zone__icon", aria_hidden: "true", "⇪" }
            p { class: "upload-zone__prompt", {t!("upload-prompt")} }
            p { class: "upload-zone__hint", {t!("upload-hint")} }
        }

        if loading {
            p { class: "upload-zone__status",
                span { class: "spinner", aria_hidden: "true" }
                {t!("upload-processing")}
            }
        }
    }
}

/// Screen, read and normalize the first selected file.
async fn ingest(files: Option<Arc<dyn FileEngine>>, config: ServiceConfig) -> Option<CheckEvent> {
    let files = files?;
    let name = files.files().into_iter().next()?;
    let event = ingest_file(&name, || files.read_file_to_string(&name), &config).await;
    Some(event)
}
