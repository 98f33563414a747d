//! Image upload component with drag & drop support.
//!
//! Picks a file (click, keyboard or drop), hands it to the session, and hosts
//! the predict button, busy spinner and status line.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement, KeyboardEvent};

use crate::config::ACCEPT_FILTER;
use crate::session::Session;

#[component]
pub fn UploadSection(session: Session) -> impl IntoView {
    let ui = session.ui;
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let open_picker = move || {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    // Only the first file is taken, from either source.
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            session.select_file(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            session.select_file(file);
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            open_picker();
        }
    };

    view! {
        <div class="upload-section">
            <div
                class="dropzone"
                id="dropzone"
                tabindex="0"
                role="button"
                class:dragover=move || dragging.get()
                aria-busy=move || ui.busy.get().then_some("true")
                on:click=move |_| open_picker()
                on:keydown=on_keydown
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=on_drop
            >
                <div class="upload-icon">"🖼️"</div>
                <div class="upload-text">"Drop an image here"</div>
                <div class="upload-hint">"or click to choose one (max 5 MB)"</div>
            </div>

            <input
                type="file"
                id="fileInput"
                accept=ACCEPT_FILTER
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <div class="actions">
                <button
                    class="btn btn-primary"
                    id="predictBtn"
                    disabled=move || !ui.submit_enabled.get()
                    on:click=move |_| session.submit()
                >
                    "Predict"
                </button>
                <Show
                    when=move || ui.busy.get()
                    fallback=|| view! { }
                >
                    <span class="spinner" id="spinner"></span>
                </Show>
                <span class="status" id="status">
                    {move || ui.status.get().unwrap_or_default()}
                </span>
            </div>
        </div>
    }
}
