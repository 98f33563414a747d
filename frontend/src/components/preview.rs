//! Preview of the selected image.

use leptos::*;

use crate::session::Session;

#[component]
pub fn PreviewSection(session: Session) -> impl IntoView {
    let preview = session.ui.preview;

    view! {
        <Show
            when=move || preview.get().is_some()
            fallback=|| view! { }
        >
            <div class="preview" id="preview">
                <img
                    id="previewImg"
                    alt="Selected image"
                    src=move || preview.get().map(|p| p.url).unwrap_or_default()
                />
                <div class="file-meta" id="fileMeta">
                    {move || preview.get().map(|p| p.meta).unwrap_or_default()}
                </div>
            </div>
        </Show>
    }
}
