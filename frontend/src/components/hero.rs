//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Image Classification"</h1>
            <p class="subtitle">
                "Upload a JPG, PNG or WebP image and get the top predictions "
                "from the inference service."
            </p>
        </div>
    }
}
