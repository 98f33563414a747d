//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://leptos.dev" class="footer-link" target="_blank">
                    "Leptos"
                </a>
                <a href="https://pytorch.org/vision/stable/models.html" class="footer-link" target="_blank">
                    "Models"
                </a>
            </div>
        </footer>
    }
}
