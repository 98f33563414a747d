//! Image Predictor - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for submitting an image to a classification
//! service and showing the ranked labels it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (service address, health dot)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (dropzone, predict button, status)       │
//! │  ├── PreviewSection (selected image)                        │
//! │  └── ResultsSection (summary + ranked bars)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                        Toast         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! State transitions live in `predictor_core::WorkflowController`; the page
//! only turns DOM events into workflow events and applies the effects.
//!
//! # Modules
//!
//! - [`types`] - View types (PreviewInfo, ToastMessage)
//! - [`session`] - Controller ownership and effect application
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - Inference service communication

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod session;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{PreviewInfo, ToastMessage};

// Session
pub use session::{Session, UiState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Image Predictor - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // One controller per page session
    let session = Session::new(initial_api_base());
    log::info!("Using inference service at {}", session.ui.api_base.get_untracked());

    session.refresh_health();

    view! {
        <Header session=session/>

        <div class="container">
            <Hero/>
            <UploadSection session=session/>
            <PreviewSection session=session/>
            <ResultsSection session=session/>
        </div>

        <Toast session=session/>
        <Footer/>
    }
}
