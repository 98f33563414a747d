use leptos::*;

use crate::session::Session;

#[component]
pub fn Header(session: Session) -> impl IntoView {
    let ui = session.ui;
    let api_input = create_node_ref::<html::Input>();

    let on_save = move |_| {
        if let Some(input) = api_input.get() {
            session.save_api_base(&input.value());
        }
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"IMAGE PREDICTOR"</a>
            </div>
            <div class="header-right">
                <span
                    class=move || ui.health.get().css_class()
                    id="healthDot"
                    title=move || ui.api_base.get().to_string()
                ></span>
                <input
                    type="url"
                    id="apiInput"
                    class="api-input"
                    placeholder="http://localhost:8000"
                    node_ref=api_input
                    prop:value=move || ui.api_base.get().to_string()
                />
                <button class="btn btn-secondary" id="saveApiBtn" on:click=on_save>
                    "Save"
                </button>
            </div>
        </header>
    }
}
