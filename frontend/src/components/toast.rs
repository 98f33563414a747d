use leptos::*;

use crate::session::Session;

#[component]
pub fn Toast(session: Session) -> impl IntoView {
    let toast = session.ui.toast;

    view! {
        <div
            id="toast"
            role="status"
            class=move || toast.get().map(|t| t.css_class()).unwrap_or("toast hidden")
        >
            {move || toast.get().map(|t| t.message).unwrap_or_default()}
        </div>
    }
}
