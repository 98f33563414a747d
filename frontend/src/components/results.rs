//! Ranked results: top-1 summary with confidence badge, then one bar per label.

use leptos::*;
use predictor_core::{RenderPlan, ResultRow, Summary};

use crate::session::Session;

#[component]
pub fn ResultsSection(session: Session) -> impl IntoView {
    let plan = session.ui.plan;

    view! {
        <div class="results-section">
            {move || match plan.get() {
                None => ().into_view(),
                Some(RenderPlan::NoResults { message }) => view! {
                    <div class="results" id="results">{message}</div>
                }
                .into_view(),
                Some(RenderPlan::Ranked { summary, rows }) => view! {
                    <SummaryLine summary=summary/>
                    <div class="results" id="results">
                        {rows.into_iter().map(|row| view! { <ResultBar row=row/> }).collect_view()}
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn SummaryLine(summary: Summary) -> impl IntoView {
    view! {
        <div class="summary" id="summary">
            "Top-1: " <b>{summary.label}</b> " "
            <span class={summary.tier.css_class()}>{summary.percent_text}</span>
        </div>
    }
}

#[component]
fn ResultBar(row: ResultRow) -> impl IntoView {
    view! {
        <div class="row result">
            <div class="label">{row.label_text}</div>
            <div class="bar-wrap">
                <div class="bar" style={format!("width: {}%;", row.bar_width)}></div>
                <div class="pct">{row.percent_text}</div>
            </div>
        </div>
    }
}
