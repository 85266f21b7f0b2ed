//! Title bar with the classifier the page talks to

use algomatch_common::ServiceConfig;
use leptos::prelude::*;

/// Host part of the service address plus the candidate count, e.g.
/// `match.example.org · top 5`.
pub fn service_label(config: &ServiceConfig) -> String {
    let host = config
        .base_url
        .split_once("://")
        .map_or(config.base_url.as_str(), |(_, rest)| rest)
        .trim_end_matches('/');
    format!("{} · top {}", host, config.top_k)
}

#[component]
pub fn Header(config: ServiceConfig) -> impl IntoView {
    let label = service_label(&config);
    view! {
        <header class="header">
            <h1>"AlgoMatch"</h1>
            <p class="text-muted">"Ranks the known algorithms each source file resembles"</p>
            <span class="service-label" title=config.base_url.clone()>{label}</span>
        </header>
    }
}
