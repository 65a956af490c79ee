use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use codr_kernel::server::SiteState;
use codr_ui::Section;
use tracing::debug;

pub(crate) async fn home(State(state): State<SiteState>) -> Html<String> {
    Html(codr_ui::render_home(&state.config.site, state.flags()))
}

pub(crate) fn section(state: &SiteState, kind: Section) -> Html<String> {
    Html(codr_ui::render_section(&state.config.site, state.flags(), kind))
}

pub(crate) async fn not_found(
    State(state): State<SiteState>,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    debug!(path = %uri.path(), "No route matched");
    let page = codr_ui::render_not_found(&state.config.site, state.flags(), uri.path());
    (StatusCode::NOT_FOUND, Html(page))
}
