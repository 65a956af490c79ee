use crate::pages;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use codr_domain::constants::{ASSETS_PREFIX, HOME_PATH};
use codr_domain::features::FeatureFlags;
use codr_kernel::server::SiteState;
use codr_kernel::server::router::system_router;
use codr_ui::Section;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Builds the full application: pages, static assets, system routes and the 404 fallback.
pub fn init(state: SiteState) -> Router {
    let mut router = Router::new().route(HOME_PATH, get(pages::home));

    if state.flags().contains(FeatureFlags::SHOW_HEADER_LINKS) {
        for kind in Section::ALL {
            let page = move |State(state): State<SiteState>| async move {
                pages::section(&state, kind)
            };
            router = router.route(kind.path(), get(page));
        }
    }

    let assets = ServeDir::new(&state.config.storage.static_dir);

    router
        .merge(system_router())
        .nest_service(ASSETS_PREFIX, assets)
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
