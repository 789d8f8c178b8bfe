//! Application router configuration with public and takmir-guarded routes.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    campaign::{get_campaign_detail_page, get_campaigns_page},
    dashboard::get_dashboard_page,
    donation::get_donations_page,
    endpoints,
    expense::get_expenses_page,
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
    session::{get_log_in_page, get_log_out, post_log_in, takmir_guard},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::CAMPAIGNS_VIEW, get(get_campaigns_page))
        .route(endpoints::CAMPAIGN_DETAIL_VIEW, get(get_campaign_detail_page))
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let takmir_routes = Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DONATIONS_VIEW, get(get_donations_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .layer(middleware::from_fn_with_state(state.clone(), takmir_guard));

    public_routes
        .merge(takmir_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static"))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root route redirects to the campaign list.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::CAMPAIGNS_VIEW)
}
