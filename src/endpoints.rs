//! The application's route URIs.
//!
//! For routes that take a parameter, e.g. `/campaigns/{campaign_id}`, use
//! [format_endpoint] to build a concrete URL.

/// The root route, which redirects to the campaign list.
pub const ROOT: &str = "/";
/// The donor-facing campaign list.
pub const CAMPAIGNS_VIEW: &str = "/campaigns";
/// The donor-facing detail page for one campaign.
pub const CAMPAIGN_DETAIL_VIEW: &str = "/campaigns/{campaign_id}";
/// The landing page for logged-in takmir.
pub const DASHBOARD_VIEW: &str = "/takmir/dashboard";
/// The donation table for one of the takmir's campaigns.
pub const DONATIONS_VIEW: &str = "/takmir/campaigns/{campaign_id}/donations";
/// The expense disclosure table for one of the takmir's campaigns.
pub const EXPENSES_VIEW: &str = "/takmir/campaigns/{campaign_id}/expenses";
/// The takmir log-in page.
pub const LOG_IN_VIEW: &str = "/takmir/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The endpoint the log-in form posts to.
pub const LOG_IN_API: &str = "/api/log_in";
/// The endpoint that ends the takmir session.
pub const LOG_OUT: &str = "/api/log_out";

/// Replace the `{param}` placeholder in `endpoint_path` with `id`.
///
/// Paths here contain at most one parameter; a path without one is returned
/// unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end + 1..])
        }
        _ => endpoint_path.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{CAMPAIGN_DETAIL_VIEW, DONATIONS_VIEW, format_endpoint};

    #[test]
    fn parameter_is_replaced_with_the_id() {
        assert_eq!(format_endpoint(CAMPAIGN_DETAIL_VIEW, 7), "/campaigns/7");
        assert_eq!(
            format_endpoint(DONATIONS_VIEW, 12),
            "/takmir/campaigns/12/donations"
        );
    }

    #[test]
    fn paths_without_parameters_pass_through() {
        assert_eq!(format_endpoint("/campaigns", 7), "/campaigns");
    }
}
