//! Constants shared across the crate.

use std::time::Duration;

/// Environment variable holding the API key.
pub const DEMAPI_API_KEY: &str = "DEMAPI_API_KEY";
/// Environment variable holding the signing secret.
pub const DEMAPI_API_SECRET: &str = "DEMAPI_API_SECRET";
/// Environment variable overriding the endpoint.
pub const DEMAPI_BASE_URL: &str = "DEMAPI_BASE_URL";
/// Environment variable holding the site id.
pub const DEMAPI_SITE_ID: &str = "DEMAPI_SITE_ID";
/// Environment variable holding the region id.
pub const DEMAPI_REGION_ID: &str = "DEMAPI_REGION_ID";

/// Endpoint of the hosted editor API.
pub const DEFAULT_BASE_URL: &str = "https://editor.demltd.com/api/";

/// How long the default transport waits before abandoning a request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Field name for a provider's title, accepted by the provider update call.
pub const PROVIDER_TITLE: &str = "title";
/// Field name for a course's active flag, accepted by the course update call.
pub const COURSE_ACTIVE: &str = "active";
/// Field name for a variation's award types, accepted by the variation
/// update call.
pub const VARIATION_AWARD_TYPES: &str = "award_types";
