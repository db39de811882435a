//! Convenience layer over the dispatcher, one method per API resource.

use http::Method;

use crate::config::Config;
use crate::context::Context;
use crate::dispatch::Dispatcher;
use crate::request::Params;
use crate::response::ApiResponse;
use crate::search::SearchQuery;
use crate::Result;

/// Client exposes one method per resource of the DEM API.
///
/// Every method is a parameter-collection step in front of
/// [`Dispatcher::dispatch`]; none of them carries behaviour of its own,
/// so anything the client can do can also be done through the dispatcher
/// directly. Cloning shares the underlying dispatcher.
///
/// ## Example
///
/// ```no_run
/// use demapi::{Client, Config, Context};
///
/// # async fn example() -> demapi::Result<()> {
/// let config = Config::new()
///     .with_credentials("my-api-key", "my-api-secret")
///     .with_site_id(3);
/// let client = Client::new(Context::default(), config);
///
/// let providers = client.providers().await?;
/// println!("{}", providers.body);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    /// Create a client from a context and configuration.
    pub fn new(ctx: Context, config: Config) -> Self {
        Self {
            dispatcher: Dispatcher::new(ctx, config),
        }
    }

    /// Wrap an existing dispatcher.
    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// The underlying dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// All providers, localised to the configured site.
    ///
    /// `GET /providers/`
    pub async fn providers(&self) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch("providers", Method::GET, Params::new())
            .await
    }

    /// One provider by ident.
    ///
    /// `GET /providers/{ident}/`
    pub async fn provider(&self, ident: &str) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(&format!("providers/{ident}"), Method::GET, Params::new())
            .await
    }

    /// Update fields of a provider. Field names are listed in
    /// [`constants`](crate::constants), [`PROVIDER_TITLE`](crate::constants::PROVIDER_TITLE)
    /// among them.
    ///
    /// `PUT /providers/{ident}/`
    pub async fn update_provider(&self, ident: &str, params: Params) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(&format!("providers/{ident}"), Method::PUT, params)
            .await
    }

    /// Meta information of a provider.
    ///
    /// `GET /providers/{ident}/meta/`
    pub async fn provider_meta(&self, ident: &str) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(&format!("providers/{ident}/meta"), Method::GET, Params::new())
            .await
    }

    /// All profiles a provider has for the configured site.
    ///
    /// `GET /providers/{ident}/profiles/{site}/`
    pub async fn provider_profiles(&self, ident: &str) -> Result<ApiResponse> {
        let sid = self.dispatcher.require_site_id()?;
        self.dispatcher
            .dispatch(
                &format!("providers/{ident}/profiles/{sid}"),
                Method::GET,
                Params::new(),
            )
            .await
    }

    /// One profile of a provider, optionally narrowed to a target
    /// audience.
    ///
    /// `GET /providers/{ident}/profiles/{site}/{description}/[{target}/]`
    pub async fn provider_profile(
        &self,
        ident: &str,
        description: &str,
        target: Option<&str>,
    ) -> Result<ApiResponse> {
        let sid = self.dispatcher.require_site_id()?;
        let mut resource = format!("providers/{ident}/profiles/{sid}/{description}");
        if let Some(target) = target {
            resource.push('/');
            resource.push_str(target);
        }
        self.dispatcher
            .dispatch(&resource, Method::GET, Params::new())
            .await
    }

    /// All courses of a provider.
    ///
    /// `GET /providers/{ident}/courses/`
    pub async fn provider_courses(&self, ident: &str) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(&format!("providers/{ident}/courses"), Method::GET, Params::new())
            .await
    }

    /// One course of a provider.
    ///
    /// `GET /providers/{ident}/courses/{cid}/`
    pub async fn course(&self, ident: &str, cid: u64) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(
                &format!("providers/{ident}/courses/{cid}"),
                Method::GET,
                Params::new(),
            )
            .await
    }

    /// Update fields of a course, [`COURSE_ACTIVE`](crate::constants::COURSE_ACTIVE)
    /// among them.
    ///
    /// `PUT /providers/{ident}/courses/{cid}/`
    pub async fn update_course(&self, ident: &str, cid: u64, params: Params) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(&format!("providers/{ident}/courses/{cid}"), Method::PUT, params)
            .await
    }

    /// Meta information of a course.
    pub async fn course_meta(&self, ident: &str, cid: u64) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(
                &format!("providers/{ident}/courses/{cid}/meta"),
                Method::GET,
                Params::new(),
            )
            .await
    }

    /// One profile of a course for the configured site.
    ///
    /// `GET /providers/{ident}/courses/{cid}/profiles/{site}/{description}/`
    pub async fn course_profile(
        &self,
        ident: &str,
        cid: u64,
        description: &str,
    ) -> Result<ApiResponse> {
        let sid = self.dispatcher.require_site_id()?;
        self.dispatcher
            .dispatch(
                &format!("providers/{ident}/courses/{cid}/profiles/{sid}/{description}"),
                Method::GET,
                Params::new(),
            )
            .await
    }

    /// All variations of a course.
    ///
    /// `GET /providers/{ident}/courses/{cid}/variations/`
    pub async fn course_variations(&self, ident: &str, cid: u64) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(
                &format!("providers/{ident}/courses/{cid}/variations"),
                Method::GET,
                Params::new(),
            )
            .await
    }

    /// One variation of a course.
    pub async fn variation(&self, ident: &str, cid: u64, vid: u64) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(
                &format!("providers/{ident}/courses/{cid}/variations/{vid}"),
                Method::GET,
                Params::new(),
            )
            .await
    }

    /// Update fields of a variation, [`VARIATION_AWARD_TYPES`](crate::constants::VARIATION_AWARD_TYPES)
    /// among them.
    ///
    /// `PUT /providers/{ident}/courses/{cid}/variations/{vid}/`
    pub async fn update_variation(
        &self,
        ident: &str,
        cid: u64,
        vid: u64,
        params: Params,
    ) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch(
                &format!("providers/{ident}/courses/{cid}/variations/{vid}"),
                Method::PUT,
                params,
            )
            .await
    }

    /// All award types known to the API.
    ///
    /// `GET /awardtypes/`
    pub async fn award_types(&self) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch("awardtypes", Method::GET, Params::new())
            .await
    }

    /// All subject areas known to the API.
    ///
    /// `GET /subjectareas/`
    pub async fn subject_areas(&self) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch("subjectareas", Method::GET, Params::new())
            .await
    }

    /// Upcoming open days, paged, optionally filtered by study levels and
    /// distance from a location.
    ///
    /// `GET /opendays/`
    pub async fn open_days(
        &self,
        page: u32,
        levels: &[&str],
        location: Option<(f64, f64)>,
    ) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.insert("page", page);
        if !levels.is_empty() {
            params.insert("levels", levels);
        }
        if let Some((latitude, longitude)) = location {
            params.insert("latitude", latitude);
            params.insert("longitude", longitude);
        }
        self.dispatcher.dispatch("opendays", Method::GET, params).await
    }

    /// Upcoming open days of one provider.
    ///
    /// `GET /providers/{ident}/opendays/`
    pub async fn provider_open_days(&self, ident: &str, levels: &[&str]) -> Result<ApiResponse> {
        let mut params = Params::new();
        if !levels.is_empty() {
            params.insert("levels", levels);
        }
        self.dispatcher
            .dispatch(&format!("providers/{ident}/opendays"), Method::GET, params)
            .await
    }

    /// Term completions for a search box.
    ///
    /// `GET /search/autocomplete/`
    pub async fn autocomplete(&self, term: &str) -> Result<ApiResponse> {
        let params = Params::new().with("term", term);
        self.dispatcher
            .dispatch("search/autocomplete", Method::GET, params)
            .await
    }

    /// Providers recommended for the configured site.
    ///
    /// `GET /search/recommendedproviders/`
    pub async fn recommended_providers(&self) -> Result<ApiResponse> {
        self.dispatcher
            .dispatch("search/recommendedproviders", Method::GET, Params::new())
            .await
    }

    /// The most relevant courses for the given criteria, with their
    /// variations. Requires a configured site id; honours the configured
    /// region.
    ///
    /// `GET /search/`
    pub async fn search(&self, query: SearchQuery) -> Result<ApiResponse> {
        let mut params = query.into_params();
        if let Some(region) = self.dispatcher.config().region_id {
            params.insert("region", region);
        }
        self.dispatcher.dispatch("search", Method::GET, params).await
    }

    /// Submit a course enquiry.
    ///
    /// `POST /enquiry/`
    pub async fn add_enquiry(&self, data: Params) -> Result<ApiResponse> {
        self.dispatcher.dispatch("enquiry", Method::POST, data).await
    }
}
