//! Search query construction.

use crate::request::Params;

/// Builder for the search endpoint's criteria.
///
/// Every criterion is optional; only the ones set travel on the wire.
/// The rendered field order is fixed, so equal queries always serialize
/// identically whatever order the builder calls came in. That keeps
/// params-inclusive signatures stable.
///
/// ## Example
///
/// ```
/// use demapi::SearchQuery;
///
/// let query = SearchQuery::new()
///     .with_keywords("engineering")
///     .with_study_level("ug")
///     .with_page(2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    keywords: Option<String>,
    provider: Option<String>,
    page: Option<u32>,
    rpp: Option<u32>,
    study_mode: Option<String>,
    study_level: Option<String>,
    award_type: Option<String>,
    broad_subject_area: Option<String>,
    country: Option<String>,
    destination: Option<String>,
    duration_min: Option<u32>,
    duration_max: Option<u32>,
    results_list_mode: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    distance_min: Option<u32>,
    distance_max: Option<u32>,
}

impl SearchQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match against free-text keywords.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Restrict results to one provider.
    pub fn with_provider(mut self, ident: impl Into<String>) -> Self {
        self.provider = Some(ident.into());
        self
    }

    /// Page of the result set, starting at 1.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Results per page.
    pub fn with_rpp(mut self, rpp: u32) -> Self {
        self.rpp = Some(rpp);
        self
    }

    /// Restrict to a study mode, full or part time.
    pub fn with_study_mode(mut self, mode: impl Into<String>) -> Self {
        self.study_mode = Some(mode.into());
        self
    }

    /// Restrict to a study level.
    pub fn with_study_level(mut self, level: impl Into<String>) -> Self {
        self.study_level = Some(level.into());
        self
    }

    /// Restrict to an award type.
    pub fn with_award_type(mut self, award_type: impl Into<String>) -> Self {
        self.award_type = Some(award_type.into());
        self
    }

    /// Restrict to a broad subject area.
    pub fn with_broad_subject_area(mut self, area: impl Into<String>) -> Self {
        self.broad_subject_area = Some(area.into());
        self
    }

    /// Restrict to specific countries.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict to preferred destinations, a country list.
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Minimum course duration.
    pub fn with_duration_min(mut self, duration: u32) -> Self {
        self.duration_min = Some(duration);
        self
    }

    /// Maximum course duration.
    pub fn with_duration_max(mut self, duration: u32) -> Self {
        self.duration_max = Some(duration);
        self
    }

    /// Select the results list rendering mode.
    pub fn with_results_list_mode(mut self, mode: impl Into<String>) -> Self {
        self.results_list_mode = Some(mode.into());
        self
    }

    /// Centre distance filtering on a point.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Minimum distance from the location.
    pub fn with_distance_min(mut self, distance: u32) -> Self {
        self.distance_min = Some(distance);
        self
    }

    /// Maximum distance from the location.
    pub fn with_distance_max(mut self, distance: u32) -> Self {
        self.distance_max = Some(distance);
        self
    }

    /// Render into wire parameters, in the fixed field order.
    pub fn into_params(self) -> Params {
        let mut params = Params::new();

        if let Some(v) = self.keywords {
            params.insert("keywords", v);
        }
        if let Some(v) = self.provider {
            params.insert("pid", v);
        }
        if let Some(v) = self.page {
            params.insert("page", v);
        }
        if let Some(v) = self.rpp {
            params.insert("rpp", v);
        }
        if let Some(v) = self.study_mode {
            params.insert("study_mode", v);
        }
        if let Some(v) = self.study_level {
            params.insert("study_level", v);
        }
        if let Some(v) = self.award_type {
            params.insert("award_type", v);
        }
        if let Some(v) = self.broad_subject_area {
            params.insert("broad_subject_area", v);
        }
        if let Some(v) = self.country {
            params.insert("country", v);
        }
        if let Some(v) = self.destination {
            params.insert("destination", v);
        }
        if let Some(v) = self.duration_min {
            params.insert("duration_min", v);
        }
        if let Some(v) = self.duration_max {
            params.insert("duration_max", v);
        }
        if let Some(v) = self.results_list_mode {
            params.insert("results-list-mode", v);
        }
        if let Some(v) = self.latitude {
            params.insert("latitude", v);
        }
        if let Some(v) = self.longitude {
            params.insert("longitude", v);
        }
        if let Some(v) = self.distance_min {
            params.insert("distance_min", v);
        }
        if let Some(v) = self.distance_max {
            params.insert("distance_max", v);
        }

        params
    }
}
