use std::{sync::Arc, time::Duration};

use fxhash::FxHashMap;
use jiff::{SignedDuration, Timestamp};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::DirectoryError,
    search::{SearchRegion, SearchType},
    venue::SubRegion,
    venue_directory::VenueDirectory,
};

pub const WETHERSPOON_SEARCH_API_URL: &str = "https://www.jdwetherspoon.com/api/advancedsearch";

#[derive(Serialize)]
struct Paging {
    #[serde(rename = "UsePagination")]
    use_pagination: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequestBody {
    region: SearchRegion,
    paging: Paging,
    facilities: Vec<String>,
    search_type: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchRegionResult {
    #[serde(default)]
    sub_regions: Vec<SubRegion>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    regions: Vec<SearchRegionResult>,
}

#[derive(Debug, Clone)]
pub struct DirectoryClientParams {
    pub base_url: String,
    pub timeout: Duration,
    pub expire_after: SignedDuration,
}

impl Default for DirectoryClientParams {
    fn default() -> Self {
        Self {
            base_url: WETHERSPOON_SEARCH_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            expire_after: SignedDuration::from_hours(24),
        }
    }
}

struct CachedRegion {
    fetched_at: Timestamp,
    sub_regions: Arc<Vec<SubRegion>>,
}

/// Client of the Wetherspoon venue search, memoizing each
/// (region, search type) listing.
pub struct WetherspoonDirectoryClient {
    params: DirectoryClientParams,
    client: reqwest::Client,
    cache: Mutex<FxHashMap<(SearchRegion, SearchType), CachedRegion>>,
}

impl WetherspoonDirectoryClient {
    pub fn new(params: DirectoryClientParams) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;

        Ok(Self {
            params,
            client,
            cache: Mutex::new(FxHashMap::default()),
        })
    }

    fn cached(&self, key: (SearchRegion, SearchType)) -> Option<Arc<Vec<SubRegion>>> {
        let cache = self.cache.lock();
        cache
            .get(&key)
            .filter(|entry| {
                Timestamp::now().duration_since(entry.fetched_at) < self.params.expire_after
            })
            .map(|entry| Arc::clone(&entry.sub_regions))
    }

    async fn fetch_sub_regions(
        &self,
        region: SearchRegion,
        search_type: SearchType,
    ) -> Result<Arc<Vec<SubRegion>>, DirectoryError> {
        if let Some(sub_regions) = self.cached((region, search_type)) {
            debug!("Directory cache hit for {} {:?}", region, search_type);
            return Ok(sub_regions);
        }

        info!(
            "Requesting venue directory - search type: {:?}, region: {}",
            search_type, region
        );

        let response = self
            .client
            .post(&self.params.base_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&SearchRequestBody {
                region,
                paging: Paging {
                    use_pagination: false,
                },
                facilities: vec![],
                search_type: search_type.query_code(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Api { status, message });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Malformed(e.to_string()))?;

        let sub_regions = parsed
            .regions
            .into_iter()
            .next()
            .map(|region| region.sub_regions)
            .ok_or_else(|| DirectoryError::Malformed("response has no regions".to_string()))?;

        let sub_regions = Arc::new(sub_regions);
        self.cache.lock().insert(
            (region, search_type),
            CachedRegion {
                fetched_at: Timestamp::now(),
                sub_regions: Arc::clone(&sub_regions),
            },
        );

        Ok(sub_regions)
    }
}

impl VenueDirectory for WetherspoonDirectoryClient {
    async fn subregion(
        &self,
        region: SearchRegion,
        search_type: SearchType,
        subregion: &str,
    ) -> Result<SubRegion, DirectoryError> {
        let sub_regions = self.fetch_sub_regions(region, search_type).await?;

        sub_regions
            .iter()
            .find(|candidate| candidate.name == subregion)
            .cloned()
            .ok_or_else(|| DirectoryError::SubregionNotFound {
                region,
                name: subregion.to_string(),
            })
    }
}
