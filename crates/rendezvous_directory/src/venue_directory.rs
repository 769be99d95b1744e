use std::future::Future;

use crate::{
    error::DirectoryError,
    search::{SearchRegion, SearchType},
    venue::SubRegion,
};

/// Lists the candidate venues of a subregion.
pub trait VenueDirectory: Send + Sync {
    fn subregion(
        &self,
        region: SearchRegion,
        search_type: SearchType,
        subregion: &str,
    ) -> impl Future<Output = Result<SubRegion, DirectoryError>> + Send;
}
