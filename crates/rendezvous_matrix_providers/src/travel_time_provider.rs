use std::future::Future;

use crate::{
    error::ProviderError, travel_matrix_request::TravelMatrixRequest,
    travel_time_matrix::TravelTimeMatrix,
};

/// Source of one-way travel time matrices.
///
/// Implementations must either return a matrix of exactly
/// `request.expected_shape()` or fail; a partial matrix is never acceptable.
pub trait TravelTimeProvider: Send + Sync {
    fn travel_times(
        &self,
        request: &TravelMatrixRequest,
    ) -> impl Future<Output = Result<TravelTimeMatrix, ProviderError>> + Send;
}
