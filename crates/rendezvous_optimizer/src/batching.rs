use rendezvous_directory::venue::Venue;

use crate::error::OptimizeError;

/// Largest venue chunk sent in a single provider request.
pub const DEFAULT_VENUE_BATCH_SIZE: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct VenueBatcher {
    batch_size: usize,
}

impl Default for VenueBatcher {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_VENUE_BATCH_SIZE,
        }
    }
}

impl VenueBatcher {
    pub fn new(batch_size: usize) -> Result<Self, OptimizeError> {
        if batch_size == 0 {
            return Err(OptimizeError::InvalidBatchSize);
        }

        Ok(Self { batch_size })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Contiguous chunks of at most `batch_size` venues, in input order.
    ///
    /// Every call starts over from the first venue.
    pub fn batches<'a>(&self, venues: &'a [Venue]) -> std::slice::Chunks<'a, Venue> {
        venues.chunks(self.batch_size)
    }

    pub fn batch_count(&self, venues: &[Venue]) -> usize {
        venues.len().div_ceil(self.batch_size)
    }
}
