use fxhash::FxHashMap;
use jiff::Timestamp;
use parking_lot::Mutex;
use rendezvous_directory::venue::Venue;
use rendezvous_matrix_providers::{
    error::ProviderError, travel_matrix_request::TravelMatrixRequest, travel_mode::TravelMode,
    travel_time_matrix::TravelTimeMatrix, travel_time_provider::TravelTimeProvider,
};

use crate::attendee::Attendee;

/// Deterministic in-memory provider.
///
/// Pairs without an explicit time get a value derived from both location
/// strings, so the same pair always costs the same whatever request it is part
/// of.
#[derive(Default)]
pub struct StubProvider {
    times: FxHashMap<(String, String), f64>,
    failing_mode: Option<TravelMode>,
    truncate_rows: bool,
    requests: Mutex<Vec<TravelMatrixRequest>>,
}

impl StubProvider {
    pub fn with_time(mut self, origin: &str, destination: &str, minutes: f64) -> Self {
        self.times
            .insert((origin.to_string(), destination.to_string()), minutes);
        self
    }

    pub fn failing_for(mut self, mode: TravelMode) -> Self {
        self.failing_mode = Some(mode);
        self
    }

    /// Drops the last row of every answer.
    pub fn truncating_rows(mut self) -> Self {
        self.truncate_rows = true;
        self
    }

    pub fn requests(&self) -> Vec<TravelMatrixRequest> {
        self.requests.lock().clone()
    }

    fn minutes(&self, origin: &str, destination: &str) -> f64 {
        if let Some(minutes) = self
            .times
            .get(&(origin.to_string(), destination.to_string()))
        {
            return *minutes;
        }

        let seed = origin
            .bytes()
            .chain(destination.bytes())
            .fold(7u64, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as u64));
        5.0 + (seed % 85) as f64
    }
}

impl TravelTimeProvider for StubProvider {
    async fn travel_times(
        &self,
        request: &TravelMatrixRequest,
    ) -> Result<TravelTimeMatrix, ProviderError> {
        self.requests.lock().push(request.clone());

        if self.failing_mode == Some(request.mode) {
            return Err(ProviderError::Api {
                status: 503,
                message: String::from("Service Unavailable"),
            });
        }

        let mut rows = request
            .origins
            .iter()
            .map(|origin| {
                request
                    .destinations
                    .iter()
                    .map(|destination| self.minutes(origin, destination))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        if self.truncate_rows {
            rows.pop();
            return TravelTimeMatrix::new(
                rows.len(),
                request.destinations.len(),
                rows.concat(),
            );
        }

        TravelTimeMatrix::from_rows(rows)
    }
}

pub fn meeting_time() -> Timestamp {
    "2024-03-04T19:00:00Z".parse().unwrap()
}

pub fn london_attendees() -> Vec<Attendee> {
    vec![
        Attendee::new(
            "Lizz",
            "London SW1A 1AA",
            "London SW1A 1AA",
            TravelMode::Transit,
        ),
        Attendee::new(
            "Lord Beckenham",
            "Beckenham Hill Rd, Beckenham BR3 1SY",
            "Beckenham Hill Rd, Beckenham BR3 1SY",
            TravelMode::Cycling,
        ),
        Attendee::new(
            "Lord Sutton",
            "High St, Sutton SM1 1JA",
            "High St, Sutton SM1 1JA",
            TravelMode::Transit,
        ),
    ]
}

pub fn london_venues() -> Vec<Venue> {
    vec![
        Venue::new("Baxter's Court", 51.5454559326172, -0.0550870001316071),
        Venue::new("Goldengrove", 51.5418014526367, 0.00639599980786443),
        Venue::new("Goodman's Field", 51.5117835998535, -0.0709149986505508),
    ]
}

pub fn venue_grid(count: usize) -> Vec<Venue> {
    (0..count)
        .map(|i| {
            Venue::new(
                format!("Venue {}", i),
                51.4 + (i / 5) as f64 * 0.01,
                -0.2 + (i % 5) as f64 * 0.01,
            )
        })
        .collect()
}

/// Attendees cycling through every travel mode, with distinct start and end.
pub fn mixed_attendees(count: usize) -> Vec<Attendee> {
    let modes = [
        TravelMode::Driving,
        TravelMode::Transit,
        TravelMode::Walking,
        TravelMode::Cycling,
    ];
    (0..count)
        .map(|i| {
            Attendee::new(
                format!("Attendee {}", i),
                format!("Home {}", i),
                format!("Work {}", i),
                modes[i % modes.len()],
            )
        })
        .collect()
}
