#![allow(dead_code)]

use jiff::Timestamp;
use parking_lot::Mutex;
use rendezvous_directory::venue::Venue;
use rendezvous_matrix_providers::{
    error::ProviderError, travel_matrix_request::TravelMatrixRequest, travel_mode::TravelMode,
    travel_time_matrix::TravelTimeMatrix, travel_time_provider::TravelTimeProvider,
};
use rendezvous_optimizer::attendee::Attendee;

/// Answers every pair with a fixed value derived from the two locations, the
/// travel mode and the leg, and keeps a log of the requests it served.
#[derive(Default)]
pub struct FixedProvider {
    fail_on_request: Option<usize>,
    served: Mutex<Vec<TravelMatrixRequest>>,
}

impl FixedProvider {
    /// Fails the `n`th request (zero based) with an upstream error.
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on_request: Some(n),
            ..Self::default()
        }
    }

    pub fn served(&self) -> Vec<TravelMatrixRequest> {
        self.served.lock().clone()
    }

    fn minutes(origin: &str, destination: &str, mode: TravelMode) -> f64 {
        let seed = origin
            .bytes()
            .chain(destination.bytes())
            .fold(17u64, |acc, byte| acc.wrapping_mul(131).wrapping_add(byte as u64));
        let factor = match mode {
            TravelMode::Transit => 1.0,
            TravelMode::Cycling => 1.3,
            TravelMode::Walking => 3.0,
            TravelMode::Driving => 0.8,
        };
        (3 + seed % 97) as f64 * factor
    }
}

impl TravelTimeProvider for FixedProvider {
    async fn travel_times(
        &self,
        request: &TravelMatrixRequest,
    ) -> Result<TravelTimeMatrix, ProviderError> {
        let index = {
            let mut served = self.served.lock();
            served.push(request.clone());
            served.len() - 1
        };

        if self.fail_on_request == Some(index) {
            return Err(ProviderError::Status {
                status: String::from("REQUEST_DENIED"),
                message: String::from("The provided API key is invalid."),
            });
        }

        TravelTimeMatrix::from_rows(
            request
                .origins
                .iter()
                .map(|origin| {
                    request
                        .destinations
                        .iter()
                        .map(|destination| Self::minutes(origin, destination, request.mode))
                        .collect()
                })
                .collect(),
        )
    }
}

pub fn meeting_time() -> Timestamp {
    "2024-03-04T19:00:00Z".parse().unwrap()
}

pub fn london_venues() -> Vec<Venue> {
    vec![
        Venue::new("Baxter's Court", 51.5454559326172, -0.0550870001316071),
        Venue::new("Goldengrove", 51.5418014526367, 0.00639599980786443),
        Venue::new("Goodman's Field", 51.5117835998535, -0.0709149986505508),
    ]
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

pub fn many_venues(count: usize) -> Vec<Venue> {
    (0..count)
        .map(|i| Venue::new(format!("Venue {}", i), 51.3 + i as f64 * 0.003, -0.15))
        .collect()
}

pub fn many_attendees(count: usize) -> Vec<Attendee> {
    (0..count)
        .map(|i| {
            Attendee::new(
                format!("Attendee {}", i),
                format!("Start {}", i),
                format!("End {}", i),
                TravelMode::ALL[(i * 7) % TravelMode::ALL.len()],
            )
        })
        .collect()
}
