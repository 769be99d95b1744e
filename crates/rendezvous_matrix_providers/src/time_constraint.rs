use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Temporal constraint of a one-way travel time request.
///
/// Transit schedules are asymmetric, so the outbound leg is constrained by its
/// arrival and the return leg by its departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeConstraint {
    ArriveBy(Timestamp),
    DepartAt(Timestamp),
}

impl TimeConstraint {
    pub fn instant(&self) -> Timestamp {
        match self {
            TimeConstraint::ArriveBy(at) | TimeConstraint::DepartAt(at) => *at,
        }
    }

    /// The instant truncated to whole seconds, the resolution providers accept.
    pub fn bucket(&self) -> i64 {
        self.instant().as_second()
    }

    pub fn query_param(&self) -> (&'static str, i64) {
        match self {
            TimeConstraint::ArriveBy(_) => ("arrival_time", self.bucket()),
            TimeConstraint::DepartAt(_) => ("departure_time", self.bucket()),
        }
    }
}
