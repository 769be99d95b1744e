use rendezvous_matrix_providers::travel_mode::TravelMode;

use crate::attendee::Attendee;

/// Attendees sharing a travel mode, queried together.
///
/// `indices` are positions in the original attendee list and are index-aligned
/// with `start_points` and `end_points`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeGroup {
    pub mode: TravelMode,
    pub indices: Vec<usize>,
    pub start_points: Vec<String>,
    pub end_points: Vec<String>,
}

impl AttendeeGroup {
    fn new(mode: TravelMode) -> Self {
        Self {
            mode,
            indices: Vec::new(),
            start_points: Vec::new(),
            end_points: Vec::new(),
        }
    }

    fn push(&mut self, index: usize, attendee: &Attendee) {
        self.indices.push(index);
        self.start_points.push(attendee.start_point.clone());
        self.end_points.push(attendee.end_point.clone());
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Stable-sorts the attendees by travel mode, then splits on every mode change.
///
/// Groups come out in travel mode order and keep the input order within a
/// group, so repeated calls on the same input always agree.
pub fn group_attendees_by_travel_mode(attendees: &[Attendee]) -> Vec<AttendeeGroup> {
    let mut order: Vec<usize> = (0..attendees.len()).collect();
    order.sort_by_key(|&index| attendees[index].travel_mode);

    let mut groups: Vec<AttendeeGroup> = Vec::new();
    for index in order {
        let attendee = &attendees[index];

        match groups.last_mut() {
            Some(group) if group.mode == attendee.travel_mode => group.push(index, attendee),
            _ => {
                let mut group = AttendeeGroup::new(attendee.travel_mode);
                group.push(index, attendee);
                groups.push(group);
            }
        }
    }

    groups
}
