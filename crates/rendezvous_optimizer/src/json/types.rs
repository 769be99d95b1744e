use jiff::{Timestamp, Zoned};
use rendezvous_directory::{
    error::DirectoryError,
    search::{SearchRegion, SearchType},
    venue::Venue,
    venue_directory::VenueDirectory,
};
use rendezvous_matrix_providers::travel_time_provider::TravelTimeProvider;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    attendee::Attendee,
    error::OptimizeError,
    meeting_time::{deserialize_meeting_time, next_meeting_time},
    optimizer::{OptimizeParams, optimize},
    scoring::ScoringStrategy,
};

pub const DEFAULT_SEARCH_SUBREGION: &str = "London";

fn default_search_subregion() -> String {
    String::from(DEFAULT_SEARCH_SUBREGION)
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "OptimizeRequest")]
pub struct JsonOptimizeRequest {
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub search_region: SearchRegion,
    #[serde(default = "default_search_subregion")]
    pub search_subregion: String,
    #[serde(default)]
    pub search_type: SearchType,
    /// Defaults to the next Monday at 19:00, local time. A datetime without
    /// offset is read in the server's time zone.
    #[serde(default, deserialize_with = "deserialize_meeting_time")]
    #[schemars(with = "Option<String>")]
    pub meeting_datetime: Option<Timestamp>,
    /// Overrides the server's scoring strategy for this request.
    #[serde(default)]
    pub scoring: Option<ScoringStrategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "OptimizeResponse")]
pub struct JsonOptimizeResponse {
    pub search_region: SearchRegion,
    pub search_subregion: String,
    pub meeting_time: Timestamp,
    pub optimal_venue: Venue,
    pub venue_scores: Vec<Venue>,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Optimize(#[from] OptimizeError),
}

impl JsonOptimizeRequest {
    pub fn meeting_time(&self) -> Result<Timestamp, OptimizeError> {
        match self.meeting_datetime {
            Some(meeting_time) => Ok(meeting_time),
            None => Ok(next_meeting_time(&Zoned::now())?.timestamp()),
        }
    }

    /// Looks up the candidate venues and ranks them for the attendees.
    #[instrument(skip_all, level = "debug")]
    pub async fn solve(
        self,
        directory: &impl VenueDirectory,
        provider: &impl TravelTimeProvider,
        params: &OptimizeParams,
    ) -> Result<JsonOptimizeResponse, RequestError> {
        let meeting_time = self.meeting_time()?;

        info!(
            region = %self.search_region,
            subregion = %self.search_subregion,
            attendees = self.attendees.len(),
            "Optimizing meeting at {}",
            meeting_time
        );

        let subregion = directory
            .subregion(self.search_region, self.search_type, &self.search_subregion)
            .await?;

        let params = match self.scoring {
            Some(scoring) => OptimizeParams {
                scoring,
                ..params.clone()
            },
            None => params.clone(),
        };

        let ranked = optimize(
            provider,
            &subregion.items,
            &self.attendees,
            meeting_time,
            &params,
        )
        .await?;

        let optimal_venue = ranked
            .first()
            .cloned()
            .ok_or(OptimizeError::NoVenues)?;

        Ok(JsonOptimizeResponse {
            search_region: self.search_region,
            search_subregion: subregion.name,
            meeting_time,
            optimal_venue,
            venue_scores: ranked,
        })
    }
}

#[cfg(test)]
mod tests {
    use rendezvous_directory::venue::SubRegion;

    use super::*;
    use crate::test_utils::{self, StubProvider};

    struct StubDirectory {
        subregion: SubRegion,
    }

    impl VenueDirectory for StubDirectory {
        async fn subregion(
            &self,
            region: SearchRegion,
            _search_type: SearchType,
            subregion: &str,
        ) -> Result<SubRegion, DirectoryError> {
            if subregion == self.subregion.name {
                Ok(self.subregion.clone())
            } else {
                Err(DirectoryError::SubregionNotFound {
                    region,
                    name: subregion.to_string(),
                })
            }
        }
    }

    fn london(items: Vec<Venue>) -> StubDirectory {
        StubDirectory {
            subregion: SubRegion {
                name: String::from("London"),
                items,
            },
        }
    }

    fn request(json: &str) -> JsonOptimizeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_defaults() {
        let request = request(
            r#"{
                "attendees": [
                    { "name": "Lizz", "start_point": "London SW1A 1AA", "end_point": "London SW1A 1AA", "travel_mode": "transit" }
                ]
            }"#,
        );

        assert_eq!(request.search_region, SearchRegion::England);
        assert_eq!(request.search_subregion, "London");
        assert_eq!(request.search_type, SearchType::AllVenues);
        assert!(request.meeting_datetime.is_none());
        assert!(request.meeting_time().unwrap() > Timestamp::now());
    }

    #[test]
    fn test_meeting_datetime_forms() {
        let utc = request(r#"{ "attendees": [], "meeting_datetime": "2024-03-04T19:00:00Z" }"#);
        assert_eq!(utc.meeting_datetime, Some(test_utils::meeting_time()));

        let naive = request(r#"{ "attendees": [], "meeting_datetime": "2024-03-04T19:00:00" }"#);
        let expected = jiff::civil::date(2024, 3, 4)
            .at(19, 0, 0, 0)
            .to_zoned(jiff::tz::TimeZone::system())
            .unwrap()
            .timestamp();
        assert_eq!(naive.meeting_datetime, Some(expected));

        let null = request(r#"{ "attendees": [], "meeting_datetime": null }"#);
        assert!(null.meeting_datetime.is_none());

        assert!(
            serde_json::from_str::<JsonOptimizeRequest>(
                r#"{ "attendees": [], "meeting_datetime": "soon" }"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<JsonOptimizeRequest>(
            r#"{ "attendees": [], "venue_count": 3 }"#,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_solve() {
        let request = request(
            r#"{
                "attendees": [
                    { "name": "Lizz", "start_point": "London SW1A 1AA", "end_point": "London SW1A 1AA", "travel_mode": "transit" },
                    { "name": "Lord Beckenham", "start_point": "Beckenham Hill Rd, Beckenham BR3 1SY", "end_point": "Beckenham Hill Rd, Beckenham BR3 1SY", "travel_mode": "cycling" }
                ],
                "meeting_datetime": "2024-03-04T19:00:00Z"
            }"#,
        );

        let response = request
            .solve(
                &london(test_utils::london_venues()),
                &StubProvider::default(),
                &OptimizeParams::default(),
            )
            .await
            .unwrap();

        assert_eq!(response.meeting_time, test_utils::meeting_time());
        assert_eq!(response.venue_scores.len(), 3);
        assert_eq!(response.optimal_venue, response.venue_scores[0]);
        assert!(
            response
                .venue_scores
                .windows(2)
                .all(|pair| pair[0].score <= pair[1].score)
        );
    }

    #[tokio::test]
    async fn test_unknown_subregion() {
        let request = request(
            r#"{ "attendees": [], "search_subregion": "Atlantis", "meeting_datetime": "2024-03-04T19:00:00Z" }"#,
        );

        let result = request
            .solve(
                &london(test_utils::london_venues()),
                &StubProvider::default(),
                &OptimizeParams::default(),
            )
            .await;

        assert!(matches!(
            result,
            Err(RequestError::Directory(DirectoryError::SubregionNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_empty_subregion() {
        let request = request(r#"{ "attendees": [], "meeting_datetime": "2024-03-04T19:00:00Z" }"#);

        let result = request
            .solve(
                &london(vec![]),
                &StubProvider::default(),
                &OptimizeParams::default(),
            )
            .await;

        assert!(matches!(
            result,
            Err(RequestError::Optimize(OptimizeError::NoVenues))
        ));
    }
}
