pub mod as_the_crow_flies;
pub mod cache;
pub mod error;
pub mod gmaps_api;
pub mod retry;
pub mod time_constraint;
pub mod travel_matrix_client;
pub mod travel_matrix_provider;
pub mod travel_matrix_request;
pub mod travel_mode;
pub mod travel_time_matrix;
pub mod travel_time_provider;
