pub mod directory_client;
pub mod error;
pub mod search;
pub mod venue;
pub mod venue_directory;
