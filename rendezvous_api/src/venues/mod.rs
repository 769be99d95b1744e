pub mod get_handler;
