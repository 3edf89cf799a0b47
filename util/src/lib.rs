pub mod config;
pub mod languages;
pub mod test_suite;
