pub mod db_adapters;
pub mod entities;
pub mod settings;
pub mod startup;
pub mod telemetry;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod use_cases;
pub mod web_adapters;
