pub mod air_quality_handler;

pub use air_quality_handler::{__path_get_air_quality, get_air_quality};
