pub mod builder;
pub mod data;
pub mod settings;

pub use builder::ChartBuilder;
pub use data::{house_of, sign_of, BirthData, ChartError, NatalChart, PlanetPlacement};
pub use settings::{ChartSettings, DEFAULT_MAX_ASPECTS};
