pub mod calculator;
pub mod score;
pub mod types;

pub use calculator::{angular_separation, orb_windows_disjoint, AspectCalculator};
pub use score::compatibility_score;
pub use types::{Aspect, AspectTone, AspectType};
