pub mod assembly;
pub mod matching;

pub use assembly::{generate_curves, generate_curves_or_empty, GenerateCurves};
pub use matching::MatchStrategy;
