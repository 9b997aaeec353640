mod chain;
mod generate_curves;

pub use chain::assemble;
pub use generate_curves::{generate_curves, generate_curves_or_empty, GenerateCurves};
