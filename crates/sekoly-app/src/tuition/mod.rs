//! Tuition fee use cases.

mod suggest_amount;

pub use suggest_amount::SuggestTuitionAmount;
