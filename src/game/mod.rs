//! Round and score bookkeeping

mod state;

pub use state::{Game, Phase, Submission};
