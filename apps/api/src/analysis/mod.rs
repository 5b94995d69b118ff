// Resume analysis: the match pipeline, the quality check, and their HTTP handlers.
// All model calls go through `extraction` — no direct provider calls here.

pub mod analyzer;
pub mod handlers;
pub mod quality;
