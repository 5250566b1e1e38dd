// Résumé assembly: section extractors over parsed sheet rows, the concurrent
// aggregator, the built-in sample dataset and the HTTP handlers.

pub mod aggregator;
pub mod extractors;
pub mod handlers;
pub mod lookup;
pub mod sample;
