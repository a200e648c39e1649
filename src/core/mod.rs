// Core algorithm exports
pub mod persona;
pub mod recommender;
pub mod scoring;
pub mod vibes;

pub use persona::{classify_budget, classify_group, estimate, VibeRule, VIBE_RULES};
pub use recommender::{Recommendations, Recommender};
pub use scoring::score_vibes;
pub use vibes::{map_answers, VibeError};
