use rand::{Rng, RngCore};

use mediaseed_core::{EngagementRecord, EngagementType, ViewingRecord};

use crate::errors::GenerationError;
use crate::model::{ensure_count, ensure_rate};

use super::{pick, pick_tri_state, random_uuid};

/// Builds engagement events over existing viewing sessions.
#[derive(Debug, Clone)]
pub struct EngagementGenerator {
    /// Probability that a sampling attempt yields an engagement.
    pub engagement_rate: f64,
    /// Probability that an engagement carries a star rating.
    pub rating_rate: f64,
}

impl Default for EngagementGenerator {
    fn default() -> Self {
        Self {
            engagement_rate: 0.7,
            rating_rate: 0.3,
        }
    }
}

impl EngagementGenerator {
    pub fn new(engagement_rate: f64, rating_rate: f64) -> Self {
        Self {
            engagement_rate,
            rating_rate,
        }
    }

    /// Run `attempts` sampling attempts.
    ///
    /// The output length is binomially distributed and may be zero.
    pub fn generate(
        &self,
        viewings: &[ViewingRecord],
        attempts: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<EngagementRecord>, GenerationError> {
        if viewings.is_empty() {
            return Err(GenerationError::InvalidInput(
                "engagement generation requires at least one viewing record".to_string(),
            ));
        }
        ensure_count("engagement attempts", attempts)?;
        ensure_rate("engagement_rate", self.engagement_rate)?;
        ensure_rate("rating_rate", self.rating_rate)?;

        let mut records = Vec::new();
        for _ in 0..attempts {
            let view = &viewings[rng.random_range(0..viewings.len())];
            if !rng.random_bool(self.engagement_rate) {
                continue;
            }
            records.push(self.generate_one(view, rng));
        }
        Ok(records)
    }

    fn generate_one(&self, view: &ViewingRecord, rng: &mut dyn RngCore) -> EngagementRecord {
        let engagement_id = random_uuid(rng);
        let rating = rng
            .random_bool(self.rating_rate)
            .then(|| rng.random_range(1..=5));

        EngagementRecord {
            engagement_id,
            view_id: view.view_id.clone(),
            user_id: view.user_id.clone(),
            content_id: view.content_id.clone(),
            engagement_date: view.view_date,
            rating,
            liked: pick_tri_state(rng),
            added_to_list: pick_tri_state(rng),
            shared: pick_tri_state(rng),
            comment_added: pick_tri_state(rng),
            engagement_type: pick(&EngagementType::ALL, rng),
        }
    }
}
