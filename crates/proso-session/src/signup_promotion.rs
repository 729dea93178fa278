use proso_config::SignupConfig;
use proso_core::UserProfile;

/// Answers per experiment bucket step
const ANSWERS_PER_VARIATION: i64 = 20;
/// Width of the answered-count window that triggers the promotion
const PROMOTION_WINDOW: i64 = 10;

/// Decides when anonymous users are offered the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupPromotion {
    answered_threshold: i64,
    open_on_start: bool,
}

impl SignupPromotion {
    /// Negative experiment buckets scale the threshold; all others keep 0.
    pub fn new(variation: i64, open_on_start: bool) -> Self {
        let answered_threshold = if variation < 0 {
            ANSWERS_PER_VARIATION.saturating_mul(variation)
        } else {
            0
        };
        Self {
            answered_threshold,
            open_on_start,
        }
    }

    pub fn from_config(config: &SignupConfig) -> Self {
        Self::new(config.promotion_variation, config.open_on_start)
    }

    pub fn answered_threshold(&self) -> i64 {
        self.answered_threshold
    }

    pub fn should_open_on_start(&self) -> bool {
        self.open_on_start
    }

    /// Called after a question set; true when the signup form should open.
    pub fn on_question_set_finished(&self, answered_count: u64, profile: &UserProfile) -> bool {
        let answered = i64::try_from(answered_count).unwrap_or(i64::MAX);
        self.answered_threshold.saturating_sub(PROMOTION_WINDOW) < answered
            && answered <= self.answered_threshold
            && profile.is_anonymous()
    }
}
