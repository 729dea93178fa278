use serde::Deserialize;

/// Signup promotion settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Experiment bucket; negative buckets move the promotion threshold
    pub promotion_variation: i64,
    /// Open the signup form as soon as the session starts
    pub open_on_start: bool,
}
