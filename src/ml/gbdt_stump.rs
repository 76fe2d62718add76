//! Gradient-boosted decision stumps over a dense feature vector.

use serde::{Deserialize, Serialize};

/// Single-node decision tree used as a weak learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stump {
    /// Feature index used for the split.
    pub feature_index: u16,
    /// Threshold in feature units.
    pub threshold: f32,
    /// Prediction for `feature <= threshold`.
    pub left_value: f32,
    /// Prediction for `feature > threshold`.
    pub right_value: f32,
}

impl Stump {
    pub fn predict(&self, features: &[f32]) -> f32 {
        let value = features
            .get(self.feature_index as usize)
            .copied()
            .unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Boosted stumps producing one logit per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StumpBooster {
    /// Learning rate applied to each stump prediction.
    pub learning_rate: f32,
    /// Initial raw logits before boosting rounds.
    pub init_raw: Vec<f32>,
    /// Shape: `[n_rounds][n_classes]`.
    pub stumps: Vec<Vec<Stump>>,
}

impl StumpBooster {
    /// Check shapes against the class count and encoded feature length.
    pub fn validate(&self, class_count: usize, feature_len: usize) -> Result<(), String> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err("learning_rate must be a positive number".to_string());
        }
        if self.init_raw.len() != class_count {
            return Err(format!(
                "init_raw has {} values but there are {class_count} classes",
                self.init_raw.len()
            ));
        }
        for (round_idx, round) in self.stumps.iter().enumerate() {
            if round.len() != class_count {
                return Err(format!(
                    "Round {round_idx} has {} stumps but expected {class_count}",
                    round.len()
                ));
            }
            if let Some(stump) = round
                .iter()
                .find(|stump| stump.feature_index as usize >= feature_len)
            {
                return Err(format!(
                    "Round {round_idx} splits on feature {} but only {feature_len} features are encoded",
                    stump.feature_index
                ));
            }
        }
        Ok(())
    }

    /// Raw logits for a feature vector.
    pub fn predict_raw(&self, features: &[f32]) -> Vec<f32> {
        let mut raw = self.init_raw.clone();
        for round in &self.stumps {
            for (class_idx, stump) in round.iter().enumerate() {
                raw[class_idx] += self.learning_rate * stump.predict(features);
            }
        }
        raw
    }

    /// Best class index; ties resolve to the lowest index.
    pub fn predict_class_index(&self, features: &[f32]) -> usize {
        argmax(&self.predict_raw(features))
    }
}

fn argmax(values: &[f32]) -> usize {
    let mut best_idx = 0usize;
    let mut best_val = f32::NEG_INFINITY;
    for (idx, &v) in values.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best_idx = idx;
        }
    }
    best_idx
}
