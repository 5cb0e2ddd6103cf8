use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PredictError;

#[derive(Serialize, Debug, Clone)]
pub struct PredictionRequest {
    pub smiles: String,
}

/// Body returned by the prediction service. Every field may be absent or null.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PredictionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prediction: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug)]
pub enum Outcome {
    Predicted {
        prediction: f64,
        image_path: Option<String>,
    },
    ServiceError(String),
    Failed(PredictError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub submitted: usize,
    pub predicted: usize,
    pub service_errors: usize,
    pub failures: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        self.submitted += 1;
        match outcome {
            Outcome::Predicted { .. } => self.predicted += 1,
            Outcome::ServiceError(_) => self.service_errors += 1,
            Outcome::Failed(_) => self.failures += 1,
        }
    }
}
