use thiserror::Error;

/// Failures that end processing of a single SMILES token.
///
/// The display text of each variant is the line shown to the user.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Error marshalling input data: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Error making request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Error reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("Error unmarshalling response: {0}")]
    Deserialize(#[source] serde_json::Error),
}
