use crate::config::Config;
use crate::error::PredictError;
use crate::types::{PredictionRequest, PredictionResponse};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::io::{self, BufRead};

pub const DEFAULT_PREDICT_URL: &str = "http://localhost:5000/predict";
pub const PROMPT: &str = "Enter SMILES strings separated by commas for lipophilicity prediction:";

/// Splits an input line on commas and trims each piece. Empty pieces are kept.
pub fn split_smiles(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Reads the first line of `input` without its line ending.
///
/// Bytes that are not valid UTF-8 become U+FFFD rather than failing the read.
/// End of input yields an empty line.
pub fn read_first_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);
    Ok(strip_line_ending(&line).to_string())
}

pub async fn request_prediction(
    client: &Client,
    config: &Config,
    smiles: &str,
) -> Result<PredictionResponse, PredictError> {
    let payload = PredictionRequest {
        smiles: smiles.to_string(),
    };
    let body = serde_json::to_vec(&payload).map_err(PredictError::Serialize)?;

    if config.debug {
        log::debug!(
            "POST {} payload: {}",
            config.predict_url,
            String::from_utf8_lossy(&body)
        );
    }

    let resp = match client
        .post(&config.predict_url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Failed to reach prediction service: {e}");
            return Err(PredictError::Transport(e));
        }
    };

    let status = resp.status();
    if !status.is_success() {
        log::warn!("Prediction service answered with HTTP {status}, decoding body anyway");
    }

    let bytes = resp.bytes().await.map_err(|e| {
        log::warn!("Failed to read response body: {e}");
        PredictError::ReadBody(e)
    })?;

    if config.debug {
        log::debug!("Response body: {}", String::from_utf8_lossy(&bytes));
    }

    serde_json::from_slice::<PredictionResponse>(&bytes).map_err(|e| {
        log::warn!("Failed to parse JSON response: {e}");
        PredictError::Deserialize(e)
    })
}
