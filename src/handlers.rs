use crate::state::AppState;
use crate::types::{Outcome, RunSummary};
use crate::utils::{PROMPT, read_first_line, request_prediction, split_smiles};
use std::io::{self, BufRead, Write};

/// Sends one SMILES string to the service and prints what came back.
///
/// Failures are reported on `out` and returned as an [`Outcome`]; only a
/// failed write to `out` is an `Err`.
pub async fn submit_prediction<W: Write>(
    state: &AppState,
    smiles: &str,
    out: &mut W,
) -> io::Result<Outcome> {
    let response = match request_prediction(&state.client, &state.config, smiles).await {
        Ok(response) => response,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(Outcome::Failed(err));
        }
    };

    if !response.error.is_empty() {
        writeln!(out, "Error: {}", response.error)?;
        return Ok(Outcome::ServiceError(response.error));
    }

    writeln!(
        out,
        "Predicted Lipophilicity for '{}': {:.6}",
        smiles, response.prediction
    )?;

    let image_path = if response.image_path.is_empty() {
        None
    } else {
        writeln!(out, "Molecule image saved at: {}", response.image_path)?;
        Some(response.image_path)
    };

    Ok(Outcome::Predicted {
        prediction: response.prediction,
        image_path,
    })
}

/// Submits every comma-separated token of `line`, one after another.
pub async fn run<W: Write>(state: &AppState, line: &str, out: &mut W) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for smiles in split_smiles(line) {
        if smiles.is_empty() && state.config.skip_empty {
            log::debug!("Skipping empty SMILES token");
            continue;
        }

        writeln!(out, "Sending prediction request for: {smiles}")?;
        let outcome = submit_prediction(state, smiles, out).await?;
        summary.record(&outcome);
    }

    log::info!(
        "Submitted {} SMILES: {} predicted, {} rejected by service, {} failed",
        summary.submitted,
        summary.predicted,
        summary.service_errors,
        summary.failures
    );

    Ok(summary)
}

/// Prints the prompt, reads one line from `input` and runs it.
pub async fn prompt_and_run<R: BufRead, W: Write>(
    state: &AppState,
    input: &mut R,
    out: &mut W,
) -> io::Result<RunSummary> {
    writeln!(out, "{PROMPT}")?;
    out.flush()?;

    let line = read_first_line(input)?;
    run(state, &line, out).await
}
