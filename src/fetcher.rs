use crate::client::PredictionSource;
use crate::config::Config;
use crate::database::Database;
use crate::events::{EventSink, UiEvent};
use crate::model::CountryPrediction;
use crate::viewer;
use anyhow::Result;

/// Result of asking the API about one name.
#[derive(Debug, PartialEq)]
pub enum FetchOutcome {
    Found(Vec<CountryPrediction>),
    /// The API answered but had no country data for the name.
    Empty,
    /// Transport, status or parse failure, with its full context chain.
    Failed(String),
}

/// Ask `source` about `name`. Never returns an error; failures become [`FetchOutcome::Failed`].
pub fn fetch(source: &dyn PredictionSource, name: &str) -> FetchOutcome {
    match source.predict(name) {
        Ok(resp) if resp.predictions().is_empty() => FetchOutcome::Empty,
        Ok(resp) => FetchOutcome::Found(resp.into_predictions()),
        Err(e) => FetchOutcome::Failed(format!("{:#}", e)),
    }
}

/// Fetch predictions for `raw_name`, report and save them, then show every saved row.
///
/// A blank name is rejected before any request is made. Storage errors propagate.
pub fn run(
    config: &Config,
    source: &dyn PredictionSource,
    raw_name: &str,
    sink: &dyn EventSink,
) -> Result<()> {
    let name = raw_name.trim();
    if name.is_empty() {
        sink.send(UiEvent::InvalidName);
        return Ok(());
    }

    sink.send(UiEvent::RequestStarted { name: name.to_string() });
    let outcome = fetch(source, name);
    sink.send(UiEvent::RequestFinished);

    match outcome {
        FetchOutcome::Found(pairs) => {
            sink.send(UiEvent::ResultsHeader { name: name.to_string() });
            for pair in pairs {
                // Insert before reporting: every printed pair is a saved row.
                Database::open(&config.db_path)?.insert_prediction(
                    name,
                    &pair.country_id,
                    pair.probability,
                )?;
                sink.send(UiEvent::Prediction(pair));
            }
        }
        FetchOutcome::Empty => sink.send(UiEvent::NoData),
        FetchOutcome::Failed(msg) => sink.send(UiEvent::FetchFailed(msg)),
    }

    sink.send(UiEvent::SavedHeader { after_fetch: true });
    viewer::show_saved(config, sink)?;
    Ok(())
}
