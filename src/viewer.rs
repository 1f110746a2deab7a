use crate::config::Config;
use crate::database::Database;
use crate::events::{EventSink, UiEvent};
use anyhow::Result;

/// Report every saved prediction in insertion order.
pub fn show_saved(config: &Config, sink: &dyn EventSink) -> Result<()> {
    for row in Database::open(&config.db_path)?.all_predictions()? {
        sink.send(UiEvent::SavedRow(row));
    }
    Ok(())
}
