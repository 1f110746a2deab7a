use crate::client::PredictionSource;
use crate::config::Config;
use crate::events::{EventSink, UiEvent};
use crate::{fetcher, viewer};
use anyhow::{Context, Result};
use std::io::BufRead;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    Fetch,
    View,
    Invalid,
}

impl MenuChoice {
    /// Only exact "1" or "2" are accepted; the line terminator must already be stripped.
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Fetch,
            "2" => MenuChoice::View,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Show the menu, read one choice from `input` and run it. Single-shot: no loop.
pub fn run<R: BufRead>(
    config: &Config,
    source: &dyn PredictionSource,
    input: &mut R,
    sink: &dyn EventSink,
) -> Result<()> {
    sink.send(UiEvent::MenuShown);
    sink.send(UiEvent::Prompt("Your choice: "));
    let choice = read_line(input)?;

    match MenuChoice::parse(&choice) {
        MenuChoice::Fetch => {
            sink.send(UiEvent::Prompt("Enter a name: "));
            let name = read_line(input)?;
            fetcher::run(config, source, &name, sink)
        }
        MenuChoice::View => {
            sink.send(UiEvent::SavedHeader { after_fetch: false });
            viewer::show_saved(config, sink)?;
            Ok(())
        }
        MenuChoice::Invalid => {
            sink.send(UiEvent::InvalidChoice);
            Ok(())
        }
    }
}

/// Read one line without its terminator. End of input reads as an empty line.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from stdin")?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
