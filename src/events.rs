use crate::model::{CountryPrediction, NationalityPrediction};
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;
use std::time::Duration;

// ── Events from menu / fetcher / viewer to the console ──────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    MenuShown,
    /// Inline prompt, printed without a trailing newline.
    Prompt(&'static str),
    InvalidChoice,
    InvalidName,

    RequestStarted { name: String },
    RequestFinished,

    ResultsHeader { name: String },
    Prediction(CountryPrediction),
    NoData,
    FetchFailed(String),

    /// Header before the saved rows. `after_fetch` adds the leading blank line.
    SavedHeader { after_fetch: bool },
    SavedRow(NationalityPrediction),
}

// ── EventSink trait ─────────────────────────────────────────────────────────

/// Abstraction for reporting progress and results to the user.
pub trait EventSink {
    fn send(&self, event: UiEvent);
}

// ── Console sink ────────────────────────────────────────────────────────────

/// Renders events as console lines. Styling and the spinner are only used on a terminal.
pub struct ConsoleSink<W: Write = io::Stdout> {
    out: Mutex<W>,
    spinner: Mutex<Option<ProgressBar>>,
    styled: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let styled = stdout.is_terminal();
        Self {
            out: Mutex::new(stdout),
            spinner: Mutex::new(None),
            styled,
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Plain, unstyled output into `out`.
    #[allow(dead_code)]
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            spinner: Mutex::new(None),
            styled: false,
        }
    }

    fn make_spinner(name: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        pb.set_message(format!("Asking nationalize.io about '{}'...", name));
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    fn stop_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }

    fn warn(&self, out: &mut W, msg: &str) -> io::Result<()> {
        if self.styled {
            writeln!(out, "{}", msg.yellow())
        } else {
            writeln!(out, "{}", msg)
        }
    }

    fn render(&self, out: &mut W, event: UiEvent) -> io::Result<()> {
        match event {
            UiEvent::MenuShown => {
                writeln!(out, "Choose an option:")?;
                writeln!(out, "1. Make a new API request")?;
                writeln!(out, "2. View saved results from the database")
            }
            UiEvent::Prompt(text) => {
                write!(out, "{}", text)?;
                out.flush()
            }
            UiEvent::InvalidChoice => self.warn(out, "Invalid choice, please select 1 or 2."),
            UiEvent::InvalidName => self.warn(out, "Please enter a valid name."),

            UiEvent::RequestStarted { name } => {
                if self.styled {
                    *self.spinner.lock().unwrap() = Some(Self::make_spinner(&name));
                }
                Ok(())
            }
            UiEvent::RequestFinished => {
                self.stop_spinner();
                Ok(())
            }

            UiEvent::ResultsHeader { name } => writeln!(out, "Results for name '{}':", name),
            UiEvent::Prediction(pair) => writeln!(out, "{}", pair),
            UiEvent::NoData => writeln!(out, "No data available for this name."),
            UiEvent::FetchFailed(msg) => {
                if self.styled {
                    writeln!(out, "{} {}", "Error:".red().bold(), msg)
                } else {
                    writeln!(out, "Error: {}", msg)
                }
            }

            UiEvent::SavedHeader { after_fetch: true } => {
                writeln!(out, "\nSaved results from database:")
            }
            UiEvent::SavedHeader { after_fetch: false } => {
                writeln!(out, "Saved results from the database:")
            }
            UiEvent::SavedRow(row) => writeln!(out, "{}", row),
        }
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn send(&self, event: UiEvent) {
        let mut out = self.out.lock().unwrap();
        let _ = self.render(&mut out, event);
    }
}

// ── Recording sink (tests) ──────────────────────────────────────────────────

#[cfg(test)]
pub struct RecordingSink {
    events: std::cell::RefCell<Vec<UiEvent>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: std::cell::RefCell::new(Vec::new()) }
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    /// Saved rows reported so far, rendered as console lines.
    pub fn saved_lines(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                UiEvent::SavedRow(row) => Some(row.to_string()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn send(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(events: Vec<UiEvent>) -> String {
        let sink = ConsoleSink::with_writer(Vec::new());
        for event in events {
            sink.send(event);
        }
        String::from_utf8(sink.out.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_menu_and_prompts() {
        assert_eq!(
            rendered(vec![UiEvent::MenuShown, UiEvent::Prompt("Your choice: ")]),
            "Choose an option:\n1. Make a new API request\n2. View saved results from the database\nYour choice: "
        );
        assert_eq!(rendered(vec![UiEvent::Prompt("Enter a name: ")]), "Enter a name: ");
    }

    #[test]
    fn test_invalid_input_messages() {
        assert_eq!(
            rendered(vec![UiEvent::InvalidChoice]),
            "Invalid choice, please select 1 or 2.\n"
        );
        assert_eq!(rendered(vec![UiEvent::InvalidName]), "Please enter a valid name.\n");
    }

    #[test]
    fn test_fetch_result_lines() {
        let out = rendered(vec![
            UiEvent::RequestStarted { name: "Sean".into() },
            UiEvent::RequestFinished,
            UiEvent::ResultsHeader { name: "Sean".into() },
            UiEvent::Prediction(CountryPrediction { country_id: "IE".into(), probability: 0.61 }),
            UiEvent::Prediction(CountryPrediction { country_id: "GB".into(), probability: 0.12 }),
        ]);
        assert_eq!(
            out,
            "Results for name 'Sean':\nCountry: IE, Probability: 0.61\nCountry: GB, Probability: 0.12\n"
        );
    }

    #[test]
    fn test_no_data_and_error_lines() {
        assert_eq!(rendered(vec![UiEvent::NoData]), "No data available for this name.\n");
        assert_eq!(
            rendered(vec![UiEvent::FetchFailed("HTTP request failed: http status: 404".into())]),
            "Error: HTTP request failed: http status: 404\n"
        );
    }

    #[test]
    fn test_saved_headers_and_rows() {
        let row = NationalityPrediction {
            id: 1,
            name: "Alice".into(),
            country_code: "US".into(),
            probability: 0.42,
        };
        assert_eq!(
            rendered(vec![UiEvent::SavedHeader { after_fetch: false }, UiEvent::SavedRow(row.clone())]),
            "Saved results from the database:\nName: Alice, Country: US, Probability: 0.42\n"
        );
        assert_eq!(
            rendered(vec![UiEvent::SavedHeader { after_fetch: true }, UiEvent::SavedRow(row)]),
            "\nSaved results from database:\nName: Alice, Country: US, Probability: 0.42\n"
        );
    }
}
