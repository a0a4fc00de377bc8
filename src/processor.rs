//! Sequential request processing
//!
//! Orchestrates the pipeline between the LineReader (request input), the
//! Dispatcher (business logic) and json_format (response output).
//!
//! Requests are handled strictly one at a time: a response is written and
//! flushed before the next line is read, so output order always matches
//! input order and a consumer on the other end of a pipe sees each response
//! as soon as it exists.

use crate::dispatch::Dispatcher;
use crate::io::json_format::{write_response, OutputStyle};
use crate::io::line_reader::LineReader;
use crate::types::AuthorizerError;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Counters for one processing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Input lines consumed, blank ones included
    pub lines: u64,
    /// Requests decoded and answered
    pub processed: u64,
    /// Lines skipped because they were not valid requests
    pub skipped: u64,
}

/// Process every request from `input` and write one response line each
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Lines that
/// cannot be decoded are logged and skipped without a response.
pub fn process<R, W>(
    input: R,
    output: &mut W,
    style: OutputStyle,
) -> Result<ProcessSummary, AuthorizerError>
where
    R: BufRead,
    W: ?Sized + Write,
{
    process_with(&mut Dispatcher::new(), input, output, style)
}

/// Same as [`process`], with a caller-provided dispatcher
pub fn process_with<R, W>(
    dispatcher: &mut Dispatcher,
    input: R,
    output: &mut W,
    style: OutputStyle,
) -> Result<ProcessSummary, AuthorizerError>
where
    R: BufRead,
    W: ?Sized + Write,
{
    let mut summary = ProcessSummary::default();
    let mut reader = LineReader::new(input);

    for result in reader.by_ref() {
        match result {
            Ok(request) => {
                let response = dispatcher.dispatch(request);
                write_response(&response, style, output)?;
                output.flush()?;
                summary.processed += 1;
            }
            Err(e) if e.is_recoverable() => {
                warn!("skipping request: {}", e);
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    summary.lines = reader.lines_read();
    info!(
        lines = summary.lines,
        processed = summary.processed,
        skipped = summary.skipped,
        "finished processing requests"
    );
    Ok(summary)
}
