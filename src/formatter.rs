//! Compact tracing formatter: wall clock, elapsed run time, level, span chain, target and fields.

use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Pins the instant that elapsed times are measured from. Later calls keep the first instant.
pub fn mark_start() {
    STARTED.get_or_init(Instant::now);
}

/// Milliseconds since [`mark_start`], or zero if it was never called.
pub fn elapsed_millis() -> u128 {
    STARTED.get().map(|start| start.elapsed().as_millis()).unwrap_or(0)
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Dim,
    Bold,
    Colour(&'static str),
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Dim => "2",
            Style::Bold => "1",
            Style::Colour(code) => code,
        }
    }
}

fn paint(writer: &mut Writer<'_>, style: Style, text: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{}m{}\x1b[0m", style.code(), text)
    } else {
        write!(writer, "{}", text)
    }
}

/// Five-column label and ANSI colour code for a level.
pub fn level_label(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("TRACE", "35"),
        Level::DEBUG => ("DEBUG", "34"),
        Level::INFO => (" INFO", "32"),
        Level::WARN => (" WARN", "33"),
        Level::ERROR => ("ERROR", "31"),
    }
}

/// Single-line event formatter for the command line tool.
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let now = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|e| {
            eprintln!("Failed to format timestamp: {}", e);
            fmt::Error
        })?;
        paint(&mut writer, Style::Dim, now)?;
        writer.write_char(' ')?;
        paint(&mut writer, Style::Dim, format_args!("+{:>5}ms", elapsed_millis()))?;
        writer.write_char(' ')?;

        let (label, colour) = level_label(meta.level());
        paint(&mut writer, Style::Colour(colour), label)?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            let mut saw_any = false;
            for span in scope.from_root() {
                paint(&mut writer, Style::Bold, span.metadata().name())?;
                let ext = span.extensions();
                if let Some(fields) = ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        paint(&mut writer, Style::Bold, "{")?;
                        write!(writer, "{}", fields)?;
                        paint(&mut writer, Style::Bold, "}")?;
                    }
                }
                paint(&mut writer, Style::Dim, ':')?;
                saw_any = true;
            }
            if saw_any {
                writer.write_char(' ')?;
            }
        }

        paint(&mut writer, Style::Dim, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
