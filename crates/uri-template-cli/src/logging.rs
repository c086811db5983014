use std::{
    cmp::min,
    io::{self, Write},
    iter::repeat,
};

use log::{LevelFilter, STATIC_MAX_LEVEL};
use supports_color::{on as supports_color_on_stream, Stream::Stderr};
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_log::{AsTrace, LogTracer};
use tracing_subscriber::{
    filter::targets::Targets,
    fmt::{fmt, MakeWriter},
    layer::SubscriberExt,
};

use crate::errors::CliError;

/// Writes logs to stderr, keeping stdout for the expanded template.
struct ErrorFreeWriter;

impl Write for &ErrorFreeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Behave as if writing to /dev/null so that logging system
        // would keep working.
        io::stderr().write(buf).or(Ok(buf.len()))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stderr().write_all(buf).or(Ok(()))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush().or(Ok(()))
    }
}

impl<'a> MakeWriter<'a> for ErrorFreeWriter {
    type Writer = &'a Self;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

pub fn logging(log_level: LevelFilter, json_output: bool) -> Result<(), CliError> {
    // Calculate log_level
    let log_level = min(log_level, STATIC_MAX_LEVEL);

    let allowed_targets =
        (log_level != LevelFilter::Trace).then_some(["uri_template", "uri_template_cli"]);

    // Forward log to tracing
    LogTracer::builder()
        .with_max_level(log_level)
        .init()
        .map_err(CliError::logging)?;

    // Build fmt subscriber
    let log_level = log_level.as_trace();
    let subscriber_builder = fmt()
        .with_max_level(log_level)
        .with_writer(ErrorFreeWriter);

    let subscriber: Box<dyn Subscriber + Send + Sync> = if json_output {
        Box::new(subscriber_builder.json().finish())
    } else {
        // Disable time, target, file, line_num, thread name/ids to make the
        // output more readable
        let subscriber_builder = subscriber_builder
            .without_time()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_thread_names(false)
            .with_thread_ids(false);

        let stderr_supports_color = supports_color_on_stream(Stderr)
            .map(|color_level| color_level.has_basic)
            .unwrap_or_default();

        Box::new(subscriber_builder.with_ansi(stderr_supports_color).finish())
    };

    // Builder layer for filtering
    let filter_layer = allowed_targets.map(|allowed_targets| {
        Targets::new().with_targets(allowed_targets.into_iter().zip(repeat(log_level)))
    });

    // Builder final subscriber with filtering
    let subscriber = subscriber.with(filter_layer);

    // Setup global subscriber
    set_global_default(subscriber).map_err(CliError::logging)
}
