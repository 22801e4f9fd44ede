//! Format layer creation macros

/// Builds a text fmt layer (`pretty` or `compact`) with the display options applied.
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr) => {{
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_thread_ids($display.thread_ids)
    }};
}

/// Builds a JSON fmt layer; events are flattened and carry the current span.
macro_rules! create_json_layer {
    ($display:expr) => {{
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .flatten_event(true)
            .with_ansi(false)
            .with_target($display.target)
            .with_thread_ids($display.thread_ids)
    }};
}
