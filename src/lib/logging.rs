//! Tracing setup for the browser. Events are formatted by `tracing-subscriber`
//! and written to the devtools console at the matching level. Never pass
//! passwords or request bodies to tracing macros.

use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "info";

/// Parses the configured filter, falling back to `info` on invalid directives.
pub fn filter_for(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives.trim()).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

#[cfg(target_arch = "wasm32")]
pub use console::init;

#[cfg(target_arch = "wasm32")]
mod console {
    use super::filter_for;
    use crate::app_lib::{config::AppConfig, errors::AppError};
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::{Registry, fmt, fmt::MakeWriter, layer::SubscriberExt};
    use wasm_bindgen::JsValue;

    /// Installs the global subscriber. Call once before mounting the app.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(config: &AppConfig) -> Result<(), AppError> {
        let fmt_layer = fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_writer(ConsoleMakeWriter);

        let subscriber = Registry::default()
            .with(fmt_layer)
            .with(filter_for(&config.log_filter));

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|err| AppError::Config(format!("Failed to install logger: {err}")))
    }

    struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }

    /// Buffers one formatted event and emits it when dropped.
    struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(level: Level) -> Self {
            Self {
                level,
                buffer: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::filter_for;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn filter_accepts_directives() {
        assert_eq!(filter_for("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            filter_for(" wigell_web=trace ").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn invalid_filter_falls_back_to_info() {
        assert_eq!(
            filter_for("wigell_web=loud").max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
