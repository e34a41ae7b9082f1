#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Tracing integration for calltrail.
//!
//! Two things live here:
//!
//! - [`SpanExt`] appends the path of the active tracing span to a
//!   [`Trail`], so the trail records which operation was running when it
//!   was raised.
//! - [`LogExt`] and [`emit`] send a rendered trail to `tracing` as a single
//!   event, for the place where an error is finally handled.
//!
//! # Quick Start
//!
//! ```
//! use calltrail::{Trail, trail};
//! use calltrail_tracing::{CalltrailLayer, LogExt, SpanExt};
//! use tracing_subscriber::{Registry, layer::SubscriberExt};
//!
//! // 1. Set up tracing with CalltrailLayer (required for span field values)
//! let subscriber = Registry::default()
//!     .with(CalltrailLayer) // Captures span field values for trails
//!     .with(tracing_subscriber::fmt::layer()); // Your normal console output
//! tracing::subscriber::set_global_default(subscriber).expect("failed to set subscriber");
//!
//! // 2. Append the span path where it helps
//! #[tracing::instrument(fields(user_id = 42))]
//! fn example() -> Result<(), Trail> {
//!     Err(trail!("something went wrong ")).push_span()
//! }
//!
//! // 3. Log the trail where the error ends up
//! let _ = example().log_err();
//! ```
//!
//! The trail then reads
//!
//! ```text
//! ( src/main.rs:13 , in example() )    ->  something went wrong [in span: example{user_id=42}]
//! ```
//!
//! # Environment Variables
//!
//! - `CALLTRAIL_TRACING` - Comma-separated options:
//!   - `names` - Only append span names, without their field values

use std::{fmt, sync::OnceLock};

use calltrail::Trail;
use tracing::{
    Level, Span,
    field::{Field, Visit},
};
use tracing_subscriber::registry::LookupSpan;

/// Captured field values for a span.
#[derive(Clone)]
struct CapturedFields(String);

/// A tracing layer that captures span field values for trails.
///
/// Add this to your subscriber alongside your other layers. Without it,
/// [`SpanExt`] still appends span names but no field values.
///
/// # Examples
///
/// ```
/// use calltrail_tracing::CalltrailLayer;
/// use tracing_subscriber::{Registry, layer::SubscriberExt};
///
/// let subscriber = Registry::default()
///     .with(CalltrailLayer)
///     .with(tracing_subscriber::fmt::layer());
///
/// tracing::subscriber::set_global_default(subscriber).expect("failed to set subscriber");
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct CalltrailLayer;

impl<S> tracing_subscriber::Layer<S> for CalltrailLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        struct FieldVisitor<'a> {
            output: &'a mut String,
            first: bool,
        }

        impl Visit for FieldVisitor<'_> {
            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                use std::fmt::Write;
                if !self.first {
                    let _ = write!(self.output, " ");
                }
                self.first = false;
                let _ = write!(self.output, "{}={:?}", field.name(), value);
            }
        }

        let mut buf = String::new();
        let mut visitor = FieldVisitor {
            output: &mut buf,
            first: true,
        };
        attrs.record(&mut visitor);
        span.extensions_mut().insert(CapturedFields(buf));
    }
}

#[derive(Debug)]
struct CalltrailTracingEnvOptions {
    names_only: bool,
}

impl CalltrailTracingEnvOptions {
    fn get() -> &'static Self {
        static CALLTRAIL_TRACING_FLAGS: OnceLock<CalltrailTracingEnvOptions> = OnceLock::new();

        CALLTRAIL_TRACING_FLAGS.get_or_init(|| {
            let var = std::env::var_os("CALLTRAIL_TRACING");
            Self::parse(var.as_deref().map(|v| v.to_string_lossy()).as_deref())
        })
    }

    fn parse(var: Option<&str>) -> Self {
        let names_only = var.is_some_and(|var| {
            var.split(',')
                .any(|v| v.trim().eq_ignore_ascii_case("names"))
        });

        CalltrailTracingEnvOptions { names_only }
    }
}

/// Renders the path of `span` from the root span down to `span` itself,
/// e.g. `load{path="a.toml"} > parse`.
///
/// Returns `None` if the span is disabled or the active subscriber is not
/// built on a [`tracing_subscriber::Registry`].
pub fn span_path(span: &Span, with_fields: bool) -> Option<String> {
    span.with_subscriber(|(span_id, dispatch)| {
        let registry = dispatch.downcast_ref::<tracing_subscriber::Registry>()?;
        let span_ref = registry.span(span_id)?;

        let mut path = String::new();
        for ancestor in span_ref.scope().from_root() {
            if !path.is_empty() {
                path.push_str(" > ");
            }
            path.push_str(ancestor.name());

            if with_fields {
                let extensions = ancestor.extensions();
                if let Some(fields) = extensions.get::<CapturedFields>() {
                    if !fields.0.is_empty() {
                        path.push('{');
                        path.push_str(&fields.0);
                        path.push('}');
                    }
                }
            }
        }
        Some(path)
    })
    .flatten()
}

/// Extension trait for appending the current span path to trails.
///
/// The path is appended as free text, `[in span: outer > inner]`, behind
/// whatever record the trail currently ends with. When there is no active
/// span nothing is appended.
///
/// # Examples
///
/// ```
/// use calltrail::{Trail, trail};
/// use calltrail_tracing::SpanExt;
///
/// #[tracing::instrument]
/// fn might_fail() -> Result<(), Trail> {
///     Err(trail!("operation failed"))
/// }
///
/// let result = might_fail().push_span();
/// ```
pub trait SpanExt: Sized {
    /// Appends the path of [`Span::current`] to the trail.
    fn push_span(self) -> Self;
}

fn push_span_path(trail: &mut Trail, span: &Span, with_fields: bool) {
    if let Some(path) = span_path(span, with_fields) {
        trail.push("[in span: ").push(path).push(']');
    }
}

impl SpanExt for Trail {
    fn push_span(mut self) -> Self {
        let with_fields = !CalltrailTracingEnvOptions::get().names_only;
        push_span_path(&mut self, &Span::current(), with_fields);
        self
    }
}

impl<V> SpanExt for Result<V, Trail> {
    fn push_span(self) -> Self {
        self.map_err(SpanExt::push_span)
    }
}

/// Emits `trail` as a single tracing event at `level`.
///
/// The rendered trail goes into the `trail` field of the event.
pub fn emit(trail: &Trail, level: Level) {
    emit_display(trail, level);
}

fn emit_display(error: &dyn fmt::Display, level: Level) {
    match level {
        Level::ERROR => tracing::error!(trail = %error, "operation failed"),
        Level::WARN => tracing::warn!(trail = %error, "operation failed"),
        Level::INFO => tracing::info!(trail = %error, "operation failed"),
        Level::DEBUG => tracing::debug!(trail = %error, "operation failed"),
        Level::TRACE => tracing::trace!(trail = %error, "operation failed"),
    }
}

mod sealed {
    pub trait Sealed {}
    impl<A, E> Sealed for Result<A, E> {}
}

/// Extension trait for logging the error of a `Result` on its way out.
///
/// The result is passed through unchanged.
///
/// # Examples
///
/// ```
/// use calltrail::{Trail, trail};
/// use calltrail_tracing::LogExt;
///
/// fn run() -> Result<(), Trail> {
///     Err(trail!("config missing"))
/// }
///
/// let result = run().log_err();
/// assert!(result.is_err());
/// ```
pub trait LogExt: sealed::Sealed + Sized {
    /// Emits the error at [`Level::ERROR`].
    fn log_err(self) -> Self {
        self.log_err_at(Level::ERROR)
    }

    /// Emits the error at `level`.
    fn log_err_at(self, level: Level) -> Self;
}

impl<V, E> LogExt for Result<V, E>
where
    E: fmt::Display,
{
    fn log_err_at(self, level: Level) -> Self {
        if let Err(error) = &self {
            emit_display(error, level);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use calltrail::{Site, TrailOptions};
    use tracing_subscriber::{Layer, Registry, layer::SubscriberExt};

    use super::*;

    const SITE: Site = Site::new("t.rs", 1, "task");

    fn message_only() -> Trail {
        Trail::with_options(SITE, TrailOptions::message_only())
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

    impl<S: tracing::Subscriber> Layer<S> for Captured {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            struct TrailField(Option<String>);

            impl Visit for TrailField {
                fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                    if field.name() == "trail" {
                        self.0 = Some(format!("{value:?}"));
                    }
                }
            }

            let mut visitor = TrailField(None);
            event.record(&mut visitor);
            if let Some(trail) = visitor.0 {
                self.0
                    .lock()
                    .unwrap()
                    .push((*event.metadata().level(), trail));
            }
        }
    }

    #[test]
    fn test_push_span_appends_path_with_fields() {
        let subscriber = Registry::default().with(CalltrailLayer);
        tracing::subscriber::with_default(subscriber, || {
            let outer = tracing::info_span!("load", path = "a.toml");
            let _outer = outer.enter();
            let inner = tracing::info_span!("parse");
            let _inner = inner.enter();

            let trail = message_only().with("bad key ").push_span();
            assert_eq!(
                trail.as_str(),
                "\nbad key [in span: load{path=\"a.toml\"} > parse]"
            );
        });
    }

    #[test]
    fn test_push_span_without_layer_has_names_only() {
        tracing::subscriber::with_default(Registry::default(), || {
            let span = tracing::info_span!("fetch", id = 3);
            let _entered = span.enter();

            let result: Result<(), Trail> = Err(message_only());
            let trail = result.push_span().unwrap_err();
            assert_eq!(trail.as_str(), "\n[in span: fetch]");
        });
    }

    #[test]
    fn test_push_span_outside_any_span_is_a_no_op() {
        tracing::subscriber::with_default(Registry::default(), || {
            let trail = message_only().with("x").push_span();
            assert_eq!(trail.as_str(), "\nx");
        });
    }

    #[test]
    fn test_env_options_parse_names() {
        assert!(!CalltrailTracingEnvOptions::parse(None).names_only);
        assert!(!CalltrailTracingEnvOptions::parse(Some("")).names_only);
        assert!(!CalltrailTracingEnvOptions::parse(Some("fields,other")).names_only);
        assert!(CalltrailTracingEnvOptions::parse(Some("names")).names_only);
        assert!(CalltrailTracingEnvOptions::parse(Some("other, NAMES ")).names_only);
    }

    #[test]
    fn test_names_only_mode_drops_fields() {
        let subscriber = Registry::default().with(CalltrailLayer);
        tracing::subscriber::with_default(subscriber, || {
            let outer = tracing::info_span!("load", path = "a.toml");
            let _outer = outer.enter();
            let inner = tracing::info_span!("parse", line = 4);
            let _inner = inner.enter();

            let options = CalltrailTracingEnvOptions::parse(Some("names"));
            let mut trail = message_only();
            push_span_path(&mut trail, &Span::current(), !options.names_only);
            assert_eq!(trail.as_str(), "\n[in span: load > parse]");
        });
    }

    #[test]
    fn test_log_err_emits_rendered_trail() {
        let captured = Captured::default();
        let subscriber = Registry::default().with(captured.clone());
        tracing::subscriber::with_default(subscriber, || {
            let ok: Result<u8, Trail> = Ok(1);
            assert_eq!(ok.log_err().ok(), Some(1));

            let err: Result<u8, Trail> = Err(message_only().with("disk full"));
            let err = err.log_err_at(Level::WARN);
            assert!(err.is_err());

            emit(&message_only().with("again"), Level::INFO);
        });

        let events = captured.0.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                (Level::WARN, "\ndisk full".to_string()),
                (Level::INFO, "\nagain".to_string()),
            ]
        );
    }

    #[test]
    fn test_log_err_accepts_foreign_errors() {
        #[derive(Debug, thiserror::Error)]
        #[error("refused")]
        struct Refused;

        let captured = Captured::default();
        let subscriber = Registry::default().with(captured.clone());
        tracing::subscriber::with_default(subscriber, || {
            let _ = Err::<(), _>(Refused).log_err();
        });

        let events = captured.0.lock().unwrap();
        assert_eq!(*events, vec![(Level::ERROR, "refused".to_string())]);
    }
}
