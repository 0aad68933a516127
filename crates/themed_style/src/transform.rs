//! Transform entry points: parse, resolve, serialize, optionally report.

use crate::error::TransformError;
use crate::options::ThemeOptions;
use crate::report::{ConsoleSink, DebugSink};
use crate::resolve::apply_theme;
use crate::serialize::serialize_descriptor;
use themed_style_sfc::parse_sfc;

/// Run the full transform over one component source.
///
/// `filename` is only used for the debug markers; with `debug` disabled
/// the call has no side effects.
pub fn transform(
    source: &str,
    filename: &str,
    options: &ThemeOptions,
) -> Result<String, TransformError> {
    transform_with_sink(source, filename, options, &mut ConsoleSink)
}

/// Like [`transform`], with the debug output going to the given sink.
pub fn transform_with_sink(
    source: &str,
    filename: &str,
    options: &ThemeOptions,
    sink: &mut dyn DebugSink,
) -> Result<String, TransformError> {
    let mut descriptor = parse_sfc(source)?;
    apply_theme(&mut descriptor, options);
    let output = serialize_descriptor(&descriptor);

    if options.debug {
        sink.report(filename, &output);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CaptureSink {
        reports: Vec<(String, String)>,
    }

    impl DebugSink for CaptureSink {
        fn report(&mut self, filename: &str, output: &str) {
            self.reports.push((filename.to_string(), output.to_string()));
        }
    }

    #[test]
    fn debug_disabled_never_touches_the_sink() {
        let mut sink = CaptureSink::default();
        let options = ThemeOptions::default();
        transform_with_sink("<style>.a {}</style>", "a.vue", &options, &mut sink).unwrap();
        assert!(sink.reports.is_empty());
    }

    #[test]
    fn debug_reports_the_returned_output() {
        let mut sink = CaptureSink::default();
        let options = ThemeOptions {
            theme: Some("a".to_string()),
            debug: true,
        };
        let output =
            transform_with_sink("<style theme=\"b\">.x {}</style>", "a.vue", &options, &mut sink)
                .unwrap();

        assert_eq!(sink.reports.len(), 1);
        assert_eq!(sink.reports[0], ("a.vue".to_string(), output));
    }

    #[test]
    fn parse_errors_propagate() {
        let source = "<script>1</script><script>2</script>";
        let err = transform(source, "a.vue", &ThemeOptions::default()).unwrap_err();
        assert!(matches!(err, TransformError::Parse(_)));
    }
}
