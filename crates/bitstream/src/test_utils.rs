/// Installs a test subscriber so `trace!` output shows up in failing tests.
///
/// Usage:
/// - `init_test_tracing!()` - uses TRACE level (default)
/// - `init_test_tracing!(DEBUG)` - uses specified level
#[macro_export]
macro_rules! init_test_tracing {
    () => {
        init_test_tracing!(TRACE);
    };
    ($level:ident) => {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::$level)
            .with_test_writer()
            .try_init();
    };
}
