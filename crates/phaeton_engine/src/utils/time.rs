/// Runs a block and logs its wall-clock duration at debug level.
#[macro_export]
macro_rules! timer_debug {
    ($msg:literal, $block:expr) => {{
        let started = jiff::Timestamp::now();
        let result = $block;
        tracing::debug!(
            "{}: Took {:?}",
            $msg,
            jiff::Timestamp::now().duration_since(started)
        );
        result
    }};
}
