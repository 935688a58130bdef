use std::time::Duration;

/// Time `$block` and warn when it overruns `$budget_micros`.
///
/// With `DF.log_performance` off the block runs untimed.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $budget_micros:expr, $block:block) => {{
        if $crate::config::LOG_PERFORMANCE {
            let started = $crate::utils::AppInstant::now();
            let result = $block;
            $crate::utils::report_overrun($name, started.elapsed(), $budget_micros);
            result
        } else {
            $block
        }
    }};
}

/// Log `name` at warn level when `elapsed` exceeds its budget. Returns whether it did.
pub fn report_overrun(name: &str, elapsed: Duration, budget_micros: u64) -> bool {
    let budget = Duration::from_micros(budget_micros);
    if elapsed <= budget {
        return false;
    }
    log::warn!(
        "{} ran {:.2}ms, over its {:.2}ms budget",
        name,
        elapsed.as_secs_f64() * 1000.0,
        budget.as_secs_f64() * 1000.0
    );
    true
}
