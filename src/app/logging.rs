//! Progress logging utilities.

use log::info;

/// Logs progress information about URL scoring.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `succeeded` - Number of URLs that produced scores
/// * `failed` - Number of URLs that produced error rows
pub fn log_progress(start_time: std::time::Instant, succeeded: usize, failed: usize) {
    let completed = succeeded + failed;
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Scored {} URLs ({} ok, {} failed) in {:.2} seconds (~{:.2} URLs/sec)",
        completed, succeeded, failed, elapsed_secs, rate
    );
}
