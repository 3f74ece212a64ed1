use std::thread;
use std::time::Duration;

use log::info;

/// Fixed pause between outbound requests to bound the request rate.
pub fn between_requests(delay: Duration) {
    info!("Waiting {} ms before next request...", delay.as_millis());
    thread::sleep(delay);
}
