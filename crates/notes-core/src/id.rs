use crate::Clock;

use uuid::{NoContext, Timestamp, Uuid};

/// Generates a time-ordered identifier (UUID v7) stamped with the clock's current time.
///
/// The random tail keeps ids unique within a process even when two are minted
/// in the same millisecond.
pub fn new_id(clock: &dyn Clock) -> String {
    let now = clock.now();
    let seconds = u64::try_from(now.timestamp()).unwrap_or_default();
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    Uuid::new_v7(timestamp).to_string()
}
