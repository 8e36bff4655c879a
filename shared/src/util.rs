//! Small helpers shared by the workspace crates

use rand::Rng;

/// Custom epoch for [`snowflake_id`]: 2025-01-01 00:00:00 UTC
const ID_EPOCH_MS: i64 = 1_735_689_600_000;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Time-ordered i64 identifier for submission receipts.
///
/// Layout (53 bits, safe as a JavaScript number):
///   - 41 bits: milliseconds since [`ID_EPOCH_MS`]
///   - 12 bits: random
pub fn snowflake_id() -> i64 {
    let ts = (now_millis() - ID_EPOCH_MS) & 0x1FF_FFFF_FFFF;
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000);
    (ts << 12) | rand_bits
}
