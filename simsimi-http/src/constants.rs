//! Constants for the SimSimi endpoints and protocol

use std::time::Duration;

/// Default identity endpoint
pub const DEFAULT_UUID_URL: &str = "http://www.simsimi.com/getUUID";

/// Default relay endpoint
pub const DEFAULT_RELAY_URL: &str = "http://www.simsimi.com/getRealtimeReq";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query key carrying the session token
pub const QUERY_UUID: &str = "uuid";

/// Query key carrying the utterance
pub const QUERY_TEXT: &str = "reqText";

/// Query key carrying the locale
pub const QUERY_LOCALE: &str = "lc";

/// Query key of the protocol version flag
pub const QUERY_VERSION: &str = "ft";

/// Query key of the status flag
pub const QUERY_STATUS: &str = "status";

/// Protocol version flag value the service requires
pub const PROTOCOL_VERSION: &str = "1";

/// Status flag value the service requires
pub const STATUS_FLAG: &str = "W";

/// Status the relay endpoint reports for a successful reply
pub const STATUS_OK: i64 = 200;

/// Initial capacity of a freshly allocated body buffer
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Idle buffers kept by a pool
pub const DEFAULT_MAX_IDLE_BUFFERS: usize = 64;

/// Buffers that grew past this capacity are not recycled
pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 64 * 1024;

/// Environment override for the identity endpoint
pub const ENV_UUID_URL: &str = "SIMSIMI_UUID_URL";

/// Environment override for the relay endpoint
pub const ENV_RELAY_URL: &str = "SIMSIMI_RELAY_URL";

/// Environment override for the request timeout, in seconds
pub const ENV_TIMEOUT_SECS: &str = "SIMSIMI_TIMEOUT_SECS";
