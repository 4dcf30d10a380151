//! Conversions from transport errors to core errors

use simsimi_core::Error;

/// Convert a reqwest error into a transport error
pub fn transport_error(error: reqwest::Error) -> Error {
    let message = if error.is_timeout() {
        format!("request timed out: {error}")
    } else {
        error.to_string()
    };

    Error::Transport {
        message,
        source: Some(Box::new(error)),
    }
}
