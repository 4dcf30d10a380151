//! Locale codes understood by the relay endpoint
//!
//! Locales are plain strings and are sent verbatim. These constants name the
//! two codes the service documents; anything else is forwarded untouched and
//! the service decides whether it accepts it.

/// Korean replies
pub const KOREAN: &str = "ko";

/// English replies
///
/// The service expects this exact casing.
pub const ENGLISH: &str = "En";
