//! Configuration options for text encoding.
//!
//! This module provides:
//!
//! - [`EncodeOptions`]: per-call encoder configuration
//! - [`TimestampFormat`]: the pluggable timestamp rendering policy
//!
//! The timestamp formatter is an immutable field of the options value rather
//! than shared engine state. Every encode call receives its own options, so
//! two callers encoding concurrently can never observe each other's
//! formatter.
//!
//! ## Examples
//!
//! ```rust
//! use docwire::{EncodeOptions, TimestampFormat};
//!
//! // Compact output, UTC timestamps
//! let options = EncodeOptions::new();
//!
//! // Pretty output, +09:00 timestamps
//! let options = EncodeOptions::pretty().with_timestamp_format(TimestampFormat::jst());
//! ```

use chrono::{DateTime, FixedOffset, Utc};

/// Rendering policy for [`DocValue::Timestamp`](crate::DocValue::Timestamp)
/// values.
///
/// The default renders the stored UTC instant with second precision and a
/// literal trailing `Z`. [`TimestampFormat::LocalOffset`] shifts the instant
/// into a fixed offset first and renders the offset suffix instead;
/// [`TimestampFormat::jst`] is the built-in `+09:00` variant.
/// [`TimestampFormat::Custom`] accepts any pure function for policies the
/// built-ins do not cover.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use docwire::TimestampFormat;
///
/// let instant = Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap();
/// assert_eq!(TimestampFormat::Utc.render(&instant), "2024-05-01T03:00:00Z");
/// assert_eq!(
///     TimestampFormat::jst().render(&instant),
///     "2024-05-01T12:00:00+09:00"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TimestampFormat {
    /// `YYYY-MM-DDTHH:MM:SSZ`, second precision, UTC.
    #[default]
    Utc,
    /// `YYYY-MM-DDTHH:MM:SS+HH:MM`, the instant shifted into the offset.
    LocalOffset(FixedOffset),
    /// Fully caller-defined rendering.
    Custom(fn(&DateTime<Utc>) -> String),
}

impl TimestampFormat {
    /// The built-in `+09:00` (Japan Standard Time) policy.
    #[must_use]
    pub fn jst() -> Self {
        TimestampFormat::LocalOffset(
            FixedOffset::east_opt(9 * 3600).expect("+09:00 is a valid offset"),
        )
    }

    /// Renders an absolute instant under this policy.
    #[must_use]
    pub fn render(&self, instant: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Utc => instant.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            TimestampFormat::LocalOffset(offset) => instant
                .with_timezone(offset)
                .format("%Y-%m-%dT%H:%M:%S%:z")
                .to_string(),
            TimestampFormat::Custom(render) => render(instant),
        }
    }
}

/// Configuration for a single encode call.
///
/// # Examples
///
/// ```rust
/// use docwire::EncodeOptions;
///
/// // Default: compact, UTC timestamps, depth limit 128
/// let options = EncodeOptions::new();
/// assert!(!options.pretty);
/// assert_eq!(options.max_depth, 128);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Timestamp rendering policy.
    pub timestamp_format: TimestampFormat,
    /// When set, the encoded text is reshaped with standard JSON indentation.
    pub pretty: bool,
    /// Maximum map/list nesting depth before encoding fails.
    pub max_depth: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            timestamp_format: TimestampFormat::default(),
            pretty: false,
            max_depth: 128,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (compact output, UTC timestamps).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    #[must_use]
    pub fn pretty() -> Self {
        EncodeOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the timestamp rendering policy.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Sets the nesting depth limit. Default is 128.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
