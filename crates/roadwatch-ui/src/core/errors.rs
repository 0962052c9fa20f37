//! Error types surfaced by the dashboard.
//!
//! # Design
//! - Rendering never fails: unknown categories fall back to documented defaults.
//! - Data and boundary problems are typed so the shell can log or toast them.

use thiserror::Error;

/// Summary counters that do not reconcile with each other or with the records.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StatsInconsistency {
    /// Priority buckets do not add up to the reported total.
    #[error("priority buckets sum to {bucket_sum} but total is {total}")]
    PriorityMismatch {
        /// `high + medium + low`.
        bucket_sum: u64,
        /// Reported `totalDetections`.
        total: u64,
    },
    /// Plate counters do not add up to the reported total.
    #[error("plate counters sum to {plate_sum} but total is {total}")]
    PlateMismatch {
        /// `withPlates + withoutPlates`.
        plate_sum: u64,
        /// Reported `totalDetections`.
        total: u64,
    },
    /// More recent records were supplied than the total allows.
    #[error("{records} recent records exceed total of {total}")]
    RecordsExceedTotal {
        /// Records in the recent list.
        records: u64,
        /// Reported `totalDetections`.
        total: u64,
    },
}

/// Failures talking to the detection backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {message}")]
    Network {
        /// Transport error text.
        message: String,
    },
    /// The backend answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Problem detail or status text.
        message: String,
    },
    /// The response body could not be read or decoded.
    #[error("invalid response: {message}")]
    Decode {
        /// Decoder error text.
        message: String,
    },
    /// The browser refused to open the artifact and no download fallback worked.
    #[error("the browser blocked opening the export")]
    PopupBlocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inconsistency_messages_name_both_sides() {
        let err = StatsInconsistency::PriorityMismatch {
            bucket_sum: 140,
            total: 147,
        };
        assert_eq!(err.to_string(), "priority buckets sum to 140 but total is 147");
    }

    #[test]
    fn api_errors_render_for_toasts() {
        let status = ApiError::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(status.to_string(), "server returned 502: Bad Gateway");
        assert_eq!(
            ApiError::Network {
                message: "offline".to_string()
            }
            .to_string(),
            "network error: offline"
        );
    }
}
