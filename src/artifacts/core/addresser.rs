//! Content addressing for commits
//!
//! A commit id is derived from the commit time and message only. Two commits
//! sharing a message within the same clock tick would therefore collide; the
//! store does not defend against that and callers who need stronger ids can
//! inject their own addresser.

use crate::artifacts::core::ADDRESS_TIMESTAMP_FORMAT;
use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, FixedOffset};
use sha1::{Digest, Sha1};

pub trait ContentAddresser: Send + Sync {
    fn address(&self, timestamp: &DateTime<FixedOffset>, message: &str) -> CommitId;
}

impl<F> ContentAddresser for F
where
    F: Fn(&DateTime<FixedOffset>, &str) -> CommitId + Send + Sync,
{
    fn address(&self, timestamp: &DateTime<FixedOffset>, message: &str) -> CommitId {
        self(timestamp, message)
    }
}

/// SHA-1 of the formatted timestamp followed by the message, as 40 hex chars
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Addresser;

impl ContentAddresser for Sha1Addresser {
    fn address(&self, timestamp: &DateTime<FixedOffset>, message: &str) -> CommitId {
        let mut hasher = Sha1::new();
        hasher.update(timestamp.format(ADDRESS_TIMESTAMP_FORMAT).to_string().as_bytes());
        hasher.update(message.as_bytes());

        let oid = hasher.finalize();
        CommitId::new(format!("{oid:x}"))
    }
}
