//! Uniform outcome of repository operations
//!
//! Every operation returns an [`Outcome`]: either a [`Success`] carrying a
//! message and a payload, or a [`StoreError`] whose `Display` is the message.
//! The [`Report`] trait reads both sides the same way.

use crate::errors::StoreError;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Success<T> {
    message: String,
    payload: T,
}

impl<T> Success<T> {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            message: self.message,
            payload: f(self.payload),
        }
    }
}

impl Success<()> {
    /// Success that carries only a message
    pub fn message_only(message: String) -> Self {
        Success::new(message, ())
    }
}

pub type Outcome<T> = Result<Success<T>, StoreError>;

pub trait Report {
    type Payload;

    fn message(&self) -> String;

    fn is_success(&self) -> bool;

    fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Payload of a successful outcome; None on failure
    fn payload(&self) -> Option<&Self::Payload>;
}

impl<T> Report for Outcome<T> {
    type Payload = T;

    fn message(&self) -> String {
        match self {
            Ok(success) => success.message.clone(),
            Err(error) => error.to_string(),
        }
    }

    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn payload(&self) -> Option<&T> {
        self.as_ref().ok().map(Success::payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_error_are_complements() {
        let ok: Outcome<u8> = Ok(Success::new("Found object a.".to_string(), 1));
        let err: Outcome<u8> = Err(StoreError::ObjectNotCommitted("a".to_string()));

        assert!(ok.is_success() && !ok.is_error());
        assert!(err.is_error() && !err.is_success());
    }

    #[test]
    fn messages_come_from_either_side() {
        let ok: Outcome<()> = Ok(Success::message_only("* master".to_string()));
        let err: Outcome<()> = Err(StoreError::CannotRemoveCurrentBranch);

        assert_eq!(ok.message(), "* master");
        assert_eq!(err.message(), "Cannot remove current branch.");
    }

    #[test]
    fn payload_is_absent_on_failure() {
        let ok: Outcome<u8> = Ok(Success::new(String::new(), 7));
        let err: Outcome<u8> = Err(StoreError::NothingToCommit);

        assert_eq!(ok.payload(), Some(&7));
        assert_eq!(err.payload(), None);
    }
}
