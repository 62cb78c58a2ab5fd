//! Submission outcomes and the in-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};

use northlight_common::{EventBus, SessionEvent};

use crate::ResolveError;

/// Why a submission was ignored. None of these touch the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("message cannot be empty")]
    EmptyInput,
    #[error("still waiting for the previous reply")]
    Busy,
    #[error("session has been torn down")]
    TornDown,
}

/// What a call to `submit` did.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The answer was appended as a bot message.
    Answered,
    /// The resolver failed; the generic bot message and a toast were emitted.
    Failed(ResolveError),
    /// The session was torn down before the outcome arrived; nothing appended.
    Dropped,
    /// The submission was ignored.
    Rejected(SubmitRejection),
}

/// Holds the awaiting-response flag for the lifetime of one query.
///
/// Clears the flag on drop, so it is released on every exit path,
/// including cancellation of the submitting future.
pub(crate) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
    events: &'a EventBus,
    announced: bool,
}

impl<'a> InFlightGuard<'a> {
    /// Claim the flag. Fails if another query is already awaited.
    pub(crate) fn acquire(
        flag: &'a AtomicBool,
        events: &'a EventBus,
    ) -> Result<Self, SubmitRejection> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SubmitRejection::Busy);
        }
        Ok(Self {
            flag,
            events,
            announced: false,
        })
    }

    /// Tell renderers a reply is now awaited.
    pub(crate) fn announce(&mut self) {
        self.announced = true;
        self.events.publish(SessionEvent::AwaitingChanged(true));
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        if self.announced {
            self.events.publish(SessionEvent::AwaitingChanged(false));
        }
    }
}
