//! Request tickets, phases, and completions.
//!
//! Every network call is started by a `begin_*` method on the view, which
//! hands out a [`RequestTicket`]. When the call finishes, its result travels
//! back as a [`Completion`] and is applied by the view's single `reduce` step.
//! Tickets carry the mount generation they were issued in, so results that
//! arrive after a remount are recognised as stale and dropped.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use workshop_admin_domain::error::AdminError;
use workshop_admin_domain::id::WorkshopId;
use workshop_admin_domain::workshop::Workshop;

/// Identifies one outstanding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    generation: u64,
    sequence: u64,
}

impl RequestTicket {
    pub(crate) const fn new(generation: u64, sequence: u64) -> Self {
        Self {
            generation,
            sequence,
        }
    }

    /// Mount generation the ticket was issued in.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    /// Monotonic sequence number within the view.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.sequence
    }
}

/// Where a workflow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// Nothing sent yet in this mount.
    #[default]
    Idle,
    /// A request is in flight.
    Pending(RequestTicket),
    /// The last request succeeded.
    Succeeded,
    /// The last request failed.
    Failed,
}

impl RequestPhase {
    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Result of a finished request, fed back into the view.
#[derive(Debug)]
pub enum Completion {
    /// The collection fetch finished.
    Loaded {
        ticket: RequestTicket,
        result: Result<Vec<Workshop>, AdminError>,
    },
    /// An update finished; on success carries the canonical record.
    Updated {
        ticket: RequestTicket,
        result: Result<Workshop, AdminError>,
    },
    /// A delete finished.
    Deleted {
        ticket: RequestTicket,
        id: WorkshopId,
        result: Result<(), AdminError>,
    },
}

impl Completion {
    /// The ticket this completion answers.
    #[must_use]
    pub const fn ticket(&self) -> RequestTicket {
        match self {
            Self::Loaded { ticket, .. }
            | Self::Updated { ticket, .. }
            | Self::Deleted { ticket, .. } => *ticket,
        }
    }
}

/// What `reduce` did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// The completion changed view state.
    Applied,
    /// The completion belonged to a previous mount and was dropped.
    Stale,
}

/// Await `future` unless `token` is cancelled first.
///
/// Returns `None` when cancelled; the future is dropped, which aborts the
/// underlying request.
pub async fn run_cancellable<F>(token: &CancellationToken, future: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        () = token.cancelled() => None,
        output = future => Some(output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn should_return_output_when_not_cancelled() {
        let token = CancellationToken::new();
        let out = run_cancellable(&token, async { 7 }).await;
        assert_eq!(out, Some(7));
    }

    #[tokio::test]
    async fn should_return_none_when_cancelled_before_completion() {
        let token = CancellationToken::new();
        let child = token.clone();
        let handle = tokio::spawn(async move {
            run_cancellable(&child, tokio::time::sleep(Duration::from_secs(3600))).await
        });
        token.cancel();
        assert_eq!(handle.await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_prefer_cancellation_when_already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let out = run_cancellable(&token, async { 1 }).await;
        assert_eq!(out, None);
    }

    #[test]
    fn should_expose_ticket_of_completion() {
        let ticket = RequestTicket::new(2, 9);
        let completion = Completion::Deleted {
            ticket,
            id: WorkshopId::new(1),
            result: Ok(()),
        };
        assert_eq!(completion.ticket(), ticket);
        assert_eq!(ticket.generation(), 2);
        assert_eq!(ticket.sequence(), 9);
    }

    #[test]
    fn should_report_pending_phase() {
        assert!(RequestPhase::Pending(RequestTicket::new(0, 0)).is_pending());
        assert!(!RequestPhase::Idle.is_pending());
    }
}
