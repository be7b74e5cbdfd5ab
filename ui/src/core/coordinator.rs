//! Request lifecycle as one finite-state value.
//!
//! Every UI interaction becomes a [`CheckEvent`]; [`transition`] maps
//! `(state, event)` to the next state and at most one [`Effect`] for the view
//! to carry out. Phase, last record, entry tab and drag flag all live in
//! [`CheckState`], so combinations like "loading with a result" cannot be
//! represented.
//!
//! ```text
//! Idle ──Submit──▶ Submitting ──Settled(Ok)──▶ Succeeded
//!   ▲                 │  ▲                        │
//!   │            Settled(Err)  Submit / Retry     │ Submit
//!   │                 ▼  │                        ▼
//!   └────Reset──── Failed ◀───────────────── Submitting
//! ```

use std::future::Future;

use super::config::ServiceConfig;
use super::error::SubmitError;
use super::normalize::{normalize_with, RawInput};
use super::record::TransactionRecord;
use super::upload;
use super::verdict::Verdict;

/// Which entry tab is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryMode {
    #[default]
    Manual,
    Upload,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    /// Waiting on attempt `attempt`.
    Submitting { attempt: u64 },
    Succeeded(Verdict),
    Failed(SubmitError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckEvent {
    SelectMode(EntryMode),
    DragEnter,
    /// Drag left the drop zone or the file was dropped.
    DragLeave,
    /// A freshly normalized record.
    Submit(TransactionRecord),
    /// Input was rejected before any request could be made.
    Rejected(SubmitError),
    /// Replay the last submitted record.
    Retry,
    /// The request for `attempt` finished.
    Settled {
        attempt: u64,
        outcome: Result<Verdict, SubmitError>,
    },
    Reset,
}

/// Work the view performs on behalf of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send `record` and report back with `Settled { attempt, .. }`.
    Dispatch {
        attempt: u64,
        record: TransactionRecord,
    },
    /// Blank the manual form and the file input.
    ClearInputs,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckState {
    pub phase: Phase,
    pub mode: EntryMode,
    pub drag_active: bool,
    last_submitted: Option<TransactionRecord>,
    attempts: u64,
}

impl CheckState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.phase {
            Phase::Succeeded(verdict) => Some(verdict),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn last_submitted(&self) -> Option<&TransactionRecord> {
        self.last_submitted.as_ref()
    }

    /// Retry is offered on a retryable failure when there is something to replay.
    pub fn can_retry(&self) -> bool {
        self.last_submitted.is_some() && self.error().is_some_and(SubmitError::is_retryable)
    }

    fn dispatch(mut self, record: TransactionRecord) -> (Self, Option<Effect>) {
        self.attempts += 1;
        let attempt = self.attempts;
        self.phase = Phase::Submitting { attempt };
        self.last_submitted = Some(record.clone());
        (self, Some(Effect::Dispatch { attempt, record }))
    }
}

/// The pure transition function.
pub fn transition(state: &CheckState, event: CheckEvent) -> (CheckState, Option<Effect>) {
    let mut next = state.clone();

    match event {
        CheckEvent::SelectMode(mode) => {
            next.mode = mode;
            (next, None)
        }
        CheckEvent::DragEnter => {
            next.drag_active = true;
            (next, None)
        }
        CheckEvent::DragLeave => {
            next.drag_active = false;
            (next, None)
        }
        CheckEvent::Submit(_) | CheckEvent::Retry | CheckEvent::Rejected(_)
            if state.is_loading() =>
        {
            tracing::debug!("ignoring input while a request is in flight");
            (next, None)
        }
        CheckEvent::Submit(record) => next.dispatch(record),
        CheckEvent::Retry => match state.last_submitted.clone() {
            Some(record) if state.can_retry() => next.dispatch(record),
            _ => (next, None),
        },
        CheckEvent::Rejected(err) => {
            next.phase = Phase::Failed(err);
            (next, None)
        }
        CheckEvent::Settled { attempt, outcome } => match state.phase {
            Phase::Submitting { attempt: current } if current == attempt => {
                next.phase = match outcome {
                    Ok(verdict) => Phase::Succeeded(verdict),
                    Err(err) => Phase::Failed(err),
                };
                (next, None)
            }
            _ => (next, None),
        },
        CheckEvent::Reset => {
            let reset = CheckState {
                mode: state.mode,
                attempts: state.attempts,
                ..CheckState::default()
            };
            (reset, Some(Effect::ClearInputs))
        }
    }
}

/// Normalize collected input into the event that starts (or refuses) a
/// submission.
pub fn prepare(raw: &RawInput, config: &ServiceConfig) -> CheckEvent {
    match normalize_with(raw, config.normalize_mode) {
        Ok(record) => CheckEvent::Submit(record),
        Err(err) => CheckEvent::Rejected(err.into()),
    }
}

/// Same as [`prepare`] for a finished file read (`None` when it failed).
pub fn prepare_upload(contents: Option<&str>, config: &ServiceConfig) -> CheckEvent {
    match upload::parse(contents) {
        Ok(raw) => prepare(&raw, config),
        Err(err) => CheckEvent::Rejected(err.into()),
    }
}

/// Screen a picked file by name, then read it with `read` and prepare the
/// result. A rejected name returns before `read` is called.
pub async fn ingest_file<R, F>(name: &str, read: R, config: &ServiceConfig) -> CheckEvent
where
    R: FnOnce() -> F,
    F: Future<Output = Option<String>>,
{
    if let Err(err) = upload::screen(name, None) {
        return CheckEvent::Rejected(err.into());
    }

    tracing::debug!(file = %name, "reading uploaded file");
    let contents = read().await;
    prepare_upload(contents.as_deref(), config)
}
