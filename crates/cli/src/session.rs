//! Upload-session state machine.
//!
//! The flow is two file uploads followed by one reconciliation. States and
//! transitions are explicit so an out-of-order event is a visible error
//! instead of a half-updated set of flags.

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingSubset,
    AwaitingMaster,
    Reconciling,
    Done,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::AwaitingSubset => write!(f, "awaiting_subset"),
            Self::AwaitingMaster => write!(f, "awaiting_master"),
            Self::Reconciling => write!(f, "reconciling"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Start,
    FileReceived,
    ReconciliationComplete,
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::FileReceived => write!(f, "file_received"),
            Self::ReconciliationComplete => write!(f, "reconciliation_complete"),
        }
    }
}

#[derive(Debug)]
pub struct InvalidTransition {
    pub state: SessionState,
    pub event: SessionEvent,
}

impl std::fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "event '{}' not valid in state '{}'", self.event, self.state)
    }
}

impl std::error::Error for InvalidTransition {}

/// One check run: `Idle → AwaitingSubset → AwaitingMaster → Reconciling → Done`.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Apply one event. Illegal combinations leave the state untouched.
    pub fn apply(&mut self, event: SessionEvent) -> Result<SessionState, InvalidTransition> {
        use SessionEvent::*;
        use SessionState::*;

        let next = match (self.state, event) {
            (Idle, Start) => AwaitingSubset,
            (AwaitingSubset, FileReceived) => AwaitingMaster,
            (AwaitingMaster, FileReceived) => Reconciling,
            (Reconciling, ReconciliationComplete) => Done,
            (state, event) => return Err(InvalidTransition { state, event }),
        };
        self.state = next;
        Ok(next)
    }

    /// Back to `Idle`, discarding the run entirely.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_done() {
        let mut session = Session::new();
        assert_eq!(session.apply(SessionEvent::Start).unwrap(), SessionState::AwaitingSubset);
        assert_eq!(
            session.apply(SessionEvent::FileReceived).unwrap(),
            SessionState::AwaitingMaster
        );
        assert_eq!(
            session.apply(SessionEvent::FileReceived).unwrap(),
            SessionState::Reconciling
        );
        assert_eq!(
            session.apply(SessionEvent::ReconciliationComplete).unwrap(),
            SessionState::Done
        );
    }

    #[test]
    fn out_of_order_events_are_rejected() {
        let mut session = Session::new();
        assert!(session.apply(SessionEvent::FileReceived).is_err());
        assert!(session.apply(SessionEvent::ReconciliationComplete).is_err());
        assert_eq!(session.state(), SessionState::Idle);

        session.apply(SessionEvent::Start).unwrap();
        assert!(session.apply(SessionEvent::ReconciliationComplete).is_err());
        assert_eq!(session.state(), SessionState::AwaitingSubset);
    }

    #[test]
    fn done_accepts_nothing_further() {
        let mut session = Session::new();
        session.apply(SessionEvent::Start).unwrap();
        session.apply(SessionEvent::FileReceived).unwrap();
        session.apply(SessionEvent::FileReceived).unwrap();
        session.apply(SessionEvent::ReconciliationComplete).unwrap();
        assert!(session.apply(SessionEvent::FileReceived).is_err());
        assert!(session.apply(SessionEvent::Start).is_err());
    }

    #[test]
    fn reset_returns_to_idle_from_anywhere() {
        let mut session = Session::new();
        session.apply(SessionEvent::Start).unwrap();
        session.apply(SessionEvent::FileReceived).unwrap();
        session.reset();
        assert_eq!(session.state(), SessionState::Idle);
        // A fresh run is possible after reset.
        assert!(session.apply(SessionEvent::Start).is_ok());
    }
}
