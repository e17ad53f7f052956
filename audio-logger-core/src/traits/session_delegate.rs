use crate::models::state::SessionState;
use crate::models::summary::{FileOutcome, SessionSummary};

/// Event observer for session progress.
///
/// All methods are called from the recording thread; implementations
/// should return quickly so they do not disturb acquisition cadence.
pub trait SessionDelegate: Send + Sync {
    /// Called on every state transition.
    fn on_state_changed(&self, state: &SessionState);

    /// Called when a file cycle begins, before the file is opened.
    fn on_file_started(&self, index: u32, filename: &str);

    /// Called when a file cycle ends, whether it completed or failed.
    fn on_file_finished(&self, outcome: &FileOutcome);

    /// Called once when the session reaches its terminal state.
    fn on_session_finished(&self, summary: &SessionSummary);
}
