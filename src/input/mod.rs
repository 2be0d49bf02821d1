//! Input side of the board: where vertices sit, which vertex a pointer hits,
//! and how two picks become a move.
//!
//! - `layout`: circle geometry and hit testing
//! - `feedback`: per-color cues emitted on every pick
//! - `session`: pick buffering in front of a `SimGame`

pub mod layout;
pub mod feedback;
pub mod session;

pub use layout::{CircleLayout, Point};
pub use feedback::{Cue, Feedback, RecordingFeedback, SilentFeedback};
pub use session::{ClickOutcome, Session};
