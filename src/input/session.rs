//! Pick buffering in front of a `SimGame`.
//!
//! A player picks two vertices to draw an edge. `Session` resolves pointer
//! positions through the layout, emits a cue for every successful pick, and
//! sends each completed pair to the engine.

use smallvec::SmallVec;

use super::feedback::{Cue, Feedback, SilentFeedback};
use super::layout::{CircleLayout, Point};
use crate::core::{GameSnapshot, Move, VertexId};
use crate::error::SimError;
use crate::game::SimGame;
use crate::rules::{MoveResult, RulesEngine, UndoResult};

/// What a pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened: the game is over or no vertex was hit.
    Ignored,
    /// First vertex of a pair was picked.
    Selected(VertexId),
    /// Second vertex was picked and the pair went to the engine.
    Moved(MoveResult),
}

/// Interactive front of one game.
pub struct Session<F: Feedback = SilentFeedback> {
    game: SimGame,
    layout: CircleLayout,
    feedback: F,
    selected: SmallVec<[VertexId; 2]>,
}

impl Session<SilentFeedback> {
    /// A session without feedback.
    #[must_use]
    pub fn silent(game: SimGame) -> Self {
        Self::new(game, SilentFeedback)
    }
}

impl<F: Feedback> Session<F> {
    /// Wrap a game with the default layout.
    #[must_use]
    pub fn new(game: SimGame, feedback: F) -> Self {
        Self {
            game,
            layout: CircleLayout::default(),
            feedback,
            selected: SmallVec::new(),
        }
    }

    /// Use a different layout.
    #[must_use]
    pub fn with_layout(mut self, layout: CircleLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn game(&self) -> &SimGame {
        &self.game
    }

    pub fn layout(&self) -> &CircleLayout {
        &self.layout
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Vertices picked so far toward the next move.
    pub fn selection(&self) -> &[VertexId] {
        &self.selected
    }

    /// Pick whatever vertex lies under `point`.
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        if self.game.is_game_over() {
            return ClickOutcome::Ignored;
        }
        match self.layout.hit_test(self.game.vertex_count(), point) {
            Some(vertex) => self.select(vertex),
            None => ClickOutcome::Ignored,
        }
    }

    /// Pick a vertex directly.
    pub fn select(&mut self, vertex: VertexId) -> ClickOutcome {
        if self.game.is_game_over() || !vertex.is_on_board(self.game.vertex_count()) {
            return ClickOutcome::Ignored;
        }
        if self.selected.len() >= 2 {
            self.selected.clear();
        }

        self.feedback.cue(&Cue::for_color(self.game.current_color()));
        self.selected.push(vertex);
        if self.selected.len() < 2 {
            return ClickOutcome::Selected(vertex);
        }

        let mv = Move::between(self.selected[0], self.selected[1]);
        self.selected.clear();
        ClickOutcome::Moved(self.game.apply_move(mv))
    }

    /// Undo the last move and drop any half-made pick.
    pub fn undo(&mut self) -> UndoResult {
        self.selected.clear();
        self.game.undo()
    }

    /// Start over on the same board.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.game.reset();
    }

    /// Start over on a board of `vertex_count` vertices.
    pub fn configure(&mut self, vertex_count: usize) -> Result<(), SimError> {
        self.game.configure(vertex_count)?;
        self.selected.clear();
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::input::feedback::RecordingFeedback;
    use crate::rules::RejectReason;

    fn session(n: usize) -> Session<RecordingFeedback> {
        Session::new(SimGame::new(n).unwrap(), RecordingFeedback::default())
    }

    #[test]
    fn test_two_picks_make_a_move() {
        let mut session = session(4);

        assert_eq!(session.select(VertexId(0)), ClickOutcome::Selected(VertexId(0)));
        assert_eq!(session.selection(), &[VertexId(0)]);

        let outcome = session.select(VertexId(2));
        assert!(matches!(outcome, ClickOutcome::Moved(MoveResult::Accepted { .. })));
        assert!(session.selection().is_empty());
        assert_eq!(session.game().current_color(), Color::Blue);
    }

    #[test]
    fn test_cue_per_pick_in_mover_color() {
        let mut session = session(4);
        session.select(VertexId(0));
        session.select(VertexId(1));
        session.select(VertexId(2));

        let colors: Vec<_> = session.feedback().cues.iter().map(|c| c.color).collect();
        assert_eq!(colors, vec![Color::Red, Color::Red, Color::Blue]);
    }

    #[test]
    fn test_same_vertex_twice_is_self_loop() {
        let mut session = session(4);
        session.select(VertexId(3));

        assert_eq!(
            session.select(VertexId(3)),
            ClickOutcome::Moved(MoveResult::Rejected(RejectReason::SelfLoop))
        );
        assert!(session.selection().is_empty());
        assert_eq!(session.game().current_color(), Color::Red);
    }

    #[test]
    fn test_click_resolves_through_layout() {
        let mut session = session(4);

        assert_eq!(session.click(Point::new(250.0, 250.0)), ClickOutcome::Ignored);
        assert!(session.feedback().cues.is_empty());

        assert_eq!(session.click(Point::new(251.0, 51.0)), ClickOutcome::Selected(VertexId(0)));
        assert!(matches!(
            session.click(Point::new(449.0, 250.0)),
            ClickOutcome::Moved(MoveResult::Accepted { .. })
        ));
        assert_eq!(session.game().edges().len(), 1);
    }

    #[test]
    fn test_picks_ignored_after_win() {
        let mut session = session(5);
        for v in [0, 1, 3, 4, 1, 2, 2, 3, 0] {
            session.select(VertexId(v));
        }
        assert!(matches!(
            session.select(VertexId(2)),
            ClickOutcome::Moved(MoveResult::Win { color: Color::Red, .. })
        ));
        let cues = session.feedback().cues.len();

        assert_eq!(session.select(VertexId(4)), ClickOutcome::Ignored);
        assert_eq!(session.feedback().cues.len(), cues);
    }

    #[test]
    fn test_off_board_vertex_ignored() {
        let mut session = session(4);
        assert_eq!(session.select(VertexId(4)), ClickOutcome::Ignored);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_undo_and_reset_clear_selection() {
        let mut session = session(4);
        session.select(VertexId(0));
        session.select(VertexId(1));
        session.select(VertexId(2));

        assert!(session.undo().is_applied());
        assert!(session.selection().is_empty());
        assert_eq!(session.game().current_color(), Color::Red);

        session.select(VertexId(2));
        session.reset();
        assert!(session.selection().is_empty());
        assert!(session.game().edges().is_empty());
    }

    #[test]
    fn test_configure_changes_board() {
        let mut session = session(4);
        session.select(VertexId(1));

        session.configure(8).unwrap();
        assert_eq!(session.game().vertex_count(), 8);
        assert!(session.selection().is_empty());

        assert!(session.configure(2).is_err());
        assert_eq!(session.game().vertex_count(), 8);
    }
}
