//! Game state for the A → B path game.
//! One `GameState` owns the drawn path and the round's outcome; pointer handlers feed it
//! board-space points and the view observes it through `use_reducer`.

use std::rc::Rc;
use yew::Reducible;

use crate::config::BoardConfig;
use crate::geometry::{distance, in_bounds, point_in_rect, Point};
use crate::util::clog;

pub const MSG_READY: &str = "Start on A and draw to B.";
pub const MSG_MUST_START_ON_A: &str = "You must start inside A.";
pub const MSG_DRAWING: &str = "Good, now stay away from the red blocks…";
pub const MSG_LEFT_AREA: &str = "You left the play area!";
pub const MSG_HIT_OBSTACLE: &str = "You hit an obstacle!";
pub const MSG_WON: &str = "Nice! You reached B safely 🎉";
pub const MSG_LET_GO: &str = "You let go before reaching B.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Drawing,
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: Rc<BoardConfig>,
    pub phase: Phase,
    /// Decimated pointer trail, oldest first.
    pub path: Vec<Point>,
    pub status: String,
    /// Set when the current (or last) drag began inside A. Cleared only by reset.
    pub started_from_start: bool,
    /// Bumped on every accepted transition so the canvas knows when to redraw.
    pub version: u64,
}

impl GameState {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config: Rc::new(config),
            phase: Phase::Idle,
            path: Vec::new(),
            status: MSG_READY.to_string(),
            started_from_start: false,
            version: 0,
        }
    }

    /// Returns whether the press was accepted (state changed).
    pub fn on_press(&mut self, p: Point) -> bool {
        if self.phase == Phase::Won {
            return false;
        }
        if !self.config.start.contains(p) {
            self.set_status(MSG_MUST_START_ON_A);
            return self.bump();
        }
        self.started_from_start = true;
        self.path.clear();
        self.path.push(p);
        self.phase = Phase::Drawing;
        self.set_status(MSG_DRAWING);
        self.bump()
    }

    /// Evaluates the raw point for loss/win before (maybe) appending it to the trail.
    pub fn on_move(&mut self, p: Point) -> bool {
        if self.phase != Phase::Drawing {
            return false;
        }
        let cfg = Rc::clone(&self.config);
        if !in_bounds(p, cfg.width, cfg.height) {
            self.finish(Phase::Lost, MSG_LEFT_AREA);
            return self.bump();
        }
        if cfg.obstacles.iter().any(|o| point_in_rect(p, o)) {
            self.finish(Phase::Lost, MSG_HIT_OBSTACLE);
            return self.bump();
        }
        if self.started_from_start && cfg.end.contains(p) {
            self.finish(Phase::Won, MSG_WON);
            return self.bump();
        }
        let far_enough = match self.path.last() {
            Some(last) => distance(*last, p) >= cfg.min_segment,
            None => true,
        };
        if !far_enough {
            return false;
        }
        self.path.push(p);
        self.bump()
    }

    pub fn on_release(&mut self) -> bool {
        if self.phase != Phase::Drawing || !self.started_from_start {
            return false;
        }
        self.finish(Phase::Lost, MSG_LET_GO);
        self.bump()
    }

    pub fn on_reset(&mut self) {
        self.path.clear();
        self.phase = Phase::Idle;
        self.started_from_start = false;
        self.set_status(MSG_READY);
        clog("round reset");
        self.bump();
    }

    fn finish(&mut self, phase: Phase, msg: &str) {
        clog(&format!("round over: {:?} ({} points)", phase, self.path.len()));
        self.phase = phase;
        self.set_status(msg);
    }

    fn set_status(&mut self, msg: &str) {
        self.status = msg.to_string();
    }

    fn bump(&mut self) -> bool {
        self.version = self.version.wrapping_add(1);
        true
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    Press(Point),
    Move(Point),
    Release,
    Reset,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        let changed = match action {
            Press(p) => new.on_press(p),
            Move(p) => new.on_move(p),
            Release => new.on_release(),
            Reset => {
                new.on_reset();
                true
            }
        };
        if !changed {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Obstacle;

    fn fresh() -> GameState {
        GameState::new(BoardConfig::default())
    }

    fn drawing() -> GameState {
        let mut gs = fresh();
        assert!(gs.on_press(Point::new(70.0, 200.0)));
        gs
    }

    fn reset_defaults(gs: &GameState) {
        assert_eq!(gs.phase, Phase::Idle);
        assert!(gs.path.is_empty());
        assert!(!gs.started_from_start);
        assert_eq!(gs.status, MSG_READY);
    }

    #[test]
    fn starts_idle() {
        reset_defaults(&fresh());
    }

    #[test]
    fn press_inside_a_begins_drawing() {
        let gs = drawing();
        assert_eq!(gs.phase, Phase::Drawing);
        assert_eq!(gs.path, vec![Point::new(70.0, 200.0)]);
        assert!(gs.started_from_start);
        assert_eq!(gs.status, MSG_DRAWING);
    }

    #[test]
    fn press_outside_a_only_sets_status() {
        let mut gs = fresh();
        gs.on_press(Point::new(300.0, 300.0));
        assert_eq!(gs.phase, Phase::Idle);
        assert!(gs.path.is_empty());
        assert!(!gs.started_from_start);
        assert_eq!(gs.status, MSG_MUST_START_ON_A);
    }

    #[test]
    fn press_outside_a_keeps_previous_outcome() {
        let mut gs = drawing();
        gs.on_move(Point::new(150.0, 90.0));
        let trail = gs.path.clone();
        gs.on_press(Point::new(300.0, 300.0));
        assert_eq!(gs.phase, Phase::Lost);
        assert_eq!(gs.path, trail);
        assert_eq!(gs.status, MSG_MUST_START_ON_A);
    }

    #[test]
    fn hitting_an_obstacle_loses_without_appending() {
        let mut gs = drawing();
        gs.on_move(Point::new(110.0, 200.0));
        let before = gs.path.clone();
        assert!(gs.on_move(Point::new(150.0, 90.0)));
        assert_eq!(gs.phase, Phase::Lost);
        assert_eq!(gs.status, MSG_HIT_OBSTACLE);
        assert_eq!(gs.path, before);
    }

    #[test]
    fn reaching_b_wins() {
        let mut gs = drawing();
        gs.on_move(Point::new(530.0, 200.0));
        assert_eq!(gs.phase, Phase::Won);
        assert_eq!(gs.status, MSG_WON);
    }

    #[test]
    fn leaving_the_board_loses() {
        let mut gs = drawing();
        gs.on_move(Point::new(-5.0, 100.0));
        assert_eq!(gs.phase, Phase::Lost);
        assert_eq!(gs.status, MSG_LEFT_AREA);
    }

    #[test]
    fn releasing_early_loses() {
        let mut gs = drawing();
        gs.on_move(Point::new(90.0, 200.0));
        assert!(gs.on_release());
        assert_eq!(gs.phase, Phase::Lost);
        assert_eq!(gs.status, MSG_LET_GO);
    }

    #[test]
    fn release_outside_a_drag_is_ignored() {
        let mut gs = fresh();
        assert!(!gs.on_release());
        reset_defaults(&gs);

        let mut won = drawing();
        won.on_move(Point::new(530.0, 200.0));
        let snapshot = won.clone();
        assert!(!won.on_release());
        assert_eq!(won, snapshot);
    }

    #[test]
    fn close_points_are_decimated_but_still_checked() {
        let mut gs = drawing();
        gs.on_move(Point::new(100.0, 60.0));
        let len = gs.path.len();
        // 1 unit further: dropped from the trail.
        assert!(!gs.on_move(Point::new(101.0, 60.0)));
        assert_eq!(gs.path.len(), len);
        assert_eq!(gs.phase, Phase::Drawing);

        // Under the threshold from the last kept point, but inside an obstacle: still a loss.
        let mut cfg = BoardConfig::default();
        cfg.obstacles.push(Obstacle { x: 101.0, y: 61.0, width: 10.0, height: 10.0 });
        let mut gs = GameState::new(cfg);
        gs.on_press(Point::new(70.0, 200.0));
        gs.on_move(Point::new(100.0, 60.0));
        gs.on_move(Point::new(101.0, 61.0));
        assert_eq!(gs.phase, Phase::Lost);
        assert_eq!(gs.status, MSG_HIT_OBSTACLE);
    }

    #[test]
    fn decimation_keeps_points_exactly_at_threshold() {
        let mut gs = drawing();
        assert!(gs.on_move(Point::new(73.0, 200.0)));
        assert!(!gs.on_move(Point::new(75.0, 200.0)));
        assert!(gs.on_move(Point::new(76.0, 200.0)));
        assert_eq!(
            gs.path,
            vec![Point::new(70.0, 200.0), Point::new(73.0, 200.0), Point::new(76.0, 200.0)]
        );
    }

    #[test]
    fn obstacle_beats_win_when_they_overlap() {
        let mut cfg = BoardConfig::default();
        cfg.obstacles.push(Obstacle { x: 520.0, y: 190.0, width: 20.0, height: 20.0 });
        let mut gs = GameState::new(cfg);
        gs.on_press(Point::new(70.0, 200.0));
        gs.on_move(Point::new(530.0, 200.0));
        assert_eq!(gs.phase, Phase::Lost);
        assert_eq!(gs.status, MSG_HIT_OBSTACLE);
    }

    #[test]
    fn moves_after_the_round_are_ignored() {
        for end in [Point::new(150.0, 90.0), Point::new(530.0, 200.0)] {
            let mut gs = drawing();
            gs.on_move(end);
            let snapshot = gs.clone();
            assert!(!gs.on_move(Point::new(100.0, 100.0)));
            assert!(!gs.on_move(Point::new(-50.0, 0.0)));
            assert_eq!(gs, snapshot);
        }
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut gs = fresh();
        assert!(!gs.on_move(Point::new(80.0, 200.0)));
        reset_defaults(&gs);
    }

    #[test]
    fn press_after_loss_starts_a_new_attempt() {
        let mut gs = drawing();
        gs.on_move(Point::new(-1.0, 0.0));
        assert_eq!(gs.phase, Phase::Lost);
        gs.on_press(Point::new(75.0, 205.0));
        assert_eq!(gs.phase, Phase::Drawing);
        assert_eq!(gs.path, vec![Point::new(75.0, 205.0)]);
    }

    #[test]
    fn press_after_win_is_ignored() {
        let mut gs = drawing();
        gs.on_move(Point::new(530.0, 200.0));
        let snapshot = gs.clone();
        assert!(!gs.on_press(Point::new(70.0, 200.0)));
        assert_eq!(gs, snapshot);
    }

    #[test]
    fn press_outside_a_after_win_keeps_the_win() {
        let mut gs = drawing();
        gs.on_move(Point::new(530.0, 200.0));
        let snapshot = gs.clone();
        assert!(!gs.on_press(Point::new(300.0, 300.0)));
        assert_eq!(gs, snapshot);
        assert_eq!(gs.phase, Phase::Won);
        assert_eq!(gs.status, MSG_WON);
    }

    #[test]
    fn reset_restores_defaults_from_every_phase() {
        let mut states = vec![fresh(), drawing()];
        let mut lost = drawing();
        lost.on_release();
        states.push(lost);
        let mut won = drawing();
        won.on_move(Point::new(530.0, 200.0));
        states.push(won);
        for mut gs in states {
            gs.on_reset();
            reset_defaults(&gs);
        }
    }

    #[test]
    fn reducer_reuses_state_for_noops() {
        let gs = Rc::new(fresh());
        let same = Rc::clone(&gs).reduce(GameAction::Move(Point::new(80.0, 200.0)));
        assert!(Rc::ptr_eq(&gs, &same));

        let next = Rc::clone(&gs).reduce(GameAction::Press(Point::new(70.0, 200.0)));
        assert!(!Rc::ptr_eq(&gs, &next));
        assert_eq!(next.phase, Phase::Drawing);
        assert_eq!(next.version, gs.version + 1);
    }

    #[test]
    fn reducer_walks_a_winning_round() {
        let waypoints = [
            (100.0, 300.0),
            (260.0, 300.0),
            (270.0, 180.0),
            (370.0, 180.0),
            (450.0, 190.0),
            (495.0, 190.0),
            (530.0, 200.0),
        ];
        let mut gs = Rc::new(fresh());
        gs = gs.reduce(GameAction::Press(Point::new(70.0, 200.0)));
        for (x, y) in waypoints {
            gs = gs.reduce(GameAction::Move(Point::new(x, y)));
        }
        assert_eq!(gs.phase, Phase::Won);
        assert_eq!(gs.path.len(), waypoints.len());
        let after_release = Rc::clone(&gs).reduce(GameAction::Release);
        assert!(Rc::ptr_eq(&gs, &after_release));
        let reset = gs.reduce(GameAction::Reset);
        reset_defaults(&reset);
    }
}
