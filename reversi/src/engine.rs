use engine::engine::{GameEngine, Step};

use super::action::Action;
use super::constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use super::game_state::{GameState, StoneCounts, Undo};
use super::value::Value;

pub struct Engine {
    width: usize,
    height: usize,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Value = Value;
    type Info = StoneCounts;
    type Undo = Undo;

    fn initial_state(&self) -> Self::State {
        GameState::with_size(self.width, self.height)
    }

    fn action_space(&self, game_state: &Self::State) -> usize {
        game_state.board().cell_count()
    }

    fn action_index(&self, action: &Self::Action) -> usize {
        action.index()
    }

    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> (Step<Self::Value, Self::Info>, Self::Undo) {
        game_state.apply(*action)
    }

    fn undo(&self, game_state: &mut Self::State, undo: Self::Undo) {
        game_state.undo(undo)
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }

    fn legal_actions(&self, game_state: &Self::State, player: usize) -> Vec<Self::Action> {
        game_state.legal_actions(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::PositionEvaluator;
    use assert_approx_eq::assert_approx_eq;
    use common::create_rng;
    use negamax::{Negamax, NegamaxOptions, UNSCORED};

    fn create_agent<'a>(
        game_engine: &'a Engine,
        evaluator: &'a PositionEvaluator,
        max_depth: usize,
        seed: u64,
    ) -> Negamax<'a, Engine, PositionEvaluator> {
        let options = NegamaxOptions::new(max_depth, 1 << 12, None, None);
        Negamax::new(game_engine, evaluator, options, create_rng(Some(seed)))
    }

    #[test]
    fn test_engine_exposes_the_states_action_space() {
        let game_engine = Engine::with_size(6, 4);
        let game_state = game_engine.initial_state();

        assert_eq!(game_engine.action_space(&game_state), 24);
        assert_eq!(game_engine.player_to_move(&game_state), 0);
        assert_eq!(game_engine.action_index(&Action::new(17)), 17);
    }

    #[test]
    fn test_apply_and_undo_round_trip_through_the_trait() {
        let game_engine = Engine::new();
        let mut game_state = game_engine.initial_state();
        let before = game_state.clone();

        let action = game_engine.legal_actions(&game_state, 0)[0];
        let (step, undo) = game_engine.apply(&mut game_state, &action);
        assert!(!step.terminal);

        game_engine.undo(&mut game_state, undo);
        assert_eq!(game_state, before);
    }

    #[test]
    fn test_single_ply_opening_scores_match_the_table() {
        let game_engine = Engine::new();
        let evaluator = PositionEvaluator::new();
        let mut agent = create_agent(&game_engine, &evaluator, 0, 0);

        let action = agent.choose_action(&game_engine.initial_state()).unwrap();

        // Every opening reply lands on a -1 cell and flips one -1 stone
        // onto another -1 cell, so all four score -3.
        let scores = agent.root_scores().unwrap();
        for index in [20, 29, 34, 43] {
            assert_approx_eq!(scores[index], -3.0);
        }
        assert!(scores
            .iter()
            .enumerate()
            .filter(|(index, _)| ![20, 29, 34, 43].contains(index))
            .all(|(_, &score)| score == UNSCORED));
        assert!([20, 29, 34, 43].contains(&action.index()));
    }

    #[test]
    fn test_deeper_search_still_returns_a_legal_opening_move() {
        let game_engine = Engine::new();
        let evaluator = PositionEvaluator::new();
        let mut agent = create_agent(&game_engine, &evaluator, 2, 7);

        let game_state = game_engine.initial_state();
        let action = agent.choose_action(&game_state).unwrap();

        assert!(game_state.legal_actions(0).contains(&action));
        assert!(agent.visits() > 4);
    }

    #[test]
    fn test_search_does_not_disturb_the_callers_state() {
        let game_engine = Engine::new();
        let evaluator = PositionEvaluator::new();
        let mut agent = create_agent(&game_engine, &evaluator, 1, 3);

        let game_state = game_engine.initial_state();
        agent.choose_action(&game_state).unwrap();

        assert_eq!(game_state, game_engine.initial_state());
    }

    #[test]
    fn test_agent_takes_a_winning_terminal_move() {
        // Player 0 at (0, 0) captures the run and ends the game holding
        // every stone on a tiny board.
        let cells = vec![
            0, -1, 1, 0, //
            0, 0, 0, 0, //
        ];
        let game_state = GameState::from_cells(4, 2, cells, 0);
        let game_engine = Engine::with_size(4, 2);
        let evaluator = PositionEvaluator::new();
        let mut agent = create_agent(&game_engine, &evaluator, 2, 11);

        let action = agent.choose_action(&game_state).unwrap();

        assert_eq!(action, Action::new(0));
        assert_approx_eq!(agent.root_scores().unwrap()[0], 500.0);
    }
}
