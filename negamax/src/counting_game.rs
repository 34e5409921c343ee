//! Minimal game for exercising the search: players race a shared counter
//! to their end of [0, 10]. Player 0 wins at 10, player 1 wins at 0, and
//! a move landing the counter on a multiple of 3 keeps the turn.

use common::transposition::TranspositionKey;
use engine::engine::{GameEngine, Step};
use engine::game_state::GameState;

use super::evaluator::Evaluator;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CountingGameState {
    pub player_index: usize,
    pub count: i32,
}

impl CountingGameState {
    pub fn with_position(player_index: usize, count: i32) -> Self {
        Self {
            player_index,
            count,
        }
    }

    fn terminal_value(&self) -> Option<Value> {
        if self.count >= 10 {
            Some(Value([1.0, -1.0]))
        } else if self.count <= 0 {
            Some(Value([-1.0, 1.0]))
        } else {
            None
        }
    }
}

impl GameState for CountingGameState {
    fn initial() -> Self {
        Self {
            player_index: 0,
            count: 5,
        }
    }
}

impl TranspositionKey for CountingGameState {
    type Key = (usize, i32);

    fn transposition_key(&self) -> Self::Key {
        (self.player_index, self.count)
    }
}

#[derive(Clone, Debug)]
pub struct Value(pub [f32; 2]);

impl engine::value::Value for Value {
    fn get_value_for_player(&self, player: usize) -> f32 {
        self.0[player]
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum CountingAction {
    Increment,
    Decrement,
}

pub struct CountingUndo {
    player_index: usize,
    count: i32,
}

pub struct CountingGameEngine {}

impl CountingGameEngine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for CountingGameEngine {
    type Action = CountingAction;
    type State = CountingGameState;
    type Value = Value;
    type Info = ();
    type Undo = CountingUndo;

    fn initial_state(&self) -> Self::State {
        GameState::initial()
    }

    fn action_space(&self, _game_state: &Self::State) -> usize {
        2
    }

    fn action_index(&self, action: &Self::Action) -> usize {
        match action {
            CountingAction::Increment => 0,
            CountingAction::Decrement => 1,
        }
    }

    fn apply(
        &self,
        game_state: &mut Self::State,
        action: &Self::Action,
    ) -> (Step<Value, ()>, CountingUndo) {
        let undo = CountingUndo {
            player_index: game_state.player_index,
            count: game_state.count,
        };

        game_state.count += match action {
            CountingAction::Increment => 1,
            CountingAction::Decrement => -1,
        };

        if let Some(value) = game_state.terminal_value() {
            let step = Step {
                value,
                terminal: true,
                info: Some(()),
            };
            return (step, undo);
        }

        if game_state.count % 3 != 0 {
            game_state.player_index ^= 1;
        }

        let step = Step {
            value: Value([0.0, 0.0]),
            terminal: false,
            info: None,
        };
        (step, undo)
    }

    fn undo(&self, game_state: &mut Self::State, undo: CountingUndo) {
        game_state.player_index = undo.player_index;
        game_state.count = undo.count;
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_index
    }

    fn legal_actions(&self, _game_state: &Self::State, _player: usize) -> Vec<Self::Action> {
        vec![CountingAction::Increment, CountingAction::Decrement]
    }
}

pub struct CountingEvaluator {}

impl CountingEvaluator {
    pub fn new() -> Self {
        Self {}
    }
}

impl Evaluator for CountingEvaluator {
    type State = CountingGameState;

    fn evaluate(&self, game_state: &Self::State) -> f32 {
        (game_state.count - 5) as f32
    }
}
