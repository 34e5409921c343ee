use std::cmp::Ordering;
use std::mem;

use serde::{Deserialize, Serialize};

use common::transposition::TranspositionKey;
use engine::engine::Step;

use super::action::Action;
use super::board::{stone, Board};
use super::constants::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, EMPTY_CELL, FIRST_PLAYER_STONE,
    SECOND_PLAYER_STONE,
};
use super::direction::DirectionSet;
use super::move_gen::movable_directions;
use super::value::Value;

/// Stones on the board per player, in player order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneCounts(pub [usize; 2]);

/// Token reversing one `apply`. A forfeited selection records no
/// placement since the board was not touched.
#[derive(Debug)]
pub struct Undo {
    prev_player_index: usize,
    prev_last_action: Option<Action>,
    placement: Option<Placement>,
}

#[derive(Debug)]
struct Placement {
    cell: usize,
    flipped: Vec<usize>,
    prev_movable: [Vec<DirectionSet>; 2],
}

/// Opaque copy of a full game state for save and restore.
#[derive(Clone, Debug)]
pub struct Snapshot(GameState);

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    player_index: usize,
    movable: [Vec<DirectionSet>; 2],
    last_action: Option<Action>,
    outcome: Option<Value>,
}

impl GameState {
    pub fn with_size(width: usize, height: usize) -> Self {
        let mut game_state = Self {
            board: Board::new(width, height),
            player_index: 0,
            movable: [Vec::new(), Vec::new()],
            last_action: None,
            outcome: None,
        };
        game_state.reset();
        game_state
    }

    /// Arbitrary position with the movable maps recomputed from the
    /// cells. `cells` is row-major, `width * y + x`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<i8>, player_index: usize) -> Self {
        let mut game_state = Self {
            board: Board::from_cells(width, height, cells),
            player_index,
            movable: [Vec::new(), Vec::new()],
            last_action: None,
            outcome: None,
        };
        game_state.refresh_movable();
        game_state
    }

    /// Clears the board to the four canonical center stones and gives
    /// player 0 the move.
    pub fn reset(&mut self) {
        let (width, height) = (self.board.width(), self.board.height());
        self.board = Board::new(width, height);

        let center_x = (width / 2) as i32 - 1;
        let center_y = (height / 2) as i32 - 1;
        self.board.set(center_x, center_y, FIRST_PLAYER_STONE);
        self.board.set(center_x + 1, center_y + 1, FIRST_PLAYER_STONE);
        self.board.set(center_x + 1, center_y, SECOND_PLAYER_STONE);
        self.board.set(center_x, center_y + 1, SECOND_PLAYER_STONE);

        self.player_index = 0;
        self.last_action = None;
        self.outcome = None;
        self.refresh_movable();
    }

    /// Applies `action` for the player to move.
    ///
    /// Selecting a cell with no outflanking bearing forfeits: the episode
    /// ends at once with a `-1` reward for the offender alone and the
    /// board untouched. Otherwise the stone is placed and every
    /// outflanked run flips. The turn then passes to the opponent unless
    /// the opponent has no reply, in which case the mover goes again;
    /// when neither side can move the game ends, scored by stone
    /// majority.
    ///
    /// Panics if the game is already over or `action` is out of range.
    pub fn apply(&mut self, action: Action) -> (Step<Value, StoneCounts>, Undo) {
        assert!(self.outcome.is_none(), "apply called on a finished game");

        let mover = self.player_index;
        let prev_last_action = self.last_action.replace(action);

        let directions = self.movable[mover][action.index()];
        if directions.is_empty() {
            let value = if mover == 0 {
                Value([-1.0, 0.0])
            } else {
                Value([0.0, -1.0])
            };
            self.outcome = Some(value.clone());

            let step = Step {
                value,
                terminal: true,
                info: None,
            };
            let undo = Undo {
                prev_player_index: mover,
                prev_last_action,
                placement: None,
            };
            return (step, undo);
        }

        let own = stone(mover);
        let (x, y) = self.board.coords_of(action.index());
        self.board.set(x, y, own);

        let mut flipped = Vec::new();
        for direction in directions.iter() {
            let (dx, dy) = direction.delta();
            let (mut tx, mut ty) = (x + dx, y + dy);

            while self.board.cell(tx, ty) != own {
                let index = self.board.index_of(tx, ty);
                self.board.set_at(index, own);
                flipped.push(index);
                tx += dx;
                ty += dy;
            }
        }

        let prev_movable = mem::take(&mut self.movable);
        self.refresh_movable();

        let opponent = mover ^ 1;
        let step = if !self.has_legal_action(opponent) {
            if !self.has_legal_action(mover) {
                let counts = self.stone_counts();
                let value = match counts.0[0].cmp(&counts.0[1]) {
                    Ordering::Greater => Value([1.0, -1.0]),
                    Ordering::Less => Value([-1.0, 1.0]),
                    Ordering::Equal => Value([0.0, 0.0]),
                };
                self.outcome = Some(value.clone());

                Step {
                    value,
                    terminal: true,
                    info: Some(counts),
                }
            } else {
                // Opponent is stuck; the mover goes again.
                Step {
                    value: Value([0.0, 0.0]),
                    terminal: false,
                    info: None,
                }
            }
        } else {
            self.player_index = opponent;

            Step {
                value: Value([0.0, 0.0]),
                terminal: false,
                info: None,
            }
        };

        let undo = Undo {
            prev_player_index: mover,
            prev_last_action,
            placement: Some(Placement {
                cell: action.index(),
                flipped,
                prev_movable,
            }),
        };

        (step, undo)
    }

    /// Exactly reverses the `apply` that produced `undo`. Tokens must be
    /// consumed in reverse order of issue.
    pub fn undo(&mut self, undo: Undo) {
        if let Some(placement) = undo.placement {
            let opponent_stone = -stone(undo.prev_player_index);

            self.board.set_at(placement.cell, EMPTY_CELL);
            for index in placement.flipped {
                self.board.set_at(index, opponent_stone);
            }

            self.movable = placement.prev_movable;
        }

        self.player_index = undo.prev_player_index;
        self.last_action = undo.prev_last_action;
        self.outcome = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.clone())
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        *self = snapshot.0.clone();
    }

    pub fn player_to_move(&self) -> usize {
        self.player_index
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[i8] {
        self.board.cells()
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Final rewards once the game is over.
    pub fn outcome(&self) -> Option<&Value> {
        self.outcome.as_ref()
    }

    pub fn stone_counts(&self) -> StoneCounts {
        StoneCounts([
            self.board.count(FIRST_PLAYER_STONE),
            self.board.count(SECOND_PLAYER_STONE),
        ])
    }

    pub fn legal_actions(&self, player: usize) -> Vec<Action> {
        self.movable[player]
            .iter()
            .enumerate()
            .filter(|(_, directions)| !directions.is_empty())
            .map(|(index, _)| Action::new(index))
            .collect()
    }

    pub fn illegal_actions(&self, player: usize) -> Vec<Action> {
        self.movable[player]
            .iter()
            .enumerate()
            .filter(|(_, directions)| directions.is_empty())
            .map(|(index, _)| Action::new(index))
            .collect()
    }

    /// Bearings along which `player` would capture by playing `action`.
    pub fn legal_directions(&self, player: usize, action: Action) -> DirectionSet {
        self.movable[player][action.index()]
    }

    pub fn action_at(&self, x: i32, y: i32) -> Action {
        Action::new(self.board.index_of(x, y))
    }

    fn has_legal_action(&self, player: usize) -> bool {
        self.movable[player]
            .iter()
            .any(|directions| !directions.is_empty())
    }

    fn refresh_movable(&mut self) {
        self.movable = [
            movable_directions(&self.board, 0),
            movable_directions(&self.board, 1),
        ];
    }
}

impl engine::game_state::GameState for GameState {
    fn initial() -> Self {
        Self::with_size(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

/// Exact position identity for caching: dimensions, cells, and mover.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PositionKey {
    width: u16,
    height: u16,
    player_index: u8,
    cells: Box<[i8]>,
}

impl TranspositionKey for GameState {
    type Key = PositionKey;

    fn transposition_key(&self) -> PositionKey {
        PositionKey {
            width: self.board.width() as u16,
            height: self.board.height() as u16,
            player_index: self.player_index as u8,
            cells: self.board.cells().into(),
        }
    }
}
