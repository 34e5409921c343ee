use negamax::Evaluator;

use super::game_state::GameState;

/// Positional weights for an 8x8 board, row-major. Corners dominate,
/// the cells touching a corner are liabilities.
#[rustfmt::skip]
const EVALS_8X8: [f32; 64] = [
     30.0, -12.0,  0.0, -1.0, -1.0,  0.0, -12.0,  30.0,
    -12.0, -15.0, -3.0, -3.0, -3.0, -3.0, -15.0, -12.0,
      0.0,  -3.0,  0.0, -1.0, -1.0,  0.0,  -3.0,   0.0,
     -1.0,  -3.0, -1.0, -1.0, -1.0, -1.0,  -3.0,  -1.0,
     -1.0,  -3.0, -1.0, -1.0, -1.0, -1.0,  -3.0,  -1.0,
      0.0,  -3.0,  0.0, -1.0, -1.0,  0.0,  -3.0,   0.0,
    -12.0, -15.0, -3.0, -3.0, -3.0, -3.0, -15.0, -12.0,
     30.0, -12.0,  0.0, -1.0, -1.0,  0.0, -12.0,  30.0,
];

#[rustfmt::skip]
const EVALS_6X6: [f32; 36] = [
     30.0, -12.0,  0.0,  0.0, -12.0,  30.0,
    -12.0, -15.0, -3.0, -3.0, -15.0, -12.0,
      0.0,  -3.0,  0.0,  0.0,  -3.0,   0.0,
      0.0,  -3.0,  0.0,  0.0,  -3.0,   0.0,
    -12.0, -15.0, -3.0, -3.0, -15.0, -12.0,
     30.0, -12.0,  0.0,  0.0, -12.0,  30.0,
];

/// Dot product of the positional weight table with the cell vector,
/// positive when the stones favor player 0. Board sizes without a table
/// evaluate to a flat `0`.
#[derive(Default)]
pub struct PositionEvaluator {}

impl PositionEvaluator {
    pub fn new() -> Self {
        Self {}
    }
}

impl Evaluator for PositionEvaluator {
    type State = GameState;

    fn evaluate(&self, game_state: &Self::State) -> f32 {
        let board = game_state.board();

        let weights: &[f32] = match (board.width(), board.height()) {
            (8, 8) => &EVALS_8X8,
            (6, 6) => &EVALS_6X6,
            _ => return 0.0,
        };

        weights
            .iter()
            .zip(board.cells())
            .map(|(weight, &cell)| weight * cell as f32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIRST_PLAYER_STONE;
    use assert_approx_eq::assert_approx_eq;
    use engine::game_state::GameState as GameStateTrait;

    #[test]
    fn test_opening_position_evaluates_to_zero() {
        let game_state = GameState::initial();

        assert_approx_eq!(PositionEvaluator::new().evaluate(&game_state), 0.0);
    }

    #[test]
    fn test_corners_are_worth_thirty() {
        let mut cells = vec![0; 64];
        cells[0] = FIRST_PLAYER_STONE;
        let game_state = GameState::from_cells(8, 8, cells, 0);

        assert_approx_eq!(PositionEvaluator::new().evaluate(&game_state), 30.0);
    }

    #[test]
    fn test_opposing_stones_pull_the_score_negative() {
        let mut cells = vec![0; 36];
        cells[0] = -1;
        cells[7] = 1;
        let game_state = GameState::from_cells(6, 6, cells, 0);

        // Opponent on the corner, own stone on the -15 cell beside it.
        assert_approx_eq!(PositionEvaluator::new().evaluate(&game_state), -45.0);
    }

    #[test]
    fn test_unsupported_sizes_evaluate_to_zero() {
        let game_state = GameState::with_size(4, 4);

        assert_approx_eq!(PositionEvaluator::new().evaluate(&game_state), 0.0);

        let full = GameState::from_cells(8, 4, vec![1; 32], 0);
        assert_approx_eq!(PositionEvaluator::new().evaluate(&full), 0.0);
    }

    #[test]
    fn test_tables_match_the_boards_row_major_order() {
        let mut cells = vec![0; 64];
        let game_state = GameState::from_cells(8, 8, cells.clone(), 0);
        let index = game_state.board().index_of(6, 1);
        cells[index] = FIRST_PLAYER_STONE;

        let game_state = GameState::from_cells(8, 8, cells, 0);

        assert_approx_eq!(PositionEvaluator::new().evaluate(&game_state), -15.0);
    }
}
