use std::fmt::{self, Display, Formatter};

use super::constants::{FIRST_PLAYER_STONE, SECOND_PLAYER_STONE};
use super::game_state::GameState;

/// Bordered ASCII grid: `o` and `x` stones (`*` marks the last move),
/// the index of each cell the player to move could legally pick, stone
/// counts and the next player beneath.
impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.board();
        let last_action = self.last_action().map(|action| action.index());
        let legal: Vec<usize> = self
            .legal_actions(self.player_to_move())
            .iter()
            .map(|action| action.index())
            .collect();

        writeln!(f, "{}", "-".repeat(1 + board.width() * 3))?;
        for y in 0..board.height() as i32 {
            write!(f, "|")?;
            for x in 0..board.width() as i32 {
                let index = board.index_of(x, y);
                let marker = if last_action == Some(index) { '*' } else { ' ' };
                match board.cell_at(index) {
                    FIRST_PLAYER_STONE => write!(f, "{}o|", marker)?,
                    SECOND_PLAYER_STONE => write!(f, "{}x|", marker)?,
                    _ if legal.contains(&index) => write!(f, "{:2}|", index)?,
                    _ => write!(f, "  |")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(1 + board.width() * 3))?;

        let counts = self.stone_counts();
        writeln!(f, "O: {}, X: {}", counts.0[0], counts.0[1])?;
        let next = if self.player_to_move() == 0 { "O" } else { "X" };
        write!(f, "next player: {}", next)
    }
}
