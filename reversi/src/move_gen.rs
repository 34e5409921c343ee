use super::board::{stone, Board};
use super::constants::EMPTY_CELL;
use super::direction::{Direction, DirectionSet};

/// For every cell, the bearings along which `player` outflanks: one or
/// more contiguous opponent stones followed by a stone of the player's
/// own color. Occupied cells get the empty set; a cell is a legal
/// placement iff its set is non-empty.
pub fn movable_directions(board: &Board, player: usize) -> Vec<DirectionSet> {
    let own = stone(player);
    let opponent = -own;

    let mut movable = vec![DirectionSet::EMPTY; board.cell_count()];

    for index in 0..board.cell_count() {
        if board.cell_at(index) != EMPTY_CELL {
            continue;
        }

        let (x, y) = board.coords_of(index);
        let mut directions = DirectionSet::EMPTY;

        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let (mut tx, mut ty) = (x + dx, y + dy);

            if board.cell(tx, ty) != opponent {
                continue;
            }

            while board.cell(tx, ty) == opponent {
                tx += dx;
                ty += dy;
            }

            if board.cell(tx, ty) == own {
                directions.insert(direction);
            }
        }

        movable[index] = directions;
    }

    movable
}
