pub const DEFAULT_BOARD_WIDTH: usize = 8;
pub const DEFAULT_BOARD_HEIGHT: usize = 8;

pub const EMPTY_CELL: i8 = 0;
pub const FIRST_PLAYER_STONE: i8 = 1;
pub const SECOND_PLAYER_STONE: i8 = -1;

/// Returned by boundary queries for coordinates off the board. Never
/// stored in a cell; any value distinct from the three cell states works.
pub const OFF_BOARD: i8 = 9;
