/// The eight principal compass bearings. Rows grow downward, so North
/// steps toward row zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of bearings packed into one byte, one bit per bearing.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_set_starts_empty() {
        let directions = DirectionSet::EMPTY;

        assert!(directions.is_empty());
        assert_eq!(directions.len(), 0);
        assert_eq!(directions.iter().count(), 0);
    }

    #[test]
    fn test_direction_set_insert_and_contains() {
        let mut directions = DirectionSet::EMPTY;

        directions.insert(Direction::East);
        directions.insert(Direction::NorthWest);

        assert!(directions.contains(Direction::East));
        assert!(directions.contains(Direction::NorthWest));
        assert!(!directions.contains(Direction::South));
        assert_eq!(directions.len(), 2);
    }

    #[test]
    fn test_direction_set_iterates_inserted_bearings() {
        let mut directions = DirectionSet::EMPTY;

        directions.insert(Direction::South);
        directions.insert(Direction::North);

        let bearings: Vec<Direction> = directions.iter().collect();
        assert_eq!(bearings, vec![Direction::North, Direction::South]);
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();

            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
        }
    }
}
