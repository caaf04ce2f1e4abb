use bitflags::bitflags;
use glam::IVec2;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter};

/// The four cardinal directions on the dungeon plane.
///
/// North is a positive change along the Y axis and east a positive change along the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumCount)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The four cardinal directions, clockwise from north.
    pub const DIRECTIONS: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// The order in which a freshly placed cell offers its neighbours to the layout frontier.
    pub const GROWTH_ORDER: [Direction; 4] = [Direction::East, Direction::West, Direction::North, Direction::South];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns the unit offset of this direction.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the direction whose unit offset is exactly `offset`, if any.
    ///
    /// Diagonal, zero and longer offsets have no direction.
    pub fn from_offset(offset: IVec2) -> Option<Direction> {
        match (offset.x, offset.y) {
            (0, 1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, -1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// Returns the exit flag corresponding to this direction.
    pub const fn as_exit(self) -> Exits {
        match self {
            Direction::North => Exits::NORTH,
            Direction::East => Exits::EAST,
            Direction::South => Exits::SOUTH,
            Direction::West => Exits::WEST,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => -IVec2::Y,
            Direction::West => -IVec2::X,
        }
    }
}

bitflags! {
    /// The passages leaving a tile, one flag per cardinal direction.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Exits: u8 {
        const NORTH = 1 << 0;
        const EAST = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST = 1 << 3;
    }
}

impl Exits {
    /// Returns whether a passage leaves in the given direction.
    pub fn has(self, direction: Direction) -> bool {
        self.contains(direction.as_exit())
    }

    /// Iterates over the directions that have a passage, clockwise from north.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::iter().filter(move |&dir| self.has(dir))
    }

    /// The number of passages leaving the tile.
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }
}
