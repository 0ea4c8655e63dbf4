use std::fmt;

/// Stable identifier for a combatant.
///
/// Ids are never reused within a [`World`](crate::World), so an effect that
/// names a removed enemy simply finds nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable identifier for an item, on the floor or in a pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `y` grows downward, so [`Direction::Up`] is `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// `(other.x - self.x, other.y - self.y)`.
    #[inline]
    pub const fn delta_to(self, other: Position) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn chebyshev(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// True for the eight surrounding tiles, false for the tile itself.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev(other) == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Eight-way facing, plus `None` for "not chosen yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    UpRight,
    DownRight,
    UpLeft,
    DownLeft,
}

impl Direction {
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::DownLeft,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpRight => (1, -1),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (-1, 1),
        }
    }

    /// Direction of the sign of each component; `(0, 0)` maps to `None`.
    pub const fn from_delta(dx: i32, dy: i32) -> Self {
        match (dx.signum(), dy.signum()) {
            (0, -1) => Direction::Up,
            (0, 1) => Direction::Down,
            (-1, 0) => Direction::Left,
            (1, 0) => Direction::Right,
            (1, -1) => Direction::UpRight,
            (1, 1) => Direction::DownRight,
            (-1, -1) => Direction::UpLeft,
            (-1, 1) => Direction::DownLeft,
            _ => Direction::None,
        }
    }

    /// Facing from `from` towards `to`.
    pub fn towards(from: Position, to: Position) -> Self {
        let (dx, dy) = from.delta_to(to);
        Self::from_delta(dx, dy)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    pub const fn opposite(self) -> Self {
        let (dx, dy) = self.delta();
        Self::from_delta(-dx, -dy)
    }
}

/// Health meter clamped to `[0, maximum]`.
///
/// Fields are private so every mutation goes through the clamping helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    current: u32,
    maximum: u32,
}

impl Health {
    /// Full meter.
    pub const fn new(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn with_current(mut self, current: u32) -> Self {
        self.current = current.min(self.maximum);
        self
    }

    #[inline]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    #[inline]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`; returns what was actually removed.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.current);
        self.current -= applied;
        applied
    }

    /// Restores up to `amount` without exceeding the maximum; returns what was
    /// actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.maximum - self.current);
        self.current += restored;
        restored
    }

    /// Raises the ceiling without touching current health.
    pub fn raise_maximum(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
    }
}
