use core::ops::Not;

/// A logic level read from a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Self::High
    }

    pub fn is_low(self) -> bool {
        self == Self::Low
    }
}

impl From<bool> for Level {
    /// Converts the result of `InputPin::is_high` into a level.
    fn from(is_high: bool) -> Self {
        if is_high {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl Not for Level {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

/// A transition between two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// High to low. With a pull-up and a switch to ground, this is a press.
    Falling,

    /// Low to high.
    Rising,
}

impl Edge {
    /// The level the signal leaves.
    pub fn before(self) -> Level {
        !self.after()
    }

    /// The level the signal settles on.
    pub fn after(self) -> Level {
        match self {
            Self::Falling => Level::Low,
            Self::Rising => Level::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse() {
        assert_eq!(!Level::High, Level::Low);
        assert_eq!(!Level::Low, Level::High);
        assert!(Level::from(true).is_high());
        assert!(Level::from(false).is_low());
    }

    #[test]
    fn edge_endpoints() {
        assert_eq!(Edge::Falling.before(), Level::High);
        assert_eq!(Edge::Falling.after(), Level::Low);
        assert_eq!(Edge::Rising.before(), Level::Low);
        assert_eq!(Edge::Rising.after(), Level::High);
    }
}
