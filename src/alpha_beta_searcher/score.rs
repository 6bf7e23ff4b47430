use std::fmt;

/// A node value or search bound. The infinite sentinels sort below and above
/// every finite value, so comparisons never need floating point.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Score {
    NegInfinity,
    Finite(i32),
    PosInfinity,
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score::Finite(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::NegInfinity => write!(f, "-Infinity"),
            Score::Finite(value) => write!(f, "{}", value),
            Score::PosInfinity => write!(f, "Infinity"),
        }
    }
}

/// The (alpha, beta) bounds in force at a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Window {
    pub alpha: Score,
    pub beta: Score,
}

impl Window {
    pub fn new(alpha: Score, beta: Score) -> Self {
        Self { alpha, beta }
    }

    pub fn full() -> Self {
        Self::new(Score::NegInfinity, Score::PosInfinity)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::full()
    }
}
