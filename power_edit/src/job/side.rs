use std::fmt::Display;

/// Which of the two documents of a job something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Edit,
    Source,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Edit, Side::Source];
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Edit => write!(f, "edited"),
            Side::Source => write!(f, "source"),
        }
    }
}
