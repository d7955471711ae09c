use std::{fmt, str::FromStr};

use crate::error::ParseRepresentationError;

/// Storage strategy of a [`Graph`](crate::Graph).
///
/// The representation is chosen when a graph is created and can only be
/// changed by converting into a new graph.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Representation {
    /// Dense `n x n` table of weights.  Constant-time weight lookup and
    /// linear-time predecessor queries.
    Matrix,
    /// Per-vertex sequences of outgoing edges, most recently added first.
    List,
}

impl Representation {
    pub const ALL: [Representation; 2] = [Representation::Matrix, Representation::List];

    /// Returns the representation that is not `self`.
    pub fn other(self) -> Self {
        match self {
            Representation::Matrix => Representation::List,
            Representation::List => Representation::Matrix,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Matrix => f.write_str("matrix"),
            Representation::List => f.write_str("list"),
        }
    }
}

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "matrix" => Ok(Representation::Matrix),
            "list" => Ok(Representation::List),
            _ => Err(ParseRepresentationError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Matrix".parse(), Ok(Representation::Matrix));
        assert_eq!("LIST".parse(), Ok(Representation::List));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "tree".parse::<Representation>(),
            Err(ParseRepresentationError("tree".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for rep in Representation::ALL {
            assert_eq!(rep.to_string().parse(), Ok(rep));
        }
    }

    #[test]
    fn test_other() {
        assert_eq!(Representation::Matrix.other(), Representation::List);
        assert_eq!(Representation::List.other(), Representation::Matrix);
    }
}
