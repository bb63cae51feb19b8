use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the eight resize handles around a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::E,
        ResizeHandle::W,
        ResizeHandle::NE,
        ResizeHandle::NW,
        ResizeHandle::SE,
        ResizeHandle::SW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeHandle::N => "n",
            ResizeHandle::S => "s",
            ResizeHandle::E => "e",
            ResizeHandle::W => "w",
            ResizeHandle::NE => "ne",
            ResizeHandle::NW => "nw",
            ResizeHandle::SE => "se",
            ResizeHandle::SW => "sw",
        }
    }

    /// Moves the left edge (and so the origin)
    pub fn affects_left(&self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }

    pub fn affects_right(&self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    /// Moves the top edge (and so the origin)
    pub fn affects_top(&self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    pub fn affects_bottom(&self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }

    pub fn affects_width(&self) -> bool {
        self.affects_left() || self.affects_right()
    }

    pub fn affects_height(&self) -> bool {
        self.affects_top() || self.affects_bottom()
    }

    pub fn is_corner(&self) -> bool {
        self.affects_width() && self.affects_height()
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ResizeHandle::ALL
            .into_iter()
            .find(|h| h.as_str() == lower)
            .ok_or_else(|| format!("unknown resize handle '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        assert!(ResizeHandle::NW.affects_left());
        assert!(ResizeHandle::NW.affects_top());
        assert!(!ResizeHandle::NW.affects_right());
        assert!(ResizeHandle::S.affects_bottom());
        assert!(!ResizeHandle::S.affects_width());
    }

    #[test]
    fn test_every_handle_moves_exactly_its_edges() {
        for handle in ResizeHandle::ALL {
            assert!(!(handle.affects_left() && handle.affects_right()));
            assert!(!(handle.affects_top() && handle.affects_bottom()));
            assert_eq!(handle.is_corner(), handle.as_str().len() == 2);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("SE".parse::<ResizeHandle>(), Ok(ResizeHandle::SE));
        assert_eq!("w".parse::<ResizeHandle>(), Ok(ResizeHandle::W));
        assert!("x".parse::<ResizeHandle>().is_err());
    }
}
