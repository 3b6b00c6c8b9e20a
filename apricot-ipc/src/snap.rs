use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single directional key press, already stripped of its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// The half-screen target a lone press of this direction produces.
    pub fn half(self) -> SnapTarget {
        match self {
            Direction::Left => SnapTarget::Left,
            Direction::Right => SnapTarget::Right,
            Direction::Up => SnapTarget::Top,
            Direction::Down => SnapTarget::Bottom,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl From<HorizontalDirection> for Direction {
    fn from(h: HorizontalDirection) -> Self {
        match h {
            HorizontalDirection::Left => Direction::Left,
            HorizontalDirection::Right => Direction::Right,
        }
    }
}

impl From<VerticalDirection> for Direction {
    fn from(v: VerticalDirection) -> Self {
        match v {
            VerticalDirection::Up => Direction::Up,
            VerticalDirection::Down => Direction::Down,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(format!(
                "Unknown direction: {} (use left, right, up, down)",
                s
            )),
        }
    }
}

/// A named placement region for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapTarget {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Maximize,
    Center70,
}

impl SnapTarget {
    pub const ALL: [SnapTarget; 10] = [
        SnapTarget::Left,
        SnapTarget::Right,
        SnapTarget::Top,
        SnapTarget::Bottom,
        SnapTarget::TopLeft,
        SnapTarget::TopRight,
        SnapTarget::BottomLeft,
        SnapTarget::BottomRight,
        SnapTarget::Maximize,
        SnapTarget::Center70,
    ];

    /// The corner formed by one horizontal and one vertical direction.
    /// Argument order carries no meaning: only the pair matters.
    pub fn corner(horizontal: HorizontalDirection, vertical: VerticalDirection) -> Self {
        match (horizontal, vertical) {
            (HorizontalDirection::Left, VerticalDirection::Up) => SnapTarget::TopLeft,
            (HorizontalDirection::Right, VerticalDirection::Up) => SnapTarget::TopRight,
            (HorizontalDirection::Left, VerticalDirection::Down) => SnapTarget::BottomLeft,
            (HorizontalDirection::Right, VerticalDirection::Down) => SnapTarget::BottomRight,
        }
    }

    pub fn is_half(self) -> bool {
        matches!(
            self,
            SnapTarget::Left | SnapTarget::Right | SnapTarget::Top | SnapTarget::Bottom
        )
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            SnapTarget::TopLeft
                | SnapTarget::TopRight
                | SnapTarget::BottomLeft
                | SnapTarget::BottomRight
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SnapTarget::Left => "left",
            SnapTarget::Right => "right",
            SnapTarget::Top => "top",
            SnapTarget::Bottom => "bottom",
            SnapTarget::TopLeft => "top-left",
            SnapTarget::TopRight => "top-right",
            SnapTarget::BottomLeft => "bottom-left",
            SnapTarget::BottomRight => "bottom-right",
            SnapTarget::Maximize => "maximize",
            SnapTarget::Center70 => "center70",
        }
    }
}

impl fmt::Display for SnapTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnapTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "left" => Ok(SnapTarget::Left),
            "right" => Ok(SnapTarget::Right),
            "top" | "up" => Ok(SnapTarget::Top),
            "bottom" | "down" => Ok(SnapTarget::Bottom),
            "top-left" => Ok(SnapTarget::TopLeft),
            "top-right" => Ok(SnapTarget::TopRight),
            "bottom-left" => Ok(SnapTarget::BottomLeft),
            "bottom-right" => Ok(SnapTarget::BottomRight),
            "maximize" | "max" => Ok(SnapTarget::Maximize),
            "center70" | "center" => Ok(SnapTarget::Center70),
            _ => Err(format!(
                "Unknown snap target: {} (use left, right, top, bottom, top-left, top-right, \
                 bottom-left, bottom-right, maximize, center70)",
                s
            )),
        }
    }
}
