// SPDX-License-Identifier: MPL-2.0
//! Geometry of a resize gesture: draggable edges, bounds and per-axis clamping.
//!
//! Uses `f32` throughout to match Iced's coordinate space.

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

/// Which edge(s) of the box can be dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Bottom edge, changes the height.
    #[default]
    #[serde(rename = "s", alias = "south")]
    South,
    /// Right edge, changes the width.
    #[serde(rename = "e", alias = "east")]
    East,
    /// Bottom-right corner, changes both.
    #[serde(rename = "se", alias = "southeast")]
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::South, Direction::East, Direction::SouthEast];

    /// Whether dragging changes the height.
    #[must_use]
    pub fn includes_south(self) -> bool {
        matches!(self, Direction::South | Direction::SouthEast)
    }

    /// Whether dragging changes the width.
    #[must_use]
    pub fn includes_east(self) -> bool {
        matches!(self, Direction::East | Direction::SouthEast)
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "se" | "southeast" => Ok(Direction::SouthEast),
            other => Err(format!("invalid direction: {other}")),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::South => "s",
            Direction::East => "e",
            Direction::SouthEast => "se",
        };
        f.write_str(s)
    }
}

/// Resolved bounds and behavior flags for one resizable box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min_size: Size,
    /// `f32::INFINITY` on an axis means unbounded.
    pub max_size: Size,
    pub direction: Direction,
    /// Quantization unit. 1 means continuous resizing.
    pub step: f32,
    /// Tolerance allowed around the bounds and for the step remainder.
    pub stepping_margin: f32,
    pub lock_aspect_ratio: bool,
    pub full_width: bool,
    pub allow_ghost_resize: bool,
}

impl Constraints {
    /// Whether the session reports continuous size changes instead of steps.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.step == 1.0
    }

    /// Whether the session reports step-boundary crossings.
    #[must_use]
    pub fn is_stepped(&self) -> bool {
        self.step > 1.0
    }
}

/// Size change since the box was created, expressed in steps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepDelta {
    pub dx: f32,
    pub dy: f32,
}

impl StepDelta {
    /// Normalized delta between `current` and `original`.
    #[must_use]
    pub fn between(current: Size, original: Size, step: f32) -> Self {
        Self {
            dx: (current.width - original.width) / step,
            dy: (current.height - original.height) / step,
        }
    }
}

/// Outcome of projecting a pointer sample onto one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisProposal {
    /// Snapped and clamped length.
    pub value: f32,
    /// Whether the movement is accepted on this axis.
    pub can_change: bool,
}

/// Bounds of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f32,
    pub max: f32,
}

/// Projects a drag `distance` from `base` onto one axis.
///
/// The un-stepped length must stay within the bounds widened by `margin`
/// and the step remainder must not exceed `margin`. The returned value is
/// snapped down to the step then clamped to the exact bounds, max last.
#[must_use]
pub fn propose_axis(
    base: f32,
    distance: f32,
    step: f32,
    margin: f32,
    bounds: AxisBounds,
    eligible: bool,
) -> AxisProposal {
    let unstepped = base + distance;
    let remainder = distance % step;

    let can_change = eligible
        && unstepped >= bounds.min - margin
        && unstepped <= bounds.max + margin
        && remainder <= margin;

    let mut value = unstepped - remainder;
    if value < bounds.min {
        value = bounds.min;
    }
    if value > bounds.max {
        value = bounds.max;
    }

    AxisProposal { value, can_change }
}

/// Per-axis proposals for one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposal {
    pub width: AxisProposal,
    pub height: AxisProposal,
}

impl Proposal {
    /// Applies the accepted axes on top of `current`.
    #[must_use]
    pub fn commit(&self, current: Size) -> Size {
        Size::new(
            if self.width.can_change {
                self.width.value
            } else {
                current.width
            },
            if self.height.can_change {
                self.height.value
            } else {
                current.height
            },
        )
    }
}

/// Computes the size proposed by a pointer at `pointer` for a gesture that
/// started at `anchor` with the box at `base`.
#[must_use]
pub fn propose(
    constraints: &Constraints,
    anchor: Point,
    pointer: Point,
    base: Size,
    original: Size,
) -> Proposal {
    let distance = pointer - anchor;

    let height = propose_axis(
        base.height,
        distance.y,
        constraints.step,
        constraints.stepping_margin,
        AxisBounds {
            min: constraints.min_size.height,
            max: constraints.max_size.height,
        },
        constraints.direction.includes_south(),
    );

    let mut width = propose_axis(
        base.width,
        distance.x,
        constraints.step,
        constraints.stepping_margin,
        AxisBounds {
            min: constraints.min_size.width,
            max: constraints.max_size.width,
        },
        constraints.direction.includes_east(),
    );

    // Height drives the width when the aspect ratio is locked.
    if constraints.direction == Direction::SouthEast && constraints.lock_aspect_ratio {
        let aspect_ratio = original.height / original.width;
        width.value = height.value / aspect_ratio;
    }

    Proposal { width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: f32, max: f32) -> AxisBounds {
        AxisBounds { min, max }
    }

    #[test]
    fn direction_axes() {
        assert!(Direction::South.includes_south());
        assert!(!Direction::South.includes_east());
        assert!(Direction::East.includes_east());
        assert!(!Direction::East.includes_south());
        assert!(Direction::SouthEast.includes_south());
        assert!(Direction::SouthEast.includes_east());
    }

    #[test]
    fn direction_parses_short_and_long_names() {
        assert_eq!("s".parse::<Direction>(), Ok(Direction::South));
        assert_eq!("East".parse::<Direction>(), Ok(Direction::East));
        assert_eq!("se".parse::<Direction>(), Ok(Direction::SouthEast));
        assert!("nw".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_display_uses_short_names() {
        assert_eq!(Direction::SouthEast.to_string(), "se");
    }

    #[test]
    fn continuous_step_is_accepted_as_is() {
        let p = propose_axis(50.0, 17.0, 1.0, 20.0, bounds(50.0, f32::INFINITY), true);
        assert!(p.can_change);
        assert_eq!(p.value, 67.0);
    }

    #[test]
    fn stepped_distance_snaps_down() {
        let p = propose_axis(50.0, 24.0, 10.0, 20.0, bounds(50.0, f32::INFINITY), true);
        assert!(p.can_change);
        assert_eq!(p.value, 70.0);
    }

    #[test]
    fn remainder_above_margin_rejects_axis() {
        let p = propose_axis(50.0, 29.0, 30.0, 20.0, bounds(50.0, f32::INFINITY), true);
        assert!(!p.can_change);
    }

    #[test]
    fn negative_remainder_follows_dividend_sign() {
        // -24 % 10 == -4, snapping moves away from zero: 100 - 24 + 4 = 80.
        let p = propose_axis(100.0, -24.0, 10.0, 20.0, bounds(50.0, 200.0), true);
        assert!(p.can_change);
        assert_eq!(p.value, 80.0);
    }

    #[test]
    fn below_min_within_margin_clamps_to_min() {
        let p = propose_axis(50.0, -15.0, 1.0, 20.0, bounds(50.0, 100.0), true);
        assert!(p.can_change);
        assert_eq!(p.value, 50.0);
    }

    #[test]
    fn beyond_margin_is_rejected_but_still_clamped() {
        let p = propose_axis(100.0, 50.0, 1.0, 20.0, bounds(50.0, 120.0), true);
        assert!(!p.can_change);
        assert_eq!(p.value, 120.0);
    }

    #[test]
    fn ineligible_axis_never_changes() {
        let p = propose_axis(50.0, 10.0, 1.0, 20.0, bounds(50.0, 100.0), false);
        assert!(!p.can_change);
    }

    #[test]
    fn inverted_bounds_apply_max_last() {
        let p = propose_axis(50.0, 0.0, 1.0, 20.0, bounds(80.0, 60.0), true);
        assert_eq!(p.value, 60.0);
    }

    #[test]
    fn step_delta_is_normalized_by_step() {
        let delta = StepDelta::between(Size::new(120.0, 80.0), Size::new(100.0, 50.0), 10.0);
        assert_eq!(delta, StepDelta { dx: 2.0, dy: 3.0 });
    }

    #[test]
    fn proposal_commits_only_accepted_axes() {
        let proposal = Proposal {
            width: AxisProposal {
                value: 300.0,
                can_change: false,
            },
            height: AxisProposal {
                value: 90.0,
                can_change: true,
            },
        };
        assert_eq!(
            proposal.commit(Size::new(250.0, 50.0)),
            Size::new(250.0, 90.0)
        );
    }
}
