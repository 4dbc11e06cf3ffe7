use constants::gesture::{INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP, THUMB_TIP};

/// One tracked point in normalized image coordinates, origin top-left,
/// un-mirrored (the tracker sees the raw camera image).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Landmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The fixed 21-point hand skeleton emitted per detection: wrist first, then
/// four joints per finger starting with the thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn thumb_tip(&self) -> Landmark {
        self.points[THUMB_TIP]
    }

    pub fn index_tip(&self) -> Landmark {
        self.points[INDEX_TIP]
    }

    pub fn middle_mcp(&self) -> Landmark {
        self.points[MIDDLE_MCP]
    }
}

/// One tracker output frame. `hand` is `None` when no hand was detected;
/// an absent frame (stalled tracker) is simply never sent.
#[derive(Debug, Clone, Default)]
pub struct LandmarkSample {
    pub hand: Option<HandLandmarks>,
}

impl LandmarkSample {
    pub fn detected(hand: HandLandmarks) -> Self {
        Self { hand: Some(hand) }
    }

    pub fn no_hand() -> Self {
        Self { hand: None }
    }
}

#[cfg(test)]
pub(crate) fn test_hand(thumb: Landmark, index: Landmark, middle_mcp: Landmark) -> HandLandmarks {
    let mut points = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
    points[THUMB_TIP] = thumb;
    points[INDEX_TIP] = index;
    points[MIDDLE_MCP] = middle_mcp;
    HandLandmarks::new(points)
}
