#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    point::Point,
    stbox::{Bounded, STBox},
    time_span::Timestamp,
};

/// ある時刻における移動点の位置（時点）
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TInstant {
    point: Point,
    t: Timestamp,
}

impl TInstant {
    pub fn new(point: Point, t: Timestamp) -> Self {
        Self { point, t }
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn timestamp(&self) -> Timestamp {
        self.t
    }
}

impl Bounded for TInstant {
    fn bounding_box(&self) -> STBox {
        STBox::from_instant(self)
    }
}
