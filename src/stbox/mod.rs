//! 時空間バウンディングボックス `STBox` と、その合成に関する操作。

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::Error;

use crate::{
    point::Point,
    temporal::TInstant,
    time_span::{TimeSpan, Timestamp},
};

/// 空間および時間の各軸に沿った境界ボックス（Space-Time Box）
///
/// X・Y（必要に応じてZ）と時間の各次元について最小値と最大値を保持する。
/// 各次元で `min <= max` が常に保証される。
///
/// ```text
/// pub struct STBox {
///     x: [f64; 2],
///     y: [f64; 2],
///     z: Option<[f64; 2]>,
///     period: TimeSpan,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSTBox"))]
pub struct STBox {
    x: [f64; 2],
    y: [f64; 2],
    z: Option<[f64; 2]>,
    period: TimeSpan,
}

/// 読み込み時に各次元の `min <= max` を検証するための中間表現
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSTBox {
    x: [f64; 2],
    y: [f64; 2],
    #[serde(default)]
    z: Option<[f64; 2]>,
    period: TimeSpan,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSTBox> for STBox {
    type Error = Error;

    fn try_from(raw: RawSTBox) -> Result<Self, Self::Error> {
        let checks = [("x", Some(raw.x)), ("y", Some(raw.y)), ("z", raw.z)];
        for (dimension, range) in checks {
            let Some([min, max]) = range else { continue };
            if !min.is_finite() || !max.is_finite() {
                return Err(Error::NonFiniteCoordinate);
            }
            if min > max {
                return Err(Error::InvertedBounds {
                    dimension: dimension.to_string(),
                });
            }
        }
        Ok(STBox {
            x: raw.x,
            y: raw.y,
            z: raw.z,
            period: raw.period,
        })
    }
}

/// 境界ボックスを持つ値が実装するトレイト
pub trait Bounded {
    /// 値のすべての時点を包む最小の [`STBox`] を返す。
    fn bounding_box(&self) -> STBox;
}

impl fmt::Display for STBox {
    /// `STBox` を `"STBOX XT(((xmin,ymin),(xmax,ymax)),[tmin, tmax])"` の形式で表示する。
    /// Zを持つ場合は `"STBOX ZT(...)"` となる。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(
                f,
                "STBOX ZT((({},{},{}),({},{},{})),[{}, {}])",
                self.x[0],
                self.y[0],
                z[0],
                self.x[1],
                self.y[1],
                z[1],
                self.period.start(),
                self.period.end()
            ),
            None => write!(
                f,
                "STBOX XT((({},{}),({},{})),[{}, {}])",
                self.x[0],
                self.y[0],
                self.x[1],
                self.y[1],
                self.period.start(),
                self.period.end()
            ),
        }
    }
}

impl STBox {
    /// 位置 `point` と時刻 `t` のみを含む、大きさ0のボックスを作成する。
    ///
    /// ```
    /// # use tpoint_megist::{Point, STBox};
    /// let b = STBox::from_point_at(&Point::new(1.0, 2.0).unwrap(), 100);
    /// assert!(b.is_zero_extent());
    /// assert_eq!(b.x(), [1.0, 1.0]);
    /// ```
    pub fn from_point_at(point: &Point, t: Timestamp) -> Self {
        Self {
            x: [point.as_x(), point.as_x()],
            y: [point.as_y(), point.as_y()],
            z: point.as_z().map(|z| [z, z]),
            period: TimeSpan::point(t),
        }
    }

    /// 1つの時点から大きさ0のボックスを作成する。
    pub fn from_instant(inst: &TInstant) -> Self {
        Self::from_point_at(inst.point(), inst.timestamp())
    }

    pub fn x(&self) -> [f64; 2] {
        self.x
    }

    pub fn y(&self) -> [f64; 2] {
        self.y
    }

    pub fn z(&self) -> Option<[f64; 2]> {
        self.z
    }

    pub fn period(&self) -> TimeSpan {
        self.period
    }

    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    /// すべての次元で幅が0かどうか
    pub fn is_zero_extent(&self) -> bool {
        self.x[0] == self.x[1]
            && self.y[0] == self.y[1]
            && self.z.is_none_or(|z| z[0] == z[1])
            && self.period.is_instant()
    }

    /// 2つのボックスを両方含む最小のボックスを返す。
    ///
    /// 結合則・交換則を満たすため、グループ内の畳み込みの順序は結果に影響しない。
    /// Zは両方がZを持つ場合のみ保持される。
    pub fn union(&self, other: &STBox) -> STBox {
        STBox {
            x: envelope(self.x, other.x),
            y: envelope(self.y, other.y),
            z: match (self.z, other.z) {
                (Some(a), Some(b)) => Some(envelope(a, b)),
                _ => None,
            },
            period: self.period.hull(&other.period),
        }
    }

    /// `other` を含むようにこのボックスを広げる。
    pub fn expand(&mut self, other: &STBox) {
        *self = self.union(other);
    }

    /// 時刻 `t` における位置 `point` がこのボックスに含まれるか判定
    pub fn contains_point_at(&self, point: &Point, t: Timestamp) -> bool {
        within(self.x, point.as_x())
            && within(self.y, point.as_y())
            && match (self.z, point.as_z()) {
                (Some(z), Some(pz)) => within(z, pz),
                _ => true,
            }
            && self.period.contains(t)
    }

    /// 他のボックスと交差するか判定
    ///
    /// どちらかがZを持たない場合、Z方向は判定に用いない。
    pub fn overlaps(&self, other: &STBox) -> bool {
        self.x[0] <= other.x[1]
            && self.x[1] >= other.x[0]
            && self.y[0] <= other.y[1]
            && self.y[1] >= other.y[0]
            && match (self.z, other.z) {
                (Some(a), Some(b)) => a[0] <= b[1] && a[1] >= b[0],
                _ => true,
            }
            && self.period.overlaps(&other.period)
    }
}

fn envelope(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    [a[0].min(b[0]), a[1].max(b[1])]
}

fn within(range: [f64; 2], v: f64) -> bool {
    range[0] <= v && v <= range[1]
}
