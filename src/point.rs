use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 移動点がある時刻に占める空間上の位置。
///
/// 2次元 `(x, y)` または3次元 `(x, y, z)` のいずれかで表現される。
/// 座標はすべて有限値であることが保証される。
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
}

impl fmt::Display for Point {
    /// `Point` を `"(x,y)"` または `"(x,y,z)"` の形式で表示する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "({},{},{})", self.x, self.y, z),
            None => write!(f, "({},{})", self.x, self.y),
        }
    }
}

impl Point {
    /// 2次元の [`Point`] を作成する。
    ///
    /// ```
    /// # use tpoint_megist::Point;
    /// let p = Point::new(1.0, 2.0).unwrap();
    /// assert_eq!(p.as_x(), 1.0);
    /// assert_eq!(p.as_z(), None);
    ///
    /// assert!(Point::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64) -> Result<Point, Error> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFiniteCoordinate);
        }
        Ok(Point { x, y, z: None })
    }

    /// 3次元の [`Point`] を作成する。
    pub fn new_3d(x: f64, y: f64, z: f64) -> Result<Point, Error> {
        if !z.is_finite() {
            return Err(Error::NonFiniteCoordinate);
        }
        let mut point = Point::new(x, y)?;
        point.z = Some(z);
        Ok(point)
    }

    pub fn as_x(&self) -> f64 {
        self.x
    }

    pub fn as_y(&self) -> f64 {
        self.y
    }

    /// Z成分を返す。2次元の点では `None`。
    pub fn as_z(&self) -> Option<f64> {
        self.z
    }

    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Point::new(f64::INFINITY, 0.0), Err(Error::NonFiniteCoordinate));
        assert_eq!(Point::new(0.0, f64::NAN), Err(Error::NonFiniteCoordinate));
        assert_eq!(
            Point::new_3d(0.0, 0.0, f64::NEG_INFINITY),
            Err(Error::NonFiniteCoordinate)
        );
    }

    #[test]
    fn dimensionality() {
        let p2 = Point::new(1.0, 2.0).unwrap();
        let p3 = Point::new_3d(1.0, 2.0, 3.0).unwrap();
        assert!(!p2.has_z());
        assert!(p3.has_z());
        assert_eq!(p3.as_z(), Some(3.0));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.5, -2.0).unwrap().to_string(), "(1.5,-2)");
        assert_eq!(Point::new_3d(1.0, 2.0, 3.0).unwrap().to_string(), "(1,2,3)");
    }
}
