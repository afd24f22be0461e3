#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "random"))]
use crate::point::Point;
use crate::{
    error::Error,
    stbox::{Bounded, STBox},
    temporal::TInstant,
    time_span::TimeSpan,
};

/// 時刻順に並んだ時点の列（シーケンス）
///
/// `N` 個の時点は隣り合う時点同士を結ぶ `N - 1` 個の線分（セグメント）として解釈される。
/// 構築時に以下が検証され、以後は変更されない。
///
/// - 時点が1つ以上あること
/// - 時刻が狭義単調増加であること
/// - すべての時点が同じ次元（2次元または3次元）であること
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<TInstant>", into = "Vec<TInstant>")
)]
pub struct TSequence {
    instants: Vec<TInstant>,
}

impl TSequence {
    /// 時点の列から [`TSequence`] を構築する。
    ///
    /// ```
    /// # use tpoint_megist::{Point, TInstant, TSequence, Error};
    /// let a = TInstant::new(Point::new(0.0, 0.0).unwrap(), 10);
    /// let b = TInstant::new(Point::new(1.0, 1.0).unwrap(), 20);
    /// let seq = TSequence::new(vec![a, b]).unwrap();
    /// assert_eq!(seq.segment_count(), 1);
    ///
    /// let err = TSequence::new(vec![b, a]);
    /// assert_eq!(err, Err(Error::NonIncreasingTimestamp { index: 1, prev: 20, next: 10 }));
    /// ```
    pub fn new(instants: Vec<TInstant>) -> Result<TSequence, Error> {
        let first = instants.first().ok_or(Error::EmptySequence)?;
        let has_z = first.point().has_z();

        for (index, pair) in instants.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.point().has_z() != has_z {
                return Err(Error::MixedDimensionality { index: index + 1 });
            }
            if next.timestamp() <= prev.timestamp() {
                return Err(Error::NonIncreasingTimestamp {
                    index: index + 1,
                    prev: prev.timestamp(),
                    next: next.timestamp(),
                });
            }
        }

        Ok(TSequence { instants })
    }

    /// 時点の数
    pub fn count(&self) -> usize {
        self.instants.len()
    }

    /// 線分の数（時点の数 - 1）
    pub fn segment_count(&self) -> usize {
        self.instants.len() - 1
    }

    /// `n` 番目の時点を返す。
    pub fn inst_n(&self, n: usize) -> Option<&TInstant> {
        self.instants.get(n)
    }

    pub fn instants(&self) -> &[TInstant] {
        &self.instants
    }

    pub fn start_instant(&self) -> &TInstant {
        &self.instants[0]
    }

    pub fn end_instant(&self) -> &TInstant {
        &self.instants[self.instants.len() - 1]
    }

    pub fn has_z(&self) -> bool {
        self.start_instant().point().has_z()
    }

    /// 最初の時点から最後の時点までの時間区間
    pub fn period(&self) -> TimeSpan {
        TimeSpan::new(
            self.start_instant().timestamp(),
            self.end_instant().timestamp(),
        )
    }

    /// 指定された時点の範囲を包む最小のボックスを返す。
    ///
    /// `range` は空であってはならない。
    pub(crate) fn envelope_of(&self, range: std::ops::RangeInclusive<usize>) -> STBox {
        let group = &self.instants[range];
        group[1..]
            .iter()
            .fold(STBox::from_instant(&group[0]), |acc, inst| {
                acc.union(&STBox::from_instant(inst))
            })
    }

    /// ランダムな2次元の [`TSequence`] を生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random(len: usize) -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng, len)
    }

    /// 外部の乱数生成器を使用して、`len` 個（最低1個）の時点を持つランダムウォークを生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R, len: usize) -> Self {
        let mut x = rng.random_range(-1000.0..1000.0);
        let mut y = rng.random_range(-1000.0..1000.0);
        let mut t: i64 = rng.random_range(0..1_000_000_000);

        let mut instants = Vec::with_capacity(len.max(1));
        for _ in 0..len.max(1) {
            let point = Point::new(x, y).expect("Invalid random Point");
            instants.push(TInstant::new(point, t));
            x += rng.random_range(-10.0..10.0);
            y += rng.random_range(-10.0..10.0);
            t += rng.random_range(1..1_000_000);
        }

        TSequence::new(instants).expect("Invalid random TSequence")
    }
}

impl Bounded for TSequence {
    fn bounding_box(&self) -> STBox {
        self.envelope_of(0..=self.segment_count())
    }
}

impl TryFrom<Vec<TInstant>> for TSequence {
    type Error = Error;

    fn try_from(value: Vec<TInstant>) -> Result<Self, Self::Error> {
        TSequence::new(value)
    }
}

impl From<TSequence> for Vec<TInstant> {
    fn from(value: TSequence) -> Self {
        value.instants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inst(x: f64, y: f64, t: i64) -> TInstant {
        TInstant::new(Point::new(x, y).unwrap(), t)
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(TSequence::new(vec![]), Err(Error::EmptySequence));
    }

    #[test]
    fn equal_timestamps_are_rejected() {
        let err = TSequence::new(vec![inst(0.0, 0.0, 5), inst(1.0, 0.0, 5)]);
        assert_eq!(
            err,
            Err(Error::NonIncreasingTimestamp {
                index: 1,
                prev: 5,
                next: 5
            })
        );
    }

    #[test]
    fn mixed_dimensionality_is_rejected() {
        let p3 = TInstant::new(Point::new_3d(0.0, 0.0, 0.0).unwrap(), 10);
        let err = TSequence::new(vec![inst(0.0, 0.0, 0), inst(1.0, 1.0, 5), p3]);
        assert_eq!(err, Err(Error::MixedDimensionality { index: 2 }));
    }

    #[test]
    fn single_instant_has_no_segments() {
        let seq = TSequence::new(vec![inst(3.0, 4.0, 1)]).unwrap();
        assert_eq!(seq.count(), 1);
        assert_eq!(seq.segment_count(), 0);
        assert!(seq.bounding_box().is_zero_extent());
    }

    #[test]
    fn bounding_box_covers_all_instants() {
        let seq = TSequence::new(vec![
            inst(0.0, 0.0, 0),
            inst(5.0, -3.0, 10),
            inst(2.0, 8.0, 20),
        ])
        .unwrap();
        let b = seq.bounding_box();
        assert_eq!(b.x(), [0.0, 5.0]);
        assert_eq!(b.y(), [-3.0, 8.0]);
        assert_eq!(b.period(), TimeSpan::new(0, 20));
        assert_eq!(seq.period(), b.period());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_order() {
        let seq = TSequence::new(vec![inst(0.0, 0.0, 10), inst(1.0, 1.0, 20)]).unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(serde_json::from_str::<TSequence>(&json).unwrap(), seq);

        let reversed = json.replace("10", "30");
        assert!(serde_json::from_str::<TSequence>(&reversed).is_err());
    }

    #[test]
    fn random_sequence_is_valid() {
        let seq = TSequence::random(50);
        assert_eq!(seq.count(), 50);
        assert!(TSequence::new(seq.instants().to_vec()).is_ok());
        assert_eq!(TSequence::random(0).count(), 1);
    }
}
