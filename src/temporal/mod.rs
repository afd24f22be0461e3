//! 移動点を表す時間的な値（時点・シーケンス・シーケンスセット）。

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    stbox::{Bounded, STBox},
    time_span::TimeSpan,
};

pub mod instant;
pub mod sequence;
pub mod sequence_set;

pub use instant::TInstant;
pub use sequence::TSequence;
pub use sequence_set::TSequenceSet;

/// 特定の形を指さない「任意の形」を表すタグ値。具体的な値がこのタグを持つことはない。
pub const ANY_SUBTYPE: u8 = 0;

/// 時間的な値の形を表すタグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TemporalSubtype {
    Instant = 1,
    Sequence = 2,
    SequenceSet = 3,
}

impl TryFrom<u8> for TemporalSubtype {
    type Error = Error;

    /// 数値のタグを [`TemporalSubtype`] に変換する。
    ///
    /// ```
    /// # use tpoint_megist::{TemporalSubtype, Error};
    /// assert_eq!(TemporalSubtype::try_from(2), Ok(TemporalSubtype::Sequence));
    /// assert_eq!(TemporalSubtype::try_from(0), Err(Error::InvalidShape { subtype: 0 }));
    /// ```
    fn try_from(subtype: u8) -> Result<Self, Self::Error> {
        match subtype {
            1 => Ok(TemporalSubtype::Instant),
            2 => Ok(TemporalSubtype::Sequence),
            3 => Ok(TemporalSubtype::SequenceSet),
            _ => Err(Error::InvalidShape { subtype }),
        }
    }
}

/// 移動点の時間的な値
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Temporal {
    Instant(TInstant),
    Sequence(TSequence),
    SequenceSet(TSequenceSet),
}

impl Temporal {
    pub fn subtype(&self) -> TemporalSubtype {
        match self {
            Temporal::Instant(_) => TemporalSubtype::Instant,
            Temporal::Sequence(_) => TemporalSubtype::Sequence,
            Temporal::SequenceSet(_) => TemporalSubtype::SequenceSet,
        }
    }

    pub fn period(&self) -> TimeSpan {
        match self {
            Temporal::Instant(inst) => TimeSpan::point(inst.timestamp()),
            Temporal::Sequence(seq) => seq.period(),
            Temporal::SequenceSet(set) => set.period(),
        }
    }
}

impl Bounded for Temporal {
    fn bounding_box(&self) -> STBox {
        match self {
            Temporal::Instant(inst) => inst.bounding_box(),
            Temporal::Sequence(seq) => seq.bounding_box(),
            Temporal::SequenceSet(set) => set.bounding_box(),
        }
    }
}

impl From<TInstant> for Temporal {
    fn from(value: TInstant) -> Self {
        Temporal::Instant(value)
    }
}

impl From<TSequence> for Temporal {
    fn from(value: TSequence) -> Self {
        Temporal::Sequence(value)
    }
}

impl From<TSequenceSet> for Temporal {
    fn from(value: TSequenceSet) -> Self {
        Temporal::SequenceSet(value)
    }
}
