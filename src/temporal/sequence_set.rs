#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    stbox::{Bounded, STBox},
    temporal::{TInstant, TSequence},
    time_span::TimeSpan,
};

/// 時間的に重ならないシーケンスの列（シーケンスセット）
///
/// 各シーケンスは時刻順に並び、前のシーケンスの終了時刻より後に開始する。
/// すべてのシーケンスは同じ次元を持つ。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<TSequence>", into = "Vec<TSequence>")
)]
pub struct TSequenceSet {
    sequences: Vec<TSequence>,
}

impl TSequenceSet {
    pub fn new(sequences: Vec<TSequence>) -> Result<TSequenceSet, Error> {
        let first = sequences.first().ok_or(Error::EmptySequenceSet)?;
        let has_z = first.has_z();

        for (index, pair) in sequences.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.has_z() != has_z {
                return Err(Error::MixedDimensionality { index: index + 1 });
            }
            if next.period().start() <= prev.period().end() {
                return Err(Error::OverlappingSequences { index: index + 1 });
            }
        }

        Ok(TSequenceSet { sequences })
    }

    pub fn sequences(&self) -> &[TSequence] {
        &self.sequences
    }

    /// すべてのシーケンスの時点を時刻順に返す。
    pub fn instants(&self) -> impl Iterator<Item = &TInstant> {
        self.sequences.iter().flat_map(|seq| seq.instants())
    }

    /// 時点の総数
    pub fn num_instants(&self) -> usize {
        self.sequences.iter().map(TSequence::count).sum()
    }

    pub fn has_z(&self) -> bool {
        self.sequences[0].has_z()
    }

    /// 最初のシーケンスの開始から最後のシーケンスの終了までの時間区間（間の空白を含む）
    pub fn period(&self) -> TimeSpan {
        let last = &self.sequences[self.sequences.len() - 1];
        self.sequences[0].period().hull(&last.period())
    }
}

impl Bounded for TSequenceSet {
    fn bounding_box(&self) -> STBox {
        let (first, rest) = (&self.sequences[0], &self.sequences[1..]);
        rest.iter()
            .fold(first.bounding_box(), |acc, seq| acc.union(&seq.bounding_box()))
    }
}

impl TryFrom<Vec<TSequence>> for TSequenceSet {
    type Error = Error;

    fn try_from(value: Vec<TSequence>) -> Result<Self, Self::Error> {
        TSequenceSet::new(value)
    }
}

impl From<TSequenceSet> for Vec<TSequence> {
    fn from(value: TSequenceSet) -> Self {
        value.sequences
    }
}
