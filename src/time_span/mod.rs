//! 時刻および時間区間を扱うモジュール
//!
//! 時刻はUNIXエポックからのマイクロ秒を `i64` で表現する。

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::Error;

/// マイクロ秒単位の時刻
pub type Timestamp = i64;

/// 閉区間 `[start, end]` で表される時間区間
///
/// 開始時刻と終了時刻を直接保持する。`start <= end` は常に保証される。
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeSpan"))]
pub struct TimeSpan {
    /// 開始時刻（含む）
    start: Timestamp,
    /// 終了時刻（含む）
    end: Timestamp,
}

/// 読み込み時に `start <= end` を検証するための中間表現
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTimeSpan {
    start: Timestamp,
    end: Timestamp,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeSpan> for TimeSpan {
    type Error = Error;

    fn try_from(raw: RawTimeSpan) -> Result<Self, Self::Error> {
        if raw.start > raw.end {
            return Err(Error::InvertedBounds {
                dimension: "t".to_string(),
            });
        }
        Ok(TimeSpan {
            start: raw.start,
            end: raw.end,
        })
    }
}

impl TimeSpan {
    /// 新しい時間区間を作成
    ///
    /// start <= end が保証される（逆の場合は自動的に入れ替え）
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// 単一時点を表す区間を作成
    pub fn point(t: Timestamp) -> Self {
        Self { start: t, end: t }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// 単一時点かどうか
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// 指定した時刻が区間内に含まれるかどうかを返す
    pub fn contains(&self, t: Timestamp) -> bool {
        self.start <= t && t <= self.end
    }

    /// 二つの区間が重なるかどうかを返す
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// 二つの区間を両方含む最小の区間を返す
    ///
    /// 区間が離れていても間の時間を含めて一つの区間にする。
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
