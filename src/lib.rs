/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 移動点の空間上の位置。
mod point;

/// 時空間バウンディングボックス。
mod stbox;

/// 時点・シーケンス・シーケンスセットで表される移動点の値。
mod temporal;

/// 時刻と時間区間。
mod time_span;

/// Multi-Entryインデックスのための分割ロジック。
mod split;

pub use error::Error;
pub use point::Point;
pub use stbox::{Bounded, STBox};
pub use temporal::{
    ANY_SUBTYPE, TInstant, TSequence, TSequenceSet, Temporal, TemporalSubtype,
};
pub use time_span::{TimeSpan, Timestamp};

pub use split::config::{
    EXTRACT_BOXES_DEFAULT, EXTRACT_BOXES_FIXED, EXTRACT_BOXES_MAX, SplitConfig, SplitStrategy,
};
pub use split::extract::{equisplit, extract, extract_tagged, split};
pub use split::plan::SplitPlan;
