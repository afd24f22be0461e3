use std::ops::{Range, RangeInclusive};

/// `M` 個の線分を `k` 個以下の連続したグループに分ける計画
///
/// 各グループは `segs_per_split` 個の線分を受け持ち、最後のグループのみ短くなり得る。
/// グループの線分範囲は `[0, M)` を隙間も重なりもなく順に覆う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    segments: usize,
    segs_per_split: usize,
    count: usize,
}

impl SplitPlan {
    /// 線分数 `segments` と目標グループ数 `k` から計画を作成する。
    ///
    /// 1. `segs_per_split = ceil(segments / k)`
    /// 2. `ceil(segments / segs_per_split)` が `k` より小さければ、それをグループ数とする。
    ///
    /// `k` が0の場合は1として扱う。
    ///
    /// ```
    /// # use tpoint_megist::SplitPlan;
    /// let plan = SplitPlan::new(9, 4);
    /// assert_eq!(plan.segs_per_split(), 3);
    /// assert_eq!(plan.count(), 3);
    /// assert_eq!(plan.ranges().collect::<Vec<_>>(), vec![0..3, 3..6, 6..9]);
    /// ```
    pub fn new(segments: usize, k: usize) -> SplitPlan {
        if segments == 0 {
            return SplitPlan {
                segments,
                segs_per_split: 1,
                count: 0,
            };
        }

        let mut count = k.max(1);
        let segs_per_split = (segments as f64 / count as f64).ceil() as usize;
        let actual = (segments as f64 / segs_per_split as f64).ceil() as usize;
        if actual < count {
            count = actual;
        }

        SplitPlan {
            segments,
            segs_per_split,
            count,
        }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn segs_per_split(&self) -> usize {
        self.segs_per_split
    }

    /// 補正後のグループ数
    pub fn count(&self) -> usize {
        self.count
    }

    /// 各グループが受け持つ線分の範囲を順に返す。
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + use<> {
        let (segments, step) = (self.segments, self.segs_per_split);
        (0..segments)
            .step_by(step)
            .map(move |i| i..i + step.min(segments - i))
    }

    /// 各グループが触れる時点の範囲を順に返す。
    ///
    /// `n` 個の線分を持つグループは `n + 1` 個の時点に触れ、隣り合うグループは境界の時点を共有する。
    pub fn instant_ranges(&self) -> impl Iterator<Item = RangeInclusive<usize>> + use<> {
        self.ranges().map(|r| r.start..=r.end)
    }
}
