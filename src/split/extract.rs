use crate::{
    error::Error,
    split::{config::SplitConfig, plan::SplitPlan},
    stbox::{Bounded, STBox},
    temporal::{TSequence, Temporal, TemporalSubtype},
};

/// インデックスに格納するキーとして、1つの値から複数の [`STBox`] を取り出す。
///
/// 返されたボックスはそれぞれ同じ行を指すインデックスエントリとして格納される。
///
/// ```
/// # use tpoint_megist::{extract, Point, SplitConfig, TInstant, TSequence, Temporal};
/// let instants = (0..5)
///     .map(|i| TInstant::new(Point::new(i as f64, 0.0).unwrap(), i * 10))
///     .collect();
/// let value = Temporal::from(TSequence::new(instants).unwrap());
///
/// let boxes = extract(&value, &SplitConfig::new(2).unwrap());
/// assert_eq!(boxes.len(), 2);
/// assert_eq!(boxes[0].x(), [0.0, 2.0]);
/// assert_eq!(boxes[1].x(), [2.0, 4.0]);
/// ```
pub fn extract(value: &Temporal, config: &SplitConfig) -> Vec<STBox> {
    split(value, config.target_boxes())
}

/// 数値の形タグを伴う値から [`extract`] を行う。
///
/// タグが既知の形でない場合、または値の形と一致しない場合は [`Error::InvalidShape`] を返す。
pub fn extract_tagged(
    subtype: u8,
    value: &Temporal,
    config: &SplitConfig,
) -> Result<Vec<STBox>, Error> {
    let tag = TemporalSubtype::try_from(subtype)?;
    if tag != value.subtype() {
        return Err(Error::InvalidShape { subtype });
    }
    Ok(extract(value, config))
}

/// 値の形に応じて最大 `k` 個のボックスに分割する。
///
/// - 時点: 大きさ0のボックス1つ（`k` は無視）
/// - シーケンスセット: すべての時点を包むボックス1つ（`k` は無視）
/// - 時点が1つのシーケンス: 大きさ0のボックス1つ
/// - それ以外のシーケンス: [`equisplit`]
pub fn split(value: &Temporal, k: usize) -> Vec<STBox> {
    match value {
        Temporal::Instant(inst) => vec![inst.bounding_box()],
        Temporal::Sequence(seq) if seq.count() <= 1 => vec![seq.bounding_box()],
        Temporal::Sequence(seq) => equisplit(seq, k),
        Temporal::SequenceSet(set) => {
            tracing::trace!(
                sequences = set.sequences().len(),
                "sequence set is kept as a single box"
            );
            vec![set.bounding_box()]
        }
    }
}

/// シーケンスの線分をほぼ等しい数ずつ連続したグループに分け、グループごとにボックスを作る。
///
/// 戻り値は時刻順で、長さは `1..=k`（`k` が0なら1とみなす）。
/// 隣り合うボックスは境界の時点を共有する。
pub fn equisplit(seq: &TSequence, k: usize) -> Vec<STBox> {
    let plan = SplitPlan::new(seq.segment_count(), k);
    if plan.count() == 0 {
        return vec![seq.bounding_box()];
    }

    if plan.count() < k {
        tracing::debug!(
            segments = plan.segments(),
            requested = k,
            boxes = plan.count(),
            "equisplit reduced the number of boxes"
        );
    }

    let boxes: Vec<STBox> = plan
        .instant_ranges()
        .map(|range| seq.envelope_of(range))
        .collect();
    debug_assert_eq!(boxes.len(), plan.count());
    boxes
}
