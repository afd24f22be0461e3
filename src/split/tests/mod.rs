use crate::{Point, TInstant, TSequence};

#[cfg(any(test))]
use proptest::prelude::*;


///テスト用に、x座標と時刻が添字に比例する2次元のシーケンスを作る
#[cfg(any(test))]
pub fn line_sequence(n: usize) -> TSequence {
    let instants = (0..n)
        .map(|i| TInstant::new(Point::new(i as f64, -(i as f64)).unwrap(), i as i64 * 10))
        .collect();
    TSequence::new(instants).unwrap()
}

///テストのために、ランダムなシーケンスを生成する関数
/// 2次元と3次元を半々の確率で選び、時刻は必ず増加させる
#[cfg(any(test))]
pub fn arb_sequence(max_len: usize) -> impl Strategy<Value = TSequence> {
    let step = (-1e6f64..1e6, -1e6f64..1e6, -1e6f64..1e6, 1i64..10_000);
    (
        any::<bool>(),
        -1_000_000i64..1_000_000,
        proptest::collection::vec(step, 1..=max_len),
    )
        .prop_map(|(has_z, t0, steps)| {
            let mut t = t0;
            let instants = steps
                .into_iter()
                .map(|(x, y, z, dt)| {
                    t += dt;
                    let point = if has_z {
                        Point::new_3d(x, y, z)
                    } else {
                        Point::new(x, y)
                    };
                    TInstant::new(point.unwrap(), t)
                })
                .collect();
            TSequence::new(instants).unwrap()
        })
}
