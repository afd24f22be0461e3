use tpoint_megist::{Point, SplitConfig, TInstant, TSequence, Temporal, extract};

fn main() {
    // 螺旋状に移動する点を20時点で表す
    let instants = (0..20)
        .map(|i| {
            let angle = i as f64 * 0.5;
            let point = Point::new(angle.cos() * i as f64, angle.sin() * i as f64).unwrap();
            TInstant::new(point, i * 1_000_000)
        })
        .collect();
    let value = Temporal::from(TSequence::new(instants).unwrap());

    let config = SplitConfig::from_options("k=4").unwrap();

    for b in extract(&value, &config) {
        println!("{},", b);
    }
}
