use tda_landscape::Landscape;
use tda_test::assert_close;

#[test]
fn four_interval_landscape_is_non_increasing_by_depth() {
    let ls = Landscape::new(vec![1.0, 4.0, 4.0, 7.0], vec![2.0, 7.0, 9.0, 9.0]).unwrap();

    for t in [2.5, 4.5, 6.0, 8.0] {
        let h = ls.eval(t, &[0, 1, 2, 3]);
        for w in h.windows(2) {
            assert!(w[0] >= w[1], "depth ordering violated at t={t}: {h:?}");
        }
    }
}

#[test]
fn depth_zero_equals_max_single_tent_height() {
    let births = vec![1.0, 4.0, 4.0, 7.0];
    let deaths = vec![2.0, 7.0, 9.0, 9.0];
    let ls = Landscape::new(births.clone(), deaths.clone()).unwrap();

    let t = 5.5;
    let top = ls.eval(t, &[0])[0];

    let mut manual = 0.0f64;
    for i in 0..births.len() {
        if t > births[i] && t < deaths[i] {
            let mid = (births[i] + deaths[i]) / 2.0;
            let h = if t <= mid { t - births[i] } else { deaths[i] - t };
            manual = manual.max(h);
        }
    }
    assert_close(top, manual, 1e-12);
}
