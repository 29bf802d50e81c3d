use tda_peel::ConvexPeel;
use tda_test::assert_close;

#[test]
fn stats_over_strictly_decreasing_fractions() {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for yy in -2..=2 {
        for xx in -2..=2 {
            x.push(xx as f64);
            y.push(yy as f64);
        }
    }
    let mut cp = ConvexPeel::new(x, y).unwrap();
    let stats = cp.stats(&[1.0, 0.8, 0.5]).unwrap();

    assert_eq!(stats.len(), 3);
    assert_close(stats[0].area, 16.0, 1e-8);
    assert!(stats[2].area < stats[0].area);
}

#[test]
fn peel_to_matches_manual_repeated_peel() {
    let x = vec![0.1, 1.0, 0.0, 1.0, 0.0, -1.0, -1.0, -1.0, 0.1, 0.0, 1.0, 0.0, 0.0];
    let y = vec![0.1, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, -1.0, 0.2, -1.0, -1.0, 0.0, 0.0];

    let mut a = ConvexPeel::new(x.clone(), y.clone()).unwrap();
    a.peel();

    let mut b = ConvexPeel::new(x, y).unwrap();
    b.peel_to(0.7);

    assert_eq!(a.num_points(), b.num_points());
}
