use tda_persist::Persistence;

fn flatten(rows: &[&[i64]]) -> Vec<i64> {
    rows.iter().flat_map(|r| r.iter().copied()).collect()
}

#[test]
fn ring_with_bright_core_splits_and_shrinks() {
    let rows: Vec<&[i64]> = vec![
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 9, 9, 9, 4, 7, 9, 0],
        &[0, 9, 5, 1, 4, 8, 7, 0],
        &[0, 9, 5, 1, 4, 4, 4, 0],
        &[0, 9, 2, 1, 4, 6, 6, 0],
        &[0, 9, 3, 1, 4, 7, 7, 0],
        &[0, 9, 4, 1, 4, 8, 8, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
    ];
    let img = flatten(&rows);

    let mut ps = Persistence::new(img, 8, 5).unwrap();
    ps.sort();
    let traj = ps.trajectories();

    assert_eq!(traj.len(), 3);
    assert_eq!(traj[0][0].size, 36);
    assert_eq!(traj[0][0].max, 9);
    assert_eq!(traj[0].last().unwrap().size, 8);

    // A second trajectory is born mid-sequence (step 3).
    assert!(traj.iter().any(|t| t[0].step == 3));
}

#[test]
fn single_split_event_under_five_steps() {
    let rows: Vec<&[i64]> = vec![
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 6, 1, 6, 1, 7, 6, 0],
        &[0, 6, 1, 6, 1, 7, 6, 0],
        &[0, 6, 1, 5, 1, 1, 6, 0],
        &[0, 6, 1, 6, 1, 1, 4, 0],
        &[0, 6, 1, 6, 1, 1, 6, 0],
        &[0, 5, 5, 5, 5, 5, 5, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
    ];
    let img = flatten(&rows);

    let mut ps = Persistence::new(img, 8, 5).unwrap();
    ps.sort();
    let traj = ps.trajectories();

    assert_eq!(traj.len(), 2);
    assert_eq!(traj[0][0].max, 7);
    assert_eq!(traj[0][0].size, 36);
}
