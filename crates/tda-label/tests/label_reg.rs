use tda_core::BBox;
use tda_label::Labeller;

fn mask_from_rows(rows: &[&str]) -> Vec<u8> {
    rows.iter().flat_map(|r| r.bytes().map(|b| if b == b'1' { 1 } else { 0 })).collect()
}

#[test]
fn four_components_with_diagonal_gaps() {
    let mask = mask_from_rows(&[
        "00000000",
        "01100100",
        "01110110",
        "00000000",
        "00111000",
        "00010000",
        "00011000",
        "00000000",
    ]);
    let la = Labeller::new(mask, 8, None).unwrap();
    assert_eq!(la.num_components(), 4);

    let mut sizes = la.sizes(None);
    sizes.sort_unstable();
    assert_eq!(sizes, vec![3, 5, 6, 50]);

    let boxes = la.bboxes(None);
    assert_eq!(boxes[0], BBox { min_x: 0, min_y: 0, max_x: 8, max_y: 8 });
}

#[test]
fn diagonal_chain_is_three_singleton_components() {
    let mask = mask_from_rows(&[
        "00000000",
        "01000100",
        "00100010",
        "00010000",
        "00001000",
        "00010000",
        "00100000",
        "00000000",
    ]);
    let la = Labeller::new(mask, 8, None).unwrap();
    assert_eq!(la.num_components(), 3);
    let mut sizes = la.sizes(None);
    sizes.sort_unstable();
    assert_eq!(sizes, vec![2, 6, 56]);
}

#[test]
fn only_border_touching_pixels_collapses_to_background() {
    // Every foreground pixel in this mask lies on the border, so
    // zeroing the border leaves nothing but background.
    let mask = mask_from_rows(&[
        "00110000",
        "00000000",
        "10000001",
        "10000001",
        "00000001",
        "00000000",
        "00000000",
        "00011000",
    ]);
    let la = Labeller::new(mask, 8, None).unwrap();
    assert_eq!(la.num_components(), 1);
    assert_eq!(la.sizes(None), vec![64]);
}

#[test]
fn s_shaped_strip_with_nested_component() {
    let mask = mask_from_rows(&[
        "00000000",
        "01010110",
        "01010110",
        "01010010",
        "01010000",
        "01010010",
        "01111110",
        "00000000",
    ]);
    let la = Labeller::new(mask, 8, None).unwrap();
    assert_eq!(la.num_components(), 3);
    let mut sizes = la.sizes(None);
    sizes.sort_unstable();
    assert_eq!(sizes, vec![5, 17, 42]);
}
