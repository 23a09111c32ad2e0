use dino_runner::collision::{has_collided, overlaps};
use dino_runner::entities::ColliderBox;

fn b(left: f64, top: f64, width: f64, height: f64) -> ColliderBox {
    ColliderBox::new(left, top, width, height)
}

#[test]
fn overlapping_boxes_collide() {
    assert!(overlaps(&b(0.0, 0.0, 10.0, 10.0), &b(5.0, 5.0, 10.0, 10.0)));
}

#[test]
fn disjoint_boxes_do_not_collide() {
    assert!(!overlaps(&b(0.0, 0.0, 10.0, 10.0), &b(20.0, 20.0, 10.0, 10.0)));
}

#[test]
fn shared_edge_is_not_a_collision() {
    assert!(!overlaps(&b(0.0, 0.0, 10.0, 10.0), &b(10.0, 0.0, 10.0, 10.0)));
    assert!(!overlaps(&b(0.0, 0.0, 10.0, 10.0), &b(0.0, 10.0, 10.0, 10.0)));
}

#[test]
fn containment_collides() {
    assert!(overlaps(&b(0.0, 0.0, 10.0, 10.0), &b(2.0, 2.0, 1.0, 1.0)));
}

#[test]
fn overlap_is_symmetric() {
    let cases = [
        (b(0.0, 0.0, 10.0, 10.0), b(5.0, 5.0, 10.0, 10.0)),
        (b(0.0, 0.0, 10.0, 10.0), b(20.0, 20.0, 10.0, 10.0)),
        (b(0.0, 0.0, 10.0, 10.0), b(10.0, 0.0, 10.0, 10.0)),
        (b(3.5, 1.0, 0.5, 4.0), b(0.0, 2.0, 4.0, 1.0)),
    ];
    for (x, y) in cases {
        assert_eq!(overlaps(&x, &y), overlaps(&y, &x));
    }
}

#[test]
fn any_pair_is_enough() {
    let player = [b(0.0, 0.0, 3.0, 1.0), b(0.0, 1.0, 3.0, 2.0)];
    let obstacles = [b(50.0, 0.0, 2.0, 2.0), b(2.0, 2.0, 2.0, 2.0)];
    assert!(has_collided(&player, &obstacles));
    assert!(has_collided(&obstacles, &player));
}

#[test]
fn empty_sets_never_collide() {
    let player = [b(0.0, 0.0, 3.0, 3.0)];
    assert!(!has_collided(&player, &[]));
    assert!(!has_collided(&[], &player));
}
