// Host-side tests for magnetic and ripple geometry.

use glam::Vec2;
use page_fx::core::pointer::{center_offset, px, translate_css};
use page_fx::core::{magnetic_offset, ripple_box, Rect};

#[test]
fn magnetic_offset_is_zero_at_center() {
    let rect = Rect::new(100.0, 50.0, 200.0, 40.0);
    assert_eq!(magnetic_offset(rect.center(), rect, 20.0), Vec2::ZERO);
}

#[test]
fn magnetic_offset_is_damped_pointer_offset() {
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    let pointer = Vec2::new(90.0, 5.0);
    assert_eq!(center_offset(pointer, rect), Vec2::new(40.0, -20.0));
    assert_eq!(magnetic_offset(pointer, rect, 20.0), Vec2::new(2.0, -1.0));
    assert_eq!(magnetic_offset(pointer, rect, 10.0), Vec2::new(4.0, -2.0));
}

#[test]
fn non_positive_damping_disables_pull() {
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert_eq!(magnetic_offset(Vec2::new(0.0, 0.0), rect, 0.0), Vec2::ZERO);
    assert_eq!(magnetic_offset(Vec2::new(0.0, 0.0), rect, -5.0), Vec2::ZERO);
}

#[test]
fn ripple_is_square_and_centered_on_click() {
    let rect = Rect::new(20.0, 30.0, 120.0, 40.0);
    let click = Vec2::new(50.0, 45.0);
    let b = ripple_box(click, rect);
    assert_eq!(b.size, 120.0);
    assert_eq!(b.left, 30.0 - 60.0);
    assert_eq!(b.top, 15.0 - 60.0);
    assert_eq!(b.center(), click - Vec2::new(rect.left, rect.top));
}

#[test]
fn ripple_uses_taller_side() {
    let b = ripple_box(Vec2::new(10.0, 10.0), Rect::new(0.0, 0.0, 30.0, 90.0));
    assert_eq!(b.size, 90.0);
}

#[test]
fn css_formatting() {
    assert_eq!(translate_css(Vec2::new(2.0, -1.5)), "translate(2px, -1.5px)");
    assert_eq!(px(12.0), "12px");
}
