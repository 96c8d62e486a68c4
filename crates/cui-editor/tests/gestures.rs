//! Integration tests: the full pointer-gesture loop against a live tree.

use cui_core::anchors::{Handle, RectTransform, ResizeMode};
use cui_core::geometry::{Rect, Vec2};
use cui_core::model::{Canvas, Element, ElementKind};
use cui_editor::{EditorSession, PointerEvent};

/// A 1000×500 canvas with one panel anchored (0.2, 0.2)–(0.6, 0.8) and
/// zero offsets, i.e. resolved rect (200, 100)–(600, 400).
fn one_panel() -> (Canvas, cui_core::NodeIndex) {
    let mut canvas = Canvas::new(1000.0, 500.0);
    let root = canvas.root;
    let mut panel = Element::new(ElementKind::Panel);
    panel.transform = RectTransform::new(
        Vec2::new(0.2, 0.2),
        Vec2::new(0.6, 0.8),
        Vec2::ZERO,
        Vec2::ZERO,
    );
    let idx = canvas.add_element(root, panel);
    (canvas, idx)
}

#[test]
fn click_selects_and_starts_dragging() {
    let (mut canvas, idx) = one_panel();
    let id = canvas.graph[idx].id;
    let mut session = EditorSession::new();

    session.pointer_down(&canvas, 300.0, 200.0);
    assert_eq!(session.selected, Some(id));
    assert!(session.dragging.is_some());
    assert!(session.resizing.is_none());

    session.pointer_move(&mut canvas, 315.0, 190.0);
    session.pointer_up();
    assert!(session.dragging.is_none());
}

#[test]
fn drag_then_deselect_moves_by_exact_delta() {
    let (mut canvas, idx) = one_panel();
    let mut session = EditorSession::new();
    let before = canvas.resolved_rect(idx);

    session.pointer_down(&canvas, 300.0, 200.0);
    session.pointer_move(&mut canvas, 315.0, 190.0);
    session.pointer_up();

    let after = canvas.resolved_rect(idx);
    assert_eq!(after, Rect::new(before.x + 15.0, before.y - 10.0, before.width, before.height));

    // Click empty canvas space: selection clears.
    session.pointer_down(&canvas, 950.0, 480.0);
    assert_eq!(session.selected, None);
    assert!(session.dragging.is_none());
}

#[test]
fn drag_is_delta_based_across_many_moves() {
    let (mut canvas, idx) = one_panel();
    let mut session = EditorSession::new();
    let before = canvas.resolved_rect(idx);

    session.pointer_down(&canvas, 250.0, 150.0);
    session.pointer_move(&mut canvas, 260.0, 150.0);
    session.pointer_move(&mut canvas, 255.0, 170.0);
    session.pointer_move(&mut canvas, 280.0, 165.0);
    session.pointer_up();

    // Net movement equals final minus initial pointer position.
    let after = canvas.resolved_rect(idx);
    assert!((after.x - (before.x + 30.0)).abs() < 1e-3);
    assert!((after.y - (before.y + 15.0)).abs() < 1e-3);
    assert_eq!(after.width, before.width);
}

#[test]
fn resize_gesture_binds_a_handle_and_keeps_selection() {
    let (mut canvas, idx) = one_panel();
    let id = canvas.graph[idx].id;
    let mut session = EditorSession::new();
    session.select(Some(id));

    // Press exactly on the element's bottom-right corner (anchor box
    // coincides, so the anchor handle wins).
    session.pointer_down(&canvas, 600.0, 400.0);
    let active = session.resizing.expect("handle should bind");
    assert_eq!(active.handle, Handle::BottomRight);
    assert_eq!(active.mode, ResizeMode::Anchor);
    assert_eq!(session.selected, Some(id));
    assert!(session.dragging.is_none());

    session.pointer_move(&mut canvas, 700.0, 450.0);
    let t = &canvas.graph[idx].transform;
    assert!((t.anchor_max.x - 0.7).abs() < 1e-3);
    assert!((t.anchor_max.y - 0.9).abs() < 1e-3);

    session.pointer_up();
    assert!(session.resizing.is_none());
    assert_eq!(session.selected, Some(id));
}

#[test]
fn offset_handle_resize_through_events() {
    let (mut canvas, idx) = one_panel();
    let id = canvas.graph[idx].id;
    // Diverge the element box from the anchor box so offset handles are
    // reachable.
    canvas.graph[idx].transform.offset_min = Vec2::new(40.0, 40.0);
    canvas.graph[idx].transform.offset_max = Vec2::new(40.0, 40.0);
    let mut session = EditorSession::new();
    session.select(Some(id));

    let corner = canvas.resolved_rect(idx).corners()[3];
    session.handle(&mut canvas, PointerEvent::Down { x: corner.x, y: corner.y });
    let active = session.resizing.expect("handle should bind");
    assert_eq!(active.mode, ResizeMode::Offset);

    session.handle(&mut canvas, PointerEvent::Move { x: 660.0, y: 430.0 });
    let t = &canvas.graph[idx].transform;
    // offset_max = local - anchor_max * parent_dim
    assert!((t.offset_max.x - (660.0 - 0.6 * 1000.0)).abs() < 1e-3);
    assert!((t.offset_max.y - (430.0 - 0.8 * 500.0)).abs() < 1e-3);

    session.handle(&mut canvas, PointerEvent::Up);
    assert!(session.resizing.is_none());
}

#[test]
fn disabled_mode_still_binds_but_never_mutates() {
    let (mut canvas, idx) = one_panel();
    let id = canvas.graph[idx].id;
    let mut session = EditorSession::new();
    session.disable_anchor = true;
    session.select(Some(id));

    session.pointer_down(&canvas, 600.0, 400.0);
    assert!(session.resizing.is_some());

    let before = canvas.graph[idx].transform.clone();
    session.pointer_move(&mut canvas, 700.0, 450.0);
    assert_eq!(canvas.graph[idx].transform, before);
}

#[test]
fn invisible_element_ignores_moves() {
    let (mut canvas, idx) = one_panel();
    let mut session = EditorSession::new();

    session.pointer_down(&canvas, 300.0, 200.0);
    assert!(session.dragging.is_some());

    canvas.graph[idx].visible = false;
    let before = canvas.graph[idx].transform.clone();
    session.pointer_move(&mut canvas, 400.0, 300.0);
    assert_eq!(canvas.graph[idx].transform, before);
}

#[test]
fn removed_element_mid_gesture_is_a_no_op() {
    let (mut canvas, idx) = one_panel();
    let mut session = EditorSession::new();

    session.pointer_down(&canvas, 300.0, 200.0);
    canvas.remove_subtree(idx);
    session.pointer_move(&mut canvas, 400.0, 300.0);
    session.pointer_up();
    assert!(session.dragging.is_none());
}

#[test]
fn pointer_up_is_idempotent() {
    let (canvas, _) = one_panel();
    let mut session = EditorSession::new();
    session.pointer_down(&canvas, 300.0, 200.0);
    session.pointer_up();
    session.pointer_up();
    assert!(session.dragging.is_none() && session.resizing.is_none());
    // Selection survives pointer-up.
    assert!(session.selected.is_some());
}

#[test]
fn selecting_another_element_replaces_the_selection() {
    let mut canvas = Canvas::new(1000.0, 500.0);
    let root = canvas.root;
    let mut left = Element::new(ElementKind::Panel);
    left.transform = RectTransform::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(0.3, 1.0),
        Vec2::ZERO,
        Vec2::ZERO,
    );
    let left_idx = canvas.add_element(root, left);
    let mut right = Element::new(ElementKind::Panel);
    right.transform = RectTransform::new(
        Vec2::new(0.7, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::ZERO,
        Vec2::ZERO,
    );
    let right_idx = canvas.add_element(root, right);

    let mut session = EditorSession::new();
    session.pointer_down(&canvas, 100.0, 250.0);
    assert_eq!(session.selected, Some(canvas.graph[left_idx].id));
    session.pointer_up();

    session.pointer_down(&canvas, 900.0, 250.0);
    assert_eq!(session.selected, Some(canvas.graph[right_idx].id));
    session.pointer_up();
}
