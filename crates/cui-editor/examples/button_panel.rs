//! Scripted editing session: build a small shop panel, drag and resize it
//! with synthetic pointer events, then print the generated CUI source and
//! the saved project JSON.
//!
//! Run with `RUST_LOG=debug` to watch the gesture transitions.

use cui_core::anchors::RectTransform;
use cui_core::emitter::emit_document;
use cui_core::geometry::Vec2;
use cui_core::model::{Canvas, Element, ElementKind};
use cui_core::project;
use cui_editor::{EditorSession, PointerEvent};

fn main() {
    env_logger::init();

    let mut canvas = Canvas::new(1282.0, 722.0);
    let root = canvas.root;

    let mut panel = Element::new(ElementKind::Panel);
    panel.transform = RectTransform::new(
        Vec2::new(0.3, 0.3),
        Vec2::new(0.7, 0.7),
        Vec2::ZERO,
        Vec2::ZERO,
    );
    let panel_idx = canvas.add_element(root, panel);

    let mut button = Element::new(ElementKind::Button);
    button.button.as_mut().unwrap().command = Some("shop.open".into());
    button.text.as_mut().unwrap().text = "Open Shop".into();
    canvas.add_element(panel_idx, button);

    let mut session = EditorSession::new();

    // Click inside the panel (but outside the button), drag it 40px right.
    let events = [
        PointerEvent::Down { x: 420.0, y: 250.0 },
        PointerEvent::Move { x: 440.0, y: 250.0 },
        PointerEvent::Move { x: 460.0, y: 250.0 },
        PointerEvent::Up,
    ];
    for event in events {
        session.handle(&mut canvas, event);
    }

    // Grab the panel's bottom-right offset handle and widen it.
    let corner = canvas.resolved_rect(panel_idx).corners()[3];
    let events = [
        PointerEvent::Down { x: corner.x, y: corner.y },
        PointerEvent::Move { x: corner.x + 120.0, y: corner.y + 60.0 },
        PointerEvent::Up,
    ];
    for event in events {
        session.handle(&mut canvas, event);
    }

    println!("// generated CUI source");
    println!("{}", emit_document(&canvas));

    match project::to_json("shop_ui", &canvas) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("save failed: {e}"),
    }
}
