//! Emitter: element tree → CUI plugin source (C#).
//!
//! Produces the `container.Add(...)` block per element that an Oxide
//! plugin pastes into its UI builder, parents before children. The
//! transform is emitted from its wire strings, so generated code and
//! saved projects agree byte-for-byte on anchors and offsets.

use crate::components::{ButtonComponent, ImageComponent, TextComponent};
use crate::model::{Canvas, Element, ElementKind};
use crate::wire;
use petgraph::graph::NodeIndex;
use std::fmt::Write;

/// Name the game client gives the root UI layer; elements parented to the
/// canvas attach there.
pub const ROOT_LAYER: &str = "Overlay";

/// Emit the whole document as CUI C# source.
#[must_use]
pub fn emit_document(canvas: &Canvas) -> String {
    let mut out = String::with_capacity(1024);
    for child in canvas.children(canvas.root) {
        emit_element(&mut out, canvas, child);
    }
    out
}

fn emit_element(out: &mut String, canvas: &Canvas, idx: NodeIndex) {
    let element = &canvas.graph[idx];
    let parent_name = match canvas.parent(idx) {
        Some(parent) if parent != canvas.root => canvas.graph[parent].id.to_string(),
        _ => ROOT_LAYER.to_string(),
    };

    match element.kind {
        ElementKind::Panel => emit_panel(out, element, &parent_name),
        ElementKind::Button => emit_button(out, element, &parent_name),
        ElementKind::Label => emit_label(out, element, &parent_name),
        ElementKind::Root => return,
    }

    for child in canvas.children(idx) {
        emit_element(out, canvas, child);
    }
}

fn emit_panel(out: &mut String, element: &Element, parent: &str) {
    writeln!(out, "container.Add(new CuiPanel").unwrap();
    writeln!(out, "{{").unwrap();
    writeln!(out, "    CursorEnabled = false,").unwrap();
    match &element.image {
        Some(image) if image.png.is_some() => {
            // Server-side image library lookup replaces the plain image.
            writeln!(out, "    Image = null,").unwrap();
            writeln!(
                out,
                "    RawImage = new CuiRawImageComponent {{ Png = ImageLibrary.Instance.GetImage(\"{}\") }},",
                image.png.as_deref().unwrap_or_default()
            )
            .unwrap();
        }
        Some(image) => {
            writeln!(
                out,
                "    Image = new CuiImageComponent {{ {} }},",
                image_props(image)
            )
            .unwrap();
        }
        None => {}
    }
    writeln!(out, "    RectTransform = {}", transform_props(element)).unwrap();
    writeln!(out, "}}, \"{parent}\", \"{}\");", element.id).unwrap();
    out.push('\n');
}

fn emit_button(out: &mut String, element: &Element, parent: &str) {
    writeln!(out, "container.Add(new CuiButton").unwrap();
    writeln!(out, "{{").unwrap();
    if let Some(button) = &element.button {
        writeln!(out, "    Button = {{ {} }},", button_props(button)).unwrap();
    }
    writeln!(out, "    RectTransform = {},", transform_props(element)).unwrap();
    if let Some(text) = &element.text {
        writeln!(out, "    Text = {{ {} }}", text_props(text)).unwrap();
    }
    writeln!(out, "}}, \"{parent}\", \"{}\");", element.id).unwrap();
    out.push('\n');
}

fn emit_label(out: &mut String, element: &Element, parent: &str) {
    writeln!(out, "container.Add(new CuiLabel").unwrap();
    writeln!(out, "{{").unwrap();
    if let Some(text) = &element.text {
        writeln!(out, "    Text = {{ {} }},", text_props(text)).unwrap();
    }
    writeln!(out, "    RectTransform = {}", transform_props(element)).unwrap();
    writeln!(out, "}}, \"{parent}\", \"{}\");", element.id).unwrap();
    out.push('\n');
}

fn transform_props(element: &Element) -> String {
    let t = &element.transform;
    format!(
        "{{ AnchorMin = \"{}\", AnchorMax = \"{}\", OffsetMin = \"{}\", OffsetMax = \"{}\" }}",
        wire::format_vec2(t.anchor_min),
        wire::format_vec2(t.anchor_max),
        wire::format_vec2(t.offset_min),
        wire::format_vec2(t.offset_max),
    )
}

fn text_props(text: &TextComponent) -> String {
    [
        format!("FadeIn = {}", format_num(text.fade_in)),
        format!("Color = \"{}\"", wire::format_color(text.color)),
        format!("Text = \"{}\"", text.text),
        format!("FontSize = {}", text.font_size),
        format!("Font = \"{}\"", text.font.as_str()),
        format!("Align = TextAnchor.{}", text.align.as_str()),
        format!(
            "VerticalOverflow = VerticalWrapMode.{}",
            text.vertical_overflow.as_str()
        ),
    ]
    .join(", ")
}

fn image_props(image: &ImageComponent) -> String {
    let mut props = vec![format!("Color = \"{}\"", wire::format_color(image.color))];
    if let Some(sprite) = &image.sprite {
        props.push(format!("Sprite = \"{sprite}\""));
    }
    if let Some(material) = &image.material {
        props.push(format!("Material = \"{material}\""));
    }
    if let Some(image_type) = image.image_type {
        props.push(format!(
            "ImageType = UnityEngine.UI.Image.Type.{}",
            image_type.as_str()
        ));
    }
    if let Some(fade_in) = image.fade_in {
        props.push(format!("FadeIn = {}", format_num(fade_in)));
    }
    props.join(", ")
}

fn button_props(button: &ButtonComponent) -> String {
    let mut props = Vec::new();
    if let Some(command) = &button.command {
        props.push(format!("Command = \"{command}\""));
    }
    if let Some(close) = &button.close {
        props.push(format!("Close = \"{close}\""));
    }
    props.push(format!("Color = \"{}\"", wire::format_color(button.color)));
    if let Some(sprite) = &button.sprite {
        props.push(format!("Sprite = \"{sprite}\""));
    }
    if let Some(material) = &button.material {
        props.push(format!("Material = \"{material}\""));
    }
    if let Some(fade_in) = button.fade_in {
        props.push(format!("FadeIn = {}", format_num(fade_in)));
    }
    props.join(", ")
}

fn format_num(n: f32) -> String {
    if n == n.floor() {
        format!("{}", n as i32)
    } else {
        format!("{n:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ElementId;
    use pretty_assertions::assert_eq;

    fn element_with_id(kind: ElementKind, raw: u64) -> Element {
        Element::with_id(kind, ElementId::from_raw(raw))
    }

    #[test]
    fn emits_label_with_defaults() {
        let mut canvas = Canvas::new(1282.0, 722.0);
        let root = canvas.root;
        let mut label = element_with_id(ElementKind::Label, 42);
        label.text.as_mut().unwrap().text = "Hello".into();
        canvas.add_element(root, label);

        let expected = "\
container.Add(new CuiLabel
{
    Text = { FadeIn = 0, Color = \"0 0 0 1\", Text = \"Hello\", FontSize = 14, Font = \"robotocondensed-regular.ttf\", Align = TextAnchor.UpperCenter, VerticalOverflow = VerticalWrapMode.Truncate },
    RectTransform = { AnchorMin = \"0.1 0.1\", AnchorMax = \"0.2 0.2\", OffsetMin = \"10 10\", OffsetMax = \"-10 -10\" }
}, \"Overlay\", \"42\");

";
        assert_eq!(emit_document(&canvas), expected);
    }

    #[test]
    fn emits_children_under_their_parent_name() {
        let mut canvas = Canvas::new(1282.0, 722.0);
        let root = canvas.root;
        let panel = canvas.add_element(root, element_with_id(ElementKind::Panel, 7));
        canvas.add_element(panel, element_with_id(ElementKind::Label, 8));

        let code = emit_document(&canvas);
        assert!(code.contains("}, \"Overlay\", \"7\");"));
        assert!(code.contains("}, \"7\", \"8\");"));
        // Parent block comes first
        assert!(code.find("\"7\");").unwrap() < code.find("\"8\");").unwrap());
    }

    #[test]
    fn panel_with_png_uses_image_library() {
        let mut canvas = Canvas::new(1282.0, 722.0);
        let root = canvas.root;
        let mut panel = element_with_id(ElementKind::Panel, 9);
        panel.image.as_mut().unwrap().png = Some("bg_main".into());
        canvas.add_element(root, panel);

        let code = emit_document(&canvas);
        assert!(code.contains("Image = null,"));
        assert!(code.contains("ImageLibrary.Instance.GetImage(\"bg_main\")"));
    }

    #[test]
    fn button_emits_command_and_close() {
        let mut canvas = Canvas::new(1282.0, 722.0);
        let root = canvas.root;
        let mut button = element_with_id(ElementKind::Button, 3);
        {
            let b = button.button.as_mut().unwrap();
            b.command = Some("shop.open".into());
            b.close = Some("main_menu".into());
        }
        canvas.add_element(root, button);

        let code = emit_document(&canvas);
        assert!(code.contains("Button = { Command = \"shop.open\", Close = \"main_menu\", Color = \"0 0 0 0\" },"));
        assert!(code.contains("Text = {"));
    }

    #[test]
    fn format_num_trims() {
        assert_eq!(format_num(0.0), "0");
        assert_eq!(format_num(2.0), "2");
        assert_eq!(format_num(0.25), "0.25");
        assert_eq!(format_num(0.5), "0.5");
    }
}
