//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use sortanim_protocol::{Color, RenderCommand, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 120);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:11px">"#,
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                label,
                ..
            } => {
                let fill = resolve_color(*color, dark);
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}">"#,
                    rect.x, rect.y, rect.w, rect.h,
                ));
                if let Some(label) = label {
                    svg.push_str(&format!("<title>{}</title>", escape_xml(label)));
                }
                svg.push_str("</rect>");
            }
            RenderCommand::DrawPolygon { points, color } => {
                let fill = resolve_color(*color, dark);
                let coords: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                svg.push_str(&format!(
                    r#"<polygon points="{}" fill="{fill}"/>"#,
                    coords.join(" "),
                ));
            }
            RenderCommand::BeginGroup { id } => {
                svg.push_str(&format!(r#"<g id="{}">"#, escape_xml(id)));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Fill color for a token. Bar colors are the same in both palettes.
pub fn palette_color(token: ThemeToken, dark: bool) -> Color {
    match token {
        ThemeToken::Bar => Color::rgb8(177, 186, 177),
        ThemeToken::BarHighlight => Color::rgb8(75, 104, 189),
        ThemeToken::BarSorted => Color::rgb8(26, 173, 28),
        ThemeToken::Background if dark => Color::rgb8(26, 26, 46),
        ThemeToken::Background => Color::rgb8(255, 255, 255),
    }
}

fn resolve_color(token: ThemeToken, dark: bool) -> String {
    palette_color(token, dark).to_hex()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::bars::{BarLayout, render_bars};
    use sortanim_protocol::{FrameId, FrameState, Point, Rect};

    #[test]
    fn basic_svg_output() {
        let commands = vec![RenderCommand::DrawRect {
            rect: Rect::new(10.0, 20.0, 100.0, 18.0),
            color: ThemeToken::BarSorted,
            label: Some("42".into()),
            index: Some(0),
        }];
        let svg = render_svg(&commands, 800.0, 400.0, true);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("<title>42</title>"));
        assert!(svg.contains("#1aad1c"));
    }

    #[test]
    fn polygon_points_are_listed() {
        let commands = vec![RenderCommand::DrawPolygon {
            points: vec![Point::new(0.0, 10.0), Point::new(5.0, 10.0), Point::new(2.5, 0.0)],
            color: ThemeToken::BarHighlight,
        }];
        let svg = render_svg(&commands, 10.0, 10.0, false);
        assert!(svg.contains(r#"points="0,10 5,10 2.5,0""#));
        assert!(svg.contains("#4b68bd"));
    }

    #[test]
    fn background_follows_palette() {
        let frame = FrameState::new(&[1.0], 1.0);
        let commands = render_bars(FrameId::FIRST, &frame, &BarLayout::default());
        assert!(render_svg(&commands, 1920.0, 1080.0, false).contains("#ffffff"));
        assert!(render_svg(&commands, 1920.0, 1080.0, true).contains("#1a1a2e"));
        assert!(render_svg(&commands, 1920.0, 1080.0, false).contains(r#"<g id="frame-1">"#));
    }

    #[test]
    fn escapes_xml_entities() {
        let commands = vec![RenderCommand::BeginGroup {
            id: "a<b & c".into(),
        }];
        let svg = render_svg(&commands, 400.0, 100.0, false);
        assert!(svg.contains(r#"<g id="a&lt;b &amp; c">"#));
    }
}
