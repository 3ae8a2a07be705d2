// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SVG rendering for a computed tree layout.
//!
//! Paint order matches the original canvas surface: edge lines first, then
//! arrowheads, then node tokens, then name labels, so tokens always sit on
//! top of the lines that meet them.

use std::fmt::{self, Write as _};

use crate::layout::{Color, TreeLayout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub background: Option<Color>,
    pub font_size: f32,
    pub stroke_width: f32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            background: Some(Color::rgb(0xff, 0xff, 0xff)),
            font_size: 14.0,
            stroke_width: 2.0,
        }
    }
}

const TOKEN_FILL: Color = Color::rgb(0xec, 0xef, 0xf1);
const TOKEN_STROKE: Color = Color::rgb(0x45, 0x5a, 0x64);
const LABEL_COLOR: Color = Color::rgb(0x26, 0x32, 0x38);

/// Renders one layout as a standalone SVG document.
///
/// Total: an empty layout renders an empty (but well-formed) document.
pub fn render_svg(layout: &TreeLayout, options: &SvgOptions) -> String {
    let mut out = String::new();
    render_into(&mut out, layout, options).expect("writing to a String cannot fail");
    out
}

fn render_into(out: &mut String, layout: &TreeLayout, options: &SvgOptions) -> fmt::Result {
    let width = layout.canvas_width().max(1.0);
    let height = layout.canvas_height().max(1.0);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width:.1} {height:.1}">"#
    )?;

    if let Some(background) = options.background {
        writeln!(
            out,
            r#"  <rect width="{width:.1}" height="{height:.1}" fill="{}"/>"#,
            background.hex()
        )?;
    }

    for edge in layout.edges() {
        writeln!(
            out,
            r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            edge.from.x,
            edge.from.y,
            edge.to.x,
            edge.to.y,
            edge.color.hex(),
            options.stroke_width
        )?;
    }

    for edge in layout.edges() {
        let Some(arrow) = edge.arrow else {
            continue;
        };
        writeln!(
            out,
            r#"  <polygon points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="{}"/>"#,
            arrow.tip.x,
            arrow.tip.y,
            arrow.left.x,
            arrow.left.y,
            arrow.right.x,
            arrow.right.y,
            edge.color.hex()
        )?;
    }

    for token in layout.tokens() {
        writeln!(
            out,
            r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            token.center.x,
            token.center.y,
            token.radius,
            TOKEN_FILL.hex(),
            TOKEN_STROKE.hex(),
            options.stroke_width
        )?;
    }

    for token in layout.tokens() {
        let label_y = token.center.y + token.radius + options.font_size + 4.0;
        writeln!(
            out,
            r#"  <text x="{:.1}" y="{label_y:.1}" font-size="{:.1}" text-anchor="middle" fill="{}">{}</text>"#,
            token.center.x,
            options.font_size,
            LABEL_COLOR.hex(),
            xml_escape(&token.label)
        )?;
    }

    out.push_str("</svg>\n");
    Ok(())
}

fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
