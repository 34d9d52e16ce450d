//! Static SVG rendering of a [`Scene`].
//!
//! Hover behaviour degrades to a `<title>` per cell, which viewers show as
//! a native tooltip. The toggle button has no static counterpart; the
//! status label is drawn above the grid.

use crate::format::fmt_coord;
use crate::scene::{
    axis_domain_path, tick_label_offset, Axis, AxisOrient, Cell, Legend, Scene, LINE_KEY_WIDTH,
    TICK_SIZE,
};
use std::fmt::Write;

/// Escape text for use in XML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole scene as a standalone SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_scene(&mut out, scene);
    out
}

fn write_scene(out: &mut String, scene: &Scene) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{id}-svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="10">"#,
        id = escape(&scene.container_id),
        w = fmt_coord(scene.width),
        h = fmt_coord(scene.height),
    )?;
    if let Some(controls) = &scene.controls {
        writeln!(
            out,
            r#"<text class="toggle-label" x="{}" y="20" font-size="16" font-weight="bold">{}</text>"#,
            fmt_coord(scene.margin.left),
            escape(&controls.status)
        )?;
    }
    writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        fmt_coord(scene.margin.left),
        fmt_coord(scene.margin.top)
    )?;
    write_axis(out, &scene.x_axis)?;
    write_axis(out, &scene.y_axis)?;
    writeln!(out, r#"<g class="cells">"#)?;
    for cell in &scene.cells {
        write_cell(out, cell)?;
    }
    writeln!(out, "</g>")?;
    write_legend(out, &scene.legend)?;
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

fn write_cell(out: &mut String, cell: &Cell) -> std::fmt::Result {
    write!(
        out,
        r#"<g class="cell" data-key="{}" transform="translate({},{})"><rect width="{}" height="{}""#,
        cell.key,
        fmt_coord(cell.rect.x),
        fmt_coord(cell.rect.y),
        fmt_coord(cell.rect.width),
        fmt_coord(cell.rect.height)
    )?;
    if let Some(fill) = cell.fill {
        write!(out, r#" fill="{}""#, fill.hex())?;
    }
    write!(out, "><title>{}</title></rect>", escape(&cell.tooltip.lines().join("\n")))?;
    for line in &cell.lines {
        write!(
            out,
            r#"<path class="line-{:?}" d="{}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
            line.series,
            line.d,
            line.stroke.hex()
        )?;
    }
    writeln!(out, "</g>")
}

fn write_axis(out: &mut String, axis: &Axis) -> std::fmt::Result {
    let class = match axis.orient {
        AxisOrient::Top => "axis-top",
        AxisOrient::Left => "axis-left",
        AxisOrient::Right => "axis-right",
    };
    writeln!(
        out,
        r#"<g class="axis {}" transform="translate({},{})" fill="none">"#,
        class,
        fmt_coord(axis.origin.x),
        fmt_coord(axis.origin.y)
    )?;
    writeln!(
        out,
        r#"<path class="domain" stroke="currentColor" d="{}"/>"#,
        axis_domain_path(axis)
    )?;
    let text_offset = tick_label_offset();
    for tick in &axis.ticks {
        let offset = fmt_coord(tick.offset);
        let label = escape(&tick.label);
        match axis.orient {
            AxisOrient::Top => writeln!(
                out,
                r#"<g class="tick" transform="translate({offset},0)"><line stroke="currentColor" y2="-{TICK_SIZE}"/><text fill="currentColor" y="-{text_offset}" text-anchor="middle">{label}</text></g>"#,
            )?,
            AxisOrient::Left => writeln!(
                out,
                r#"<g class="tick" transform="translate(0,{offset})"><line stroke="currentColor" x2="-{TICK_SIZE}"/><text fill="currentColor" x="-{text_offset}" dy="0.32em" text-anchor="end">{label}</text></g>"#,
            )?,
            AxisOrient::Right => writeln!(
                out,
                r#"<g class="tick" transform="translate(0,{offset})"><line stroke="currentColor" x2="{TICK_SIZE}"/><text fill="currentColor" x="{text_offset}" dy="0.32em" text-anchor="start">{label}</text></g>"#,
            )?,
        }
    }
    writeln!(out, "</g>")
}

fn write_legend(out: &mut String, legend: &Legend) -> std::fmt::Result {
    writeln!(
        out,
        r#"<g class="legend-group" transform="translate({},{})">"#,
        fmt_coord(legend.origin.x),
        fmt_coord(legend.origin.y)
    )?;
    for swatch in &legend.swatches {
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            fmt_coord(swatch.rect.x),
            fmt_coord(swatch.rect.y),
            fmt_coord(swatch.rect.width),
            fmt_coord(swatch.rect.height)
        )?;
        if let Some(fill) = swatch.fill {
            write!(out, r#" fill="{}""#, fill.hex())?;
        }
        writeln!(out, "/>")?;
    }
    write_axis(out, &legend.axis)?;
    for key in &legend.line_keys {
        writeln!(
            out,
            r#"<g class="line-key" transform="translate({},{})"><rect y="-2" width="{LINE_KEY_WIDTH}" height="3" fill="{}"/><text x="{}" dy="0.32em">{}</text></g>"#,
            fmt_coord(key.at.x),
            fmt_coord(key.at.y),
            key.color.hex(),
            fmt_coord(LINE_KEY_WIDTH + 4.0),
            escape(&key.label)
        )?;
    }
    writeln!(out, "</g>")
}
