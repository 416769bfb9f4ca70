use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{Layout, LayoutItem};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

pub fn layout_to_svg<T: LayoutItem>(
    layout: &Layout<T>,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let (width, height) = (layout.width, layout.height);
    let margin = 0.05 * f64::max(width, height);
    let stroke_width = f64::min(width, height) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f64::min(width, height) * 0.025;

    let label = {
        //print some information above the left top of the container
        let label_content = format!(
            "width: {:.3} | height: {:.3} | rows: {} | fill: {:.3}% | {}",
            width,
            height,
            layout.rows.len(),
            layout.fill_ratio() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw container
    let container_group = Group::new()
        .set("id", "container")
        .add(svg_util::rect(
            0.0,
            0.0,
            width,
            height,
            &[
                ("fill", &*format!("{}", theme.container_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!("container, width: {width:.3}, height: {height:.3}")));

    //draw rows and their cells
    let mut rows_group = Group::new().set("id", "rows");
    for (row_idx, (row, cells)) in layout.iter_rows().enumerate() {
        let mut row_group = Group::new().set("id", format!("row_{}", row_idx + 1));
        if options.highlight_rows {
            row_group = row_group.add(svg_util::rect(
                0.0,
                row.top,
                row.width,
                row.height,
                &[
                    ("fill", "none"),
                    ("stroke", "black"),
                    ("stroke-opacity", "0.5"),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                ],
            ));
        }
        for cell in cells {
            let item = cell.item;
            let fill = match (item.featured(), item.flexible_aspect_ratio()) {
                (true, _) => theme.featured_fill,
                (false, true) => theme.flexible_fill,
                (false, false) => theme.item_fill,
            };
            let stroke = svg_util::change_brightness(fill, 0.5);
            let mut cell_group = Group::new()
                .set("id", format!("cell_{}_{}", cell.row, cell.order))
                .add(svg_util::rect(
                    cell.left,
                    cell.top,
                    cell.width,
                    cell.height,
                    &[
                        ("fill", &*format!("{fill}")),
                        ("fill-opacity", "0.8"),
                        ("stroke", &*format!("{stroke}")),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!(
                    "item: {}, row: {}, order: {}, size: {:.0}x{:.0}",
                    item.key(),
                    cell.row,
                    cell.order,
                    cell.width,
                    cell.height
                )));
            if options.draw_keys {
                cell_group = cell_group.add(
                    Text::new(item.key().to_string())
                        .set("x", cell.left + 0.5 * cell.width)
                        .set("y", cell.top + 0.5 * cell.height)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle")
                        .set("font-size", 0.75 * font_size)
                        .set("font-family", "monospace"),
                );
            }
            row_group = row_group.add(cell_group);
        }
        rows_group = rows_group.add(row_group);
    }

    let vbox_svg = (-margin, -margin, width + 2.0 * margin, height + 2.0 * margin);

    Document::new()
        .set("viewBox", vbox_svg)
        .add(container_group)
        .add(rows_group)
        .add(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_layout;
    use crate::entities::{Item, LayoutOptions};

    #[test]
    fn renders_every_cell() {
        let items = [
            Item::new("1", 800.0, 600.0).with_featured(true),
            Item::new("2", 1024.0, 768.0),
            Item::new("3", 500.0, 500.0).with_flexible(true),
        ];
        let layout = build_layout(&items, &LayoutOptions::new(800.0, 1600.0, 5.0)).unwrap();
        let svg = layout_to_svg(&layout, SvgDrawOptions::default(), "test").to_string();
        for cell in &layout.cells {
            assert!(svg.contains(&format!("cell_{}_{}", cell.row, cell.order)));
            assert!(svg.contains(&format!("item: {}", cell.item.key)));
        }
    }
}
