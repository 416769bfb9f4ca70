use crate::entities::{Layout, LayoutItem};
use crate::io::ext_repr::{ExtCell, ExtLayout, ExtRow};

/// Converts a layout into its external representation
pub fn export_layout<T: LayoutItem>(layout: &Layout<T>) -> ExtLayout {
    let rows = layout
        .iter_rows()
        .map(|(row, cells)| ExtRow {
            width: row.width,
            height: row.height,
            top: row.top,
            cells: cells
                .iter()
                .map(|c| ExtCell {
                    key: c.item.key().to_string(),
                    row: c.row,
                    order: c.order,
                    width: c.width,
                    height: c.height,
                    left: c.left,
                    top: c.top,
                })
                .collect(),
        })
        .collect();

    ExtLayout {
        width: layout.width,
        height: layout.height,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_layout;
    use crate::entities::{Item, LayoutOptions};

    #[test]
    fn export_sample() {
        let items = [
            Item::new("1", 800.0, 600.0),
            Item::new("2", 1024.0, 768.0),
            Item::new("3", 500.0, 500.0),
        ];
        let layout = build_layout(&items, &LayoutOptions::new(800.0, 812.0, 5.0)).unwrap();
        let ext = export_layout(&layout);

        assert_eq!((ext.width, ext.height), (800.0, 812.0));
        assert_eq!(ext.rows.len(), 2);
        let keys = ext.rows[0].cells.iter().map(|c| c.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, ["1", "2"]);
        assert_eq!(ext.rows[1].cells[0].key, "3");
        assert_eq!(ext.rows[1].cells[0].row, 2);
    }
}
