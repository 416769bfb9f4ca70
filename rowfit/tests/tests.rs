#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use rowfit::build_layout;
    use rowfit::entities::{Item, LayoutOptions};
    use rowfit::util::assertions;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    /// Random photo-like items, similar to what a user drops into a page
    fn random_items(rng: &mut SmallRng, n: usize, flexible_frac: f64, featured_frac: f64) -> Vec<Item> {
        (0..n)
            .map(|i| {
                let width = rng.random_range(800..=1600) as f64;
                let height = rng.random_range(600..=1200) as f64;
                Item::new(format!("item-{i}"), width, height)
                    .with_flexible(rng.random_bool(flexible_frac))
                    .with_featured(rng.random_bool(featured_frac))
            })
            .collect()
    }

    #[test]
    fn reference_sample() {
        init_logger();
        let items = [
            Item::new("1", 800.0, 600.0),
            Item::new("2", 1024.0, 768.0),
            Item::new("3", 500.0, 500.0),
        ];
        let options = LayoutOptions::new(800.0, 812.0, 5.0);
        let layout = build_layout(&items, &options).unwrap();

        assert_eq!((layout.width, layout.height), (800.0, 812.0));
        assert_eq!(layout.rows.len(), 2);

        let (row_1, row_2) = (&layout.rows[0], &layout.rows[1]);
        assert_eq!((row_1.height, row_1.width), (296.0, 795.0));
        assert_eq!((row_2.height, row_2.width), (500.0, 500.0));

        let cells = layout
            .cells
            .iter()
            .map(|c| (c.item.key.as_str(), c.row, c.order, c.width, c.height))
            .collect_vec();
        assert_eq!(
            cells,
            vec![
                ("1", 1, 1, 395.0, 296.0),
                ("2", 1, 2, 395.0, 296.0),
                ("3", 2, 1, 500.0, 500.0),
            ]
        );
        assert_eq!(layout.cells[1].left, 400.0);
        assert_eq!(layout.cells[2].top, 301.25);
    }

    #[test]
    fn empty_input() {
        let options = LayoutOptions::new(800.0, 812.0, 5.0);
        assert!(build_layout::<Item>(&[], &options).is_none());
    }

    #[test]
    fn infeasible_input() {
        //even a single row holding one item is taller than the container
        let items = [Item::new("tall", 100.0, 1000.0), Item::new("b", 100.0, 1000.0)];
        let options = LayoutOptions::new(800.0, 500.0, 5.0);
        assert!(build_layout(&items, &options).is_none());
    }

    #[test]
    fn single_item() {
        let items = [Item::new("only", 1200.0, 900.0)];
        let options = LayoutOptions::new(800.0, 1000.0, 5.0);
        let layout = build_layout(&items, &options).unwrap();
        assert_eq!(layout.rows.len(), 1);
        //scaled down to the container width minus one gap
        assert_eq!(layout.cells[0].width, 795.0);
        assert_eq!(layout.cells[0].height, 596.0);
    }

    #[test]
    fn featured_row_is_taller() {
        let plain = vec![Item::new("x", 800.0, 600.0); 6]
            .into_iter()
            .enumerate()
            .map(|(i, item)| Item {
                key: format!("photo-{i}"),
                ..item
            })
            .collect_vec();
        let mut featured = plain.clone();
        featured[0].featured = true;

        let options = LayoutOptions::new(800.0, 1000.0, 5.0);
        let plain_layout = build_layout(&plain, &options).unwrap();
        let featured_layout = build_layout(&featured, &options).unwrap();

        assert_eq!(plain_layout.rows.len(), 3);
        let plain_height = plain_layout.rows[plain_layout.cells[0].row - 1].height;
        let featured_height = featured_layout.rows[featured_layout.cells[0].row - 1].height;
        assert_eq!(plain_height, 296.0);
        assert!(featured_height >= plain_height);
        //the featured photo gets a row of its own
        assert_eq!(featured_layout.rows[0].cells.len(), 1);
    }

    #[test]
    fn flexible_items_absorb_free_width() {
        let items = [
            Item::new("photo", 800.0, 600.0),
            Item::new("text", 300.0, 200.0).with_flexible(true),
        ];
        let options = LayoutOptions::new(1200.0, 700.0, 5.0);
        let layout = build_layout(&items, &options).unwrap();
        assert_eq!(layout.rows.len(), 1);
        assert_eq!(layout.rows[0].height, 600.0);
        //the photo keeps its natural size, the text box takes the 100 units left unallocated
        assert_eq!(layout.cells[0].width, 800.0);
        assert_eq!(layout.cells[1].width, 400.0);
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(2; "seed 2")]
    #[test_case(3; "seed 3")]
    #[test_case(4; "seed 4")]
    fn random_instances_hold_invariants(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let options = LayoutOptions::new(768.0, 1008.0, 5.0);
        for n in 1..=12 {
            let items = random_items(&mut rng, n, 0.2, 0.1);
            let Some(layout) = build_layout(&items, &options) else {
                continue;
            };

            //order preservation
            assert!(assertions::layout_preserves_order(&items, &layout));
            assert!(layout.keys().eq(items.iter().map(|i| i.key.as_str())));

            //row contiguity
            assert!(assertions::rows_are_contiguous(&layout));
            assert!(layout.cells.iter().tuple_windows().all(|(a, b)| {
                (a.row == b.row && b.order == a.order + 1) || (b.row == a.row + 1 && b.order == 1)
            }));

            //height budget
            let total_height = layout.rows.iter().map(|r| r.height + options.gap).sum::<f64>() - options.gap;
            assert!(total_height <= options.container_height);
            assert!(assertions::layout_fits_height(&layout, options.gap));

            //all cells of a row share its height and top
            for (row, cells) in layout.iter_rows() {
                assert!(cells.iter().all(|c| c.height == row.height && c.top == row.top));
                assert!(cells.iter().all(|c| c.width >= 0.0 && c.left >= 0.0));
            }
        }
    }

    #[test]
    fn deterministic() {
        let mut rng = SmallRng::seed_from_u64(42);
        let items = random_items(&mut rng, 10, 0.3, 0.2);
        let options = LayoutOptions::new(768.0, 1008.0, 5.0);
        let first = build_layout(&items, &options).map(|l| l.rows);
        let second = build_layout(&items, &options).map(|l| l.rows);
        assert_eq!(first, second);
    }
}
