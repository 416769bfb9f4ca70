use std::ops::RangeInclusive;

use rand::Rng;
use rowfit::io::ext_repr::{ExtContainer, ExtInstance, ExtItem};

/// US letter page minus quarter inch margins, at 96 dpi
pub const PAGE_CONTAINER: ExtContainer = ExtContainer {
    width: 768.0,
    height: 1008.0,
    gap: 5.0,
};

pub const PHOTO_WIDTH_RANGE: RangeInclusive<u32> = 800..=1600;
pub const PHOTO_HEIGHT_RANGE: RangeInclusive<u32> = 600..=1200;

/// Generates an instance of `n_items` photo-like items with random dimensions, to be laid out on a single page
pub fn random_instance(n_items: usize, rng: &mut impl Rng) -> ExtInstance {
    let items = (0..n_items)
        .map(|i| ExtItem {
            key: format!("photo-{}", i + 1),
            width: rng.random_range(PHOTO_WIDTH_RANGE) as f64,
            height: rng.random_range(PHOTO_HEIGHT_RANGE) as f64,
            featured: false,
            flexible_aspect_ratio: false,
            row_span: None,
            min_width: None,
            min_height: None,
            maximize_width: None,
        })
        .collect();

    ExtInstance {
        name: format!("random_{n_items}"),
        container: PAGE_CONTAINER,
        items,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use rowfit::io::import::import_instance;
    use test_case::test_case;

    use super::*;

    #[test_case(0; "empty")]
    #[test_case(1; "single")]
    #[test_case(25; "many")]
    fn generates_valid_instances(n_items: usize) {
        let mut rng = SmallRng::seed_from_u64(0);
        let instance = random_instance(n_items, &mut rng);
        assert_eq!(instance.items.len(), n_items);
        for item in &instance.items {
            assert!(PHOTO_WIDTH_RANGE.contains(&(item.width as u32)));
            assert!(PHOTO_HEIGHT_RANGE.contains(&(item.height as u32)));
        }
        let (items, options) = import_instance(&instance).unwrap();
        assert_eq!(items.len(), n_items);
        assert_eq!(options.container_width, 768.0);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = random_instance(10, &mut SmallRng::seed_from_u64(3));
        let b = random_instance(10, &mut SmallRng::seed_from_u64(3));
        let dims = |i: &ExtInstance| i.items.iter().map(|it| (it.width, it.height)).collect::<Vec<_>>();
        assert_eq!(dims(&a), dims(&b));
    }
}
