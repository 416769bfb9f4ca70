use anyhow::Result;
use anyhow::ensure;

/// Anything that can be placed in a cell of a [`Layout`](crate::entities::Layout).
///
/// Implement this for your own content type to receive a layout whose cells reference your items directly.
pub trait LayoutItem {
    /// Stable identity of the item, unique within one layout call
    fn key(&self) -> &str;

    /// Natural width of the item
    fn width(&self) -> f64;

    /// Natural height of the item
    fn height(&self) -> f64;

    /// Requests a taller row for this item
    fn featured(&self) -> bool {
        false
    }

    /// Allows the width of the item to deviate from strict aspect ratio scaling within its row
    /// (typically text content rather than photographs)
    fn flexible_aspect_ratio(&self) -> bool {
        false
    }
}

/// Rectangular content item to be laid out.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub key: String,
    pub width: f64,
    pub height: f64,
    pub featured: bool,
    pub flexible_aspect_ratio: bool,
}

impl Item {
    /// Creates a new item, panics if the dimensions are not positive and finite.
    pub fn new(key: impl Into<String>, width: f64, height: f64) -> Self {
        Item::try_new(key, width, height).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(key: impl Into<String>, width: f64, height: f64) -> Result<Self> {
        let key = key.into();
        ensure!(
            width.is_finite() && width > 0.0,
            "invalid width for item {key}: {width}"
        );
        ensure!(
            height.is_finite() && height > 0.0,
            "invalid height for item {key}: {height}"
        );
        Ok(Item {
            key,
            width,
            height,
            featured: false,
            flexible_aspect_ratio: false,
        })
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_flexible(mut self, flexible_aspect_ratio: bool) -> Self {
        self.flexible_aspect_ratio = flexible_aspect_ratio;
        self
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl LayoutItem for Item {
    fn key(&self) -> &str {
        &self.key
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn flexible_aspect_ratio(&self) -> bool {
        self.flexible_aspect_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 100.0; "zero width")]
    #[test_case(100.0, -1.0; "negative height")]
    #[test_case(f64::NAN, 100.0; "nan width")]
    #[test_case(100.0, f64::INFINITY; "infinite height")]
    fn rejects_invalid_dimensions(width: f64, height: f64) {
        assert!(Item::try_new("a", width, height).is_err());
    }

    #[test]
    #[should_panic]
    fn new_panics_on_invalid_dimensions() {
        Item::new("a", 0.0, 10.0);
    }

    #[test]
    fn builder_flags() {
        let item = Item::new("text", 300.0, 200.0).with_flexible(true).with_featured(true);
        assert!(LayoutItem::flexible_aspect_ratio(&item));
        assert!(LayoutItem::featured(&item));
        assert_eq!(item.aspect_ratio(), 1.5);
    }
}
