mod item;
mod layout;
mod options;

#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use item::LayoutItem;
#[doc(inline)]
pub use layout::Cell;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use layout::Row;
#[doc(inline)]
pub use options::LayoutOptions;
