mod scaling;

#[doc(inline)]
pub use scaling::scale_height_to_target_width;
#[doc(inline)]
pub use scaling::scale_width_to_target_height;
