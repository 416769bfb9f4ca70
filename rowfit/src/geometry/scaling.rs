/// Returns the width of a `width` x `height` rectangle after scaling it (aspect ratio preserved) to `target_height`.
#[inline(always)]
pub fn scale_width_to_target_height(width: f64, height: f64, target_height: f64) -> f64 {
    debug_assert!(width.is_finite() && height.is_finite() && target_height.is_finite());
    debug_assert!(height > 0.0, "height must be positive: {height}");
    if height == target_height {
        return width;
    }
    target_height * (width / height)
}

/// Returns the height of a `width` x `height` rectangle after scaling it (aspect ratio preserved) to `target_width`.
#[inline(always)]
pub fn scale_height_to_target_width(width: f64, height: f64, target_width: f64) -> f64 {
    debug_assert!(width.is_finite() && height.is_finite() && target_width.is_finite());
    debug_assert!(width > 0.0, "width must be positive: {width}");
    if width == target_width {
        return height;
    }
    target_width * (height / width)
}
