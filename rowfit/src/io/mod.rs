/// External (serializable) representations of instances and layouts
pub mod ext_repr;

/// Conversion of internal layouts into external representations
pub mod export;

/// Conversion of external instances into internal representations
pub mod import;

/// SVG rendering of layouts
pub mod svg;
