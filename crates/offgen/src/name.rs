//! Identifier normalization for generated C++ code.

/// Convert an identifier into a token-safe form.
///
/// Every `::`, space and `-` becomes `_`; everything else is kept as is.
pub fn normalize_name(name: &str) -> String {
    name.replace("::", "_").replace([' ', '-'], "_")
}
