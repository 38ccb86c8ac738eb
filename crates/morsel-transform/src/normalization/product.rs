//! Product name matching.

/// Trims and lower-cases a product cell for comparison.
pub fn normalize_product(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when `raw` names the target product. `target` must already be
/// normalized with [`normalize_product`].
pub fn is_target_product(raw: &str, target: &str) -> bool {
    normalize_product(raw) == target
}

#[cfg(test)]
mod tests {
    use super::*;
    use morsel_model::TARGET_PRODUCT;

    #[test]
    fn matches_ignoring_case_and_padding() {
        for raw in ["Pink Morsel", " pink morsel ", "PINK MORSEL", "\tPink morsel\n"] {
            assert!(is_target_product(raw, TARGET_PRODUCT), "{raw:?}");
        }
    }

    #[test]
    fn rejects_near_misses() {
        for raw in ["pink morsels", "pinkmorsel", "pink  morsel", "gold morsel", ""] {
            assert!(!is_target_product(raw, TARGET_PRODUCT), "{raw:?}");
        }
    }
}
