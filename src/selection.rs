//! Checkbox selection derivation for the distinct-foreground toggle
//!
//! When the UI flips the "distinct foreground" toggle, the two checklist
//! selections are re-seeded from each other. The original host did this by
//! mutating checkbox state in place; here it is a pure function over the
//! old selections so both UI layers and tests share one behavior.

/// Derive the (background, foreground) selections after toggling distinct
///
/// Switching *to* distinct keeps the background selection and seeds the
/// foreground checklist from the background when it has nothing checked.
/// Switching *away* collapses both sides to their order-preserving union
/// (background order first, then unseen foreground entries), which is what
/// the single combined checklist then drives.
pub fn derive_selection(
    background: &[String],
    foreground: &[String],
    distinct: bool,
) -> (Vec<String>, Vec<String>) {
    if distinct {
        let seeded = if foreground.is_empty() {
            background.to_vec()
        } else {
            foreground.to_vec()
        };
        (background.to_vec(), seeded)
    } else {
        let mut combined = background.to_vec();
        for group in foreground {
            if !combined.contains(group) {
                combined.push(group.clone());
            }
        }
        (combined.clone(), combined)
    }
}
