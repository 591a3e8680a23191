//! Single-open accordion planning.

/// Computes the expansion state after clicking question `clicked`.
///
/// Every question collapses, then the clicked one reopens only if it was
/// collapsed before the click. An out-of-range index leaves the state as is.
pub fn toggle_plan(expanded: &[bool], clicked: usize) -> Vec<bool> {
    let Some(&was_open) = expanded.get(clicked) else {
        return expanded.to_vec();
    };

    (0..expanded.len())
        .map(|i| i == clicked && !was_open)
        .collect()
}
