// Mon Oct 12 2026 - Alex

/// Number of complete windows of `window` items that fit in `total` items.
///
/// Returns 0 when the window is longer than the input instead of wrapping.
pub fn window_count(total: usize, window: usize) -> usize {
    match total.checked_sub(window) {
        Some(rest) => rest + 1,
        None => 0,
    }
}

/// Window start positions `0, step, 2 * step, ...` for which the whole window
/// fits inside `total`.
///
/// `step` must be non-zero; callers validate it before building the range.
pub fn window_starts(total: usize, window: usize, step: usize) -> impl Iterator<Item = usize> {
    debug_assert!(step > 0);
    (0..window_count(total, window)).step_by(step.max(1))
}
