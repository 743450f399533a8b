use crate::framework::Cost;

/// Sums two non-negative costs without overflowing.
///
/// # Arguments
///
/// * `a`: First cost
/// * `b`: Second cost
///
/// returns: Cost
///
/// # Examples
///
/// ```
/// assert_eq!(linkstate::util::sum_cost(3, 4), 7);
/// assert_eq!(linkstate::util::sum_cost(i64::MAX, 1), i64::MAX);
/// ```
pub fn sum_cost(a: Cost, b: Cost) -> Cost {
    a.saturating_add(b)
}
