use std::collections::HashSet;

/// Union of two manager id sets without duplicates.
///
/// The order of the result is unspecified.
///
/// # Examples
/// ```
/// use service::company::merge::merge_manager_ids;
/// let mut merged = merge_manager_ids(&[2, 3], &[1, 2]);
/// merged.sort();
/// assert_eq!(merged, vec![1, 2, 3]);
/// ```
pub fn merge_manager_ids(existing: &[i64], additional: &[i64]) -> Vec<i64> {
    let merged: HashSet<i64> = existing.iter().chain(additional.iter()).copied().collect();
    merged.into_iter().collect()
}
