//! Shared sort/permutation utilities.
//!
//! These are not user-visible contracts in their own right, but several
//! algorithms in this workspace depend on their exact, stable behaviour:
//! the convex peel's polar sort (`argsort_f64` + `permute`), the
//! landscape's elementary-interval index (`sorted_dedup` +
//! `lower_bound`), and the labeller's dense renumbering (`min_max_i64`).
//! Grounded in `leptonica_core::pta::sort`'s `get_sort_index` /
//! `sort_by_index` split (`leptonica-core/src/pta/sort.rs`) and in the
//! original Go source's use of `gonum/floats.Argsort` and
//! `sort.SearchFloat64s` (`convex_peel.go`, `landscape.go`).

/// Return the permutation that would sort `values` ascending, using a
/// stable sort so that ties keep their original relative order — this
/// is what the original source's `floats.Argsort` and Go's `sort.Sort`
/// (itself not guaranteed stable, but relied upon as such via explicit
/// tie-breaking in every caller) amount to in practice.
pub fn argsort_f64(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    idx
}

/// Reorder `values` according to permutation `idx`, i.e. return
/// `[values[idx[0]], values[idx[1]], ...]`.
pub fn permute<T: Clone>(values: &[T], idx: &[usize]) -> Vec<T> {
    idx.iter().map(|&i| values[i].clone()).collect()
}

/// Smallest and largest values in a non-empty integer slice.
///
/// C equivalent: the `min(img), max(img)` scan over pixel intensities
/// performed when a persistence engine is constructed.
pub fn min_max_i64(values: &[i64]) -> Option<(i64, i64)> {
    let mut it = values.iter();
    let first = *it.next()?;
    let (mut lo, mut hi) = (first, first);
    for &v in it {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}

/// Sort `values` ascending and remove adjacent duplicates.
///
/// C equivalent: the dedup pass in `Landscape.init` in `landscape.go`,
/// which sorts the concatenation of births and deaths and then collapses
/// runs of equal values.
pub fn sorted_dedup_f64(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    v.dedup();
    v
}

/// The number of elements of `sorted` that are strictly less than
/// `target` (i.e. the leftmost insertion point for `target`).
///
/// C equivalent: `sort.SearchFloat64s` as used in `landscape.go`.
pub fn lower_bound_f64(sorted: &[f64], target: f64) -> usize {
    sorted.partition_point(|&v| v < target)
}
