//! Persistence landscapes built from (birth, death) interval pairs.
//!
//! Grounded in `original_source/landscape.go`: the elementary-interval
//! index (`init`), the tent-height evaluator (`Kmax`), and the
//! trapezoidal area/perimeter accumulation (`Stats`). The grid spacing
//! formula and the centroid statistic are not present in the original
//! and instead follow the worked examples directly.

use tda_core::{require_equal_len, sorted_dedup_f64, Result};

/// Area, perimeter, and centroid of a landscape depth (or a convex
/// peel's hull), computed at one survival depth/fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub depth: f64,
    pub area: f64,
    pub perimeter: f64,
    pub centroid: (f64, f64),
}

/// A persistence landscape over a family of tent functions, one per
/// `(birth_i, death_i)` interval.
pub struct Landscape {
    birth: Vec<f64>,
    death: Vec<f64>,
    /// Midpoint of each interval: the tent's apex abscissa.
    bda: Vec<f64>,
    /// Sorted, deduplicated union of every birth and death value.
    distinct: Vec<f64>,
    /// For elementary interval `j` (between `distinct[j]` and
    /// `distinct[j+1]`), the indices of intervals spanning it.
    index: Vec<Vec<usize>>,
}

impl Landscape {
    /// Build a landscape from parallel birth/death arrays.
    ///
    /// # Errors
    ///
    /// Fails with a shape error if `births.len() != deaths.len()`.
    pub fn new(births: Vec<f64>, deaths: Vec<f64>) -> Result<Self> {
        require_equal_len(births.len(), deaths.len(), "birth/death")?;

        let mut combined = births.clone();
        combined.extend_from_slice(&deaths);
        let distinct = sorted_dedup_f64(&combined);

        let mut index = vec![Vec::new(); distinct.len()];
        for i in 0..births.len() {
            let j0 = tda_core::lower_bound_f64(&distinct, births[i]);
            let j1 = tda_core::lower_bound_f64(&distinct, deaths[i]);
            for slot in index.iter_mut().take(j1).skip(j0) {
                slot.push(i);
            }
        }

        let bda: Vec<f64> = births.iter().zip(&deaths).map(|(&b, &d)| (b + d) / 2.0).collect();

        Ok(Self { birth: births, death: deaths, bda, distinct, index })
    }

    /// Evaluate the landscape at `t`, returning the `depths[i]`-th
    /// largest tent height (0-indexed, 0 = tallest) for each requested
    /// depth. Depths beyond the number of active tents are zero.
    pub fn eval(&self, t: f64, depths: &[usize]) -> Vec<f64> {
        if self.distinct.is_empty() || depths.is_empty() {
            return vec![0.0; depths.len()];
        }
        if t < self.distinct[0] || t >= *self.distinct.last().unwrap() {
            return vec![0.0; depths.len()];
        }

        let mut j = tda_core::lower_bound_f64(&self.distinct, t);
        if j >= self.distinct.len() || self.distinct[j] != t {
            j = j.saturating_sub(1);
        }

        let mut heights: Vec<f64> = Vec::new();
        for &i in &self.index[j] {
            if t <= self.bda[i] {
                heights.push(t - self.birth[i]);
            } else if t < self.death[i] {
                heights.push(self.death[i] - t);
            }
        }

        let max_depth = *depths.iter().max().unwrap();
        while heights.len() <= max_depth {
            heights.push(0.0);
        }
        heights.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        depths.iter().map(|&k| heights[k]).collect()
    }

    /// Evaluate area, perimeter, and centroid for each requested depth
    /// over a uniform grid of `npoints` points spanning `[low, high]`.
    pub fn stats(&self, depths: &[usize], low: f64, high: f64, npoints: usize) -> Vec<Stat> {
        if npoints < 2 {
            return depths.iter().map(|&d| Stat { depth: d as f64, area: 0.0, perimeter: 0.0, centroid: (0.0, 0.0) }).collect();
        }

        let d = (high - low) / (npoints - 1) as f64;
        let mut area = vec![0.0; depths.len()];
        let mut perimeter = vec![0.0; depths.len()];
        let mut centroid_t = vec![0.0; depths.len()];
        let mut centroid_x = vec![0.0; depths.len()];

        let mut last = self.eval(low, depths);
        centroid_t.iter_mut().for_each(|v| *v += low);
        for (cx, &h) in centroid_x.iter_mut().zip(&last) {
            *cx += h;
        }

        for i in 1..npoints {
            let t = low + i as f64 * d;
            let cur = self.eval(t, depths);
            for j in 0..depths.len() {
                area[j] += d * (cur[j] + last[j]) / 2.0;
                let u = last[j] - cur[j];
                perimeter[j] += (d * d + u * u).sqrt();
                centroid_t[j] += t;
                centroid_x[j] += cur[j];
            }
            last = cur;
        }

        (0..depths.len())
            .map(|j| Stat {
                depth: depths[j] as f64,
                area: area[j],
                perimeter: perimeter[j],
                centroid: (centroid_t[j] / npoints as f64, centroid_x[j] / npoints as f64),
            })
            .collect()
    }

    /// Whether the distinct value set is empty (no intervals at all).
    pub fn is_empty(&self) -> bool {
        self.distinct.is_empty()
    }
}
