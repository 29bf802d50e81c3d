//! Onion-peeling of convex hulls over a 2-D point set.
//!
//! Grounded directly in `original_source/convex_peel.go`: reference-
//! point selection, polar-angle sort, the `skip`/`skip2` masking of
//! already-peeled and collinear points, the Graham-scan hull, and the
//! Heron's-formula-from-centroid area.

use tda_core::require_equal_len;
use tda_landscape::Stat;

use crate::error::{PeelError, PeelResult};

/// Collinear points sharing a polar angle within this tolerance of the
/// reference point are treated as coincident for hull purposes, keeping
/// only the farthest one.
const COLLINEAR_TOL: f64 = 1e-12;

/// Iteratively peelable convex hull of a point set.
pub struct ConvexPeel {
    x: Vec<f64>,
    y: Vec<f64>,
    ang: Vec<f64>,
    /// Permanently excluded: already peeled off in an earlier pass.
    skip: Vec<bool>,
    /// `skip`, plus collinear near-reference points excluded for the
    /// current pass only.
    skip2: Vec<bool>,
    hull: Vec<usize>,
    centroid: (f64, f64),
}

impl ConvexPeel {
    /// Build a convex peel over the points `(x[i], y[i])`.
    ///
    /// # Errors
    ///
    /// Fails with a shape error if `x.len() != y.len()`.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> PeelResult<Self> {
        require_equal_len(x.len(), y.len(), "x/y")?;

        let n = x.len();
        let mut cp = Self {
            x,
            y,
            ang: vec![0.0; n],
            skip: vec![false; n],
            skip2: vec![false; n],
            hull: Vec::new(),
            centroid: (0.0, 0.0),
        };
        cp.run();
        Ok(cp)
    }

    fn run(&mut self) {
        self.sort();
        self.compute_centroid();
        self.compute_skip2();
        self.find_hull();
    }

    /// Pick the reference point (min y, tie-broken by min x) among
    /// active points, sort every point by polar angle around it, and
    /// permute `x`, `y`, `skip` to match.
    fn sort(&mut self) {
        let n = self.x.len();
        let mut reference = None;
        let mut ymin = 0.0;
        for i in 0..n {
            if self.skip[i] {
                continue;
            }
            if reference.is_none() || self.y[i] < ymin || (self.y[i] == ymin && self.x[i] < self.x[reference.unwrap()]) {
                ymin = self.y[i];
                reference = Some(i);
            }
        }
        let jj = reference.expect("ConvexPeel is never run with zero active points");

        for i in 0..n {
            self.ang[i] = (self.y[i] - self.y[jj]).atan2(self.x[i] - self.x[jj]);
        }

        let mut order = tda_core::argsort_f64(&self.ang);
        if let Some(pos) = order.iter().position(|&i| i == jj) {
            if pos != 0 {
                order.swap(0, pos);
            }
        }

        self.x = tda_core::permute(&self.x, &order);
        self.y = tda_core::permute(&self.y, &order);
        self.ang = tda_core::permute(&self.ang, &order);
        self.skip = tda_core::permute(&self.skip, &order);
    }

    /// Mean of the currently active points.
    fn compute_centroid(&mut self) {
        let mut sum = (0.0, 0.0);
        let mut n = 0usize;
        for i in 0..self.x.len() {
            if self.skip[i] {
                continue;
            }
            sum.0 += self.x[i];
            sum.1 += self.y[i];
            n += 1;
        }
        self.centroid = (sum.0 / n as f64, sum.1 / n as f64);
    }

    /// Among points at (nearly) equal polar angle, keep only the one
    /// farthest from the reference point; mask the rest in `skip2`.
    fn compute_skip2(&mut self) {
        let n = self.skip.len();
        self.skip2 = self.skip.clone();

        let mut i = 0;
        while i < n {
            if self.skip2[i] {
                i += 1;
                continue;
            }

            let mut j = i;
            let mut dist2 = Vec::new();
            while j < n && (self.ang[j] - self.ang[i]).abs() < COLLINEAR_TOL {
                if self.skip2[j] {
                    dist2.push(0.0);
                } else {
                    let dx = self.x[j] - self.x[0];
                    let dy = self.y[j] - self.y[0];
                    dist2.push(dx * dx + dy * dy);
                }
                j += 1;
            }

            let mx = dist2.iter().cloned().fold(f64::MIN, f64::max);
            for (k, &d) in dist2.iter().enumerate() {
                let idx = i + k;
                if !self.skip2[idx] && d < mx {
                    self.skip2[idx] = true;
                }
            }

            i = j;
        }

        self.skip2[0] = false;
    }

    /// Graham scan over the angle-sorted, skip2-filtered points.
    fn find_hull(&mut self) {
        let mut pts = Vec::new();
        for i in 0..self.skip2.len() {
            if self.skip2[i] {
                continue;
            }
            while pts.len() > 1 && self.cross(pts[pts.len() - 2], pts[pts.len() - 1], i) <= 0.0 {
                pts.pop();
            }
            pts.push(i);
        }
        self.hull = pts;
    }

    fn cross(&self, i0: usize, i1: usize, i2: usize) -> f64 {
        let f = (self.x[i1] - self.x[i0]) * (self.y[i2] - self.y[i0]);
        let g = (self.y[i1] - self.y[i0]) * (self.x[i2] - self.x[i0]);
        f - g
    }

    /// Remove the current hull's vertices from the active set and
    /// recompute.
    pub fn peel(&mut self) {
        for &i in &self.hull {
            self.skip[i] = true;
        }
        self.run();
    }

    /// Restore every point to the active set and recompute.
    pub fn reset(&mut self) {
        self.skip.iter_mut().for_each(|s| *s = false);
        self.run();
    }

    /// Peel repeatedly until the active point count drops strictly
    /// below `frac * num_points_total`.
    pub fn peel_to(&mut self, frac: f64) {
        let total = self.x.len() as f64;
        loop {
            let n = self.skip.iter().filter(|&&s| !s).count() as f64;
            if n < frac * total {
                break;
            }
            self.peel();
        }
    }

    /// Area, perimeter, and centroid at each requested survival
    /// fraction. Resets first, then peels to each fraction in turn.
    ///
    /// # Errors
    ///
    /// Fails with an ordering error if `depths` is not strictly
    /// decreasing.
    pub fn stats(&mut self, depths: &[f64]) -> PeelResult<Vec<Stat>> {
        for w in depths.windows(2) {
            if w[1] >= w[0] {
                return Err(PeelError::OrderingViolation(format!(
                    "depths must be strictly decreasing, found {} then {}",
                    w[0], w[1]
                )));
            }
        }

        self.reset();
        let mut out = Vec::with_capacity(depths.len());
        for &f in depths {
            self.peel_to(f);
            out.push(Stat {
                depth: f,
                area: self.area(),
                perimeter: self.perimeter(),
                centroid: self.centroid(),
            });
        }
        Ok(out)
    }

    /// The points currently on the hull, in hull order.
    pub fn hull_points(&self, buf: Option<Vec<(f64, f64)>>) -> Vec<(f64, f64)> {
        let mut out = buf.unwrap_or_default();
        out.clear();
        out.extend(self.hull.iter().map(|&i| (self.x[i], self.y[i])));
        out
    }

    pub fn perimeter(&self) -> f64 {
        let pts = &self.hull;
        let n = pts.len();
        (0..n)
            .map(|i| {
                let j = (n + i - 1) % n;
                let dx = self.x[pts[i]] - self.x[pts[j]];
                let dy = self.y[pts[i]] - self.y[pts[j]];
                (dx * dx + dy * dy).sqrt()
            })
            .sum()
    }

    /// Heron's-formula-from-centroid triangulation of the hull.
    pub fn area(&self) -> f64 {
        let pts = &self.hull;
        let n = pts.len();

        let mut center = (0.0, 0.0);
        for &i in pts {
            center.0 += self.x[i];
            center.1 += self.y[i];
        }
        center.0 /= n as f64;
        center.1 /= n as f64;

        let dist_to_center = |i: usize| -> f64 {
            let dx = self.x[i] - center.0;
            let dy = self.y[i] - center.1;
            (dx * dx + dy * dy).sqrt()
        };

        let mut a = dist_to_center(pts[n - 1]);
        let mut area = 0.0;
        for i in 0..n {
            let j = (n + i - 1) % n;
            let b = dist_to_center(pts[i]);
            let dx = self.x[pts[i]] - self.x[pts[j]];
            let dy = self.y[pts[i]] - self.y[pts[j]];
            let c = (dx * dx + dy * dy).sqrt();

            let s = (a + b + c) / 2.0;
            area += (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
            a = b;
        }
        area
    }

    pub fn centroid(&self) -> (f64, f64) {
        self.centroid
    }

    /// Number of points not yet peeled off.
    pub fn num_points(&self) -> usize {
        self.skip.iter().filter(|&&s| !s).count()
    }
}
