//! Persistence trajectories for an image across an increasing sequence
//! of intensity thresholds.
//!
//! At each threshold, the image is binarised and labelled (`tda-label`);
//! each component surviving from one threshold to the next is matched to
//! its single brightest (then largest) descendant, forming trajectories
//! that track a region's birth, growth, and implicit death. Grounded in
//! `original_source/persistence.go`'s `threshold`, `maxes`, and the
//! `Next` matching loop; the public, self-driving constructor follows
//! the `(img, rows, steps)` contract exercised by `persistence_test.go`.

use tda_core::BBox;
use tda_label::Labeller;

use crate::error::{PersistError, PersistResult};

/// A single observation of a component at one threshold step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pstate {
    pub label: u32,
    pub size: u32,
    pub max: i64,
    pub step: usize,
    pub threshold: i64,
    pub bbox: BBox,
}

/// A persistence trajectory: a component's observations across
/// successive steps, in increasing step order.
pub type Trajectory = Vec<Pstate>;

/// Builds persistence trajectories for a greyscale image.
pub struct Persistence {
    rows: usize,
    cols: usize,
    img: Vec<i64>,
    traj: Vec<Trajectory>,
    /// The label array from the final threshold step.
    labels: Vec<u32>,
}

impl Persistence {
    /// Track persistence trajectories for `img` (row-major, `rows`
    /// rows) over `steps` thresholds spaced evenly between the image's
    /// minimum and maximum intensity, inclusive.
    ///
    /// # Errors
    ///
    /// Fails if `rows` does not evenly divide `img.len()`, if `steps`
    /// is fewer than 2, or if labelling any threshold step fails.
    pub fn new(img: Vec<i64>, rows: usize, steps: usize) -> PersistResult<Self> {
        let cols = tda_core::cols_from_rows(img.len(), rows)?;
        if steps < 2 {
            return Err(PersistError::InvalidParameter(format!(
                "steps ({steps}) must be at least 2"
            )));
        }

        let (low, high) = tda_core::min_max_i64(&img)
            .expect("cols_from_rows already rejected the empty-buffer case");

        let thresholds: Vec<i64> =
            (0..steps).map(|k| low + (k as i64 * (high - low)) / (steps as i64 - 1)).collect();

        let mut ps = Self { rows, cols, img, traj: Vec::new(), labels: Vec::new() };

        let (mut prev_labels, sizes0, maxes0, bboxes0) = ps.label_at(thresholds[0])?;
        for (label, &m) in maxes0.iter().enumerate().skip(1) {
            ps.traj.push(vec![Pstate {
                label: label as u32,
                size: sizes0[label],
                max: m,
                step: 0,
                threshold: thresholds[0],
                bbox: bboxes0[label],
            }]);
        }
        ps.labels = prev_labels.clone();

        for (step, &t) in thresholds.iter().enumerate().skip(1) {
            let (labels, sizes, maxes, bboxes) = ps.label_at(t)?;
            ps.advance(step, t, &prev_labels, &labels, &sizes, &maxes, &bboxes);
            prev_labels = labels;
            ps.labels = prev_labels.clone();
        }

        Ok(ps)
    }

    /// Threshold and label the image at intensity `t`, returning the
    /// label array plus per-component size, max intensity, and bbox
    /// (all indexed by label, including the unused background slot 0).
    fn label_at(
        &self,
        t: i64,
    ) -> PersistResult<(Vec<u32>, Vec<u32>, Vec<i64>, Vec<BBox>)> {
        let mask: Vec<u8> = self.img.iter().map(|&v| if v >= t { 1 } else { 0 }).collect();
        let labeller = Labeller::new(mask, self.rows, None)?;
        let sizes = labeller.sizes(None);
        let bboxes = labeller.bboxes(None);

        let mut maxes = vec![i64::MIN; labeller.num_components()];
        for (i, &l) in labeller.labels().iter().enumerate() {
            if self.img[i] > maxes[l as usize] {
                maxes[l as usize] = self.img[i];
            }
        }

        Ok((labeller.labels().to_vec(), sizes, maxes, bboxes))
    }

    /// Extend existing trajectories to their descendants at `step`, and
    /// start new trajectories for components with no ancestor.
    fn advance(
        &mut self,
        step: usize,
        t: i64,
        prev_labels: &[u32],
        labels: &[u32],
        sizes: &[u32],
        maxes: &[i64],
        bboxes: &[BBox],
    ) {
        // best descendant seen so far, keyed by ancestor label.
        let mut best: Vec<Option<Pstate>> = Vec::new();
        for (&l1, &l2) in prev_labels.iter().zip(labels.iter()) {
            if l1 == 0 || l2 == 0 {
                continue;
            }
            while best.len() < l1 as usize + 1 {
                best.push(None);
            }
            let m2 = maxes[l2 as usize];
            let s2 = sizes[l2 as usize];
            let replace = match &best[l1 as usize] {
                None => true,
                Some(cur) => m2 > cur.max || (m2 == cur.max && s2 > cur.size),
            };
            if replace {
                best[l1 as usize] = Some(Pstate {
                    label: l2,
                    size: s2,
                    max: m2,
                    step,
                    threshold: t,
                    bbox: bboxes[l2 as usize],
                });
            }
        }

        let mut claimed = vec![false; labels.iter().copied().max().map_or(1, |m| m as usize + 1)];
        for tr in self.traj.iter_mut() {
            let last = *tr.last().expect("trajectories are never empty");
            if last.step != step - 1 {
                continue;
            }
            if let Some(Some(q)) = best.get(last.label as usize) {
                tr.push(*q);
                while claimed.len() < q.label as usize + 1 {
                    claimed.push(false);
                }
                claimed[q.label as usize] = true;
            }
        }

        for (l2, &m2) in maxes.iter().enumerate().skip(1) {
            let already = claimed.get(l2).copied().unwrap_or(false);
            if !already {
                self.traj.push(vec![Pstate {
                    label: l2 as u32,
                    size: sizes[l2],
                    max: m2,
                    step,
                    threshold: t,
                    bbox: bboxes[l2],
                }]);
            }
        }
    }

    /// The resulting trajectories, one per tracked component. The order
    /// is the order in which trajectories were created; call `sort` for
    /// a deterministic order.
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.traj
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The label array from the most recent threshold step. Labels are
    /// only comparable within this step; they carry no relation to
    /// `Pstate::label` values from earlier steps.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Birth and death threshold for each trajectory, in the same order
    /// as `trajectories()`. A trajectory's birth is its first state's
    /// threshold; its death is its last state's threshold.
    pub fn birth_death(&self) -> (Vec<i64>, Vec<i64>) {
        let births = self.traj.iter().map(|tr| tr[0].threshold).collect();
        let deaths = self.traj.iter().map(|tr| tr.last().unwrap().threshold).collect();
        (births, deaths)
    }

    /// Put the trajectories in a deterministic order: descending by
    /// birth-state max intensity, then size, then label.
    pub fn sort(&mut self) {
        self.traj.sort_by(|a, b| {
            let (a0, b0) = (a[0], b[0]);
            b0.max
                .cmp(&a0.max)
                .then(b0.size.cmp(&a0.size))
                .then(b0.label.cmp(&a0.label))
        });
    }
}
