use crate::core::models::frame::Frame;
use crate::core::utils::identifiers::is_hydrogen_type;
use nalgebra::MatrixXx3;
use std::collections::{BTreeMap, HashSet};

/// Atoms closer than this distance (in Angstrom) are treated as bonded.
pub const BOND_DISTANCE_CUTOFF: f64 = 1.8;

/// Summary of an atom's bond-graph environment up to three bonds out.
///
/// Two atoms in differently ordered files describe the same chemical position
/// when their fingerprints are identical. The shells are deliberately kept as
/// raw walk counts: second-shell entries are the adjacency lists of every
/// first neighbor concatenated without deduplication (so the central atom
/// itself appears once per neighbor), and third-shell entries expand every
/// second-shell occurrence except the central atom itself. Duplicates carry
/// signal, so each shell records both its raw and its unique count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopologyFingerprint {
    pub element: Option<String>,
    pub degree: usize,
    pub neighbor_count: usize,
    pub second_shell_total: usize,
    pub second_shell_unique: usize,
    pub third_shell_total: usize,
    pub third_shell_unique: usize,
}

/// Heavy-atom working set for correspondence discovery.
///
/// Hydrogen atoms are excluded up front: they are both noisy (flexible,
/// often unresolved) and locally symmetric, so they would only pollute the
/// fingerprint matching. Rows keep the original frame order.
#[derive(Debug, Clone)]
pub struct HeavyAtomSubset {
    coordinates: MatrixXx3<f64>,
    elements: Vec<Option<String>>,
}

impl HeavyAtomSubset {
    pub fn from_frame(frame: &Frame) -> Self {
        let keep: Vec<usize> = (0..frame.len())
            .filter(|&row| !is_hydrogen_type(frame.elements()[row].as_deref()))
            .collect();
        let mut coordinates = MatrixXx3::zeros(keep.len());
        let mut elements = Vec::with_capacity(keep.len());
        for (subset_row, &frame_row) in keep.iter().enumerate() {
            coordinates.set_row(subset_row, &frame.coordinates().row(frame_row));
            elements.push(frame.elements()[frame_row].clone());
        }
        Self {
            coordinates,
            elements,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn coordinates(&self) -> &MatrixXx3<f64> {
        &self.coordinates
    }

    /// Computes the topology fingerprint of every atom in the subset.
    pub fn fingerprints(&self) -> Vec<TopologyFingerprint> {
        let adjacency = bond_adjacency(&self.coordinates);
        (0..self.len())
            .map(|i| {
                let neighbors = &adjacency[i];
                let mut second_shell = Vec::new();
                for &n in neighbors {
                    second_shell.extend_from_slice(&adjacency[n]);
                }
                let mut third_shell = Vec::new();
                for &s in &second_shell {
                    if s != i {
                        third_shell.extend_from_slice(&adjacency[s]);
                    }
                }
                TopologyFingerprint {
                    element: self.elements[i].clone(),
                    degree: neighbors.len(),
                    neighbor_count: neighbors.len(),
                    second_shell_total: second_shell.len(),
                    second_shell_unique: count_unique(&second_shell),
                    third_shell_total: third_shell.len(),
                    third_shell_unique: count_unique(&third_shell),
                }
            })
            .collect()
    }
}

// Quadratic pairwise scan; the inputs here are ligand-sized.
fn bond_adjacency(coordinates: &MatrixXx3<f64>) -> Vec<Vec<usize>> {
    let n = coordinates.nrows();
    let mut adjacency = vec![Vec::new(); n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let delta = coordinates.row(i) - coordinates.row(j);
            if delta.norm() < BOND_DISTANCE_CUTOFF {
                adjacency[i].push(j);
            }
        }
    }
    adjacency
}

fn count_unique(items: &[usize]) -> usize {
    items.iter().collect::<HashSet<_>>().len()
}

/// Partial target-to-mobile row map over two heavy-atom subsets.
///
/// A target row is mapped only when exactly one mobile atom shares its
/// fingerprint. Zero candidates or several candidates (symmetric local
/// environments) leave the row silently unmapped; no tie-break exists
/// without extra chirality or geometric information.
#[derive(Debug, Clone, Default)]
pub struct CorrespondenceMap {
    pairs: BTreeMap<usize, usize>,
}

impl CorrespondenceMap {
    pub fn build(target: &HeavyAtomSubset, mobile: &HeavyAtomSubset) -> Self {
        let target_prints = target.fingerprints();
        let mobile_prints = mobile.fingerprints();
        let mut pairs = BTreeMap::new();
        for (i, print) in target_prints.iter().enumerate() {
            let mut candidates = mobile_prints
                .iter()
                .enumerate()
                .filter(|&(_, other)| other == print)
                .map(|(j, _)| j);
            if let (Some(j), None) = (candidates.next(), candidates.next()) {
                pairs.insert(i, j);
            }
        }
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn mobile_row(&self, target_row: usize) -> Option<usize> {
        self.pairs.get(&target_row).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().map(|(&t, &m)| (t, m))
    }

    /// Extracts the mapped coordinate rows as two parallel matrices: the
    /// target rows in ascending order, and the mobile rows reordered to
    /// match them.
    pub fn paired_coordinates(
        &self,
        target: &HeavyAtomSubset,
        mobile: &HeavyAtomSubset,
    ) -> (MatrixXx3<f64>, MatrixXx3<f64>) {
        let mut x = MatrixXx3::zeros(self.pairs.len());
        let mut y = MatrixXx3::zeros(self.pairs.len());
        for (row, (&t, &m)) in self.pairs.iter().enumerate() {
            x.set_row(row, &target.coordinates.row(t));
            y.set_row(row, &mobile.coordinates.row(m));
        }
        (x, y)
    }
}
