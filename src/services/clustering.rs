use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::models::{Habit, HabitRecord};

const MAX_ITERATIONS: usize = 300;

/// One-dimensional K-means with k-means++ seeding
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    seed: u64,
    restarts: usize,
}

/// Outcome of a K-means fit
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    pub centroids: Vec<f64>,
    /// Raw cluster id per input point
    pub labels: Vec<usize>,
    /// Sum of squared distances to the assigned centroid
    pub inertia: f64,
}

impl KMeans {
    pub fn new(k: usize, seed: u64, restarts: usize) -> Self {
        Self {
            k,
            seed,
            restarts: restarts.max(1),
        }
    }

    /// Fits the points, keeping the lowest-inertia run.
    ///
    /// `k` is capped at the number of distinct values so no centroid
    /// starts out as a duplicate. Identical inputs and seed give identical fits.
    pub fn fit(&self, points: &[f64]) -> KMeansFit {
        let k = self.k.min(distinct_count(points));
        if k == 0 {
            return KMeansFit {
                centroids: Vec::new(),
                labels: Vec::new(),
                inertia: 0.0,
            };
        }

        let mut rng = Pcg64::seed_from_u64(self.seed);
        let mut best: Option<KMeansFit> = None;

        for _ in 0..self.restarts {
            let centroids = seed_centroids(points, k, &mut rng);
            let fit = lloyd(points, centroids);

            // Strict comparison keeps the earliest run on ties
            if best.as_ref().map_or(true, |b| fit.inertia < b.inertia) {
                best = Some(fit);
            }
        }

        best.unwrap_or_else(|| lloyd(points, points[..k].to_vec()))
    }
}

fn distinct_count(points: &[f64]) -> usize {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted.len()
}

/// k-means++: each new centroid is drawn with probability proportional to
/// its squared distance from the nearest centroid already chosen
fn seed_centroids<R: Rng + ?Sized>(points: &[f64], k: usize, rng: &mut R) -> Vec<f64> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())]);

    while centroids.len() < k {
        let weights: Vec<f64> = points
            .iter()
            .map(|p| {
                centroids
                    .iter()
                    .map(|c| (p - c).powi(2))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            break;
        }

        let mut target = rng.gen::<f64>() * total;
        let mut chosen = points.len() - 1;
        for (i, w) in weights.iter().enumerate() {
            if target < *w {
                chosen = i;
                break;
            }
            target -= w;
        }
        // Rounding can land on an already-chosen point; skip to the farthest instead
        if weights[chosen] <= 0.0 {
            chosen = weights
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
                .unwrap_or(chosen);
        }
        centroids.push(points[chosen]);
    }

    centroids
}

fn nearest(point: f64, centroids: &[f64]) -> usize {
    let mut best = 0;
    for (i, c) in centroids.iter().enumerate() {
        if (point - c).abs() < (point - centroids[best]).abs() {
            best = i;
        }
    }
    best
}

fn lloyd(points: &[f64], mut centroids: Vec<f64>) -> KMeansFit {
    let mut labels: Vec<usize> = points.iter().map(|p| nearest(*p, &centroids)).collect();

    for _ in 0..MAX_ITERATIONS {
        let mut sums = vec![0.0; centroids.len()];
        let mut counts = vec![0usize; centroids.len()];
        for (p, &label) in points.iter().zip(&labels) {
            sums[label] += p;
            counts[label] += 1;
        }
        for (i, centroid) in centroids.iter_mut().enumerate() {
            // An emptied cluster keeps its previous centroid
            if counts[i] > 0 {
                *centroid = sums[i] / counts[i] as f64;
            }
        }

        let next: Vec<usize> = points.iter().map(|p| nearest(*p, &centroids)).collect();
        if next == labels {
            break;
        }
        labels = next;
    }

    let inertia = points
        .iter()
        .zip(&labels)
        .map(|(p, &label)| (p - centroids[label]).powi(2))
        .sum();

    KMeansFit {
        centroids,
        labels,
        inertia,
    }
}

/// Rescales values to zero mean and unit (population) variance.
/// A constant column maps to all zeros.
pub fn standardize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();

    if std == 0.0 {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v - mean) / std).collect()
}

/// Maps each raw cluster id to its rank by ascending mean time.
///
/// Clusters with equal means are ranked by ascending raw id.
pub fn order_clusters(assignments: &[(usize, f64)]) -> BTreeMap<usize, usize> {
    let mut totals: BTreeMap<usize, (f64, usize)> = BTreeMap::new();
    for &(cluster, time) in assignments {
        let entry = totals.entry(cluster).or_insert((0.0, 0));
        entry.0 += time;
        entry.1 += 1;
    }

    let mut means: Vec<(usize, f64)> = totals
        .into_iter()
        .map(|(cluster, (sum, count))| (cluster, sum / count as f64))
        .collect();
    means.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    means
        .into_iter()
        .enumerate()
        .map(|(rank, (cluster, _))| (cluster, rank))
        .collect()
}

/// Clusters habits on their standardized duration and tags each with
/// its ordered cluster. Load order is preserved.
pub fn cluster_habits(records: &[HabitRecord], kmeans: &KMeans) -> Vec<Habit> {
    let times: Vec<f64> = records.iter().map(|r| r.time_needed).collect();
    let fit = kmeans.fit(&standardize(&times));

    let assignments: Vec<(usize, f64)> = fit.labels.iter().copied().zip(times).collect();
    let ordering = order_clusters(&assignments);

    records
        .iter()
        .zip(&fit.labels)
        .map(|(record, &cluster)| Habit {
            name: record.habit_name.clone(),
            time_needed: record.time_needed,
            cluster,
            ordered_cluster: ordering.get(&cluster).copied().unwrap_or(cluster),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, time: f64) -> HabitRecord {
        HabitRecord {
            habit_name: name.to_string(),
            time_needed: time,
        }
    }

    #[test]
    fn test_standardize() {
        let scaled = standardize(&[1.0, 2.0, 3.0]);
        let expected = 1.0 / (2.0f64 / 3.0).sqrt();
        assert!((scaled[0] + expected).abs() < 1e-12);
        assert!(scaled[1].abs() < 1e-12);
        assert!((scaled[2] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_standardize_constant_column() {
        assert_eq!(standardize(&[5.0, 5.0]), vec![0.0, 0.0]);
        assert!(standardize(&[]).is_empty());
    }

    #[test]
    fn test_kmeans_separates_obvious_groups() {
        let points = [1.0, 1.1, 0.9, 10.0, 10.2, 50.0, 49.5];
        let fit = KMeans::new(3, 42, 10).fit(&points);

        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_eq!(fit.labels[1], fit.labels[2]);
        assert_eq!(fit.labels[3], fit.labels[4]);
        assert_eq!(fit.labels[5], fit.labels[6]);
        assert_ne!(fit.labels[0], fit.labels[3]);
        assert_ne!(fit.labels[3], fit.labels[5]);
        assert_ne!(fit.labels[0], fit.labels[5]);
    }

    #[test]
    fn test_kmeans_is_deterministic_for_seed() {
        let points = [3.0, 7.0, 8.0, 15.0, 16.0, 30.0, 31.0, 45.0];
        let a = KMeans::new(3, 7, 5).fit(&points);
        let b = KMeans::new(3, 7, 5).fit(&points);
        assert_eq!(a, b);
    }

    #[test]
    fn test_kmeans_caps_k_at_distinct_values() {
        let fit = KMeans::new(3, 42, 10).fit(&[4.0, 4.0, 9.0]);
        assert_eq!(fit.centroids.len(), 2);
        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_ne!(fit.labels[0], fit.labels[2]);
    }

    #[test]
    fn test_kmeans_empty_input() {
        let fit = KMeans::new(3, 42, 10).fit(&[]);
        assert!(fit.labels.is_empty());
        assert!(fit.centroids.is_empty());
    }

    #[test]
    fn test_order_clusters_by_mean() {
        // raw 0 averages 30, raw 1 averages 5, raw 2 averages 12
        let assignments = [(0, 25.0), (0, 35.0), (1, 5.0), (2, 10.0), (2, 14.0)];
        let ordering = order_clusters(&assignments);

        assert_eq!(ordering[&1], 0);
        assert_eq!(ordering[&2], 1);
        assert_eq!(ordering[&0], 2);
    }

    #[test]
    fn test_order_clusters_ties_by_raw_id() {
        let assignments = [(2, 10.0), (0, 10.0), (1, 3.0)];
        let ordering = order_clusters(&assignments);

        assert_eq!(ordering[&1], 0);
        assert_eq!(ordering[&0], 1);
        assert_eq!(ordering[&2], 2);
    }

    #[test]
    fn test_cluster_habits_orders_short_first() {
        let records = vec![
            record("Evening run", 45.0),
            record("Drink water", 1.0),
            record("Journal", 15.0),
            record("Stretch", 2.0),
            record("Yoga session", 50.0),
            record("Read", 14.0),
        ];
        let habits = cluster_habits(&records, &KMeans::new(3, 42, 10));

        assert_eq!(habits.len(), 6);
        // Load order preserved
        assert_eq!(habits[0].name, "Evening run");
        assert_eq!(habits[0].ordered_cluster, 2);
        assert_eq!(habits[1].ordered_cluster, 0);
        assert_eq!(habits[2].ordered_cluster, 1);
        assert_eq!(habits[3].ordered_cluster, 0);
        assert_eq!(habits[4].ordered_cluster, 2);
        assert_eq!(habits[5].ordered_cluster, 1);
    }

    #[test]
    fn test_ordered_cluster_means_non_decreasing() {
        let records: Vec<HabitRecord> = [3.0, 60.0, 7.0, 20.0, 25.0, 90.0, 5.0, 30.0]
            .iter()
            .enumerate()
            .map(|(i, t)| record(&format!("habit-{i}"), *t))
            .collect();
        let habits = cluster_habits(&records, &KMeans::new(3, 42, 10));

        let ranks = habits.iter().map(|h| h.ordered_cluster).max().unwrap() + 1;
        let mut means = Vec::new();
        for rank in 0..ranks {
            let times: Vec<f64> = habits
                .iter()
                .filter(|h| h.ordered_cluster == rank)
                .map(|h| h.time_needed)
                .collect();
            means.push(times.iter().sum::<f64>() / times.len() as f64);
        }
        assert!(means.windows(2).all(|w| w[0] <= w[1]));
    }
}
