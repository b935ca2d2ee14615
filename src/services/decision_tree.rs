use thiserror::Error;

/// Error types for tree training
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    #[error("Training set is empty")]
    EmptyTrainingSet,
    #[error("Got {samples} samples but {labels} labels")]
    LengthMismatch { samples: usize, labels: usize },
    #[error("Sample {index} has {found} features, expected {expected}")]
    RaggedSample {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// Maps category strings to dense integer codes.
///
/// Codes are assigned in sorted order of the distinct values seen during fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = values.into_iter().map(str::to_string).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Code for `value`, or `None` if it was never seen
    pub fn transform(&self, value: &str) -> Option<usize> {
        self.classes.binary_search_by(|c| c.as_str().cmp(value)).ok()
    }

    pub fn inverse(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// CART classification tree using Gini impurity
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
    n_features: usize,
}

struct Candidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

impl DecisionTree {
    /// Grows a tree until every leaf is pure or cannot be split further.
    ///
    /// Candidate thresholds sit halfway between adjacent distinct values. The
    /// first best split wins, scanning features in order and thresholds
    /// ascending. Leaves predict the most frequent class, lowest code on ties.
    pub fn fit(samples: &[Vec<f64>], labels: &[usize]) -> Result<Self, TreeError> {
        if samples.is_empty() {
            return Err(TreeError::EmptyTrainingSet);
        }
        if samples.len() != labels.len() {
            return Err(TreeError::LengthMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }

        let n_features = samples[0].len();
        if let Some((index, sample)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| s.len() != n_features)
        {
            return Err(TreeError::RaggedSample {
                index,
                expected: n_features,
                found: sample.len(),
            });
        }

        let n_classes = labels.iter().max().map_or(0, |m| m + 1);
        let indices: Vec<usize> = (0..samples.len()).collect();
        let root = grow(samples, labels, n_classes, indices);

        Ok(Self { root, n_features })
    }

    /// Predicts the class code for one sample
    pub fn predict(&self, sample: &[f64]) -> usize {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { class } => return *class,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = sample.get(*feature).copied().unwrap_or(0.0);
                    node = if value <= *threshold { left } else { right };
                }
            }
        }
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn depth(&self) -> usize {
        fn depth_of(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + depth_of(left).max(depth_of(right)),
            }
        }
        depth_of(&self.root)
    }
}

fn class_counts(labels: &[usize], indices: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0; n_classes];
    for &i in indices {
        counts[labels[i]] += 1;
    }
    counts
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>()
}

fn majority(counts: &[usize]) -> usize {
    let mut best = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = class;
        }
    }
    best
}

fn grow(samples: &[Vec<f64>], labels: &[usize], n_classes: usize, indices: Vec<usize>) -> Node {
    let counts = class_counts(labels, &indices, n_classes);
    let class = majority(&counts);

    if counts[class] == indices.len() {
        return Node::Leaf { class };
    }

    let Some(best) = best_split(samples, labels, n_classes, &indices) else {
        return Node::Leaf { class };
    };

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&i| samples[i][best.feature] <= best.threshold);

    Node::Split {
        feature: best.feature,
        threshold: best.threshold,
        left: Box::new(grow(samples, labels, n_classes, left)),
        right: Box::new(grow(samples, labels, n_classes, right)),
    }
}

fn best_split(
    samples: &[Vec<f64>],
    labels: &[usize],
    n_classes: usize,
    indices: &[usize],
) -> Option<Candidate> {
    let total = indices.len();
    let mut best: Option<Candidate> = None;

    for feature in 0..samples[indices[0]].len() {
        let mut values: Vec<f64> = indices.iter().map(|&i| samples[i][feature]).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();

        for pair in values.windows(2) {
            let threshold = (pair[0] + pair[1]) / 2.0;
            let (left, right): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .copied()
                .partition(|&i| samples[i][feature] <= threshold);

            let impurity = (left.len() as f64
                * gini(&class_counts(labels, &left, n_classes), left.len())
                + right.len() as f64 * gini(&class_counts(labels, &right, n_classes), right.len()))
                / total as f64;

            if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                best = Some(Candidate {
                    feature,
                    threshold,
                    impurity,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_encoder_sorted_codes() {
        let encoder = LabelEncoder::fit(["Rarely", "Daily", "Never", "Daily"]);
        assert_eq!(encoder.classes(), ["Daily", "Never", "Rarely"]);
        assert_eq!(encoder.transform("Daily"), Some(0));
        assert_eq!(encoder.transform("Rarely"), Some(2));
        assert_eq!(encoder.transform("Weekly"), None);
        assert_eq!(encoder.inverse(1), Some("Never"));
        assert_eq!(encoder.inverse(3), None);
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        assert_eq!(
            DecisionTree::fit(&[], &[]).unwrap_err(),
            TreeError::EmptyTrainingSet
        );
        assert!(matches!(
            DecisionTree::fit(&[vec![0.0]], &[0, 1]),
            Err(TreeError::LengthMismatch { .. })
        ));
        assert!(matches!(
            DecisionTree::fit(&[vec![0.0, 1.0], vec![1.0]], &[0, 1]),
            Err(TreeError::RaggedSample { index: 1, .. })
        ));
    }

    #[test]
    fn test_pure_training_set_is_single_leaf() {
        let tree = DecisionTree::fit(&[vec![0.0], vec![1.0]], &[3, 3]).unwrap();
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.predict(&[5.0]), 3);
    }

    #[test]
    fn test_memorizes_training_data() {
        // XOR needs a split with no immediate impurity gain
        let samples = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let labels = vec![0, 1, 1, 0];
        let tree = DecisionTree::fit(&samples, &labels).unwrap();

        for (sample, label) in samples.iter().zip(&labels) {
            assert_eq!(tree.predict(sample), *label);
        }
        assert_eq!(tree.n_features(), 2);
    }

    #[test]
    fn test_conflicting_rows_predict_majority() {
        let samples = vec![vec![1.0], vec![1.0], vec![1.0]];
        let tree = DecisionTree::fit(&samples, &[2, 1, 2]).unwrap();
        assert_eq!(tree.predict(&[1.0]), 2);

        let tie = DecisionTree::fit(&samples[..2], &[2, 1]).unwrap();
        assert_eq!(tie.predict(&[1.0]), 1);
    }

    #[test]
    fn test_splits_on_informative_feature() {
        let samples = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
        ];
        let labels = vec![0, 0, 1, 1];
        let tree = DecisionTree::fit(&samples, &labels).unwrap();

        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.predict(&[0.0, 0.9]), 1);
        assert_eq!(tree.predict(&[1.0, 0.1]), 0);
    }
}
