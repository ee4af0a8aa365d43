use std::fmt;

use log::warn;
use machine_learning::{
    Dataset, PerceptronConfig, Snapshot, Trajectory,
    dataset::{CLASS_A_LABEL, CLASS_B_LABEL},
    metrics::accuracy,
};
use serde::Serialize;

/// The line `x2 = slope * x1 + intercept` where a 2-D perceptron's score is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionBoundary {
    pub slope: f64,
    pub intercept: f64,
}

impl DecisionBoundary {
    /// Solves `w1 * x1 + w2 * x2 + b = 0` for `x2`.
    ///
    /// # Returns
    /// `None` when the model is not 2-D or `w2 == 0`, where the line is vertical or undefined.
    pub fn from_snapshot(snapshot: &Snapshot) -> Option<Self> {
        let w = snapshot.weights();
        if w.len() != 2 || w[1] == 0. {
            return None;
        }

        Some(Self {
            slope: -w[0] / w[1],
            intercept: -snapshot.bias() / w[1],
        })
    }

    pub fn at(&self, x1: f64) -> f64 {
        self.slope * x1 + self.intercept
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EpochReport {
    pub epoch: usize,
    pub weights: Vec<f64>,
    pub bias: f64,
    pub errors: usize,
    pub accuracy: Option<f64>,
    pub boundary: Option<DecisionBoundary>,
    /// End points of the boundary over the range of the first feature.
    pub segment: Option<[[f64; 2]; 2]>,
}

/// Everything a plotting layer needs to draw how the boundary evolved.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub config: PerceptronConfig,
    pub class_a: usize,
    pub class_b: usize,
    pub x1_range: Option<(f64, f64)>,
    pub epochs: Vec<EpochReport>,
}

impl TrainingReport {
    pub fn new(config: &PerceptronConfig, dataset: &Dataset, trajectory: &Trajectory) -> Self {
        let x1_range = dataset.x1_range();

        let epochs = trajectory
            .iter()
            .enumerate()
            .map(|(i, snapshot)| {
                let boundary = DecisionBoundary::from_snapshot(snapshot);
                if boundary.is_none() {
                    warn!(epoch = i + 1; "decision boundary is undefined, w2 is zero");
                }

                let segment = boundary
                    .zip(x1_range)
                    .map(|(line, (lo, hi))| [[lo, line.at(lo)], [hi, line.at(hi)]]);

                EpochReport {
                    epoch: i + 1,
                    weights: snapshot.weights().to_vec(),
                    bias: snapshot.bias(),
                    errors: snapshot.errors(),
                    accuracy: accuracy(&snapshot.model(), dataset).ok(),
                    boundary,
                    segment,
                }
            })
            .collect();

        Self {
            config: config.clone(),
            class_a: dataset.class_inputs(CLASS_A_LABEL).nrows(),
            class_b: dataset.class_inputs(CLASS_B_LABEL).nrows(),
            x1_range,
            epochs,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.config;
        writeln!(
            f,
            "class A: {} samples, class B: {} samples, learning rate {}, seed {}",
            self.class_a, self.class_b, c.learning_rate, c.seed
        )?;
        writeln!(
            f,
            "{:>5} | {:>22} | {:>9} | {:>6} | {:>8} | {:>9} | {:>9}",
            "epoch", "weights", "bias", "errors", "accuracy", "slope", "intercept"
        )?;

        for e in &self.epochs {
            let weights = e
                .weights
                .iter()
                .map(|w| format!("{w:.4}"))
                .collect::<Vec<_>>()
                .join(", ");
            let accuracy = e
                .accuracy
                .map_or_else(|| "-".to_string(), |a| format!("{:.1}%", a * 100.));
            let (slope, intercept) = e.boundary.map_or_else(
                || ("-".to_string(), "-".to_string()),
                |b| (format!("{:.4}", b.slope), format!("{:.4}", b.intercept)),
            );

            writeln!(
                f,
                "{:>5} | {:>22} | {:>9.4} | {:>6} | {:>8} | {:>9} | {:>9}",
                e.epoch,
                format!("({weights})"),
                e.bias,
                e.errors,
                accuracy,
                slope,
                intercept
            )?;
        }

        Ok(())
    }
}
