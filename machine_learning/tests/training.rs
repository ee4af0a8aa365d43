use machine_learning::{
    Dataset, MlErr, PerceptronConfig, Trajectory, make_inputs, make_targets, metrics::accuracy,
    train_model,
};
use ndarray::array;

fn default_dataset() -> Dataset {
    Dataset::from_config(&PerceptronConfig::default())
}

#[test]
fn generation_is_reproducible() {
    let config = PerceptronConfig::default();

    let inputs = make_inputs(config.class_size, config.seed);
    let again = make_inputs(config.class_size, config.seed);
    let bits = |a: &ndarray::Array2<f64>| a.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&inputs), bits(&again));

    assert_eq!(make_targets(config.class_size), make_targets(config.class_size));
    assert_eq!(default_dataset(), default_dataset());
}

#[test]
fn labels_are_aligned_with_classes() {
    let class_size = 100;
    let targets = make_targets(class_size);

    assert_eq!(targets.len(), 2 * class_size);
    for (i, &t) in targets.iter().enumerate() {
        assert_eq!(t, if i < class_size { 1. } else { -1. }, "label {i}");
    }
}

#[test]
fn one_epoch_by_hand() {
    let dataset = Dataset::new(array![[1., 1.], [1., 1.], [2., -1.]], array![1., 1., -1.]).unwrap();
    let trajectory = train_model(&dataset, 0.1, 1).unwrap();

    // sample 1: s = 0, y = 0, e = 1  -> w = (0.1, 0.1), b = 0.1
    // sample 2: s = 0.3, y = 1, e = 0 -> unchanged
    // sample 3: s = 0.2, y = 1, e = -2 -> w = (0.1 - 0.4, 0.1 + 0.2), b = 0.1 - 0.2
    let snapshot = &trajectory.snapshots()[0];
    assert_eq!(snapshot.weights(), array![0.1 - 0.2 * 2., 0.1 - 0.2 * -1.]);
    assert_eq!(snapshot.bias(), 0.1 - 0.2);
    assert_eq!(snapshot.errors(), 2);
}

#[test]
fn trajectory_has_one_snapshot_per_epoch() {
    let dataset = default_dataset();

    for epochs in [1, 2, 4, 7] {
        let trajectory = train_model(&dataset, 0.01, epochs).unwrap();
        assert_eq!(trajectory.len(), epochs);
    }
}

#[test]
fn epochs_continue_from_previous_state() {
    let dataset = default_dataset();

    let short = train_model(&dataset, 0.01, 2).unwrap();
    let long = train_model(&dataset, 0.01, 5).unwrap();

    assert_eq!(short.snapshots(), &long.snapshots()[..2]);
}

#[test]
fn zero_epochs_yield_empty_trajectory() {
    let trajectory = train_model(&default_dataset(), 0.01, 0).unwrap();
    assert!(trajectory.is_empty());
    assert!(trajectory.last().is_none());
}

#[test]
fn invalid_learning_rate_fails_before_training() {
    let dataset = default_dataset();

    assert_eq!(
        train_model(&dataset, 0., 4).unwrap_err(),
        MlErr::InvalidLearningRate { got: 0. }
    );
    assert!(train_model(&dataset, -0.01, 4).is_err());
    assert!(train_model(&dataset, f64::NAN, 4).is_err());
}

#[test]
fn default_run_separates_the_clusters() {
    let config = PerceptronConfig::default();
    let dataset = Dataset::from_config(&config);

    let trajectory =
        train_model(&dataset, config.learning_rate, config.num_training_epochs).unwrap();
    let model = trajectory.last().unwrap().model();
    let acc = accuracy(&model, &dataset).unwrap();

    assert!(acc >= 0.95, "got: {}% accuracy", acc * 100.);
}

#[test]
fn sample_order_matters() {
    let dataset = default_dataset();

    let forward = train_model(&dataset, 0.01, 4).unwrap();
    let backward = train_model(&dataset.reversed(), 0.01, 4).unwrap();

    assert_eq!(forward.len(), backward.len());
    for (f, b) in forward.iter().zip(&backward) {
        assert_ne!(f.weights(), b.weights());
    }

    let biases = |t: &Trajectory| t.iter().map(|s| s.bias()).collect::<Vec<_>>();
    assert_ne!(biases(&forward), biases(&backward));
}
