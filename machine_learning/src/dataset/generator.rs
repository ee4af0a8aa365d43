use ndarray::{Array1, Array2, ArrayView1, Axis, concatenate, s};
use ndarray_rand::RandomExt;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

/// Center of the class A cluster.
pub const CLASS_A_CENTER: [f64; 2] = [0., 4.];

/// Center of the class B cluster.
pub const CLASS_B_CENTER: [f64; 2] = [4., 0.];

/// Target assigned to every class A sample.
pub const CLASS_A_LABEL: f64 = 1.;

/// Target assigned to every class B sample.
pub const CLASS_B_LABEL: f64 = -1.;

/// Generates the input patterns of both classes.
///
/// The generator is seeded once and both clusters are drawn from that single stream, class A
/// first, so the same `class_size` and `seed` always produce the same matrix.
///
/// # Arguments
/// * `class_size` - The amount of samples per class.
/// * `seed` - The seed of the pseudorandom stream.
///
/// # Returns
/// A `(2 * class_size, 2)` matrix, class A rows first and class B rows after.
pub fn make_inputs(class_size: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    let class_a = gaussian_cluster(&mut rng, class_size, &CLASS_A_CENTER);
    let class_b = gaussian_cluster(&mut rng, class_size, &CLASS_B_CENTER);

    concatenate![Axis(0), class_a, class_b]
}

/// Generates the targets aligned with `make_inputs`: `class_size` times `+1` followed by
/// `class_size` times `-1`.
pub fn make_targets(class_size: usize) -> Array1<f64> {
    let mut targets = Array1::from_elem(2 * class_size, CLASS_B_LABEL);
    targets.slice_mut(s![..class_size]).fill(CLASS_A_LABEL);
    targets
}

/// Samples `n` points with unit variance and independent dimensions around `center`.
fn gaussian_cluster<R: Rng>(rng: &mut R, n: usize, center: &[f64]) -> Array2<f64> {
    let center = ArrayView1::from(center);
    Array2::<f64>::random_using((n, center.len()), StandardNormal, rng) + &center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_shape() {
        let inputs = make_inputs(7, 1);
        assert_eq!(inputs.dim(), (14, 2));
    }

    #[test]
    fn empty_classes() {
        assert_eq!(make_inputs(0, 1).dim(), (0, 2));
        assert!(make_targets(0).is_empty());
    }

    #[test]
    fn targets_are_stacked_by_class() {
        let targets = make_targets(3);
        assert_eq!(targets.to_vec(), [1., 1., 1., -1., -1., -1.]);
    }

    #[test]
    fn same_seed_same_inputs() {
        assert_eq!(make_inputs(50, 40), make_inputs(50, 40));
        assert_ne!(make_inputs(50, 40), make_inputs(50, 41));
    }

    #[test]
    fn classes_come_from_one_stream() {
        // class B continues the stream, so it must not repeat the class A noise
        let inputs = make_inputs(10, 3);
        let noise_a = &inputs.slice(s![..10, ..]) - &ArrayView1::from(&CLASS_A_CENTER);
        let noise_b = &inputs.slice(s![10.., ..]) - &ArrayView1::from(&CLASS_B_CENTER);
        assert_ne!(noise_a, noise_b);
    }

    #[test]
    fn clusters_sit_around_their_centers() {
        let inputs = make_inputs(500, 40);

        let mean_a = inputs.slice(s![..500, ..]).mean_axis(Axis(0)).unwrap();
        let mean_b = inputs.slice(s![500.., ..]).mean_axis(Axis(0)).unwrap();

        for (got, expected) in mean_a.iter().zip(CLASS_A_CENTER) {
            assert!((got - expected).abs() < 0.2, "class A mean: {mean_a}");
        }
        for (got, expected) in mean_b.iter().zip(CLASS_B_CENTER) {
            assert!((got - expected).abs() < 0.2, "class B mean: {mean_b}");
        }
    }
}
