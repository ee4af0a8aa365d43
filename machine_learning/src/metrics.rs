use crate::{MlErr, Result, arch::Model, dataset::Dataset};

/// Fraction of the samples whose response equals their target.
///
/// # Errors
/// `MlErr::EmptyDataset` if there is nothing to evaluate and `MlErr::SizeMismatch` if the
/// dataset's inputs don't fit the model.
pub fn accuracy<M: Model>(model: &M, dataset: &Dataset) -> Result<f64> {
    if dataset.is_empty() {
        return Err(MlErr::EmptyDataset);
    }

    if dataset.dim() != model.input_dim() {
        return Err(MlErr::SizeMismatch {
            a: "model",
            b: "dataset",
            got: dataset.dim(),
            expected: model.input_dim(),
        });
    }

    let correct = dataset
        .samples()
        .filter(|&(x, target)| model.forward(x) == target)
        .count();

    Ok(correct as f64 / dataset.len() as f64)
}
