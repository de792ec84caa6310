//! # Model Layer Integration
//!
//! Training frameworks that walk a pipeline's components can ask each one
//! whether it owns trainable parameters. A [`Tokenizer`] never does.

use crate::{
    onehot::OneHotBridge,
    tokenizer::Tokenizer,
    types::{IndexType, Symbol},
};

/// Reports the trainable parameters owned by a pipeline component.
pub trait TrainableParameters {
    /// The number of trainable parameters.
    fn trainable_parameter_count(&self) -> usize;

    /// Does this component own any trainable parameters?
    fn has_trainable_parameters(&self) -> bool {
        self.trainable_parameter_count() > 0
    }
}

impl<S: Symbol, I: IndexType> TrainableParameters for Tokenizer<S, I> {
    fn trainable_parameter_count(&self) -> usize {
        0
    }
}

impl<S: Symbol, I: IndexType> TrainableParameters for OneHotBridge<'_, S, I> {
    fn trainable_parameter_count(&self) -> usize {
        0
    }
}
