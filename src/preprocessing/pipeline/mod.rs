//! The fixed-order Titanic feature pipeline.
//!
//! # Available Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`TitanicPipeline`] | Unfitted chain of the eleven preprocessing units |
//! | [`FittedTitanicPipeline`] | Frozen chain used for every query table |

#[allow(clippy::module_inception)]
pub mod pipeline;

pub use pipeline::{
    FittedTitanicPipeline, PipelineStep, PipelineStepEnum, StepParams, TitanicPipeline,
    TitanicPipelineParams, UnfittedStepEnum, STEP_ORDER,
};
