// src/pipeline.rs
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// Ordered stage list.
///
/// The order is part of the design: every stage assumes the ones before it
/// have already normalized the text it sees.
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self {
            stages: SmallVec::from_vec(stages),
        }
    }

    pub fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current, ctx) {
                continue;
            }
            current = stage.apply(current, ctx)?;
        }

        Ok(current)
    }
}
