//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete
//! type of every stage. Stages that expose a `CharMapper` run through the
//! iterator path, everything else through `Stage::apply`.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(text)
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let current: Cow<'_, str> = self.previous.process(text, ctx)?;
        if !self.stage.needs_apply(&current, ctx)? {
            return Ok(current);
        }
        if let Some(mapper) = self.stage.as_char_mapper(ctx) {
            return Ok(Cow::Owned(mapper.bind(&current, ctx).collect()));
        }
        self.stage.apply(current, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{replace_char::SPACE_TO_HYPHEN, trim::Trim};

    #[test]
    fn stages_run_in_insertion_order() {
        let process = ChainedProcess {
            stage: SPACE_TO_HYPHEN,
            previous: ChainedProcess {
                stage: Trim,
                previous: EmptyProcess,
            },
        };
        let out = process
            .process(Cow::Borrowed("  a b  "), &Context::default())
            .unwrap();
        assert_eq!(out, "a-b");
    }

    #[test]
    fn untouched_input_is_never_copied() {
        let process = ChainedProcess {
            stage: SPACE_TO_HYPHEN,
            previous: EmptyProcess,
        };
        let input = "no-spaces";
        let out = process
            .process(Cow::Borrowed(input), &Context::default())
            .unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
