use crate::{
    context::Context,
    platform::Platform,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Contexts the contracts are checked under. Default: every platform,
    /// no repetition.
    fn contexts() -> Vec<Context> {
        Platform::ALL.iter().copied().map(Context::new).collect()
    }

    /// General test samples (may or may not trigger changes)
    fn samples(_platform: Platform) -> &'static [&'static str] {
        &[
            "hello world 123",
            "hello, world!",
            "c++ & friends",
            "  padded  ",
            "a -- b",
            "<b>bold</b> [link](url)",
            "&#65;&#32;%41",
            "中文。標點！",
            "emoji 😄 here",
            "$money ~tilde",
            "",
        ]
    }

    /// Samples that must pass through unchanged and unallocated.
    ///
    /// Default: common ASCII patterns that most stages never touch.
    fn should_pass_through(_platform: Platform) -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "world",   // Another simple word
            "test123", // Alphanumeric
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform(_platform: Platform) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `mapper_path_equivalent_to_apply` → `CharMapper::bind` yields what `apply()` yields
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `no_panic_on_mixed_scripts` → survives pathological real-world input
/// 5. (Implicit) `Send + Sync` → required by trait bounds
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::mapper_path_equivalent_to_apply(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx).expect("needs_apply errored") {
        stage.apply(text, ctx).expect("apply errored")
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        let platform = ctx.platform;

        for &input in S::samples(platform) {
            // Calling apply() directly must not allocate when it changes nothing.
            let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            if out == input {
                assert!(
                    matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
                    "zero-copy violated by `{}` ({platform}, input: `{input}`)",
                    stage.name()
                );
            }
        }

        for &pass_through in S::should_pass_through(platform) {
            let out = run(stage, Cow::Borrowed(pass_through), &ctx);
            assert_eq!(out.as_ref(), pass_through);
            assert!(
                matches!(out, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
                "zero-copy violated on pass-through sample by `{}` ({platform}, input: `{pass_through}`)",
                stage.name()
            );
        }

        for &(input, expected) in S::should_transform(platform) {
            let out = run(stage, Cow::Borrowed(input), &ctx);
            assert_eq!(
                out.as_ref(),
                expected,
                "`{}` ({platform}) on `{input}`",
                stage.name()
            );
        }
    }
}

const MIXED: &str = "AbCdEf ÀÉÎ 123!@# テスト 😄";

pub fn mapper_path_equivalent_to_apply<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        let Some(mapper) = stage.as_char_mapper(&ctx) else {
            continue;
        };
        let inputs = S::samples(ctx.platform)
            .iter()
            .chain(S::should_transform(ctx.platform).iter().map(|(i, _)| i))
            .chain(std::iter::once(&MIXED));
        for &input in inputs {
            let via_apply = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            let via_mapper: String = mapper.bind(input, &ctx).collect();
            assert_eq!(
                via_apply.as_ref(),
                via_mapper,
                "mapper path ≠ apply() for `{}` ({}) on `{input}`",
                stage.name(),
                ctx.platform
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    for ctx in S::contexts() {
        let platform = ctx.platform;
        let inputs = S::samples(platform)
            .iter()
            .chain(S::should_pass_through(platform).iter())
            .chain(S::should_transform(platform).iter().map(|(i, _)| i));
        for &input in inputs {
            check_accuracy(stage, input, &ctx);
        }
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    // Owned input so that stages which must allocate are not penalised.
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {platform} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        platform = ctx.platform
    );
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let pathological = [
        "Hello 世界 русский Türkçe العربية 简体中文",
        "<<<>>>[[[]]]((()))",
        "&#;&#99999999999999999999;&#55296;",
        "%%%%zz%4",
        "\u{200D}\u{FE0F}\u{20E3}",
        "---___   ",
    ];
    for ctx in S::contexts() {
        for input in pathological {
            let result: Result<Cow<'_, str>, StageError> = stage.apply(Cow::Borrowed(input), &ctx);
            assert!(result.is_ok(), "`{}` failed on `{input}`", stage.name());
        }
    }
}
