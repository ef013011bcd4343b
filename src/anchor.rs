use thiserror::Error;
use tracing::trace;

use crate::{
    context::Context,
    dispatch::replace_method,
    platform::Platform,
    profile::{ProfileError, preset},
    repetition::Repetition,
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum AnchorError {
    #[error("unknown mode: {0}")]
    UnsupportedMode(String),
    #[error("need {parameter} to generate proper anchor for {platform}")]
    MissingParameter {
        parameter: &'static str,
        platform: Platform,
    },
    #[error("repetition must be a non-negative integer, got `{0}`")]
    InvalidRepetition(String),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Anchor generator bound to one platform.
///
/// ```
/// use anchorly::{Anchorizer, Platform};
///
/// let gitlab = Anchorizer::builder().platform(Platform::Gitlab).build();
/// assert_eq!(gitlab.anchor("Hello   World", 0u32).unwrap(), "[Hello   World](#hello-world)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Anchorizer {
    platform: Platform,
    module_name: Option<String>,
}

impl Anchorizer {
    pub fn builder() -> AnchorizerBuilder {
        AnchorizerBuilder::default()
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Bare fragment, without the leading `#`.
    pub fn url_hash(
        &self,
        heading: &str,
        repetition: impl Into<Repetition>,
    ) -> Result<String, AnchorError> {
        let repetition = repetition.into();
        let slugifier = replace_method(self.platform, self.module_name.as_deref())?;

        let ctx = Context::new(self.platform).with_repetition(repetition);
        let normalized = preset::heading().run(Cow::Borrowed(heading), &ctx)?;
        let slug = slugifier.slug(&normalized, repetition)?;
        let fragment = self.platform.encoder().encode(&slug).into_owned();

        trace!(platform = %self.platform, heading, %fragment, "computed url hash");
        Ok(fragment)
    }

    /// `[<heading>](#<fragment>)`; the label is `heading` exactly as given.
    pub fn anchor(
        &self,
        heading: &str,
        repetition: impl Into<Repetition>,
    ) -> Result<String, AnchorError> {
        let fragment = self.url_hash(heading, repetition)?;
        Ok(format!("[{heading}](#{fragment})"))
    }
}

#[derive(Debug, Default)]
pub struct AnchorizerBuilder {
    platform: Platform,
    module_name: Option<String>,
}

impl AnchorizerBuilder {
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Namespace for Node.js ids. Ignored by every other platform.
    pub fn module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }

    pub fn build(self) -> Anchorizer {
        Anchorizer {
            platform: self.platform,
            module_name: self.module_name,
        }
    }
}

/// Fragment for `heading` as `platform` (a key such as `gitlab.com`) renders it.
pub fn url_hash(
    heading: &str,
    platform: &str,
    repetition: impl Into<Repetition>,
    module_name: Option<&str>,
) -> Result<String, AnchorError> {
    anchorizer(platform.parse()?, module_name).url_hash(heading, repetition)
}

/// Markdown link to `heading`. `platform` defaults to `github.com`, both when
/// absent and when empty.
pub fn anchor(
    heading: &str,
    platform: Option<&str>,
    repetition: impl Into<Repetition>,
    module_name: Option<&str>,
) -> Result<String, AnchorError> {
    let platform = match platform {
        Some(key) if !key.is_empty() => key.parse()?,
        _ => Platform::default(),
    };
    anchorizer(platform, module_name).anchor(heading, repetition)
}

fn anchorizer(platform: Platform, module_name: Option<&str>) -> Anchorizer {
    let builder = Anchorizer::builder().platform(platform);
    match module_name {
        Some(module_name) => builder.module_name(module_name),
        None => builder,
    }
    .build()
}
