use crate::{
    anchor::AnchorError,
    platform::Platform,
    profile::ProfileError,
    repetition::Repetition,
    slug::{bitbucket_id, ghost_id, github_id, gitlab_id, nodejs_id},
};
use tracing::debug;

/// A platform's slugifier, with whatever it needs bound up front.
///
/// Node.js ids are namespaced by module, so that variant carries the module
/// name; every call re-qualifies the heading with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slugifier<'m> {
    Github,
    Bitbucket,
    Gitlab,
    Nodejs { module_name: &'m str },
    Ghost,
}

/// Select the slugifier for `platform`.
///
/// Fails with [`AnchorError::MissingParameter`] when Node.js is asked for
/// without a (non-empty) module name.
pub fn replace_method(
    platform: Platform,
    module_name: Option<&str>,
) -> Result<Slugifier<'_>, AnchorError> {
    let slugifier = match platform {
        Platform::Github => Slugifier::Github,
        Platform::Bitbucket => Slugifier::Bitbucket,
        Platform::Gitlab => Slugifier::Gitlab,
        Platform::Nodejs => match module_name {
            Some(module_name) if !module_name.is_empty() => Slugifier::Nodejs { module_name },
            _ => {
                return Err(AnchorError::MissingParameter {
                    parameter: "module name",
                    platform,
                });
            }
        },
        Platform::Ghost => Slugifier::Ghost,
    };
    debug!(%platform, ?slugifier, "resolved slugifier");
    Ok(slugifier)
}

impl Slugifier<'_> {
    pub fn platform(&self) -> Platform {
        match self {
            Self::Github => Platform::Github,
            Self::Bitbucket => Platform::Bitbucket,
            Self::Gitlab => Platform::Gitlab,
            Self::Nodejs { .. } => Platform::Nodejs,
            Self::Ghost => Platform::Ghost,
        }
    }

    pub fn slug(&self, text: &str, repetition: Repetition) -> Result<String, ProfileError> {
        match *self {
            Self::Github => github_id(text, repetition),
            Self::Bitbucket => bitbucket_id(text, repetition),
            Self::Gitlab => gitlab_id(text, repetition),
            Self::Nodejs { module_name } => {
                nodejs_id(&format!("{module_name}.{text}"), repetition)
            }
            Self::Ghost => {
                if repetition.is_set() {
                    debug!(%repetition, "ghost.org has no repetition suffix, ignoring");
                }
                ghost_id(text)
            }
        }
    }
}
