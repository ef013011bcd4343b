pub mod anchor;
pub mod context;
pub mod dispatch;
pub mod encode;
pub mod platform;
pub mod process;
pub mod profile;
pub mod repetition;
pub mod slug;
pub mod stage;
pub mod unicode;


pub use anchor::{AnchorError, Anchorizer, AnchorizerBuilder, anchor, url_hash};
pub use dispatch::{Slugifier, replace_method};
pub use encode::UriEncoder;
pub use platform::Platform;
pub use profile::{Profile, ProfileError};
pub use repetition::Repetition;
pub use slug::{basic_github_id, bitbucket_id, ghost_id, github_id, gitlab_id, nodejs_id};
pub use stage::ascii_lower_case::ascii_only_to_lower_case;
pub use stage::{CharMapper, Stage, StageError};
