//! CLI command implementations.
//!
//! One module per subcommand:
//! - `clean`, `join`, `split`, `dir`, `base`, `ext`: lexical path algebra
//! - `rel`: express a target path relative to a base
//! - `volume`, `is_abs`: inspect the volume and rootedness of a path
//! - `match_pattern`: match a name against a shell pattern
//! - `glob`: expand a pattern against the host filesystem
//! - `components`: walk an absolute path component by component
//! - `completions`: generate shell completion scripts

pub mod base;
pub mod clean;
pub mod completions;
pub mod components;
pub mod dir;
pub mod ext;
pub mod glob;
pub mod is_abs;
pub mod join;
pub mod match_pattern;
pub mod rel;
pub mod split;
pub mod volume;

pub use base::BaseCommand;
pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use components::ComponentsCommand;
pub use dir::DirCommand;
pub use ext::ExtCommand;
pub use glob::GlobCommand;
pub use is_abs::IsAbsCommand;
pub use join::JoinCommand;
pub use match_pattern::MatchCommand;
pub use rel::RelCommand;
pub use split::SplitCommand;
pub use volume::VolumeCommand;
