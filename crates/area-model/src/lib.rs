pub mod error;
pub mod ids;
pub mod issue;
pub mod level;
pub mod node;
pub mod options;

pub use error::{IndexError, ModelError, PathError, ROOT_LABEL, Result, SelectionError};
pub use ids::{AreaCode, LevelTypeId};
pub use issue::{IndexIssue, IndexReport, IssueKind, IssueSeverity};
pub use level::{DropdownLevel, SelectionPath, SelectionPathEntry};
pub use node::{AreaNode, LevelType, LevelTypeStub};
pub use options::{ResolverOptions, SiblingTypePolicy, TypeStubPolicy};
