mod checksum;
mod component;
mod condition;
mod delete;
mod directory;
mod file;
mod icon;
mod ini;
mod is_sig_key;
mod language;
mod location;
mod message;
mod permission;
mod registry;
mod run;
mod task;
mod r#type;

pub use checksum::{Checksum, MD5, Sha1, Sha256};
pub use component::{Component, ComponentFlags};
pub use condition::Condition;
pub use delete::{DeleteEntry, TargetType};
pub use directory::{Directory, DirectoryFlags};
pub use file::{File, FileCopyMode, FileFlags, FileType, FileVerification};
pub use icon::{CloseSetting, Icon, IconFlags};
pub use ini::{Ini, IniFlags};
pub use is_sig_key::ISSigKey;
pub use language::Language;
pub use location::{CompressionFilter, FileLocation, FileLocationFlags, SignMode};
pub use message::{Message, MessageEntry};
pub use permission::Permission;
pub use registry::{RegRoot, RegistryEntry, RegistryFlags, RegistryValueType};
pub use run::{RunEntry, RunFlags, WaitCondition};
pub use task::{Task, TaskFlags};
pub use r#type::{SetupType, Type, TypeFlags};
