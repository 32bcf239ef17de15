use std::fmt;

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct FileFlags: u64 {
        const CONFIRM_OVERWRITE = 1;
        const NEVER_UNINSTALL = 1 << 1;
        const RESTART_REPLACE = 1 << 2;
        const DELETE_AFTER_INSTALL = 1 << 3;
        const REGISTER_SERVER = 1 << 4;
        const REGISTER_TYPE_LIB = 1 << 5;
        const SHARED_FILE = 1 << 6;
        const IS_README_FILE = 1 << 7;
        const COMPARE_TIME_STAMP = 1 << 8;
        const FONT_IS_NOT_TRUE_TYPE = 1 << 9;
        const SKIP_IF_SOURCE_DOESNT_EXIST = 1 << 10;
        const OVERWRITE_READ_ONLY = 1 << 11;
        const OVERWRITE_SAME_VERSION = 1 << 12;
        const CUSTOM_DEST_NAME = 1 << 13;
        const ONLY_IF_DEST_FILE_EXISTS = 1 << 14;
        const NO_REG_ERROR = 1 << 15;
        const UNINS_RESTART_DELETE = 1 << 16;
        const ONLY_IF_DOESNT_EXIST = 1 << 17;
        const IGNORE_VERSION = 1 << 18;
        const PROMPT_IF_OLDER = 1 << 19;
        const DONT_COPY = 1 << 20;
        const UNINS_REMOVE_READ_ONLY = 1 << 21;
        const RECURSE_SUB_DIRS_EXTERNAL = 1 << 22;
        const REPLACE_SAME_VERSION_IF_CONTENTS_DIFFER = 1 << 23;
        const DONT_VERIFY_CHECKSUM = 1 << 24;
        const UNINS_NO_SHARED_FILE_PROMPT = 1 << 25;
        const CREATE_ALL_SUB_DIRS = 1 << 26;
        const BITS_32 = 1 << 27;
        const BITS_64 = 1 << 28;
        const EXTERNAL_SIZE_PRESET = 1 << 29;
        const SET_NTFS_COMPRESSION = 1 << 30;
        const UNSET_NTFS_COMPRESSION = 1 << 31;
        const GAC_INSTALL = 1 << 32;
        const DOWNLOAD = 1 << 33;
        const EXTRACT_ARCHIVE = 1 << 34;
    }
}

impl fmt::Display for FileFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}
