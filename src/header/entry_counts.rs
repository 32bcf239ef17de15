use std::io;

use zerocopy::LE;

use crate::{error::oversize_count_error, read::ReadBytesExt, version::InnoVersion};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EntryCounts {
    language: u32,
    custom_message: u32,
    permission: u32,
    r#type: u32,
    component: u32,
    task: u32,
    directory: u32,
    is_sig_key: u32,
    file: u32,
    file_location: u32,
    icon: u32,
    ini: u32,
    registry: u32,
    install_delete: u32,
    uninstall_delete: u32,
    run: u32,
    uninstall_run: u32,
}

impl EntryCounts {
    pub fn read<R>(mut reader: R, version: InnoVersion) -> io::Result<Self>
    where
        R: io::Read,
    {
        let mut counts = Self::default();

        if version >= 4 {
            counts.language = reader.read_u32::<LE>()?;
        } else if version >= (2, 0, 1) {
            counts.language = 1;
        }

        if version >= (4, 2, 1) {
            counts.custom_message = reader.read_u32::<LE>()?;
        }

        if version >= 4.1 {
            counts.permission = reader.read_u32::<LE>()?;
        }

        if version >= 2 || version.is_isx() {
            counts.r#type = reader.read_u32::<LE>()?;
            counts.component = reader.read_u32::<LE>()?;
        }

        if version >= 2 || (version.is_isx() && version >= (1, 3, 17)) {
            counts.task = reader.read_u32::<LE>()?;
        }

        counts.directory = reader.read_u32::<LE>()?;

        if version >= 6.5 {
            counts.is_sig_key = reader.read_u32::<LE>()?;
        }

        counts.file = reader.read_u32::<LE>()?;
        counts.file_location = reader.read_u32::<LE>()?;
        counts.icon = reader.read_u32::<LE>()?;
        counts.ini = reader.read_u32::<LE>()?;
        counts.registry = reader.read_u32::<LE>()?;
        counts.install_delete = reader.read_u32::<LE>()?;
        counts.uninstall_delete = reader.read_u32::<LE>()?;
        counts.run = reader.read_u32::<LE>()?;
        counts.uninstall_run = reader.read_u32::<LE>()?;

        counts.check_bounds()?;

        Ok(counts)
    }

    /// Rejects any count field above [`crate::error::MAX_ENTRY_COUNT`], so a corrupt or hostile
    /// count never drives an allocation proportional to an attacker-controlled value.
    fn check_bounds(&self) -> io::Result<()> {
        use crate::error::MAX_ENTRY_COUNT;

        let fields: [(&'static str, u32); 17] = [
            ("language", self.language),
            ("custom_message", self.custom_message),
            ("permission", self.permission),
            ("type", self.r#type),
            ("component", self.component),
            ("task", self.task),
            ("directory", self.directory),
            ("is_sig_key", self.is_sig_key),
            ("file", self.file),
            ("file_location", self.file_location),
            ("icon", self.icon),
            ("ini", self.ini),
            ("registry", self.registry),
            ("install_delete", self.install_delete),
            ("uninstall_delete", self.uninstall_delete),
            ("run", self.run),
            ("uninstall_run", self.uninstall_run),
        ];

        for (name, value) in fields {
            if value > MAX_ENTRY_COUNT {
                return Err(oversize_count_error(value, name));
            }
        }

        Ok(())
    }

    /// Returns the number of [Language] entries.
    ///
    /// [Language]: crate::entry::Language
    #[must_use]
    #[inline]
    pub const fn language(&self) -> u32 {
        self.language
    }

    /// Returns the number of [Custom Message] entries.
    ///
    /// [Custom Message]: crate::entry::MessageEntry
    #[must_use]
    #[inline]
    pub const fn custom_message(&self) -> u32 {
        self.custom_message
    }

    /// Returns the number of [Permission] entries.
    ///
    /// [Permission]: crate::entry::Permission
    #[must_use]
    #[inline]
    pub const fn permission(&self) -> u32 {
        self.permission
    }

    /// Returns the number of [Type] entries.
    ///
    /// [Type]: crate::entry::Type
    #[must_use]
    #[inline]
    pub const fn r#type(&self) -> u32 {
        self.r#type
    }

    /// Returns the number of [Component] entries.
    ///
    /// [Component]: crate::entry::Component
    #[must_use]
    #[inline]
    pub const fn component(&self) -> u32 {
        self.component
    }

    /// Returns the number of [Task] entries.
    ///
    /// [Task]: crate::entry::Task
    #[must_use]
    #[inline]
    pub const fn task(&self) -> u32 {
        self.task
    }

    /// Returns the number of [Directory] entries.
    ///
    /// [Directory]: crate::entry::Directory
    #[must_use]
    #[inline]
    pub const fn directory(&self) -> u32 {
        self.directory
    }

    /// Returns the number of [IS Sig Key] entries.
    ///
    /// [ISSigKey]: crate::entry::ISSigKey
    #[must_use]
    #[inline]
    pub const fn is_sig_key(&self) -> u32 {
        self.is_sig_key
    }

    /// Returns the number of [File] entries.
    ///
    /// [File]: crate::entry::File
    #[must_use]
    #[inline]
    pub const fn file(&self) -> u32 {
        self.file
    }

    /// Returns the number of [File Location] entries.
    ///
    /// [File Location]: crate::entry::FileLocation
    #[must_use]
    #[inline]
    pub const fn file_location(&self) -> u32 {
        self.file_location
    }

    /// Returns the number of [Icon] entries.
    ///
    /// [Icon]: crate::entry::Icon
    #[must_use]
    #[inline]
    pub const fn icon(&self) -> u32 {
        self.icon
    }

    /// Returns the number of [Ini] entries.
    ///
    /// [Ini]: crate::entry::Ini
    #[must_use]
    #[inline]
    pub const fn ini(&self) -> u32 {
        self.ini
    }

    /// Returns the number of [Registry] entries.
    ///
    /// [Registry]: crate::entry::RegistryEntry
    #[must_use]
    #[inline]
    pub const fn registry(&self) -> u32 {
        self.registry
    }

    /// Returns the number of [Install Delete] entries.
    ///
    /// [Install Delete]: crate::entry::DeleteEntry
    #[must_use]
    #[inline]
    pub const fn install_delete(&self) -> u32 {
        self.install_delete
    }

    /// Returns the number of [Uninstall Delete] entries.
    ///
    /// [Uninstall Delete]: crate::entry::DeleteEntry
    #[must_use]
    #[inline]
    pub const fn uninstall_delete(&self) -> u32 {
        self.uninstall_delete
    }

    /// Returns the number of [Run] entries.
    ///
    /// [Run]: crate::entry::RunEntry
    #[must_use]
    #[inline]
    pub const fn run(&self) -> u32 {
        self.run
    }

    /// Returns the number of [Uninstall Run] entries.
    ///
    /// [Uninstall Run]: crate::entry::RunEntry
    #[must_use]
    #[inline]
    pub const fn uninstall_run(&self) -> u32 {
        self.uninstall_run
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{InnoError, MAX_ENTRY_COUNT};
    use crate::version::InnoVersion;

    use super::EntryCounts;

    // For an old, non-ISX version, the fields that are unconditionally present are, in order:
    // directory, file, file_location, icon, ini, registry, install_delete, uninstall_delete,
    // run, uninstall_run.
    fn legacy_counts(values: [u32; 10]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn reads_all_zero_counts() {
        let data = legacy_counts([0; 10]);

        let counts = EntryCounts::read(data.as_slice(), InnoVersion::new(1, 3, 3, 0)).unwrap();

        assert_eq!(counts.file(), 0);
        assert_eq!(counts.directory(), 0);
        assert_eq!(counts.uninstall_run(), 0);
    }

    #[test]
    fn rejects_oversize_count_without_allocating() {
        let mut values = [0u32; 10];
        values[1] = MAX_ENTRY_COUNT + 1; // `file`

        let data = legacy_counts(values);

        let err = EntryCounts::read(data.as_slice(), InnoVersion::new(1, 3, 3, 0)).unwrap_err();

        assert!(matches!(
            InnoError::from(err),
            InnoError::OversizeCount {
                field: "file",
                ..
            }
        ));
    }
}
