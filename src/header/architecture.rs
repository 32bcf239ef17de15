use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// The processor architectures an installer (or a component of one) may target.
    ///
    /// <https://jrsoftware.org/ishelp/index.php?topic=archidentifiers>
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Architecture: u8 {
        const X86 = 1;
        const AMD64 = 1 << 1;
        const ARM64 = 1 << 2;
        const X64_COMPATIBLE = 1 << 3;
        const X64_OS = 1 << 4;
        const ARM64_COMPATIBLE = 1 << 5;
    }
}

impl Architecture {
    /// Parses an architecture identifiers expression, such as `"x64compatible or arm64"`, into
    /// the set of architectures the expression allows and the set it explicitly excludes.
    ///
    /// This only recognises the known architecture identifier tokens and the `not` prefix; the
    /// `and`/`or` operators and parentheses are treated as plain separators, since this crate
    /// only needs to know which architectures a token list mentions, not evaluate the boolean
    /// expression against a real target machine.
    #[must_use]
    pub fn from_expression(expression: &str) -> (Self, Self) {
        let mut allowed = Self::empty();
        let mut disallowed = Self::empty();

        let mut negate_next = false;
        for token in expression.split_whitespace() {
            let token = token.trim_matches(|c| c == '(' || c == ')');
            match token.to_ascii_lowercase().as_str() {
                "not" => negate_next = true,
                "and" | "or" => {}
                "x86" | "x86compatible" => {
                    Self::apply(Self::X86, negate_next, &mut allowed, &mut disallowed);
                    negate_next = false;
                }
                "amd64" | "x64" => {
                    Self::apply(Self::AMD64, negate_next, &mut allowed, &mut disallowed);
                    negate_next = false;
                }
                "x64compatible" => {
                    Self::apply(Self::X64_COMPATIBLE, negate_next, &mut allowed, &mut disallowed);
                    negate_next = false;
                }
                "x64os" => {
                    Self::apply(Self::X64_OS, negate_next, &mut allowed, &mut disallowed);
                    negate_next = false;
                }
                "arm64" => {
                    Self::apply(Self::ARM64, negate_next, &mut allowed, &mut disallowed);
                    negate_next = false;
                }
                "arm64compatible" => {
                    Self::apply(Self::ARM64_COMPATIBLE, negate_next, &mut allowed, &mut disallowed);
                    negate_next = false;
                }
                _ => negate_next = false,
            }
        }

        (allowed, disallowed)
    }

    fn apply(bit: Self, negate: bool, allowed: &mut Self, disallowed: &mut Self) {
        if negate {
            *disallowed |= bit;
        } else {
            *allowed |= bit;
        }
    }
}

impl From<StoredArchitecture> for Architecture {
    fn from(stored: StoredArchitecture) -> Self {
        let mut architecture = Self::empty();
        if stored.contains(StoredArchitecture::X86) {
            architecture |= Self::X86;
        }
        if stored.contains(StoredArchitecture::AMD64) {
            architecture |= Self::AMD64;
        }
        if stored.contains(StoredArchitecture::ARM64) {
            architecture |= Self::ARM64;
        }
        architecture
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

bitflags! {
    /// The legacy, fixed-width on-disk representation of [`Architecture`] used before Inno
    /// Setup switched `ArchitecturesAllowed`/`ArchitecturesInstallIn64BitMode` to expressions.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct StoredArchitecture: u8 {
        const X86 = 1;
        const AMD64 = 1 << 1;
        const ARM64 = 1 << 2;
    }
}
