/// How the `//` authority marker is emitted for a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorityMarker {
    /// Emit `//` only when the authority is non-empty
    #[default]
    WhenAuthority,
    /// Always emit `//`, even with an empty authority (`file:///tmp`)
    Always,
    /// Never emit `//` (`mailto:user@example.com`)
    Never,
}

impl AuthorityMarker {
    /// Check if `//` should precede an authority of the given emptiness
    pub fn emits(self, has_authority: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::WhenAuthority => has_authority,
        }
    }
}
