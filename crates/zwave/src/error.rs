pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The buffer ends before a fixed header or a declared length is satisfied.
    TruncatedFrame {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// A typed decoder was handed a frame carrying another header.
    UnexpectedCommand { command_class: u8, command: u8 },
    /// A frame that swallows the rest of the message is followed by more frames,
    /// or the declared frame count does not line up with the buffer.
    ProtocolDesync { offset: usize },
    InvalidField { field: &'static str, value: usize },
}

impl Error {
    pub(crate) fn truncated(
        offset: usize,
        needed: usize,
        available: usize,
    ) -> Self {
        Self::TruncatedFrame {
            offset,
            needed,
            available,
        }
    }

    pub(crate) fn invalid(
        field: &'static str,
        value: usize,
    ) -> Self {
        Self::InvalidField { field, value }
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}
