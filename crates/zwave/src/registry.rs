use crate::command::registered;
use crate::command_class::command_class_name;
use crate::commands::RawCommand;
use crate::frame::{decode_into, Decoded, Frame, Framing, Reader, HEADER_LENGTH};
use crate::{Command, Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Decoder for one `(command class, command)` pair.
#[derive(Clone, Copy)]
pub(crate) struct Entry {
    pub command_class: u8,
    pub command: u8,
    pub framing: Framing,
    pub decode: fn(&[u8], usize) -> Result<Decoded>,
}

impl Entry {
    pub(crate) fn of<T>() -> Self
    where
        T: Frame + Into<Command>,
    {
        Self {
            command_class: T::COMMAND_CLASS,
            command: T::COMMAND,
            framing: T::FRAMING,
            decode: decode_into::<T>,
        }
    }
}

static REGISTRY: Lazy<HashMap<(u8, u8), Entry>> = Lazy::new(|| {
    registered()
        .into_iter()
        .map(|entry| ((entry.command_class, entry.command), entry))
        .collect()
});

pub fn is_registered(
    command_class: u8,
    command: u8,
) -> bool {
    REGISTRY.contains_key(&(command_class, command))
}

/// Registered `(command class, command)` pairs in ascending order.
pub fn registered_commands() -> Vec<(u8, u8)> {
    let mut headers: Vec<_> = REGISTRY.keys().copied().collect();
    headers.sort_unstable();
    headers
}

/// Decodes the frame starting at `offset`.
///
/// Unknown commands come back as [`RawCommand`] holding the rest of the buffer,
/// so an unknown command must not come before a known one. Use
/// [`decode_exact`] when the transport declares a frame count and a swallowed
/// frame has to surface as [`Error::ProtocolDesync`].
pub fn decode(
    bytes: &[u8],
    offset: usize,
) -> Result<Decoded> {
    decode_frame(bytes, offset).map(|(decoded, _)| decoded)
}

fn decode_frame(
    bytes: &[u8],
    offset: usize,
) -> Result<(Decoded, Framing)> {
    let (command_class, command) = Reader::new(bytes, offset).get_header()?;
    match REGISTRY.get(&(command_class, command)) {
        Some(entry) => {
            let decoded = (entry.decode)(bytes, offset)?;
            tracing::trace!(
                offset,
                command_class = %command_class_name(command_class),
                command = decoded.command.name(),
                consumed_length = decoded.consumed_length,
                "decoded frame"
            );
            Ok((decoded, entry.framing))
        }
        None => {
            let (raw, consumed_length) = RawCommand::decode(bytes, offset)?;
            Ok((
                Decoded::new(raw.into(), consumed_length),
                Framing::ConsumesRemainder,
            ))
        }
    }
}

/// Iterator over the frames packed back to back in one message.
///
/// Stops after the first error or after a frame that runs to the end of the
/// message. An unknown command swallows everything after it, so it must be
/// the last frame; [`decode_exact`] detects when it is not.
pub struct Frames<'a> {
    bytes: &'a [u8],
    offset: usize,
    finished: bool,
}

impl<'a> Frames<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            finished: false,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Frames<'_> {
    type Item = Result<Decoded>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.offset >= self.bytes.len() {
            return None;
        }
        match decode_frame(self.bytes, self.offset) {
            Ok((decoded, framing)) => {
                self.offset += decoded.consumed_length;
                self.finished = framing == Framing::ConsumesRemainder;
                Some(Ok(decoded))
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

pub fn frames(bytes: &[u8]) -> Frames<'_> {
    Frames::new(bytes)
}

/// Decodes every frame in the message, in order.
///
/// Expects any unknown command to be the last frame, see [`Frames`].
pub fn decode_all(bytes: &[u8]) -> Result<Vec<Decoded>> {
    frames(bytes).collect()
}

/// Decodes a message the transport says holds exactly `expected_frames` frames.
///
/// A frame that swallows the rest of the message before the last expected
/// frame, or bytes left over after it, mean the framing is out of step with
/// the transport and fail with [`Error::ProtocolDesync`].
pub fn decode_exact(
    bytes: &[u8],
    expected_frames: usize,
) -> Result<Vec<Decoded>> {
    let mut decoded = Vec::with_capacity(expected_frames.min(bytes.len() / HEADER_LENGTH));
    let mut offset = 0;
    while decoded.len() < expected_frames {
        if offset >= bytes.len() {
            tracing::warn!(
                offset,
                expected_frames,
                found = decoded.len(),
                "message ended before the expected frame count"
            );
            return Err(Error::ProtocolDesync { offset });
        }
        let (frame, framing) = decode_frame(bytes, offset)?;
        if framing == Framing::ConsumesRemainder && decoded.len() + 1 < expected_frames {
            tracing::warn!(
                offset,
                command_class = %command_class_name(frame.command_class),
                command = frame.command_id,
                expected_frames,
                "frame consumed the remainder before the expected frame count"
            );
            return Err(Error::ProtocolDesync { offset });
        }
        offset += frame.consumed_length;
        decoded.push(frame);
    }
    if offset != bytes.len() {
        tracing::warn!(
            offset,
            trailing = bytes.len() - offset,
            "bytes left after the expected frame count"
        );
        return Err(Error::ProtocolDesync { offset });
    }
    Ok(decoded)
}
