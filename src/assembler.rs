use thiserror::Error;

use crate::resolver::{resolve, Reason};
use crate::table::Address;

pub const SPACE_SIZE: usize = 0x1_0000;

/// First address of the exported 32 KB window.
pub const WINDOW_START: usize = 0x8000;

pub const WINDOW_SIZE: usize = SPACE_SIZE - WINDOW_START;

/// Start of the area covered by ROM sockets; only this part gets the
/// open-bus fill.
pub const FILL_START: usize = 0x9000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    #[error("file '{name}' does not fit: {len} bytes at {start:#06x} run past 0xffff")]
    AddressOverflow {
        name: String,
        start: Address,
        len: usize,
    },
    #[error("malformed address '{0}'")]
    MalformedAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    File { name: String, data: Vec<u8> },
    CursorOverride(Address),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Placed {
        name: String,
        start: Address,
        len: usize,
        reason: Reason,
    },
    CursorMoved(Address),
}

/// The whole 64 KB address space of one assembly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSpace {
    bytes: Vec<u8>,
}

impl AddressSpace {
    /// Every byte from 0x9000 up holds the high byte of its own address,
    /// which is what an unpopulated socket reads back as.
    #[must_use]
    pub fn new() -> Self {
        let mut bytes = vec![0u8; SPACE_SIZE];
        for (addr, byte) in bytes.iter_mut().enumerate().skip(FILL_START) {
            *byte = (addr >> 8) as u8;
        }
        Self { bytes }
    }

    /// Copies `data` to `start`. The caller must have checked the bounds.
    fn write(&mut self, start: usize, data: &[u8]) {
        self.bytes[start..start + data.len()].copy_from_slice(data);
    }

    #[must_use]
    pub fn byte(&self, addr: usize) -> u8 {
        self.bytes[addr]
    }

    #[must_use]
    pub fn window(&self) -> &[u8] {
        &self.bytes[WINDOW_START..]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub space: AddressSpace,
    pub decisions: Vec<Decision>,
}

/// Places every file in order, keeping track of where the next unknown file
/// should go.
///
/// # Errors
/// Returns [`AssembleError::AddressOverflow`] when a file would extend past
/// 0xffff. Nothing is written in that case.
pub fn assemble(placements: &[Placement]) -> Result<Assembly, AssembleError> {
    let mut space = AddressSpace::new();
    let mut decisions = Vec::with_capacity(placements.len());
    let mut guess: Option<Address> = None;

    for placement in placements {
        match placement {
            Placement::CursorOverride(addr) => {
                guess = Some(*addr);
                decisions.push(Decision::CursorMoved(*addr));
            }
            Placement::File { name, data } => {
                let resolution = resolve(name, guess);
                let start = resolution.address as usize;
                if start + data.len() > SPACE_SIZE {
                    return Err(AssembleError::AddressOverflow {
                        name: name.clone(),
                        start: resolution.address,
                        len: data.len(),
                    });
                }
                space.write(start, data);

                // The next unknown file goes right after this one.
                guess = Some((start + data.len()) as Address);
                decisions.push(Decision::Placed {
                    name: name.clone(),
                    start: resolution.address,
                    len: data.len(),
                    reason: resolution.reason,
                });
            }
        }
    }

    Ok(Assembly { space, decisions })
}

/// Parses a `0x…` cursor override.
///
/// Single underscores may separate digits (`0x1_000`, `0x_ff`). Values too
/// large for an [`Address`] saturate, so they still count as beyond 0xffff.
///
/// # Errors
/// Returns [`AssembleError::MalformedAddress`] unless `text` is `0x`
/// followed by hex digits.
pub fn parse_cursor_override(text: &str) -> Result<Address, AssembleError> {
    let malformed = || AssembleError::MalformedAddress(text.to_string());
    let digits = text.strip_prefix("0x").ok_or_else(malformed)?;
    if digits.ends_with('_') || digits.contains("__") {
        return Err(malformed());
    }

    let mut value: Address = 0;
    let mut seen_digit = false;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(16).ok_or_else(malformed)?;
        seen_digit = true;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(digit))
            .unwrap_or(Address::MAX);
    }
    if !seen_digit {
        return Err(malformed());
    }
    Ok(value)
}
