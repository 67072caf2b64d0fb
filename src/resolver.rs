use crate::table::{Address, AddressEntry, ADDRESS_TABLE};

/// Used when a name matches nothing and there is no usable guess.
pub const DEFAULT_ADDRESS: Address = 0x8000;

/// Largest address a guess may point at before it is ignored.
pub const MAX_ADDRESS: Address = 0xffff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The name contains this fragment from the address table.
    Matched(&'static str),
    /// Nothing matched; the guess from the previous placement was used.
    Guessed,
    /// Nothing matched and no guess was usable.
    Defaulted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub address: Address,
    pub reason: Reason,
}

/// Picks the start address for `name` using the built-in address table.
///
/// Lookup is case-insensitive. The first table entry (lowest address) with a
/// fragment contained in the name wins. Otherwise `guess` is used, unless it
/// is absent or beyond 0xffff, in which case [`DEFAULT_ADDRESS`] is returned.
#[must_use]
pub fn resolve(name: &str, guess: Option<Address>) -> Resolution {
    resolve_with_table(ADDRESS_TABLE, name, guess)
}

#[must_use]
pub fn resolve_with_table(
    table: &[AddressEntry],
    name: &str,
    guess: Option<Address>,
) -> Resolution {
    let lname = name.to_lowercase();

    for entry in table {
        if let Some(pattern) = entry.patterns.iter().find(|p| lname.contains(**p)) {
            return Resolution {
                address: entry.address,
                reason: Reason::Matched(*pattern),
            };
        }
    }

    match guess {
        Some(address) if address <= MAX_ADDRESS => Resolution {
            address,
            reason: Reason::Guessed,
        },
        _ => Resolution {
            address: DEFAULT_ADDRESS,
            reason: Reason::Defaulted,
        },
    }
}
