//! Known start addresses and the file name fragments that select them.
//!
//! Entries are kept in ascending address order and are searched in that
//! order, so a lower address wins when several fragments match one name.
//! The most general fragments ("kernel", "edit") work because those ROMs
//! start at the same address in every version. BASIC begins at 0xb000 for
//! version 4 and at 0xc000 for versions 1 and 2. Editor ROMs all start at
//! 0xe000, some are 2 KB and some 4 KB.

pub type Address = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressEntry {
    pub address: Address,
    pub patterns: &'static [&'static str],
}

pub const ADDRESS_TABLE: &[AddressEntry] = &[
    AddressEntry {
        address: 0x9000,
        patterns: &["9000"],
    },
    AddressEntry {
        address: 0xa000,
        patterns: &["a000"],
    },
    AddressEntry {
        address: 0xb000,
        patterns: &["b000", "901465-19", "901465-23", "basic-4"],
    },
    AddressEntry {
        address: 0xc000,
        patterns: &[
            "c000",
            "901439-01",
            "901447-01",
            "901439-09",
            "901447-09",
            "basic-1",
            "901465-01",
            "901439-13",
            "901447-20",
            "basic-2",
            "901465-20", // basic-4
        ],
    },
    AddressEntry {
        address: 0xc800,
        patterns: &[
            "c800",
            "901439-05",
            "901447-02", // basic-1
            "901447-21", // basic-2
        ],
    },
    AddressEntry {
        address: 0xd000,
        patterns: &[
            "d000",
            "901439-02",
            "901447-03", // basic-1
            "901465-02",
            "901439-15",
            "901447-22", // basic-2
            "901465-21", // basic-4
        ],
    },
    AddressEntry {
        address: 0xd800,
        patterns: &[
            "d800",
            "901439-06",
            "901447-04", // basic-1
            "901439-16",
            "901447-23", // basic-2
        ],
    },
    AddressEntry {
        address: 0xe000,
        patterns: &[
            "e000",
            "edit",
            "901439-03",
            "901447-04", // edit-1
            "901439-17",
            "901447-24", // edit-2
            "901499-01",
            "901474-04",
            "901474-02",
        ],
    },
    AddressEntry {
        address: 0xef00,
        patterns: &["ef00"],
    },
    AddressEntry {
        address: 0xf000,
        patterns: &[
            "f000",
            "901439-04",
            "901447-06", // kernel-1
            "901465-03",
            "901439-18",
            "901447-25", // kernel-2
            "901465-22", // kernel-4
            "kernel",
            "kernal",
        ],
    },
    AddressEntry {
        address: 0xf800,
        patterns: &[
            "f800",
            "901439-07",
            "901447-07", // kernel-1
            "901439-19",
            "901447-26", // kernel-2
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::ADDRESS_TABLE;

    #[test]
    fn entries_are_strictly_ascending() {
        for pair in ADDRESS_TABLE.windows(2) {
            assert!(
                pair[0].address < pair[1].address,
                "{:#06x} must come before {:#06x}",
                pair[0].address,
                pair[1].address
            );
        }
    }

    #[test]
    fn patterns_are_lowercase_and_non_empty() {
        for entry in ADDRESS_TABLE {
            assert!(!entry.patterns.is_empty());
            for pattern in entry.patterns {
                assert!(!pattern.is_empty());
                assert_eq!(*pattern, pattern.to_lowercase());
            }
        }
    }

    #[test]
    fn every_entry_matches_its_own_address_text() {
        for entry in ADDRESS_TABLE {
            let text = format!("{:04x}", entry.address);
            assert_eq!(entry.patterns[0], text);
        }
    }

    #[test]
    fn all_addresses_fit_in_the_exported_window() {
        for entry in ADDRESS_TABLE {
            assert!((0x8000..=0xffff).contains(&entry.address));
        }
    }
}
