//! Bank layouts for every supported cartridge type.
//!
//! A layout is data: the slices copied into CPU-visible windows when the
//! cartridge starts, plus the kind of run-time switching (if any) it does.
//!
//! ```text
//! Std4        $8000-$8FFF, $9000-$9FFF, $A000-$AFFF, $B000-$BFFF <- img $0000-$0FFF
//! Std8        $8000-$9FFF, $A000-$BFFF                           <- img $0000-$1FFF
//! NonSplit16  $8000-$BFFF                                        <- img $0000-$3FFF
//! Split16     $4000-$5FFF <- img $0000-$1FFF
//!             $6000-$9FFF <- img $0000-$3FFF
//!             $A000-$BFFF <- img $2000-$3FFF
//! Std32       $4000-$BFFF                                        <- img $0000-$7FFF
//! BountyBob40 $4000-$4FFF, $5000-$5FFF switched via $4FF6-9 / $5FF6-9
//!             $8000-$9FFF, $A000-$BFFF <- img $8000-$9FFF
//! Super*      $4000-$BFFF <- one 32 KiB bank, switched via $BFC0-$BFFF
//! ```

use serde::{Deserialize, Serialize};

const KIB: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CartType {
    None,
    Std4,
    Std8,
    /// 16 KiB, linear at $8000
    NonSplit16,
    /// 16 KiB, halves mirrored across $4000-$BFFF
    Split16,
    Std32,
    BountyBob40,
    /// Bounty Bob dump with the 4 KiB slices stored in a different order
    BountyBob40Alt,
    Super64,
    Super128,
    Super256,
    Super512,
}

/// One slice copied into a fixed CPU window at start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCopy {
    pub source: usize,
    pub dest: u16,
    pub len: usize,
}

const fn copy(source: usize, dest: u16, len: usize) -> WindowCopy {
    WindowCopy { source, dest, len }
}

/// Image offsets of the first 4 KiB slice for each Bounty Bob window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BountyBobBases {
    /// Slices for $4000-$4FFF, selected through $4FF6-$4FF9
    pub low: usize,
    /// Slices for $5000-$5FFF, selected through $5FF6-$5FF9
    pub high: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switching {
    Fixed,
    /// 32 KiB banks at $4000-$BFFF, selected by any access to $BFC0-$BFFF
    Super,
    BountyBob(BountyBobBases),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankLayout {
    pub copies: &'static [WindowCopy],
    pub switching: Switching,
}

static NONE: BankLayout = BankLayout {
    copies: &[],
    switching: Switching::Fixed,
};

static STD4: BankLayout = BankLayout {
    copies: &[
        copy(0, 0x8000, 0x1000),
        copy(0, 0x9000, 0x1000),
        copy(0, 0xA000, 0x1000),
        copy(0, 0xB000, 0x1000),
    ],
    switching: Switching::Fixed,
};

static STD8: BankLayout = BankLayout {
    copies: &[copy(0, 0x8000, 0x2000), copy(0, 0xA000, 0x2000)],
    switching: Switching::Fixed,
};

static NON_SPLIT16: BankLayout = BankLayout {
    copies: &[copy(0, 0x8000, 0x4000)],
    switching: Switching::Fixed,
};

static SPLIT16: BankLayout = BankLayout {
    copies: &[
        copy(0, 0x4000, 0x2000),
        copy(0, 0x6000, 0x4000),
        copy(0x2000, 0xA000, 0x2000),
    ],
    switching: Switching::Fixed,
};

static STD32: BankLayout = BankLayout {
    copies: &[copy(0, 0x4000, 0x8000)],
    switching: Switching::Fixed,
};

static BOUNTY_BOB40: BankLayout = BankLayout {
    copies: &[
        copy(0, 0x4000, 0x1000),
        copy(0x4000, 0x5000, 0x1000),
        copy(0x8000, 0x8000, 0x2000),
        copy(0x8000, 0xA000, 0x2000),
    ],
    switching: Switching::BountyBob(BountyBobBases {
        low: 0,
        high: 0x4000,
    }),
};

static BOUNTY_BOB40_ALT: BankLayout = BankLayout {
    copies: &[
        copy(0x2000, 0x4000, 0x1000),
        copy(0x6000, 0x5000, 0x1000),
        copy(0, 0x8000, 0x2000),
        copy(0, 0xA000, 0x2000),
    ],
    switching: Switching::BountyBob(BountyBobBases {
        low: 0x2000,
        high: 0x6000,
    }),
};

static SUPER: BankLayout = BankLayout {
    copies: &[],
    switching: Switching::Super,
};

pub const SUPER_BANK_SIZE: usize = 32 * KIB;

impl BankLayout {
    /// Whether the cartridge drives any byte of `start..=end` after start-up
    pub fn covers(&self, start: u16, end: u16) -> bool {
        if let Switching::Super = self.switching {
            return start <= 0xBFFF && end >= 0x4000;
        }
        self.copies.iter().any(|c| {
            let last = c.dest as usize + c.len - 1;
            (c.dest as usize) <= end as usize && last >= start as usize
        })
    }
}

impl CartType {
    pub fn layout(self) -> &'static BankLayout {
        match self {
            CartType::None => &NONE,
            CartType::Std4 => &STD4,
            CartType::Std8 => &STD8,
            CartType::NonSplit16 => &NON_SPLIT16,
            CartType::Split16 => &SPLIT16,
            CartType::Std32 => &STD32,
            CartType::BountyBob40 => &BOUNTY_BOB40,
            CartType::BountyBob40Alt => &BOUNTY_BOB40_ALT,
            CartType::Super64 | CartType::Super128 | CartType::Super256 | CartType::Super512 => {
                &SUPER
            }
        }
    }

    /// Default type for an uncataloged raw image of exactly `size` bytes
    pub fn from_size(size: usize) -> Option<Self> {
        match size / KIB {
            _ if size % KIB != 0 => None,
            4 => Some(CartType::Std4),
            8 => Some(CartType::Std8),
            16 => Some(CartType::NonSplit16),
            32 => Some(CartType::Std32),
            40 => Some(CartType::BountyBob40),
            64 => Some(CartType::Super64),
            128 => Some(CartType::Super128),
            256 => Some(CartType::Super256),
            512 => Some(CartType::Super512),
            _ => None,
        }
    }

    /// Smallest image the layout can be served from
    pub fn min_image_size(self) -> usize {
        match self {
            CartType::None => 0,
            CartType::Std4 => 4 * KIB,
            CartType::Std8 => 8 * KIB,
            CartType::NonSplit16 | CartType::Split16 => 16 * KIB,
            CartType::Std32 => 32 * KIB,
            CartType::BountyBob40 | CartType::BountyBob40Alt => 40 * KIB,
            CartType::Super64 => 64 * KIB,
            CartType::Super128 => 128 * KIB,
            CartType::Super256 => 256 * KIB,
            CartType::Super512 => 512 * KIB,
        }
    }

    pub fn is_super(self) -> bool {
        matches!(self.layout().switching, Switching::Super)
    }

    /// Numeric tag written into snapshots. Values are frozen; never renumber.
    pub fn tag(self) -> i32 {
        match self {
            CartType::None => 0,
            CartType::Std32 => 4,
            CartType::Split16 => 6,
            CartType::BountyBob40 => 7,
            CartType::NonSplit16 => 16,
            CartType::Std8 => 19,
            CartType::Std4 => 20,
            CartType::Super64 => 71,
            CartType::Super128 => 72,
            CartType::Super256 => 73,
            CartType::Super512 => 74,
            CartType::BountyBob40Alt => 75,
        }
    }

    pub fn from_tag(tag: i32) -> Option<Self> {
        ALL_TYPES.iter().copied().find(|t| t.tag() == tag)
    }
}

const ALL_TYPES: [CartType; 12] = [
    CartType::None,
    CartType::Std4,
    CartType::Std8,
    CartType::NonSplit16,
    CartType::Split16,
    CartType::Std32,
    CartType::BountyBob40,
    CartType::BountyBob40Alt,
    CartType::Super64,
    CartType::Super128,
    CartType::Super256,
    CartType::Super512,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_fallback_types() {
        assert_eq!(CartType::from_size(4 * KIB), Some(CartType::Std4));
        assert_eq!(CartType::from_size(16 * KIB), Some(CartType::NonSplit16));
        assert_eq!(CartType::from_size(40 * KIB), Some(CartType::BountyBob40));
        assert_eq!(CartType::from_size(512 * KIB), Some(CartType::Super512));
        assert_eq!(CartType::from_size(16 * KIB + 1), None);
        assert_eq!(CartType::from_size(24 * KIB), None);
        assert_eq!(CartType::from_size(1024 * KIB), None);
    }

    #[test]
    fn test_copies_fit_minimum_image() {
        for t in ALL_TYPES {
            for c in t.layout().copies {
                assert!(c.source + c.len <= t.min_image_size(), "{:?}", t);
                assert!(c.dest as usize + c.len <= 0xC000, "{:?}", t);
                assert!(c.dest >= 0x4000, "{:?}", t);
            }
        }
    }

    #[test]
    fn test_bounty_bob_slices_fit() {
        for t in [CartType::BountyBob40, CartType::BountyBob40Alt] {
            match t.layout().switching {
                Switching::BountyBob(bases) => {
                    assert!(bases.low + 4 * 0x1000 <= t.min_image_size());
                    assert!(bases.high + 4 * 0x1000 <= t.min_image_size());
                }
                other => panic!("unexpected switching {:?}", other),
            }
        }
    }

    #[test]
    fn test_tags_are_unique_and_reversible() {
        for t in ALL_TYPES {
            assert_eq!(CartType::from_tag(t.tag()), Some(t));
        }
        assert_eq!(CartType::from_tag(999), None);
    }

    #[test]
    fn test_window_coverage() {
        assert!(!CartType::None.layout().covers(0x8000, 0x9FFF));
        assert!(CartType::Std4.layout().covers(0xA000, 0xBFFF));
        assert!(CartType::Std32.layout().covers(0x8000, 0x9FFF));
        assert!(CartType::Super128.layout().covers(0xA000, 0xBFFF));
        assert!(CartType::BountyBob40.layout().covers(0x8000, 0x9FFF));
        assert!(!CartType::NonSplit16.layout().covers(0x4000, 0x7FFF));
    }

    #[test]
    fn test_super_types() {
        assert!(CartType::Super64.is_super());
        assert!(CartType::Super512.is_super());
        assert!(!CartType::Std32.is_super());
        assert!(!CartType::BountyBob40.is_super());
    }
}
