//! # Channel Number Tables
//!
//! Static downlink channel-number allocations for LTE and NR.
//!
//! Each table is an ordered list of inclusive ranges. Order is significant:
//! where ranges overlap, the classifier picks the earliest row. The NR table
//! relies on this (n1 before n66, n77 before n78, n50 before n75, n70 before
//! n25).
//!
//! Sources:
//! - LTE: 3GPP TS 36.101, Table 5.7.3-1 "E-UTRA channel numbers" (N_DL range)
//! - NR FR1: 3GPP TS 38.101-1, Table 5.4.2.3-1 (downlink NR-ARFCN range)
//! - NR FR2: 3GPP TS 38.101-2, Table 5.4.2.3-1

use serde::{Deserialize, Serialize};

use crate::band::{Band, Rat};

// ─── Band Range ─────────────────────────────────────────────────────────────

/// One row of a band table: channel codes `min..=max` map to `band`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BandRange {
    /// 3GPP band number.
    pub band: u16,
    /// Lowest channel code in the band (inclusive).
    pub min: u32,
    /// Highest channel code in the band (inclusive).
    pub max: u32,
}

impl BandRange {
    /// Build a row. Evaluated at compile time for the static tables, so an
    /// inverted range is a build error rather than a silent dead row.
    pub const fn new(band: u16, min: u32, max: u32) -> Self {
        assert!(min <= max, "band range min exceeds max");
        BandRange { band, min, max }
    }

    /// Inclusive containment check. Negative codes are never contained.
    pub const fn contains(&self, code: i64) -> bool {
        code >= self.min as i64 && code <= self.max as i64
    }

    /// Number of channel codes covered by this row.
    pub const fn width(&self) -> u32 {
        self.max - self.min + 1
    }
}

// ─── Band Table ─────────────────────────────────────────────────────────────

/// Ordered, immutable band table for one channel-numbering scheme.
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    rat: Rat,
    ranges: &'static [BandRange],
}

impl BandTable {
    pub const fn new(rat: Rat, ranges: &'static [BandRange]) -> Self {
        BandTable { rat, ranges }
    }

    /// The built-in table for `rat`.
    pub fn for_rat(rat: Rat) -> &'static BandTable {
        match rat {
            Rat::Lte => &EUTRA,
            Rat::Nr => &NR,
        }
    }

    pub fn rat(&self) -> Rat {
        self.rat
    }

    pub fn ranges(&self) -> &'static [BandRange] {
        self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'static, BandRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// First row whose range contains `code`.
    pub fn find(&self, code: i64) -> Option<&'static BandRange> {
        self.ranges.iter().find(|r| r.contains(code))
    }

    /// Resolve `code` to a band using the first-match rule.
    ///
    /// `None` means no row covers the code, which is a normal outcome for
    /// codes outside every standardized range.
    pub fn resolve(&self, code: i64) -> Option<Band> {
        self.find(code).map(|r| Band {
            number: r.band,
            rat: self.rat,
        })
    }

    /// First row for a band number, if the table lists it.
    pub fn range_of(&self, band: u16) -> Option<&'static BandRange> {
        self.ranges.iter().find(|r| r.band == band)
    }
}

impl IntoIterator for &BandTable {
    type Item = &'static BandRange;
    type IntoIter = std::slice::Iter<'static, BandRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── LTE (EARFCN) ───────────────────────────────────────────────────────────

const EUTRA_RANGES: &[BandRange] = &[
    // ─── FDD ───────────────────────────────────────────────────────
    BandRange::new(1, 0, 599),
    BandRange::new(2, 600, 1199),
    BandRange::new(3, 1200, 1949),
    BandRange::new(4, 1950, 2399),
    BandRange::new(5, 2400, 2649),
    BandRange::new(6, 2650, 2749),
    BandRange::new(7, 2750, 3449),
    BandRange::new(8, 3450, 3799),
    BandRange::new(9, 3800, 4149),
    BandRange::new(10, 4150, 4749),
    BandRange::new(11, 4750, 4949),
    BandRange::new(12, 5010, 5179),
    BandRange::new(13, 5180, 5279),
    BandRange::new(14, 5280, 5379),
    BandRange::new(17, 5730, 5849),
    BandRange::new(18, 5850, 5999),
    BandRange::new(19, 6000, 6149),
    BandRange::new(20, 6150, 6449),
    BandRange::new(21, 6450, 6599),
    BandRange::new(22, 6600, 7399),
    BandRange::new(23, 7500, 7699),
    BandRange::new(24, 7700, 8039),
    BandRange::new(25, 8040, 8689),
    BandRange::new(26, 8690, 9039),
    BandRange::new(27, 9040, 9209),
    BandRange::new(28, 9210, 9659),
    BandRange::new(29, 9660, 9769), // SDL
    BandRange::new(30, 9770, 9869),
    BandRange::new(31, 9870, 9919),
    BandRange::new(32, 9920, 10359), // SDL
    // ─── TDD ───────────────────────────────────────────────────────
    BandRange::new(33, 36000, 36199),
    BandRange::new(34, 36200, 36349),
    BandRange::new(35, 36350, 36949),
    BandRange::new(36, 36950, 37549),
    BandRange::new(37, 37550, 37749),
    BandRange::new(38, 37750, 38249),
    BandRange::new(39, 38250, 38649),
    BandRange::new(40, 38650, 39649),
    BandRange::new(41, 39650, 41589),
    BandRange::new(42, 41590, 43589),
    BandRange::new(43, 43590, 45589),
    BandRange::new(44, 45590, 46589),
    BandRange::new(45, 46590, 46789),
    BandRange::new(46, 46790, 54539), // LAA
    BandRange::new(47, 54540, 55239),
    BandRange::new(48, 55240, 56739), // CBRS
    BandRange::new(49, 56740, 58239),
    BandRange::new(50, 58240, 59089),
    BandRange::new(51, 59090, 59139),
    BandRange::new(52, 59140, 60139),
    BandRange::new(53, 60140, 60254),
    // ─── Extended EARFCN range ─────────────────────────────────────
    BandRange::new(65, 65536, 66435),
    BandRange::new(66, 66436, 67335),
    BandRange::new(67, 67336, 67535), // SDL
    BandRange::new(68, 67536, 67835),
    BandRange::new(69, 67836, 68335), // SDL
    BandRange::new(70, 68336, 68585),
    BandRange::new(71, 68586, 68935),
    BandRange::new(72, 68936, 68985),
    BandRange::new(73, 68986, 69035),
    BandRange::new(74, 69036, 69465),
    BandRange::new(75, 69466, 70315), // SDL
    BandRange::new(76, 70316, 70365), // SDL
    BandRange::new(85, 70366, 70545),
    BandRange::new(87, 70546, 70595),
    BandRange::new(88, 70596, 70645),
];

/// LTE downlink EARFCN table.
pub static EUTRA: BandTable = BandTable::new(Rat::Lte, EUTRA_RANGES);

// ─── NR (NR-ARFCN) ──────────────────────────────────────────────────────────

const NR_RANGES: &[BandRange] = &[
    // ─── FR1 ───────────────────────────────────────────────────────
    BandRange::new(1, 422000, 434000),
    BandRange::new(2, 386000, 398000),
    BandRange::new(3, 361000, 376000),
    BandRange::new(5, 173800, 178800),
    BandRange::new(7, 524000, 538000),
    BandRange::new(8, 185000, 192000),
    BandRange::new(12, 145800, 149200),
    BandRange::new(20, 158200, 164200),
    BandRange::new(28, 151600, 160600),
    BandRange::new(38, 514000, 524000),
    BandRange::new(39, 376000, 384000),
    BandRange::new(40, 460000, 480000),
    BandRange::new(41, 499200, 537999),
    BandRange::new(50, 286400, 303400),
    BandRange::new(51, 285400, 286400),
    BandRange::new(66, 422000, 440000),
    BandRange::new(70, 399000, 404000),
    // Only 398001..=398999 is left past n2 and before n70.
    BandRange::new(25, 386000, 399000),
    BandRange::new(71, 123400, 130400),
    BandRange::new(74, 295000, 303600),
    BandRange::new(75, 286400, 303400),
    BandRange::new(76, 285400, 286400),
    BandRange::new(77, 620000, 680000),
    BandRange::new(78, 620000, 653333),
    BandRange::new(79, 693334, 733333),
    // ─── FR2 (mmWave) ──────────────────────────────────────────────
    BandRange::new(257, 2054167, 2104166),
    BandRange::new(258, 2016667, 2070833),
    BandRange::new(260, 2229167, 2279166),
];

/// NR downlink NR-ARFCN table.
pub static NR: BandTable = BandTable::new(Rat::Nr, NR_RANGES);
