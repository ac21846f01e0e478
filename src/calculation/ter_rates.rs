//! TER monthly rate tables (PP 58/2023, effective January 2024).
//!
//! Each category has an ordered list of brackets. A bracket applies when the
//! monthly gross is less than or equal to its ceiling; incomes above the last
//! ceiling fall into the open top bracket at [`TER_TOP_RATE`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TerCategory;

/// Regulation reference for the TER tables.
pub const TER_REGULATION: &str = "PP 58/2023";

/// Rate applied above the last ceiling of every category.
pub const TER_TOP_RATE: Decimal = dec!(0.34);

/// One row of a TER table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerBracket {
    /// Inclusive upper bound of monthly gross income, in Rupiah.
    pub ceiling: i64,
    /// Rate applied to the whole gross income.
    pub rate: Decimal,
}

const fn bracket(ceiling: i64, rate: Decimal) -> TerBracket {
    TerBracket { ceiling, rate }
}

/// A category's complete rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerTable {
    /// The category this table belongs to.
    pub category: TerCategory,
    /// Bounded brackets, ascending by ceiling.
    pub brackets: &'static [TerBracket],
    /// Rate for income above the last bracket ceiling.
    pub top_rate: Decimal,
}

impl TerTable {
    /// Returns the upper bound of the leading zero-rate bracket.
    pub fn tax_free_ceiling(&self) -> i64 {
        self.brackets.first().map_or(0, |b| b.ceiling)
    }
}

static CATEGORY_A: [TerBracket; 43] = [
    bracket(5_400_000, dec!(0)),
    bracket(5_650_000, dec!(0.0025)),
    bracket(5_950_000, dec!(0.005)),
    bracket(6_300_000, dec!(0.0075)),
    bracket(6_750_000, dec!(0.01)),
    bracket(7_500_000, dec!(0.0125)),
    bracket(8_550_000, dec!(0.015)),
    bracket(9_650_000, dec!(0.0175)),
    bracket(10_050_000, dec!(0.02)),
    bracket(10_350_000, dec!(0.0225)),
    bracket(10_700_000, dec!(0.025)),
    bracket(11_050_000, dec!(0.03)),
    bracket(11_600_000, dec!(0.035)),
    bracket(12_500_000, dec!(0.04)),
    bracket(13_750_000, dec!(0.045)),
    bracket(15_100_000, dec!(0.05)),
    bracket(16_950_000, dec!(0.055)),
    bracket(19_750_000, dec!(0.06)),
    bracket(24_150_000, dec!(0.07)),
    bracket(26_450_000, dec!(0.075)),
    bracket(28_000_000, dec!(0.08)),
    bracket(30_050_000, dec!(0.085)),
    bracket(32_400_000, dec!(0.09)),
    bracket(35_400_000, dec!(0.095)),
    bracket(39_100_000, dec!(0.10)),
    bracket(43_850_000, dec!(0.11)),
    bracket(47_800_000, dec!(0.12)),
    bracket(51_400_000, dec!(0.13)),
    bracket(56_300_000, dec!(0.14)),
    bracket(62_200_000, dec!(0.15)),
    bracket(68_600_000, dec!(0.16)),
    bracket(77_500_000, dec!(0.17)),
    bracket(89_000_000, dec!(0.18)),
    bracket(103_000_000, dec!(0.19)),
    bracket(125_000_000, dec!(0.20)),
    bracket(157_000_000, dec!(0.21)),
    bracket(206_000_000, dec!(0.22)),
    bracket(337_000_000, dec!(0.23)),
    bracket(454_000_000, dec!(0.24)),
    bracket(550_000_000, dec!(0.25)),
    bracket(695_000_000, dec!(0.26)),
    bracket(910_000_000, dec!(0.27)),
    bracket(1_400_000_000, dec!(0.28)),
];

static CATEGORY_B: [TerBracket; 39] = [
    bracket(6_200_000, dec!(0)),
    bracket(6_500_000, dec!(0.0025)),
    bracket(6_850_000, dec!(0.005)),
    bracket(7_300_000, dec!(0.0075)),
    bracket(9_200_000, dec!(0.01)),
    bracket(10_750_000, dec!(0.015)),
    bracket(11_250_000, dec!(0.02)),
    bracket(11_600_000, dec!(0.025)),
    bracket(12_600_000, dec!(0.03)),
    bracket(13_600_000, dec!(0.035)),
    bracket(14_950_000, dec!(0.04)),
    bracket(16_400_000, dec!(0.045)),
    bracket(18_450_000, dec!(0.05)),
    bracket(21_850_000, dec!(0.055)),
    bracket(26_000_000, dec!(0.06)),
    bracket(27_700_000, dec!(0.07)),
    bracket(29_350_000, dec!(0.075)),
    bracket(31_450_000, dec!(0.08)),
    bracket(33_950_000, dec!(0.085)),
    bracket(37_100_000, dec!(0.09)),
    bracket(41_100_000, dec!(0.095)),
    bracket(45_800_000, dec!(0.10)),
    bracket(49_500_000, dec!(0.11)),
    bracket(53_800_000, dec!(0.12)),
    bracket(58_500_000, dec!(0.13)),
    bracket(64_000_000, dec!(0.14)),
    bracket(71_000_000, dec!(0.15)),
    bracket(80_000_000, dec!(0.16)),
    bracket(93_000_000, dec!(0.17)),
    bracket(109_000_000, dec!(0.18)),
    bracket(129_000_000, dec!(0.19)),
    bracket(163_000_000, dec!(0.20)),
    bracket(211_000_000, dec!(0.21)),
    bracket(374_000_000, dec!(0.22)),
    bracket(459_000_000, dec!(0.23)),
    bracket(555_000_000, dec!(0.24)),
    bracket(704_000_000, dec!(0.25)),
    bracket(957_000_000, dec!(0.26)),
    bracket(1_405_000_000, dec!(0.27)),
];

static CATEGORY_C: [TerBracket; 40] = [
    bracket(6_600_000, dec!(0)),
    bracket(6_950_000, dec!(0.0025)),
    bracket(7_350_000, dec!(0.005)),
    bracket(7_800_000, dec!(0.0075)),
    bracket(8_850_000, dec!(0.01)),
    bracket(9_800_000, dec!(0.0125)),
    bracket(10_950_000, dec!(0.015)),
    bracket(11_200_000, dec!(0.0175)),
    bracket(12_050_000, dec!(0.02)),
    bracket(12_950_000, dec!(0.025)),
    bracket(14_150_000, dec!(0.03)),
    bracket(15_550_000, dec!(0.035)),
    bracket(17_050_000, dec!(0.04)),
    bracket(19_500_000, dec!(0.045)),
    bracket(22_700_000, dec!(0.05)),
    bracket(26_600_000, dec!(0.055)),
    bracket(28_100_000, dec!(0.06)),
    bracket(30_100_000, dec!(0.07)),
    bracket(32_600_000, dec!(0.08)),
    bracket(35_400_000, dec!(0.085)),
    bracket(38_900_000, dec!(0.09)),
    bracket(43_000_000, dec!(0.095)),
    bracket(47_400_000, dec!(0.10)),
    bracket(51_200_000, dec!(0.11)),
    bracket(55_800_000, dec!(0.12)),
    bracket(60_400_000, dec!(0.13)),
    bracket(66_700_000, dec!(0.14)),
    bracket(74_500_000, dec!(0.15)),
    bracket(83_200_000, dec!(0.16)),
    bracket(95_600_000, dec!(0.17)),
    bracket(110_000_000, dec!(0.18)),
    bracket(134_000_000, dec!(0.19)),
    bracket(169_000_000, dec!(0.20)),
    bracket(221_000_000, dec!(0.21)),
    bracket(390_000_000, dec!(0.22)),
    bracket(463_000_000, dec!(0.23)),
    bracket(561_000_000, dec!(0.24)),
    bracket(709_000_000, dec!(0.25)),
    bracket(965_000_000, dec!(0.26)),
    bracket(1_419_000_000, dec!(0.27)),
];

static TABLE_A: TerTable = TerTable {
    category: TerCategory::A,
    brackets: &CATEGORY_A,
    top_rate: TER_TOP_RATE,
};

static TABLE_B: TerTable = TerTable {
    category: TerCategory::B,
    brackets: &CATEGORY_B,
    top_rate: TER_TOP_RATE,
};

static TABLE_C: TerTable = TerTable {
    category: TerCategory::C,
    brackets: &CATEGORY_C,
    top_rate: TER_TOP_RATE,
};

/// Returns the rate table for a TER category.
pub fn ter_table(category: TerCategory) -> &'static TerTable {
    match category {
        TerCategory::A => &TABLE_A,
        TerCategory::B => &TABLE_B,
        TerCategory::C => &TABLE_C,
    }
}
