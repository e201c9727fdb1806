//! Card brand classification.
//!
//! `BRANDS` is scanned in order and the first entry with a matching prefix
//! wins. Some prefixes overlap across entries (Elo `438935` starts with Visa's
//! `4`, Hipercard `3841` with Diners Club's `38`), so the order is part of the
//! contract.

use crate::utils::clean_numeric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBrand {
    pub name: &'static str,
    pub prefixes: &'static [&'static str],
    pub lengths: &'static [usize],
}

impl CardBrand {
    #[must_use]
    pub fn matches(&self, digits: &str) -> bool {
        self.prefixes.iter().any(|p| digits.starts_with(p))
    }

    #[must_use]
    pub fn accepts_length(&self, len: usize) -> bool {
        self.lengths.contains(&len)
    }

    /// Prefixes that classify back to this brand. Prefixes shadowed by an
    /// earlier entry are skipped.
    pub fn generation_prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.prefixes
            .iter()
            .copied()
            .filter(move |p| detect_brand(p).is_some_and(|b| b.name == self.name))
    }
}

pub static BRANDS: [CardBrand; 8] = [
    CardBrand {
        name: "Visa",
        prefixes: &["4"],
        lengths: &[13, 16, 19],
    },
    CardBrand {
        name: "Mastercard",
        prefixes: &[
            "51", "52", "53", "54", "55", "22", "23", "24", "25", "26", "27",
        ],
        lengths: &[16],
    },
    CardBrand {
        name: "American Express",
        prefixes: &["34", "37"],
        lengths: &[15],
    },
    CardBrand {
        name: "Discover",
        prefixes: &["6011", "65"],
        lengths: &[16, 19],
    },
    CardBrand {
        name: "Diners Club",
        prefixes: &["300", "301", "302", "303", "304", "305", "36", "38"],
        lengths: &[14, 16, 19],
    },
    CardBrand {
        name: "JCB",
        // 35 followed by three more digits; card lengths always supply them
        prefixes: &["2131", "1800", "35"],
        lengths: &[16, 17, 18, 19],
    },
    CardBrand {
        name: "Elo",
        prefixes: &["636368", "438935", "504175", "451416", "636297", "627780"],
        lengths: &[16],
    },
    CardBrand {
        name: "Hipercard",
        prefixes: &["606282", "3841"],
        lengths: &[16],
    },
];

/// First brand whose prefix matches `digits`.
#[must_use]
pub fn detect_brand(digits: &str) -> Option<&'static CardBrand> {
    BRANDS.iter().find(|brand| brand.matches(digits))
}

/// Brand by name, ignoring ASCII case.
#[must_use]
pub fn find_brand(name: &str) -> Option<&'static CardBrand> {
    BRANDS
        .iter()
        .find(|brand| brand.name.eq_ignore_ascii_case(name))
}

/// Brand name of a raw card number, separators allowed.
#[must_use]
pub fn credit_card_brand(value: &str) -> Option<&'static str> {
    detect_brand(&clean_numeric(value)).map(|b| b.name)
}
