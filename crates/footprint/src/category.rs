//! The nine survey categories scored by the engine.

use serde::{Deserialize, Serialize};

/// One top-level block of the lifestyle survey.
///
/// Declaration order is the order categories are scored and reported in, so
/// a `BTreeMap<Category, _>` iterates them the same way on every run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Diet,
    Transport,
    Travel,
    Fashion,
    Home,
    Lifestyle,
    Electronics,
    Waste,
    Offsetting,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Diet,
        Category::Transport,
        Category::Travel,
        Category::Fashion,
        Category::Home,
        Category::Lifestyle,
        Category::Electronics,
        Category::Waste,
        Category::Offsetting,
    ];

    /// Wire name of the category (the top-level request key).
    pub fn name(self) -> &'static str {
        match self {
            Category::Diet => "diet",
            Category::Transport => "transport",
            Category::Travel => "travel",
            Category::Fashion => "fashion",
            Category::Home => "home",
            Category::Lifestyle => "lifestyle",
            Category::Electronics => "electronics",
            Category::Waste => "waste",
            Category::Offsetting => "offsetting",
        }
    }

    /// Whether the category subtotal is clamped at zero before it is stored.
    ///
    /// Only diet, transport and waste carry explicit reduction terms that can
    /// push the running value below zero. The other positive categories are
    /// non-negative by construction.
    pub fn floors_subtotal(self) -> bool {
        matches!(
            self,
            Category::Diet | Category::Transport | Category::Waste
        )
    }

    /// Offsetting is the only category whose raw subtotal may be negative.
    pub fn is_credit(self) -> bool {
        self == Category::Offsetting
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
