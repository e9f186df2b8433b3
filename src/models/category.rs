use std::str::FromStr;

use crate::error::LedgerError;

/// Fixed set of labels a transaction can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Category {
    Salary,
    Investment,
    Gift,
    Groceries,
    Utilities,
    Rent,
    Transportation,
    Dining,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "SALARY",
            Self::Investment => "INVESTMENT",
            Self::Gift => "GIFT",
            Self::Groceries => "GROCERIES",
            Self::Utilities => "UTILITIES",
            Self::Rent => "RENT",
            Self::Transportation => "TRANSPORTATION",
            Self::Dining => "DINING",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Healthcare => "HEALTHCARE",
            Self::Shopping => "SHOPPING",
            Self::Education => "EDUCATION",
            Self::Other => "OTHER",
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Salary,
            Self::Investment,
            Self::Gift,
            Self::Groceries,
            Self::Utilities,
            Self::Rent,
            Self::Transportation,
            Self::Dining,
            Self::Entertainment,
            Self::Healthcare,
            Self::Shopping,
            Self::Education,
            Self::Other,
        ]
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    /// Exact, case-sensitive match against the canonical labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| LedgerError::InvalidCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
