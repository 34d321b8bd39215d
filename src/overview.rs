//! Household budget snapshot and the insights derived from it

use serde::{Deserialize, Serialize};

/// Monthly income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Income {
    pub salary: f64,
    pub other: f64,
}

impl Default for Income {
    fn default() -> Self {
        Self { salary: 50_000.0, other: 10_000.0 }
    }
}

/// Monthly expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expenses {
    pub rent: f64,
    pub utilities: f64,
    pub groceries: f64,
    pub subscriptions: f64,
    pub miscellaneous: f64,
}

impl Default for Expenses {
    fn default() -> Self {
        Self {
            rent: 15_000.0,
            utilities: 3_000.0,
            groceries: 8_000.0,
            subscriptions: 2_000.0,
            miscellaneous: 5_000.0,
        }
    }
}

impl Expenses {
    pub fn total(&self) -> f64 {
        self.rent + self.utilities + self.groceries + self.subscriptions + self.miscellaneous
    }

    /// Expenses that cannot be cut in an emergency (subscriptions excluded)
    pub fn essential(&self) -> f64 {
        self.rent + self.utilities + self.groceries + self.miscellaneous
    }
}

/// Outstanding debt and its monthly instalment (EMI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Debts {
    pub total: f64,
    pub emi: f64,
}

impl Default for Debts {
    fn default() -> Self {
        Self { total: 500_000.0, emi: 10_000.0 }
    }
}

/// Savings and investments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Savings {
    pub emergency: f64,
    pub other: f64,
    pub sip_monthly: f64,
    pub lump_sum: f64,
}

impl Default for Savings {
    fn default() -> Self {
        Self {
            emergency: 100_000.0,
            other: 50_000.0,
            sip_monthly: 10_000.0,
            lump_sum: 200_000.0,
        }
    }
}

/// Snapshot of a household's monthly finances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetSnapshot {
    pub income: Income,
    pub expenses: Expenses,
    pub debts: Debts,
    pub savings: Savings,
}

impl BudgetSnapshot {
    pub fn total_income(&self) -> f64 {
        self.income.salary + self.income.other
    }

    /// All expenses plus the debt instalment
    pub fn total_outgoings(&self) -> f64 {
        self.expenses.total() + self.debts.emi
    }

    /// Income left after outgoings; negative when running a deficit
    pub fn monthly_surplus(&self) -> f64 {
        self.total_income() - self.total_outgoings()
    }

    /// Months until the debt is repaid at the current EMI.
    ///
    /// `Some(0)` when there is no debt, `None` when the EMI never repays it.
    pub fn debt_free_months(&self) -> Option<u32> {
        if self.debts.total <= 0.0 {
            return Some(0);
        }
        if !(self.debts.emi > 0.0) {
            return None;
        }
        Some((self.debts.total / self.debts.emi).ceil() as u32)
    }

    /// Whole months of essential expenses the emergency fund covers
    pub fn emergency_cover_months(&self) -> Option<u32> {
        let essential = self.expenses.essential();
        if !(essential > 0.0) {
            return None;
        }
        Some((self.savings.emergency.max(0.0) / essential).floor() as u32)
    }

    /// Summary of the derived figures
    pub fn insights(&self) -> BudgetInsights {
        BudgetInsights {
            total_income: self.total_income(),
            total_outgoings: self.total_outgoings(),
            monthly_surplus: self.monthly_surplus(),
            debt_free_months: self.debt_free_months(),
            emergency_cover_months: self.emergency_cover_months(),
        }
    }
}

/// Figures derived from a [`BudgetSnapshot`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetInsights {
    pub total_income: f64,
    pub total_outgoings: f64,
    pub monthly_surplus: f64,
    pub debt_free_months: Option<u32>,
    pub emergency_cover_months: Option<u32>,
}
