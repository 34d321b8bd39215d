//! Running balance of one trajectory during a projection

/// Unrounded state of a single compounding trajectory
#[derive(Debug, Clone)]
pub struct TrajectoryState {
    /// Months advanced so far
    pub month: u32,

    /// Unrounded balance at the end of `month`
    pub balance: f64,

    /// Growth factor applied each month: 1 + annual_rate / 12
    pub monthly_growth: f64,

    /// Amount added after growth each month
    pub monthly_contribution: f64,

    /// Running total of everything put in (principal plus contributions)
    pub contributed: f64,
}

impl TrajectoryState {
    /// Start a trajectory at month 0
    pub fn new(initial_amount: f64, annual_rate: f64, monthly_contribution: f64) -> Self {
        Self {
            month: 0,
            balance: initial_amount,
            monthly_growth: 1.0 + annual_rate / 12.0,
            monthly_contribution,
            contributed: initial_amount,
        }
    }

    /// Advance one month: compound first, then add the contribution
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.balance = self.balance * self.monthly_growth + self.monthly_contribution;
        self.contributed += self.monthly_contribution;
    }

    /// Balance rounded half away from zero to a whole monetary unit;
    /// `None` once the balance leaves the `i64` range or stops being finite
    pub fn rounded_balance(&self) -> Option<i64> {
        round_to_unit(self.balance)
    }
}

/// Round half away from zero to a whole unit.
///
/// Returns `None` for NaN, infinities and values outside `i64`.
pub fn round_to_unit(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    const LIMIT: f64 = i64::MAX as f64;
    let rounded = value.round();
    if rounded.is_finite() && rounded >= -LIMIT && rounded < LIMIT {
        Some(rounded as i64)
    } else {
        None
    }
}
