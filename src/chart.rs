/// Two-slice proportion data for the payment breakup chart.
///
/// The widget core produces these; the frontend renders them. Any renderer
/// that can draw a two-slice proportion from labels + values can be swapped
/// in without touching the core.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: [&'static str; 2],
    pub values: [f64; 2],
}

impl ChartData {
    /// Principal vs. interest portion of the total payment, unrounded.
    pub fn payment_breakup(principal: f64, interest_portion: f64) -> Self {
        ChartData {
            labels: ["Principal", "Interest"],
            values: [principal, interest_portion],
        }
    }

    pub fn total(&self) -> f64 {
        self.values[0] + self.values[1]
    }

    /// Fraction of the total in slice `idx`, 0 when the total is empty.
    pub fn share(&self, idx: usize) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.values[idx] / total
        } else {
            0.0
        }
    }
}
