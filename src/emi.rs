use crate::app::InputValues;

/// How the entered interest rate is interpreted.
///
/// `Monthly` maps the entered percentage through `/100/12` to the periodic
/// rate, `Annual` applies it per period directly. The toggle control is
/// labeled with the basis it would switch *to*, not the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBasis {
    Annual,
    Monthly,
}

impl RateBasis {
    pub fn toggled(self) -> Self {
        match self {
            RateBasis::Annual => RateBasis::Monthly,
            RateBasis::Monthly => RateBasis::Annual,
        }
    }

    /// Label for the toggle control: the basis it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            RateBasis::Monthly => "Annual Interest",
            RateBasis::Annual => "Monthly Interest",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RateBasis::Annual => "annual",
            RateBasis::Monthly => "monthly",
        }
    }
}

/// Validated numeric inputs for one computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanRequest {
    pub principal: f64,
    pub rate_percent: f64,
    pub term_years: f64,
    pub basis: RateBasis,
}

/// The three derived figures, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl LoanRequest {
    /// Parse already-validated field text. Returns `None` if any field does
    /// not parse, which validation rules out.
    pub fn parse(inputs: &InputValues, basis: RateBasis) -> Option<LoanRequest> {
        Some(LoanRequest {
            principal: inputs.amount.parse().ok()?,
            rate_percent: inputs.interest.parse().ok()?,
            term_years: inputs.years.parse().ok()?,
            basis,
        })
    }

    pub fn periodic_rate(&self) -> f64 {
        match self.basis {
            RateBasis::Monthly => self.rate_percent / 100.0 / 12.0,
            RateBasis::Annual => self.rate_percent / 100.0,
        }
    }

    /// Standard amortization formula.
    ///
    /// Returns `None` when the payment is not finite (a periodic rate small
    /// enough that `(1 + r)^n` collapses to 1). Callers must leave prior
    /// results untouched in that case.
    pub fn compute(&self) -> Option<Breakdown> {
        let r = self.periodic_rate();
        let n = self.term_years * 12.0;
        let x = (1.0 + r).powf(n);
        let monthly = self.principal * x * r / (x - 1.0);

        if !monthly.is_finite() {
            return None;
        }

        let total = monthly * n;
        Some(Breakdown {
            monthly_payment: monthly,
            total_payment: total,
            total_interest: total - self.principal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(principal: f64, rate: f64, years: f64, basis: RateBasis) -> LoanRequest {
        LoanRequest {
            principal,
            rate_percent: rate,
            term_years: years,
            basis,
        }
    }

    #[test]
    fn worked_example_100k_at_10_percent_over_5_years() {
        // r = 0.10 / 12, n = 60
        let b = request(100_000.0, 10.0, 5.0, RateBasis::Monthly)
            .compute()
            .expect("finite payment");
        assert!((b.monthly_payment - 2124.70).abs() < 0.01);
        assert!((b.total_payment - b.monthly_payment * 60.0).abs() < 1e-9);
        assert!((b.total_interest - (b.total_payment - 100_000.0)).abs() < 1e-9);
    }

    #[test]
    fn annual_basis_applies_the_rate_per_period() {
        let monthly_basis = request(10_000.0, 12.0, 1.0, RateBasis::Monthly);
        let annual_basis = request(10_000.0, 1.0, 1.0, RateBasis::Annual);
        // 12%/100/12 == 1%/100, so both describe the same periodic rate.
        assert_eq!(monthly_basis.periodic_rate(), annual_basis.periodic_rate());
        let a = monthly_basis.compute().expect("finite");
        let b = annual_basis.compute().expect("finite");
        assert!((a.monthly_payment - b.monthly_payment).abs() < 1e-9);
    }

    #[test]
    fn fractional_years_use_fractional_periods() {
        // 2.5 years amortizes over 30 periods.
        let b = request(1_000.0, 6.0, 2.5, RateBasis::Monthly)
            .compute()
            .expect("finite");
        assert!((b.total_payment - b.monthly_payment * 30.0).abs() < 1e-9);
    }

    #[test]
    fn vanishing_rate_produces_no_breakdown() {
        // 1e-300 / 100 / 12 underflows (1 + r) to exactly 1, so the
        // denominator is zero and the payment is infinite.
        let degenerate = request(100_000.0, 1e-300, 1.0, RateBasis::Monthly);
        assert_eq!(degenerate.compute(), None);
    }

    #[test]
    fn nan_rate_produces_no_breakdown() {
        let degenerate = request(100_000.0, f64::NAN, 1.0, RateBasis::Annual);
        assert_eq!(degenerate.compute(), None);
    }

    #[test]
    fn parse_reads_validated_text() {
        let inputs = InputValues {
            amount: "2500.50".to_string(),
            interest: "4.25".to_string(),
            years: "15".to_string(),
        };
        let req = LoanRequest::parse(&inputs, RateBasis::Annual).expect("parses");
        assert_eq!(req.principal, 2500.50);
        assert_eq!(req.rate_percent, 4.25);
        assert_eq!(req.term_years, 15.0);
    }

    #[test]
    fn toggle_labels_name_the_other_basis() {
        assert_eq!(RateBasis::Monthly.toggle_label(), "Annual Interest");
        assert_eq!(RateBasis::Annual.toggle_label(), "Monthly Interest");
        assert_eq!(RateBasis::Annual.toggled(), RateBasis::Monthly);
    }
}
