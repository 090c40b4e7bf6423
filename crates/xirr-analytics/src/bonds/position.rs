//! Bond positions and the cash flows they produce.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use xirr_core::{Cashflow, CashflowEntry, Date};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::irr::Irr;

/// A payment or charge scheduled after purchase.
///
/// Per-bond amounts are multiplied by the position quantity. Fractions are
/// of the original nominal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BondEvent {
    /// Coupon payment per bond.
    Coupon {
        /// Payment date.
        date: Date,
        /// Coupon per bond.
        amount: Decimal,
    },
    /// Partial repayment of principal.
    Amortization {
        /// Payment date.
        date: Date,
        /// Repaid fraction of the original nominal.
        fraction: Decimal,
    },
    /// Redemption of a fraction of the original nominal.
    Redemption {
        /// Payment date.
        date: Date,
        /// Redeemed fraction of the original nominal.
        fraction: Decimal,
    },
    /// Redemption of whatever nominal is still outstanding.
    Maturity {
        /// Payment date.
        date: Date,
    },
    /// Put offer: the issuer buys back the outstanding nominal at par.
    ///
    /// Sell-side commissions are charged on the offer date, the money
    /// arrives on the payment date.
    Offer {
        /// Date the bonds are sold into the offer.
        commission_date: Date,
        /// Date the par amount is paid.
        payment_date: Date,
    },
    /// Profit tax on the discount to par, due when bought below par.
    DiscountTax {
        /// Tax payment date.
        date: Date,
    },
}

/// A holding of identical bonds bought in one trade.
///
/// Prices are in percent of nominal, commission and tax rates are
/// fractions (`0.0003776` for 0.03776%).
///
/// # Example
///
/// ```rust
/// use xirr_analytics::bonds::BondPosition;
/// use xirr_analytics::irr::Irr;
/// use xirr_core::Date;
/// use rust_decimal_macros::dec;
///
/// let d = |s: &str| Date::parse(s).unwrap();
///
/// let position = BondPosition::new(d("2019-04-05"), 500, dec!(1000), dec!(96.24))
///     .unwrap()
///     .with_accrued(dec!(30.14))
///     .with_commissions(dec!(0.0003776), dec!(0.0001))
///     .with_tax_rate(dec!(0.13))
///     .coupon(d("2019-06-26"), dec!(54.85))
///     .coupon(d("2019-12-25"), dec!(54.85))
///     .coupon(d("2020-06-24"), dec!(54.85))
///     .coupon(d("2020-12-23"), dec!(54.85))
///     .coupon(d("2021-06-23"), dec!(54.85))
///     .coupon(d("2021-12-22"), dec!(54.85))
///     .maturity(d("2021-12-22"))
///     .discount_tax(d("2022-01-01"));
///
/// let ytm = position.ytm(&Irr::new(0.1, 0.00001, 50)).unwrap().unwrap();
/// assert!((ytm - 0.1286919).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondPosition {
    #[serde(default)]
    name: Option<String>,
    purchase_date: Date,
    quantity: u32,
    nominal: Decimal,
    price: Decimal,
    #[serde(default)]
    accrued: Decimal,
    #[serde(default)]
    broker_commission: Decimal,
    #[serde(default)]
    exchange_commission: Decimal,
    #[serde(default)]
    tax_rate: Decimal,
    #[serde(default)]
    events: Vec<BondEvent>,
}

impl BondPosition {
    /// Creates a position of `quantity` bonds bought at `price` percent of `nominal`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a zero quantity or a non-positive nominal
    /// or price.
    pub fn new(
        purchase_date: Date,
        quantity: u32,
        nominal: Decimal,
        price: Decimal,
    ) -> AnalyticsResult<Self> {
        let position = Self {
            name: None,
            purchase_date,
            quantity,
            nominal,
            price,
            accrued: Decimal::ZERO,
            broker_commission: Decimal::ZERO,
            exchange_commission: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            events: Vec::new(),
        };
        position.validate()?;
        Ok(position)
    }

    /// Sets a display name, usually the ISIN or ticker.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the accrued interest paid per bond.
    #[must_use]
    pub fn with_accrued(mut self, accrued: Decimal) -> Self {
        self.accrued = accrued;
        self
    }

    /// Sets broker and exchange commission rates.
    #[must_use]
    pub fn with_commissions(mut self, broker: Decimal, exchange: Decimal) -> Self {
        self.broker_commission = broker;
        self.exchange_commission = exchange;
        self
    }

    /// Sets the profit tax rate.
    #[must_use]
    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Appends an event.
    #[must_use]
    pub fn with_event(mut self, event: BondEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Adds a coupon of `amount` per bond.
    #[must_use]
    pub fn coupon(self, date: Date, amount: Decimal) -> Self {
        self.with_event(BondEvent::Coupon { date, amount })
    }

    /// Adds an amortization payment of `fraction` of the nominal.
    #[must_use]
    pub fn amortization(self, date: Date, fraction: Decimal) -> Self {
        self.with_event(BondEvent::Amortization { date, fraction })
    }

    /// Adds a redemption of `fraction` of the nominal.
    #[must_use]
    pub fn redemption(self, date: Date, fraction: Decimal) -> Self {
        self.with_event(BondEvent::Redemption { date, fraction })
    }

    /// Redeems the outstanding nominal.
    #[must_use]
    pub fn maturity(self, date: Date) -> Self {
        self.with_event(BondEvent::Maturity { date })
    }

    /// Sells the outstanding nominal into a put offer at par.
    #[must_use]
    pub fn offer(self, commission_date: Date, payment_date: Date) -> Self {
        self.with_event(BondEvent::Offer {
            commission_date,
            payment_date,
        })
    }

    /// Adds the discount-to-par tax payment.
    #[must_use]
    pub fn discount_tax(self, date: Date) -> Self {
        self.with_event(BondEvent::DiscountTax { date })
    }

    /// Display name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Trade date.
    #[must_use]
    pub fn purchase_date(&self) -> Date {
        self.purchase_date
    }

    /// Number of bonds held.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Scheduled events in insertion order.
    #[must_use]
    pub fn events(&self) -> &[BondEvent] {
        &self.events
    }

    /// Checks the position parameters.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.quantity == 0 {
            return Err(AnalyticsError::invalid_input("quantity must be positive"));
        }
        if self.nominal <= Decimal::ZERO {
            return Err(AnalyticsError::invalid_input(format!(
                "nominal must be positive, got {}",
                self.nominal
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(AnalyticsError::invalid_input(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        for (name, rate) in [
            ("accrued", self.accrued),
            ("broker_commission", self.broker_commission),
            ("exchange_commission", self.exchange_commission),
            ("tax_rate", self.tax_rate),
        ] {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(AnalyticsError::invalid_input(format!(
                    "{name} must not be negative, got {rate}"
                )));
            }
        }
        Ok(())
    }

    /// Builds the cash flow: the purchase entries first, then the events in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the position is invalid, the events
    /// redeem more than the full nominal, or an amount overflows `Decimal`.
    pub fn cashflow(&self) -> AnalyticsResult<Cashflow> {
        self.validate()?;

        let quantity = Decimal::from(self.quantity);
        let face = mul(quantity, self.nominal, "face value")?;
        let cost = mul(face, self.price, "purchase cost")? / dec!(100);

        let mut cashflow = Cashflow::new();
        let mut push = |date: Date, amount: Decimal| {
            if !amount.is_zero() {
                cashflow.push(CashflowEntry::new(date, amount));
            }
        };

        push(self.purchase_date, -cost);
        push(self.purchase_date, -mul(quantity, self.accrued, "accrued interest")?);
        push(self.purchase_date, -mul(cost, self.broker_commission, "broker commission")?);
        push(self.purchase_date, -mul(cost, self.exchange_commission, "exchange commission")?);

        let mut outstanding = Decimal::ONE;
        for event in &self.events {
            match *event {
                BondEvent::Coupon { date, amount } => push(date, mul(quantity, amount, "coupon")?),
                BondEvent::Amortization { date, fraction }
                | BondEvent::Redemption { date, fraction } => {
                    if fraction <= Decimal::ZERO || fraction > outstanding {
                        return Err(AnalyticsError::invalid_input(format!(
                            "cannot repay {fraction} of nominal on {date}, {outstanding} outstanding"
                        )));
                    }
                    outstanding -= fraction;
                    push(date, mul(face, fraction, "repayment")?);
                }
                BondEvent::Maturity { date } => {
                    push(date, mul(face, outstanding, "redemption")?);
                    outstanding = Decimal::ZERO;
                }
                BondEvent::Offer {
                    commission_date,
                    payment_date,
                } => {
                    let par = mul(face, outstanding, "offer amount")?;
                    push(commission_date, -mul(par, self.broker_commission, "broker commission")?);
                    push(commission_date, -mul(par, self.exchange_commission, "exchange commission")?);
                    push(payment_date, par);
                    outstanding = Decimal::ZERO;
                }
                BondEvent::DiscountTax { date } => {
                    if self.price < dec!(100) {
                        let discount = mul(face, Decimal::ONE - self.price / dec!(100), "discount")?;
                        push(date, -mul(discount, self.tax_rate, "discount tax")?);
                    }
                }
            }
        }

        Ok(cashflow)
    }

    /// Yield to maturity (or to offer) of the position's cash flow.
    ///
    /// # Errors
    ///
    /// Same as [`cashflow`](Self::cashflow) and [`Irr::compute`].
    pub fn ytm(&self, irr: &Irr) -> AnalyticsResult<Option<f64>> {
        irr.compute(&self.cashflow()?)
    }
}

/// `a * b`, or `InvalidInput` naming the amount that overflowed.
fn mul(a: Decimal, b: Decimal, what: &str) -> AnalyticsResult<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| AnalyticsError::invalid_input(format!("{what} overflows")))
}
