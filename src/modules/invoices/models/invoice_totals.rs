use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::format_amount;

/// Tax-inclusive invoice totals. Derived on every request, never persisted.
///
/// `taxable_value` is the exact sum of line totals; the tax amounts and the
/// grand total are rounded half-up to two places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub taxable_value: Decimal,
    pub cgst_rate: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_rate: Decimal,
    pub sgst_amount: Decimal,
    pub grand_total: Decimal,
}

impl InvoiceTotals {
    pub fn taxable_display(&self) -> String {
        format_amount(self.taxable_value)
    }

    pub fn grand_total_display(&self) -> String {
        format_amount(self.grand_total)
    }
}
