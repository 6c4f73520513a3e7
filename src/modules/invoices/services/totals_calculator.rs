// Invoice totals calculator
//
// Percent-based CGST/SGST over the exact decimal sum of line totals.

use crate::core::error::AppError;
use crate::core::money::{checked_sum, percent_of, round_half_up, to_exact_decimal};
use crate::core::Result;
use crate::modules::invoices::models::InvoiceTotals;
use crate::modules::orders::OrderLineItem;

/// Compute invoice totals from normalized items and percent tax rates.
///
/// Each line total enters the sum through its shortest decimal form, so the
/// result does not depend on float summation order. Amounts beyond the
/// decimal range are an internal error rather than a panic.
pub fn percent_totals(
    items: &[OrderLineItem],
    cgst_percent: f64,
    sgst_percent: f64,
) -> Result<InvoiceTotals> {
    let out_of_range = || AppError::internal("Invoice amounts exceed the supported range");

    let taxable_value = checked_sum(items.iter().map(|item| to_exact_decimal(item.line_total)))
        .ok_or_else(out_of_range)?;

    let cgst_rate = to_exact_decimal(cgst_percent);
    let sgst_rate = to_exact_decimal(sgst_percent);

    let cgst_amount = percent_of(taxable_value, cgst_rate).ok_or_else(out_of_range)?;
    let sgst_amount = percent_of(taxable_value, sgst_rate).ok_or_else(out_of_range)?;
    let grand_total = checked_sum([taxable_value, cgst_amount, sgst_amount])
        .map(round_half_up)
        .ok_or_else(out_of_range)?;

    Ok(InvoiceTotals {
        taxable_value,
        cgst_rate,
        cgst_amount,
        sgst_rate,
        sgst_amount,
        grand_total,
    })
}
