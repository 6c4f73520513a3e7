// Invoice markup
//
// Self-contained HTML for the preview page and the document engine, rendered
// from `templates/invoice.html`. The download variant drops the on-page
// actions and gets the print stylesheet.

use askama::Template;

use crate::core::error::AppError;
use crate::core::money::{format_amount, format_float};
use crate::core::Result;
use crate::modules::invoices::models::InvoiceDocument;

/// Which surface the markup is produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupMode {
    Preview,
    Download,
}

const PRINT_STYLE_ID: &str = "invoice-print-style";

/// Forced black-on-white stylesheet applied to every engine-rendered PDF
pub const FORCE_PRINT_CSS: &str = "\
@page { background: #ffffff; color: #000000; }
html, body { background: #ffffff !important; color: #000000 !important; font-family: Arial, sans-serif; margin: 25px; }
* { background: #ffffff !important; color: #000000 !important; border-color: #000000 !important; box-shadow: none !important; }
th { background: #f2f2f2 !important; }
a, .btn, .btn-download { background: #000000 !important; color: #ffffff !important; }
";

/// One row of the items table, amounts already formatted
struct ItemRow<'a> {
    position: usize,
    name: &'a str,
    quantity: i64,
    unit_price: String,
    discount: String,
    amount: String,
}

#[derive(Template)]
#[template(path = "invoice.html")]
struct InvoiceTemplate<'a> {
    number: &'a str,
    company_name: &'a str,
    company_address: &'a str,
    date: String,
    status: String,
    customer: &'a str,
    rows: Vec<ItemRow<'a>>,
    taxable_value: String,
    cgst_rate: String,
    cgst_amount: String,
    sgst_rate: String,
    sgst_amount: String,
    grand_total: String,
    bank_name: &'a str,
    account_number: &'a str,
    footer_text: &'a str,
    download_order_id: Option<&'a str>,
}

/// Render the invoice as a complete HTML document
pub fn render_markup(doc: &InvoiceDocument, mode: MarkupMode) -> Result<String> {
    let settings = &doc.settings;
    let totals = &doc.totals;

    let template = InvoiceTemplate {
        number: doc.invoice_number(),
        company_name: &settings.company_name,
        company_address: &settings.company_address,
        date: doc.order.display_date(),
        status: doc.order.status.to_string(),
        customer: doc.order.customer_display(),
        rows: doc
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| ItemRow {
                position: idx + 1,
                name: &item.product_name,
                quantity: item.whole_quantity(),
                unit_price: format_float(item.price_at_purchase),
                discount: format_float(item.discount_amount),
                amount: format_float(item.line_total),
            })
            .collect(),
        taxable_value: totals.taxable_display(),
        cgst_rate: format_amount(totals.cgst_rate),
        cgst_amount: format_amount(totals.cgst_amount),
        sgst_rate: format_amount(totals.sgst_rate),
        sgst_amount: format_amount(totals.sgst_amount),
        grand_total: totals.grand_total_display(),
        bank_name: &settings.bank_name,
        account_number: &settings.account_number,
        footer_text: &settings.footer_text,
        download_order_id: match mode {
            MarkupMode::Preview => Some(doc.order.id.as_str()),
            MarkupMode::Download => None,
        },
    };

    template
        .render()
        .map_err(|e| AppError::render(format!("Invoice template: {}", e)))
}

/// Insert the print stylesheet just before `</head>`, at most once.
/// Markup without a head gets the stylesheet prepended.
pub fn inject_print_styles(markup: &str) -> String {
    if markup.contains(PRINT_STYLE_ID) {
        return markup.to_string();
    }

    let style = format!("<style id=\"{}\">\n{}</style>\n", PRINT_STYLE_ID, FORCE_PRINT_CSS);
    // ASCII lowercasing keeps byte offsets aligned with the original
    match markup.to_ascii_lowercase().find("</head>") {
        Some(idx) => {
            let mut out = String::with_capacity(markup.len() + style.len());
            out.push_str(&markup[..idx]);
            out.push_str(&style);
            out.push_str(&markup[idx..]);
            out
        }
        None => format!("{}{}", style, markup),
    }
}
