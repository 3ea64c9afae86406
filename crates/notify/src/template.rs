//! Email rendering for balance updates.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use finboard_core::constants::DISPLAY_DECIMAL_PRECISION;
use finboard_core::notifications::{BalanceChange, BalanceUpdateNotification};

const POSITIVE_COLOR: &str = "#10b981";
const NEGATIVE_COLOR: &str = "#ef4444";

/// Subject plus the two alternative bodies of one email.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Formats an amount as US dollars with thousands separators, e.g. `-$1,234.50`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let formatted = format!("{:.2}", rounded);
    let (whole, cents) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

fn signed_currency(amount: Decimal) -> String {
    if amount.is_sign_positive() && !amount.is_zero() {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

fn amount_color(amount: Decimal) -> &'static str {
    if amount.is_sign_negative() && !amount.is_zero() {
        NEGATIVE_COLOR
    } else {
        POSITIVE_COLOR
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn change_row(change: &BalanceChange) -> String {
    format!(
        r#"<tr>
  <td style="padding:8px;border-bottom:1px solid #e5e7eb;">{account}<br><span style="font-size:12px;color:#6b7280;">{institution}</span></td>
  <td style="padding:8px;border-bottom:1px solid #e5e7eb;text-align:right;">{previous}</td>
  <td style="padding:8px;border-bottom:1px solid #e5e7eb;text-align:right;">{current}</td>
  <td style="padding:8px;border-bottom:1px solid #e5e7eb;text-align:right;color:{color};font-weight:bold;">{delta}</td>
</tr>"#,
        account = escape_html(&change.account_name),
        institution = escape_html(&change.institution_name),
        previous = format_currency(change.previous_balance),
        current = format_currency(change.current_balance),
        color = amount_color(change.delta),
        delta = signed_currency(change.delta),
    )
}

fn summary_card(label: &str, value: Decimal, color: &str) -> String {
    format!(
        r#"<td style="background-color:#f9fafb;padding:15px;border-radius:6px;text-align:center;">
  <div style="font-size:12px;color:#6b7280;text-transform:uppercase;margin-bottom:5px;">{label}</div>
  <div style="font-size:18px;font-weight:bold;color:{color};">{value}</div>
</td>"#,
        label = label,
        color = color,
        value = format_currency(value),
    )
}

/// Renders the balance-update email for `date`.
pub fn render_balance_update_email(
    notification: &BalanceUpdateNotification,
    date: NaiveDate,
) -> RenderedEmail {
    let date_label = date.format("%B %-d, %Y").to_string();
    let subject = format!(
        "Daily Finance Update - {} changes ({})",
        notification.changes.len(),
        signed_currency(notification.total_change)
    );

    let rows: String = notification.changes.iter().map(change_row).collect();
    let changes_section = if notification.changes.is_empty() {
        r#"<p style="color:#6b7280;">No balance changes.</p>"#.to_string()
    } else {
        format!(
            r#"<h2 style="font-size:16px;color:#1f2937;">Balance changes <span style="color:{color};">{total}</span></h2>
<table style="width:100%;border-collapse:collapse;font-size:14px;">
<tr><th style="text-align:left;padding:8px;">Account</th><th style="text-align:right;padding:8px;">Previous</th><th style="text-align:right;padding:8px;">Current</th><th style="text-align:right;padding:8px;">Change</th></tr>
{rows}
</table>"#,
            color = amount_color(notification.total_change),
            total = signed_currency(notification.total_change),
            rows = rows,
        )
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<body style="font-family:Arial,sans-serif;margin:0;padding:20px;background-color:#f5f5f5;">
<div style="max-width:600px;margin:0 auto;background-color:white;border-radius:8px;padding:20px;">
<div style="text-align:center;color:#1f2937;border-bottom:2px solid #e5e7eb;padding-bottom:20px;margin-bottom:20px;">
  <h1>Daily Financial Update</h1>
  <p>Your personal finance summary for {date}</p>
</div>
<table style="width:100%;border-spacing:15px 0;margin-bottom:30px;"><tr>
{assets}
{liabilities}
{net_worth}
</tr></table>
{changes}
<div style="margin-top:30px;font-size:12px;color:#6b7280;text-align:center;">
  <p>This email was sent from your Personal Finance Dashboard</p>
</div>
</div>
</body>
</html>
"#,
        date = date_label,
        assets = summary_card("Total Assets", notification.total_assets, POSITIVE_COLOR),
        liabilities = summary_card(
            "Total Liabilities",
            notification.total_liabilities,
            NEGATIVE_COLOR
        ),
        net_worth = summary_card(
            "Net Worth",
            notification.net_worth,
            amount_color(notification.net_worth)
        ),
        changes = changes_section,
    );

    let mut text = format!(
        "Daily Financial Update for {}\n\nTotal Assets: {}\nTotal Liabilities: {}\nNet Worth: {}\n",
        date_label,
        format_currency(notification.total_assets),
        format_currency(notification.total_liabilities),
        format_currency(notification.net_worth),
    );
    if !notification.changes.is_empty() {
        text.push_str(&format!(
            "\nBalance changes ({}):\n",
            signed_currency(notification.total_change)
        ));
        for change in &notification.changes {
            text.push_str(&format!(
                "- {} ({}): {} -> {} ({})\n",
                change.account_name,
                change.institution_name,
                format_currency(change.previous_balance),
                format_currency(change.current_balance),
                signed_currency(change.delta),
            ));
        }
    }

    RenderedEmail { subject, html, text }
}
