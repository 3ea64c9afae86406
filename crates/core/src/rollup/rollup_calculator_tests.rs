use super::*;
use crate::accounts::AccountCategory;
use crate::test_utils::{account, snapshot, ts};
use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

fn categories(entries: &[(&str, &str)]) -> HashMap<String, AccountCategory> {
    entries
        .iter()
        .map(|(id, category)| (id.to_string(), AccountCategory::from(*category)))
        .collect()
}

#[test]
fn test_rollup_empty_is_zero() {
    let rollup = rollup_current(&[]);
    assert_eq!(rollup, BalanceRollup::default());
    assert_eq!(rollup.net_worth, Decimal::ZERO);
}

#[test]
fn test_rollup_assets_minus_liabilities() {
    let pairs = vec![
        (
            account("a1", "i1", "Checking", "depository"),
            snapshot("a1", dec!(1000), ts(2024, 3, 1, 12, 0)),
        ),
        (
            account("a2", "i1", "Visa", "credit"),
            snapshot("a2", dec!(-200), ts(2024, 3, 1, 12, 0)),
        ),
    ];

    let rollup = rollup_current(&pairs);
    assert_eq!(rollup.total_assets, dec!(1000));
    assert_eq!(rollup.total_liabilities, dec!(200));
    assert_eq!(rollup.net_worth, dec!(800));
}

#[test]
fn test_rollup_liabilities_use_magnitude_regardless_of_sign() {
    let pairs = vec![
        (
            account("c1", "i1", "Card", "credit"),
            snapshot("c1", dec!(350.25), ts(2024, 3, 1, 12, 0)),
        ),
        (
            account("l1", "i1", "Mortgage", "loan"),
            snapshot("l1", dec!(-1200), ts(2024, 3, 1, 12, 0)),
        ),
    ];

    let rollup = rollup_current(&pairs);
    assert_eq!(rollup.total_liabilities, dec!(1550.25));
    assert_eq!(rollup.net_worth, dec!(-1550.25));
}

#[test]
fn test_rollup_overdrawn_asset_keeps_sign() {
    let pairs = vec![(
        account("a1", "i1", "Checking", "depository"),
        snapshot("a1", dec!(-40), ts(2024, 3, 1, 12, 0)),
    )];

    let rollup = rollup_current(&pairs);
    assert_eq!(rollup.total_assets, dec!(-40));
    assert_eq!(rollup.total_liabilities, Decimal::ZERO);
}

#[test]
fn test_rollup_excludes_unknown_categories() {
    let pairs = vec![
        (
            account("a1", "i1", "Brokerage", "investment"),
            snapshot("a1", dec!(500), ts(2024, 3, 1, 12, 0)),
        ),
        (
            account("x1", "i1", "Mystery", "payroll"),
            snapshot("x1", dec!(9999), ts(2024, 3, 1, 12, 0)),
        ),
    ];

    let rollup = rollup_current(&pairs);
    assert_eq!(rollup.total_assets, dec!(500));
    assert_eq!(rollup.total_liabilities, Decimal::ZERO);
    assert_eq!(rollup.net_worth, dec!(500));
}

#[test]
fn test_history_is_ascending_by_day() {
    let cats = categories(&[("a1", "depository")]);
    let snapshots = vec![
        snapshot("a1", dec!(300), ts(2024, 3, 3, 12, 0)),
        snapshot("a1", dec!(100), ts(2024, 3, 1, 12, 0)),
        snapshot("a1", dec!(200), ts(2024, 3, 2, 12, 0)),
    ];

    let history = rollup_history(&snapshots, &cats, Tz::UTC);
    let dates: Vec<NaiveDate> = history.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        ]
    );
    assert_eq!(history[2].total_assets, dec!(300));
}

#[test]
fn test_history_bucket_sums_every_snapshot_of_the_day() {
    let cats = categories(&[("a1", "depository"), ("c1", "credit")]);
    let snapshots = vec![
        snapshot("a1", dec!(1000), ts(2024, 3, 1, 8, 0)),
        snapshot("a1", dec!(1050), ts(2024, 3, 1, 18, 0)),
        snapshot("c1", dec!(-20), ts(2024, 3, 1, 9, 0)),
        snapshot("c1", dec!(-30), ts(2024, 3, 1, 19, 0)),
    ];

    let history = rollup_history(&snapshots, &cats, Tz::UTC);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total_assets, dec!(2050));
    assert_eq!(history[0].total_liabilities, dec!(50));
    assert_eq!(history[0].net_worth, dec!(2000));
}

#[test]
fn test_history_days_follow_timezone() {
    let cats = categories(&[("a1", "depository")]);
    // 02:00 UTC on March 2nd is still March 1st in New York.
    let snapshots = vec![
        snapshot("a1", dec!(100), ts(2024, 3, 1, 15, 0)),
        snapshot("a1", dec!(120), ts(2024, 3, 2, 2, 0)),
    ];

    let utc = rollup_history(&snapshots, &cats, Tz::UTC);
    assert_eq!(utc.len(), 2);

    let new_york = rollup_history(&snapshots, &cats, chrono_tz::America::New_York);
    assert_eq!(new_york.len(), 1);
    assert_eq!(new_york[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(new_york[0].total_assets, dec!(220));
}

#[test]
fn test_history_skips_snapshots_of_unknown_accounts() {
    let cats = categories(&[("a1", "depository")]);
    let snapshots = vec![
        snapshot("a1", dec!(100), ts(2024, 3, 1, 12, 0)),
        snapshot("gone", dec!(5000), ts(2024, 3, 1, 12, 0)),
        snapshot("gone", dec!(5000), ts(2024, 3, 5, 12, 0)),
    ];

    let history = rollup_history(&snapshots, &cats, Tz::UTC);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total_assets, dec!(100));
}

#[test]
fn test_history_empty_without_snapshots() {
    let cats = categories(&[("a1", "depository")]);
    assert!(rollup_history(&[], &cats, Tz::UTC).is_empty());
}

#[test]
fn test_financial_group_classification() {
    assert_eq!(
        financial_group(&AccountCategory::Depository, Some("checking")),
        Some(FinancialGroup::Cash)
    );
    assert_eq!(
        financial_group(&AccountCategory::Depository, Some("401K")),
        Some(FinancialGroup::Investments)
    );
    assert_eq!(
        financial_group(&AccountCategory::Investment, None),
        Some(FinancialGroup::Investments)
    );
    assert_eq!(
        financial_group(&AccountCategory::Loan, Some("mortgage")),
        Some(FinancialGroup::Liabilities)
    );
    assert_eq!(
        financial_group(&AccountCategory::Other("payroll".to_string()), None),
        None
    );
}

#[test]
fn test_group_breakdown_orders_and_counts_groups() {
    let mut ira = account("a3", "i1", "IRA", "depository");
    ira.subcategory = Some("ira".to_string());
    let pairs = vec![
        (
            account("c1", "i1", "Card", "credit"),
            snapshot("c1", dec!(-75), ts(2024, 3, 1, 12, 0)),
        ),
        (
            account("a1", "i1", "Checking", "depository"),
            snapshot("a1", dec!(1000), ts(2024, 3, 1, 12, 0)),
        ),
        (
            account("a2", "i1", "Savings", "depository"),
            snapshot("a2", dec!(250), ts(2024, 3, 1, 12, 0)),
        ),
        (ira, snapshot("a3", dec!(4000), ts(2024, 3, 1, 12, 0))),
        (
            account("x1", "i1", "Mystery", "payroll"),
            snapshot("x1", dec!(1), ts(2024, 3, 1, 12, 0)),
        ),
    ];

    let breakdown = group_breakdown(&pairs);
    assert_eq!(breakdown.len(), 3);

    assert_eq!(breakdown[0].group, FinancialGroup::Cash);
    assert_eq!(breakdown[0].value, dec!(1250));
    assert_eq!(breakdown[0].account_count, 2);

    assert_eq!(breakdown[1].group, FinancialGroup::Investments);
    assert_eq!(breakdown[1].name, "Investments");
    assert_eq!(breakdown[1].value, dec!(4000));

    assert_eq!(breakdown[2].group, FinancialGroup::Liabilities);
    assert_eq!(breakdown[2].value, dec!(75));
}
