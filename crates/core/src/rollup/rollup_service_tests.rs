use super::*;
use crate::test_utils::{account, link_item, snapshot, ts, Store};
use chrono_tz::Tz;
use rust_decimal_macros::dec;

fn service(store: &Store) -> RollupService {
    RollupService::new(store.accounts.clone(), store.balances.clone(), Tz::UTC)
}

#[test]
fn test_current_rollup_uses_latest_snapshot_only() {
    let store = Store::new(
        vec![link_item("i1", Some("Chase"))],
        vec![
            account("a1", "i1", "Checking", "depository"),
            account("c1", "i1", "Card", "credit"),
        ],
        vec![
            snapshot("a1", dec!(900), ts(2024, 3, 1, 12, 0)),
            snapshot("a1", dec!(1000), ts(2024, 3, 2, 12, 0)),
            snapshot("c1", dec!(-300), ts(2024, 3, 1, 12, 0)),
            snapshot("c1", dec!(-200), ts(2024, 3, 2, 12, 0)),
        ],
    );

    let rollup = service(&store).get_current_rollup().unwrap();
    assert_eq!(rollup.total_assets, dec!(1000));
    assert_eq!(rollup.total_liabilities, dec!(200));
    assert_eq!(rollup.net_worth, dec!(800));
}

#[test]
fn test_current_rollup_ignores_accounts_without_snapshots() {
    let store = Store::new(
        vec![link_item("i1", None)],
        vec![
            account("a1", "i1", "Checking", "depository"),
            account("a2", "i1", "Savings", "depository"),
        ],
        vec![snapshot("a1", dec!(10), ts(2024, 3, 1, 12, 0))],
    );

    let rollup = service(&store).get_current_rollup().unwrap();
    assert_eq!(rollup.total_assets, dec!(10));
}

#[test]
fn test_summary_includes_breakdown() {
    let store = Store::new(
        vec![link_item("i1", None)],
        vec![
            account("a1", "i1", "Checking", "depository"),
            account("c1", "i1", "Card", "credit"),
        ],
        vec![
            snapshot("a1", dec!(1000), ts(2024, 3, 1, 12, 0)),
            snapshot("c1", dec!(-200), ts(2024, 3, 1, 12, 0)),
        ],
    );

    let summary = service(&store).get_summary().unwrap();
    assert_eq!(summary.rollup.net_worth, dec!(800));
    assert_eq!(summary.breakdown.len(), 2);
    assert_eq!(summary.breakdown[0].group, FinancialGroup::Cash);
    assert_eq!(summary.breakdown[1].value, dec!(200));
}

#[test]
fn test_balance_history_from_store() {
    let store = Store::new(
        vec![link_item("i1", None)],
        vec![
            account("a1", "i1", "Checking", "depository"),
            account("c1", "i1", "Card", "credit"),
        ],
        vec![
            snapshot("a1", dec!(100), ts(2024, 3, 1, 12, 0)),
            snapshot("c1", dec!(-50), ts(2024, 3, 1, 13, 0)),
            snapshot("a1", dec!(180), ts(2024, 3, 2, 12, 0)),
        ],
    );

    let history = service(&store).get_balance_history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].net_worth, dec!(50));
    // Day two only has the checking account's snapshot.
    assert_eq!(history[1].total_assets, dec!(180));
    assert_eq!(history[1].total_liabilities, dec!(0));
}

#[test]
fn test_empty_store_rolls_up_to_zero() {
    let store = Store::new(vec![], vec![], vec![]);
    let svc = service(&store);

    assert_eq!(svc.get_current_rollup().unwrap(), BalanceRollup::default());
    assert!(svc.get_summary().unwrap().breakdown.is_empty());
    assert!(svc.get_balance_history().unwrap().is_empty());
}
