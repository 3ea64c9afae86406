//! Pure rollup calculations.
//!
//! Nothing in here touches storage; every function is a deterministic pass
//! over the balances it is given.

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use super::rollup_model::{BalanceRollup, FinancialGroup, GroupBreakdownItem, RollupHistoryPoint};
use crate::accounts::{Account, AccountCategory, RollupSide, INVESTMENT_SUBCATEGORIES};
use crate::balances::BalanceSnapshot;

/// Rolls `(category, current balance)` entries into asset/liability totals.
///
/// Asset categories add their signed balance, liability categories add the
/// absolute value of theirs, anything else is skipped.
pub fn rollup_balances<'a, I>(entries: I) -> BalanceRollup
where
    I: IntoIterator<Item = (&'a AccountCategory, Decimal)>,
{
    let mut total_assets = Decimal::ZERO;
    let mut total_liabilities = Decimal::ZERO;

    for (category, current) in entries {
        match category.rollup_side() {
            RollupSide::Asset => total_assets += current,
            RollupSide::Liability => total_liabilities += current.abs(),
            RollupSide::Excluded => {}
        }
    }

    BalanceRollup::from_totals(total_assets, total_liabilities)
}

/// Current-snapshot rollup over accounts paired with their latest snapshot.
pub fn rollup_current(pairs: &[(Account, BalanceSnapshot)]) -> BalanceRollup {
    rollup_balances(
        pairs
            .iter()
            .map(|(account, snapshot)| (&account.category, snapshot.current)),
    )
}

/// Daily rollup history.
///
/// Snapshots are bucketed by the calendar day of `recorded_at` in `timezone`
/// and every snapshot in a bucket feeds that day's rollup. Snapshots whose
/// account is missing from `categories` are skipped.
pub fn rollup_history(
    snapshots: &[BalanceSnapshot],
    categories: &HashMap<String, AccountCategory>,
    timezone: Tz,
) -> Vec<RollupHistoryPoint> {
    let mut buckets: BTreeMap<NaiveDate, Vec<(&AccountCategory, Decimal)>> = BTreeMap::new();

    for snapshot in snapshots {
        let Some(category) = categories.get(&snapshot.account_id) else {
            continue;
        };
        let day = snapshot.recorded_at.with_timezone(&timezone).date_naive();
        buckets
            .entry(day)
            .or_default()
            .push((category, snapshot.current));
    }

    buckets
        .into_iter()
        .map(|(date, entries)| RollupHistoryPoint::new(date, rollup_balances(entries)))
        .collect()
}

/// Classifies an account into a dashboard group.
///
/// Depository accounts with a retirement or brokerage subcategory are shown
/// with investments. Categories outside the rollup have no group.
pub fn financial_group(category: &AccountCategory, subcategory: Option<&str>) -> Option<FinancialGroup> {
    match category {
        AccountCategory::Credit | AccountCategory::Loan => Some(FinancialGroup::Liabilities),
        AccountCategory::Investment => Some(FinancialGroup::Investments),
        AccountCategory::Depository => {
            let is_investment = subcategory
                .map(|sub| sub.to_ascii_lowercase())
                .is_some_and(|sub| INVESTMENT_SUBCATEGORIES.contains(&sub.as_str()));
            if is_investment {
                Some(FinancialGroup::Investments)
            } else {
                Some(FinancialGroup::Cash)
            }
        }
        AccountCategory::Other(_) => None,
    }
}

/// Per-group totals of the latest balances, ordered Cash, Investments,
/// Liabilities. Liability values are positive magnitudes.
pub fn group_breakdown(pairs: &[(Account, BalanceSnapshot)]) -> Vec<GroupBreakdownItem> {
    let mut groups: BTreeMap<FinancialGroup, (Decimal, usize)> = BTreeMap::new();

    for (account, snapshot) in pairs {
        let Some(group) = financial_group(&account.category, account.subcategory.as_deref())
        else {
            continue;
        };
        let value = match group {
            FinancialGroup::Liabilities => snapshot.current.abs(),
            _ => snapshot.current,
        };
        let entry = groups.entry(group).or_insert((Decimal::ZERO, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(group, (value, account_count))| GroupBreakdownItem {
            group,
            name: group.display_name().to_string(),
            value,
            account_count,
        })
        .collect()
}
