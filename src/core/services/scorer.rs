//! Points scorer - turns a receipt into an integer score
//!
//! The score is the sum of independent rules. Each rule looks only at the
//! fields it needs, so item order never changes the result. Only money
//! parsing and points overflow can fail; date and time rules simply award
//! nothing for text they cannot read.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::core::error::ReceiptError;
use crate::core::models::{Item, Receipt, parse_money};

static ROUND_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.00$").expect("valid round total regex"));

static QUARTER_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.(00|25|50|75)$").expect("valid quarter total regex"));

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_TOTAL_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Points awarded by each rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    /// One point per letter or digit in the retailer name
    pub retailer: u64,
    /// 50 when the total has no cents
    pub round_total: u64,
    /// 25 when the total is a multiple of 0.25
    pub quarter_total: u64,
    /// 5 for every two items
    pub item_pairs: u64,
    /// `ceil(price * 0.2)` for items whose trimmed description length is a multiple of 3
    pub item_descriptions: u64,
    /// 6 when the purchase day is odd
    pub odd_day: u64,
    /// 10 when the purchase hour is 14 or 15
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, `None` if it overflows
    #[must_use]
    pub fn checked_total(&self) -> Option<u64> {
        [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(0, u64::checked_add)
    }

    /// Sum of all rule contributions
    ///
    /// Saturates at `u64::MAX`; breakdowns returned by [`breakdown`] never do.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.checked_total().unwrap_or(u64::MAX)
    }
}

/// Score a receipt
pub fn score(receipt: &Receipt) -> Result<u64, ReceiptError> {
    breakdown(receipt).map(|b| b.total())
}

/// Score a receipt, keeping each rule's contribution
///
/// Fails with [`ReceiptError::OutOfRange`] when the points do not fit a `u64`.
pub fn breakdown(receipt: &Receipt) -> Result<PointsBreakdown, ReceiptError> {
    let points = PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: round_total_points(&receipt.total),
        quarter_total: quarter_total_points(&receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: description_points(&receipt.items)?,
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    };

    match points.checked_total() {
        Some(_) => Ok(points),
        None => Err(ReceiptError::out_of_range("points")),
    }
}

/// One point for every alphanumeric character (Unicode letters and digits)
#[must_use]
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// 50 points for a total with no cents
#[must_use]
pub fn round_total_points(total: &str) -> u64 {
    if ROUND_TOTAL.is_match(total) { ROUND_TOTAL_POINTS } else { 0 }
}

/// 25 points for a total that is a multiple of 0.25
#[must_use]
pub fn quarter_total_points(total: &str) -> u64 {
    if QUARTER_TOTAL.is_match(total) { QUARTER_TOTAL_POINTS } else { 0 }
}

/// 5 points for every two items
#[must_use]
pub const fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// Points for items whose trimmed description length is a multiple of 3
///
/// Each qualifying item earns its price times 0.2, rounded up. Every price
/// is parsed, qualifying or not, so a malformed amount anywhere fails the rule.
pub fn description_points(items: &[Item]) -> Result<u64, ReceiptError> {
    let rate = Decimal::new(2, 1);
    let mut points = 0;

    for (index, item) in items.iter().enumerate() {
        let price = parse_money(&format!("items[{index}].price"), &item.price)?;

        let length = item.short_description.trim().chars().count();
        if length == 0 || length % 3 != 0 {
            continue;
        }

        let earned = price
            .checked_mul(rate)
            .and_then(|product| product.ceil().to_u64())
            .ok_or_else(|| ReceiptError::out_of_range("points"))?;
        points = u64::checked_add(points, earned)
            .ok_or_else(|| ReceiptError::out_of_range("points"))?;
    }

    Ok(points)
}

/// 6 points when the last digit of the purchase date is odd
#[must_use]
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match purchase_date.chars().last().and_then(|c| c.to_digit(10)) {
        Some(digit) if digit % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 10 points for purchases from 14:00 up to (not including) 16:00
#[must_use]
pub fn afternoon_points(purchase_time: &str) -> u64 {
    match purchase_time.get(..2) {
        Some("14" | "15") => AFTERNOON_POINTS,
        _ => 0,
    }
}
