//! Randomized sample rows, drawn from an explicit RNG so seeded runs repeat.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::catalog::{SAMPLE_LISTINGS, SAMPLE_USERS};
use crate::modules::bookings::BookingInput;
use crate::modules::listings::models::normalize_price;
use crate::modules::listings::{Listing, ListingInput};

/// Multiplier applied to each catalog price.
pub const PRICE_JITTER: RangeInclusive<f64> = 0.8..=1.2;
/// Chance that a seeded listing is marked unavailable.
pub const UNAVAILABLE_PROBABILITY: f64 = 0.2;
/// Days between today and a booking's start.
pub const LEAD_DAYS: RangeInclusive<u64> = 1..=30;
/// Length of a booking in days.
pub const STAY_DAYS: RangeInclusive<u64> = 1..=14;

/// Scale `base` by a uniform factor from [`PRICE_JITTER`], rounded to cents.
pub fn jitter_price<R: Rng + ?Sized>(rng: &mut R, base: Decimal) -> Decimal {
    let factor = rng.gen_range(PRICE_JITTER);
    // finite by construction
    let factor = Decimal::from_f64(factor).unwrap_or(Decimal::ONE);
    normalize_price(base * factor)
}

/// The first `count` catalog entries (at most the whole catalog) with
/// jittered prices and random availability.
pub fn plan_listings<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ListingInput> {
    SAMPLE_LISTINGS
        .iter()
        .take(count)
        .map(|entry| {
            let price = jitter_price(rng, entry.price());
            let available = !rng.gen_bool(UNAVAILABLE_PROBABILITY);
            ListingInput {
                title: entry.title.to_string(),
                description: entry.description.to_string(),
                price,
                available,
            }
        })
        .collect()
}

/// Pick a listing and guest and a stay starting after `today`.
/// Returns `None` when there is nothing to book.
pub fn plan_booking<'a, R: Rng + ?Sized>(
    rng: &mut R,
    listings: &'a [Listing],
    today: NaiveDate,
) -> Option<(&'a Listing, BookingInput)> {
    let listing = listings.choose(rng)?;
    let user = SAMPLE_USERS.choose(rng)?;

    let start_date = today + Days::new(rng.gen_range(LEAD_DAYS));
    let end_date = start_date + Days::new(rng.gen_range(STAY_DAYS));

    Some((
        listing,
        BookingInput {
            listing: listing.id,
            user: (*user).to_string(),
            start_date,
            end_date,
        },
    ))
}
