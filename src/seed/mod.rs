//! Populate a database with sample listings and randomized bookings.

pub mod catalog;
pub mod generator;

use std::io::Write;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sqlx::SqlitePool;

use crate::modules::{bookings, listings};

/// How much sample data to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    /// Listings to create; anything past the catalog size is ignored.
    pub listings: usize,
    pub bookings: usize,
    /// Delete every existing booking and listing first.
    pub clear: bool,
    /// Fixed RNG seed for repeatable runs; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            listings: catalog::SAMPLE_LISTINGS.len(),
            bookings: 10,
            clear: false,
            seed: None,
        }
    }
}

impl SeedOptions {
    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub listings_created: usize,
    pub bookings_created: usize,
    /// Bookings were requested but no available listing existed.
    pub bookings_skipped: bool,
}

/// Seed `pool`, writing progress lines to `out`.
///
/// Rows are inserted one by one; a storage failure aborts the run and leaves
/// the rows written so far in place.
pub async fn run<W: Write>(
    pool: &SqlitePool,
    options: &SeedOptions,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<SeedReport> {
    let mut rng = options.rng();
    let mut report = SeedReport::default();

    if options.clear {
        writeln!(out, "Clearing existing data...")?;
        let removed_bookings = bookings::store::delete_all(pool).await?;
        let removed_listings = listings::store::delete_all(pool).await?;
        tracing::info!(removed_listings, removed_bookings, "existing data cleared");
        writeln!(out, "Existing data cleared")?;
    }

    for input in generator::plan_listings(&mut rng, options.listings) {
        let listing = listings::store::create(pool, &input).await?;
        report.listings_created += 1;
        writeln!(out, "Created listing: {listing}")?;
    }
    writeln!(
        out,
        "Successfully created {} listings",
        report.listings_created
    )?;

    if options.bookings > 0 {
        let available = listings::store::list_available(pool).await?;
        if available.is_empty() {
            tracing::warn!(requested = options.bookings, "no available listings to book");
            writeln!(out, "No available listings found for bookings")?;
            report.bookings_skipped = true;
        } else {
            for _ in 0..options.bookings {
                let Some((listing, input)) = generator::plan_booking(&mut rng, &available, today)
                else {
                    break;
                };
                let booking = bookings::store::create(pool, &input).await?;
                report.bookings_created += 1;
                writeln!(out, "Created booking: {}", booking.describe(listing))?;
            }
            writeln!(
                out,
                "Successfully created {} bookings",
                report.bookings_created
            )?;
        }
    }

    tracing::info!(
        listings = report.listings_created,
        bookings = report.bookings_created,
        seed = ?options.seed,
        "seeding finished"
    );
    Ok(report)
}
