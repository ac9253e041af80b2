use anyhow::Context;
use clap::{Parser, Subcommand};
use roamstay_app::seed::SeedOptions;
use roamstay_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "roamstay", about = "Roamstay management commands")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Seed the database with sample listings and bookings
    Seed {
        /// Number of listings to create (at most 20; negative creates none)
        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        listings: i64,
        /// Number of bookings to create (negative creates none)
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        bookings: i64,
        /// Clear existing data before seeding
        #[arg(long)]
        clear: bool,
        /// Seed the random generator for a repeatable run
        #[arg(long, env = "ROAMSTAY_SEED")]
        seed: Option<u64>,
    },
    /// Apply pending database migrations
    Migrate,
    /// Run the HTTP API server
    Serve,
}

/// Counts below zero mean "create nothing".
fn count(requested: i64) -> usize {
    usize::try_from(requested).unwrap_or(0)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = Settings::load().with_context(|| "failed to load roamstay settings")?;
    roamstay_telemetry::init(&settings.telemetry);

    match args.command {
        Command::Seed {
            listings,
            bookings,
            clear,
            seed,
        } => {
            let registry = roamstay_app::modules::registry();
            let pool = roamstay_app::server::open_database(&settings, &registry).await?;
            let options = SeedOptions {
                listings: count(listings),
                bookings: count(bookings),
                clear,
                seed,
            };
            let today = chrono::Local::now().date_naive();

            roamstay_app::seed::run(&pool, &options, today, &mut std::io::stdout())
                .await
                .context("seeding failed")?;
            pool.close().await;
        }
        Command::Migrate => {
            let registry = roamstay_app::modules::registry();
            let pool = roamstay_app::server::open_database(&settings, &registry).await?;
            println!("Migrations applied to {}", settings.database.url);
            pool.close().await;
        }
        Command::Serve => roamstay_app::server::run(&settings).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_counts_become_zero() {
        assert_eq!(count(-3), 0);
        assert_eq!(count(0), 0);
        assert_eq!(count(7), 7);
    }

    #[test]
    fn seed_flags_accept_negative_values() {
        let args = Args::try_parse_from(["roamstay", "seed", "--listings", "-1", "--bookings=-3"])
            .unwrap();
        match args.command {
            Command::Seed {
                listings, bookings, ..
            } => {
                assert_eq!(listings, -1);
                assert_eq!(bookings, -3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
