//! CLI tool printing the age for one or more dates of birth.
//!
//! ```bash
//! cargo run --bin age_fraction -- 1990-05-20 2000-02-29
//! ```

use age_fraction_calculator::clock::{Clock, SystemClock};
use age_fraction_calculator::handlers::age::age_for;
use age_fraction_calculator::logging;

fn main() -> anyhow::Result<()> {
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "--verbose");
    logging::init_logger(verbose);

    let dates: Vec<String> = std::env::args()
        .skip(1)
        .filter(|arg| !arg.starts_with('-'))
        .collect();
    if dates.is_empty() {
        anyhow::bail!("usage: age_fraction [--verbose] <YYYY-MM-DD>...");
    }

    let now = SystemClock.now();
    let mut failed = false;

    for dob in &dates {
        match age_for(dob, now) {
            Ok(result) => {
                println!("{dob}: {}", result.formatted);
                println!("  Decimal:             {:.4}", result.age.decimal);
                println!("  Days since birthday: {}", result.age.days_since_birthday);
            }
            Err(e) => {
                tracing::error!(error = %e, "could not calculate age");
                eprintln!("{dob}: {}", e.client_message());
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
