//! Demo CSV generator.

use super::features::NUM_FEATURES;
use super::scoring::round_to;
use rand::Rng;

pub const SAMPLE_ROWS: usize = 5;
pub const SAMPLE_FILENAME: &str = "sample_eeg.csv";

/// Header `f0..f1023` followed by [`SAMPLE_ROWS`] rows of uniform values in
/// `[-1, 1]`, rounded to 4 decimals.
pub fn generate_sample_csv<R: Rng + ?Sized>(rng: &mut R) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record((0..NUM_FEATURES).map(|i| format!("f{}", i)))?;
    for _ in 0..SAMPLE_ROWS {
        let row = (0..NUM_FEATURES).map(|_| round_to(rng.gen_range(-1.0..=1.0), 4).to_string());
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // Only ASCII is ever written.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
