//! Band listing command.

use serde::Serialize;
use tabled::Tabled;
use wavemap_core::Band;
use wavemap_core::propagation::path_loss::reference_loss_db;

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct BandInfo {
    band: Band,
    frequency_ghz: f64,
    ssid_suffix: &'static str,
    /// Free-space loss at 1 m.
    reference_loss_db: f64,
}

#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "SSID suffix")]
    suffix: String,
    #[tabled(rename = "Loss @ 1 m")]
    loss: String,
}

impl From<&BandInfo> for BandRow {
    fn from(b: &BandInfo) -> Self {
        Self {
            band: b.band.label().into(),
            frequency: format!("{} GHz", b.frequency_ghz),
            suffix: b.ssid_suffix.into(),
            loss: format!("{:.1} dB", b.reference_loss_db),
        }
    }
}

pub fn handle(global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let bands: Vec<BandInfo> = Band::ALL
        .iter()
        .map(|&band| BandInfo {
            band,
            frequency_ghz: band.freq_ghz(),
            ssid_suffix: band.ssid_suffix(),
            reference_loss_db: reference_loss_db(band.freq_ghz()),
        })
        .collect();
    let out = output::render_list(
        config::output_format(global, cfg),
        &bands,
        |b| BandRow::from(b),
        |b| b.band.label().to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
