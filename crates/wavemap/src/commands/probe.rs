//! Point probe command.

use serde::Serialize;
use tabled::Tabled;
use wavemap_core::{Point, RssiReading, sample_rssi_all_at};

use crate::cli::{GlobalOpts, OutputFormat, ProbeArgs};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;
use crate::scene;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ReadingRow {
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "RSSI")]
    rssi: String,
}

impl ReadingRow {
    fn new(r: &RssiReading, color: bool) -> Self {
        Self {
            ssid: r.ssid.clone(),
            band: r.band.to_string(),
            rssi: output::format_rssi(r.rssi_dbm, color),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProbeReport<'a> {
    x: f64,
    y: f64,
    readings: &'a [RssiReading],
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ProbeArgs, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let env = scene::build(&args.scene, &cfg.scene)?;
    let at = Point::from(args.at);
    let readings = sample_rssi_all_at(&env, at);

    let format = config::output_format(global, cfg);
    let color = output::should_color(config::color_mode(global, cfg));

    let out = match format {
        OutputFormat::Table if readings.is_empty() => {
            format!("No access point reaches ({}, {})", at.x, at.y)
        }
        OutputFormat::Table | OutputFormat::Plain => output::render_list(
            format,
            &readings,
            |r| ReadingRow::new(r, color),
            |r| format!("{}\t{}\t{:.1}", r.ssid, r.band, r.rssi_dbm),
        )?,
        _ => output::render_single(
            format,
            &ProbeReport {
                x: at.x,
                y: at.y,
                readings: &readings,
            },
            |_| String::new(),
            |_| String::new(),
        )?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
