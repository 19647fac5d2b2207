//! Wall material catalog command.

use serde::Serialize;
use tabled::Tabled;
use wavemap_core::WallMaterial;

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct MaterialInfo {
    material: WallMaterial,
    label: &'static str,
    attenuation_24_db: f64,
    attenuation_5_db: f64,
    reflection_loss_db: f64,
    color: &'static str,
}

impl From<WallMaterial> for MaterialInfo {
    fn from(m: WallMaterial) -> Self {
        Self {
            material: m,
            label: m.label(),
            attenuation_24_db: m.default_attenuation_24_db(),
            attenuation_5_db: m.default_attenuation_5_db(),
            reflection_loss_db: m.reflection_loss_db(),
            color: m.color_hex(),
        }
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MaterialRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Material")]
    label: String,
    #[tabled(rename = "2.4/6 GHz dB")]
    low: String,
    #[tabled(rename = "5 GHz dB")]
    high: String,
    #[tabled(rename = "Reflection dB")]
    reflection: String,
    #[tabled(rename = "Color")]
    color: String,
}

impl From<&MaterialInfo> for MaterialRow {
    fn from(m: &MaterialInfo) -> Self {
        Self {
            tag: m.material.tag().into(),
            label: m.label.into(),
            low: format!("{:.0}", m.attenuation_24_db),
            high: format!("{:.0}", m.attenuation_5_db),
            reflection: format!("{:.0}", m.reflection_loss_db),
            color: m.color.into(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let catalog: Vec<MaterialInfo> = WallMaterial::catalog().map(MaterialInfo::from).collect();
    let out = output::render_list(
        config::output_format(global, cfg),
        &catalog,
        |m| MaterialRow::from(m),
        |m| m.material.label_with_attenuation(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
