//! Turns scene flags into an engine `Environment`.

use tracing::debug;
use wavemap_config::SceneDefaults;
use wavemap_core::model::scale_from_reference;
use wavemap_core::{AccessPoint, Band, Environment, Point, Wall, WallMaterial};

use crate::cli::{BandArg, PointSpec, SceneArgs, WallAttenuation, WallSpec};
use crate::error::CliError;

impl From<BandArg> for Band {
    fn from(arg: BandArg) -> Self {
        match arg {
            BandArg::Ghz24 => Band::Ghz24,
            BandArg::Ghz5 => Band::Ghz5,
            BandArg::Ghz6 => Band::Ghz6,
        }
    }
}

impl From<PointSpec> for Point {
    fn from(p: PointSpec) -> Self {
        Point::new(p.x, p.y)
    }
}

fn scale(args: &SceneArgs) -> Result<f64, CliError> {
    match (args.scale, args.reference) {
        (Some(scale), _) => Ok(scale),
        (None, Some(r)) => Ok(scale_from_reference(r.start.into(), r.end.into(), r.meters)?),
        (None, None) => Err(CliError::Validation {
            field: "scale".into(),
            reason: "give --scale or --reference".into(),
        }),
    }
}

fn wall(spec: &WallSpec, default_material: WallMaterial) -> Result<Wall, CliError> {
    let (start, end) = (Point::from(spec.start), Point::from(spec.end));
    Ok(match &spec.attenuation {
        WallAttenuation::Default => Wall::new(start, end, default_material),
        WallAttenuation::Material(name) => Wall::new(start, end, name.parse::<WallMaterial>()?),
        WallAttenuation::Custom { a24, a5 } => Wall::custom(start, end, *a24, *a5)?,
    })
}

/// Build and validate the environment described by `args`.
///
/// Unnamed access points are called `AP-1`, `AP-2`, ... in flag order.
pub fn build(args: &SceneArgs, defaults: &SceneDefaults) -> Result<Environment, CliError> {
    let mut env = Environment::new(
        scale(args)?,
        args.exponent.unwrap_or(defaults.path_loss_exponent),
    );

    let bands: Vec<Band> = if args.bands.is_empty() {
        Band::ALL.to_vec()
    } else {
        args.bands.iter().copied().map(Band::from).collect()
    };
    let tx = args.tx_power.unwrap_or(defaults.tx_power_dbm);
    let gain = args.antenna_gain.unwrap_or(defaults.antenna_gain_dbi);

    for (i, spec) in args.aps.iter().enumerate() {
        let name = spec.name.clone().unwrap_or_else(|| format!("AP-{}", i + 1));
        env.aps.push(
            AccessPoint::new(name, (spec.x, spec.y))
                .with_bands(&bands)
                .with_power(tx, gain),
        );
    }

    for spec in &args.walls {
        env.walls.push(wall(spec, defaults.wall_material)?);
    }

    env.validate()?;
    debug!(
        scale = env.scale_m_per_px,
        exponent = env.path_loss_exponent,
        aps = env.aps.len(),
        walls = env.walls.len(),
        "scene built"
    );
    Ok(env)
}
