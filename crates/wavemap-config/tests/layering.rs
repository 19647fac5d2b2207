#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::path::Path;

use figment::Jail;
use pretty_assertions::assert_eq;
use wavemap_config::{Config, ConfigError, load_config, save_config};
use wavemap_core::WallMaterial;

#[test]
fn file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "wavemap.toml",
            r#"
                [render]
                grid_step_px = 4
                output = "json"

                [scene]
                wall_material = "drywall"

                [propagation.reflection]
                enabled = false
            "#,
        )?;

        let cfg = load_config(Some(Path::new("wavemap.toml"))).unwrap();
        assert_eq!(cfg.render.grid_step_px, 4);
        assert_eq!(cfg.render.output, "json");
        assert_eq!(cfg.render.smooth_radius_px, 8);
        assert_eq!(cfg.scene.wall_material, WallMaterial::Drywall);
        assert!(!cfg.propagation.reflection.enabled);
        assert_eq!(cfg.propagation.reflection.max_walls, 12);
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("wavemap.toml", "[render]\ngrid_step_px = 4\n")?;
        jail.set_env("WAVEMAP_RENDER__GRID_STEP_PX", "16");
        jail.set_env("WAVEMAP_SCENE__PATH_LOSS_EXPONENT", "3.1");
        jail.set_env("WAVEMAP_PROPAGATION__DIFFRACTION__MAX_CORNERS", "4");

        let cfg = load_config(Some(Path::new("wavemap.toml"))).unwrap();
        assert_eq!(cfg.render.grid_step_px, 16);
        assert_eq!(cfg.scene.path_loss_exponent, 3.1);
        assert_eq!(cfg.propagation.diffraction.max_corners, 4);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "wavemap.toml",
            "[render]\nlegend_min_dbm = -10.0\nlegend_max_dbm = -96.0\n",
        )?;
        let err = load_config(Some(Path::new("wavemap.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }), "{err}");
        Ok(())
    });
}

#[test]
fn malformed_file_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("wavemap.toml", "[render]\ngrid_step_px = \"many\"\n")?;
        let err = load_config(Some(Path::new("wavemap.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "{err}");
        Ok(())
    });
}

#[test]
fn explicit_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { ref path } if path == &missing));
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.render.legend_min_dbm = -90.0;
    cfg.scene.wall_material = WallMaterial::Brick;
    save_config(&cfg, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}
