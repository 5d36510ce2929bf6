// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use rune_cfg::RuneConfig;
use scissors_core::{parse_hex_colour, RenderStyle};

use crate::error::ConfigError;

const SECTION: &str = "scissors";

/// Loads the render style from `path`; a missing file means defaults.
pub fn load_style(path: &Path) -> Result<RenderStyle, ConfigError> {
    if !path.exists() {
        return Ok(RenderStyle::default());
    }

    let rc = RuneConfig::from_file(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_style(&rc)
}

fn parse_style(rc: &RuneConfig) -> Result<RenderStyle, ConfigError> {
    let mut style = RenderStyle::default();

    if !rc.has(SECTION) {
        return Ok(style);
    }

    let colours: [(&str, &mut u32); 6] = [
        ("fill_colour", &mut style.fill),
        ("selected_fill_colour", &mut style.fill_selected),
        ("label_colour", &mut style.label),
        ("selected_label_colour", &mut style.label_selected),
        ("border_colour", &mut style.border),
        ("handle_colour", &mut style.handle),
    ];
    for (name, slot) in colours {
        if let Some(v) = read_colour(rc, name)? {
            *slot = v;
        }
    }

    if let Some(v) = read_length(rc, "dash_length")? {
        style.dash = v;
    }
    if let Some(v) = read_length(rc, "label_size")? {
        style.label_size = v;
    }

    Ok(style)
}

fn read_colour(rc: &RuneConfig, name: &str) -> Result<Option<u32>, ConfigError> {
    let key = format!("{SECTION}.{name}");
    let raw = rc
        .get_optional::<String>(&key)
        .map_err(|e| invalid(&key, e.to_string()))?;

    match raw {
        Some(s) => parse_hex_colour(&s)
            .map(Some)
            .map_err(|e| invalid(&key, e.to_string())),
        None => Ok(None),
    }
}

fn read_length(rc: &RuneConfig, name: &str) -> Result<Option<f32>, ConfigError> {
    let key = format!("{SECTION}.{name}");
    let raw = rc
        .get_optional::<f64>(&key)
        .map_err(|e| invalid(&key, e.to_string()))?;

    match raw {
        Some(v) => positive_length(v)
            .map(Some)
            .map_err(|message| invalid(&key, message)),
        None => Ok(None),
    }
}

fn positive_length(v: f64) -> Result<f32, String> {
    if v.is_finite() && v > 0.0 {
        Ok(v as f32)
    } else {
        Err(format!("expected a positive number, got {v}"))
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message,
    }
}
