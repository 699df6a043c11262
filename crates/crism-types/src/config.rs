// ─────────────────────────────────────────────────────────────────────
// SCPN CR-ISM — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{ABAR_H2, SPECIES_ELECTRON, SPECIES_PROTON_HIGH, SPECIES_PROTON_LOW};
use crate::error::{CrError, CrResult};
use crate::params::PadovaniParams;

/// Model configuration: ambient medium plus named spectrum branches.
/// Every field is optional in JSON; missing fields take the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Mean molecular weight of the medium [proton masses] (default: 2.0, H₂)
    #[serde(default = "default_abar")]
    pub abar: f64,
    /// Spectrum branches keyed by species identifier
    #[serde(default = "default_spectra")]
    pub spectra: BTreeMap<String, PadovaniParams>,
}

fn default_abar() -> f64 {
    ABAR_H2
}

fn default_spectra() -> BTreeMap<String, PadovaniParams> {
    BTreeMap::from([
        (SPECIES_PROTON_HIGH.to_string(), PadovaniParams::PROTON_HIGH),
        (SPECIES_PROTON_LOW.to_string(), PadovaniParams::PROTON_LOW),
        (SPECIES_ELECTRON.to_string(), PadovaniParams::ELECTRON),
    ])
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            abar: default_abar(),
            spectra: default_spectra(),
        }
    }
}

impl ModelConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> CrResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(
            path,
            abar = config.abar,
            branches = config.spectra.len(),
            "loaded model config"
        );
        Ok(config)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json_str(json: &str) -> CrResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CrResult<()> {
        if !self.abar.is_finite() || self.abar <= 0.0 {
            return Err(CrError::PhysicsViolation(format!(
                "abar must be finite and > 0, got {}",
                self.abar
            )));
        }
        if self.spectra.is_empty() {
            return Err(CrError::ConfigError(
                "at least one spectrum branch is required".to_string(),
            ));
        }
        for (name, p) in &self.spectra {
            if !p.c.is_finite() || !p.alpha.is_finite() || !p.beta.is_finite() {
                return Err(CrError::ConfigError(format!(
                    "spectrum '{name}' has non-finite constants"
                )));
            }
            if !p.e0.is_finite() || p.e0 < 0.0 {
                return Err(CrError::PhysicsViolation(format!(
                    "spectrum '{name}': e0 must be finite and >= 0, got {}",
                    p.e0
                )));
            }
        }
        Ok(())
    }
}
