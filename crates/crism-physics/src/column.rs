// ─────────────────────────────────────────────────────────────────────
// SCPN CR-ISM — Column Density
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Column density N [1/cm²] ↔ surface density Σ [g/cm²].
//!
//! Σ = Ā · m_p · N, with Ā the mean molecular weight in proton masses.

use crism_types::config::ModelConfig;
use crism_types::constants::{ABAR_H2, M_PROTON_G};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Column density from surface density `sigma` [g/cm²].
#[inline]
pub fn n_of_sigma(sigma: f64, abar: f64) -> f64 {
    sigma / (abar * M_PROTON_G)
}

/// Surface density from column density `nn` [1/cm²]. Inverse of [`n_of_sigma`].
#[inline]
pub fn sigma_of_n(nn: f64, abar: f64) -> f64 {
    abar * M_PROTON_G * nn
}

/// [`n_of_sigma`] for molecular hydrogen (Ā = 2).
#[inline]
pub fn n_of_sigma_h2(sigma: f64) -> f64 {
    n_of_sigma(sigma, ABAR_H2)
}

/// [`sigma_of_n`] for molecular hydrogen (Ā = 2).
#[inline]
pub fn sigma_of_n_h2(nn: f64) -> f64 {
    sigma_of_n(nn, ABAR_H2)
}

/// Element-wise [`n_of_sigma`].
pub fn n_of_sigma_array<S, D>(sigma: &ArrayBase<S, D>, abar: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    sigma.mapv(|s| n_of_sigma(s, abar))
}

/// Element-wise [`sigma_of_n`].
pub fn sigma_of_n_array<S, D>(nn: &ArrayBase<S, D>, abar: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    nn.mapv(|n| sigma_of_n(n, abar))
}

/// Converters bound to one medium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnModel {
    /// Mean molecular weight [proton masses].
    pub abar: f64,
}

impl ColumnModel {
    pub fn new(abar: f64) -> Self {
        ColumnModel { abar }
    }

    /// Medium taken from `config.abar`.
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.abar)
    }

    pub fn n_of_sigma(&self, sigma: f64) -> f64 {
        n_of_sigma(sigma, self.abar)
    }

    pub fn sigma_of_n(&self, nn: f64) -> f64 {
        sigma_of_n(nn, self.abar)
    }

    pub fn n_of_sigma_array<S, D>(&self, sigma: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        n_of_sigma_array(sigma, self.abar)
    }

    pub fn sigma_of_n_array<S, D>(&self, nn: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        sigma_of_n_array(nn, self.abar)
    }
}

impl Default for ColumnModel {
    fn default() -> Self {
        Self::new(ABAR_H2)
    }
}
