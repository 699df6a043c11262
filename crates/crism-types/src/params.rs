// ─────────────────────────────────────────────────────────────────────
// SCPN CR-ISM — Spectrum Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Padovani-type cosmic-ray spectrum parameters.
//!
//! j(E) = C · E^α / (E + E₀)^β, with E in eV.
//!
//! References:
//! - Padovani, Ivlev, Galli & Caselli, A&A 614, A111 (2018)

use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

/// The four constants of one spectrum branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadovaniParams {
    /// Normalization C.
    pub c: f64,
    /// Break energy E₀ [eV].
    pub e0: f64,
    /// Low-energy slope α.
    pub alpha: f64,
    /// High-energy slope β (asymptotic index α − β).
    pub beta: f64,
}

impl PadovaniParams {
    /// High-energy proton branch ("pH").
    pub const PROTON_HIGH: Self = PadovaniParams {
        c: 2.4e15,
        e0: 650e6,
        alpha: -0.8,
        beta: 1.9,
    };

    /// Low-energy proton branch ("pL").
    pub const PROTON_LOW: Self = PadovaniParams {
        c: 2.4e15,
        e0: 650e6,
        alpha: 0.1,
        beta: 2.8,
    };

    /// Electron branch ("elec").
    pub const ELECTRON: Self = PadovaniParams {
        c: 2.1e18,
        e0: 710e6,
        alpha: -1.3,
        beta: 1.9,
    };

    /// Differential flux at energy `e_ev`.
    ///
    /// Non-positive energies are not guarded; NaN or inf flows through.
    #[inline]
    pub fn flux(&self, e_ev: f64) -> f64 {
        self.c * e_ev.powf(self.alpha) / (e_ev + self.e0).powf(self.beta)
    }

    /// Element-wise [`flux`](Self::flux) over an array of any shape.
    pub fn flux_array<S, D>(&self, e_ev: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        e_ev.mapv(|e| self.flux(e))
    }
}
