// ─────────────────────────────────────────────────────────────────────
// SCPN CR-ISM — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Proton mass (g). CGS, matching the g/cm² surface densities used downstream.
pub const M_PROTON_G: f64 = 1.67262192e-24;

/// Mean molecular weight of molecular hydrogen, in proton masses.
/// Default `Abar` for the column/surface density converters.
pub const ABAR_H2: f64 = 2.0;

/// Mean molecular weight of atomic hydrogen, in proton masses.
pub const ABAR_HI: f64 = 1.0;

/// Identifier of the high-energy proton branch.
pub const SPECIES_PROTON_HIGH: &str = "pH";

/// Identifier of the low-energy proton branch.
pub const SPECIES_PROTON_LOW: &str = "pL";

/// Identifier of the electron branch.
pub const SPECIES_ELECTRON: &str = "elec";
