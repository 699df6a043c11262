// ─────────────────────────────────────────────────────────────────────
// SCPN CR-ISM — CR-ISM Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cosmic-ray and interstellar-medium formulas.
//!
//! Spectrum evaluation, particle range from an energy-loss table,
//! column/surface density conversion.

pub mod column;
pub mod range;
pub mod spectrum;
