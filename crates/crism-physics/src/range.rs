// ─────────────────────────────────────────────────────────────────────
// SCPN CR-ISM — Particle Range
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Particle range from a tabulated energy-loss function.
//!
//! R(E) = ∫ dE / L(E), with L = dE/dN the loss per unit column density
//! (typically 1e-16 eV cm²) and E the matching energies [eV].

use crism_types::error::{CrError, CrResult};
use ndarray::{s, ArrayBase, Data, Ix1};

/// Cumulative range at each of the first N−1 sampled energies.
///
/// `integrand[i] = (ee[i+1] − ee[i]) / de_dn[i+1]`, and entry k is the sum of
/// `integrand[0..k]`, so the first entry is 0 and the last term is never added.
/// A zero loss value yields inf/NaN that propagates into every later entry.
pub fn range_of_e<S1, S2>(
    ee: &ArrayBase<S1, Ix1>,
    de_dn: &ArrayBase<S2, Ix1>,
) -> CrResult<Vec<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if de_dn.len() != ee.len() {
        return Err(CrError::LengthMismatch {
            expected: ee.len(),
            found: de_dn.len(),
        });
    }
    if ee.len() < 2 {
        return Ok(Vec::new());
    }

    let de = &ee.slice(s![1..]) - &ee.slice(s![..-1]);
    let integrand = de / &de_dn.slice(s![1..]);

    let mut ranges = Vec::with_capacity(integrand.len());
    let mut acc = 0.0;
    for term in integrand.iter() {
        ranges.push(acc);
        acc += term;
    }
    Ok(ranges)
}

/// Range for a particle starting at `e_init`, read off a `range_of_e` table.
///
/// `ranges[k]` belongs to `ee[k]`; a trailing extra energy (the full `ee`
/// passed to [`range_of_e`]) is ignored. Linear interpolation, clamped
/// to the tabulated span.
pub fn range_at_energy(e_init: f64, ee: &[f64], ranges: &[f64]) -> CrResult<f64> {
    if ranges.is_empty() {
        return Err(CrError::EmptyTable);
    }
    if ee.len() < ranges.len() {
        return Err(CrError::LengthMismatch {
            expected: ranges.len(),
            found: ee.len(),
        });
    }
    if e_init.is_nan() {
        return Ok(f64::NAN);
    }
    let xp = &ee[..ranges.len()];
    let last = ranges.len() - 1;

    if e_init <= xp[0] {
        return Ok(ranges[0]);
    }
    if e_init >= xp[last] {
        return Ok(ranges[last]);
    }

    // First index with xp[hi] > e_init; xp[0] <= e_init < xp[last] keeps 1 <= hi <= last.
    let hi = xp.partition_point(|&x| x <= e_init);
    let lo = hi - 1;
    let t = (e_init - xp[lo]) / (xp[hi] - xp[lo]).max(1e-30);
    Ok(ranges[lo] + t * (ranges[hi] - ranges[lo]))
}
