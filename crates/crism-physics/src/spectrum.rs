// ─────────────────────────────────────────────────────────────────────
// SCPN CR-ISM — Cosmic-Ray Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Padovani cosmic-ray differential flux for protons and electrons.
//!
//! Unknown species never fail: the input energy comes back unchanged,
//! tagged as [`SpectrumEval::PassThrough`], and a warning is logged.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crism_types::config::ModelConfig;
use crism_types::constants::{SPECIES_ELECTRON, SPECIES_PROTON_HIGH, SPECIES_PROTON_LOW};
use crism_types::error::CrError;
use crism_types::params::PadovaniParams;
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Built-in spectrum branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// "pH": protons, high-energy fit.
    ProtonHigh,
    /// "pL": protons, low-energy fit.
    ProtonLow,
    /// "elec": electrons.
    Electron,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::ProtonHigh, Species::ProtonLow, Species::Electron];

    pub fn id(&self) -> &'static str {
        match self {
            Species::ProtonHigh => SPECIES_PROTON_HIGH,
            Species::ProtonLow => SPECIES_PROTON_LOW,
            Species::Electron => SPECIES_ELECTRON,
        }
    }

    pub fn params(&self) -> PadovaniParams {
        match self {
            Species::ProtonHigh => PadovaniParams::PROTON_HIGH,
            Species::ProtonLow => PadovaniParams::PROTON_LOW,
            Species::Electron => PadovaniParams::ELECTRON,
        }
    }
}

impl FromStr for Species {
    type Err = CrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SPECIES_PROTON_HIGH => Ok(Species::ProtonHigh),
            SPECIES_PROTON_LOW => Ok(Species::ProtonLow),
            SPECIES_ELECTRON => Ok(Species::Electron),
            other => Err(CrError::UnknownSpecies(other.to_string())),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Outcome of a spectrum evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum SpectrumEval<T> {
    /// Differential flux for a recognized species.
    Flux(T),
    /// Species not recognized; `value` is the input energy, untouched.
    PassThrough { value: T, species: String },
}

impl<T> SpectrumEval<T> {
    pub fn value(&self) -> &T {
        match self {
            SpectrumEval::Flux(v) => v,
            SpectrumEval::PassThrough { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            SpectrumEval::Flux(v) => v,
            SpectrumEval::PassThrough { value, .. } => value,
        }
    }

    pub fn is_flux(&self) -> bool {
        matches!(self, SpectrumEval::Flux(_))
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, SpectrumEval::PassThrough { .. })
    }
}

fn pass_through<T>(value: T, species: &str) -> SpectrumEval<T> {
    tracing::warn!(species, "Unrecognized species: {species}");
    SpectrumEval::PassThrough {
        value,
        species: species.to_string(),
    }
}

/// Differential flux `C · E^α / (E + E₀)^β` at `e_ev` for a built-in species.
pub fn cr_spectrum(e_ev: f64, species: &str) -> SpectrumEval<f64> {
    match species.parse::<Species>() {
        Ok(s) => SpectrumEval::Flux(s.params().flux(e_ev)),
        Err(_) => pass_through(e_ev, species),
    }
}

/// Element-wise [`cr_spectrum`]. On fallback the energies are returned as an owned copy.
pub fn cr_spectrum_array<S, D>(
    e_ev: &ArrayBase<S, D>,
    species: &str,
) -> SpectrumEval<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    match species.parse::<Species>() {
        Ok(s) => SpectrumEval::Flux(s.params().flux_array(e_ev)),
        Err(_) => pass_through(e_ev.to_owned(), species),
    }
}

/// Named spectrum branches, usually built from a [`ModelConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumModel {
    branches: BTreeMap<String, PadovaniParams>,
}

impl SpectrumModel {
    pub fn from_config(config: &ModelConfig) -> Self {
        SpectrumModel {
            branches: config.spectra.clone(),
        }
    }

    pub fn with_branch(mut self, name: &str, params: PadovaniParams) -> Self {
        self.branches.insert(name.to_string(), params);
        self
    }

    pub fn params_for(&self, name: &str) -> Option<&PadovaniParams> {
        self.branches.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.branches.keys().map(String::as_str)
    }

    /// Same contract as [`cr_spectrum`], over this model's branches.
    pub fn evaluate(&self, e_ev: f64, name: &str) -> SpectrumEval<f64> {
        match self.branches.get(name) {
            Some(p) => SpectrumEval::Flux(p.flux(e_ev)),
            None => pass_through(e_ev, name),
        }
    }

    pub fn evaluate_array<S, D>(
        &self,
        e_ev: &ArrayBase<S, D>,
        name: &str,
    ) -> SpectrumEval<Array<f64, D>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        match self.branches.get(name) {
            Some(p) => SpectrumEval::Flux(p.flux_array(e_ev)),
            None => pass_through(e_ev.to_owned(), name),
        }
    }
}

impl Default for SpectrumModel {
    fn default() -> Self {
        Self::from_config(&ModelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_species_parse_and_display() {
        for s in Species::ALL {
            assert_eq!(s.id().parse::<Species>().unwrap(), s);
            assert_eq!(s.to_string(), s.id());
        }
        assert!(matches!(
            "PH".parse::<Species>(),
            Err(CrError::UnknownSpecies(ref name)) if name == "PH"
        ));
    }

    #[test]
    fn test_proton_high_formula() {
        let j = cr_spectrum(650e6, "pH");
        let expected = 2.4e15 * 650e6_f64.powf(-0.8) / 1.3e9_f64.powf(1.9);
        assert_eq!(j, SpectrumEval::Flux(expected));
    }

    #[test]
    fn test_each_species_uses_its_branch() {
        let e = 3.0e7;
        for s in Species::ALL {
            let j = cr_spectrum(e, s.id());
            assert!(j.is_flux());
            assert_eq!(*j.value(), s.params().flux(e));
        }
        assert_ne!(
            cr_spectrum(e, "pH").into_value(),
            cr_spectrum(e, "pL").into_value()
        );
    }

    #[test]
    fn test_unknown_species_passes_energy_through() {
        let j = cr_spectrum(100.0, "foo");
        assert!(j.is_pass_through());
        assert_eq!(
            j,
            SpectrumEval::PassThrough {
                value: 100.0,
                species: "foo".to_string()
            }
        );
        assert_eq!(j.into_value(), 100.0);
    }

    #[test]
    fn test_unknown_species_emits_warning() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .finish();

        let j = tracing::subscriber::with_default(subscriber, || cr_spectrum(100.0, "foo"));
        assert_eq!(*j.value(), 100.0);

        let logs = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("Unrecognized species: foo"), "logs: {logs}");
    }

    #[test]
    fn test_array_matches_elementwise() {
        let e: Array1<f64> = array![1e3, 1e5, 650e6, 1e9, 1e12];
        for s in Species::ALL {
            let j = cr_spectrum_array(&e, s.id()).into_value();
            assert_eq!(j.len(), e.len());
            for (ji, ei) in j.iter().zip(e.iter()) {
                assert_eq!(*ji, cr_spectrum(*ei, s.id()).into_value());
            }
        }
    }

    #[test]
    fn test_array_unknown_species_returns_input() {
        let e = array![[1.0, 2.0], [3.0, 4.0]];
        let j = cr_spectrum_array(&e.view(), "protons");
        assert!(j.is_pass_through());
        assert_eq!(j.into_value(), e);
    }

    #[test]
    fn test_default_model_matches_free_functions() {
        let model = SpectrumModel::default();
        assert_eq!(model.names().collect::<Vec<_>>(), vec!["elec", "pH", "pL"]);
        for s in Species::ALL {
            assert_eq!(model.evaluate(2.0e8, s.id()), cr_spectrum(2.0e8, s.id()));
        }
        assert_eq!(model.evaluate(5.0, "foo"), cr_spectrum(5.0, "foo"));
    }

    #[test]
    fn test_model_custom_branch() {
        let custom = PadovaniParams {
            c: 1.0,
            e0: 0.0,
            alpha: 0.0,
            beta: 1.0,
        };
        let model = SpectrumModel::default().with_branch("inv", custom);
        // 1 / E
        assert!((model.evaluate(4.0, "inv").into_value() - 0.25).abs() < 1e-15);

        let e = array![1.0, 2.0, 8.0];
        let j = model.evaluate_array(&e, "inv").into_value();
        assert_eq!(j, array![1.0, 0.5, 0.125]);

        let fallback = model.evaluate_array(&e, "missing");
        assert!(fallback.is_pass_through());
        assert_eq!(fallback.into_value(), e);
    }
}
