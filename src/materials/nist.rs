//! Embedded reference data for standard elements and compounds.
//!
//! A small NIST-flavoured cut covering what the beamline needs; symbols
//! and names resolve case-sensitively for elements and case-insensitively
//! for materials.

use super::material::State;

/// Reference record for a chemical element.
pub(crate) struct ElementRecord {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u32,
    /// Mean molar mass in g/mol.
    pub molar_mass: f64,
    /// Natural isotopes as (nucleons, atomic mass g/mol, mole fraction).
    pub isotopes: &'static [(u32, f64, f64)],
}

pub(crate) const ELEMENTS: &[ElementRecord] = &[
    ElementRecord {
        symbol: "H",
        name: "hydrogen",
        atomic_number: 1,
        molar_mass: 1.008,
        isotopes: &[(1, 1.007_83, 0.999_885), (2, 2.014_10, 0.000_115)],
    },
    ElementRecord {
        symbol: "C",
        name: "carbon",
        atomic_number: 6,
        molar_mass: 12.011,
        isotopes: &[(12, 12.0, 0.9893), (13, 13.003_35, 0.0107)],
    },
    ElementRecord {
        symbol: "N",
        name: "nitrogen",
        atomic_number: 7,
        molar_mass: 14.007,
        isotopes: &[(14, 14.003_07, 0.996_36), (15, 15.000_11, 0.003_64)],
    },
    ElementRecord {
        symbol: "O",
        name: "oxygen",
        atomic_number: 8,
        molar_mass: 15.999,
        isotopes: &[
            (16, 15.994_91, 0.997_57),
            (17, 16.999_13, 0.000_38),
            (18, 17.999_16, 0.002_05),
        ],
    },
    ElementRecord {
        symbol: "F",
        name: "fluorine",
        atomic_number: 9,
        molar_mass: 18.998,
        isotopes: &[(19, 18.998_40, 1.0)],
    },
    ElementRecord {
        symbol: "Ar",
        name: "argon",
        atomic_number: 18,
        molar_mass: 39.948,
        isotopes: &[
            (36, 35.967_55, 0.003_336),
            (38, 37.962_73, 0.000_629),
            (40, 39.962_38, 0.996_035),
        ],
    },
    ElementRecord {
        symbol: "Ti",
        name: "titanium",
        atomic_number: 22,
        molar_mass: 47.867,
        isotopes: &[
            (46, 45.952_63, 0.0825),
            (47, 46.951_76, 0.0744),
            (48, 47.947_94, 0.7372),
            (49, 48.947_87, 0.0541),
            (50, 49.944_79, 0.0518),
        ],
    },
    ElementRecord {
        symbol: "Fe",
        name: "iron",
        atomic_number: 26,
        molar_mass: 55.845,
        isotopes: &[
            (54, 53.939_61, 0.058_45),
            (56, 55.934_94, 0.917_54),
            (57, 56.935_39, 0.021_19),
            (58, 57.933_27, 0.002_82),
        ],
    },
    ElementRecord {
        symbol: "Pb",
        name: "lead",
        atomic_number: 82,
        molar_mass: 207.2,
        isotopes: &[
            (204, 203.973_04, 0.014),
            (206, 205.974_46, 0.241),
            (207, 206.975_90, 0.221),
            (208, 207.976_65, 0.524),
        ],
    },
];

/// Reference record for a standard material.
pub(crate) struct MaterialRecord {
    pub name: &'static str,
    /// Density in g/cm3.
    pub density: f64,
    pub state: State,
    /// Composition as (element symbol, atom count).
    pub composition: &'static [(&'static str, u32)],
}

pub(crate) const MATERIALS: &[MaterialRecord] = &[
    MaterialRecord {
        name: "air",
        density: 0.001_225,
        state: State::Gas,
        // Dry air by whole-number mole ratio.
        composition: &[("N", 78), ("O", 21), ("Ar", 1)],
    },
    MaterialRecord {
        name: "polyethylene",
        density: 0.94,
        state: State::Solid,
        composition: &[("C", 2), ("H", 4)],
    },
    MaterialRecord {
        name: "iron",
        density: 7.874,
        state: State::Solid,
        composition: &[("Fe", 1)],
    },
    MaterialRecord {
        name: "lead",
        density: 11.35,
        state: State::Solid,
        composition: &[("Pb", 1)],
    },
    MaterialRecord {
        name: "titanium",
        density: 4.54,
        state: State::Solid,
        composition: &[("Ti", 1)],
    },
];

/// Finds an element record by chemical symbol.
pub(crate) fn find_element(symbol: &str) -> Option<&'static ElementRecord> {
    ELEMENTS.iter().find(|record| record.symbol == symbol)
}

/// Finds a material record by name, case-insensitively.
pub(crate) fn find_material(name: &str) -> Option<&'static MaterialRecord> {
    MATERIALS
        .iter()
        .find(|record| record.name.eq_ignore_ascii_case(name))
}
