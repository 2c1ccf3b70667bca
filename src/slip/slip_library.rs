use super::SlipGroup;
use crate::orientation::SymmetryRegistry;
use crate::StrError;

/// Names of the standard slip groups
///
/// | name                | plane        | direction    | symmetry  |
/// |---------------------|--------------|--------------|-----------|
/// | `fcc`               | {1 1 1}      | ⟨1 -1 0⟩     | cubic     |
/// | `bcc`               | {1 -1 0}     | ⟨1 1 1⟩      | cubic     |
/// | `bcc:112`           | {1 1 -2}     | ⟨1 1 1⟩      | cubic     |
/// | `bcc:123`           | {1 2 -3}     | ⟨1 1 1⟩      | cubic     |
/// | `hcp:basal`         | (0 0 0 1)    | [1 1 -2 0]   | hexagonal |
/// | `hcp:prismatic`     | (1 -1 0 0)   | [1 1 -2 0]   | hexagonal |
/// | `hcp:pyramidal_a`   | (0 1 -1 1)   | [2 -1 -1 0]  | hexagonal |
/// | `hcp:pyramidal_c+a` | (0 1 -1 1)   | [-1 -1 2 3]  | hexagonal |
///
/// Reference: Pagan et al. (2023) Using the Ti–Al system to understand plasticity and its
/// connection to fracture and fatigue in α Ti alloys, Metall. Mater. Trans. A 54:3373–3388
pub const SLIP_GROUP_NAMES: [&str; 8] = [
    "fcc",
    "bcc",
    "bcc:112",
    "bcc:123",
    "hcp:basal",
    "hcp:prismatic",
    "hcp:pyramidal_a",
    "hcp:pyramidal_c+a",
];

/// Returns a standard slip group
///
/// # Input
///
/// * `name` -- one of [SLIP_GROUP_NAMES]
/// * `c_over_a` -- the c/a ratio (required by the `hcp` groups)
/// * `registry` -- registry holding the `cubic` and `hexagonal` symmetry groups
///
/// The hexagonal lattice uses the orthonormal basis `e1 ∥ a1`, `e3 ∥ c`, `e2 = e3 × e1`.
pub fn slip_group(name: &str, c_over_a: Option<f64>, registry: &SymmetryRegistry) -> Result<SlipGroup, StrError> {
    if name.starts_with("hcp") {
        let ca = c_over_a.ok_or("c/a ratio is required by the hcp slip groups")?;
        let (hkil, uvtw) = match name {
            "hcp:basal" => ([0.0, 0.0, 0.0, 1.0], [1.0, 1.0, -2.0, 0.0]),
            "hcp:prismatic" => ([1.0, -1.0, 0.0, 0.0], [1.0, 1.0, -2.0, 0.0]),
            "hcp:pyramidal_a" => ([0.0, 1.0, -1.0, 1.0], [2.0, -1.0, -1.0, 0.0]),
            "hcp:pyramidal_c+a" => ([0.0, 1.0, -1.0, 1.0], [-1.0, -1.0, 2.0, 3.0]),
            _ => return Err(UNKNOWN_GROUP),
        };
        let hexagonal = registry.get("hexagonal")?;
        let n = miller_bravais_normal(&hkil, ca);
        let d = miller_bravais_direction(&uvtw, ca);
        return SlipGroup::new(&n, &d, hexagonal);
    }
    let (n, d) = match name {
        "fcc" => ([1.0, 1.0, 1.0], [1.0, -1.0, 0.0]),
        "bcc" => ([1.0, -1.0, 0.0], [1.0, 1.0, 1.0]),
        "bcc:112" => ([1.0, 1.0, -2.0], [1.0, 1.0, 1.0]),
        "bcc:123" => ([1.0, 2.0, -3.0], [1.0, 1.0, 1.0]),
        _ => return Err(UNKNOWN_GROUP),
    };
    let cubic = registry.get("cubic")?;
    SlipGroup::new(&n, &d, cubic)
}

const UNKNOWN_GROUP: StrError = "slip group is not recognized; choices are: fcc, bcc, bcc:112, bcc:123, hcp:basal, hcp:prismatic, hcp:pyramidal_a, hcp:pyramidal_c+a";

/// Converts a Miller-Bravais direction [u v t w] to Cartesian components
pub fn miller_bravais_direction(uvtw: &[f64; 4], c_over_a: f64) -> [f64; 3] {
    let s120 = f64::sqrt(3.0) / 2.0;
    let (u, v, w) = (uvtw[0], uvtw[1], uvtw[3]);
    [1.5 * u, s120 * (2.0 * v + u), c_over_a * w]
}

/// Converts a Miller-Bravais plane normal (h k i l) to Cartesian components
pub fn miller_bravais_normal(hkil: &[f64; 4], c_over_a: f64) -> [f64; 3] {
    let s120 = f64::sqrt(3.0) / 2.0;
    let (h, k, l) = (hkil[0], hkil[1], hkil[3]);
    [h, (k + 0.5 * h) / s120, l / c_over_a]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
