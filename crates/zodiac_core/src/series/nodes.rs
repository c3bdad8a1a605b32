//! Lunar ascending node.
//!
//! Mean node: the fifth Delaunay argument Ω (IERS 2010, Table 5.2e).
//! True node: mean node plus the principal solar perturbations of the
//! lunar orbit plane (Chapront–Touzé & Chapront, _Lunar Tables and
//! Programs_), good to a few arcminutes.

use zodiac_frames::fundamental_arguments;

/// Periodic terms: `[nl, nl', nF, nD, amplitude_deg]`, argument
/// nl·l + nl'·l' + nF·F + nD·D.
#[rustfmt::skip]
static TRUE_NODE_TERMS: [[f64; 5]; 5] = [
    // nl   nl'   nF    nD    amplitude (deg)
    [ 0.0,  0.0, -2.0,  2.0, -1.4979],
    [ 0.0,  1.0,  0.0,  0.0, -0.1500],
    [ 0.0,  0.0,  0.0,  2.0, -0.1226],
    [ 0.0,  0.0,  2.0,  0.0,  0.1176],
    [ 2.0,  0.0, -2.0,  0.0, -0.0801],
];

/// Mean ascending node longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub(crate) fn mean_node_deg(t: f64) -> f64 {
    fundamental_arguments(t)[4].to_degrees().rem_euclid(360.0)
}

/// True ascending node longitude in degrees [0, 360).
pub(crate) fn true_node_deg(t: f64) -> f64 {
    let [l, lp, f, d, om] = fundamental_arguments(t);
    let correction: f64 = TRUE_NODE_TERMS
        .iter()
        .map(|term| term[4] * (term[0] * l + term[1] * lp + term[2] * f + term[3] * d).sin())
        .sum();
    (om.to_degrees() + correction).rem_euclid(360.0)
}
