//! Vertex generators for the ten solids.
//!
//! Every generator is a small pure function built from the golden ratio, `√2` and
//! signed permutations of a few canonical triples. Face tables index into these lists,
//! so the enumeration order below must not change.
use glam::DVec3;

use crate::solid::SolidType;

/// Golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

type Generator = fn() -> Vec<DVec3>;

const GENERATORS: [Generator; SolidType::COUNT] = [
    cuboctahedron,
    truncated_octahedron,
    truncated_cube,
    rhombicuboctahedron,
    great_rhombicuboctahedron,
    truncated_tetrahedron,
    icosahedron,
    rhombicosidodecahedron,
    truncated_icosahedron,
    icosidodecahedron,
];

/// Unit-scale vertices of `kind`, in the order its face tables expect.
pub fn generate(kind: SolidType) -> Vec<DVec3> {
    GENERATORS[kind.index()]()
}

/// All eight sign variants of `c`. Bit 2 of the counter flips x, bit 1 flips y and
/// bit 0 flips z, so the all-positive variant comes first.
fn octants(c: DVec3) -> impl DoubleEndedIterator<Item = DVec3> {
    let sign = |bit: u32| if bit == 0 { 1.0 } else { -1.0 };
    (0..8u32).map(move |i| DVec3::new(sign(i & 4) * c.x, sign(i & 2) * c.y, sign(i & 1) * c.z))
}

/// Cyclic left rotation of the components: 0 keeps `(x, y, z)`, 1 gives `(y, z, x)`,
/// 2 gives `(z, x, y)`.
fn cyclic(c: DVec3, shift: usize) -> DVec3 {
    match shift % 3 {
        0 => c,
        1 => DVec3::new(c.y, c.z, c.x),
        _ => DVec3::new(c.z, c.x, c.y),
    }
}

fn from_rows(rows: &[[f64; 3]]) -> Vec<DVec3> {
    rows.iter().map(|&r| DVec3::from_array(r)).collect()
}

fn cuboctahedron() -> Vec<DVec3> {
    from_rows(&[
        [1.0, 1.0, 0.0],
        [1.0, -1.0, 0.0],
        [-1.0, 1.0, 0.0],
        [-1.0, -1.0, 0.0],
        [1.0, 0.0, 1.0],
        [1.0, 0.0, -1.0],
        [-1.0, 0.0, 1.0],
        [-1.0, 0.0, -1.0],
        [0.0, 1.0, 1.0],
        [0.0, 1.0, -1.0],
        [0.0, -1.0, 1.0],
        [0.0, -1.0, -1.0],
    ])
}

fn truncated_octahedron() -> Vec<DVec3> {
    from_rows(&[
        [0.0, 1.0, 2.0],
        [0.0, 1.0, -2.0],
        [0.0, -1.0, 2.0],
        [0.0, -1.0, -2.0],
        [1.0, 0.0, 2.0],
        [1.0, 0.0, -2.0],
        [-1.0, 0.0, 2.0],
        [-1.0, 0.0, -2.0],
        [1.0, 2.0, 0.0],
        [1.0, -2.0, 0.0],
        [-1.0, 2.0, 0.0],
        [-1.0, -2.0, 0.0],
        [2.0, 0.0, 1.0],
        [2.0, 0.0, -1.0],
        [-2.0, 0.0, 1.0],
        [-2.0, 0.0, -1.0],
        [2.0, 1.0, 0.0],
        [2.0, -1.0, 0.0],
        [-2.0, 1.0, 0.0],
        [-2.0, -1.0, 0.0],
        [0.0, 2.0, 1.0],
        [0.0, 2.0, -1.0],
        [0.0, -2.0, 1.0],
        [0.0, -2.0, -1.0],
    ])
}

fn truncated_cube() -> Vec<DVec3> {
    let k = std::f64::consts::SQRT_2 - 1.0;
    (0..3)
        .flat_map(|shift| octants(cyclic(DVec3::new(1.0, 1.0, k), shift)))
        .collect()
}

fn rhombicuboctahedron() -> Vec<DVec3> {
    let b = 1.0 + std::f64::consts::SQRT_2;
    [
        DVec3::new(1.0, 1.0, b),
        DVec3::new(1.0, b, 1.0),
        DVec3::new(b, 1.0, 1.0),
    ]
    .into_iter()
    .flat_map(octants)
    .collect()
}

fn great_rhombicuboctahedron() -> Vec<DVec3> {
    let a = 1.0;
    let b = 1.0 + std::f64::consts::SQRT_2;
    let c = 1.0 + 2.0 * std::f64::consts::SQRT_2;
    [
        DVec3::new(a, b, c),
        DVec3::new(a, c, b),
        DVec3::new(b, a, c),
        DVec3::new(b, c, a),
        DVec3::new(c, a, b),
        DVec3::new(c, b, a),
    ]
    .into_iter()
    .flat_map(octants)
    .collect()
}

fn truncated_tetrahedron() -> Vec<DVec3> {
    from_rows(&[
        [3.0, 1.0, 1.0],
        [1.0, 3.0, 1.0],
        [1.0, 1.0, 3.0],
        [3.0, -1.0, -1.0],
        [1.0, -3.0, -1.0],
        [1.0, -1.0, -3.0],
        [-3.0, 1.0, -1.0],
        [-1.0, 3.0, -1.0],
        [-1.0, 1.0, -3.0],
        [-3.0, -1.0, 1.0],
        [-1.0, -3.0, 1.0],
        [-1.0, -1.0, 3.0],
    ])
}

fn icosahedron() -> Vec<DVec3> {
    from_rows(&[
        [0.0, 1.0, PHI],
        [0.0, 1.0, -PHI],
        [0.0, -1.0, PHI],
        [0.0, -1.0, -PHI],
        [1.0, PHI, 0.0],
        [1.0, -PHI, 0.0],
        [-1.0, PHI, 0.0],
        [-1.0, -PHI, 0.0],
        [PHI, 0.0, 1.0],
        [PHI, 0.0, -1.0],
        [-PHI, 0.0, 1.0],
        [-PHI, 0.0, -1.0],
    ])
}

fn rhombicosidodecahedron() -> Vec<DVec3> {
    let phi2 = PHI * PHI;
    let phi3 = phi2 * PHI;
    let mut out = Vec::with_capacity(60);

    for shift in 0..3 {
        out.extend(octants(cyclic(DVec3::new(1.0, 1.0, phi3), shift)));
    }
    for shift in 0..3 {
        out.extend(octants(cyclic(DVec3::new(phi2, PHI, 2.0 * PHI), shift)));
    }

    // (±(2+φ), 0, ±φ²) family, interleaved across the three rotations.
    let a = 2.0 + PHI;
    let b = phi2;
    for s1 in [1.0, -1.0] {
        for s2 in [1.0, -1.0] {
            out.push(DVec3::new(s1 * a, 0.0, s2 * b));
            out.push(DVec3::new(0.0, s1 * b, s2 * a));
            out.push(DVec3::new(s1 * b, s2 * a, 0.0));
        }
    }
    out
}

fn truncated_icosahedron() -> Vec<DVec3> {
    let mut out = Vec::with_capacity(60);

    let tall = 3.0 * PHI;
    for shift in 0..3 {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                out.push(cyclic(DVec3::new(0.0, sy, sz * tall), shift));
            }
        }
    }

    // Remaining two families run their signs negative-first, i.e. octant order reversed.
    for base in [
        DVec3::new(2.0, 1.0 + 2.0 * PHI, PHI),
        DVec3::new(1.0, 2.0 + PHI, 2.0 * PHI),
    ] {
        for shift in 0..3 {
            out.extend(octants(cyclic(base, shift)).rev());
        }
    }
    out
}

fn icosidodecahedron() -> Vec<DVec3> {
    let mut out = Vec::with_capacity(30);

    let axis = 2.0 * PHI;
    for shift in 0..3 {
        for s in [-1.0, 1.0] {
            out.push(cyclic(DVec3::new(0.0, 0.0, s * axis), shift));
        }
    }
    for shift in 0..3 {
        out.extend(octants(cyclic(DVec3::new(1.0, PHI, PHI * PHI), shift)).rev());
    }
    out
}
