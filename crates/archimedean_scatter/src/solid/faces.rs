//! Hand-authored face catalogs.
//!
//! Faces are grouped by polygon arity. Each group carries a fixed selection weight that
//! approximates, but does not equal, its share of the surface area. Vertex order within a
//! face walks the boundary, so fanning from the first vertex triangulates it.
use crate::solid::{FaceCategory, SolidType};

/// Face categories of `kind`, in the order their cumulative weights are walked.
pub fn categories(kind: SolidType) -> Vec<FaceCategory> {
    match kind {
        SolidType::Cuboctahedron => vec![
            FaceCategory::new(&CUBOCTAHEDRON_SQUARES, 0.42),
            FaceCategory::new(&CUBOCTAHEDRON_TRIANGLES, 0.58),
        ],
        SolidType::TruncatedOctahedron => vec![
            FaceCategory::new(&TRUNCATED_OCTAHEDRON_SQUARES, 0.42),
            FaceCategory::new(&TRUNCATED_OCTAHEDRON_HEXAGONS, 0.58),
        ],
        SolidType::TruncatedCube => vec![
            FaceCategory::new(&TRUNCATED_CUBE_TRIANGLES, 0.2),
            FaceCategory::new(&TRUNCATED_CUBE_OCTAGONS, 0.8),
        ],
        // Cap and belt squares share one weight: 0.231 + 0.469.
        SolidType::Rhombicuboctahedron => vec![
            FaceCategory::new(&RHOMBICUBOCTAHEDRON_TRIANGLES, 0.3),
            FaceCategory::new(&RHOMBICUBOCTAHEDRON_SQUARES, 0.7),
        ],
        SolidType::GreatRhombicuboctahedron => vec![
            FaceCategory::new(&GREAT_RHOMBICUBOCTAHEDRON_OCTAGONS, 0.23),
            FaceCategory::new(&GREAT_RHOMBICUBOCTAHEDRON_HEXAGONS, 0.31),
            FaceCategory::new(&GREAT_RHOMBICUBOCTAHEDRON_SQUARES, 0.46),
        ],
        SolidType::TruncatedTetrahedron => vec![
            FaceCategory::new(&TRUNCATED_TETRAHEDRON_TRIANGLES, 0.5),
            FaceCategory::new(&TRUNCATED_TETRAHEDRON_HEXAGONS, 0.5),
        ],
        SolidType::Icosahedron => vec![FaceCategory::new(&ICOSAHEDRON_TRIANGLES, 1.0)],
        SolidType::Rhombicosidodecahedron => vec![
            FaceCategory::new(&RHOMBICOSIDODECAHEDRON_TRIANGLES, 0.32),
            FaceCategory::new(&RHOMBICOSIDODECAHEDRON_SQUARES, 0.48),
            FaceCategory::new(&RHOMBICOSIDODECAHEDRON_PENTAGONS, 0.2),
        ],
        SolidType::TruncatedIcosahedron => vec![
            FaceCategory::new(&TRUNCATED_ICOSAHEDRON_PENTAGONS, 0.375),
            FaceCategory::new(&TRUNCATED_ICOSAHEDRON_HEXAGONS, 0.625),
        ],
        SolidType::Icosidodecahedron => vec![
            FaceCategory::new(&ICOSIDODECAHEDRON_TRIANGLES, 0.625),
            FaceCategory::new(&ICOSIDODECAHEDRON_PENTAGONS, 0.375),
        ],
    }
}

const CUBOCTAHEDRON_SQUARES: [[usize; 4]; 6] = [
    [0, 4, 1, 5], [2, 7, 3, 6], [0, 9, 2, 8], [1, 10, 3, 11], [4, 10, 6, 8], [5, 9, 7, 11],
];

const CUBOCTAHEDRON_TRIANGLES: [[usize; 3]; 8] = [
    [0, 8, 4], [0, 5, 9], [1, 4, 10], [1, 11, 5], [2, 6, 8], [2, 9, 7], [3, 10, 6], [3, 7, 11],
];

const TRUNCATED_OCTAHEDRON_SQUARES: [[usize; 4]; 6] = [
    [12, 17, 13, 16], [14, 18, 15, 19], [20, 8, 21, 10], [22, 11, 23, 9], [0, 4, 2, 6],
    [1, 5, 3, 7],
];

const TRUNCATED_OCTAHEDRON_HEXAGONS: [[usize; 6]; 8] = [
    [0, 4, 12, 16, 8, 20], [1, 21, 8, 16, 13, 5], [2, 22, 9, 17, 12, 4], [3, 5, 13, 17, 9, 23],
    [0, 20, 10, 18, 14, 6], [1, 7, 15, 18, 10, 21], [2, 6, 14, 19, 11, 22], [3, 23, 11, 19, 15, 7],
];

const TRUNCATED_CUBE_TRIANGLES: [[usize; 3]; 8] = [
    [0, 8, 16], [1, 17, 9], [2, 10, 18], [3, 19, 11], [4, 20, 12], [5, 13, 21], [6, 14, 22],
    [7, 15, 23],
];

const TRUNCATED_CUBE_OCTAGONS: [[usize; 8]; 6] = [
    [0, 8, 10, 2, 3, 11, 9, 1], [4, 5, 13, 15, 7, 6, 14, 12], [0, 16, 20, 4, 5, 21, 17, 1],
    [2, 3, 19, 23, 7, 6, 22, 18], [8, 16, 20, 12, 14, 22, 18, 10], [9, 17, 21, 13, 15, 23, 19, 11],
];

const RHOMBICUBOCTAHEDRON_TRIANGLES: [[usize; 3]; 8] = [
    [0, 8, 16], [1, 9, 17], [2, 10, 18], [3, 11, 19], [4, 12, 20], [5, 13, 21], [6, 14, 22],
    [7, 15, 23],
];

const RHOMBICUBOCTAHEDRON_SQUARES: [[usize; 4]; 18] = [
    [0, 4, 6, 2], [1, 3, 7, 5], [8, 9, 13, 12], [10, 14, 15, 11], [16, 18, 19, 17],
    [20, 21, 23, 22], [0, 8, 12, 4], [2, 6, 14, 10], [1, 5, 13, 9], [3, 11, 15, 7], [0, 2, 18, 16],
    [4, 20, 22, 6], [1, 17, 19, 3], [5, 7, 23, 21], [8, 16, 17, 9], [10, 11, 19, 18],
    [12, 13, 21, 20], [14, 22, 23, 15],
];

const GREAT_RHOMBICUBOCTAHEDRON_OCTAGONS: [[usize; 8]; 6] = [
    [16, 0, 4, 20, 22, 6, 2, 18], [17, 1, 5, 21, 23, 7, 3, 19], [40, 32, 34, 42, 43, 35, 33, 41],
    [44, 36, 38, 46, 47, 39, 37, 45], [24, 8, 12, 28, 29, 13, 9, 25],
    [26, 10, 14, 30, 31, 15, 11, 27],
];

const GREAT_RHOMBICUBOCTAHEDRON_HEXAGONS: [[usize; 6]; 8] = [
    [0, 16, 32, 40, 24, 8], [1, 17, 33, 41, 25, 9], [2, 18, 34, 42, 26, 10],
    [3, 19, 35, 43, 27, 11], [4, 20, 36, 44, 28, 12], [5, 21, 37, 45, 29, 13],
    [6, 22, 38, 46, 30, 14], [7, 23, 39, 47, 31, 15],
];

const GREAT_RHOMBICUBOCTAHEDRON_SQUARES: [[usize; 4]; 12] = [
    [0, 4, 12, 8], [2, 6, 14, 10], [1, 5, 13, 9], [3, 7, 15, 11], [16, 18, 34, 32],
    [20, 22, 38, 36], [17, 19, 35, 33], [21, 23, 39, 37], [24, 25, 41, 40], [28, 29, 45, 44],
    [26, 27, 43, 42], [30, 31, 47, 46],
];

const TRUNCATED_TETRAHEDRON_TRIANGLES: [[usize; 3]; 4] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], [9, 10, 11],
];

const TRUNCATED_TETRAHEDRON_HEXAGONS: [[usize; 6]; 4] = [
    [0, 3, 4, 10, 11, 2], [1, 7, 8, 5, 3, 0], [2, 11, 9, 6, 7, 1], [4, 5, 8, 6, 9, 10],
];

const ICOSAHEDRON_TRIANGLES: [[usize; 3]; 20] = [
    [0, 8, 4], [0, 4, 6], [0, 6, 10], [0, 10, 2], [0, 2, 8], [3, 9, 1], [3, 1, 11], [3, 11, 7],
    [3, 7, 5], [3, 5, 9], [8, 4, 9], [4, 6, 1], [6, 10, 11], [10, 2, 7], [2, 8, 5], [4, 1, 9],
    [6, 11, 1], [10, 7, 11], [2, 5, 7], [8, 9, 5],
];

const RHOMBICOSIDODECAHEDRON_TRIANGLES: [[usize; 3]; 20] = [
    [0, 49, 4], [1, 52, 5], [2, 6, 55], [3, 58, 7], [8, 9, 50], [10, 11, 53], [12, 56, 13],
    [14, 59, 15], [16, 48, 18], [17, 51, 19], [20, 54, 22], [21, 57, 23], [24, 32, 40],
    [25, 33, 41], [26, 34, 42], [27, 43, 35], [28, 36, 44], [29, 45, 37], [30, 46, 38],
    [31, 47, 39],
];

const RHOMBICOSIDODECAHEDRON_SQUARES: [[usize; 4]; 30] = [
    [0, 2, 6, 4], [0, 24, 32, 49], [1, 3, 7, 5], [1, 25, 33, 52], [2, 26, 34, 55], [3, 58, 35, 27],
    [4, 49, 36, 28], [5, 52, 37, 29], [6, 30, 38, 55], [7, 58, 39, 31], [8, 9, 13, 12],
    [8, 32, 40, 50], [9, 33, 41, 50], [10, 11, 15, 14], [10, 34, 42, 53], [11, 35, 43, 53],
    [12, 56, 44, 36], [13, 56, 45, 37], [14, 59, 46, 38], [15, 59, 47, 39], [16, 17, 19, 18],
    [16, 40, 24, 48], [17, 51, 25, 41], [18, 48, 26, 42], [19, 43, 27, 51], [20, 21, 23, 22],
    [20, 54, 28, 44], [21, 57, 29, 45], [22, 46, 30, 54], [23, 57, 31, 47],
];

const RHOMBICOSIDODECAHEDRON_PENTAGONS: [[usize; 5]; 12] = [
    [0, 24, 48, 26, 2], [1, 3, 27, 51, 25], [4, 28, 54, 30, 6], [5, 29, 57, 31, 7],
    [8, 32, 49, 36, 12], [9, 33, 52, 37, 13], [10, 34, 55, 38, 14], [11, 35, 58, 39, 15],
    [16, 40, 50, 41, 17], [18, 42, 53, 43, 19], [20, 44, 56, 45, 21], [22, 46, 59, 47, 23],
];

const TRUNCATED_ICOSAHEDRON_PENTAGONS: [[usize; 5]; 12] = [
    [7, 18, 50, 51, 19], [3, 31, 39, 43, 35], [11, 25, 57, 59, 27], [4, 12, 44, 45, 13],
    [8, 20, 52, 54, 22], [2, 30, 38, 42, 34], [1, 29, 37, 41, 33], [5, 14, 46, 47, 15],
    [6, 16, 48, 49, 17], [0, 28, 36, 40, 32], [10, 21, 53, 55, 23], [9, 24, 56, 58, 26],
];

const TRUNCATED_ICOSAHEDRON_HEXAGONS: [[usize; 6]; 20] = [
    [0, 2, 30, 54, 52, 28], [13, 37, 29, 53, 21, 45], [9, 11, 27, 51, 50, 26],
    [12, 36, 28, 52, 20, 44], [19, 43, 35, 59, 27, 51], [1, 3, 31, 55, 53, 29],
    [4, 6, 16, 40, 36, 12], [15, 39, 31, 55, 23, 47], [14, 38, 30, 54, 22, 46],
    [1, 3, 35, 59, 57, 33], [0, 2, 34, 58, 56, 32], [5, 7, 19, 43, 39, 15], [5, 7, 18, 42, 38, 14],
    [16, 40, 32, 56, 24, 48], [8, 10, 21, 45, 44, 20], [9, 11, 25, 49, 48, 24],
    [18, 42, 34, 58, 26, 50], [8, 10, 23, 47, 46, 22], [4, 6, 17, 41, 37, 13],
    [17, 41, 33, 57, 25, 49],
];

const ICOSIDODECAHEDRON_TRIANGLES: [[usize; 3]; 20] = [
    [2, 18, 19], [3, 20, 21], [10, 18, 26], [1, 9, 13], [12, 20, 28], [13, 21, 29], [2, 14, 15],
    [11, 19, 27], [0, 6, 10], [3, 16, 17], [5, 26, 28], [4, 22, 24], [5, 27, 29], [4, 23, 25],
    [6, 14, 22], [7, 15, 23], [8, 16, 24], [1, 7, 11], [9, 17, 25], [0, 8, 12],
];

const ICOSIDODECAHEDRON_PENTAGONS: [[usize; 5]; 12] = [
    [1, 11, 27, 29, 13], [1, 7, 23, 25, 9], [0, 10, 26, 28, 12], [2, 14, 6, 10, 18],
    [2, 15, 7, 11, 19], [5, 28, 20, 21, 29], [3, 17, 9, 13, 21], [4, 22, 14, 15, 23],
    [5, 26, 18, 19, 27], [3, 16, 8, 12, 20], [0, 6, 22, 24, 8], [4, 24, 16, 17, 25],
];
