//! Archimedean solid geometry: vertex sets, face catalogs and category weights.
//!
//! Each [`SolidType`] maps to a fixed vertex enumeration ([`vertices`]) and a
//! hand-authored face catalog ([`faces`]). Faces reference vertices by position, so the
//! enumeration order of every generator is part of the contract. [`catalog`] builds a
//! [`Solid`] once per type and shares it read-only.
use std::fmt;
use std::str::FromStr;

use glam::DVec3;

use crate::error::{Error, Result};

pub mod catalog;
pub mod faces;
pub mod vertices;

/// The ten supported solids, in host type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolidType {
    #[default]
    Cuboctahedron,
    TruncatedOctahedron,
    TruncatedCube,
    Rhombicuboctahedron,
    GreatRhombicuboctahedron,
    TruncatedTetrahedron,
    Icosahedron,
    Rhombicosidodecahedron,
    TruncatedIcosahedron,
    Icosidodecahedron,
}

impl SolidType {
    pub const COUNT: usize = 10;

    pub const ALL: [SolidType; Self::COUNT] = [
        SolidType::Cuboctahedron,
        SolidType::TruncatedOctahedron,
        SolidType::TruncatedCube,
        SolidType::Rhombicuboctahedron,
        SolidType::GreatRhombicuboctahedron,
        SolidType::TruncatedTetrahedron,
        SolidType::Icosahedron,
        SolidType::Rhombicosidodecahedron,
        SolidType::TruncatedIcosahedron,
        SolidType::Icosidodecahedron,
    ];

    /// Host type code in `0..COUNT`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map an arbitrary host value into range, saturating at both ends.
    pub fn from_index_clamped(index: i64) -> Self {
        let clamped = index.clamp(0, Self::COUNT as i64 - 1) as usize;
        Self::ALL[clamped]
    }

    /// Number of vertices the generator for this solid produces.
    pub fn vertex_count(self) -> usize {
        match self {
            SolidType::Cuboctahedron => 12,
            SolidType::TruncatedOctahedron => 24,
            SolidType::TruncatedCube => 24,
            SolidType::Rhombicuboctahedron => 24,
            SolidType::GreatRhombicuboctahedron => 48,
            SolidType::TruncatedTetrahedron => 12,
            SolidType::Icosahedron => 12,
            SolidType::Rhombicosidodecahedron => 60,
            SolidType::TruncatedIcosahedron => 60,
            SolidType::Icosidodecahedron => 30,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SolidType::Cuboctahedron => "cuboctahedron",
            SolidType::TruncatedOctahedron => "truncated_octahedron",
            SolidType::TruncatedCube => "truncated_cube",
            SolidType::Rhombicuboctahedron => "rhombicuboctahedron",
            SolidType::GreatRhombicuboctahedron => "great_rhombicuboctahedron",
            SolidType::TruncatedTetrahedron => "truncated_tetrahedron",
            SolidType::Icosahedron => "icosahedron",
            SolidType::Rhombicosidodecahedron => "rhombicosidodecahedron",
            SolidType::TruncatedIcosahedron => "truncated_icosahedron",
            SolidType::Icosidodecahedron => "icosidodecahedron",
        }
    }
}

impl fmt::Display for SolidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for SolidType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::UnknownSolid(value.to_string()))
    }
}

impl FromStr for SolidType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| Error::UnknownSolid(s.to_owned()))
    }
}

/// Faces of one polygon arity together with their selection weight.
///
/// Indices are stored flat; face `i` occupies `indices[i * arity..(i + 1) * arity]`.
/// The winding is fixed so that a fan from the first vertex covers the polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceCategory {
    arity: usize,
    indices: Vec<usize>,
    weight: f64,
}

impl FaceCategory {
    pub fn new<const K: usize>(faces: &[[usize; K]], weight: f64) -> Self {
        Self {
            arity: K,
            indices: faces.iter().flatten().copied().collect(),
            weight,
        }
    }

    /// Vertices per face (3, 4, 5, 6 or 8).
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Selection probability of this category.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.indices.len() / self.arity
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn face(&self, index: usize) -> &[usize] {
        let start = index * self.arity;
        &self.indices[start..start + self.arity]
    }

    pub fn faces(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.indices.chunks_exact(self.arity)
    }
}

/// Cumulative thresholds over a solid's category weights.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    thresholds: Vec<f64>,
}

impl CategoryTable {
    pub fn from_categories(categories: &[FaceCategory]) -> Self {
        let thresholds = categories
            .iter()
            .scan(0.0, |acc, category| {
                *acc += category.weight;
                Some(*acc)
            })
            .collect();
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Index of the first category whose cumulative threshold exceeds `u`.
    ///
    /// Mass left over by rounding (or `u` past the final threshold) goes to the last category.
    pub fn search(&self, u: f64) -> usize {
        self.thresholds
            .iter()
            .position(|&threshold| u < threshold)
            .unwrap_or(self.thresholds.len().saturating_sub(1))
    }
}

/// Unit-scale geometry of one solid.
#[derive(Debug, Clone)]
pub struct Solid {
    kind: SolidType,
    vertices: Vec<DVec3>,
    categories: Vec<FaceCategory>,
    table: CategoryTable,
    max_vertex_norm: f64,
}

impl Solid {
    pub fn build(kind: SolidType) -> Self {
        Self::from_parts(kind, vertices::generate(kind), faces::categories(kind))
    }

    pub(crate) fn from_parts(
        kind: SolidType,
        vertices: Vec<DVec3>,
        categories: Vec<FaceCategory>,
    ) -> Self {
        let table = CategoryTable::from_categories(&categories);
        let max_vertex_norm = vertices.iter().map(|v| v.length()).fold(0.0, f64::max);
        Self {
            kind,
            vertices,
            categories,
            table,
            max_vertex_norm,
        }
    }

    pub fn kind(&self) -> SolidType {
        self.kind
    }

    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn categories(&self) -> &[FaceCategory] {
        &self.categories
    }

    pub fn category_table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn max_vertex_norm(&self) -> f64 {
        self.max_vertex_norm
    }

    pub fn face_count(&self) -> usize {
        self.categories.iter().map(FaceCategory::len).sum()
    }

    /// Every edge borders exactly two faces.
    pub fn edge_count(&self) -> usize {
        let sides: usize = self
            .categories
            .iter()
            .map(|category| category.len() * category.arity())
            .sum();
        sides / 2
    }

    /// Category chosen for a uniform draw `u` in [0, 1).
    pub fn category_for(&self, u: f64) -> &FaceCategory {
        &self.categories[self.table.search(u)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_round_trip_through_index() {
        for (code, kind) in SolidType::ALL.iter().enumerate() {
            assert_eq!(kind.index(), code);
            assert_eq!(SolidType::try_from(code as u8).unwrap(), *kind);
        }
        assert!(SolidType::try_from(10).is_err());
    }

    #[test]
    fn clamped_index_saturates() {
        assert_eq!(SolidType::from_index_clamped(-4), SolidType::Cuboctahedron);
        assert_eq!(SolidType::from_index_clamped(6), SolidType::Icosahedron);
        assert_eq!(
            SolidType::from_index_clamped(99),
            SolidType::Icosidodecahedron
        );
    }

    #[test]
    fn parses_names_leniently() {
        assert_eq!(
            "truncated_icosahedron".parse::<SolidType>().unwrap(),
            SolidType::TruncatedIcosahedron
        );
        assert_eq!(
            "Great Rhombicuboctahedron".parse::<SolidType>().unwrap(),
            SolidType::GreatRhombicuboctahedron
        );
        assert!(matches!(
            "dodecahedron".parse::<SolidType>(),
            Err(Error::UnknownSolid(_))
        ));
    }

    #[test]
    fn category_table_walks_thresholds() {
        let categories = vec![
            FaceCategory::new(&[[0, 1, 2, 3]], 0.42),
            FaceCategory::new(&[[0, 1, 2]], 0.58),
        ];
        let table = CategoryTable::from_categories(&categories);
        assert_eq!(table.search(0.0), 0);
        assert_eq!(table.search(0.4199), 0);
        assert_eq!(table.search(0.42), 1);
        assert_eq!(table.search(0.999_999), 1);
    }

    #[test]
    fn residual_mass_falls_to_last_category() {
        let categories = vec![
            FaceCategory::new(&[[0, 1, 2]], 0.3),
            FaceCategory::new(&[[0, 1, 2]], 0.3),
        ];
        let table = CategoryTable::from_categories(&categories);
        assert_eq!(table.search(0.75), 1);
        assert_eq!(table.search(1.5), 1);
    }

    #[test]
    fn face_category_slices_flat_indices() {
        let category = FaceCategory::new(&[[0, 4, 1, 5], [2, 7, 3, 6]], 0.5);
        assert_eq!(category.arity(), 4);
        assert_eq!(category.len(), 2);
        assert_eq!(category.face(1), &[2, 7, 3, 6]);
        assert_eq!(category.faces().count(), 2);
    }
}
