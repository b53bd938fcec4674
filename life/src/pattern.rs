//! Named multi-cell patterns and the catalog they are loaded into.
//!
//! The catalog source is a JSON document mapping group name → pattern name →
//! list of `"x,y"` offset strings. It is parsed once at startup and is
//! immutable afterwards; rotation produces a new [`Pattern`] value rather
//! than mutating the stored entry, so holders of a selected pattern never
//! alias the catalog.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::{CatalogError, SelectError};

/// Key of the built-in single-cell pattern, kept outside any group.
pub const POINTER_KEY: &str = "pointer";

/// Rotation direction for the rotate keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// A named, ordered set of cell offsets relative to an anchor cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub group: String,
    offsets: Vec<(i32, i32)>,
}

impl Pattern {
    /// Builds a pattern from explicit offsets. Panics on an empty offset
    /// list: a pattern always stamps at least one cell.
    pub fn new(name: impl Into<String>, group: impl Into<String>, offsets: Vec<(i32, i32)>) -> Self {
        assert!(!offsets.is_empty(), "pattern must contain at least one offset");
        Self {
            name: name.into(),
            group: group.into(),
            offsets,
        }
    }

    /// The built-in default: a single cell under the pointer.
    pub fn pointer() -> Self {
        Self::new("Pointer", "", vec![(0, 0)])
    }

    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// True for patterns of exactly one cell, which are never rotated.
    pub fn is_single(&self) -> bool {
        self.offsets.len() == 1
    }

    /// Returns this pattern rotated 90° around its bounding extent.
    ///
    /// Single-cell patterns come back unchanged. Four successive rotations
    /// in the same direction restore the original offsets exactly.
    pub fn rotated(&self, direction: Rotation) -> Self {
        if self.is_single() {
            return self.clone();
        }
        let max_x = self.offsets.iter().fold(0, |m, &(x, _)| m.max(x));
        let max_y = self.offsets.iter().fold(0, |m, &(_, y)| m.max(y));
        let offsets = self
            .offsets
            .iter()
            .map(|&(x, y)| match direction {
                Rotation::CounterClockwise => (y, max_x - x),
                Rotation::Clockwise => (max_y - y, x),
            })
            .collect();
        Self {
            name: self.name.clone(),
            group: self.group.clone(),
            offsets,
        }
    }
}

/// One selector group: display name plus the keys of its member patterns.
#[derive(Debug, Clone)]
pub struct CatalogGroup {
    pub id: String,
    pub name: String,
    /// `(catalog key, display name)` pairs, sorted by name.
    pub entries: Vec<(String, String)>,
}

/// The raw document shape; `BTreeMap` keeps listing order deterministic.
type CatalogDoc = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// All known patterns, keyed by lowercased `group/name`, plus the pointer.
#[derive(Debug)]
pub struct PatternCatalog {
    patterns: HashMap<String, Pattern>,
    groups: Vec<CatalogGroup>,
}

impl PatternCatalog {
    /// Parses the catalog document. Any unparsable coordinate token fails
    /// the whole load.
    pub fn load(json: &str) -> Result<Self, CatalogError> {
        let doc = CatalogDoc::deserialize(&mut serde_json::Deserializer::from_str(json))?;

        let mut patterns = HashMap::new();
        patterns.insert(POINTER_KEY.to_string(), Pattern::pointer());

        let mut groups = Vec::new();
        for (group_name, entries) in &doc {
            let group_id = group_name.to_lowercase();
            let mut listing = Vec::new();
            for (pattern_name, tokens) in entries {
                let key = format!("{}/{}", group_id, pattern_name.to_lowercase());
                let mut offsets = Vec::with_capacity(tokens.len());
                for token in tokens {
                    offsets.push(parse_offset(token).ok_or_else(|| {
                        CatalogError::BadCoordinate {
                            group: group_name.clone(),
                            name: pattern_name.clone(),
                            token: token.clone(),
                        }
                    })?);
                }
                if offsets.is_empty() {
                    return Err(CatalogError::BadCoordinate {
                        group: group_name.clone(),
                        name: pattern_name.clone(),
                        token: String::new(),
                    });
                }
                listing.push((key.clone(), pattern_name.clone()));
                patterns.insert(key, Pattern::new(pattern_name.clone(), group_name.clone(), offsets));
            }
            groups.push(CatalogGroup {
                id: group_id,
                name: group_name.clone(),
                entries: listing,
            });
        }

        log::debug!("pattern catalog loaded: {} patterns", patterns.len());
        Ok(Self { patterns, groups })
    }

    /// An empty catalog holding only the pointer pattern.
    pub fn pointer_only() -> Self {
        let mut patterns = HashMap::new();
        patterns.insert(POINTER_KEY.to_string(), Pattern::pointer());
        Self {
            patterns,
            groups: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Result<&Pattern, SelectError> {
        self.patterns
            .get(key)
            .ok_or_else(|| SelectError::PatternNotFound(key.to_string()))
    }

    /// Groups in sorted order, for building a selector UI.
    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }
}

fn parse_offset(token: &str) -> Option<(i32, i32)> {
    let (x, y) = token.split_once(',')?;
    Some((x.parse().ok()?, y.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "Ships": {
            "Glider": ["0,1", "1,2", "2,0", "2,1", "2,2"]
        },
        "Oscillators": {
            "Blinker": ["0,0", "1,0", "2,0"]
        }
    }"#;

    fn sorted(offsets: &[(i32, i32)]) -> Vec<(i32, i32)> {
        let mut v = offsets.to_vec();
        v.sort();
        v
    }

    #[test]
    fn load_and_lookup() {
        let catalog = PatternCatalog::load(DOC).unwrap();
        let glider = catalog.get("ships/glider").unwrap();
        assert_eq!("Glider", glider.name);
        assert_eq!(5, glider.offsets().len());

        let pointer = catalog.get(POINTER_KEY).unwrap();
        assert_eq!(&[(0, 0)], pointer.offsets());

        assert!(matches!(
            catalog.get("ships/unknown"),
            Err(SelectError::PatternNotFound(_))
        ));
    }

    #[test]
    fn listing_is_deterministic() {
        let catalog = PatternCatalog::load(DOC).unwrap();
        let ships = catalog
            .groups()
            .iter()
            .find(|g| g.id == "ships")
            .unwrap();
        assert_eq!(vec![("ships/glider".to_string(), "Glider".to_string())], ships.entries);
    }

    #[test]
    fn bad_coordinate_fails_whole_load() {
        let doc = r#"{"G": {"P": ["0,0", "nope"]}}"#;
        assert!(matches!(
            PatternCatalog::load(doc),
            Err(CatalogError::BadCoordinate { .. })
        ));
    }

    #[test]
    fn negative_offsets_parse() {
        let doc = r#"{"G": {"P": ["-1,0", "0,-2"]}}"#;
        let catalog = PatternCatalog::load(doc).unwrap();
        assert_eq!(&[(-1, 0), (0, -2)], catalog.get("g/p").unwrap().offsets());
    }

    #[test]
    fn clockwise_rotation_example() {
        let p = Pattern::new("Duo", "", vec![(0, 0), (1, 0)]);
        let r = p.rotated(Rotation::Clockwise);
        assert_eq!(&[(0, 0), (0, 1)], r.offsets());
    }

    #[test]
    fn rotation_is_a_four_cycle() {
        let glider = Pattern::new("Glider", "", vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        for direction in [Rotation::Clockwise, Rotation::CounterClockwise] {
            let mut p = glider.clone();
            for _ in 0..4 {
                p = p.rotated(direction);
            }
            assert_eq!(sorted(glider.offsets()), sorted(p.offsets()));
        }
    }

    #[test]
    fn single_offset_pattern_never_rotates() {
        let p = Pattern::pointer();
        assert_eq!(p.offsets(), p.rotated(Rotation::Clockwise).offsets());
        assert_eq!(p.offsets(), p.rotated(Rotation::CounterClockwise).offsets());
    }

    #[test]
    fn rotation_does_not_touch_the_original() {
        let p = Pattern::new("Duo", "", vec![(0, 0), (1, 0)]);
        let _ = p.rotated(Rotation::Clockwise);
        assert_eq!(&[(0, 0), (1, 0)], p.offsets());
    }
}
