//! Closure helpers shared by the class, property and data models
//!
//! Every traversal threads an explicit visited set, so cyclic subsumption,
//! equivalence or sameAs graphs terminate after one visit per resource.

use std::collections::{BTreeSet, HashSet};

use ontograph_domain::{Fingerprint, Taxonomy};

/// Transitive closure of a symmetric relation, excluding the start
///
/// Edges are followed in both directions so the closure survives a purge of
/// the inferred mirror entries.
pub(crate) fn equivalence_closure(equivalence: &Taxonomy, start: Fingerprint) -> BTreeSet<Fingerprint> {
    let mut visited = HashSet::new();
    let mut result = BTreeSet::new();
    let mut pending = vec![start];

    while let Some(current) = pending.pop() {
        if !visited.insert(current) {
            continue;
        }
        let neighbours = equivalence
            .by_subject(current)
            .objects()
            .chain(equivalence.by_object(current).subjects());
        for neighbour in neighbours {
            if result.insert(neighbour) {
                pending.push(neighbour);
            }
        }
    }

    result.remove(&start);
    result
}

/// Objects reachable from `start` through entries with `predicate`
pub(crate) fn transitive_objects(
    taxonomy: &Taxonomy,
    start: Fingerprint,
    predicate: Fingerprint,
) -> BTreeSet<Fingerprint> {
    let mut visited = HashSet::new();
    let mut result = BTreeSet::new();
    walk_objects(taxonomy, start, predicate, &mut visited, &mut result);
    result
}

fn walk_objects(
    taxonomy: &Taxonomy,
    current: Fingerprint,
    predicate: Fingerprint,
    visited: &mut HashSet<Fingerprint>,
    result: &mut BTreeSet<Fingerprint>,
) {
    if !visited.insert(current) {
        return;
    }
    for object in taxonomy.by_subject(current).with_predicate(predicate).objects() {
        result.insert(object);
        walk_objects(taxonomy, object, predicate, visited, result);
    }
}

/// Direction of a subsumption traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Towards the subjects of `x sub c` (descendants)
    Down,
    /// Towards the objects of `c sub x` (ancestors)
    Up,
}

/// A subsumption taxonomy paired with its equivalence taxonomy
///
/// Used for both `subClassOf`/`equivalentClass` and
/// `subPropertyOf`/`equivalentProperty`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hierarchy<'a> {
    subsumption: &'a Taxonomy,
    equivalence: &'a Taxonomy,
}

impl<'a> Hierarchy<'a> {
    pub(crate) fn new(subsumption: &'a Taxonomy, equivalence: &'a Taxonomy) -> Self {
        Self {
            subsumption,
            equivalence,
        }
    }

    /// Equivalence closure of `c`, excluding `c`
    pub(crate) fn equivalents(&self, c: Fingerprint) -> BTreeSet<Fingerprint> {
        equivalence_closure(self.equivalence, c)
    }

    /// Every resource subsumed by `c` or by one of its equivalents
    pub(crate) fn descendants(&self, c: Fingerprint) -> BTreeSet<Fingerprint> {
        self.closure(c, Direction::Down)
    }

    /// Every resource subsuming `c` or one of its equivalents
    pub(crate) fn ancestors(&self, c: Fingerprint) -> BTreeSet<Fingerprint> {
        self.closure(c, Direction::Up)
    }

    fn closure(&self, c: Fingerprint, direction: Direction) -> BTreeSet<Fingerprint> {
        let mut result = self.closure_internal(c, direction, &mut HashSet::new());
        for equivalent in self.equivalents(c) {
            result.extend(self.closure_internal(equivalent, direction, &mut HashSet::new()));
        }
        result
    }

    fn closure_internal(
        &self,
        c: Fingerprint,
        direction: Direction,
        visited: &mut HashSet<Fingerprint>,
    ) -> BTreeSet<Fingerprint> {
        if !visited.insert(c) {
            return BTreeSet::new();
        }

        // Direct subsumption, followed recursively
        let mut direct = BTreeSet::new();
        for next in self.step(c, direction) {
            direct.insert(next);
            direct.extend(self.closure_internal(next, direction, visited));
        }

        // Equivalents of everything found, and what they subsume in turn
        let mut fanout = BTreeSet::new();
        for found in &direct {
            for equivalent in self.equivalents(*found) {
                fanout.insert(equivalent);
                fanout.extend(self.closure_internal(equivalent, direction, visited));
            }
        }

        direct.extend(fanout);
        direct
    }

    fn step(&self, c: Fingerprint, direction: Direction) -> Vec<Fingerprint> {
        match direction {
            Direction::Down => self.subsumption.by_object(c).subjects().collect(),
            Direction::Up => self.subsumption.by_subject(c).objects().collect(),
        }
    }
}
