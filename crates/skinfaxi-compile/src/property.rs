//! Shared state between compiler passes.

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;

/// The set of gates a target natively supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasisGates {
    gates: Vec<String>,
}

impl BasisGates {
    /// Create a basis gate set from gate names.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            gates: gates.into_iter().map(Into::into).collect(),
        }
    }

    /// A universal basis covering every standard gate, including the
    /// multi-controlled Z and the measure/reset/barrier pseudo-gates.
    pub fn universal() -> Self {
        Self::new([
            "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "rx", "ry", "rz", "p", "cx", "cy",
            "cz", "cp", "swap", "ccx", "mcz", "measure", "reset", "barrier",
        ])
    }

    /// Check whether a gate name is in the basis.
    pub fn contains(&self, name: &str) -> bool {
        self.gates.iter().any(|g| g == name)
    }

    /// The gate names in this basis.
    pub fn gates(&self) -> &[String] {
        &self.gates
    }
}

/// Properties shared between passes in a pipeline.
///
/// Well-known properties get named fields; anything else goes through the
/// typed key-value store via [`insert`](Self::insert) / [`get`](Self::get).
#[derive(Default)]
pub struct PropertySet {
    /// Target basis gates, if constrained.
    pub basis_gates: Option<BasisGates>,
    /// Typed storage for pass-specific properties.
    custom: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl PropertySet {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a property, replacing any existing value of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.custom.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Get a property by type.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.custom
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref())
    }

    /// Get a mutable reference to a property by type.
    pub fn get_mut<T: Any + Send + Sync>(&mut self) -> Option<&mut T> {
        self.custom
            .get_mut(&TypeId::of::<T>())
            .and_then(|v| v.downcast_mut())
    }

    /// Remove a property by type, returning it if present.
    pub fn remove<T: Any + Send + Sync>(&mut self) -> Option<T> {
        self.custom
            .remove(&TypeId::of::<T>())
            .and_then(|v| v.downcast().ok())
            .map(|b| *b)
    }
}
