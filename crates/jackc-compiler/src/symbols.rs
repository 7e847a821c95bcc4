//! Symbol table with nested lexical scopes.
//!
//! Two scope tiers: the *unit* tier holds `Static` and `Field` symbols and
//! lives for the whole compiled unit; the *subroutine* tier holds `Argument`
//! and `Local` symbols and is reset at the start of every subroutine.
//! Resolution checks the subroutine tier first, so subroutine-local
//! declarations shadow unit-level ones of the same name.

use jackc_core::ErrorKind;
use rustc_hash::FxHashMap;

use crate::vm::Segment;

/// Storage class of a declared identifier.
///
/// The storage class is the sole determinant of which VM memory segment a
/// push/pop of the symbol targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    Static,
    Field,
    Argument,
    Local,
}

impl StorageClass {
    /// The VM segment symbols of this class occupy.
    pub fn segment(self) -> Segment {
        match self {
            StorageClass::Static => Segment::Static,
            StorageClass::Field => Segment::This,
            StorageClass::Argument => Segment::Argument,
            StorageClass::Local => Segment::Local,
        }
    }

    /// Whether symbols of this class live in the unit-wide scope tier.
    fn is_unit_tier(self) -> bool {
        matches!(self, StorageClass::Static | StorageClass::Field)
    }
}

/// A declared identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// Declared type text (`int`, `boolean`, or a unit name). Used to form
    /// qualified call targets for calls through object references.
    pub declared_type: String,
    pub class: StorageClass,
    /// 0-based position among all symbols of the same storage class in this
    /// symbol's scope. Stable for the symbol's lifetime.
    pub slot: u16,
}

impl Symbol {
    /// The segment a push/pop of this symbol targets.
    pub fn segment(&self) -> Segment {
        self.class.segment()
    }
}

/// Tracks declared identifiers across the two scope tiers.
#[derive(Debug, Default)]
pub struct SymbolTable {
    unit: FxHashMap<String, Symbol>,
    subroutine: FxHashMap<String, Symbol>,
    next_static: u16,
    next_field: u16,
    next_argument: u16,
    next_local: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new identifier, assigning the next free slot for its
    /// storage class.
    ///
    /// Fails with `DuplicateDeclaration` when the name already exists in the
    /// target scope tier.
    pub fn declare(
        &mut self,
        name: &str,
        declared_type: &str,
        class: StorageClass,
    ) -> Result<u16, ErrorKind> {
        if self.tier(class).contains_key(name) {
            return Err(ErrorKind::DuplicateDeclaration { name: name.into() });
        }

        let slot = self.next_slot(class);
        let symbol = Symbol {
            name: name.to_owned(),
            declared_type: declared_type.to_owned(),
            class,
            slot,
        };
        self.tier_mut(class).insert(name.to_owned(), symbol);

        Ok(slot)
    }

    /// Resolve a name: subroutine tier first, then unit tier.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.subroutine.get(name).or_else(|| self.unit.get(name))
    }

    /// Clear the subroutine tier and zero its slot counters.
    ///
    /// Must be called once before each subroutine's parameters are declared.
    pub fn begin_subroutine(&mut self) {
        self.subroutine.clear();
        self.next_argument = 0;
        self.next_local = 0;
    }

    /// Number of fields declared so far in the unit.
    pub fn field_count(&self) -> u16 {
        self.next_field
    }

    /// Number of locals declared so far in the current subroutine.
    pub fn local_count(&self) -> u16 {
        self.next_local
    }

    fn tier(&self, class: StorageClass) -> &FxHashMap<String, Symbol> {
        if class.is_unit_tier() {
            &self.unit
        } else {
            &self.subroutine
        }
    }

    fn tier_mut(&mut self, class: StorageClass) -> &mut FxHashMap<String, Symbol> {
        if class.is_unit_tier() {
            &mut self.unit
        } else {
            &mut self.subroutine
        }
    }

    fn next_slot(&mut self, class: StorageClass) -> u16 {
        let counter = match class {
            StorageClass::Static => &mut self.next_static,
            StorageClass::Field => &mut self.next_field,
            StorageClass::Argument => &mut self.next_argument,
            StorageClass::Local => &mut self.next_local,
        };
        let slot = *counter;
        *counter += 1;
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_consecutive_per_class() {
        let mut table = SymbolTable::new();
        assert_eq!(table.declare("a", "int", StorageClass::Field).unwrap(), 0);
        assert_eq!(table.declare("b", "int", StorageClass::Field).unwrap(), 1);
        // A different storage class has its own counter.
        assert_eq!(table.declare("c", "int", StorageClass::Static).unwrap(), 0);
        assert_eq!(table.declare("d", "int", StorageClass::Field).unwrap(), 2);
    }

    #[test]
    fn duplicate_in_same_tier_fails() {
        let mut table = SymbolTable::new();
        table.declare("x", "int", StorageClass::Field).unwrap();
        let err = table.declare("x", "int", StorageClass::Static).unwrap_err();
        assert_eq!(err, ErrorKind::DuplicateDeclaration { name: "x".into() });
    }

    #[test]
    fn duplicate_local_fails() {
        let mut table = SymbolTable::new();
        table.declare("i", "int", StorageClass::Local).unwrap();
        assert!(table.declare("i", "char", StorageClass::Local).is_err());
    }

    #[test]
    fn subroutine_shadows_unit() {
        let mut table = SymbolTable::new();
        table.declare("x", "int", StorageClass::Field).unwrap();
        table.declare("x", "boolean", StorageClass::Local).unwrap();

        let symbol = table.resolve("x").unwrap();
        assert_eq!(symbol.class, StorageClass::Local);
        assert_eq!(symbol.declared_type, "boolean");
    }

    #[test]
    fn begin_subroutine_resets_only_subroutine_tier() {
        let mut table = SymbolTable::new();
        table.declare("f", "int", StorageClass::Field).unwrap();
        table.declare("a", "int", StorageClass::Argument).unwrap();
        table.declare("v", "int", StorageClass::Local).unwrap();

        table.begin_subroutine();

        assert!(table.resolve("a").is_none());
        assert!(table.resolve("v").is_none());
        assert!(table.resolve("f").is_some());
        // Slot counters start over.
        assert_eq!(table.declare("b", "int", StorageClass::Argument).unwrap(), 0);
        assert_eq!(table.declare("w", "int", StorageClass::Local).unwrap(), 0);
    }

    #[test]
    fn segment_mapping_is_fixed() {
        assert_eq!(StorageClass::Local.segment(), Segment::Local);
        assert_eq!(StorageClass::Argument.segment(), Segment::Argument);
        assert_eq!(StorageClass::Field.segment(), Segment::This);
        assert_eq!(StorageClass::Static.segment(), Segment::Static);
    }

    #[test]
    fn field_and_local_counts() {
        let mut table = SymbolTable::new();
        table.declare("a", "int", StorageClass::Field).unwrap();
        table.declare("b", "int", StorageClass::Field).unwrap();
        table.declare("i", "int", StorageClass::Local).unwrap();
        assert_eq!(table.field_count(), 2);
        assert_eq!(table.local_count(), 1);
    }
}
