//! The object catalogue: objects indexed by type (spec.md §2.1, §4.1).
//! Under untyped mode a single anonymous type holds every object.

use crate::error::{ErrorSink, PlannerError};
use std::collections::HashMap;

/// Interned object identifier, stable for the lifetime of a [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub usize);

/// Interned type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub usize);

/// A simple bidirectional name/index table, used for both types and
/// predicates: small, append-only, and interned once at load time.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    names: Vec<String>,
    by_name: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name`, returning its existing index if already known.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&index) = self.by_name.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), index);
        index
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone)]
struct ObjectRecord {
    name: String,
    type_id: Option<TypeId>,
}

/// The anonymous type name used in untyped mode.
pub const ANONYMOUS_TYPE: &str = "object";

#[derive(Debug, Clone)]
pub struct ObjectCatalogue {
    objects: Vec<ObjectRecord>,
    by_name: HashMap<String, ObjectId>,
    by_type: HashMap<TypeId, Vec<ObjectId>>,
}

impl ObjectCatalogue {
    /// Builds the catalogue from the problem's declared object groups.
    /// `types` is the domain's type table; in untyped mode it is empty and
    /// every object is filed under the anonymous type regardless of what its
    /// AST group claims.
    pub fn build(
        groups: &[crate::ast::ObjectGroupAst],
        types: &mut SymbolTable,
        typing_enabled: bool,
        sink: &mut ErrorSink,
    ) -> Self {
        let mut objects = Vec::new();
        let mut by_name = HashMap::new();
        let mut by_type: HashMap<TypeId, Vec<ObjectId>> = HashMap::new();

        let anonymous = TypeId(types.intern(ANONYMOUS_TYPE));

        for group in groups {
            let type_id = if typing_enabled {
                match types.get(&group.type_) {
                    Some(index) => Some(TypeId(index)),
                    None => None,
                }
            } else {
                Some(anonymous)
            };

            for name in &group.parameters {
                if typing_enabled && type_id.is_none() {
                    sink(PlannerError::UnknownObjectType {
                        object: name.clone(),
                        type_: group.type_.clone(),
                    });
                }

                let id = ObjectId(objects.len());
                objects.push(ObjectRecord {
                    name: name.clone(),
                    type_id,
                });
                by_name.insert(name.clone(), id);
                if let Some(type_id) = type_id {
                    by_type.entry(type_id).or_default().push(id);
                }
            }
        }

        Self {
            objects,
            by_name,
            by_type,
        }
    }

    pub fn id(&self, name: &str) -> Option<ObjectId> {
        self.by_name.get(name).copied()
    }

    /// Resolves `name` to an [`ObjectId`], registering it as an untyped
    /// object first if it was not already declared. Real PDDL problems
    /// declare every object they reference, but state/goal literals are
    /// resolved defensively so a slightly malformed AST does not panic.
    pub fn id_or_insert(&mut self, name: &str) -> ObjectId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = ObjectId(self.objects.len());
        self.objects.push(ObjectRecord {
            name: name.to_string(),
            type_id: None,
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn name(&self, id: ObjectId) -> &str {
        &self.objects[id.0].name
    }

    pub fn type_of(&self, id: ObjectId) -> Option<TypeId> {
        self.objects[id.0].type_id
    }

    /// Objects declared of `type_id`. Empty for a type no object declares.
    pub fn of_type(&self, type_id: TypeId) -> &[ObjectId] {
        self.by_type.get(&type_id).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        (0..self.objects.len()).map(ObjectId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ObjectGroupAst;

    #[test]
    fn untyped_objects_share_anonymous_type() {
        let mut types = SymbolTable::new();
        let mut errors = vec![];
        let mut sink = |e| errors.push(e);
        let groups = vec![ObjectGroupAst {
            parameters: vec!["a".into(), "b".into()],
            type_: "ignored".into(),
        }];
        let catalogue = ObjectCatalogue::build(&groups, &mut types, false, &mut sink);
        assert!(errors.is_empty());
        assert_eq!(catalogue.len(), 2);
        let anon = TypeId(types.get(ANONYMOUS_TYPE).unwrap());
        assert_eq!(catalogue.of_type(anon).len(), 2);
    }

    #[test]
    fn unknown_type_reports_error_and_excludes_object() {
        let mut types = SymbolTable::new();
        types.intern("block");
        let mut errors = vec![];
        let mut sink = |e| errors.push(e);
        let groups = vec![ObjectGroupAst {
            parameters: vec!["x".into()],
            type_: "widget".into(),
        }];
        let catalogue = ObjectCatalogue::build(&groups, &mut types, true, &mut sink);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], PlannerError::UnknownObjectType { .. }));
        assert_eq!(catalogue.of_type(TypeId(0)).len(), 0);
    }
}
