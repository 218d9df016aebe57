use crate::{
    err,
    error::ErrorTree,
    node::{FieldType, TableMeta},
    registry::Registry,
    visit::{Visitor, walk_table},
};

///
/// ReferenceEdge
/// Record occurrence captured during descriptor traversal.
///

struct ReferenceEdge {
    route: String,
    target: String,
}

/// Closed-world reference check: every record target named anywhere in the
/// registry must itself be registered. Record descriptors hold names, so no
/// cross-table recursion happens here; each table's descriptor tree is
/// walked exactly once and targets are checked by lookup.
pub(crate) fn validate_references(registry: &Registry, errs: &mut ErrorTree) {
    // Phase 1: collect reference edges (and malformed composite shapes).
    let mut edges = Vec::new();
    for (_, table) in registry.tables() {
        collect_table_references(table, &mut edges, errs);
    }

    // Phase 2: resolve each edge against the registry.
    for edge in edges {
        if !registry.contains(&edge.target) {
            err!(
                errs => &edge.route,
                "dangling reference to unknown table '{}'",
                edge.target
            );
        }
    }
}

fn collect_table_references(
    table: &TableMeta,
    edges: &mut Vec<ReferenceEdge>,
    errs: &mut ErrorTree,
) {
    let mut visitor = ReferenceVisitor { edges, errs };
    walk_table(&mut visitor, table);
}

struct ReferenceVisitor<'a> {
    edges: &'a mut Vec<ReferenceEdge>,
    errs: &'a mut ErrorTree,
}

impl Visitor for ReferenceVisitor<'_> {
    fn visit_type(&mut self, route: &str, ty: &FieldType) {
        match ty {
            FieldType::Record { tables } => {
                if tables.is_empty() {
                    self.errs
                        .add_at(route, "record descriptor names no candidate tables");
                }

                for target in tables {
                    self.edges.push(ReferenceEdge {
                        route: route.to_string(),
                        target: target.clone(),
                    });
                }
            }
            FieldType::Union { variants } if variants.is_empty() => {
                self.errs.add_at(route, "union descriptor has no variants");
            }
            FieldType::StringEnum { variants } if variants.is_empty() => {
                self.errs
                    .add_at(route, "string enum descriptor has no variants");
            }
            FieldType::NumberEnum { variants } if variants.is_empty() => {
                self.errs
                    .add_at(route, "number enum descriptor has no variants");
            }
            _ => {}
        }
    }
}
