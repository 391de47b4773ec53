use crate::domain::topology::declaration::TopologyDeclaration;
use crate::domain::topology::point::Point;
use crate::foundation::WiringError;
use std::collections::HashSet;

/// Check a declaration for structural defects before any resolver I/O:
/// duplicate node points, duplicate ordered link pairs, and links that
/// reference a point missing from `nodes`.
pub fn validate_declaration<N, L>(declaration: &TopologyDeclaration<N, L>) -> Result<(), WiringError> {
    let mut declared: HashSet<&Point> = HashSet::with_capacity(declaration.nodes.len());
    for node in &declaration.nodes {
        if !declared.insert(&node.point) {
            return Err(WiringError::DuplicateNode { point: node.point.to_string() });
        }
    }

    let mut seen_pairs: HashSet<(&Point, &Point)> = HashSet::with_capacity(declaration.links.len());
    for link in &declaration.links {
        if !seen_pairs.insert((&link.from, &link.to)) {
            return Err(WiringError::DuplicateLink { from: link.from.to_string(), to: link.to.to_string() });
        }
        for endpoint in [&link.from, &link.to] {
            if !declared.contains(endpoint) {
                return Err(WiringError::DanglingLink {
                    from: link.from.to_string(),
                    to: link.to.to_string(),
                    missing: endpoint.to_string(),
                });
            }
        }
    }
    Ok(())
}
