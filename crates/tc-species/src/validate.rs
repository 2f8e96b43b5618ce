//! Species database validation logic.

use std::collections::HashMap;

use tc_core::SpeciesId;

use crate::database::SpeciesDatabase;
use crate::error::{SpeciesError, SpeciesResult};
use crate::species::Species;

/// Map names to IDs, rejecting duplicates.
pub(crate) fn index_names(species: &[Species]) -> SpeciesResult<HashMap<String, SpeciesId>> {
    let mut by_name = HashMap::with_capacity(species.len());
    for (i, s) in species.iter().enumerate() {
        let id = SpeciesId::from_index(i as u32);
        if by_name.insert(s.name().to_string(), id).is_some() {
            return Err(SpeciesError::DuplicateSpecies {
                name: s.name().to_string(),
            });
        }
    }
    Ok(by_name)
}

/// Every non-empty formation reaction must produce the species that owns it.
pub(crate) fn validate_products(species: &[Species]) -> SpeciesResult<()> {
    for s in species {
        let reaction = s.reaction();
        if !reaction.is_empty() && reaction.product() != s.name() {
            return Err(SpeciesError::ProductMismatch {
                species: s.name().to_string(),
                product: reaction.product().to_string(),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Depth-first walk of the reactant graph below `root`, failing on the first cycle.
pub(crate) fn ensure_acyclic(db: &SpeciesDatabase, root: SpeciesId) -> SpeciesResult<()> {
    let mut marks = vec![Mark::Unvisited; db.len()];
    let mut path = Vec::new();
    visit(db, root, &mut marks, &mut path)
}

fn visit(
    db: &SpeciesDatabase,
    id: SpeciesId,
    marks: &mut [Mark],
    path: &mut Vec<SpeciesId>,
) -> SpeciesResult<()> {
    match marks[id.idx()] {
        Mark::Done => return Ok(()),
        Mark::OnPath => return Err(cycle_error(db, path, id)),
        Mark::Unvisited => {}
    }
    marks[id.idx()] = Mark::OnPath;
    path.push(id);
    for &(reactant, _) in db.reactants_of(id) {
        visit(db, reactant, marks, path)?;
    }
    path.pop();
    marks[id.idx()] = Mark::Done;
    Ok(())
}

/// Build the error for a cycle closing at `id`, listing the loop from its
/// first occurrence on `path` back to `id`.
pub(crate) fn cycle_error(db: &SpeciesDatabase, path: &[SpeciesId], id: SpeciesId) -> SpeciesError {
    let name = |sid: SpeciesId| {
        db.get(sid)
            .map(|s| s.name().to_string())
            .unwrap_or_else(|| sid.to_string())
    };
    let start = path.iter().position(|&p| p == id).unwrap_or(0);
    let mut names: Vec<String> = path[start..].iter().map(|&p| name(p)).collect();
    names.push(name(id));
    SpeciesError::CyclicReaction {
        species: name(id),
        path: names,
    }
}
