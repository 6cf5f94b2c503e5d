//! Reconciliation of a movie's association links against a submitted
//! selection of target identifiers.
//!
//! Given the links a movie currently holds for one association (genres or
//! people) and the identifiers selected in a form, [`reconcile_links`] removes
//! the links whose target is no longer selected and appends links for newly
//! selected targets. Links present on both sides are left exactly as they
//! are, including any metadata the store attached to them.
//!
//! An absent or empty selection leaves the collection unchanged: a form that
//! submits nothing for an association does not clear it.

use crate::catalogue_store::{MovieGenreLink, MoviePersonLink};
use std::collections::HashSet;

/// A join row from an owner (the movie) to a target entity.
pub trait AssociationLink {
    fn new_link(owner_id: i64, target_id: i64) -> Self;
    fn target_id(&self) -> i64;
}

impl AssociationLink for MovieGenreLink {
    fn new_link(owner_id: i64, target_id: i64) -> Self {
        MovieGenreLink {
            movie_id: owner_id,
            genre_id: target_id,
            linked_at: None,
        }
    }

    fn target_id(&self) -> i64 {
        self.genre_id
    }
}

impl AssociationLink for MoviePersonLink {
    fn new_link(owner_id: i64, target_id: i64) -> Self {
        MoviePersonLink {
            movie_id: owner_id,
            person_id: target_id,
            linked_at: None,
        }
    }

    fn target_id(&self) -> i64 {
        self.person_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    #[error("Malformed identifier '{0}'")]
    MalformedIdentifier(String),
}

/// Target ids added and removed by one reconciliation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkDelta {
    pub added: Vec<i64>,
    pub removed: Vec<i64>,
}

impl LinkDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Parses submitted identifiers, keeping the first occurrence of each.
pub fn parse_selected_ids(submitted: &[String]) -> Result<Vec<i64>, ReconcileError> {
    let mut seen = HashSet::with_capacity(submitted.len());
    let mut ids = Vec::with_capacity(submitted.len());
    for raw in submitted {
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ReconcileError::MalformedIdentifier(raw.clone()))?;
        if seen.insert(id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Links for a new owner. No selection means no links.
pub fn initial_links<L: AssociationLink>(
    owner_id: i64,
    submitted: Option<&[String]>,
) -> Result<Vec<L>, ReconcileError> {
    let ids = match submitted {
        Some(submitted) => parse_selected_ids(submitted)?,
        None => return Ok(vec![]),
    };
    Ok(ids
        .into_iter()
        .map(|id| L::new_link(owner_id, id))
        .collect())
}

/// Brings `links` in line with the submitted selection and returns what
/// changed.
///
/// Every identifier is parsed before `links` is touched, so a malformed
/// submission leaves the collection as it was.
pub fn reconcile_links<L: AssociationLink>(
    links: &mut Vec<L>,
    owner_id: i64,
    submitted: Option<&[String]>,
) -> Result<LinkDelta, ReconcileError> {
    let submitted = match submitted {
        Some(submitted) if !submitted.is_empty() => submitted,
        _ => return Ok(LinkDelta::default()),
    };

    let selected = parse_selected_ids(submitted)?;
    let selected_set: HashSet<i64> = selected.iter().copied().collect();
    let current: HashSet<i64> = links.iter().map(L::target_id).collect();

    let added: Vec<i64> = selected
        .into_iter()
        .filter(|id| !current.contains(id))
        .collect();
    let removed: Vec<i64> = links
        .iter()
        .map(L::target_id)
        .filter(|id| !selected_set.contains(id))
        .collect();

    links.retain(|link| selected_set.contains(&link.target_id()));
    links.extend(added.iter().map(|&id| L::new_link(owner_id, id)));

    Ok(LinkDelta { added, removed })
}
