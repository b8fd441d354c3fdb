//! Position maintenance for the ranked list.
//!
//! Every operation works on an explicit sort of the collection rather than
//! trusting the stored order, clamps a requested position so a record can
//! never land in a gap more than one slot past its lower neighbor, and
//! renumbers the result back to the dense range `1..=N`.

use catalog::{MovieId, MovieRecord};
use thiserror::Error;

/// Errors from ranking operations that target a specific record
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RankError {
    #[error("No movie with id {0}")]
    UnknownId(MovieId),
}

/// Sort by position ascending, ties broken by id for a stable order.
pub fn sort_by_position(records: &mut [MovieRecord]) {
    records.sort_by(|a, b| a.position.cmp(&b.position).then(a.id.cmp(&b.id)));
}

/// Clamp a requested position against the sorted collection.
///
/// ## Algorithm
/// 1. Anything below 1 becomes 1.
/// 2. Anything past the tail becomes `last.position + 1`.
/// 3. Scan adjacent pairs; a request that falls strictly inside a gap
///    wider than one slot is pulled back to `left.position + 1`.
fn clamp_position(sorted: &[MovieRecord], desired: u32) -> u32 {
    let desired = desired.max(1);

    let Some(last) = sorted.last() else {
        return 1;
    };
    let tail = last.position.saturating_add(1);
    if desired > tail {
        return tail;
    }

    for pair in sorted.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        if left.position < desired && desired < right.position {
            if desired > left.position + 1 {
                return left.position + 1;
            }
            break;
        }
    }

    desired
}

/// Reassign positions sequentially so the collection is dense `1..=N`.
fn renumber(records: &mut [MovieRecord]) {
    for (idx, record) in records.iter_mut().enumerate() {
        record.position = idx as u32 + 1;
    }
}

/// Insert a new record at its requested rank.
///
/// `record.position` carries the desired rank. The request is clamped,
/// records at that rank or below shift down by one, and the whole
/// collection is renumbered.
///
/// # Returns
/// The updated collection and the position actually assigned.
pub fn insert(mut records: Vec<MovieRecord>, mut record: MovieRecord) -> (Vec<MovieRecord>, u32) {
    sort_by_position(&mut records);

    let target = clamp_position(&records, record.position);
    let idx = records
        .iter()
        .position(|r| r.position >= target)
        .unwrap_or(records.len());

    record.position = target;
    records.insert(idx, record);
    renumber(&mut records);

    let assigned = idx as u32 + 1;
    (records, assigned)
}

/// Move an existing record to a new rank, leaving every other record's
/// relative order unchanged.
///
/// # Returns
/// The updated collection and the position actually assigned, or
/// `RankError::UnknownId` if no record has `id`.
pub fn relocate(
    mut records: Vec<MovieRecord>,
    id: MovieId,
    new_position: u32,
) -> Result<(Vec<MovieRecord>, u32), RankError> {
    sort_by_position(&mut records);

    let idx = records
        .iter()
        .position(|r| r.id == id)
        .ok_or(RankError::UnknownId(id))?;

    let mut record = records.remove(idx);
    // Close the vacated slot first so the new rank counts the remaining
    // records, not the record's own old position.
    renumber(&mut records);

    record.position = new_position;
    Ok(insert(records, record))
}

/// Delete a record and close the gap it leaves.
///
/// # Returns
/// The renumbered collection and the removed record, or
/// `RankError::UnknownId` if no record has `id`.
pub fn remove(
    mut records: Vec<MovieRecord>,
    id: MovieId,
) -> Result<(Vec<MovieRecord>, MovieRecord), RankError> {
    sort_by_position(&mut records);

    let idx = records
        .iter()
        .position(|r| r.id == id)
        .ok_or(RankError::UnknownId(id))?;

    let removed = records.remove(idx);
    renumber(&mut records);
    Ok((records, removed))
}
