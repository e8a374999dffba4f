//! Process-unique ids for mounted overlay surfaces.

use std::{cell::Cell, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of one mounted overlay surface (one portal container).
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay-{}", self.0)
    }
}

thread_local! {
    static NEXT_SURFACE_ID: Cell<u64> = const { Cell::new(1) };
}

/// Allocates the next surface id for the current UI thread.
pub fn next_surface_id() -> SurfaceId {
    NEXT_SURFACE_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        SurfaceId(id)
    })
}
