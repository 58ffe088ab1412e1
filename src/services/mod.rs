//! Business logic services

pub mod catalog;
pub mod circulation;
pub mod fines;
pub mod members;

use crate::state::LibraryState;

/// Container for all desk services.
///
/// One `Desk` is one library: the services share a single state handle and
/// together expose every operation of the circulation desk. The presentation
/// shell holds a `Desk` and nothing else.
#[derive(Clone)]
pub struct Desk {
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub circulation: circulation::CirculationService,
    pub fines: fines::FinesService,
}

impl Desk {
    /// Create an empty desk with all services over a fresh state handle.
    pub fn new() -> Self {
        let state = LibraryState::handle();
        Self {
            catalog: catalog::CatalogService::new(state.clone()),
            members: members::MembersService::new(state.clone()),
            circulation: circulation::CirculationService::new(state.clone()),
            fines: fines::FinesService::new(state),
        }
    }
}

impl Default for Desk {
    fn default() -> Self {
        Self::new()
    }
}
