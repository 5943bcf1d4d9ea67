use super::{DispatchError, DispatchResult, ZoneEvent};
use crate::model::assignment::AssignmentStore;
use crate::model::bounds::BoundsResolver;
use crate::model::snapshot::RegistrySnapshot;
use crate::model::zone::{Zone, ZoneId};

/// reduces zone events into assignment updates and map viewports. events are
/// handled one at a time: the store write, if any, completes before bounds are
/// computed and before the next event is accepted.
pub struct InteractionDispatcher<'a> {
    snapshot: &'a RegistrySnapshot,
    store: AssignmentStore,
    bounds_resolver: BoundsResolver,
}

impl<'a> InteractionDispatcher<'a> {
    pub fn new(
        snapshot: &'a RegistrySnapshot,
        store: AssignmentStore,
        bounds_resolver: BoundsResolver,
    ) -> InteractionDispatcher<'a> {
        InteractionDispatcher {
            snapshot,
            store,
            bounds_resolver,
        }
    }

    pub fn store(&self) -> &AssignmentStore {
        &self.store
    }

    pub fn into_store(self) -> AssignmentStore {
        self.store
    }

    /// handles one event. with no event there is nothing to focus on and the
    /// result is [`DispatchResult::NoUpdate`].
    ///
    /// an edit also re-centers the map on the edited zone.
    pub fn dispatch(
        &mut self,
        event: Option<&ZoneEvent>,
    ) -> Result<DispatchResult, DispatchError> {
        let event = match event {
            Some(event) => event,
            None => return Ok(DispatchResult::NoUpdate),
        };
        let zone_id = self.validate_zone(event.zone())?;
        log::debug!("dispatching {event:?}");
        if let ZoneEvent::EditAssignment { value, .. } = event {
            self.store.update(&zone_id, value)?;
        }
        Ok(self.focus(&zone_id))
    }

    /// focus box for a zone; [`DispatchResult::NoUpdate`] when it has no geometry.
    pub fn focus(&self, zone_id: &ZoneId) -> DispatchResult {
        let zone = Zone::Named(zone_id.clone());
        self.bounds_resolver
            .compute_bounds(&zone, &self.snapshot.geometry, &self.snapshot.centroids)
            .into()
    }

    fn validate_zone(&self, name: &str) -> Result<ZoneId, DispatchError> {
        self.snapshot
            .registry
            .get(name)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownZone(name.to_string()))
    }
}
