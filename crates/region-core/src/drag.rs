use crate::coords::SurfaceTransform;
use crate::handle::HandleType;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(HandleType),
}

/// Owns the single drag session. Release is expected to be fed from a
/// document-wide source so a pointer leaving the surface still ends the drag.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn active(&self) -> Option<HandleType> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(kind) => Some(kind),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    /// Last writer wins: a second press while dragging switches handles.
    pub fn begin(&mut self, kind: HandleType) {
        if let DragState::Dragging(previous) = self.state {
            if previous != kind {
                log::debug!("[drag] {:?} replaces {:?}", kind, previous);
            }
        }
        self.state = DragState::Dragging(kind);
        log::info!("[drag] begin {:?}", kind);
    }

    /// End the session, returning the handle that was active. Releasing while
    /// idle is a no-op.
    pub fn release(&mut self) -> Option<HandleType> {
        let released = self.active();
        self.state = DragState::Idle;
        released
    }

    /// Convert a client-space pointer position into surface pixels for the
    /// active handle. The transform is only queried while dragging.
    pub fn route_move(
        &self,
        client: DVec2,
        transform: impl FnOnce() -> SurfaceTransform,
    ) -> Option<(HandleType, DVec2)> {
        let kind = self.active()?;
        match transform().client_to_local(client) {
            Ok(local) => Some((kind, local)),
            Err(e) => {
                log::warn!("[drag] ignoring move for {:?}: {}", kind, e);
                None
            }
        }
    }
}
