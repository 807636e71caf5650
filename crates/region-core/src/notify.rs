use crate::handle::HandleType;
use crate::uv::NormalizedPoint;
use serde::{Deserialize, Serialize};

/// Single-corner update sent to the host while the user drags.
/// Serializes as `{ "x": .., "y": .., "type": <corner index> }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UvUpdate {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: HandleType,
}

impl UvUpdate {
    pub fn new(point: NormalizedPoint, kind: HandleType) -> Self {
        Self {
            x: point.x,
            y: point.y,
            kind,
        }
    }

    pub fn point(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x, self.y)
    }
}

/// Host-facing egress for user-driven corner moves.
pub trait NotificationSink {
    fn notify_uv(&mut self, update: UvUpdate);
}

/// Buffering sink: updates queue up until the owner drains them.
impl NotificationSink for Vec<UvUpdate> {
    fn notify_uv(&mut self, update: UvUpdate) {
        self.push(update);
    }
}
