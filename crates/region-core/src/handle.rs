use crate::coords::{to_normalized, ScreenDimensions};
use crate::drag::DragController;
use crate::error::RegionError;
use crate::notify::{NotificationSink, UvUpdate};
use glam::DVec2;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the four rectangle corners. Serialized as its index (0..=3),
/// which is what the host expects in the `type` field of a UV update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleType {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

// Element identifier <-> corner, bijective.
const HANDLE_IDS: [(&str, HandleType); 4] = [
    ("tl", HandleType::TopLeft),
    ("tr", HandleType::TopRight),
    ("bl", HandleType::BottomLeft),
    ("br", HandleType::BottomRight),
];

impl HandleType {
    pub const ALL: [HandleType; 4] = [
        HandleType::TopLeft,
        HandleType::TopRight,
        HandleType::BottomLeft,
        HandleType::BottomRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            HandleType::TopLeft => 0,
            HandleType::TopRight => 1,
            HandleType::BottomLeft => 2,
            HandleType::BottomRight => 3,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn id(self) -> &'static str {
        HANDLE_IDS[self.index()].0
    }

    pub fn from_id(id: &str) -> Result<Self, RegionError> {
        HANDLE_IDS
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| RegionError::UnknownHandle(id.to_string()))
    }

    /// Pick this corner out of the pixel corners `a` (top-left) and `b` (bottom-right).
    #[inline]
    pub fn corner(self, a: DVec2, b: DVec2) -> DVec2 {
        match self {
            HandleType::TopLeft => DVec2::new(a.x, a.y),
            HandleType::TopRight => DVec2::new(b.x, a.y),
            HandleType::BottomLeft => DVec2::new(a.x, b.y),
            HandleType::BottomRight => DVec2::new(b.x, b.y),
        }
    }
}

impl FromStr for HandleType {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for HandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for HandleType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index() as u8)
    }
}

impl<'de> Deserialize<'de> for HandleType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u8::deserialize(deserializer)?;
        Self::from_index(index as usize)
            .ok_or_else(|| de::Error::custom(format!("unknown handle index {index}")))
    }
}

/// A draggable corner control. Lives for the whole widget lifetime; only its
/// position changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Handle {
    kind: HandleType,
    position: DVec2,
}

impl Handle {
    pub fn new(kind: HandleType) -> Self {
        Self {
            kind,
            position: DVec2::ZERO,
        }
    }

    /// Build from an element identifier, rejecting anything outside tl/tr/bl/br.
    pub fn from_id(id: &str) -> Result<Self, RegionError> {
        HandleType::from_id(id).map(Self::new)
    }

    #[inline]
    pub fn kind(&self) -> HandleType {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Clamp `point` into the screen and move there. With a sink (user drag)
    /// the normalized position is pushed to it; without one (programmatic
    /// sync) nothing leaves the widget. Returns the applied position.
    pub fn set_position(
        &mut self,
        point: DVec2,
        screen: ScreenDimensions,
        sink: Option<&mut dyn NotificationSink>,
    ) -> DVec2 {
        self.position = screen.clamp(point);
        if let Some(sink) = sink {
            match to_normalized(self.position, screen) {
                Ok(uv) => sink.notify_uv(UvUpdate::new(uv, self.kind)),
                Err(e) => log::warn!("[handle] {:?} moved but not reported: {}", self.kind, e),
            }
        }
        self.position
    }

    pub fn begin_drag(&self, controller: &mut DragController) {
        controller.begin(self.kind);
    }

    pub fn end_drag(&self) {
        log::debug!("[drag] dropped {:?}", self.kind);
    }
}

/// The fixed set of four handles, indexed by corner.
#[derive(Clone, Debug, PartialEq)]
pub struct HandleSet([Handle; 4]);

impl Default for HandleSet {
    fn default() -> Self {
        Self(HandleType::ALL.map(Handle::new))
    }
}

impl HandleSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, kind: HandleType) -> &Handle {
        &self.0[kind.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, kind: HandleType) -> &mut Handle {
        &mut self.0[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Handle> {
        self.0.iter()
    }
}
