use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    #[error("unknown handle identifier {0:?} (expected one of tl, tr, bl, br)")]
    UnknownHandle(String),
    #[error("screen surface has no area ({width}x{height})")]
    DegenerateScreen { width: f64, height: f64 },
    #[error("surface transform has a zero scale factor")]
    DegenerateTransform,
}
