use std::fmt;
use std::time::SystemTime;

use super::{ColorName, LayerSize, PositionKey, ShapeKind};

/// Identity of a layer within one store. Issued in strictly increasing order, never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LayerId(pub u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One placed shape. Immutable once created; only [`LayerStore`](crate::LayerStore) builds them.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: LayerId,
    kind: ShapeKind,
    color: ColorName,
    size: LayerSize,
    position: PositionKey,
    created_at: SystemTime,
}

impl Layer {
    pub(crate) fn new(
        id: LayerId,
        kind: ShapeKind,
        color: ColorName,
        size: LayerSize,
        position: PositionKey,
        created_at: SystemTime,
    ) -> Self {
        Self { id, kind, color, size, position, created_at }
    }

    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> ColorName {
        self.color
    }

    #[inline]
    pub fn size(&self) -> LayerSize {
        self.size
    }

    #[inline]
    pub fn position(&self) -> PositionKey {
        self.position
    }

    /// Informational only; never used for ordering.
    #[inline]
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}
