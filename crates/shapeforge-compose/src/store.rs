use std::time::SystemTime;

use crate::error::ValidationError;
use crate::model::{ColorName, Layer, LayerId, LayerSize, PositionKey, ShapeKind};

/// `layers` (storage order, newest first) oldest first: the order they must be
/// painted in so the newest ends up on top.
#[inline]
pub fn paint_order(layers: &[Layer]) -> impl DoubleEndedIterator<Item = &Layer> + ExactSizeIterator {
    layers.iter().rev()
}

/// Authoritative, ordered collection of live layers.
///
/// Storage order is newest first: index 0 is the most recently added layer.
/// Paint order is the reverse, see [`iter_paint_order`](Self::iter_paint_order).
///
/// Ids come from a counter owned by the store, so two stores never share
/// identity state.
#[derive(Debug, Default)]
pub struct LayerStore {
    layers: Vec<Layer>,
    last_id: u64,
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer on top of the stack and returns its id.
    ///
    /// Fails without touching the store (or the id counter) when `size` is not
    /// a finite positive number.
    pub fn add_layer(
        &mut self,
        kind: ShapeKind,
        color: ColorName,
        size: f64,
        position: PositionKey,
    ) -> Result<LayerId, ValidationError> {
        let size = LayerSize::new(size).inspect_err(|e| log::warn!("add_layer rejected: {e}"))?;

        self.last_id += 1;
        let id = LayerId(self.last_id);

        let layer = Layer::new(id, kind, color, size, position, SystemTime::now());
        self.layers.insert(0, layer);

        log::debug!(
            "layer {id} added: {kind} {color} {}px at {position} ({} live)",
            size.get(),
            self.layers.len()
        );
        Ok(id)
    }

    /// Removes the layer with `id`. Unknown ids are a silent no-op.
    ///
    /// Returns `true` if a layer was removed.
    pub fn delete_layer(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| l.id() != id);

        let removed = self.layers.len() != before;
        if removed {
            log::debug!("layer {id} deleted ({} live)", self.layers.len());
        }
        removed
    }

    /// Live layers in storage order, newest first.
    #[inline]
    pub fn list_layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Live layers oldest first, see [`paint_order`].
    #[inline]
    pub fn iter_paint_order(&self) -> impl DoubleEndedIterator<Item = &Layer> + ExactSizeIterator {
        paint_order(&self.layers)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id() == id)
    }

    /// The most recently added live layer.
    #[inline]
    pub fn latest(&self) -> Option<&Layer> {
        self.layers.first()
    }
}
