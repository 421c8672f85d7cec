use anyhow::Result;

use shapeforge_engine::render::{Rasterizer, Surface};

use crate::error::ValidationError;
use crate::model::{ColorName, Layer, LayerId, PositionKey, ShapeKind};
use crate::painter;
use crate::store::LayerStore;

/// Session configuration.
///
/// The surface size is fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { width: 560, height: 420 }
    }
}

impl SessionConfig {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A layer store bound to a surface.
///
/// Every successful mutation repaints the whole surface once. Rejected adds
/// and deletes of unknown ids leave both the store and the pixels alone.
/// One rasterizer serves every repaint of the session.
#[derive(Debug)]
pub struct Session {
    store: LayerStore,
    surface: Surface,
    rasterizer: Rasterizer,
    redraws: u64,
}

impl Session {
    /// Starts an empty session with a cleared surface.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let surface = Surface::new(config.width, config.height)?;
        log::debug!("session started ({}x{})", config.width, config.height);
        Ok(Self {
            store: LayerStore::new(),
            surface,
            rasterizer: Rasterizer::new(),
            redraws: 0,
        })
    }

    pub fn add_layer(
        &mut self,
        kind: ShapeKind,
        color: ColorName,
        size: f64,
        position: PositionKey,
    ) -> Result<LayerId, ValidationError> {
        let id = self.store.add_layer(kind, color, size, position)?;
        self.redraw();
        Ok(id)
    }

    pub fn delete_layer(&mut self, id: LayerId) {
        if self.store.delete_layer(id) {
            self.redraw();
        }
    }

    /// Live layers, newest first.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        self.store.list_layers()
    }

    #[inline]
    pub fn store(&self) -> &LayerStore {
        &self.store
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Number of full repaints performed so far.
    #[inline]
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    fn redraw(&mut self) {
        painter::redraw_with(&mut self.rasterizer, &mut self.surface, self.store.list_layers());
        self.redraws += 1;
    }
}
