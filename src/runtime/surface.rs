//! softbuffer-backed window surface

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::window::Window;

use paintgrid::render::Surface;

/// The visible window contents
pub struct WindowSurface {
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    size: (u32, u32),
}

impl WindowSurface {
    pub fn new(context: &Context<Rc<Window>>, window: Rc<Window>) -> Result<Self> {
        let size = window.inner_size();
        let surface = softbuffer::Surface::new(context, window)
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        let mut surface = Self {
            surface,
            size: (0, 0),
        };
        surface.resize(size.width, size.height)?;
        Ok(surface)
    }

    /// Resize to the window's physical size (zero sizes are kept at 1x1)
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let width = NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN);
        let height = NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN);
        self.surface
            .resize(width, height)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        self.size = (width.get(), height.get());
        Ok(())
    }
}

impl Surface for WindowSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn blit(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<()> {
        if (width, height) != self.size {
            anyhow::bail!(
                "blit of {}x{} onto {}x{} surface",
                width,
                height,
                self.size.0,
                self.size.1
            );
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(pixels);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
