use anyhow::Result;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Clone)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("raw_len", &self.raw_data.len())
            .finish()
    }
}

impl CapturedImage {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        log::debug!(
            "[CAPTURED_IMAGE] building image: {}x{}, {} bytes",
            width_pixels,
            height_pixels,
            raw_rgba_data.len()
        );

        Self {
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        }
    }

    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    pub fn expected_raw_len(&self) -> usize {
        self.width as usize * self.height as usize * RGBA_BYTES_PER_PIXEL
    }

    /// Checks the buffer can be interpreted as an RGBA8 image of the stated size.
    pub fn ensure_encodable(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!(
                "Image dimensions must be greater than zero, got {}x{}",
                self.width,
                self.height
            );
        }

        if self.raw_data.len() != self.expected_raw_len() {
            anyhow::bail!(
                "Raw buffer holds {} bytes but a {}x{} RGBA image needs {}",
                self.raw_data.len(),
                self.width,
                self.height,
                self.expected_raw_len()
            );
        }

        Ok(())
    }
}
