use glam::FloatExt;
use glium::uniforms::{MagnifySamplerFilter, MinifySamplerFilter, SamplerWrapFunction};
use image::RgbImage;
use noise::{core::perlin::perlin_2d, permutationtable::PermutationTable};

/// Sampling setup chosen from the image dimensions. Mipmaps and repeat
/// wrapping are only ever applied to power-of-two images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureFiltering {
    /// Auto-generated mipmap chain, repeat wrapping, nearest-mipmap-linear
    /// minification.
    Mipmapped,
    /// No mipmaps, clamp-to-edge wrapping, linear filtering both ways.
    ClampLinear,
}

impl TextureFiltering {
    pub fn for_size(width: u32, height: u32) -> Self {
        if width.is_power_of_two() && height.is_power_of_two() {
            TextureFiltering::Mipmapped
        } else {
            TextureFiltering::ClampLinear
        }
    }
}

pub struct MeshTexture {
    texture: glium::Texture2d,
    filtering: TextureFiltering,
}

impl MeshTexture {
    pub fn from_image(
        display: &glium::Display<glium::glutin::surface::WindowSurface>,
        image: &RgbImage,
    ) -> Result<Self, glium::texture::TextureCreationError> {
        let (width, height) = image.dimensions();
        let filtering = TextureFiltering::for_size(width, height);
        let mipmaps = match filtering {
            TextureFiltering::Mipmapped => glium::texture::MipmapsOption::AutoGeneratedMipmaps,
            TextureFiltering::ClampLinear => glium::texture::MipmapsOption::NoMipmap,
        };

        let raw = glium::texture::RawImage2d::from_raw_rgb(image.as_raw().clone(), (width, height));
        let texture = glium::Texture2d::with_mipmaps(display, raw, mipmaps)?;

        log::debug!("Created {width}x{height} texture with {filtering:?} filtering");
        Ok(Self { texture, filtering })
    }

    /// 1x1 black stand-in so both sampler uniforms always have a binding.
    pub fn placeholder(
        display: &glium::Display<glium::glutin::surface::WindowSurface>,
    ) -> Result<Self, glium::texture::TextureCreationError> {
        Self::from_image(display, &RgbImage::new(1, 1))
    }

    pub fn filtering(&self) -> TextureFiltering {
        self.filtering
    }

    pub fn sampled(&self) -> glium::uniforms::Sampler<'_, glium::Texture2d> {
        match self.filtering {
            TextureFiltering::Mipmapped => self
                .texture
                .sampled()
                .minify_filter(MinifySamplerFilter::NearestMipmapLinear)
                .magnify_filter(MagnifySamplerFilter::Linear)
                .wrap_function(SamplerWrapFunction::Repeat),
            TextureFiltering::ClampLinear => self
                .texture
                .sampled()
                .minify_filter(MinifySamplerFilter::Linear)
                .magnify_filter(MagnifySamplerFilter::Linear)
                .wrap_function(SamplerWrapFunction::Clamp),
        }
    }
}

/// Two-tone checkerboard with `cells` squares per side.
pub fn checkerboard(size: u32, cells: u32) -> RgbImage {
    let cell_size = (size / cells.max(1)).max(1);
    RgbImage::from_fn(size, size, |x, y| {
        if ((x / cell_size) + (y / cell_size)) % 2 == 0 {
            image::Rgb([230, 230, 230])
        } else {
            image::Rgb([60, 60, 90])
        }
    })
}

/// Grayscale Perlin noise with `frequency` cycles across the image.
pub fn perlin(size: u32, seed: u32, frequency: f64) -> RgbImage {
    let table = PermutationTable::new(seed);
    RgbImage::from_fn(size, size, |x, y| {
        let value = perlin_2d(
            (
                x as f64 / size as f64 * frequency,
                y as f64 / size as f64 * frequency,
            )
                .into(),
            &table,
        )
        .remap(-1.0, 1.0, 0.0, 255.0) as u8;
        image::Rgb([value, value, value])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_images_get_mipmaps() {
        assert_eq!(
            TextureFiltering::for_size(256, 128),
            TextureFiltering::Mipmapped
        );
        assert_eq!(TextureFiltering::for_size(1, 1), TextureFiltering::Mipmapped);
    }

    #[test]
    fn other_sizes_clamp_without_mipmaps() {
        assert_eq!(
            TextureFiltering::for_size(300, 200),
            TextureFiltering::ClampLinear
        );
        assert_eq!(
            TextureFiltering::for_size(256, 300),
            TextureFiltering::ClampLinear
        );
        assert_eq!(
            TextureFiltering::for_size(0, 64),
            TextureFiltering::ClampLinear
        );
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let board = checkerboard(64, 8);
        assert_eq!(board.dimensions(), (64, 64));
        assert_eq!(board.get_pixel(0, 0), board.get_pixel(16, 0));
        assert_ne!(board.get_pixel(0, 0), board.get_pixel(8, 0));
    }

    #[test]
    fn perlin_is_deterministic_per_seed() {
        let a = perlin(32, 7, 4.0);
        let b = perlin(32, 7, 4.0);
        assert_eq!(a.as_raw(), b.as_raw());

        let c = perlin(32, 8, 4.0);
        assert_ne!(a.as_raw(), c.as_raw());
    }
}
