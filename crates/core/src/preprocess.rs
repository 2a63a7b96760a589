//! Image preprocessing ahead of text recognition.
//!
//! Scanned medical reports are often small, noisy and unevenly lit, all of
//! which degrade recognition accuracy. The pipeline is: grayscale conversion,
//! conditional upscale to a minimum width, a light Gaussian denoise, then
//! locally adaptive binarisation. Pure function of its input and the fixed
//! constants below; nothing is retained between calls.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};
use imageproc::filter::gaussian_blur_f32;

/// Minimum width for acceptable recognition accuracy; narrower inputs are
/// upscaled to exactly this width.
const MIN_WIDTH: u32 = 1000;

/// Sigma of the small denoising blur (3x3 kernel equivalent).
const DENOISE_SIGMA: f32 = 0.8;

/// Sigma of the Gaussian weighting over the 21-pixel thresholding window.
const THRESHOLD_SIGMA: f32 = 3.65;

/// Offset subtracted from the local weighted mean before comparison.
const THRESHOLD_OFFSET: f32 = 10.0;

/// Prepare a decoded image for text recognition.
///
/// Accepts colour or grayscale input; already-gray images pass through the
/// conversion unchanged. The output is a single-channel binary (0/255) image
/// at least [`MIN_WIDTH`] pixels wide whenever the input is non-empty.
pub fn preprocess(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();
    let gray = upscale_if_narrow(gray);
    let blurred = gaussian_blur_f32(&gray, DENOISE_SIGMA);
    adaptive_threshold(&blurred)
}

/// Uniformly upscale images narrower than [`MIN_WIDTH`], preserving aspect
/// ratio, with bilinear interpolation. Wider images keep their resolution.
fn upscale_if_narrow(gray: GrayImage) -> GrayImage {
    let (w, h) = gray.dimensions();
    if w == 0 || w >= MIN_WIDTH {
        return gray;
    }
    let scale = f64::from(MIN_WIDTH) / f64::from(w);
    let new_h = (f64::from(h) * scale).round() as u32;
    imageops::resize(&gray, MIN_WIDTH, new_h.max(1), FilterType::Triangle)
}

/// Binarise against a Gaussian-weighted local mean.
///
/// Each pixel is compared to the weighted mean of its 21-pixel neighbourhood
/// minus [`THRESHOLD_OFFSET`]. The local window tolerates the uneven lighting
/// and contrast of scanned reports, which a single global threshold does not.
fn adaptive_threshold(gray: &GrayImage) -> GrayImage {
    let local_mean = gaussian_blur_f32(gray, THRESHOLD_SIGMA);
    let mut out = GrayImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        let mean = f32::from(local_mean.get_pixel(x, y)[0]);
        let value = if f32::from(pixel[0]) > mean - THRESHOLD_OFFSET {
            255
        } else {
            0
        };
        out.put_pixel(x, y, Luma([value]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn narrow_colour_images_are_upscaled_and_flattened() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(400, 300, Rgb([120, 30, 200])));
        let out = preprocess(&rgb);
        assert_eq!(out.width(), 1000);
        assert_eq!(out.height(), 750);
    }

    #[test]
    fn wide_images_keep_their_resolution() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(1200, 400, Luma([90])));
        let out = preprocess(&gray);
        assert_eq!(out.dimensions(), (1200, 400));
    }

    #[test]
    fn output_is_strictly_binary() {
        let gradient = GrayImage::from_fn(1100, 60, |x, _y| Luma([(x % 256) as u8]));
        let out = preprocess(&DynamicImage::ImageLuma8(gradient));
        assert!(out.pixels().all(|p| p[0] == 0 || p[0] == 255));
        assert!(out.pixels().any(|p| p[0] == 0));
        assert!(out.pixels().any(|p| p[0] == 255));
    }

    #[test]
    fn flat_images_threshold_to_white() {
        // Every pixel equals its local mean, which is above mean - offset.
        let flat = GrayImage::from_pixel(1200, 80, Luma([128]));
        let out = preprocess(&DynamicImage::ImageLuma8(flat));
        assert!(out.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn upscaling_preserves_aspect_ratio() {
        let tall = DynamicImage::ImageLuma8(GrayImage::from_pixel(250, 500, Luma([64])));
        let out = preprocess(&tall);
        assert_eq!(out.width(), 1000);
        assert_eq!(out.height(), 2000);
    }
}
