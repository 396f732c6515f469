//! Image XObjects.

use crate::fonts::flate;
use lopdf::{Document, ObjectId, Stream, dictionary};
use thirdplane_render_core::RenderError;
use thirdplane_resource::ImageAsset;

/// Decodes `asset` and adds it as an RGB image with an alpha soft mask.
pub(crate) fn embed_image(doc: &mut Document, src: &str, asset: &ImageAsset) -> Result<ObjectId, RenderError> {
    let decoded = image::load_from_memory(&asset.data).map_err(|e| RenderError::Image {
        src: src.to_string(),
        message: e.to_string(),
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    let mut alpha = Vec::with_capacity((width * height) as usize);
    for pixel in rgba.pixels() {
        rgb.extend_from_slice(&pixel.0[..3]);
        alpha.push(pixel.0[3]);
    }

    let mask_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8_i64,
            "Filter" => "FlateDecode",
        },
        flate(&alpha)?,
    ));

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
            "Filter" => "FlateDecode",
            "SMask" => mask_id,
        },
        flate(&rgb)?,
    ));
    log::debug!("Embedded image '{}' ({}x{})", src, width, height);
    Ok(image_id)
}
