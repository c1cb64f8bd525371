//! Image loading with EXIF orientation baked into the texture.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::warn;

const PLACEHOLDER_SIZE: i32 = 16;

/// Load `name` from the asset directory as a texture. A missing or unreadable
/// image degrades to a flat placeholder with a warning, so one bad photo
/// never takes the page down.
pub fn load_or_placeholder(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets: &Path,
    name: &str,
) -> Result<Texture2D> {
    match load_texture(rl, thread, &assets.join(name)) {
        Ok(texture) => Ok(texture),
        Err(e) => {
            warn!(asset = name, error = %e, "using placeholder");
            placeholder(rl, thread)
        }
    }
}

/// Load a single image file as a texture. JPEG orientation values 3, 6 and 8
/// are baked in by rotating the decoded image before the texture upload;
/// mirrored orientations are left alone.
pub fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow!("decoding {}: {}", path.display(), e))?;

    if extension == "jpg" || extension == "jpeg" {
        match orientation(&bytes) {
            3 => {
                image.rotate_cw();
                image.rotate_cw();
            }
            6 => image.rotate_cw(),
            8 => image.rotate_ccw(),
            _ => {}
        }
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("uploading {}: {}", path.display(), e))
}

/// EXIF orientation tag value, 1 when absent or unreadable.
fn orientation(bytes: &[u8]) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(_) => return 1,
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY) {
        Some(field) => match &field.value {
            Value::Short(values) if !values.is_empty() => values[0],
            _ => 1,
        },
        None => 1,
    }
}

fn placeholder(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Texture2D> {
    let image = Image::gen_image_color(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, crate::constants::PANEL);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("creating placeholder texture: {}", e))
}
