//! Colors in ARGB8888 format (`0xAARRGGBB`).

pub const BACKGROUND: u32 = 0xFF065535;
pub const VERTEX: u32 = 0xFFFFA500;

/// One flat color per cube face, indexed by `first_vertex_index / 6`.
pub const FACE_PALETTE: [u32; 6] = [
    0xFFE6194B, // -Z
    0xFF3CB44B, // +Z
    0xFFFFE119, // -X
    0xFF4363D8, // +X
    0xFFF58231, // -Y
    0xFF911EB4, // +Y
];

/// Depth at which [`depth_brightness`] reaches zero.
pub const BRIGHTNESS_FALLOFF_DEPTH: f32 = 20.0;

/// Palette color for the triangle starting at `first_vertex` in a flat list.
pub fn face_color(first_vertex: usize) -> u32 {
    FACE_PALETTE[(first_vertex / 6) % FACE_PALETTE.len()]
}

/// Splits a color into normalized `(r, g, b)` channels.
pub fn unpack_color(color: u32) -> (f32, f32, f32) {
    (
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    )
}

/// Packs normalized channels back into an opaque ARGB color.
pub fn pack_color(r: f32, g: f32, b: f32) -> u32 {
    let r = (r.clamp(0.0, 1.0) * 255.0).round() as u32;
    let g = (g.clamp(0.0, 1.0) * 255.0).round() as u32;
    let b = (b.clamp(0.0, 1.0) * 255.0).round() as u32;
    0xFF000000 | (r << 16) | (g << 8) | b
}

/// Scales the RGB channels of `color` by `factor`, keeping alpha.
pub fn modulate(color: u32, factor: f32) -> u32 {
    let (r, g, b) = unpack_color(color);
    let alpha = color & 0xFF000000;
    alpha | (pack_color(r * factor, g * factor, b * factor) & 0x00FFFFFF)
}

/// Linear brightness for camera-space depth `z`, clamped to `[0, 1]`.
pub fn depth_brightness(z: f32) -> f32 {
    (1.0 - z / BRIGHTNESS_FALLOFF_DEPTH).clamp(0.0, 1.0)
}
