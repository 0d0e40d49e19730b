//! JPEG badge rendering with a built-in bitmap font
//!
//! The badge is a fixed-size white strip with `Version: <text>` drawn in a
//! 5x7 bitmap font. Rendering never fails: unknown characters fall back to a
//! box glyph and overlong text is clipped at the image edge, so the endpoint
//! can always answer with a valid image.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, Rgb, RgbImage};

use crate::config::{BADGE_HEIGHT, BADGE_WIDTH, VERSION_READ_LIMIT};

/// Rendered when the version store cannot be read
pub const ERROR_TEXT: &str = "error";

const JPEG_QUALITY: u8 = 90;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SPACING: u32 = 1;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FOREGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Render the badge for a store-read version string.
///
/// The store value is capped at [`VERSION_READ_LIMIT`] characters; the badge
/// never renders more of the store line than that.
pub fn render_badge(version_text: &str) -> Vec<u8> {
    let capped: String = version_text.chars().take(VERSION_READ_LIMIT).collect();
    let text = format!("Version: {capped}");

    let mut img = RgbImage::from_pixel(BADGE_WIDTH, BADGE_HEIGHT, BACKGROUND);
    draw_text(&mut img, &text);

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder
        .encode(img.as_raw(), BADGE_WIDTH, BADGE_HEIGHT, ExtendedColorType::Rgb8)
        .expect("Failed to encode badge JPEG");
    buf
}

/// Draw `text` centered in the badge, clipping at the edges.
fn draw_text(img: &mut RgbImage, text: &str) {
    let advance = GLYPH_WIDTH + GLYPH_SPACING;
    let text_width = text.chars().count() as u32 * advance;
    let x0 = BADGE_WIDTH.saturating_sub(text_width) / 2;
    let y0 = (BADGE_HEIGHT - GLYPH_HEIGHT) / 2;

    for (index, c) in text.chars().enumerate() {
        let gx = x0 + index as u32 * advance;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    let px = gx + col;
                    let py = y0 + row as u32;
                    if px < BADGE_WIDTH && py < BADGE_HEIGHT {
                        img.put_pixel(px, py, FOREGROUND);
                    }
                }
            }
        }
    }
}

/// 5x7 glyphs for the characters the badge can meet: digits, separators, and
/// the letters of `Version`/`error`. Everything else renders as a box.
fn glyph(c: char) -> [u8; 7] {
    match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        ' ' => [0b00000; 7],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}
