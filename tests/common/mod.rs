//! Shared helpers for integration tests.
//!
//! Holds a minimal text decoder used only to check round trips, plus
//! deterministic fixture images. Nothing here is random.

#![allow(dead_code)]

use rbscodec::{ColorEntry, PixelGrid, Rect, RgbaImage};

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A decoded entry: 8-bit RGBA color and its rectangles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEntry {
    pub color: [u8; 4],
    pub rects: Vec<Rect>,
}

fn parse_color(s: &str) -> Result<[u8; 4], String> {
    let fields: Vec<u8> = s
        .split(',')
        .map(|f| f.parse::<u8>().map_err(|e| format!("bad channel {:?}: {}", f, e)))
        .collect::<Result<_, _>>()?;
    match fields[..] {
        [r, g, b] => Ok([r, g, b, 255]),
        [r, g, b, a] => Ok([r, g, b, a]),
        _ => Err(format!("bad color {:?}", s)),
    }
}

/// Parses a rectangle by field count: point, single-row run, or full corners.
fn parse_rect(s: &str) -> Result<Rect, String> {
    let fields: Vec<u32> = s
        .split(',')
        .map(|f| f.parse::<u32>().map_err(|e| format!("bad coordinate {:?}: {}", f, e)))
        .collect::<Result<_, _>>()?;
    match fields[..] {
        [x, y] => Ok(Rect::point(x, y)),
        [x, y, w] => Ok(Rect::new(x, y, x + w, y)),
        [x1, y1, x2, y2] => Ok(Rect::new(x1, y1, x2, y2)),
        _ => Err(format!("bad rect {:?}", s)),
    }
}

/// Decodes the text format into the background color and ranked entries.
pub fn decode_text(text: &str) -> Result<([u8; 4], Vec<DecodedEntry>), String> {
    let mut parts = text.split('|');
    let background = parse_color(parts.next().ok_or("empty input")?)?;

    let mut entries = Vec::new();
    for part in parts {
        let (color, rects) = part
            .split_once('=')
            .ok_or_else(|| format!("missing '=' in {:?}", part))?;
        if !rects.is_empty() && !rects.ends_with(';') {
            return Err(format!("unterminated rects in {:?}", part));
        }
        let rects = rects
            .split(';')
            .filter(|r| !r.is_empty())
            .map(parse_rect)
            .collect::<Result<Vec<_>, _>>()?;
        entries.push(DecodedEntry {
            color: parse_color(color)?,
            rects,
        });
    }
    Ok((background, entries))
}

/// Paints decoded text back into an RGBA32 image.
pub fn decode_to_image(text: &str, width: u32, height: u32) -> Result<RgbaImage, String> {
    let (background, entries) = decode_text(text)?;
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&background);
    }
    for entry in &entries {
        for rect in &entry.rects {
            if rect.x2 >= width || rect.y2 >= height {
                return Err(format!("rect {:?} outside {}x{}", rect, width, height));
            }
            for y in rect.y1..=rect.y2 {
                for x in rect.x1..=rect.x2 {
                    let offset = (y as usize * width as usize + x as usize) * 4;
                    data[offset..offset + 4].copy_from_slice(&entry.color);
                }
            }
        }
    }
    RgbaImage::new(width, height, data).map_err(|e| e.to_string())
}

/// Checks that `entries` cover `grid` exactly: every non-background pixel is
/// in exactly one rectangle of its own color, background pixels in none.
pub fn assert_exact_coverage<G: PixelGrid>(grid: &G, entries: &[ColorEntry]) {
    let (width, height) = (grid.width(), grid.height());
    let mut owner: Vec<Option<usize>> = vec![None; width as usize * height as usize];

    for (rank, entry) in entries.iter().enumerate() {
        for rect in &entry.rects {
            assert!(rect.x2 < width && rect.y2 < height, "rect {:?} out of bounds", rect);
            for y in rect.y1..=rect.y2 {
                for x in rect.x1..=rect.x2 {
                    let idx = y as usize * width as usize + x as usize;
                    assert_eq!(
                        owner[idx], None,
                        "pixel ({},{}) claimed by #{:?} and #{}",
                        x, y, owner[idx], rank
                    );
                    owner[idx] = Some(rank);
                }
            }
        }
    }

    let background = entries[0].color;
    for y in 0..height {
        for x in 0..width {
            let color = grid.color_at(x, y);
            let idx = y as usize * width as usize + x as usize;
            match owner[idx] {
                None => assert_eq!(color, background, "pixel ({},{}) left uncovered", x, y),
                Some(rank) => assert_eq!(
                    entries[rank].color, color,
                    "pixel ({},{}) claimed by wrong color #{}",
                    x, y, rank
                ),
            }
        }
    }
}

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const GHOST: [u8; 4] = [40, 40, 40, 90];

/// Builds an image from rows of pixels.
pub fn image_from_rows(rows: &[&[[u8; 4]]]) -> RgbaImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    RgbaImage::from_fn(width, height, |x, y| rows[y as usize][x as usize])
}

/// Named deterministic fixtures covering the shapes the encoder must handle.
pub fn fixtures() -> Vec<(&'static str, RgbaImage)> {
    let palette = [WHITE, BLACK, RED, GREEN, BLUE, GHOST];
    vec![
        ("solid", RgbaImage::from_fn(8, 8, |_, _| BLACK)),
        ("single_pixel", RgbaImage::from_fn(1, 1, |_, _| RED)),
        (
            "checkerboard",
            RgbaImage::from_fn(9, 7, |x, y| if (x + y) % 2 == 0 { WHITE } else { BLACK }),
        ),
        (
            "stripes",
            RgbaImage::from_fn(10, 6, |x, _| palette[(x / 2 % 3) as usize]),
        ),
        (
            "nested_boxes",
            RgbaImage::from_fn(16, 12, |x, y| {
                let ring = x.min(y).min(15 - x).min(11 - y);
                palette[(ring % 4) as usize]
            }),
        ),
        (
            "icon",
            RgbaImage::from_fn(24, 24, |x, y| {
                let (dx, dy) = (x as i32 - 12, y as i32 - 12);
                if dx * dx + dy * dy < 64 {
                    RED
                } else if (4..20).contains(&x) && (18..22).contains(&y) {
                    BLUE
                } else if x == y {
                    GHOST
                } else {
                    WHITE
                }
            }),
        ),
        (
            "noise",
            RgbaImage::from_fn(31, 17, |x, y| {
                let h = (x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(40_503)) >> 7;
                palette[(h % 6) as usize]
            }),
        ),
        (
            "tall_thin",
            RgbaImage::from_fn(1, 20, |_, y| if y % 5 < 2 { GREEN } else { WHITE }),
        ),
    ]
}
