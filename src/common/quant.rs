use image::Rgb;

// Channel partition
//------------------------------------------------------------------------------

// Evenly spaced levels: round(d * 255 / 3) for d in 0..4
pub const LEVELS: [u8; 4] = [0, 85, 170, 255];

pub const SYMBOL_COUNT: u8 = 64;

/// Maps a 6-bit symbol to its color. Each channel carries one base-4 digit,
/// `symbol = red * 16 + green * 4 + blue`.
pub fn symbol_to_pixel(symbol: u8) -> Rgb<u8> {
    debug_assert!(symbol < SYMBOL_COUNT, "Symbol out of range: {symbol}");

    let r = (symbol >> 4) & 0b11;
    let g = (symbol >> 2) & 0b11;
    let b = symbol & 0b11;
    Rgb([LEVELS[r as usize], LEVELS[g as usize], LEVELS[b as usize]])
}

/// Classifies a sampled color to the nearest symbol, channel by channel.
pub fn pixel_to_symbol(px: Rgb<u8>) -> u8 {
    let Rgb([r, g, b]) = px;
    (nearest_level(r) << 4) | (nearest_level(g) << 2) | nearest_level(b)
}

// Scans levels upward and stops at the first one farther than the best so far. Ties go to the
// higher level. The early exit only holds while LEVELS are evenly spaced; a non-uniform
// partition needs a full scan.
fn nearest_level(val: u8) -> u8 {
    let mut best = 0;
    let mut best_dist = u8::MAX as i16 + 1;
    for (i, &lvl) in LEVELS.iter().enumerate() {
        let dist = (val as i16 - lvl as i16).abs();
        if dist > best_dist {
            break;
        }
        best = i as u8;
        best_dist = dist;
    }
    best
}
