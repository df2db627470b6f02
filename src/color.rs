use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Scale a unit color by an integer brightness factor.
///
/// Unit colors are small (the dimmest visible tint of a zone), the factor
/// is the global brightness scalar. Channels saturate at 255 instead of
/// wrapping; the original firmware wrapped, which shows up as inverted
/// colors once `unit * factor` passes 255.
pub fn scaled(unit: Rgb, factor: u8) -> Rgb {
    Rgb {
        r: unit.r.saturating_mul(factor),
        g: unit.g.saturating_mul(factor),
        b: unit.b.saturating_mul(factor),
    }
}

/// Set every pixel to black.
pub(crate) fn clear(frame: &mut [Rgb]) {
    frame.fill(Rgb { r: 0, g: 0, b: 0 });
}
