/// The fixed channel color palette, as RGB triples. Channel colors are
/// assigned by channel index, wrapping around once the palette is exhausted,
/// so the same channel keeps the same color in the UI and in exported charts.
pub const PALETTE: [(u8, u8, u8); 5] = [
    (0xE7, 0x29, 0x8A),
    (0xD9, 0x5F, 0x02),
    (0x66, 0xA6, 0x1E),
    (0x75, 0x70, 0xB3),
    (0x1B, 0x9E, 0x77),
];

/// Stable, bounds-checked index-to-color mapping.
pub fn palette_color(channel_index: usize) -> (u8, u8, u8) {
    PALETTE[channel_index % PALETTE.len()]
}
