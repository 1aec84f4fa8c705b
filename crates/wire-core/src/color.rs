//! Palette shared by the wireframe models, 0xRRGGBB.

pub const PLAYER: u32 = 0x00ff00;
pub const ENEMY: u32 = 0xff0000;
pub const OBSTACLE: u32 = 0x00ff00;
pub const TERRAIN: u32 = 0x00aa00;
pub const PROJECTILE: u32 = 0xffff00;
pub const MOUNTAINS: u32 = 0x006600;
pub const GRID: u32 = 0x004400;
pub const PICKUP_ARMOR: u32 = 0x00ffff;
pub const PICKUP_WEAPON: u32 = 0xffd700;
pub const LASER: u32 = 0xff4400;

/// Single tint used when the display runs in monochrome vector mode.
pub const PHOSPHOR: u32 = 0x00ff00;

pub fn split_rgb(color: u32) -> [u8; 3] {
    [
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    ]
}
