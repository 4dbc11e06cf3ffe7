use bevy::color::{Color, Srgba};

/// Scene palette. Hex values match the reference art direction:
/// deep/light emerald greens, metallic and rose gold, warm white, velvet red.
pub const EMERALD_DEEP: Color = Color::Srgba(Srgba {
    red: 0.0,
    green: 0.102,
    blue: 0.063,
    alpha: 1.0,
});

pub const EMERALD_LIGHT: Color = Color::Srgba(Srgba {
    red: 0.0,
    green: 0.302,
    blue: 0.180,
    alpha: 1.0,
});

pub const GOLD_METALLIC: Color = Color::Srgba(Srgba {
    red: 1.0,
    green: 0.843,
    blue: 0.0,
    alpha: 1.0,
});

/// Brighter gold used for hover highlights on the photo frames.
pub const GOLD_BRIGHT: Color = Color::Srgba(Srgba {
    red: 1.0,
    green: 0.898,
    blue: 0.361,
    alpha: 1.0,
});

pub const GOLD_ROSE: Color = Color::Srgba(Srgba {
    red: 0.878,
    green: 0.749,
    blue: 0.722,
    alpha: 1.0,
});

pub const WHITE_WARM: Color = Color::Srgba(Srgba {
    red: 1.0,
    green: 0.992,
    blue: 0.816,
    alpha: 1.0,
});

pub const RED_VELVET: Color = Color::Srgba(Srgba {
    red: 0.541,
    green: 0.0,
    blue: 0.0,
    alpha: 1.0,
});
