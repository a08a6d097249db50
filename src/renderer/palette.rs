//! Board colors

pub const BACKGROUND: &str = "#071018";
pub const FOOD: &str = "#FF5A5F";
pub const GROW: &str = "#00A699";
pub const INVINCIBLE: &str = "#FFB400";
pub const SPEED_BOOST: &str = "#FC642D";
pub const OBSTACLE: &str = "#2b3b45";
pub const HEAD: &str = "#00D1C1";
pub const HEAD_INVINCIBLE: &str = "#FFD45C";
pub const BODY: &str = "#9fbfc6";

/// Drop shadow under every dot
pub const SHADOW: &str = "rgba(0,0,0,0.18)";
/// Specular highlight on every dot
pub const HIGHLIGHT: &str = "rgba(255,255,255,0.18)";

/// CSS filter applied to the canvas for the game-over flash
pub const GAME_OVER_FILTER: &str = "grayscale(100%) saturate(0.4)";
