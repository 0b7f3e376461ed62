use klondike_widgets::Theme;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

pub const DEAL: &str = "deal";
pub const WIN: &str = "win";

/// A fresh deal sweeps in over the felt from the left
pub fn deal_sweep() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        Theme::FELT,
        (400, Interpolation::CubicOut),
    )
}

/// Endless hue shimmer once every card is home
pub fn win_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([30.0, 0.0, 0.15], (800, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}
