//! Predator-proximity threat weighting.
//!
//! Pure, stateless functions of the scalar distance between an agent and the
//! predator.  Everything downstream — rule blending and the speed ceiling —
//! is driven by these three functions, so their fixed points are pinned down
//! by tests: `threat_p(r, r) == 0.5`, `combine_weight(b, 0, ..) == b`, and
//! `inverse_square` stays finite at zero distance.

/// Controls how sharply the threat sigmoid transitions at the flight-zone
/// boundary.  Smaller values make the fear onset more switch-like.
const SIGMOID_SHARPNESS: f32 = 0.3;

/// Felt danger as a function of predator distance `x`, for an agent with
/// flight-zone radius `r`.
///
/// A smooth sigmoid over (0, 1): exactly 0.5 at the flight-zone boundary,
/// approaching 1 as the predator closes in and 0 as it recedes.  Using a
/// continuous function here (rather than a hard radius test) keeps rule
/// weights from snapping when the predator crosses the boundary.
#[inline]
pub fn threat_p(x: f32, r: f32) -> f32 {
    (1.0 / std::f32::consts::PI) * ((r - x) / SIGMOID_SHARPNESS).atan() + 0.5
}

/// Blend a rule's calm-state weight with its fear-amplified term.
///
/// Equals `base` exactly when `fear == 0`; monotonically increasing in the
/// threat level when `fear > 0`.
#[inline]
pub fn combine_weight(base: f32, fear: f32, x: f32, r: f32) -> f32 {
    base * (1.0 + threat_p(x, r) * fear)
}

/// Inverse-square falloff with softness `s`.
///
/// Prioritizes near objects sharply over far ones.  The epsilon term keeps
/// the result finite when `x == 0` (coincident positions).
#[inline]
pub fn inverse_square(x: f32, s: f32) -> f32 {
    let value = x / s + f32::EPSILON;
    1.0 / (value * value)
}
