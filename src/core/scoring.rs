use crate::models::{Ball, BowlerSpecs, OilPattern};

/// Flat layout contribution; drilling-layout-aware scoring is not modeled yet
const LAYOUT_SCORE: f64 = 8.0;

/// Patterns at or under this length (feet) hook early on their own
const SHORT_PATTERN_FT: f64 = 35.0;
/// Patterns at or over this length need inherent ball hook to finish
const LONG_PATTERN_FT: f64 = 42.0;
/// Oil volume (mL) above this counts as heavy
const HEAVY_OIL_ML: f64 = 25.0;

/// Calculate a match score (0-100) for a ball against a bowler on a pattern
///
/// Scoring formula:
/// score = min(100,
///     hook_fit            +    # 0-40, linear penalty on hook mismatch
///     pattern_length_mod  +    # favors length or hook by pattern length
///     surface_score       +    # 10 or 20, grit vs oil volume
///     layout_score)            # constant 8
///
/// Deterministic and side-effect free; identical inputs always produce an
/// identical score. Sub-scores are non-negative, so only the grand total is
/// clamped.
pub fn calculate_match_score(ball: &Ball, specs: &BowlerSpecs, pattern: &OilPattern) -> f64 {
    let hook_fit = hook_fit_score(ball, specs, pattern);
    let length_mod = pattern_length_modifier(ball, pattern);
    let surface = surface_score(ball, pattern);

    (hook_fit + length_mod + surface + LAYOUT_SCORE).min(100.0)
}

/// Ideal hook on a 0-10 scale for this bowler on this pattern
///
/// Higher rev rate and lower ball speed push the ideal up; longer oil delays
/// the breakpoint, pushing it down. Clamped to [1, 10].
#[inline]
pub fn ideal_hook(specs: &BowlerSpecs, pattern: &OilPattern) -> f64 {
    let base_hook = 5.0;
    let rev_rate_modifier = (specs.rev_rate - 300.0) / 100.0;
    let speed_modifier = (17.0 - specs.ball_speed) / 2.0;
    let pattern_modifier = (pattern.length - 39.0) / 10.0;

    (base_hook + rev_rate_modifier + speed_modifier - pattern_modifier).clamp(1.0, 10.0)
}

/// Hook fit (0-40): 4 points of penalty per unit of mismatch between the
/// ball's hook potential (scaled to 0-10) and the ideal, floored at zero
#[inline]
pub fn hook_fit_score(ball: &Ball, specs: &BowlerSpecs, pattern: &OilPattern) -> f64 {
    let ball_hook = ball.hook_potential * 2.0;
    let difference = (ideal_hook(specs, pattern) - ball_hook).abs();
    (40.0 - difference * 4.0).max(0.0)
}

/// Pattern-length modifier, tiered by applied oil length
#[inline]
pub fn pattern_length_modifier(ball: &Ball, pattern: &OilPattern) -> f64 {
    if pattern.length <= SHORT_PATTERN_FT {
        // Short pattern, favor length and control
        ball.length * 6.0
    } else if pattern.length >= LONG_PATTERN_FT {
        // Long pattern, favor hook potential
        ball.hook_potential * 6.0
    } else {
        // Medium pattern, balanced blend
        (ball.length + ball.hook_potential) * 3.0
    }
}

/// Surface score: a binary step with no interpolation, 20 when the coverstock
/// prep suits the oil volume and 10 otherwise
#[inline]
pub fn surface_score(ball: &Ball, pattern: &OilPattern) -> f64 {
    let grit = ball.surface_grit();

    if pattern.volume > HEAVY_OIL_ML {
        // Heavy oil, dull surfaces cut through
        if grit < 2000 {
            20.0
        } else {
            10.0
        }
    } else {
        // Light oil, polish conserves energy
        if grit > 3000 {
            20.0
        } else {
            10.0
        }
    }
}

/// Display-tier explanation for a computed match score
///
/// Tiers are evaluated in descending order at 85 / 70 / 55.
pub fn recommendation_reason(ball: &Ball, pattern: &OilPattern, match_score: f64) -> String {
    if match_score >= 85.0 {
        format!(
            "Excellent match! This ball's {}/5 hook potential is perfect for the {} pattern.",
            ball.hook_potential, pattern.name
        )
    } else if match_score >= 70.0 {
        format!(
            "Good match. The {} surface should work well on this {}\" pattern.",
            ball.surface, pattern.length
        )
    } else if match_score >= 55.0 {
        "Decent option. Consider adjusting surface to optimize performance on this pattern."
            .to_string()
    } else {
        "May require significant surface adjustments or different layout for optimal performance."
            .to_string()
    }
}
