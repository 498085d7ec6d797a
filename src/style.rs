use crate::config::GradientConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

fn round_alpha(alpha: f64) -> f64 {
    (alpha * 1e6).round() / 1e6
}

/// Evenly spaced stops fading the fill color from `alpha_start` to `alpha_end`.
///
/// Produces `steps + 1` stops, offsets `0.0..=1.0`.
#[must_use]
pub fn gradient_stops(gradient: &GradientConfig) -> Vec<GradientStop> {
    let steps = gradient.steps.max(1);
    let (r, g, b) = gradient.rgb;

    (0..=steps)
        .map(|k| {
            let t = f64::from(k) / f64::from(steps);
            let alpha = round_alpha(gradient.alpha_start + (gradient.alpha_end - gradient.alpha_start) * t);
            GradientStop {
                offset: t,
                color: format!("rgba({r}, {g}, {b}, {alpha})"),
            }
        })
        .collect()
}

/// Gradient width in canvas pixels for the given device pixel ratio.
#[must_use]
pub fn gradient_canvas_width(gradient: &GradientConfig, pixel_ratio: f64) -> f64 {
    gradient.width * pixel_ratio
}
