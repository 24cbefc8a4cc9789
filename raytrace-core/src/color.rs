/// A linear RGB triple. `1.0` corresponds to an sRGB byte value of 255;
/// channels are non-negative but otherwise unbounded until an addition
/// renormalizes them (see [`Colour::add`]).
#[derive(Debug, Clone, Copy)]
pub struct Colour {
    r: f64,
    g: f64,
    b: f64,
}

pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
pub const RED: Colour = Colour::new(1.0, 0.0, 0.0);
pub const GREEN: Colour = Colour::new(0.0, 1.0, 0.0);
pub const BLUE: Colour = Colour::new(0.0, 0.0, 1.0);
pub const YELLOW: Colour = Colour::new(1.0, 1.0, 0.0);
pub const CYAN: Colour = Colour::new(0.0, 1.0, 1.0);
pub const MAGENTA: Colour = Colour::new(1.0, 0.0, 1.0);
pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);

const RGB_MAX: f64 = 255.0;
/// Per-channel equality tolerance: one sRGB byte step.
const COLOUR_EPS: f64 = 1.0 / RGB_MAX;

impl Colour {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r) / RGB_MAX, f64::from(g) / RGB_MAX, f64::from(b) / RGB_MAX)
    }

    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    fn max_component(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// `floor(channel * 255)`, clamped to a valid byte.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 3] {
        let to_byte = |c: f64| (c * RGB_MAX).floor().clamp(0.0, RGB_MAX) as u8;
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }
}

impl std::ops::Add for Colour {
    type Output = Self;

    /// Component-wise add, then divide every channel by the max
    /// channel when it exceeds 1. This preserves hue while clamping
    /// exposure; it is not a per-channel clamp (see spec notes on why
    /// that distinction matters for rendered hue).
    fn add(self, rhs: Self) -> Self::Output {
        let summed = Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b);
        let max = summed.max_component();
        if max > 1.0 {
            summed / max
        } else {
            summed
        }
    }
}

impl std::ops::AddAssign for Colour {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Mul for Colour {
    type Output = Self;

    /// Component-wise modulation, no renormalization.
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl std::ops::Mul<f64> for Colour {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        let s = rhs.abs();
        Self::new(self.r * s, self.g * s, self.b * s)
    }
}

impl std::ops::Mul<Colour> for f64 {
    type Output = Colour;
    fn mul(self, rhs: Colour) -> Colour {
        rhs * self
    }
}

impl std::ops::Div<f64> for Colour {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        self * (1.0 / rhs.abs())
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        (self.r - other.r).abs() < COLOUR_EPS
            && (self.g - other.g).abs() < COLOUR_EPS
            && (self.b - other.b).abs() < COLOUR_EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_saturates_to_at_most_one() {
        let c = Colour::new(0.9, 0.9, 0.9) + Colour::new(0.9, 0.9, 0.9);
        assert!(c.r() <= 1.0 && c.g() <= 1.0 && c.b() <= 1.0);
    }

    #[test]
    fn add_preserves_hue_on_saturation() {
        let c = Colour::new(2.0, 1.0, 0.0) + BLACK;
        // max component (2.0 -> divided down to 1.0) keeps the 2:1 ratio.
        assert_eq!(c, Colour::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn scale_by_black_is_black() {
        assert_eq!(3.0 * BLACK, BLACK);
    }

    #[test]
    fn modulate_by_white_is_identity() {
        assert_eq!(RED * WHITE, RED);
    }

    #[test]
    fn add_is_commutative_up_to_rounding() {
        let a = Colour::new(0.3, 0.6, 0.9);
        let b = Colour::new(0.4, 0.1, 0.2);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn to_bytes_rounds_down() {
        let c = Colour::new(1.0, 0.5, 0.0);
        assert_eq!(c.to_bytes(), [255, 127, 0]);
    }
}
