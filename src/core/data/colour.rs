/// Colour with floating point channels, each expected in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Quantises each channel to a byte, clamping out-of-range values.
    #[must_use]
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ]
    }
}

fn channel_to_u8(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Hue, saturation and lightness.
///
/// `hue` is measured in turns and is not range-checked: any real value is
/// folded back into one turn during conversion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let Self {
            hue,
            saturation,
            lightness,
        } = *self;

        if saturation == 0.0 {
            return Rgb {
                r: lightness,
                g: lightness,
                b: lightness,
            };
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Rgb {
            r: hue_to_rgb(p, q, hue + 1.0 / 3.0),
            g: hue_to_rgb(p, q, hue),
            b: hue_to_rgb(p, q, hue - 1.0 / 3.0),
        }
    }
}

/// Evaluates one RGB channel from the HSL intermediates `p` and `q` at hue `t`.
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
