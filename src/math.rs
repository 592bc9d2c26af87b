//! Color math: direct conversions without external dependencies.
//! RGB channels use normalized f64 in 0.0–1.0; Lab/LCh use CIE units
//! (L 0–100, hue in degrees) against a D50 white point.

/// D50 reference white.
const XN: f64 = 0.96422;
const YN: f64 = 1.0;
const ZN: f64 = 0.82521;

const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// Cylindrical CIE Lab color.
///
/// `h` is `None` for achromatic colors. `c` is `None` for pure black and
/// pure white, whose chroma is undefined; other grays have a chroma of 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hcl {
    pub h: Option<f64>,
    pub c: Option<f64>,
    pub l: f64,
}

/// Lightness closer than this to 0 or 100 counts as pure black or white.
const L_EDGE: f64 = 1e-6;

fn srgb_to_linear(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

fn xyz_to_lab_f(t: f64) -> f64 {
    if t > T3 {
        t.cbrt()
    } else {
        t / T2 + T0
    }
}

fn lab_to_xyz_f(t: f64) -> f64 {
    if t > T1 {
        t * t * t
    } else {
        T2 * (t - T0)
    }
}

/// RGB → CIE Lab. RGB 0.0–1.0.
pub(crate) fn rgb_to_lab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = srgb_to_linear(r);
    let g = srgb_to_linear(g);
    let b = srgb_to_linear(b);
    let y = xyz_to_lab_f((0.222_504_5 * r + 0.716_878_6 * g + 0.060_616_9 * b) / YN);
    let (x, z) = if r == g && g == b {
        (y, y)
    } else {
        (
            xyz_to_lab_f((0.436_074_7 * r + 0.385_064_9 * g + 0.143_080_4 * b) / XN),
            xyz_to_lab_f((0.013_932_2 * r + 0.097_104_5 * g + 0.714_173_3 * b) / ZN),
        )
    };
    (116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
}

/// CIE Lab → RGB. Output is clamped to 0.0–1.0.
pub(crate) fn lab_to_rgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let y = (l + 16.0) / 116.0;
    let x = XN * lab_to_xyz_f(y + a / 500.0);
    let z = ZN * lab_to_xyz_f(y - b / 200.0);
    let y = YN * lab_to_xyz_f(y);
    let r = linear_to_srgb(3.133_856_1 * x - 1.616_866_7 * y - 0.490_614_6 * z);
    let g = linear_to_srgb(-0.978_768_4 * x + 1.916_141_5 * y + 0.033_454 * z);
    let bl = linear_to_srgb(0.071_945_3 * x - 0.228_991_4 * y + 1.405_242_7 * z);
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), bl.clamp(0.0, 1.0))
}

/// RGB → HCL. RGB 0.0–1.0.
pub(crate) fn rgb_to_hcl(r: f64, g: f64, b: f64) -> Hcl {
    let (l, a, bb) = rgb_to_lab(r, g, b);
    let c = (a * a + bb * bb).sqrt();
    // Below this chroma the hue is numerically meaningless.
    if c < 1e-9 {
        let c = (l > L_EDGE && l < 100.0 - L_EDGE).then_some(0.0);
        return Hcl { h: None, c, l };
    }
    let h = bb.atan2(a).to_degrees();
    Hcl {
        h: Some(h.rem_euclid(360.0)),
        c: Some(c),
        l,
    }
}

/// HCL → RGB. Output is clamped to 0.0–1.0.
pub(crate) fn hcl_to_rgb(hcl: Hcl) -> (f64, f64, f64) {
    let (a, b) = match (hcl.h, hcl.c) {
        (Some(h), Some(c)) => {
            let rad = h.to_radians();
            (rad.cos() * c, rad.sin() * c)
        }
        _ => (0.0, 0.0),
    };
    lab_to_rgb(hcl.l, a, b)
}

/// Interpolate hue along the shorter way around the circle.
///
/// A missing hue (achromatic endpoint) takes the other endpoint's hue.
fn lerp_hue(from: Option<f64>, to: Option<f64>, t: f64) -> Option<f64> {
    match (from, to) {
        (Some(a), Some(b)) => {
            let mut d = b - a;
            if d > 180.0 {
                d -= 360.0;
            } else if d < -180.0 {
                d += 360.0;
            }
            Some((a + d * t).rem_euclid(360.0))
        }
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Linear interpolation where a missing endpoint takes the other's value.
fn lerp_defined(from: Option<f64>, to: Option<f64>, t: f64) -> Option<f64> {
    match (from, to) {
        (Some(a), Some(b)) => Some(a + (b - a) * t),
        (a, b) => a.or(b),
    }
}

/// Interpolate two HCL colors at `t` (0.0–1.0).
pub(crate) fn lerp_hcl(from: Hcl, to: Hcl, t: f64) -> Hcl {
    Hcl {
        h: lerp_hue(from.h, to.h, t),
        c: lerp_defined(from.c, to.c, t),
        l: from.l + (to.l - from.l) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-4 && (a.1 - b.1).abs() < 1e-4 && (a.2 - b.2).abs() < 1e-4
    }

    #[test]
    fn lab_of_white_and_black() {
        let (l, a, b) = rgb_to_lab(1.0, 1.0, 1.0);
        assert!((l - 100.0).abs() < 1e-3);
        assert!(a.abs() < 1e-9 && b.abs() < 1e-9);
        let (l, _, _) = rgb_to_lab(0.0, 0.0, 0.0);
        assert!(l.abs() < 1e-9);
    }

    #[test]
    fn hcl_round_trips_saturated_colors() {
        for rgb in [(1.0, 0.596, 0.0), (1.0, 0.812, 0.0), (0.1, 0.4, 0.9), (0.3, 0.3, 0.3)] {
            let back = hcl_to_rgb(rgb_to_hcl(rgb.0, rgb.1, rgb.2));
            assert!(close(rgb, back), "{rgb:?} -> {back:?}");
        }
    }

    #[test]
    fn gray_has_no_hue() {
        assert_eq!(rgb_to_hcl(0.5, 0.5, 0.5).h, None);
    }

    #[test]
    fn black_and_white_have_no_chroma() {
        assert_eq!(rgb_to_hcl(1.0, 1.0, 1.0).c, None);
        assert_eq!(rgb_to_hcl(0.0, 0.0, 0.0).c, None);
        assert_eq!(rgb_to_hcl(0.5, 0.5, 0.5).c, Some(0.0));
    }

    #[test]
    fn undefined_chroma_takes_the_other_side() {
        let white = rgb_to_hcl(1.0, 1.0, 1.0);
        let orange = rgb_to_hcl(1.0, 0.596, 0.0);
        let mid = lerp_hcl(white, orange, 0.5);
        assert_eq!(mid.c, orange.c);
        assert_eq!(mid.h, orange.h);

        let gray = rgb_to_hcl(0.5, 0.5, 0.5);
        let c = lerp_hcl(gray, orange, 0.5).c.unwrap();
        assert!((c - orange.c.unwrap() / 2.0).abs() < 1e-9);

        assert_eq!(lerp_defined(None, None, 0.5), None);
    }

    #[test]
    fn hue_takes_the_short_way() {
        assert_eq!(lerp_hue(Some(350.0), Some(10.0), 0.5), Some(0.0));
        assert_eq!(lerp_hue(Some(10.0), Some(350.0), 0.25), Some(5.0));
        assert_eq!(lerp_hue(None, Some(120.0), 0.3), Some(120.0));
    }
}
