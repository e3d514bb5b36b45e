//! Conversions between timeline time (seconds) and viewport pixels.

/// Maps time to pixels for the visible window.
///
/// `pixel_width` is the measured width of the tracks container; it is `None`
/// until the first layout pass reports it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    /// Seconds visible across the viewport.
    pub scale: f64,
    /// Time at the left edge, in seconds.
    pub position: f64,
    pub pixel_width: Option<f64>,
}

impl CoordinateMapper {
    pub fn new(scale: f64, position: f64, pixel_width: Option<f64>) -> Self {
        Self {
            scale,
            position,
            pixel_width,
        }
    }

    /// Width usable for conversions, if layout has happened.
    pub fn ready_width(&self) -> Option<f64> {
        self.pixel_width.filter(|width| *width > 0.0 && self.scale > 0.0)
    }

    pub fn is_ready(&self) -> bool {
        self.ready_width().is_some()
    }

    /// Pixel offset of `time`, floored to a whole pixel. 0 before layout.
    pub fn time_to_pixel(&self, time: f64) -> f64 {
        match self.ready_width() {
            Some(width) => (width * (time - self.position) / self.scale).floor(),
            None => 0.0,
        }
    }

    /// Time at pixel offset `pixel`.
    pub fn pixel_to_time(&self, pixel: f64) -> Option<f64> {
        self.ready_width()
            .map(|width| (pixel / width) * self.scale + self.position)
    }

    /// Duration covered by `pixels`, independent of position.
    pub fn pixel_to_duration(&self, pixels: f64) -> Option<f64> {
        self.ready_width().map(|width| (pixels / width) * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_pixel_floors() {
        let mapper = CoordinateMapper::new(60.0, 0.0, Some(500.0));
        // 500 * 10 / 60 = 83.33
        assert_eq!(mapper.time_to_pixel(10.0), 83.0);
        // -0.5 floors down, not toward zero
        assert_eq!(mapper.time_to_pixel(-0.06), -1.0);
    }

    #[test]
    fn test_not_ready_is_neutral() {
        let mapper = CoordinateMapper::new(60.0, 0.0, None);
        assert_eq!(mapper.time_to_pixel(25.0), 0.0);
        assert_eq!(mapper.pixel_to_time(100.0), None);
        assert_eq!(mapper.pixel_to_duration(30.0), None);

        let zero_width = CoordinateMapper::new(60.0, 0.0, Some(0.0));
        assert!(!zero_width.is_ready());
    }

    #[test]
    fn test_pixel_to_duration_ignores_position() {
        let mapper = CoordinateMapper::new(60.0, 42.0, Some(600.0));
        assert_eq!(mapper.pixel_to_duration(30.0), Some(3.0));
        assert_eq!(mapper.pixel_to_time(30.0), Some(45.0));
    }

    #[test]
    fn test_time_round_trip_within_one_pixel() {
        let cases = [
            (60.0, 0.0, 600.0),
            (60.0, -17.3, 500.0),
            (7.5, 120.25, 1333.0),
            (3600.0, -900.0, 820.0),
        ];
        for (scale, position, width) in cases {
            let mapper = CoordinateMapper::new(scale, position, Some(width));
            let one_pixel = scale / width;
            let mut t = position - scale;
            while t < position + 2.0 * scale {
                let back = mapper.pixel_to_time(mapper.time_to_pixel(t)).unwrap();
                assert!((back - t).abs() <= one_pixel + 1e-9, "t={t} back={back}");
                t += scale / 37.0;
            }
        }
    }

    #[test]
    fn test_pixel_round_trip_within_one_pixel() {
        let mapper = CoordinateMapper::new(59.0, 0.5, Some(600.0));
        for p in -300..900 {
            let p = p as f64;
            let back = mapper.time_to_pixel(mapper.pixel_to_time(p).unwrap());
            assert!((back - p).abs() <= 1.0, "p={p} back={back}");
        }
    }
}
