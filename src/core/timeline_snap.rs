use crate::state::SnapPoints;

use super::coords::CoordinateMapper;

/// Edge of the dragged fragment that matched a snap point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapEdge {
    /// Fragment start lands on the point.
    Start,
    /// Fragment end lands on the point.
    End,
}

/// Result of a snap query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapMatch {
    /// Pixel-left the fragment should take so the matched edge sits on the point.
    pub pixel_left: f64,
    /// The snap point time.
    pub time: f64,
    pub edge: SnapEdge,
}

/// Find a snap for a fragment spanning `start..end` within `threshold_px`.
///
/// Rows are scanned in display order and points in insertion order; the last
/// point within reach wins. A start match takes precedence over an end match
/// for the same point.
pub fn find_snap(
    start: f64,
    end: f64,
    snap_points: &SnapPoints,
    threshold_px: f64,
    mapper: &CoordinateMapper,
) -> Option<SnapMatch> {
    let threshold = mapper.pixel_to_duration(threshold_px)?;
    let duration = end - start;
    let mut found = None;

    for (_, points) in snap_points.iter() {
        for &point in points {
            if (point - start).abs() <= threshold {
                found = Some(SnapMatch {
                    pixel_left: mapper.time_to_pixel(point),
                    time: point,
                    edge: SnapEdge::Start,
                });
            } else if (point - end).abs() <= threshold {
                found = Some(SnapMatch {
                    pixel_left: mapper.time_to_pixel(point - duration),
                    time: point,
                    edge: SnapEdge::End,
                });
            }
        }
    }

    found
}

/// Pixel-left for a snapped fragment, if any point is within reach.
pub fn find_snap_pixel(
    start: f64,
    end: f64,
    snap_points: &SnapPoints,
    threshold_px: f64,
    mapper: &CoordinateMapper,
) -> Option<f64> {
    find_snap(start, end, snap_points, threshold_px, mapper).map(|hit| {
        tracing::trace!(edge = ?hit.edge, time = hit.time, "fragment snapped");
        hit.pixel_left
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{RowMap, TimelineRow};

    fn audio_points(points: &[f64]) -> SnapPoints {
        let mut snap_points = SnapPoints::default();
        *snap_points.get_mut(TimelineRow::Audio) = points.to_vec();
        snap_points
    }

    // 30 px of 600 at 60 s visible = 3 s
    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(60.0, 0.0, Some(600.0))
    }

    #[test]
    fn test_start_snaps_to_nearby_point() {
        let points = audio_points(&[5.0, 15.0]);
        let mapper = mapper();
        let pixel = find_snap_pixel(6.0, 8.0, &points, 30.0, &mapper);
        assert_eq!(pixel, Some(mapper.time_to_pixel(5.0)));
        assert_eq!(pixel, Some(50.0));
    }

    #[test]
    fn test_far_candidate_does_not_snap() {
        let points = audio_points(&[5.0, 15.0]);
        assert_eq!(find_snap_pixel(50.0, 60.0, &points, 30.0, &mapper()), None);
    }

    #[test]
    fn test_end_snap_shifts_start() {
        let points = audio_points(&[40.0]);
        let mapper = mapper();
        let hit = find_snap(28.0, 38.5, &points, 30.0, &mapper).unwrap();
        assert_eq!(hit.edge, SnapEdge::End);
        assert_eq!(hit.time, 40.0);
        assert_eq!(hit.pixel_left, mapper.time_to_pixel(29.5));
    }

    #[test]
    fn test_last_match_wins_across_rows() {
        let mut points = audio_points(&[5.0]);
        *points.get_mut(TimelineRow::Text) = vec![7.0];
        let mapper = mapper();
        let hit = find_snap(6.0, 9.0, &points, 30.0, &mapper).unwrap();
        // both within 3 s of start; text comes after audio
        assert_eq!(hit.time, 7.0);
    }

    #[test]
    fn test_not_ready_mapper_never_snaps() {
        let points = audio_points(&[5.0]);
        let mapper = CoordinateMapper::new(60.0, 0.0, None);
        assert_eq!(find_snap(5.0, 6.0, &points, 30.0, &mapper), None);
    }

    #[test]
    fn test_empty_rows_never_snap() {
        let points: SnapPoints = RowMap::default();
        assert_eq!(find_snap(5.0, 6.0, &points, 30.0, &mapper()), None);
    }
}
