//! Fragment store: every row's fragments, in insertion order.

use uuid::Uuid;

use super::{Fragment, RowMap, TimelineRow};

/// Fragments for every row. Rows may overlap; order is insertion order.
pub type Timeline<T> = RowMap<Vec<Fragment<T>>>;

/// Snap candidates per row: starts and ends of other fragments.
pub type SnapPoints = RowMap<Vec<f64>>;

impl<T> RowMap<Vec<Fragment<T>>> {
    /// A timeline with every row present and empty.
    pub fn empty() -> Self {
        RowMap::from_fn(|_| Vec::new())
    }

    pub fn push(&mut self, row: TimelineRow, fragment: Fragment<T>) {
        self.get_mut(row).push(fragment);
    }

    pub fn find(&self, row: TimelineRow, id: Uuid) -> Option<&Fragment<T>> {
        self.get(row).iter().find(|f| f.id == id)
    }

    /// Total fragment count across all rows.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, fragments)| fragments.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move a fragment to `new_start`, shifting its end by the same delta.
    ///
    /// Returns false when the fragment is not on that row.
    pub fn shift_fragment(&mut self, row: TimelineRow, id: Uuid, new_start: f64) -> bool {
        match self.get_mut(row).iter_mut().find(|f| f.id == id) {
            Some(fragment) => {
                fragment.shift_to(new_start);
                true
            }
            None => false,
        }
    }

    /// Start and end of every fragment except `exclude`, grouped by row.
    pub fn snap_points_excluding(&self, exclude: Uuid) -> SnapPoints {
        RowMap::from_fn(|row| {
            self.get(row)
                .iter()
                .filter(|f| f.id != exclude)
                .flat_map(|f| [f.start, f.end])
                .collect()
        })
    }

    /// Latest end time over all rows, or 0 for an empty timeline.
    pub fn end_time(&self) -> f64 {
        self.iter()
            .flat_map(|(_, fragments)| fragments.iter().map(|f| f.end))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FragmentLabel;

    fn fragment(start: f64, end: f64) -> Fragment<FragmentLabel> {
        Fragment::new(start, end, FragmentLabel::new("test"))
    }

    #[test]
    fn test_empty_has_every_row() {
        let timeline = Timeline::<FragmentLabel>::empty();
        for row in TimelineRow::ALL {
            assert!(timeline.get(row).is_empty());
        }
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_shift_fragment_preserves_duration() {
        let mut timeline = Timeline::empty();
        let f = fragment(10.0, 20.0);
        let id = f.id;
        timeline.push(TimelineRow::Gesture, f);

        assert!(timeline.shift_fragment(TimelineRow::Gesture, id, 16.0));
        let moved = timeline.find(TimelineRow::Gesture, id).unwrap();
        assert_eq!(moved.start, 16.0);
        assert_eq!(moved.end, 26.0);
    }

    #[test]
    fn test_shift_fragment_wrong_row_is_noop() {
        let mut timeline = Timeline::empty();
        let f = fragment(10.0, 20.0);
        let id = f.id;
        timeline.push(TimelineRow::Gesture, f);

        assert!(!timeline.shift_fragment(TimelineRow::Audio, id, 0.0));
        assert_eq!(timeline.find(TimelineRow::Gesture, id).unwrap().start, 10.0);
    }

    #[test]
    fn test_snap_points_exclude_dragged_fragment() {
        let mut timeline = Timeline::empty();
        let dragged = fragment(0.0, 1.0);
        let dragged_id = dragged.id;
        timeline.push(TimelineRow::Audio, dragged);
        timeline.push(TimelineRow::Audio, fragment(5.0, 15.0));
        timeline.push(TimelineRow::Text, fragment(30.0, 40.0));

        let points = timeline.snap_points_excluding(dragged_id);
        assert_eq!(points.get(TimelineRow::Audio), &vec![5.0, 15.0]);
        assert_eq!(points.get(TimelineRow::Text), &vec![30.0, 40.0]);
        assert!(points.get(TimelineRow::Clothes).is_empty());
    }

    #[test]
    fn test_end_time() {
        let mut timeline = Timeline::empty();
        assert_eq!(timeline.end_time(), 0.0);
        timeline.push(TimelineRow::Clothes, fragment(-30.0, 12.0));
        timeline.push(TimelineRow::Background, fragment(3.0, 45.0));
        assert_eq!(timeline.end_time(), 45.0);
    }
}
