//! Random placeholder fragments for a fresh timeline.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{GENERATED_MAX_LENGTH_SECONDS, GENERATED_START_SPREAD_SECONDS};
use crate::state::{Fragment, FragmentLabel, Timeline, TimelineRow};

const FIRST_WORDS: [&str; 10] = [
    "sister", "mint", "disapprove", "force", "legal",
    "title", "highfalutin", "mass", "receptive", "airport",
];

const SECOND_WORDS: [&str; 10] = [
    "consist", "sheep", "matter", "lonely", "wholesale",
    "harbor", "horn", "furniture", "moon", "pet",
];

/// Two random words, e.g. "mint harbor".
pub fn random_word_pair<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_WORDS.choose(rng).copied().unwrap_or("untitled");
    let second = SECOND_WORDS.choose(rng).copied().unwrap_or("fragment");
    format!("{} {}", first, second)
}

/// A fragment starting somewhere in ±spread seconds with a random length.
pub fn random_fragment<R: Rng>(rng: &mut R) -> Fragment<FragmentLabel> {
    let spread = GENERATED_START_SPREAD_SECONDS;
    let start = rng.gen_range(-spread..spread);
    let end = start + rng.gen_range(0.0..GENERATED_MAX_LENGTH_SECONDS);
    Fragment::new(start, end, FragmentLabel::new(random_word_pair(rng)))
}

/// A timeline with `per_row` random fragments on every row.
pub fn populate<R: Rng>(rng: &mut R, per_row: usize) -> Timeline<FragmentLabel> {
    let mut timeline = Timeline::empty();
    for row in TimelineRow::ALL {
        for _ in 0..per_row {
            timeline.push(row, random_fragment(rng));
        }
    }
    tracing::debug!(per_row, total = timeline.len(), "generated random fragments");
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_fragment_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let f = random_fragment(&mut rng);
            assert!(f.start >= -GENERATED_START_SPREAD_SECONDS);
            assert!(f.start < GENERATED_START_SPREAD_SECONDS);
            assert!(f.duration() >= 0.0);
            assert!(f.duration() < GENERATED_MAX_LENGTH_SECONDS);
            assert_eq!(f.data.label.split(' ').count(), 2);
        }
    }

    #[test]
    fn test_populate_fills_every_row() {
        let mut rng = StdRng::seed_from_u64(42);
        let timeline = populate(&mut rng, 4);
        for row in TimelineRow::ALL {
            assert_eq!(timeline.get(row).len(), 4);
        }
        assert_eq!(timeline.len(), 28);
    }
}
