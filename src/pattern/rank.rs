use super::Segment;

const SEGMENT_POINTS: i32 = 4;
const STATIC_POINTS: i32 = 3;
const DYNAMIC_POINTS: i32 = 2;
const ROOT_POINTS: i32 = 1;
const SPLAT_PENALTY: i32 = 1;

/// Specificity of a pattern. Higher ranks are tried first.
///
/// Ranks compare by weighted score, then by segment count. Two patterns with
/// equal ranks are resolved by declaration order at match time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank {
    score: i32,
    segments: u32,
}

impl Rank {
    /// `prefix` ranks the pattern as if it ended with an implicit splat.
    pub(crate) fn of(segments: &[Segment], prefix: bool) -> Self {
        if segments.is_empty() && !prefix {
            return Self {
                score: SEGMENT_POINTS + ROOT_POINTS,
                segments: 0,
            };
        }

        let mut score = segments.iter().map(segment_points).sum::<i32>();
        let mut count = segments.len() as u32;

        let ends_with_splat = matches!(segments.last(), Some(Segment::Splat));
        if prefix && !ends_with_splat {
            score += segment_points(&Segment::Splat);
            count += 1;
        }

        Self {
            score,
            segments: count,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }
}

#[inline]
fn segment_points(segment: &Segment) -> i32 {
    match segment {
        Segment::Static(_) => SEGMENT_POINTS + STATIC_POINTS,
        Segment::Dynamic(_) => SEGMENT_POINTS + DYNAMIC_POINTS,
        Segment::Splat => -SPLAT_PENALTY,
    }
}
