//! Path reconstruction for bidirectional meetings.

use klotski_core::MoveRecord;

/// One continuous start-to-goal move list: the forward path up to the
/// meeting point, then the backward path reversed with every record
/// role-swapped. The backward list was recorded walking from the goal
/// toward the meeting point, the temporal opposite of executing the
/// solution, so both the order and the from/to roles flip.
pub(crate) fn stitch(forward: &[MoveRecord], backward: &[MoveRecord]) -> Vec<MoveRecord> {
    let mut path = Vec::with_capacity(forward.len() + backward.len());
    path.extend_from_slice(forward);
    path.extend(backward.iter().rev().map(|mv| mv.reversed()));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stitch_reverses_and_swaps() {
        let forward = [MoveRecord::new(1, 1, 0, 1, 1)];
        let backward = [
            // recorded goal-side: last of these is adjacent to the meeting point
            MoveRecord::new(1, 1, 3, 1, 2),
            MoveRecord::new(1, 1, 2, 1, 1),
        ];
        let path = stitch(&forward, &backward);
        assert_eq!(
            path,
            vec![
                MoveRecord::new(1, 1, 0, 1, 1),
                MoveRecord::new(1, 1, 1, 1, 2),
                MoveRecord::new(1, 1, 2, 1, 3),
            ]
        );
    }

    #[test]
    fn test_stitch_empty_sides() {
        let mv = MoveRecord::new(2, 0, 0, 0, 1);
        assert_eq!(stitch(&[], &[]), vec![]);
        assert_eq!(stitch(&[mv], &[]), vec![mv]);
        assert_eq!(stitch(&[], &[mv]), vec![mv.reversed()]);
    }
}
