use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::draw::DrawEvent;

/// Seeded group draw: each pot is shuffled independently (uniform
/// Fisher-Yates via `SliceRandom`), then shuffled pot member `k` lands in
/// group `k mod group_count`. With pot size equal to the group count every
/// group receives exactly one team per pot.
///
/// Pots and the rng are explicit inputs; nothing here is process state.
pub struct GroupDraw;

impl GroupDraw {
    /// Shuffle the pots and lay the result out as a reveal sequence. The
    /// randomness is spent here; iterating the sequence is deterministic and
    /// side-effect free, so a display layer can consume one event per tick.
    pub fn start<R: Rng + ?Sized>(
        pots: &[Vec<String>],
        group_count: usize,
        rng: &mut R,
    ) -> DrawSequence {
        let shuffled = pots
            .iter()
            .map(|pot| {
                let mut pot = pot.clone();
                pot.shuffle(rng);
                pot
            })
            .collect();

        DrawSequence {
            pots: shuffled,
            group_count,
            pot: 0,
            index: 0,
        }
    }

    /// Run the whole draw eagerly and return the team names per group.
    pub fn assign<R: Rng + ?Sized>(
        pots: &[Vec<String>],
        group_count: usize,
        rng: &mut R,
    ) -> Vec<Vec<String>> {
        let mut groups = vec![Vec::new(); group_count];
        for event in Self::start(pots, group_count, rng) {
            groups[event.group_index].push(event.team);
        }
        groups
    }
}

/// Lazy sequence of draw events: pot 1 in shuffled order, then pot 2, and so
/// on. Pacing (the animated reveal) belongs to the consumer.
pub struct DrawSequence {
    pots: Vec<Vec<String>>,
    group_count: usize,
    pot: usize,
    index: usize,
}

impl Iterator for DrawSequence {
    type Item = DrawEvent;

    fn next(&mut self) -> Option<DrawEvent> {
        if self.group_count == 0 {
            return None;
        }

        while self.pot < self.pots.len() && self.index >= self.pots[self.pot].len() {
            self.pot += 1;
            self.index = 0;
        }
        let pot = self.pots.get(self.pot)?;

        let event = DrawEvent {
            pot: self.pot + 1,
            team: pot[self.index].clone(),
            group_index: self.index % self.group_count,
        };
        self.index += 1;
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pots(pot_count: usize, pot_size: usize) -> Vec<Vec<String>> {
        (0..pot_count)
            .map(|p| {
                (0..pot_size)
                    .map(|t| format!("Team {}-{}", p + 1, t + 1))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_each_group_gets_one_team_per_pot() {
        let mut rng = StdRng::seed_from_u64(7);
        let groups = GroupDraw::assign(&pots(3, 8), 8, &mut rng);

        assert_eq!(groups.len(), 8);
        for group in &groups {
            assert_eq!(group.len(), 3);
            let pots_seen: HashSet<char> = group
                .iter()
                .map(|name| name.chars().nth(5).unwrap())
                .collect();
            assert_eq!(pots_seen.len(), 3, "group {:?} repeats a pot", group);
        }
    }

    #[test]
    fn test_draw_is_a_complete_partition() {
        let source = pots(3, 8);
        let mut rng = StdRng::seed_from_u64(42);
        let groups = GroupDraw::assign(&source, 8, &mut rng);

        let mut drawn: Vec<String> = groups.into_iter().flatten().collect();
        let mut expected: Vec<String> = source.into_iter().flatten().collect();
        drawn.sort();
        expected.sort();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let source = pots(2, 4);
        let first = GroupDraw::assign(&source, 4, &mut StdRng::seed_from_u64(99));
        let second = GroupDraw::assign(&source, 4, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_events_reveal_pots_in_sequence() {
        let source = pots(3, 4);
        let mut rng = StdRng::seed_from_u64(5);
        let events: Vec<DrawEvent> = GroupDraw::start(&source, 4, &mut rng).collect();

        assert_eq!(events.len(), 12);
        let pot_order: Vec<usize> = events.iter().map(|e| e.pot).collect();
        assert_eq!(pot_order, vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
        let group_order: Vec<usize> = events.iter().map(|e| e.group_index).collect();
        assert_eq!(group_order, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn test_oversized_pot_wraps_around_groups() {
        // 6 teams into 4 groups: positions 4 and 5 wrap to groups 0 and 1.
        let source = vec![(0..6).map(|t| format!("Team 1-{t}")).collect()];
        let mut rng = StdRng::seed_from_u64(3);
        let events: Vec<DrawEvent> = GroupDraw::start(&source, 4, &mut rng).collect();

        let group_order: Vec<usize> = events.iter().map(|e| e.group_index).collect();
        assert_eq!(group_order, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_zero_groups_yields_no_events() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(GroupDraw::start(&pots(1, 4), 0, &mut rng).count(), 0);
    }
}
