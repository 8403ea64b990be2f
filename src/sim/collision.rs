//! Player vs barrier resolution and pass scoring

use super::barrier::Barrier;
use super::player::Player;
use super::state::GameEvent;
use crate::consts::PASS_BONUS;

/// What touching a barrier means for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Hitbox fits inside the gap: award the bonus, keep falling
    Pass,
    /// Hitbox overlaps a bar: stop on its surface
    Land,
}

/// Classify the player against one barrier.
///
/// `None` while the barrier's top is still at or below the player's lower
/// edge, or once the barrier has already been scored this cycle.
pub fn check_barrier(player: &Player, barrier: &Barrier) -> Option<Contact> {
    if barrier.scored || barrier.y >= player.bottom() {
        return None;
    }
    if fits_gap(player, barrier) {
        Some(Contact::Pass)
    } else {
        Some(Contact::Land)
    }
}

/// True if the inset hitbox lies within the gap (edges inclusive)
#[inline]
pub fn fits_gap(player: &Player, barrier: &Barrier) -> bool {
    let (left, right) = player.hitbox_x();
    let (gap_start, gap_end) = barrier.gap();
    left >= gap_start && right <= gap_end
}

/// Resolve every unscored barrier in pool order.
///
/// Each barrier is judged on its own; a landing on one barrier does not stop
/// the next one from being checked against the moved player. Returns the bonus
/// earned this frame.
pub fn resolve_barriers(
    player: &mut Player,
    barriers: &mut [Barrier],
    events: &mut Vec<GameEvent>,
) -> u64 {
    let mut bonus = 0;

    for (index, barrier) in barriers.iter_mut().enumerate() {
        match check_barrier(player, barrier) {
            Some(Contact::Pass) => {
                barrier.scored = true;
                bonus += PASS_BONUS;
                log::debug!("Passed barrier {} (gap at {})", index, barrier.gap_offset);
                events.push(GameEvent::Passed {
                    barrier: index,
                    bonus: PASS_BONUS,
                });
            }
            Some(Contact::Land) => {
                player.land(barrier.y);
                log::debug!("Landed on barrier {} at y {}", index, barrier.y);
                events.push(GameEvent::Landed {
                    barrier: index,
                    surface_y: barrier.y,
                });
            }
            None => {}
        }
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player_at(x: f32, y: f32, vy: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            vel: Vec2::new(0.0, vy),
            ..Player::default()
        }
    }

    #[test]
    fn test_barrier_below_player_ignored() {
        let player = player_at(320.0, 100.0, 3.0);
        // Player bottom at 115, barrier top at 115: not yet reached
        let barrier = Barrier::new(115.0, 0);
        assert_eq!(check_barrier(&player, &barrier), None);
    }

    #[test]
    fn test_scored_barrier_ignored() {
        let player = player_at(320.0, 100.0, 3.0);
        let mut barrier = Barrier::new(110.0, 0);
        barrier.scored = true;
        assert_eq!(check_barrier(&player, &barrier), None);
    }

    #[test]
    fn test_pass_through_gap() {
        let mut player = player_at(320.0, 100.0, 3.5);
        let mut barriers = vec![Barrier::new(112.0, 245)];
        let mut events = Vec::new();

        let bonus = resolve_barriers(&mut player, &mut barriers, &mut events);

        assert_eq!(bonus, PASS_BONUS);
        assert!(barriers[0].scored);
        assert_eq!(player.vel.y, 3.5);
        assert_eq!(player.pos.y, 100.0);
        assert_eq!(
            events,
            vec![GameEvent::Passed {
                barrier: 0,
                bonus: 123
            }]
        );
    }

    #[test]
    fn test_land_outside_gap() {
        let mut player = player_at(100.0, 100.0, 6.0);
        let mut barriers = vec![Barrier::new(112.0, 300)];
        let mut events = Vec::new();

        let bonus = resolve_barriers(&mut player, &mut barriers, &mut events);

        assert_eq!(bonus, 0);
        assert!(!barriers[0].scored);
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.pos.y, 112.0 - 15.0);
        assert_eq!(
            events,
            vec![GameEvent::Landed {
                barrier: 0,
                surface_y: 112.0
            }]
        );
    }

    #[test]
    fn test_hitbox_narrower_than_box() {
        // Drawn box spans 140..170 but the hitbox only 148..162
        let player = player_at(155.0, 100.0, 0.0);
        let barrier = Barrier::new(110.0, 148);
        assert!(fits_gap(&player, &barrier));

        let barrier = Barrier::new(110.0, 149);
        assert!(!fits_gap(&player, &barrier));
    }

    #[test]
    fn test_gap_edges_inclusive() {
        let barrier = Barrier::new(110.0, 100);
        // Right hitbox edge exactly at the gap end (250)
        assert!(fits_gap(&player_at(243.0, 100.0, 0.0), &barrier));
        assert!(!fits_gap(&player_at(243.5, 100.0, 0.0), &barrier));
    }

    #[test]
    fn test_every_barrier_checked() {
        // Two barriers crossing the same frame: one lands, the next is
        // judged against the moved player.
        let mut player = player_at(100.0, 100.0, 8.0);
        let mut barriers = vec![Barrier::new(110.0, 300), Barrier::new(105.0, 300)];
        let mut events = Vec::new();

        resolve_barriers(&mut player, &mut barriers, &mut events);

        assert_eq!(events.len(), 2);
        assert_eq!(player.bottom(), 105.0);
    }

    #[test]
    fn test_land_then_pass_in_same_frame() {
        let mut player = player_at(320.0, 100.0, 8.0);
        let mut barriers = vec![Barrier::new(112.0, 0), Barrier::new(110.0, 245)];
        let mut events = Vec::new();

        let bonus = resolve_barriers(&mut player, &mut barriers, &mut events);

        assert_eq!(bonus, PASS_BONUS);
        assert!(!barriers[0].scored);
        assert!(barriers[1].scored);
        assert_eq!(player.bottom(), 112.0);
    }
}
