use apricot_ipc::{Direction, HorizontalDirection, SnapTarget, VerticalDirection};

/// The most recent directional press, kept so that an immediate press on
/// the other axis can combine with it into a corner. Holds at most one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AxisMemory {
    #[default]
    Empty,
    Horizontal(HorizontalDirection),
    Vertical(VerticalDirection),
}

impl AxisMemory {
    pub fn remembering(direction: Direction) -> Self {
        match direction {
            Direction::Left => AxisMemory::Horizontal(HorizontalDirection::Left),
            Direction::Right => AxisMemory::Horizontal(HorizontalDirection::Right),
            Direction::Up => AxisMemory::Vertical(VerticalDirection::Up),
            Direction::Down => AxisMemory::Vertical(VerticalDirection::Down),
        }
    }

    pub fn pending(self) -> Option<Direction> {
        match self {
            AxisMemory::Empty => None,
            AxisMemory::Horizontal(h) => Some(h.into()),
            AxisMemory::Vertical(v) => Some(v.into()),
        }
    }

    pub fn is_empty(self) -> bool {
        self == AxisMemory::Empty
    }
}

/// Resolve a directional press against the remembered one.
///
/// A press on the opposite axis of the remembered direction forms a corner
/// when corners are enabled; anything else yields the plain half. Either
/// way the returned memory holds only `input`.
pub fn transition(
    memory: AxisMemory,
    input: Direction,
    corners_enabled: bool,
) -> (SnapTarget, AxisMemory) {
    let next = AxisMemory::remembering(input);
    if !corners_enabled {
        return (input.half(), next);
    }

    let target = match (memory, next) {
        (AxisMemory::Horizontal(h), AxisMemory::Vertical(v))
        | (AxisMemory::Vertical(v), AxisMemory::Horizontal(h)) => SnapTarget::corner(h, v),
        _ => input.half(),
    };

    (target, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMORIES: [AxisMemory; 5] = [
        AxisMemory::Empty,
        AxisMemory::Horizontal(HorizontalDirection::Left),
        AxisMemory::Horizontal(HorizontalDirection::Right),
        AxisMemory::Vertical(VerticalDirection::Up),
        AxisMemory::Vertical(VerticalDirection::Down),
    ];

    fn run(sequence: &[Direction], corners_enabled: bool) -> Vec<SnapTarget> {
        let mut memory = AxisMemory::Empty;
        sequence
            .iter()
            .map(|&input| {
                let (target, next) = transition(memory, input, corners_enabled);
                memory = next;
                target
            })
            .collect()
    }

    #[test]
    fn test_first_press_is_half() {
        for direction in Direction::ALL {
            let (target, memory) = transition(AxisMemory::Empty, direction, true);
            assert_eq!(target, direction.half());
            assert_eq!(memory.pending(), Some(direction));
        }
    }

    #[test]
    fn test_axis_switch_forms_corner() {
        use Direction::*;

        assert_eq!(run(&[Left, Up], true)[1], SnapTarget::TopLeft);
        assert_eq!(run(&[Right, Up], true)[1], SnapTarget::TopRight);
        assert_eq!(run(&[Left, Down], true)[1], SnapTarget::BottomLeft);
        assert_eq!(run(&[Right, Down], true)[1], SnapTarget::BottomRight);
    }

    #[test]
    fn test_chaining_is_order_independent() {
        use Direction::*;

        assert_eq!(run(&[Left, Up], true), vec![SnapTarget::Left, SnapTarget::TopLeft]);
        assert_eq!(run(&[Up, Left], true), vec![SnapTarget::Top, SnapTarget::TopLeft]);
        assert_eq!(run(&[Down, Right], true)[1], SnapTarget::BottomRight);
        assert_eq!(run(&[Right, Down], true)[1], SnapTarget::BottomRight);
    }

    #[test]
    fn test_same_axis_never_chains() {
        use Direction::*;

        for corners_enabled in [true, false] {
            assert_eq!(run(&[Left, Right], corners_enabled)[1], SnapTarget::Right);
            assert_eq!(run(&[Up, Down], corners_enabled)[1], SnapTarget::Bottom);
            assert_eq!(run(&[Left, Left], corners_enabled)[1], SnapTarget::Left);
        }
    }

    #[test]
    fn test_same_axis_press_overwrites_memory() {
        use Direction::*;

        // Right replaces Left, so Up pairs with Right
        assert_eq!(
            run(&[Left, Right, Up], true),
            vec![SnapTarget::Left, SnapTarget::Right, SnapTarget::TopRight]
        );
    }

    #[test]
    fn test_corner_keeps_only_latest_press() {
        use Direction::*;

        // Up is remembered after the first corner, the consumed Left is not
        assert_eq!(
            run(&[Left, Up, Right], true),
            vec![SnapTarget::Left, SnapTarget::TopLeft, SnapTarget::TopRight]
        );

        let (_, memory) = transition(
            AxisMemory::Horizontal(HorizontalDirection::Left),
            Up,
            true,
        );
        assert_eq!(memory, AxisMemory::Vertical(VerticalDirection::Up));
    }

    #[test]
    fn test_corners_disabled_only_yields_halves() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                for c in Direction::ALL {
                    let targets = run(&[a, b, c], false);
                    assert_eq!(targets, vec![a.half(), b.half(), c.half()]);
                }
            }
        }
    }

    #[test]
    fn test_transition_is_total_and_remembers_input() {
        for memory in MEMORIES {
            for input in Direction::ALL {
                for corners_enabled in [true, false] {
                    let (target, next) = transition(memory, input, corners_enabled);
                    assert_eq!(next.pending(), Some(input));
                    assert!(target.is_half() || target.is_corner());

                    let crosses_axis = memory
                        .pending()
                        .is_some_and(|held| held.axis() != input.axis());
                    assert_eq!(target.is_corner(), corners_enabled && crosses_axis);
                }
            }
        }
    }

    #[test]
    fn test_pending_round_trips_direction() {
        for direction in Direction::ALL {
            assert_eq!(AxisMemory::remembering(direction).pending(), Some(direction));
        }
        assert_eq!(AxisMemory::Empty.pending(), None);
        assert!(AxisMemory::default().is_empty());
    }
}
