use crate::cards::Rank;

/// Whether five ranks form a straight, and its resolved high card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from five ranks in any order.
    /// The wheel (A-2-3-4-5) resolves to a Five-high straight.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_unstable();
        let distinct = sorted.windows(2).all(|w| w[0] != w[1]);

        if distinct && sorted[4].value() - sorted[0].value() == 4 {
            return StraightInfo { is_straight: true, top_rank: Some(sorted[4]) };
        }
        if sorted == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five) };
        }
        StraightInfo { is_straight: false, top_rank: None }
    }
}

/// True when the ranks are distinct and all fit inside one five-rank window,
/// counting the Ace as either high or low. Four such ranks are a straight draw.
pub fn fits_straight_window(ranks: &[Rank]) -> bool {
    if ranks.is_empty() || ranks.len() > 5 {
        return false;
    }
    let mut seen = 0u16;
    for r in ranks {
        let bit = 1u16 << r.value();
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    (1u8..=10).any(|low| {
        let window = 0b11111u16 << low;
        ranks.iter().all(|r| {
            let v = r.value();
            // Ace also plays low in the wheel window.
            window & (1 << v) != 0 || (v == 14 && low == 1)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn test_broadway() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn test_wheel() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn test_not_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn paired_span_of_four_is_not_straight() {
        // max - min == 4 but a rank repeats
        let info = StraightInfo::detect(&[Rank::Six, Rank::Six, Rank::Four, Rank::Three, Rank::Two]);
        assert!(!info.is_straight);
    }

    #[test]
    fn test_unsorted_input() {
        let info = StraightInfo::detect(&[Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen]);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn straight_windows() {
        assert!(fits_straight_window(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Nine]));
        assert!(fits_straight_window(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Five]));
        assert!(fits_straight_window(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Ten]));
        assert!(!fits_straight_window(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Ten]));
        assert!(!fits_straight_window(&[Rank::Five, Rank::Five, Rank::Six, Rank::Seven]));
        assert!(!fits_straight_window(&[]));
    }
}
