//! Classification of the throws of a single frame.
//!
//! This is display logic only. Scores, bonuses and legality of a throw are
//! the service's business.

/// Pins standing at the start of every frame
pub const PINS_PER_FRAME: u32 = 15;

/// How a single throw is shown on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowMark {
    /// All pins down with one delivery
    Strike,
    /// Last throw of a multi-throw frame that cleared the pins
    Spare,
    /// Any other throw, shown as its pin count
    Pins(u32),
}

impl ThrowMark {
    pub fn symbol(&self) -> String {
        match self {
            ThrowMark::Strike => "X".to_string(),
            ThrowMark::Spare => "/".to_string(),
            ThrowMark::Pins(pins) => pins.to_string(),
        }
    }
}

/// A frame is a spare when more than one throw together cleared every pin
pub fn is_spare(throws: &[u32]) -> bool {
    throws.len() > 1 && frame_total(throws) == u64::from(PINS_PER_FRAME)
}

fn frame_total(throws: &[u32]) -> u64 {
    throws.iter().map(|&pins| u64::from(pins)).sum()
}

/// Classify every throw of a frame, preserving order.
///
/// A throw of [`PINS_PER_FRAME`] is always a strike, wherever it appears.
/// Otherwise the last throw of a spare frame is a spare. Everything else is
/// shown as its pin count.
pub fn classify_throws(throws: &[u32]) -> Vec<ThrowMark> {
    let spare = is_spare(throws);
    let last = throws.len().saturating_sub(1);

    throws
        .iter()
        .enumerate()
        .map(|(index, &pins)| {
            if pins == PINS_PER_FRAME {
                ThrowMark::Strike
            } else if spare && index == last {
                ThrowMark::Spare
            } else {
                ThrowMark::Pins(pins)
            }
        })
        .collect()
}
