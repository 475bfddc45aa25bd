pub const SPIN_COST_STARS: u32 = 119;

pub const DEFAULT_STARS_BALANCE: i32 = 107;
pub const DEFAULT_TICKETS_BALANCE: i32 = 0;

// Recent drops kept for the LIVE strip; older entries fall off.
pub const MAX_LIVE_DROPS: usize = 5;
