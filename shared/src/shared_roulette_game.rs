use rand::Rng;
use serde::{Serialize, Deserialize};

/// A single entry in a roulette catalog. Ids are unique within one catalog
/// only; the strip repeats them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Prize {
    pub id: u32,
    pub icon: char,
    pub stars: u32,
}

/// Where the engine is in one spin's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Animating,
    Settling,
}

/// Ephemeral state for one spin; created by `begin_spin`, dropped by
/// `finish_spin`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    pub chosen_index: usize,
    pub target_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinError {
    /// The catalog is empty; there is nothing to land on.
    NotReady,
    /// A spin is already in flight.
    Busy,
}

impl std::fmt::Display for SpinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpinError::NotReady => write!(f, "roulette is not ready"),
            SpinError::Busy => write!(f, "spin already in progress"),
        }
    }
}

/// Drives the slot-roulette animation: picks a prize, computes where the
/// strip must stop so that prize sits under the centered pointer, and maps
/// elapsed time to an eased scroll position. The host owns the clock and the
/// per-frame scheduling; the engine owns the session and the busy flag.
pub struct SpinEngine {
    catalog: Vec<Prize>,
    phase: SpinPhase,
    session: Option<SpinSession>,
}

impl SpinEngine {
    pub fn new(catalog: Vec<Prize>) -> Self {
        Self {
            catalog,
            phase: SpinPhase::Idle,
            session: None,
        }
    }

    pub fn catalog(&self) -> &[Prize] {
        &self.catalog
    }

    /// The sequence actually rendered: three copies of the catalog, so the
    /// animation can land anywhere in the middle copy without exposing an
    /// edge of the strip.
    pub fn strip(&self) -> Vec<Prize> {
        build_strip(&self.catalog)
    }

    pub fn is_busy(&self) -> bool {
        self.phase != SpinPhase::Idle
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    /// Starts a spin: draws a uniform prize index and computes the scroll
    /// offset that centers it under the pointer. `viewport_width` is read
    /// once here; mid-animation resizes are not re-targeted. Calling while
    /// busy leaves the in-flight session untouched.
    pub fn begin_spin<R: Rng>(
        &mut self,
        viewport_width: f64,
        rng: &mut R,
    ) -> Result<SpinSession, SpinError> {
        if self.catalog.is_empty() {
            return Err(SpinError::NotReady);
        }
        if self.phase != SpinPhase::Idle {
            log::debug!("spin rejected: previous spin still in progress");
            return Err(SpinError::Busy);
        }

        let chosen_index = rng.gen_range(0..self.catalog.len());
        let session = SpinSession {
            chosen_index,
            target_offset: target_offset(
                self.catalog.len(),
                chosen_index,
                ITEM_WIDTH,
                viewport_width,
            ),
        };
        self.session = Some(session.clone());
        self.phase = SpinPhase::Animating;
        Ok(session)
    }

    /// Eased scroll position for the active session at `elapsed_ms` since
    /// spin start. `None` when no spin is active.
    pub fn position_at(&self, elapsed_ms: f64) -> Option<f64> {
        let session = self.session.as_ref()?;
        let progress = (elapsed_ms / SPIN_DURATION_MS).min(1.0);
        Some(session.target_offset * ease_out_quart(progress))
    }

    pub fn animation_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= SPIN_DURATION_MS
    }

    /// The animation reached its target; the engine stays busy through the
    /// settle delay so the host keeps the spinning affordance up.
    pub fn begin_settle(&mut self) {
        if self.phase == SpinPhase::Animating {
            self.phase = SpinPhase::Settling;
        }
    }

    /// Settle delay elapsed; ready for the next spin.
    pub fn finish_spin(&mut self) {
        self.phase = SpinPhase::Idle;
        self.session = None;
    }
}

/// Scroll offset that parks `chosen_index` (in the middle catalog copy)
/// under a pointer fixed at the viewport's horizontal center. The strip
/// starts scrolled past the first copy, so an index near 0 still gets a full
/// copy of run-up.
pub fn target_offset(
    catalog_len: usize,
    chosen_index: usize,
    item_width: f64,
    viewport_width: f64,
) -> f64 {
    let center_offset = viewport_width / 2.0 - item_width / 2.0;
    let start_position = catalog_len as f64 * item_width;
    start_position + (catalog_len + chosen_index) as f64 * item_width - center_offset
}

/// Ease-out: 1 - (1-t)^4, decelerating into the landing prize.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

pub fn build_strip(catalog: &[Prize]) -> Vec<Prize> {
    let mut strip = Vec::with_capacity(catalog.len() * STRIP_COPIES);
    for _ in 0..STRIP_COPIES {
        strip.extend_from_slice(catalog);
    }
    strip
}

pub const ROULETTE_CATALOG: [Prize; 8] = [
    Prize { id: 1, icon: '🎮', stars: 1058 },
    Prize { id: 2, icon: '🎂', stars: 286 },
    Prize { id: 3, icon: '🧸', stars: 445 },
    Prize { id: 4, icon: '💎', stars: 892 },
    Prize { id: 5, icon: '🎪', stars: 156 },
    Prize { id: 6, icon: '🎯', stars: 723 },
    Prize { id: 7, icon: '🎨', stars: 334 },
    Prize { id: 8, icon: '🎭', stars: 567 },
];

// Constants for frontend animation. ITEM_WIDTH is the rendered stride of one
// strip cell (w-40 card plus gap-4); the strip markup must keep these in
// lockstep or the pointer will not align with the landed prize.
pub const ITEM_WIDTH: f64 = 176.0;
pub const STRIP_COPIES: usize = 3;
pub const SPIN_DURATION_MS: f64 = 4000.0;
pub const SETTLE_DELAY_MS: u32 = 500;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn test_engine() -> SpinEngine {
        SpinEngine::new(ROULETTE_CATALOG.to_vec())
    }

    #[test]
    fn test_target_offset_scenario() {
        // N=8, item 176, viewport 800, chosen 3:
        // center = 400 - 88 = 312, start = 1408, target = 1408 + 1936 - 312.
        assert_eq!(target_offset(8, 3, 176.0, 800.0), 3032.0);
    }

    #[test]
    fn test_begin_spin_matches_independent_arithmetic() {
        let mut engine = test_engine();
        let session = engine.begin_spin(800.0, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(session.chosen_index, 0);
        assert_eq!(
            session.target_offset,
            target_offset(8, 0, ITEM_WIDTH, 800.0)
        );
    }

    #[test]
    fn test_empty_catalog_not_ready() {
        let mut engine = SpinEngine::new(Vec::new());
        let result = engine.begin_spin(800.0, &mut StepRng::new(0, 0));
        assert_eq!(result, Err(SpinError::NotReady));
        assert!(!engine.is_busy());
    }

    #[test]
    fn test_second_spin_rejected_and_session_preserved() {
        let mut engine = test_engine();
        let first = engine.begin_spin(800.0, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = engine.begin_spin(800.0, &mut StdRng::seed_from_u64(8));
        assert_eq!(second, Err(SpinError::Busy));
        assert_eq!(engine.session(), Some(&first));
    }

    #[test]
    fn test_position_reaches_target_exactly() {
        let mut engine = test_engine();
        let session = engine.begin_spin(800.0, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(engine.position_at(0.0), Some(0.0));
        assert_eq!(engine.position_at(SPIN_DURATION_MS), Some(session.target_offset));
        // Past the duration progress is clamped, so the strip stays parked.
        assert_eq!(
            engine.position_at(SPIN_DURATION_MS + 1000.0),
            Some(session.target_offset)
        );
    }

    #[test]
    fn test_position_is_monotonic() {
        let mut engine = test_engine();
        engine.begin_spin(800.0, &mut StdRng::seed_from_u64(3)).unwrap();
        let mut last = -1.0;
        for elapsed in (0..=4000).step_by(250) {
            let position = engine.position_at(elapsed as f64).unwrap();
            assert!(position > last);
            last = position;
        }
    }

    #[test]
    fn test_busy_through_settle() {
        let mut engine = test_engine();
        engine.begin_spin(800.0, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(engine.is_busy());
        assert!(engine.animation_done(SPIN_DURATION_MS));

        engine.begin_settle();
        assert_eq!(engine.phase(), SpinPhase::Settling);
        assert!(engine.is_busy());

        engine.finish_spin();
        assert!(!engine.is_busy());
        assert!(engine.session().is_none());
        // A fresh spin is accepted once idle again.
        assert!(engine.begin_spin(800.0, &mut StdRng::seed_from_u64(2)).is_ok());
    }

    #[test]
    fn test_chosen_index_roughly_uniform() {
        let mut engine = test_engine();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 8];
        let trials = 4000;
        for _ in 0..trials {
            let session = engine.begin_spin(800.0, &mut rng).unwrap();
            counts[session.chosen_index] += 1;
            engine.begin_settle();
            engine.finish_spin();
        }
        let expected = trials / 8;
        for count in counts {
            assert!(count > expected * 7 / 10, "bucket starved: {:?}", counts);
            assert!(count < expected * 13 / 10, "bucket bloated: {:?}", counts);
        }
    }

    #[test]
    fn test_strip_repeats_catalog_three_times() {
        let strip = build_strip(&ROULETTE_CATALOG);
        assert_eq!(strip.len(), ROULETTE_CATALOG.len() * 3);
        for (i, prize) in strip.iter().enumerate() {
            assert_eq!(*prize, ROULETTE_CATALOG[i % ROULETTE_CATALOG.len()]);
        }
    }

    #[test]
    fn test_ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }
}
