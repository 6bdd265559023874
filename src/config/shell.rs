/// Terminal shell configuration constants.
///
/// Pacing only; the engine itself imposes no timing.
pub const STEP_DELAY_MS: u64 = 80; // Delay after each step so held keys don't skip turns.
