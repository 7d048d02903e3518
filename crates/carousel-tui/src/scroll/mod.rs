//! Smooth horizontal scrolling for animated page changes.
//!
//! - `easing` - easing curves and interpolation helpers
//! - `animation` - offset animator driven by the frame loop
//!
//! ```ignore
//! let mut animator = OffsetAnimator::new(ScrollConfig::default());
//! animator.animate_to(300.0, Instant::now());
//!
//! // Each frame:
//! let x = animator.update(Instant::now());
//! ```

pub mod animation;
pub mod easing;

pub use animation::{OffsetAnimator, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
