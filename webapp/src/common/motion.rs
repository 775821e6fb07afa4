// animation parameters
//
// the browser does the animating; this only decides which keyframes run, for how
// long and when.  the keyframes themselves live in style::MOTION_KEYFRAMES

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Out,
    InOut,
    // slight overshoot, for things that pop in
    Spring,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Out => "cubic-bezier(0.0, 0.0, 0.2, 1)",
            Ease::InOut => "cubic-bezier(0.4, 0.0, 0.2, 1)",
            Ease::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub keyframes: &'static str,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub ease: Ease,
}

pub const FADE_IN: Motion = Motion::new("sh-fade-in", 400, Ease::Out);
pub const FADE_UP: Motion = Motion::new("sh-fade-up", 500, Ease::Out);
pub const SCALE_IN: Motion = Motion::new("sh-scale-in", 300, Ease::Spring);
pub const SLIDE_IN: Motion = Motion::new("sh-slide-in", 700, Ease::InOut);

// gap between siblings entering one after another
pub const CARD_STAGGER_MS: u32 = 100;

impl Motion {
    pub const fn new(keyframes: &'static str, duration_ms: u32, ease: Ease) -> Self {
        Motion {
            keyframes,
            duration_ms,
            delay_ms: 0,
            ease,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Motion { delay_ms, ..self }
    }

    // the index-th child of a staggered group
    pub fn staggered(self, index: usize, stagger_ms: u32) -> Self {
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        self.delayed(self.delay_ms.saturating_add(step.saturating_mul(stagger_ms)))
    }

    // inline style; `both` keeps the first frame applied while delayed
    pub fn style(&self) -> String {
        format!(
            "animation: {} {}ms {} {}ms both;",
            self.keyframes,
            self.duration_ms,
            self.ease.css(),
            self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ease_is_a_curve() {
        for ease in [Ease::Out, Ease::InOut, Ease::Spring] {
            assert!(ease.css().starts_with("cubic-bezier("), "{ease:?}");
        }
    }

    #[test]
    fn stagger_adds_to_base_delay() {
        let motion = FADE_UP.delayed(200).staggered(3, CARD_STAGGER_MS);
        assert_eq!(motion.delay_ms, 500);
        assert_eq!(FADE_UP.staggered(0, CARD_STAGGER_MS), FADE_UP);
    }

    #[test]
    fn stagger_saturates() {
        assert_eq!(FADE_UP.staggered(usize::MAX, 1000).delay_ms, u32::MAX);
    }

    #[test]
    fn renders_animation_shorthand() {
        assert_eq!(
            SCALE_IN.delayed(50).style(),
            "animation: sh-scale-in 300ms cubic-bezier(0.34, 1.56, 0.64, 1) 50ms both;"
        );
    }
}
