/// One-shot splash sequence played when the tabbed page mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroStage {
    #[default]
    Splash,
    Animated,
    LogoHidden,
    Revealed,
}

impl IntroStage {
    /// How long to hold this stage before moving on.
    pub fn next_delay(self) -> Option<u32> {
        match self {
            IntroStage::Splash => Some(500),
            IntroStage::Animated => Some(500),
            IntroStage::LogoHidden => Some(300),
            IntroStage::Revealed => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            IntroStage::Splash => IntroStage::Animated,
            IntroStage::Animated => IntroStage::LogoHidden,
            IntroStage::LogoHidden | IntroStage::Revealed => IntroStage::Revealed,
        }
    }

    pub fn is_animated(self) -> bool {
        self >= IntroStage::Animated
    }

    pub fn shows_logo(self) -> bool {
        self < IntroStage::LogoHidden
    }

    pub fn shows_content(self) -> bool {
        self == IntroStage::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_once_with_cumulative_timings() {
        let mut stage = IntroStage::default();
        let mut elapsed = 0;
        let mut marks = Vec::new();
        while let Some(delay) = stage.next_delay() {
            elapsed += delay;
            stage = stage.next();
            marks.push((elapsed, stage));
        }
        assert_eq!(
            marks,
            vec![
                (500, IntroStage::Animated),
                (1000, IntroStage::LogoHidden),
                (1300, IntroStage::Revealed),
            ]
        );
        assert_eq!(stage.next(), IntroStage::Revealed);
    }

    #[test]
    fn logo_and_content_never_overlap() {
        let mut stage = IntroStage::Splash;
        loop {
            assert!(!(stage.shows_logo() && stage.shows_content()));
            if stage.next_delay().is_none() {
                break;
            }
            stage = stage.next();
        }
    }

    #[test]
    fn flags_per_stage() {
        assert!(!IntroStage::Splash.is_animated());
        assert!(IntroStage::Animated.is_animated());
        assert!(IntroStage::Animated.shows_logo());
        assert!(!IntroStage::LogoHidden.shows_logo());
        assert!(!IntroStage::LogoHidden.shows_content());
        assert!(IntroStage::Revealed.shows_content());
    }
}
