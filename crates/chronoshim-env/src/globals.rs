//! Global bindings of one execution context.

use chronoshim_clock::application::install::install_clock_override;
use chronoshim_clock::domain::native::NativeDate;
use chronoshim_core::date::DateConstructor;
use chronoshim_core::error::ShimError;
use chronoshim_core::instant::ReferenceInstant;
use chronoshim_core::rng::{RandomSource, SystemRng};
use chronoshim_random::application::install::install_random_override;

/// The date constructor and uniform-random function a context exposes to
/// its scripts.
#[derive(Debug)]
pub struct Globals {
    date: Box<dyn DateConstructor>,
    random: Box<dyn RandomSource>,
}

impl Globals {
    /// Bindings supplied by a host.
    #[must_use]
    pub fn new(date: Box<dyn DateConstructor>, random: Box<dyn RandomSource>) -> Self {
        Self { date, random }
    }

    /// Native bindings: the system clock and an OS-seeded generator.
    #[must_use]
    pub fn native() -> Self {
        Self::new(Box::new(NativeDate::system()), Box::new(SystemRng::from_entropy()))
    }

    /// Installs both overrides, consuming the current bindings so they are
    /// captured exactly once.
    ///
    /// # Errors
    ///
    /// Returns `ShimError::AlreadyInstalled` if the date binding is already
    /// a clock override.
    pub fn install(self, instant: ReferenceInstant) -> Result<Self, ShimError> {
        let Self { date, random } = self;
        let date = install_clock_override(date, instant)?;
        let random = install_random_override(random, instant);
        Ok(Self { date, random })
    }

    /// Returns the bound date constructor.
    #[must_use]
    pub fn date(&self) -> &dyn DateConstructor {
        self.date.as_ref()
    }

    /// Returns the bound uniform-random function.
    pub fn random_mut(&mut self) -> &mut dyn RandomSource {
        self.random.as_mut()
    }
}
