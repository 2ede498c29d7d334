use crate::level::{Edge, Level};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;
use log::{debug, trace};

/// Settle time used by [`Config::default`], in milliseconds.
pub const DEFAULT_SETTLE_MS: u16 = 5;

/// Debounce parameters for a [`Switch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    settle_ms: u16,
}

impl Config {
    /// Sets how long to wait after a tentative edge before sampling the pin again.
    pub fn with_settle_ms(mut self, settle_ms: u16) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    pub fn settle_ms(&self) -> u16 {
        self.settle_ms
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

/// A mechanical switch wired between an input pin and ground.
///
/// The pin must have its pull-up enabled, so that an open switch reads high. With HAL crates this
/// is done by converting the pin with `into_pull_up_input` before passing it in.
pub struct Switch<P: InputPin> {
    pin: P,
    state: Level,
    config: Config,
}

impl<P: InputPin> Switch<P> {
    /// Creates a new switch from the given pull-up input pin, with the default settle time.
    pub fn new(pin: P) -> Self {
        Self::with_config(pin, Config::default())
    }

    /// Creates a new switch from the given pull-up input pin.
    pub fn with_config(pin: P, config: Config) -> Self {
        Self {
            pin,
            state: Level::High,
            config,
        }
    }

    /// The level seen by the last poll, or high if the switch has not been polled yet.
    pub fn state(&self) -> Level {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Releases the input pin.
    pub fn release(self) -> P {
        self.pin
    }

    /// Polls the pin and returns `true` if a high-to-low transition was seen and still holds after
    /// the settle time.
    pub fn is_falling<D>(&mut self, delay: &mut D) -> Result<bool, P::Error>
    where
        D: DelayMs<u16>,
    {
        self.poll_edge(Edge::Falling, delay)
    }

    /// Polls the pin and returns `true` if a low-to-high transition was seen and still holds after
    /// the settle time.
    pub fn is_rising<D>(&mut self, delay: &mut D) -> Result<bool, P::Error>
    where
        D: DelayMs<u16>,
    {
        self.poll_edge(Edge::Rising, delay)
    }

    /// Polls the pin for the given edge.
    ///
    /// If the stored state and a fresh sample form the edge, this blocks for the settle time and
    /// samples again; the edge is reported only if the second sample agrees. In every case the
    /// stored state is updated to the last sample taken. If reading the pin fails, the stored state
    /// is left unchanged.
    pub fn poll_edge<D>(&mut self, edge: Edge, delay: &mut D) -> Result<bool, P::Error>
    where
        D: DelayMs<u16>,
    {
        let mut current = self.sample()?;
        let mut confirmed = false;

        if self.state == edge.before() && current == edge.after() {
            delay.delay_ms(self.config.settle_ms);
            current = self.sample()?;
            confirmed = current == edge.after();

            if confirmed {
                debug!("{:?} edge confirmed", edge);
            } else {
                trace!("{:?} edge rejected as bounce", edge);
            }
        }

        self.state = current;
        Ok(confirmed)
    }

    fn sample(&self) -> Result<Level, P::Error> {
        self.pin.is_high().map(Level::from)
    }
}
