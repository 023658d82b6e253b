use common::carousel::Direction;

pub enum Msg {
    /// Navigation click; starts the leaving animation.
    Navigate(Direction),
    /// Fired `TRANSITION_DELAY_MS` after `Navigate` to swap the page. Carries
    /// the token from `CarouselState::begin`; stale tokens are ignored.
    Swap { direction: Direction, token: u64 },
    ViewportResized(f64),
    LogoResolved { name: String, url: Option<String> },
}
