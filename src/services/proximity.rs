//! Near-bottom detection for the load-more sentinel.
//!
//! There is no viewport-intersection primitive to lean on, so the check is a
//! distance test between the viewport and the sentinel's client rects, run
//! whenever the sentinel mounts, the viewport scrolls, or the window resizes. The zone extends
//! `margin_px` below the viewport's lower edge, and any contact with it counts
//! (zero threshold).

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top: y,
            bottom: y + height,
            left: x,
            right: x + width,
        }
    }

    fn overlaps(&self, other: &Bounds) -> bool {
        self.top <= other.bottom
            && other.top <= self.bottom
            && self.left <= other.right
            && other.left <= self.right
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityZone {
    margin_px: f64,
}

impl ProximityZone {
    pub const DEFAULT_MARGIN_PX: f64 = 300.0;

    pub fn below(margin_px: f64) -> Self {
        Self {
            margin_px: margin_px.max(0.0),
        }
    }

    pub fn contains(&self, viewport: Bounds, sentinel: Bounds) -> bool {
        let zone = Bounds {
            bottom: viewport.bottom + self.margin_px,
            ..viewport
        };
        zone.overlaps(&sentinel)
    }
}

impl Default for ProximityZone {
    fn default() -> Self {
        Self::below(Self::DEFAULT_MARGIN_PX)
    }
}

/// Identifies one arming of the observer. Observations carrying an older
/// token are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverToken(u64);

#[derive(Debug)]
struct Armed {
    token: ObserverToken,
    inside: Option<bool>,
}

/// Edge-triggered observer for a single sentinel.
#[derive(Debug)]
pub struct ProximityObserver {
    zone: ProximityZone,
    next_token: u64,
    armed: Option<Armed>,
}

impl ProximityObserver {
    pub fn new(zone: ProximityZone) -> Self {
        Self {
            zone,
            next_token: 0,
            armed: None,
        }
    }

    pub fn zone(&self) -> ProximityZone {
        self.zone
    }

    /// Start watching a (new) sentinel. Any previous arming is dropped.
    pub fn arm(&mut self) -> ObserverToken {
        self.next_token += 1;
        let token = ObserverToken(self.next_token);
        if self.armed.is_some() {
            tracing::trace!(?token, "re-arming proximity observer");
        }
        self.armed = Some(Armed {
            token,
            inside: None,
        });
        token
    }

    /// Returns whether `token` was the live arming.
    pub fn disarm(&mut self, token: ObserverToken) -> bool {
        match &self.armed {
            Some(armed) if armed.token == token => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn armed_token(&self) -> Option<ObserverToken> {
        self.armed.as_ref().map(|armed| armed.token)
    }

    /// Feed a measurement. Returns `true` when the sentinel has just entered
    /// the zone, which includes the first measurement after arming.
    pub fn observe(&mut self, token: ObserverToken, viewport: Bounds, sentinel: Bounds) -> bool {
        let zone = self.zone;
        let Some(armed) = self.armed.as_mut().filter(|armed| armed.token == token) else {
            return false;
        };

        let inside = zone.contains(viewport, sentinel);
        let entered = inside && armed.inside != Some(true);
        armed.inside = Some(inside);
        entered
    }
}

impl Default for ProximityObserver {
    fn default() -> Self {
        Self::new(ProximityZone::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn viewport() -> Bounds {
        Bounds::new(0.0, 0.0, 1200.0, 800.0)
    }

    fn sentinel_at(y: f64) -> Bounds {
        Bounds::new(0.0, y, 1200.0, 40.0)
    }

    #[rstest]
    #[case(400.0, true)] // inside the viewport
    #[case(900.0, true)] // within the margin
    #[case(1100.0, true)] // touching the zone edge
    #[case(1100.5, false)]
    #[case(2000.0, false)]
    #[case(-40.0, true)] // bottom edge touching the viewport top
    #[case(-100.0, false)] // scrolled past above
    fn test_zone_contains(#[case] y: f64, #[case] expected: bool) {
        let zone = ProximityZone::below(300.0);
        assert_eq!(zone.contains(viewport(), sentinel_at(y)), expected);
    }

    #[test]
    fn test_zone_requires_horizontal_overlap() {
        let zone = ProximityZone::default();
        let off_to_the_side = Bounds::new(1500.0, 400.0, 100.0, 40.0);
        assert!(!zone.contains(viewport(), off_to_the_side));
    }

    #[test]
    fn test_first_observation_inside_fires() {
        let mut observer = ProximityObserver::default();
        let token = observer.arm();
        assert!(observer.observe(token, viewport(), sentinel_at(900.0)));
    }

    #[test]
    fn test_fires_only_on_entry() {
        let mut observer = ProximityObserver::default();
        let token = observer.arm();

        assert!(!observer.observe(token, viewport(), sentinel_at(3000.0)));
        assert!(observer.observe(token, viewport(), sentinel_at(1000.0)));
        assert!(!observer.observe(token, viewport(), sentinel_at(900.0)));
        assert!(!observer.observe(token, viewport(), sentinel_at(3000.0)));
        assert!(observer.observe(token, viewport(), sentinel_at(700.0)));
    }

    #[test]
    fn test_rearm_fires_again_while_inside() {
        let mut observer = ProximityObserver::default();
        let first = observer.arm();
        assert!(observer.observe(first, viewport(), sentinel_at(500.0)));

        let second = observer.arm();
        assert!(observer.observe(second, viewport(), sentinel_at(500.0)));
    }

    #[test]
    fn test_stale_token_never_fires() {
        let mut observer = ProximityObserver::default();
        let stale = observer.arm();
        let live = observer.arm();

        assert!(!observer.observe(stale, viewport(), sentinel_at(500.0)));
        assert!(!observer.disarm(stale));
        assert!(observer.is_armed());
        assert!(observer.observe(live, viewport(), sentinel_at(500.0)));
    }

    #[test]
    fn test_disarmed_observer_is_silent() {
        let mut observer = ProximityObserver::default();
        let token = observer.arm();
        assert!(observer.disarm(token));
        assert!(!observer.is_armed());
        assert!(!observer.observe(token, viewport(), sentinel_at(500.0)));
    }

    #[test]
    fn test_negative_margin_is_clamped() {
        let zone = ProximityZone::below(-50.0);
        assert_eq!(zone, ProximityZone::below(0.0));
        assert!(zone.contains(viewport(), sentinel_at(760.0)));
        assert!(!zone.contains(viewport(), sentinel_at(801.0)));
    }

    #[test]
    fn test_grown_viewport_pulls_sentinel_into_zone() {
        let mut observer = ProximityObserver::default();
        let token = observer.arm();
        let sentinel = sentinel_at(1500.0);

        assert!(!observer.observe(token, viewport(), sentinel));
        // window resized taller without any scrolling; same arming, same sentinel
        let taller = Bounds::new(0.0, 0.0, 1200.0, 1400.0);
        assert!(observer.observe(token, taller, sentinel));
        assert!(!observer.observe(token, taller, sentinel));
    }

    #[test]
    fn test_shrunk_viewport_rearms_entry() {
        let mut observer = ProximityObserver::default();
        let token = observer.arm();
        let sentinel = sentinel_at(1000.0);

        assert!(observer.observe(token, viewport(), sentinel));
        let shorter = Bounds::new(0.0, 0.0, 1200.0, 400.0);
        assert!(!observer.observe(token, shorter, sentinel));
        assert!(observer.observe(token, viewport(), sentinel));
    }

    #[test]
    fn test_armed_token_follows_latest_arming() {
        let mut observer = ProximityObserver::default();
        assert_eq!(observer.armed_token(), None);
        let first = observer.arm();
        let second = observer.arm();
        assert_ne!(first, second);
        assert_eq!(observer.armed_token(), Some(second));
    }
}
