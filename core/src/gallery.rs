pub const AUTO_ADVANCE_MS: i32 = 3000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GalleryState {
    Idle,
    Advancing,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlideChange {
    pub index: usize,
    pub restart_timer: bool,
}

/// Slide rotation as an explicit state machine. The auto-advance interval
/// and the manual buttons both used to mutate one shared index variable;
/// here every transition goes through `Gallery`, and `restart_timer` on the
/// returned change is the single authority over the interval.
pub struct Gallery {
    index: usize,
    total: usize,
    state: GalleryState,
}

impl Gallery {
    pub fn new(total: usize) -> Self {
        Gallery {
            index: 0,
            total,
            state: GalleryState::Idle,
        }
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Enters `Advancing` and asks for the interval to be armed. Galleries
    /// with fewer than two slides have nothing to rotate and stay idle.
    pub fn start(&mut self) -> SlideChange {
        if self.total < 2 {
            return self.unchanged();
        }
        self.state = GalleryState::Advancing;
        SlideChange {
            index: self.index,
            restart_timer: true,
        }
    }

    pub fn stop(&mut self) -> SlideChange {
        self.state = GalleryState::Idle;
        self.unchanged()
    }

    /// Interval tick: advance and keep the running timer.
    pub fn tick(&mut self) -> SlideChange {
        if self.state != GalleryState::Advancing {
            return self.unchanged();
        }
        self.index = (self.index + 1) % self.total;
        SlideChange {
            index: self.index,
            restart_timer: false,
        }
    }

    /// Manual forward navigation restarts the countdown, so a click right
    /// before a tick cannot double-advance.
    pub fn next(&mut self) -> SlideChange {
        if self.total == 0 {
            return self.unchanged();
        }
        self.index = (self.index + 1) % self.total;
        self.manual_change()
    }

    pub fn prev(&mut self) -> SlideChange {
        if self.total == 0 {
            return self.unchanged();
        }
        self.index = (self.index + self.total - 1) % self.total;
        self.manual_change()
    }

    /// Jump to a slide; an out-of-range target is ignored.
    pub fn show(&mut self, index: usize) -> SlideChange {
        if index >= self.total {
            return self.unchanged();
        }
        self.index = index;
        self.manual_change()
    }

    fn manual_change(&self) -> SlideChange {
        SlideChange {
            index: self.index,
            restart_timer: self.state == GalleryState::Advancing,
        }
    }

    fn unchanged(&self) -> SlideChange {
        SlideChange {
            index: self.index,
            restart_timer: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_wrap_without_restarting_the_timer() {
        let mut gallery = Gallery::new(3);
        assert!(gallery.start().restart_timer);

        assert_eq!(gallery.tick(), SlideChange { index: 1, restart_timer: false });
        assert_eq!(gallery.tick(), SlideChange { index: 2, restart_timer: false });
        assert_eq!(gallery.tick(), SlideChange { index: 0, restart_timer: false });
    }

    #[test]
    fn manual_navigation_restarts_the_timer() {
        let mut gallery = Gallery::new(3);
        gallery.start();

        assert_eq!(gallery.next(), SlideChange { index: 1, restart_timer: true });
        assert_eq!(gallery.prev(), SlideChange { index: 0, restart_timer: true });
        assert_eq!(gallery.prev(), SlideChange { index: 2, restart_timer: true });
        assert_eq!(gallery.show(1), SlideChange { index: 1, restart_timer: true });
    }

    #[test]
    fn out_of_range_show_is_ignored() {
        let mut gallery = Gallery::new(2);
        gallery.start();
        gallery.next();

        assert_eq!(gallery.show(5), SlideChange { index: 1, restart_timer: false });
    }

    #[test]
    fn tiny_galleries_never_advance() {
        let mut empty = Gallery::new(0);
        assert!(!empty.start().restart_timer);
        assert_eq!(empty.state(), GalleryState::Idle);
        assert_eq!(empty.tick().index, 0);
        assert_eq!(empty.next().index, 0);

        let mut single = Gallery::new(1);
        assert!(!single.start().restart_timer);
        assert_eq!(single.next(), SlideChange { index: 0, restart_timer: false });
    }

    #[test]
    fn stop_quiets_the_machine() {
        let mut gallery = Gallery::new(3);
        gallery.start();
        gallery.tick();
        gallery.stop();

        assert_eq!(gallery.state(), GalleryState::Idle);
        // a stray tick after stop must not move the slide
        assert_eq!(gallery.tick(), SlideChange { index: 1, restart_timer: false });
        // manual navigation still works, but does not arm a timer
        assert_eq!(gallery.next(), SlideChange { index: 2, restart_timer: false });
    }
}
