//! Runtime option changes for [`NavigationEngine`].

use super::{overview_pose, NavigationEngine};
use crate::camera::Viewport;
use crate::options::Options;
use crate::selection::SelectionState;

impl NavigationEngine {
    /// Replace all options and propagate them to every subsystem.
    /// Invalid values are replaced first, see [`Options::sanitized`].
    ///
    /// A running camera flight keeps its duration but switches easing.
    /// An idle camera at the overview jumps to the new overview pose. The
    /// active quality tier's parameters are re-applied on the next tick.
    pub fn set_options(&mut self, options: Options) {
        let options = options.sanitized();
        if self.selection.state() == SelectionState::Idle {
            self.camera.snap_to(overview_pose(&options));
        }
        self.simulator.set_options(options.motion.clone());
        self.camera.set_easing(options.camera.easing);
        self.hover.set_options(options.hover.clone());
        self.labels.set_height_radii(options.labels.height_radii);
        self.governor.set_options(&options.performance);
        self.pointer.set_drag_threshold(options.input.drag_threshold_px);
        self.tier_dirty = true;
        self.options = options;
        log::info!("navigation options updated");
    }

    /// The drawable surface changed size. Scene adapters report their own
    /// viewport on every tick; this covers clicks arriving before then.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
    }
}
