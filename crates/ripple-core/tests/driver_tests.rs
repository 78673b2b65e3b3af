// Host-side tests for the per-frame step, using an in-memory pointer and a
// recording sink in place of the browser/GPU collaborators.

use glam::Vec2;
use ripple_core::{
    FrameDriver, FrameParams, PointerSample, PointerSource, PointerTracker, RenderSink,
    RippleConfig, RippleEffect, Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;

struct Scripted {
    samples: Vec<PointerSample>,
    next: usize,
}

impl Scripted {
    fn new(samples: Vec<PointerSample>) -> Self {
        Self { samples, next: 0 }
    }
}

impl PointerSource for Scripted {
    fn sample(&mut self) -> PointerSample {
        let s = self.samples.get(self.next).copied().unwrap_or_default();
        self.next += 1;
        s
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<Recorded>,
}

struct Recorded {
    progress: Vec<f32>,
    directions: Vec<Vec2>,
    viewport: Viewport,
    debug: bool,
}

impl RenderSink for Recorder {
    type Error = ();

    fn render(&mut self, frame: &FrameParams<'_>) -> Result<(), ()> {
        self.frames.push(Recorded {
            progress: frame.waves.iter().map(|w| w.progress).collect(),
            directions: frame.waves.iter().map(|w| w.direction).collect(),
            viewport: frame.viewport,
            debug: frame.debug,
        });
        Ok(())
    }
}

struct Failing;

impl RenderSink for Failing {
    type Error = &'static str;

    fn render(&mut self, _frame: &FrameParams<'_>) -> Result<(), Self::Error> {
        Err("surface lost")
    }
}

fn viewport() -> Viewport {
    Viewport::fit(1600, 900, 1920, 1080).unwrap()
}

fn effect(capacity: usize) -> RippleEffect {
    RippleEffect::new(RippleConfig::default().with_capacity(capacity), viewport()).unwrap()
}

fn moving(vx: f32, vy: f32) -> PointerSample {
    PointerSample {
        position: Vec2::new(0.25, -0.25),
        velocity: Vec2::new(vx, vy),
    }
}

#[test]
fn fast_pointer_spawns_then_ages() {
    let mut d = FrameDriver::new(
        effect(3),
        Scripted::new(vec![moving(1.0, 0.0)]),
        Recorder::default(),
    );
    d.frame(0.5).unwrap();

    let rec = &d.sink().frames[0];
    assert_eq!(rec.progress.len(), 3);
    assert!((rec.progress[0] - 0.45).abs() < 1e-6);
    assert_eq!(rec.directions[0], Vec2::new(1.0, 0.0));
    assert_eq!(rec.progress[1], 1.0);
    assert_eq!(rec.progress[2], 1.0);
    assert_eq!(
        d.effect().registry().snapshot().newest().unwrap().position,
        Vec2::new(0.25, -0.25)
    );
}

#[test]
fn slow_pointer_below_threshold_does_not_spawn() {
    let mut d = FrameDriver::new(
        effect(3),
        Scripted::new(vec![moving(0.0005, 0.0)]),
        Recorder::default(),
    );
    d.frame(0.016).unwrap();
    assert_eq!(d.effect().registry().active_count(), 0);
    assert_eq!(d.sink().frames.len(), 1);
    assert!(d.sink().frames[0].progress.iter().all(|p| *p == 1.0));
}

#[test]
fn speed_just_above_threshold_spawns() {
    let mut d = FrameDriver::new(
        effect(2),
        Scripted::new(vec![moving(0.0008, 0.0008)]),
        Recorder::default(),
    );
    d.frame(0.0).unwrap();
    assert_eq!(d.effect().registry().active_count(), 1);
}

#[test]
fn advance_runs_every_frame_even_without_spawns() {
    let mut d = FrameDriver::new(
        effect(2),
        Scripted::new(vec![moving(0.5, 0.5)]),
        Recorder::default(),
    );
    d.frame(0.0).unwrap();
    for _ in 0..4 {
        d.frame(0.1).unwrap();
    }
    let p = d.effect().registry().snapshot().newest().unwrap().progress;
    assert!((p - 0.36).abs() < 1e-5, "got {}", p);
    assert_eq!(d.sink().frames.len(), 5);
}

#[test]
fn wave_fades_out_after_decay_duration() {
    let mut d = FrameDriver::new(
        effect(8),
        Scripted::new(vec![moving(0.2, 0.0)]),
        Recorder::default(),
    );
    let duration = d.effect().config().decay_duration();
    d.frame(0.0).unwrap();
    let steps = 120;
    for _ in 0..steps {
        d.frame(duration / steps as f32 + 1e-4).unwrap();
    }
    assert_eq!(d.effect().registry().active_count(), 0);
}

#[test]
fn viewport_and_debug_are_forwarded() {
    let mut d = FrameDriver::new(effect(2), Scripted::new(vec![]), Recorder::default());
    d.frame(0.016).unwrap();
    let resized = Viewport::fit(500, 1000, 1920, 1080).unwrap();
    d.effect_mut().set_viewport(resized);
    d.effect_mut().set_debug(true);
    d.frame(0.016).unwrap();

    let frames = &d.sink().frames;
    assert_eq!(frames[0].viewport, viewport());
    assert!(!frames[0].debug);
    assert_eq!(frames[1].viewport, resized);
    assert!(frames[1].debug);
}

#[test]
fn sink_error_is_returned_after_state_update() {
    let mut d = FrameDriver::new(effect(2), Scripted::new(vec![moving(1.0, 1.0)]), Failing);
    assert_eq!(d.frame(0.25), Err("surface lost"));
    assert_eq!(d.effect().registry().active_count(), 1);
}

#[test]
fn shared_tracker_drives_spawns() {
    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    let mut d = FrameDriver::new(effect(4), tracker.clone(), Recorder::default());

    d.frame(0.016).unwrap();
    assert_eq!(d.effect().registry().active_count(), 0);

    tracker.borrow_mut().set_position(Vec2::new(0.5, 0.0));
    d.frame(0.016).unwrap();
    assert_eq!(d.effect().registry().active_count(), 1);
    let w = *d.effect().registry().snapshot().newest().unwrap();
    assert_eq!(w.position, Vec2::new(0.5, 0.0));
    assert_eq!(w.direction, Vec2::new(0.5, 0.0));

    // pointer now at rest: no new wave
    d.frame(0.016).unwrap();
    assert_eq!(d.effect().registry().active_count(), 1);
}

#[test]
fn into_parts_hands_back_collaborators() {
    let d = FrameDriver::new(effect(2), Scripted::new(vec![]), Recorder::default());
    let (effect, _pointer, sink) = d.into_parts();
    assert_eq!(effect.registry().len(), 2);
    assert!(sink.frames.is_empty());
}
