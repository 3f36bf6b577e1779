// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `SwipeController`.
//!
//! A recording host stands in for the list and view toolkit: rows are 100
//! units tall and stacked from `y = 0`, every front region is 200 units wide
//! at `x = 0`, and animations are only recorded. Tests finish animations by
//! hand with `on_animation_event`.

use std::collections::HashMap;

use kurbo::Point;
use understory_swipe::{
    Animation, AnimationEvent, DrainPolicy, Easing, GestureOutcome, GestureState, PointerAction,
    PointerEvent, PointerId, PointerSample, RegionSurface, RequestOutcome, RowBinding, RowPhase,
    RowSource, SwipeConfig, SwipeController, SwipeDirection, SwipeListener, SwipeRequest,
};

const ROW_HEIGHT: f64 = 100.0;
const WIDTH: f64 = 200.0;

/// Regions of row `i` are `10 * i` (right reveal), `10 * i + 1` (left reveal),
/// and `10 * i + 2` (front).
fn front(row: usize) -> usize {
    10 * row + 2
}

fn reveal_left(row: usize) -> usize {
    10 * row + 1
}

fn reveal_right(row: usize) -> usize {
    10 * row
}

#[derive(Debug, Default)]
struct Host {
    rows: Vec<RowBinding<usize, String>>,
    x: HashMap<usize, f64>,
    visible: HashMap<usize, bool>,
    animations: Vec<(usize, Animation)>,
}

impl Host {
    fn with_rows(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| {
                RowBinding::from_regions(
                    front(i),
                    Some(reveal_left(i)),
                    Some(reveal_right(i)),
                    format!("item{i}"),
                )
                .unwrap()
            })
            .collect();
        Self {
            rows,
            ..Self::default()
        }
    }

    fn last_animation(&self) -> (usize, Animation) {
        *self.animations.last().expect("an animation was started")
    }
}

impl RowSource for Host {
    type Row = usize;
    type Region = usize;
    type Item = String;

    fn row_at_point(&self, pos: Point) -> Option<usize> {
        if pos.y < 0.0 {
            return None;
        }
        let index = (pos.y / ROW_HEIGHT) as usize;
        (index < self.rows.len()).then_some(index)
    }

    fn row_at_index(&self, index: usize) -> Option<usize> {
        (index < self.rows.len()).then_some(index)
    }

    fn child_count(&self) -> usize {
        self.rows.len()
    }

    fn binding(&self, row: usize) -> Option<&RowBinding<usize, String>> {
        self.rows.get(row)
    }
}

impl RegionSurface<usize> for Host {
    fn region_x(&self, region: usize) -> f64 {
        self.x.get(&region).copied().unwrap_or(0.0)
    }

    fn region_width(&self, _region: usize) -> f64 {
        WIDTH
    }

    fn set_region_x(&mut self, region: usize, x: f64) {
        self.x.insert(region, x);
    }

    fn set_region_visible(&mut self, region: usize, visible: bool) {
        self.visible.insert(region, visible);
    }

    fn animate_region_x(&mut self, region: usize, animation: Animation) {
        self.animations.push((region, animation));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Left(String),
    Right(String),
    Click(String),
    LongClick(String),
}

#[derive(Debug)]
struct Recorder {
    accept: bool,
    calls: Vec<Call>,
}

impl Recorder {
    fn accepting(accept: bool) -> Self {
        Self {
            accept,
            calls: Vec::new(),
        }
    }
}

impl SwipeListener<String> for Recorder {
    fn on_swipe_left(&mut self, item: &String) -> bool {
        self.calls.push(Call::Left(item.clone()));
        self.accept
    }

    fn on_swipe_right(&mut self, item: &String) -> bool {
        self.calls.push(Call::Right(item.clone()));
        self.accept
    }

    fn on_click(&mut self, item: &String) {
        self.calls.push(Call::Click(item.clone()));
    }

    fn on_long_click(&mut self, item: &String) {
        self.calls.push(Call::LongClick(item.clone()));
    }
}

type Controller = SwipeController<Host, Recorder>;

fn controller(rows: usize, accept: bool) -> Controller {
    SwipeController::new(Host::with_rows(rows), Recorder::accepting(accept))
}

fn event(action: PointerAction, x: f64, y: f64, time: u64) -> PointerEvent {
    PointerEvent::single(action, Point::new(x, y), time)
}

fn down(c: &mut Controller, x: f64, y: f64, time: u64) -> GestureOutcome {
    c.handle_pointer(&event(PointerAction::Down, x, y, time))
}

fn move_to(c: &mut Controller, x: f64, y: f64, time: u64) -> GestureOutcome {
    c.handle_pointer(&event(PointerAction::Move, x, y, time))
}

fn up(c: &mut Controller, x: f64, y: f64, time: u64) -> GestureOutcome {
    c.handle_pointer(&event(PointerAction::Up, x, y, time))
}

fn finish_last(c: &mut Controller) -> (usize, Animation) {
    let last = c.host().last_animation();
    c.on_animation_event(last.1.id, AnimationEvent::Finished);
    last
}

/// Drag row 0 far enough right to commit and release.
fn commit_right_on_row_zero(c: &mut Controller) {
    down(c, 100.0, 50.0, 0);
    move_to(c, 250.0, 50.0, 50);
    assert_eq!(
        up(c, 250.0, 50.0, 100),
        GestureOutcome::Committed(SwipeDirection::Right)
    );
}

#[test]
fn pointer_down_on_row_starts_tracking() {
    let mut c = controller(3, true);
    assert_eq!(c.state(), GestureState::Idle);
    assert_eq!(down(&mut c, 10.0, 150.0, 0), GestureOutcome::Tracking);
    assert_eq!(c.state(), GestureState::Tracking);
}

#[test]
fn pointer_down_outside_rows_attaches_nothing() {
    let mut c = controller(1, true);
    assert_eq!(down(&mut c, 10.0, 550.0, 0), GestureOutcome::Pressed);
    assert_eq!(c.state(), GestureState::Pressed);
    assert_eq!(move_to(&mut c, 300.0, 550.0, 10), GestureOutcome::Ignored);
    assert_eq!(up(&mut c, 300.0, 550.0, 20), GestureOutcome::Ignored);
    assert!(c.host().animations.is_empty());
    assert_eq!(c.state(), GestureState::Idle);
}

#[test]
fn moves_inside_dead_zone_change_nothing_and_release_taps() {
    let mut c = controller(2, true);
    down(&mut c, 100.0, 50.0, 0);
    assert_eq!(move_to(&mut c, 103.0, 52.0, 40), GestureOutcome::Tracking);
    assert_eq!(move_to(&mut c, 104.0, 50.0, 80), GestureOutcome::Tracking);
    assert!(c.host().x.is_empty());
    assert!(c.host().visible.is_empty());

    assert_eq!(up(&mut c, 104.0, 50.0, 120), GestureOutcome::Clicked);
    assert_eq!(c.listener().calls, [Call::Click("item0".into())]);

    let (region, anim) = c.host().last_animation();
    assert_eq!(region, front(0));
    assert_eq!(anim.target_x, 0.0);
    assert_eq!(anim.duration_ms, 500);
    assert_eq!(anim.easing, Easing::AccelerateDecelerate);
    assert_eq!(c.row_phase(0), Some(RowPhase::Resetting));
}

#[test]
fn dead_zone_release_held_long_is_a_long_click() {
    let mut c = controller(2, true);
    down(&mut c, 100.0, 50.0, 1_000);
    move_to(&mut c, 130.0, 50.0, 1_100);
    move_to(&mut c, 100.0, 50.0, 1_200);
    assert_eq!(up(&mut c, 100.0, 50.0, 1_800), GestureOutcome::LongClicked);
    assert_eq!(c.listener().calls, [Call::LongClick("item0".into())]);
    assert!(c.host().x.is_empty());
}

#[test]
fn drag_past_dead_zone_moves_front_and_reveals() {
    let mut c = controller(1, true);
    down(&mut c, 100.0, 50.0, 0);

    assert_eq!(
        move_to(&mut c, 160.0, 50.0, 10),
        GestureOutcome::Dragged { x: 10.0 }
    );
    assert_eq!(c.state(), GestureState::Dragging);
    assert_eq!(c.host().x.get(&front(0)), Some(&10.0));
    assert_eq!(c.host().visible.get(&reveal_right(0)), Some(&true));
    assert_eq!(c.host().visible.get(&reveal_left(0)), Some(&false));

    assert_eq!(
        move_to(&mut c, 20.0, 50.0, 20),
        GestureOutcome::Dragged { x: -30.0 }
    );
    assert_eq!(c.host().visible.get(&reveal_right(0)), Some(&false));
    assert_eq!(c.host().visible.get(&reveal_left(0)), Some(&true));
}

#[test]
fn small_drag_past_dead_zone_resets_without_click() {
    // 60 units right: front at 10, commit needs more than 200 / 5 = 40.
    let mut c = controller(1, true);
    down(&mut c, 100.0, 50.0, 0);
    move_to(&mut c, 160.0, 50.0, 100);
    assert_eq!(up(&mut c, 160.0, 50.0, 200), GestureOutcome::Reset);

    assert!(c.listener().calls.is_empty());
    let (_, anim) = c.host().last_animation();
    assert_eq!(anim.target_x, 0.0);
    assert_eq!(c.state(), GestureState::Idle);
}

#[test]
fn drag_past_fifth_of_width_commits_right() {
    // Front ends at width / 4 = 50 > 40.
    let mut c = controller(1, true);
    down(&mut c, 100.0, 50.0, 0);
    assert_eq!(
        move_to(&mut c, 200.0, 50.0, 50),
        GestureOutcome::Dragged { x: 50.0 }
    );
    assert_eq!(
        up(&mut c, 200.0, 50.0, 100),
        GestureOutcome::Committed(SwipeDirection::Right)
    );

    let (region, anim) = c.host().last_animation();
    assert_eq!(region, front(0));
    assert_eq!(anim.target_x, WIDTH);
    assert_eq!(anim.duration_ms, 300);
    assert_eq!(anim.easing, Easing::Accelerate);
    assert!(c.is_locked(0));
    assert_eq!(c.row_phase(0), Some(RowPhase::Committing(SwipeDirection::Right)));
    assert!(c.listener().calls.is_empty(), "listener waits for the animation");
}

#[test]
fn drag_left_commits_left() {
    let mut c = controller(1, false);
    down(&mut c, 300.0, 50.0, 0);
    move_to(&mut c, 200.0, 50.0, 50);
    assert_eq!(
        up(&mut c, 200.0, 50.0, 100),
        GestureOutcome::Committed(SwipeDirection::Left)
    );
    let (_, anim) = finish_last(&mut c);
    assert_eq!(anim.target_x, -WIDTH);
    assert_eq!(c.listener().calls, [Call::Left("item0".into())]);
}

#[test]
fn missing_reveal_blocks_drag_in_that_direction() {
    let mut host = Host::with_rows(1);
    host.rows[0] = RowBinding::from_regions(front(0), Some(reveal_left(0)), None, "only-left".into())
        .unwrap();
    let mut c = SwipeController::new(host, Recorder::accepting(true));

    down(&mut c, 100.0, 50.0, 0);
    assert_eq!(move_to(&mut c, 400.0, 50.0, 10), GestureOutcome::Tracking);
    assert!(c.host().x.is_empty());
    assert_eq!(up(&mut c, 400.0, 50.0, 20), GestureOutcome::Reset);
}

#[test]
fn accepted_commit_resets_row_and_keeps_queue() {
    let mut c = controller(5, true);
    down(&mut c, 100.0, 50.0, 0);
    move_to(&mut c, 250.0, 50.0, 50);
    assert_eq!(c.swipe_left(2), RequestOutcome::Queued);
    up(&mut c, 250.0, 50.0, 100);

    finish_last(&mut c);
    assert_eq!(c.listener().calls, [Call::Right("item0".into())]);

    let (region, anim) = c.host().last_animation();
    assert_eq!(region, front(0));
    assert_eq!(anim.target_x, 0.0);
    assert_eq!(c.row_phase(0), Some(RowPhase::Resetting));
    assert_eq!(
        c.pending_requests().peek(),
        Some(&SwipeRequest::new(2, SwipeDirection::Left))
    );

    finish_last(&mut c);
    assert!(!c.is_locked(0));
    assert_eq!(c.animations_in_flight(), 0);
    assert_eq!(c.pending_requests().len(), 1);
}

#[test]
fn request_during_session_waits_for_declined_commit() {
    let mut c = controller(5, false);
    down(&mut c, 100.0, 50.0, 0);
    move_to(&mut c, 250.0, 50.0, 50);

    let before = c.host().animations.len();
    assert_eq!(c.swipe_right(3), RequestOutcome::Queued);
    assert_eq!(c.host().animations.len(), before);
    assert!(c.host().visible.get(&reveal_right(3)).is_none());

    up(&mut c, 250.0, 50.0, 100);
    assert_eq!(c.pending_requests().len(), 1);

    // Declining leaves row 0 alone and runs the queued swipe on row 3.
    finish_last(&mut c);
    assert_eq!(c.listener().calls, [Call::Right("item0".into())]);
    assert!(c.pending_requests().is_empty());

    let (region, anim) = c.host().last_animation();
    assert_eq!(region, front(3));
    assert_eq!(anim.target_x, WIDTH);
    assert_eq!(c.host().visible.get(&reveal_right(3)), Some(&true));
    assert_eq!(c.row_phase(3), Some(RowPhase::Committing(SwipeDirection::Right)));
    assert_eq!(c.row_phase(0), None);
}

#[test]
fn queued_requests_drain_one_at_a_time() {
    let mut c = controller(5, false);
    down(&mut c, 100.0, 50.0, 0);
    move_to(&mut c, 250.0, 50.0, 50);
    c.swipe_left(1);
    c.swipe_right(2);
    up(&mut c, 250.0, 50.0, 100);

    finish_last(&mut c);
    assert_eq!(c.host().last_animation().0, front(1));
    assert_eq!(c.pending_requests().len(), 1);

    finish_last(&mut c);
    assert_eq!(c.host().last_animation().0, front(2));
    assert!(c.pending_requests().is_empty());

    finish_last(&mut c);
    assert_eq!(
        c.listener().calls,
        [
            Call::Right("item0".into()),
            Call::Left("item1".into()),
            Call::Right("item2".into()),
        ]
    );
}

#[test]
fn drain_on_completion_runs_after_accepted_reset() {
    let config = SwipeConfig::default().with_drain_policy(DrainPolicy::OnCompletion);
    let mut c = SwipeController::with_config(Host::with_rows(5), Recorder::accepting(true), config);
    down(&mut c, 100.0, 50.0, 0);
    move_to(&mut c, 250.0, 50.0, 50);
    c.swipe_left(4);
    up(&mut c, 250.0, 50.0, 100);

    // Commit finishes: accepted, row 0 resets, queue still waits.
    finish_last(&mut c);
    assert_eq!(c.pending_requests().len(), 1);

    // Reset finishes: the queued swipe runs.
    finish_last(&mut c);
    assert!(c.pending_requests().is_empty());
    assert_eq!(c.host().last_animation().0, front(4));
    assert_eq!(c.row_phase(4), Some(RowPhase::Committing(SwipeDirection::Left)));
}

#[test]
fn drain_waits_while_a_new_session_is_live() {
    let mut c = controller(5, false);
    down(&mut c, 100.0, 50.0, 0);
    move_to(&mut c, 250.0, 50.0, 50);
    c.swipe_right(3);
    up(&mut c, 250.0, 50.0, 100);
    let commit = c.host().last_animation().1;

    // A new pointer goes down on another row before the commit finishes.
    down(&mut c, 10.0, 150.0, 200);
    c.on_animation_event(commit.id, AnimationEvent::Finished);
    assert_eq!(c.pending_requests().len(), 1);
    assert_eq!(c.row_phase(3), None);
}

#[test]
fn animating_row_is_not_draggable() {
    let mut c = controller(2, true);
    commit_right_on_row_zero(&mut c);

    assert_eq!(down(&mut c, 100.0, 50.0, 200), GestureOutcome::Pressed);
    assert_eq!(move_to(&mut c, 300.0, 50.0, 210), GestureOutcome::Ignored);
    assert_eq!(up(&mut c, 300.0, 50.0, 220), GestureOutcome::Ignored);

    // Other rows are unaffected.
    assert_eq!(down(&mut c, 100.0, 150.0, 300), GestureOutcome::Tracking);
}

#[test]
fn programmatic_swipe_when_idle_starts_immediately() {
    let mut c = controller(3, true);
    let RequestOutcome::Started(id) = c.swipe_left(1) else {
        panic!("swipe should start");
    };
    let (region, anim) = c.host().last_animation();
    assert_eq!(anim.id, id);
    assert_eq!(region, front(1));
    assert_eq!(anim.target_x, -WIDTH);
    assert_eq!(c.host().visible.get(&reveal_left(1)), Some(&true));
    assert_eq!(c.host().visible.get(&reveal_right(1)), Some(&false));

    c.on_animation_event(id, AnimationEvent::Finished);
    assert_eq!(c.listener().calls, [Call::Left("item1".into())]);
}

#[test]
fn programmatic_swipe_on_missing_or_locked_row_is_ignored() {
    let mut c = controller(2, true);
    assert_eq!(c.swipe_right(7), RequestOutcome::Ignored);
    assert!(matches!(c.swipe_right(1), RequestOutcome::Started(_)));
    assert_eq!(c.swipe_left(1), RequestOutcome::Ignored);
    assert_eq!(c.host().animations.len(), 1);
}

#[test]
fn cancel_resolves_like_up() {
    let mut c = controller(1, true);
    down(&mut c, 100.0, 50.0, 0);
    move_to(&mut c, 250.0, 50.0, 50);
    assert_eq!(
        c.handle_pointer(&event(PointerAction::Cancel, 250.0, 50.0, 60)),
        GestureOutcome::Committed(SwipeDirection::Right)
    );
    assert_eq!(c.state(), GestureState::Idle);
}

#[test]
fn cancel_without_samples_is_never_a_tap() {
    let mut c = controller(1, true);
    down(&mut c, 100.0, 50.0, 0);
    assert_eq!(
        c.handle_pointer(&PointerEvent::new(
            PointerAction::Cancel,
            Vec::<PointerSample>::new(),
            10
        )),
        GestureOutcome::Reset
    );
    assert!(c.listener().calls.is_empty());
}

#[test]
fn primary_pointer_hands_off_when_lifted() {
    let mut c = controller(1, true);
    let p1 = |x: f64| PointerSample::new(PointerId(1), Point::new(x, 50.0));
    let p2 = |x: f64| PointerSample::new(PointerId(2), Point::new(x, 50.0));

    c.handle_pointer(&PointerEvent::new(PointerAction::Down, [p1(100.0)], 0));
    // Second pointer's movement is ignored while pointer 1 is primary.
    assert_eq!(
        c.handle_pointer(&PointerEvent::new(PointerAction::Move, [p1(110.0), p2(400.0)], 10)),
        GestureOutcome::Tracking
    );
    // Pointer 1 lifts; pointer 2 takes over.
    c.handle_pointer(&PointerEvent::new(
        PointerAction::SecondaryUp { index: 0 },
        [p1(110.0), p2(400.0)],
        20,
    ));
    assert_eq!(
        c.handle_pointer(&PointerEvent::new(PointerAction::Move, [p2(200.0)], 30)),
        GestureOutcome::Dragged { x: 50.0 }
    );
}

#[test]
fn cancelled_animation_unlocks_without_listener() {
    let mut c = controller(2, true);
    commit_right_on_row_zero(&mut c);
    let (_, anim) = c.host().last_animation();

    c.on_animation_event(anim.id, AnimationEvent::Cancelled);
    assert!(!c.is_locked(0));
    assert_eq!(c.animations_in_flight(), 0);

    // A late finish for the same id is ignored.
    c.on_animation_event(anim.id, AnimationEvent::Finished);
    assert!(c.listener().calls.is_empty());
}

#[test]
fn repeat_unlocks_and_start_relocks() {
    let mut c = controller(1, true);
    commit_right_on_row_zero(&mut c);
    let (_, anim) = c.host().last_animation();

    c.on_animation_event(anim.id, AnimationEvent::Repeated);
    assert!(!c.is_locked(0));
    c.on_animation_event(anim.id, AnimationEvent::Started);
    assert!(c.is_locked(0));
    assert_eq!(c.row_phase(0), Some(RowPhase::Committing(SwipeDirection::Right)));
}

#[test]
fn session_clears_after_release_so_requests_run_directly() {
    let mut c = controller(3, true);
    down(&mut c, 100.0, 950.0, 0);
    up(&mut c, 100.0, 950.0, 10);
    assert!(matches!(c.swipe_right(2), RequestOutcome::Started(_)));
    assert!(c.pending_requests().is_empty());
}

#[test]
fn nonzero_natural_x_is_respected() {
    let mut host = Host::with_rows(1);
    host.x.insert(front(0), 16.0);
    let mut c = SwipeController::new(host, Recorder::accepting(true));

    down(&mut c, 100.0, 50.0, 0);
    assert_eq!(
        move_to(&mut c, 30.0, 50.0, 10),
        GestureOutcome::Dragged { x: -4.0 }
    );
    // -4 is within 40 of the natural X 16: no commit, no tap.
    assert_eq!(up(&mut c, 30.0, 50.0, 20), GestureOutcome::Reset);
    assert_eq!(c.host().last_animation().1.target_x, 16.0);
}
