//! Pipe stream: spawning, retiring and scoring
//!
//! Pipes are kept in spawn order. New pipes are placed a fixed distance to the
//! right of the rightmost live one, with a random opening height drawn from a
//! [`GapSource`].

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::pipe::Pipe;
use crate::Tuning;
use crate::consts::*;

/// Source of random opening heights
pub trait GapSource {
    /// Uniform integer in `low..=high`
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;
}

impl GapSource for Pcg32 {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.random_range(low..=high)
    }
}

/// Ordered set of live pipes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeStream {
    /// Live pipes in spawn order
    pipes: Vec<Pipe>,
    /// Retired before they were credited (a long tick can skip the pass window)
    unscored: Vec<Pipe>,
    /// Most recently credited pipe
    last_credited: Option<u32>,
    /// Next pipe id
    next_id: u32,

    // Cached tuning
    target_count: usize,
    spacing: f32,
    gap_min: i32,
    gap_max: i32,
    opening_height: f32,
    velocity: f32,
}

impl PipeStream {
    /// Empty stream (nothing spawned yet)
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pipes: Vec::new(),
            unscored: Vec::new(),
            last_credited: None,
            next_id: 1,
            target_count: tuning.max_pipes,
            spacing: tuning.pipe_spacing,
            gap_min: tuning.gap_center_min,
            gap_max: tuning.gap_center_max,
            opening_height: tuning.opening_height,
            velocity: tuning.scroll_velocity,
        }
    }

    /// Stream holding the fixed opening pipe a run starts with
    pub fn with_first_pipe(tuning: &Tuning) -> Self {
        let mut stream = Self::new(tuning);
        stream.push_pipe(FIRST_PIPE_X, FIRST_PIPE_Y);
        stream
    }

    /// Append a pipe centered on `(x, gap_center_y)` and return its id
    pub fn push_pipe(&mut self, x: f32, gap_center_y: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.pipes.push(Pipe::new(
            id,
            x,
            gap_center_y,
            self.opening_height,
            self.velocity,
        ));
        id
    }

    /// Scroll every pipe, then drop the ones that left the screen
    ///
    /// Dropped pipes that were never credited stay eligible for scoring.
    pub fn update(&mut self, ticks: f32) {
        for pipe in &mut self.pipes {
            pipe.update(ticks);
        }
        let (live, gone): (Vec<Pipe>, Vec<Pipe>) =
            std::mem::take(&mut self.pipes).into_iter().partition(Pipe::is_alive);
        self.pipes = live;

        let last = self.last_credited;
        self.unscored
            .extend(gone.into_iter().filter(|p| last.is_none_or(|id| p.id() > id)));
    }

    /// Top the stream back up to its target count
    pub fn ensure_spawned<G: GapSource + ?Sized>(&mut self, gaps: &mut G) {
        while self.pipes.len() < self.target_count {
            let x = self
                .rightmost_x()
                .map_or(FIRST_PIPE_X, |x| x + self.spacing);
            let y = gaps.uniform_int(self.gap_min, self.gap_max);
            let id = self.push_pipe(x, y as f32);
            log::debug!("Spawned pipe {} at ({}, {})", id, x, y);
        }
    }

    /// Credit at most one newly passed pipe
    ///
    /// Pipes are credited strictly in spawn order, so a pipe is never counted
    /// twice. Returns the id of the credited pipe.
    pub fn collect_scoring_events(&mut self, bird_x: f32) -> Option<u32> {
        let last = self.last_credited;
        let credited = self
            .unscored
            .iter()
            .chain(&self.pipes)
            .find(|p| p.passed(bird_x) && last.is_none_or(|id| p.id() > id))?
            .id();
        self.last_credited = Some(credited);
        self.unscored.retain(|p| p.id() > credited);
        Some(credited)
    }

    /// True if `rect` touches any live pipe
    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.pipes.iter().any(|p| p.collides_with(rect))
    }

    /// Live pipes in spawn order
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn last_credited(&self) -> Option<u32> {
        self.last_credited
    }

    fn rightmost_x(&self) -> Option<f32> {
        self.pipes.iter().map(Pipe::x).reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Hands out a fixed sequence of gap centers
    struct Scripted {
        values: Vec<i32>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[i32]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl GapSource for Scripted {
        fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v.clamp(low, high)
        }
    }

    #[test]
    fn test_pcg_gap_source_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.uniform_int(GAP_CENTER_MIN, GAP_CENTER_MAX);
            assert!((GAP_CENTER_MIN..=GAP_CENTER_MAX).contains(&v));
        }
        assert_eq!(rng.uniform_int(5, 5), 5);
    }

    #[test]
    fn test_spawns_to_target_at_fixed_spacing() {
        let tuning = Tuning::default();
        let mut stream = PipeStream::with_first_pipe(&tuning);
        let mut gaps = Scripted::new(&[150, 250, 350]);
        stream.ensure_spawned(&mut gaps);

        assert_eq!(stream.len(), MAX_PIPES);
        let xs: Vec<f32> = stream.pipes().iter().map(Pipe::x).collect();
        assert_eq!(xs, vec![300.0, 525.0, 750.0, 975.0, 1200.0]);
        let ys: Vec<f32> = stream.pipes().iter().map(Pipe::gap_center_y).collect();
        assert_eq!(ys, vec![FIRST_PIPE_Y, 150.0, 250.0, 350.0, 150.0]);
    }

    #[test]
    fn test_empty_stream_spawns_at_first_pipe_x() {
        let tuning = Tuning {
            max_pipes: 2,
            ..Default::default()
        };
        let mut stream = PipeStream::new(&tuning);
        stream.ensure_spawned(&mut Scripted::new(&[200]));
        let xs: Vec<f32> = stream.pipes().iter().map(Pipe::x).collect();
        assert_eq!(xs, vec![FIRST_PIPE_X, FIRST_PIPE_X + PIPE_SPACING]);
    }

    #[test]
    fn test_retires_offscreen_pipes_for_good() {
        let tuning = Tuning::default();
        let mut stream = PipeStream::with_first_pipe(&tuning);
        let first = stream.pipes()[0].id();
        // 300 + 54 px to go at 75 px/s
        stream.update(5.0);
        assert!(stream.is_empty());
        stream.ensure_spawned(&mut Scripted::new(&[200]));
        assert!(stream.pipes().iter().all(|p| p.id() != first));
        assert!(stream.pipes().iter().all(|p| p.x() + PIPE_WIDTH >= 0.0));
    }

    #[test]
    fn test_each_pipe_scores_once() {
        let tuning = Tuning::default();
        let mut stream = PipeStream::with_first_pipe(&tuning);
        let id = stream.pipes()[0].id();
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), None);

        // Center crosses x = 10 after 317 px
        stream.update(4.3);
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), Some(id));
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), None);
        stream.update(0.1);
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), None);
        assert_eq!(stream.last_credited(), Some(id));
    }

    #[test]
    fn test_long_ticks_do_not_skip_a_pipe() {
        let tuning = Tuning::default();
        let mut stream = PipeStream::new(&tuning);
        let id = stream.push_pipe(300.0, 200.0);
        let mut credits = Vec::new();

        // 75 px per step jumps straight over the 37 px pass window
        for _ in 0..6 {
            stream.update(1.0);
            credits.extend(stream.collect_scoring_events(BIRD_START_X));
        }
        assert!(stream.is_empty());
        assert_eq!(credits, vec![id]);
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), None);
    }

    #[test]
    fn test_skipped_pipes_credit_one_per_call_in_order() {
        let tuning = Tuning::default();
        let mut stream = PipeStream::new(&tuning);
        let a = stream.push_pipe(0.0, 200.0);
        let b = stream.push_pipe(10.0, 200.0);
        let c = stream.push_pipe(500.0, 200.0);
        // Both a and b retire in one step; c is still far away
        stream.update(2.0);
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), Some(a));
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), Some(b));
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), None);
        assert!(stream.pipes().iter().all(|p| p.id() == c));
    }

    #[test]
    fn test_two_passed_pipes_credit_in_order() {
        let tuning = Tuning::default();
        let mut stream = PipeStream::new(&tuning);
        let a = stream.push_pipe(-20.0, 200.0);
        let b = stream.push_pipe(-30.0, 200.0);
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), Some(a));
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), Some(b));
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), None);
        assert_eq!(stream.collect_scoring_events(BIRD_START_X), None);
    }

    #[test]
    fn test_collides_with_any_pipe() {
        let tuning = Tuning::default();
        let mut stream = PipeStream::new(&tuning);
        stream.push_pipe(0.0, 200.0);
        stream.push_pipe(225.0, 300.0);
        let bird = Rect::new(230.0, 100.0, BIRD_WIDTH, BIRD_HEIGHT);
        assert!(stream.collides_with(&bird));
        let safe = Rect::new(100.0, 100.0, BIRD_WIDTH, BIRD_HEIGHT);
        assert!(!stream.collides_with(&safe));
    }
}
