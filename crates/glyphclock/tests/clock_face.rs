use std::time::Duration;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use image::{Rgba as Px, RgbaImage};
use proptest::prelude::*;

use glyphclock::compose::{canvas_for, compose, BACKGROUND};
use glyphclock::config::DEFAULT_FONT_PATH;
use glyphclock::face::ClockFace;
use glyphclock::model::{snapshot_at, FixedWallClock, CLOCK_CHARSET};
use glyphclock_engine::coords::{PixelRect, ViewportSize};
use glyphclock_engine::core::{Scheduler, SchedulerConfig};
use glyphclock_engine::input::{ClockEvent, EventSource, Key};
use glyphclock_engine::paint::Rgba;
use glyphclock_engine::render::{Blit, RenderSurface};
use glyphclock_engine::text::{BitmapFont, GlyphAtlas};
use glyphclock_engine::time::ManualClock;

const CELL_W: u32 = 3;
const CELL_H: u32 = 4;

/// Solid color of cell `i` in the synthetic font.
fn cell_color(i: usize) -> Rgba {
    Rgba::new(20 * (i as u8 + 1), 255 - 20 * i as u8, 7, 255)
}

fn synthetic_font() -> BitmapFont {
    let count = CLOCK_CHARSET.chars().count() as u32;
    let bitmap = RgbaImage::from_fn(CELL_W * count, CELL_H, |x, _| {
        Px(cell_color((x / CELL_W) as usize).to_array())
    });
    BitmapFont::from_image(bitmap, CLOCK_CHARSET).unwrap()
}

fn color_of(ch: char) -> Rgba {
    cell_color(CLOCK_CHARSET.chars().position(|c| c == ch).unwrap())
}

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

/// Records each frame instead of drawing it.
#[derive(Default)]
struct Recording {
    frames: Vec<(Rgba, PixelRect, PixelRect)>,
}

impl RenderSurface for Recording {
    fn draw(&mut self, clear: Rgba, blit: &Blit<'_>) -> Result<()> {
        self.frames.push((clear, blit.src, blit.dst));
        Ok(())
    }

    fn query_size(&mut self, reported: ViewportSize) -> ViewportSize {
        reported
    }
}

/// Lets every wait time out, then presses escape.
struct TimeoutsThenEscape {
    clock: ManualClock,
    timeouts: usize,
}

impl EventSource for TimeoutsThenEscape {
    fn wait_event(&mut self, timeout: Duration) -> Result<Option<ClockEvent>> {
        if self.timeouts == 0 {
            return Ok(Some(ClockEvent::KeyDown(Key::Escape)));
        }
        self.timeouts -= 1;
        self.clock.advance(timeout);
        Ok(None)
    }
}

fn assert_cell(face_canvas: &glyphclock_engine::render::Canvas, col: u32, row: u32, expected: Rgba) {
    for dy in 0..CELL_H {
        for dx in 0..CELL_W {
            let (x, y) = (col * CELL_W + dx, row * CELL_H + dy);
            assert_eq!(face_canvas.pixel(x, y), expected, "cell ({col}, {row}) pixel ({x}, {y})");
        }
    }
}

#[test]
fn renders_known_instant_into_both_rows() {
    let wall = FixedWallClock(datetime(2024, 3, 5, 7, 8, 9));
    let face = ClockFace::new(synthetic_font(), Recording::default(), wall);
    let clock = ManualClock::new();
    let mut scheduler = Scheduler::new(
        face,
        clock.clone(),
        SchedulerConfig::default(),
        ViewportSize::new(900, 300),
    )
    .unwrap();
    let mut events = TimeoutsThenEscape { clock, timeouts: 2 };

    let summary = scheduler.run(&mut events).unwrap();
    assert_eq!(summary.frames, 3);

    let face = scheduler.stage();
    assert_eq!(face.shown(), Some(&snapshot_at(datetime(2024, 3, 5, 7, 8, 9))));
    let canvas = face.canvas();
    assert_eq!((canvas.width(), canvas.height()), (10 * CELL_W, 2 * CELL_H));

    assert_cell(canvas, 0, 0, BACKGROUND);
    for (i, ch) in "07:08:09".chars().enumerate() {
        assert_cell(canvas, 1 + i as u32, 0, color_of(ch));
    }
    assert_cell(canvas, 9, 0, BACKGROUND);

    for (i, ch) in "2024-03-05".chars().enumerate() {
        assert_cell(canvas, i as u32, 1, color_of(ch));
    }

    let frames = &face.surface().frames;
    assert_eq!(frames.len(), 3);
    for (clear, src, dst) in frames {
        assert_eq!(*clear, BACKGROUND);
        assert_eq!(*src, PixelRect::new(0, 0, 30, 8));
        assert_eq!(*dst, PixelRect::new(0, 0, 900, 300));
    }
}

#[test]
fn resize_changes_destination_rect_only() {
    struct ResizeOnce {
        clock: ManualClock,
        sent: bool,
        timeouts: usize,
    }

    impl EventSource for ResizeOnce {
        fn wait_event(&mut self, timeout: Duration) -> Result<Option<ClockEvent>> {
            if !self.sent {
                self.sent = true;
                return Ok(Some(ClockEvent::resize(333, 77)));
            }
            if self.timeouts == 0 {
                return Ok(Some(ClockEvent::Quit));
            }
            self.timeouts -= 1;
            self.clock.advance(timeout);
            Ok(None)
        }
    }

    let face = ClockFace::new(
        synthetic_font(),
        Recording::default(),
        FixedWallClock(datetime(2000, 1, 1, 0, 0, 0)),
    );
    let clock = ManualClock::new();
    let mut scheduler =
        Scheduler::new(face, clock.clone(), SchedulerConfig::default(), ViewportSize::new(640, 360))
            .unwrap();
    let mut events = ResizeOnce { clock, sent: false, timeouts: 1 };
    scheduler.run(&mut events).unwrap();

    let frames = &scheduler.stage().surface().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].2, PixelRect::new(0, 0, 640, 360));
    assert_eq!(frames[1].1, PixelRect::new(0, 0, 30, 8));
    assert_eq!(frames[1].2, PixelRect::new(0, 0, 333, 77));
}

#[test]
fn compose_is_idempotent() {
    let font = synthetic_font();
    let snapshot = snapshot_at(datetime(2024, 12, 31, 23, 59, 59));

    let mut first = canvas_for(&font);
    compose(&mut first, &snapshot, &font);
    let mut second = canvas_for(&font);
    compose(&mut second, &snapshot, &font);
    compose(&mut second, &snapshot, &font);

    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn bundled_font_covers_the_charset() {
    let font = BitmapFont::load(DEFAULT_FONT_PATH, CLOCK_CHARSET).unwrap();
    let atlas = font.atlas();

    assert_eq!(atlas.len(), CLOCK_CHARSET.chars().count());
    assert_glyph_rects_are_disjoint_and_inside(atlas);
}

#[test]
fn missing_font_error_names_the_path() {
    let err = BitmapFont::load("/no/such/dir/font.png", CLOCK_CHARSET).unwrap_err();
    assert!(format!("{err:#}").contains("/no/such/dir/font.png"));
}

fn assert_glyph_rects_are_disjoint_and_inside(atlas: &GlyphAtlas) {
    let rects: Vec<(char, PixelRect)> = CLOCK_CHARSET.chars().map(|c| (c, atlas.lookup(c))).collect();

    for (c, r) in &rects {
        assert!(atlas.bounds().contains_rect(*r), "{c:?} at {r:?} outside {:?}", atlas.bounds());
    }
    for (i, (a, ra)) in rects.iter().enumerate() {
        for (b, rb) in &rects[i + 1..] {
            assert!(ra.intersect(*rb).is_none(), "{a:?} overlaps {b:?}");
        }
    }
}

fn any_datetime() -> impl Strategy<Value = NaiveDateTime> {
    (0i32..=9999, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(y, mo, d, h, mi, s)| datetime(y, mo, d, h, mi, s))
}

fn all_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

proptest! {
    #[test]
    fn snapshot_text_has_fixed_shape(at in any_datetime()) {
        use chrono::{Datelike, Timelike};

        let snap = snapshot_at(at);

        let t: Vec<&str> = snap.time_text.split(':').collect();
        prop_assert_eq!(snap.time_text.len(), 8);
        prop_assert_eq!(t.len(), 3);
        prop_assert!(t.iter().all(|p| p.len() == 2 && all_digits(p)));
        prop_assert_eq!(t[0].parse::<u32>().unwrap(), at.hour());
        prop_assert_eq!(t[1].parse::<u32>().unwrap(), at.minute());
        prop_assert_eq!(t[2].parse::<u32>().unwrap(), at.second());

        let d: Vec<&str> = snap.date_text.split('-').collect();
        prop_assert_eq!(snap.date_text.len(), 10);
        prop_assert_eq!(d.len(), 3);
        prop_assert!(d[0].len() == 4 && d[1].len() == 2 && d[2].len() == 2);
        prop_assert!(d.iter().all(|p| all_digits(p)));
        prop_assert_eq!(d[0].parse::<i32>().unwrap(), at.year());
        prop_assert_eq!(d[1].parse::<u32>().unwrap(), at.month());
        prop_assert_eq!(d[2].parse::<u32>().unwrap(), at.day());
    }

    #[test]
    fn strip_atlas_rects_never_overlap(cell_w in 1u32..64, cell_h in 1u32..64) {
        let count = CLOCK_CHARSET.chars().count() as u32;
        let atlas = GlyphAtlas::from_strip(CLOCK_CHARSET, cell_w * count, cell_h).unwrap();

        prop_assert_eq!(atlas.cell_size(), (cell_w, cell_h));
        assert_glyph_rects_are_disjoint_and_inside(&atlas);
    }
}
