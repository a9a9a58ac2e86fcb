use glyphclock_engine::paint::Rgba;
use glyphclock_engine::render::Canvas;
use glyphclock_engine::text::BitmapFont;

use crate::model::ClockSnapshot;

/// Composition buffer background.
pub const BACKGROUND: Rgba = Rgba::BLACK;

/// Canvas width in glyph cells.
pub const COLUMNS: u32 = 10;
/// Canvas height in glyph cells: time on top, date below.
pub const ROWS: u32 = 2;

/// Cell column where the time row starts. `HH:MM:SS` is eight cells wide and
/// sits centered in the ten-cell row.
pub const TIME_COLUMN: u32 = 1;
pub const DATE_COLUMN: u32 = 0;

/// Allocates a canvas sized for `font`: ten cells by two rows.
pub fn canvas_for(font: &BitmapFont) -> Canvas {
    let (cell_w, cell_h) = font.atlas().cell_size();
    Canvas::new(cell_w * COLUMNS, cell_h * ROWS)
}

/// Redraws the whole canvas from `snapshot`.
///
/// # Panics
///
/// Panics if the snapshot contains a character the font has no glyph for.
pub fn compose(canvas: &mut Canvas, snapshot: &ClockSnapshot, font: &BitmapFont) {
    canvas.clear(BACKGROUND);
    draw_line(canvas, font, &snapshot.time_text, TIME_COLUMN, 0);
    draw_line(canvas, font, &snapshot.date_text, DATE_COLUMN, 1);
}

fn draw_line(canvas: &mut Canvas, font: &BitmapFont, text: &str, column: u32, row: u32) {
    let (cell_w, cell_h) = font.atlas().cell_size();
    let y = row * cell_h;

    for (i, ch) in text.chars().enumerate() {
        let src = font.atlas().lookup(ch);
        let x = (column + i as u32) * cell_w;
        canvas.draw_region(font.bitmap(), src, x, y);
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba as Px, RgbaImage};

    use super::*;
    use crate::model::CLOCK_CHARSET;

    /// 12 cells of 2x3; cell `i` is filled with gray level `10 * (i + 1)`.
    fn striped_font() -> BitmapFont {
        let bitmap = RgbaImage::from_fn(24, 3, |x, _| {
            let level = 10 * (x / 2 + 1) as u8;
            Px([level, level, level, 255])
        });
        BitmapFont::from_image(bitmap, CLOCK_CHARSET).unwrap()
    }

    fn snapshot(time: &str, date: &str) -> ClockSnapshot {
        ClockSnapshot {
            time_text: time.into(),
            date_text: date.into(),
        }
    }

    #[test]
    fn canvas_is_ten_by_two_cells() {
        let canvas = canvas_for(&striped_font());
        assert_eq!((canvas.width(), canvas.height()), (20, 6));
    }

    #[test]
    fn first_cell_of_time_row_stays_background() {
        let font = striped_font();
        let mut canvas = canvas_for(&font);
        compose(&mut canvas, &snapshot("12:34:56", "2024-01-01"), &font);

        assert_eq!(canvas.pixel(0, 0), BACKGROUND);
        assert_eq!(canvas.pixel(19, 2), BACKGROUND);
        // '1' is cell 1 of the strip.
        assert_eq!(canvas.pixel(2, 0), Rgba::new(20, 20, 20, 255));
    }

    #[test]
    fn date_row_starts_at_left_edge() {
        let font = striped_font();
        let mut canvas = canvas_for(&font);
        compose(&mut canvas, &snapshot("00:00:00", "2024-01-01"), &font);

        // '2' then '0'.
        assert_eq!(canvas.pixel(0, 3), Rgba::new(30, 30, 30, 255));
        assert_eq!(canvas.pixel(2, 5), Rgba::new(10, 10, 10, 255));
        // '-' is the last cell.
        assert_eq!(canvas.pixel(8, 4), Rgba::new(120, 120, 120, 255));
    }

    #[test]
    fn transparent_glyph_pixels_keep_the_background() {
        let bitmap = RgbaImage::from_pixel(24, 3, Px([255, 255, 255, 0]));
        let font = BitmapFont::from_image(bitmap, CLOCK_CHARSET).unwrap();
        let mut canvas = canvas_for(&font);
        compose(&mut canvas, &snapshot("11:11:11", "1111-11-11"), &font);

        assert!(canvas.image().pixels().all(|p| Rgba::from_array(p.0) == BACKGROUND));
    }

    #[test]
    fn compose_bumps_generation() {
        let font = striped_font();
        let mut canvas = canvas_for(&font);
        let before = canvas.generation();
        compose(&mut canvas, &snapshot("00:00:00", "2000-01-01"), &font);
        assert!(canvas.generation() > before);
    }

    #[test]
    #[should_panic(expected = "glyph atlas has no entry")]
    fn unknown_character_panics() {
        let font = striped_font();
        let mut canvas = canvas_for(&font);
        compose(&mut canvas, &snapshot("12 34", "2024-01-01"), &font);
    }
}
