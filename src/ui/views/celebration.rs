use egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PIECES: usize = 120;
const COLORS: [Color32; 6] = [
    Color32::from_rgb(0xF4, 0x43, 0x36),
    Color32::from_rgb(0xFF, 0xC1, 0x07),
    Color32::from_rgb(0x4C, 0xAF, 0x50),
    Color32::from_rgb(0x21, 0x96, 0xF3),
    Color32::from_rgb(0x9C, 0x27, 0xB0),
    Color32::from_rgb(0xFF, 0x98, 0x00),
];

/// Fixed look of one piece. Seeded by its index so every frame draws the same piece.
struct Piece {
    speed: f32,
    drift: f32,
    phase: f32,
    x: f32,
    offset: f32,
}

fn piece(index: usize) -> Piece {
    let mut rng = StdRng::seed_from_u64(index as u64);
    Piece {
        speed: rng.gen_range(60.0..180.0),
        drift: rng.gen_range(0.0..30.0),
        phase: rng.gen_range(0.0..std::f32::consts::TAU),
        x: rng.r#gen::<f32>(),
        offset: rng.r#gen::<f32>(),
    }
}

/// Paints falling confetti over everything else. Needs continuous repaints.
pub fn paint_confetti(ctx: &Context) {
    let screen = ctx.screen_rect();
    let time = ctx.input(|i| i.time) as f32;
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));

    for i in 0..PIECES {
        let p = piece(i);
        let fall_span = screen.height() + 40.0;

        let x = screen.left() + screen.width() * p.x + p.drift * (time * 1.5 + p.phase).sin();
        let y = screen.top() - 20.0 + (time * p.speed + p.offset * fall_span) % fall_span;
        // fake the spin by varying the width
        let width = 4.0 + 6.0 * (time * 3.0 + p.phase).cos().abs();

        let rect = Rect::from_center_size(Pos2::new(x, y), Vec2::new(width, 10.0));
        painter.rect_filled(rect, 1.0, COLORS[i % COLORS.len()]);
    }

    ctx.request_repaint();
}

#[cfg(test)]
mod tests {
    use super::{PIECES, piece};

    #[test]
    fn pieces_stay_in_range_and_are_stable() {
        for i in 0..PIECES {
            let p = piece(i);
            assert!((60.0..180.0).contains(&p.speed));
            assert!((0.0..30.0).contains(&p.drift));
            assert!((0.0..std::f32::consts::TAU).contains(&p.phase));
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.offset));

            let again = piece(i);
            assert_eq!(
                (p.speed, p.drift, p.phase, p.x, p.offset),
                (again.speed, again.drift, again.phase, again.x, again.offset)
            );
        }
    }

    #[test]
    fn pieces_differ_from_each_other() {
        let a = piece(0);
        let b = piece(1);
        assert_ne!((a.x, a.speed), (b.x, b.speed));
    }
}
