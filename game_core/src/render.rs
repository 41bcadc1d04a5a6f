//! Per-state render routines
//!
//! Everything here reads the [`Game`] and issues draw calls on a [`Surface`];
//! nothing mutates simulation state.

use crate::{Config, FsmState, Game, Side};

/// Fill colour understood by every surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS colour string, e.g. `rgb(255, 255, 255)`
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Drawing collaborator the game renders onto
///
/// Coordinates are playfield pixels with the origin at the top-left corner.
/// `fill_text` places the left end of the text's baseline at `(x, y)`.
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, color: Color);

    /// Rendered width of `text` at the given font size
    fn measure_text(&mut self, text: &str, font_px: f32) -> f32;
}

pub const SCORE_FONT_PX: f32 = 50.0;
pub const TITLE_FONT_PX: f32 = 72.0;
pub const BODY_FONT_PX: f32 = 28.0;

const SCORE_BASELINE_Y: f32 = 70.0;
const CENTER_LINE_DASHES: u32 = 20;
const CENTER_LINE_WIDTH: f32 = 3.0;

/// Render the view for the game's current state
pub fn draw<S: Surface>(game: &Game, surface: &mut S) {
    match game.state() {
        FsmState::Menu => draw_menu(game.config(), surface),
        FsmState::Playing => draw_field(game, surface),
        FsmState::Result => draw_result(game, surface),
    }
}

/// Title screen with the mode selection keys
pub fn draw_menu<S: Surface>(config: &Config, surface: &mut S) {
    clear(config, surface);

    let center_x = config.playfield_width / 2.0;
    let third = config.playfield_height / 3.0;
    draw_centered_text(surface, "PONG", center_x, third, TITLE_FONT_PX);
    draw_centered_text(
        surface,
        "Press 1 for single player",
        center_x,
        third + 90.0,
        BODY_FONT_PX,
    );
    draw_centered_text(
        surface,
        "Press 2 for two players",
        center_x,
        third + 130.0,
        BODY_FONT_PX,
    );
}

/// Scoreboard, centre line, paddles and ball
pub fn draw_field<S: Surface>(game: &Game, surface: &mut S) {
    let config = game.config();
    clear(config, surface);

    game.player(Side::Left).paddle.draw(surface);
    game.player(Side::Right).paddle.draw(surface);

    let dash_step = config.playfield_height / CENTER_LINE_DASHES as f32;
    let dash_height = config.playfield_height / (CENTER_LINE_DASHES * 2) as f32;
    for dash in 0..CENTER_LINE_DASHES {
        surface.fill_rect(
            config.playfield_width / 2.0,
            dash as f32 * dash_step,
            CENTER_LINE_WIDTH,
            dash_height,
            Color::WHITE,
        );
    }

    game.ball().draw(surface);

    for (side, fraction) in [(Side::Left, 0.25), (Side::Right, 0.75)] {
        draw_centered_text(
            surface,
            &game.player(side).score.to_string(),
            config.playfield_width * fraction,
            SCORE_BASELINE_Y,
            SCORE_FONT_PX,
        );
    }
}

/// Winner announcement and final score
pub fn draw_result<S: Surface>(game: &Game, surface: &mut S) {
    let config = game.config();
    clear(config, surface);

    let center_x = config.playfield_width / 2.0;
    let third = config.playfield_height / 3.0;

    if let Some(winner) = game.winner() {
        draw_centered_text(
            surface,
            &format!("{} wins!", winner.name),
            center_x,
            third,
            SCORE_FONT_PX,
        );
    }

    let final_score = format!(
        "{} - {}",
        game.player(Side::Left).score,
        game.player(Side::Right).score
    );
    draw_centered_text(surface, &final_score, center_x, third + 80.0, BODY_FONT_PX);
    draw_centered_text(
        surface,
        "Press Enter to return to menu",
        center_x,
        third + 140.0,
        BODY_FONT_PX,
    );
}

fn clear<S: Surface>(config: &Config, surface: &mut S) {
    surface.fill_rect(
        0.0,
        0.0,
        config.playfield_width,
        config.playfield_height,
        Color::BLACK,
    );
}

fn draw_centered_text<S: Surface>(
    surface: &mut S,
    text: &str,
    center_x: f32,
    baseline_y: f32,
    font_px: f32,
) {
    let width = surface.measure_text(text, font_px);
    surface.fill_text(text, center_x - width / 2.0, baseline_y, font_px, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameAction, GameRng};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect(f32, f32, f32, f32, Color),
        Text(String, f32, f32, f32),
    }

    /// Records draw calls; every glyph is 10px wide regardless of font size
    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(text, ..) => Some(text.as_str()),
                    Op::Rect(..) => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.ops.push(Op::Rect(x, y, width, height, color));
        }

        fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, _color: Color) {
            self.ops.push(Op::Text(text.to_string(), x, y, font_px));
        }

        fn measure_text(&mut self, text: &str, _font_px: f32) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::WHITE.to_css(), "rgb(255, 255, 255)");
        assert_eq!(Color::rgb(1, 2, 3).to_css(), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_menu_clears_then_shows_options() {
        let game = Game::new(GameRng::new(1));
        let mut surface = Recorder::default();

        draw(&game, &mut surface);

        assert_eq!(
            surface.ops[0],
            Op::Rect(0.0, 0.0, 800.0, 600.0, Color::BLACK),
            "First call should clear the playfield"
        );
        assert_eq!(
            surface.texts(),
            vec!["PONG", "Press 1 for single player", "Press 2 for two players"]
        );
    }

    #[test]
    fn test_text_is_centered_using_measured_width() {
        let game = Game::new(GameRng::new(1));
        let mut surface = Recorder::default();

        draw(&game, &mut surface);

        // "PONG" is 40px wide in the recorder, centred on x = 400
        assert_eq!(
            surface.ops[1],
            Op::Text("PONG".to_string(), 380.0, 200.0, TITLE_FONT_PX)
        );
    }

    #[test]
    fn test_field_draws_paddles_center_line_ball_and_scores() {
        let mut game = Game::new(GameRng::new(1));
        game.apply(GameAction::SelectTwoPlayer);
        let mut surface = Recorder::default();

        draw(&game, &mut surface);

        // clear + 2 paddles + 20 dashes + ball
        let rects = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Rect(..)))
            .count();
        assert_eq!(rects, 24);
        assert_eq!(surface.ops[1], Op::Rect(15.0, 250.0, 10.0, 100.0, Color::WHITE));
        assert_eq!(surface.ops[2], Op::Rect(775.0, 250.0, 10.0, 100.0, Color::WHITE));
        assert_eq!(surface.ops[3], Op::Rect(400.0, 0.0, 3.0, 15.0, Color::WHITE));
        assert_eq!(surface.ops[23], Op::Rect(400.0, 300.0, 10.0, 10.0, Color::WHITE));
        assert_eq!(
            surface.ops[24],
            Op::Text("0".to_string(), 195.0, 70.0, SCORE_FONT_PX)
        );
        assert_eq!(
            surface.ops[25],
            Op::Text("0".to_string(), 595.0, 70.0, SCORE_FONT_PX)
        );
    }

    #[test]
    fn test_rendering_does_not_change_the_game() {
        let mut game = Game::new(GameRng::new(1));
        game.apply(GameAction::SelectSinglePlayer);
        let ball_before = *game.ball();
        let state_before = game.state();

        let mut surface = Recorder::default();
        draw(&game, &mut surface);
        draw(&game, &mut surface);

        assert_eq!(*game.ball(), ball_before);
        assert_eq!(game.state(), state_before);
    }
}
