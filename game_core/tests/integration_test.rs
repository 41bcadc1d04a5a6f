use game_core::*;
use glam::Vec2;

/// Surface that only counts draw calls
#[derive(Default)]
struct CountingSurface {
    rects: usize,
    texts: Vec<String>,
}

impl Surface for CountingSurface {
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {
        self.rects += 1;
    }

    fn fill_text(&mut self, text: &str, _x: f32, _y: f32, _font_px: f32, _color: Color) {
        self.texts.push(text.to_string());
    }

    fn measure_text(&mut self, text: &str, font_px: f32) -> f32 {
        text.len() as f32 * font_px * 0.6
    }
}

fn start(mode_key: &str) -> Game {
    let mut game = Game::new(GameRng::new(12345));
    game.key_down(mode_key);
    game.key_up(mode_key);
    game.update();
    game
}

/// Play frames until the ball is served again or `max_frames` pass
fn run_until_point(game: &mut Game, max_frames: usize) -> Option<Side> {
    let before = (
        game.player(Side::Left).score,
        game.player(Side::Right).score,
    );
    for _ in 0..max_frames {
        game.update();
        let now = (
            game.player(Side::Left).score,
            game.player(Side::Right).score,
        );
        if now.0 > before.0 {
            return Some(Side::Left);
        }
        if now.1 > before.1 {
            return Some(Side::Right);
        }
    }
    None
}

#[test]
fn test_menu_select_single_player_starts_fresh_match() {
    let game = start("1");

    assert_eq!(game.state(), FsmState::Playing);
    assert_eq!(game.mode(), Mode::VsComputer);
    assert_eq!(game.player(Side::Left).score, 0);
    assert_eq!(game.player(Side::Right).score, 0);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut game = Game::new(GameRng::default());
    game.key_down("F13");
    game.key_down("q");
    game.update();
    assert_eq!(game.state(), FsmState::Menu);
}

#[test]
fn test_paddle_bounds_hold_over_long_human_match() {
    let mut game = start("2");
    let max_y = game.config().playfield_height - game.config().paddle_height;

    for frame in 0..2000 {
        // Alternate directions every 90 frames, opposite for each player
        let (left, right) = if (frame / 90) % 2 == 0 {
            (("w", "s"), ("ArrowDown", "ArrowUp"))
        } else {
            (("s", "w"), ("ArrowUp", "ArrowDown"))
        };
        game.key_up(left.1);
        game.key_down(left.0);
        game.key_up(right.1);
        game.key_down(right.0);

        game.update();
        if game.state() != FsmState::Playing {
            break;
        }
        for player in game.players() {
            assert!(
                player.paddle.y >= 0.0 && player.paddle.y <= max_y,
                "frame {}: paddle y = {}",
                frame,
                player.paddle.y
            );
        }
    }
}

#[test]
fn test_unattended_left_paddle_concedes_to_computer() {
    let mut game = start("1");

    // Nobody touches the left paddle; the serve heads right first, the
    // computer returns it, and the left side eventually misses.
    let scorer = run_until_point(&mut game, 5000);
    assert_eq!(scorer, Some(Side::Right));
    assert_eq!(
        game.ball().pos,
        Vec2::new(400.0, 300.0),
        "Ball should be re-served from the centre"
    );
}

#[test]
fn test_computer_wins_and_scores_freeze() {
    let mut game = start("1");

    for _ in 0..4 {
        assert_eq!(run_until_point(&mut game, 5000), Some(Side::Right));
    }
    assert_eq!(game.state(), FsmState::Playing, "4 points is not a win");
    assert_eq!(game.winner(), None);

    // 4 -> 5
    assert_eq!(run_until_point(&mut game, 5000), Some(Side::Right));
    assert_eq!(game.state(), FsmState::Result);
    assert_eq!(game.winner_side(), Some(Side::Right));
    assert_eq!(game.winner().map(|p| p.name.as_str()), Some("Computer"));
    assert_eq!(game.player(Side::Right).score, 5);

    let ball = *game.ball();
    for _ in 0..500 {
        game.update();
    }
    assert_eq!(game.player(Side::Right).score, 5, "No scoring in Result");
    assert_eq!(game.player(Side::Left).score, 0);
    assert_eq!(*game.ball(), ball, "No simulation in Result");
}

#[test]
fn test_result_returns_to_menu_and_next_match_is_fresh() {
    let mut game = start("1");
    for _ in 0..5 {
        run_until_point(&mut game, 5000);
    }
    assert_eq!(game.state(), FsmState::Result);

    game.key_down("Enter");
    game.key_up("Enter");
    game.update();
    assert_eq!(game.state(), FsmState::Menu);
    assert_eq!(game.winner(), None);

    game.key_down("2");
    game.key_up("2");
    game.update();
    assert_eq!(game.state(), FsmState::Playing);
    assert_eq!(game.mode(), Mode::VsHuman);
    assert_eq!(game.player(Side::Left).score, 0);
    assert_eq!(game.player(Side::Right).score, 0);
}

#[test]
fn test_custom_win_score_ends_match() {
    let config = Config {
        win_score: 1,
        ..Config::default()
    };
    let mut game = Game::with_config(config, GameRng::new(3)).expect("valid config");
    game.key_down("1");
    game.update();

    assert_eq!(run_until_point(&mut game, 5000), Some(Side::Right));
    assert_eq!(game.state(), FsmState::Result);
    assert_eq!(game.winner_side(), Some(Side::Right));
}

#[test]
fn test_only_one_side_scores_per_frame() {
    let mut game = start("2");
    for _ in 0..3000 {
        game.update();
        let events = game.events();
        assert!(!(events.left_scored && events.right_scored));
        if game.state() != FsmState::Playing {
            break;
        }
    }
}

#[test]
fn test_tick_renders_each_state() {
    let mut game = Game::new(GameRng::new(1));

    let mut surface = CountingSurface::default();
    game.tick(&mut surface);
    assert!(surface.texts.contains(&"PONG".to_string()));

    game.key_down("2");
    let mut surface = CountingSurface::default();
    game.tick(&mut surface);
    assert_eq!(surface.texts, vec!["0", "0"]);
    assert_eq!(surface.rects, 24);

    game.key_down("Escape");
    let mut surface = CountingSurface::default();
    game.tick(&mut surface);
    assert_eq!(game.state(), FsmState::Menu);
    assert!(surface.texts.contains(&"Press 2 for two players".to_string()));
}

#[test]
fn test_result_screen_names_winner() {
    let mut game = start("1");
    for _ in 0..5 {
        run_until_point(&mut game, 5000);
    }

    let mut surface = CountingSurface::default();
    render::draw(&game, &mut surface);

    assert_eq!(
        surface.texts,
        vec!["Computer wins!", "0 - 5", "Press Enter to return to menu"]
    );
}
