//! The game: owns both players, the ball and the state machine

use std::collections::VecDeque;

use log::{debug, info};

use crate::systems::*;
use crate::{
    render, Ball, Config, ConfigError, Events, FsmState, GameAction, GameFsm, GameRng,
    InputTracker, KeyBindings, Paddle, Player, Side, Surface, TransitionResult,
};

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    VsComputer,
    VsHuman,
}

impl Mode {
    fn right_player_name(self) -> &'static str {
        match self {
            Mode::VsComputer => "Computer",
            Mode::VsHuman => "Player 2",
        }
    }
}

pub struct Game {
    fsm: GameFsm,
    mode: Mode,
    config: Config,
    players: [Player; 2],
    ball: Ball,
    input: InputTracker,
    bindings: KeyBindings,
    pending_actions: VecDeque<GameAction>,
    winner: Option<Side>,
    events: Events,
    rng: GameRng,
}

impl Game {
    /// Game on the default 800x600 playfield, starting at the menu
    pub fn new(rng: GameRng) -> Self {
        Self::build(Config::default(), rng)
    }

    pub fn with_config(config: Config, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: Config, rng: GameRng) -> Self {
        let mode = Mode::default();
        let players = [
            Player::new("Player 1", Paddle::new(Side::Left, &config)),
            Player::new(
                mode.right_player_name(),
                Paddle::new(Side::Right, &config),
            ),
        ];
        let ball = Ball::serve(&config);

        Self {
            fsm: GameFsm::new(),
            mode,
            config,
            players,
            ball,
            input: InputTracker::new(),
            bindings: KeyBindings::default(),
            pending_actions: VecDeque::new(),
            winner: None,
            events: Events::new(),
            rng,
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Events raised by the most recent [`update`](Self::update)
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Side that won the last match; only set in the Result state
    pub fn winner_side(&self) -> Option<Side> {
        self.winner
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|side| self.player(side))
    }

    /// Record a key press; mode and menu keys are queued for the next update
    pub fn key_down(&mut self, key: &str) {
        self.input.set_pressed(key, true);
        if let Some(action) = self.bindings.action_for(self.fsm.state(), key) {
            self.pending_actions.push_back(action);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.set_pressed(key, false);
    }

    /// Forget all held keys (focus lost)
    pub fn release_all_keys(&mut self) {
        self.input.clear();
    }

    /// Apply a state machine action immediately
    ///
    /// `Win` is rejected here; it is only raised by scoring.
    pub fn apply(&mut self, action: GameAction) -> TransitionResult {
        if action == GameAction::Win {
            debug!("Ignoring external {:?}", action);
            return self.fsm.reject(action);
        }

        let result = self.fsm.transition(action);
        if !result.success() {
            debug!("Ignoring {:?} in {:?}", action, result.from_state());
            return result;
        }

        match action {
            GameAction::SelectSinglePlayer => self.start_match(Mode::VsComputer),
            GameAction::SelectTwoPlayer => self.start_match(Mode::VsHuman),
            GameAction::Cancel => self.reset_match(),
            GameAction::ReturnToMenu => self.winner = None,
            GameAction::Win => {}
        }

        info!(
            "{:?} -> {:?} on {:?}",
            result.from_state(),
            result.to_state(),
            action
        );
        result
    }

    /// Advance one frame: drain queued actions, then run the physics step
    /// if a match is in progress
    pub fn update(&mut self) {
        self.events.clear();

        while let Some(action) = self.pending_actions.pop_front() {
            self.apply(action);
        }

        if self.fsm.is_playing() {
            self.step();
        }
    }

    /// Advance one frame and render the resulting state
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        self.update();
        render::draw(self, surface);
    }

    fn step(&mut self) {
        let [left, right] = &mut self.players;

        // 1. Paddles follow input (or the computer controller)
        apply_human_input(
            &mut left.paddle,
            &self.input,
            &self.bindings.left_up,
            &self.bindings.left_down,
        );
        match self.mode {
            Mode::VsHuman => apply_human_input(
                &mut right.paddle,
                &self.input,
                &self.bindings.right_up,
                &self.bindings.right_down,
            ),
            Mode::VsComputer => {
                drive_computer_paddle(&mut right.paddle, &self.ball, self.config.ai_lerp_factor)
            }
        }

        // 2. Keep both paddles on the field
        clamp_paddles(&mut self.players, &self.config);

        // 3. Move ball
        move_ball(&mut self.ball);

        // 4. Walls, then paddles
        check_wall_collision(&mut self.ball, &self.config, &mut self.events);
        check_paddle_collisions(&mut self.ball, &self.players, &mut self.events);

        // 5. Points and the match
        let scorer = check_scoring(
            &mut self.ball,
            &mut self.players,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );
        if let Some(side) = scorer {
            if self.player(side).score >= self.config.win_score {
                self.declare_winner(side);
            }
        }
    }

    fn declare_winner(&mut self, side: Side) {
        let result = self.fsm.transition(GameAction::Win);
        if result.success() {
            self.winner = Some(side);
            info!(
                "{} wins {} - {}",
                self.player(side).name,
                self.player(Side::Left).score,
                self.player(Side::Right).score
            );
        }
    }

    fn start_match(&mut self, mode: Mode) {
        self.mode = mode;
        self.players[Side::Right.index()].name = mode.right_player_name().to_string();
        self.reset_match();
    }

    /// Zero scores, recentre paddles, re-serve, forget the winner
    fn reset_match(&mut self) {
        for player in self.players.iter_mut() {
            player.reset(&self.config);
        }
        self.ball = Ball::serve(&self.config);
        self.winner = None;
        self.events.clear();
    }
}
