//! Engine-facing shell: input, fixed-step simulation, audio cues, drawing.

use anyhow::Result;
use gemfall_engine::audio::{AudioOutput, Sound};
use gemfall_engine::coords::Vec2;
use gemfall_engine::core::{App, AppControl, FrameCtx};
use gemfall_engine::input::Key;
use gemfall_engine::paint::Color;
use gemfall_engine::render::{SpriteRenderer, TextRenderer};
use gemfall_engine::scene::{DrawList, Layer};
use gemfall_engine::text::{FontId, FontSystem};
use gemfall_engine::time::FixedStep;

use crate::assets::{self, GameAssets, SpriteHandle};
use crate::config::GameConfig;
use crate::entity::Body;
use crate::scenario::{Backdrop, Scenario};
use crate::session::{Session, StepReport};
use crate::world::Arena;

const SCORE_POS: Vec2 = Vec2::new(10.0, 20.0);
const SCORE_SIZE: f32 = 14.0;
const GAME_OVER_POS: Vec2 = Vec2::new(150.0, 300.0);
const GAME_OVER_SIZE: f32 = 72.0;

const RESTART_KEY: Key = Key::Char('r');

pub struct GameApp {
    scenario: Scenario,
    session: Session,
    assets: GameAssets,

    sprites: SpriteRenderer,
    text: TextRenderer,
    fonts: FontSystem,
    font: Option<FontId>,
    audio: AudioOutput,

    draw_list: DrawList,
    ticker: FixedStep,
}

impl GameApp {
    /// Loads assets, opens audio and spawns the first session.
    pub fn new(scenario: Scenario, config: &GameConfig) -> Result<Self> {
        let mut sprites = SpriteRenderer::new();
        let assets = GameAssets::load(&scenario, &config.assets.root, &mut sprites)?;

        let mut fonts = FontSystem::new();
        let font = assets::load_font(&mut fonts, config.assets.font.as_deref());

        let mut audio = if assets.cues.is_some() {
            AudioOutput::open_or_silent()
        } else {
            AudioOutput::silent()
        };
        audio.set_volume(config.assets.volume);

        let arena = Arena::new(config.window.width as f32, config.window.height as f32);
        let setup = scenario.session_setup(
            arena,
            assets.player.size,
            assets.collectible.size,
            assets.hazard.map(|h| h.size),
            config,
        );
        let session = Session::new(setup, config.seed);

        Ok(Self {
            scenario,
            session,
            assets,
            sprites,
            text: TextRenderer::new(),
            fonts,
            font,
            audio,
            draw_list: DrawList::new(),
            ticker: FixedStep::default(),
        })
    }

    fn play_cues(&self, report: StepReport) {
        let Some(cues) = self.assets.cues.as_ref() else { return };
        let plays = std::iter::repeat_n(&cues.collect, report.collected)
            .chain(std::iter::repeat_n(&cues.hit, report.hazards_hit));
        for sound in plays {
            play(&self.audio, sound);
        }
    }

    fn clear_color(&self) -> Color {
        match self.scenario.backdrop {
            Backdrop::Clear(c) => c,
            Backdrop::Image(_) => Color::BLACK,
        }
    }
}

fn play(audio: &AudioOutput, sound: &Sound) {
    if let Err(e) = audio.play(sound) {
        log::warn!("{e}");
    }
}

impl App for GameApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let arena = self.session.arena();

        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }
        if ctx.input_frame.key_pressed(RESTART_KEY) {
            self.session.restart();
            self.ticker.reset();
        }
        if let Some((x, y)) = ctx.input_frame.pointer_moves().last() {
            self.session.move_player(arena.to_world(x, y));
        }

        for _ in 0..self.ticker.advance(ctx.time.dt) {
            let report = self.session.step();
            if !report.is_empty() {
                self.play_cues(report);
            }
        }

        self.draw_list.clear();
        record_scene(
            &mut self.draw_list,
            &self.session,
            &self.assets,
            self.font.map(|id| (&self.fonts, id)),
        );

        let clear = self.clear_color();
        let (sprites, text, fonts, draw_list) =
            (&mut self.sprites, &mut self.text, &self.fonts, &mut self.draw_list);
        ctx.render(clear, |rctx, target| {
            sprites.render(rctx, target, draw_list);
            text.render(rctx, target, draw_list, fonts);
        })
    }
}

/// Records one frame: backdrop, collectibles, player, hazards, then text.
fn record_scene(
    list: &mut DrawList,
    session: &Session,
    assets: &GameAssets,
    font: Option<(&FontSystem, FontId)>,
) {
    let arena = session.arena();

    if let Some(texture) = assets.backdrop {
        list.push_sprite(Layer::BACKGROUND, texture, arena.to_screen(arena.bounds()));
    }

    let mut push = |handle: SpriteHandle, body: &dyn Body| {
        list.push_sprite(Layer::WORLD, handle.texture, arena.to_screen(body.hitbox()));
    };
    for coin in session.collectibles() {
        push(assets.collectible, coin);
    }
    push(assets.player, session.player());
    if let Some(handle) = assets.hazard {
        for razor in session.hazards() {
            push(handle, razor);
        }
    }

    let Some((fonts, id)) = font else { return };
    let mut text = |s: String, pos: Vec2, size: f32, color: Color| {
        // `pos` is the baseline start, as the games place their text.
        let baseline = arena.point_to_screen(pos);
        let origin = Vec2::new(baseline.x, baseline.y - fonts.ascent(id, size));
        list.push_text(Layer::OVERLAY, s, id, size, color, origin);
    };

    text(format!("Score: {}", session.score()), SCORE_POS, SCORE_SIZE, Color::WHITE);
    if session.is_over() {
        text("GAME OVER".to_string(), GAME_OVER_POS, GAME_OVER_SIZE, Color::GREEN);
    }
}
