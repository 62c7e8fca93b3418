//! Battlefield canvas: ground, warriors, enemy, particles and overlay text.
//!
//! Shapes are drawn in world units on a braille canvas. The world has y
//! growing downward, the canvas upward, so every y goes through [`flip`].
//! Canvas shapes are outlines; filled shapes are built from stacked lines or
//! concentric circles spaced [`FILL_STEP`] apart.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Context, Line, Points},
    },
};

use client_frontend_core::{
    Scene,
    scene::{
        Enemy, Particle, Warrior,
        color::{self, Rgb},
        geometry::{GROUND_TOP, Point, WORLD_HEIGHT, WORLD_WIDTH},
    },
};

use crate::presentation::theme::RatatuiTheme;

const FILL_STEP: f64 = 1.5;
const HEALTH_BAR_WIDTH: f64 = 80.0;
const HEALTH_BAR_HEIGHT: f64 = 8.0;

pub fn render(frame: &mut Frame, area: Rect, scene: &Scene) {
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Battlefield"))
        .background_color(RatatuiTheme::color(color::BACKGROUND))
        .marker(Marker::Braille)
        .x_bounds([0.0, WORLD_WIDTH])
        .y_bounds([0.0, WORLD_HEIGHT])
        .paint(|ctx| paint(ctx, scene));

    frame.render_widget(canvas, area);
}

fn paint(ctx: &mut Context, scene: &Scene) {
    let Some(snapshot) = scene.snapshot() else {
        ctx.print(
            WORLD_WIDTH / 2.0 - 70.0,
            flip(WORLD_HEIGHT / 2.0),
            TextLine::styled("Connecting to server...", Style::default().fg(Color::White)),
        );
        return;
    };

    fill_rect(
        ctx,
        Point::new(0.0, GROUND_TOP),
        WORLD_WIDTH,
        WORLD_HEIGHT - GROUND_TOP,
        color::GROUND,
    );
    ctx.layer();

    for warrior in scene.warriors() {
        draw_warrior(ctx, warrior);
    }
    ctx.layer();

    if let Some(enemy) = scene.enemy().filter(|enemy| enemy.is_alive()) {
        draw_enemy(ctx, enemy);
    }
    ctx.layer();

    for particle in scene.particles().iter() {
        draw_particle(ctx, particle);
    }
    ctx.layer();

    let overlay = Style::default().fg(Color::White);
    ctx.print(
        10.0,
        flip(25.0),
        TextLine::from(Span::styled(
            format!("Warriors: {}", snapshot.resources.warrior_count()),
            overlay,
        )),
    );
    ctx.print(
        10.0,
        flip(50.0),
        TextLine::from(Span::styled(format!("Wave: {}", snapshot.battle.wave), overlay)),
    );
}

/// Head, body, arms and two legs, anchored at the head center.
fn draw_warrior(ctx: &mut Context, warrior: &Warrior) {
    let Point { x, y } = warrior.position;
    let size = warrior.size;
    let color = warrior.color;

    fill_circle(ctx, warrior.position, size * 0.4, color);
    fill_rect(ctx, Point::new(x - 2.0, y + size * 0.4), 4.0, size * 0.6, color);
    fill_rect(ctx, Point::new(x - size * 0.4, y + size * 0.5), size * 0.8, 3.0, color);
    fill_rect(ctx, Point::new(x - 5.0, y + size), 4.0, size * 0.5, color);
    fill_rect(ctx, Point::new(x + 1.0, y + size), 4.0, size * 0.5, color);
}

fn draw_enemy(ctx: &mut Context, enemy: &Enemy) {
    let center = enemy.position;
    fill_circle(ctx, center, enemy.size, enemy.color);

    for side in [-10.0, 10.0] {
        let eye = center.offset(side, -5.0);
        fill_circle(ctx, eye, 5.0, color::WHITE);
        fill_circle(ctx, eye, 2.0, color::BLACK);
    }

    let bar = center.offset(-HEALTH_BAR_WIDTH / 2.0, -enemy.size - 20.0);
    fill_rect(ctx, bar, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT, color::HEALTH_TRACK);
    fill_rect(
        ctx,
        bar,
        HEALTH_BAR_WIDTH * enemy.health_fraction(),
        HEALTH_BAR_HEIGHT,
        enemy.health_bar_color(),
    );
}

fn draw_particle(ctx: &mut Context, particle: &Particle) {
    fill_circle(
        ctx,
        particle.position,
        particle.size,
        particle.color.faded(particle.alpha()),
    );
}

fn flip(y: f64) -> f64 {
    WORLD_HEIGHT - y
}

/// Filled rectangle with its top-left corner at `origin`.
fn fill_rect(ctx: &mut Context, origin: Point, width: f64, height: f64, rgb: Rgb) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let color = RatatuiTheme::color(rgb);
    let bottom = origin.y + height;
    let mut row = origin.y;
    while row < bottom {
        ctx.draw(&Line::new(origin.x, flip(row), origin.x + width, flip(row), color));
        row += FILL_STEP;
    }
    ctx.draw(&Line::new(origin.x, flip(bottom), origin.x + width, flip(bottom), color));
}

fn fill_circle(ctx: &mut Context, center: Point, radius: f64, rgb: Rgb) {
    let color = RatatuiTheme::color(rgb);
    let (x, y) = (center.x, flip(center.y));
    let mut r = radius;
    while r > 0.0 {
        ctx.draw(&Circle {
            x,
            y,
            radius: r,
            color,
        });
        r -= FILL_STEP;
    }
    ctx.draw(&Points {
        coords: &[(x, y)],
        color,
    });
}
