use anyhow::Result;
use sprite2d::{AlphaMask, Sprite, SpriteConfig, Vec2};

use crate::textures;

const ROCK_COUNT: usize = 6;
const FIRE_EVERY_TICKS: u32 = 20;
const BULLET_SPEED: f32 = 8.0;
const BULLET_TTL: i32 = 45;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Ship,
    Rock,
    Bullet,
    Beacon,
}

pub struct Summary {
    pub hits: u32,
    pub rocks_left: usize,
    pub bullets_in_flight: usize,
}

pub struct BounceGame {
    config: SpriteConfig,
    width: f32,
    height: f32,
    rng: fastrand::Rng,

    ship: Sprite<Role>,
    beacon: Sprite<Role>,
    rocks: Vec<Sprite<Role>>,
    bullets: Vec<Sprite<Role>>,
    bullet_mask: AlphaMask,

    tick: u32,
    hits: u32,
}

impl BounceGame {
    pub fn new(config: SpriteConfig, width: f32, height: f32, seed: u64) -> Result<Self> {
        let mut rng = fastrand::Rng::with_seed(seed);

        let mut ship = Sprite::from_config(&config, Role::Ship);
        ship.bind_texture(AlphaMask::from_image(&textures::bar(24, 8))?)?;
        ship.set_origin(Vec2::new(12.0, 4.0));
        ship.set_position(Vec2::new(width / 2.0, height / 2.0));

        let mut beacon = Sprite::from_config(&config.clone().with_continuous_animation(false), Role::Beacon);
        beacon.bind_texture_strip(AlphaMask::from_image(&textures::blinking_strip(16, 4))?, 4)?;
        beacon.set_position(Vec2::new(8.0, 8.0));
        beacon.set_layer(1.0);

        let rock_mask = AlphaMask::from_image(&textures::disc(14, [150, 120, 90]))?;
        let mut rocks = Vec::with_capacity(ROCK_COUNT);
        for _ in 0..ROCK_COUNT {
            let mut rock = Sprite::from_config(&config, Role::Rock);
            rock.bind_texture(rock_mask.clone())?;
            rock.set_origin(Vec2::new(14.0, 14.0));
            rock.set_position(Vec2::new(
                rng.f32() * (width - 28.0),
                rng.f32() * (height - 28.0),
            ));
            rock.set_speed_and_direction(1.0 + rng.f32() * 2.0, rng.f32() * 360.0);
            rocks.push(rock);
        }

        Ok(Self {
            bullet_mask: AlphaMask::from_image(&textures::disc(2, [255, 255, 255]))?,
            config,
            width,
            height,
            rng,
            ship,
            beacon,
            rocks,
            bullets: Vec::new(),
            tick: 0,
            hits: 0,
        })
    }

    pub fn update(&mut self, now_ms: u64) -> Result<()> {
        self.tick += 1;

        // Ship slowly circles and coasts across the screen edges.
        self.ship.change_rotation_angle(1.5);
        self.ship.set_direction_angle(self.ship.rotation_angle());
        self.ship.accelerate(0.05);
        self.ship.move_and_wrap(self.width, self.height);

        if self.tick % FIRE_EVERY_TICKS == 0 {
            self.fire()?;
        }

        for bullet in &mut self.bullets {
            bullet.move_and_vanish(self.width, self.height);
        }

        for rock in &mut self.rocks {
            rock.move_step();
            rock.change_rotation_angle(if rock.direction_angle() < 180.0 { 2.0 } else { -2.0 });
            bounce_inside(rock, self.width, self.height);
        }

        for bullet in self.bullets.iter_mut().filter(|b| b.is_alive()) {
            if let Some(rock) = self.rocks.iter_mut().find(|r| r.is_collided(&*bullet)) {
                log::info!("bullet hit rock at {:?}", rock.position());
                rock.kill();
                bullet.kill();
                self.hits += 1;
                let last = self.beacon.frame_count() - 1;
                self.beacon.start_animation_short(0, last, 0);
            }
        }

        self.beacon.animate(now_ms);

        if self.ship.is_collided(&self.beacon) {
            log::debug!("ship is flying over the beacon");
        }

        let had_rocks = !self.rocks.is_empty();
        self.bullets.retain(|b| b.is_alive());
        self.rocks.retain(|r| r.is_alive());
        if had_rocks && self.rocks.is_empty() {
            log::info!("all rocks cleared on tick {}", self.tick);
        }
        Ok(())
    }

    fn fire(&mut self) -> Result<()> {
        let mut bullet = Sprite::from_config(&self.config, Role::Bullet);
        bullet.bind_texture(self.bullet_mask.clone())?;
        bullet.set_ttl(BULLET_TTL);
        bullet.set_max_speed(BULLET_SPEED);

        let nose = self.ship.position() + self.ship.origin();
        bullet.set_position(nose - bullet.center());
        // a little spread so not every shot follows the same line
        let spread = self.rng.f32() * 6.0 - 3.0;
        bullet.set_speed_and_direction(BULLET_SPEED, self.ship.rotation_angle() + spread);
        self.bullets.push(bullet);
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            hits: self.hits,
            rocks_left: self.rocks.len(),
            bullets_in_flight: self.bullets.len(),
        }
    }
}

/// Reflect a sprite's velocity off whichever screen edge it has crossed.
fn bounce_inside(sprite: &mut Sprite<Role>, width: f32, height: f32) {
    let rect = sprite.bounding_rect();
    let velocity = sprite.velocity();
    if (rect.left() < 0.0 && velocity.x < 0.0) || (rect.right() > width && velocity.x > 0.0) {
        sprite.reflect(Vec2::new(0.0, 1.0));
    }
    if (rect.top() < 0.0 && velocity.y < 0.0) || (rect.bottom() > height && velocity.y > 0.0) {
        sprite.reflect(Vec2::new(1.0, 0.0));
    }
}
