//! Drives sprites through the public API the way a game loop would.

use sprite2d::{is_collided, AlphaMask, CollisionOutcome, Sprite, SpriteConfig, Vec2};

fn opaque(size: u32) -> AlphaMask {
    AlphaMask::opaque(size, size).unwrap()
}

#[test]
fn bullet_expires_after_its_ttl() {
    let config = SpriteConfig::default().with_ttl(3);
    let mut bullet = Sprite::from_config(&config, ());
    bullet.bind_texture(opaque(2)).unwrap();
    bullet.set_speed_and_direction(4.0, 0.0);

    let mut moves = 0;
    for tick in 0..10 {
        if bullet.tick(tick * 16) {
            moves += 1;
        }
    }
    assert_eq!(moves, 3);
    assert!(!bullet.is_alive());
    assert!((bullet.position().x - 12.0).abs() < 1e-4);
}

#[test]
fn head_on_sprites_meet_and_report_symmetric_collision() {
    let mut left = Sprite::new();
    left.bind_texture(opaque(8)).unwrap();
    left.set_position(Vec2::new(0.0, 0.0));
    left.set_velocity(2.0, 0.0);

    let mut right = Sprite::new();
    right.bind_texture(opaque(8)).unwrap();
    right.set_position(Vec2::new(40.0, 0.0));
    right.set_velocity(-2.0, 0.0);

    let mut first_contact = None;
    for tick in 0..20 {
        left.move_step();
        right.move_step();
        assert_eq!(is_collided(&left, &right), is_collided(&right, &left));
        if first_contact.is_none() && left.is_collided(&right) {
            first_contact = Some(tick);
        }
    }
    // Gap of 32 closes at 4 per tick; touching edges are not a collision.
    assert_eq!(first_contact, Some(8));
}

#[test]
fn spinning_sprite_stays_normalized_and_collides_when_rotated() {
    let mut paddle = Sprite::new();
    paddle.bind_texture(AlphaMask::opaque(20, 2).unwrap()).unwrap();
    paddle.set_origin(Vec2::new(10.0, 1.0));
    paddle.set_position(Vec2::new(50.0, 50.0));

    let mut ball = Sprite::new();
    ball.bind_texture(opaque(2)).unwrap();
    ball.set_position(Vec2::new(59.5, 41.5));

    assert_eq!(paddle.collision_with(&ball), CollisionOutcome::Separated);

    for _ in 0..90 {
        paddle.change_rotation_angle(-1.0);
        assert!((0.0..360.0).contains(&paddle.rotation_angle()));
    }
    // -90 degrees: the paddle now stands upright around x = 60.
    assert!((paddle.rotation_angle() - 270.0).abs() < 1e-3);
    assert!(paddle.is_collided(&ball));
    assert!(ball.is_collided(&paddle));
}

#[test]
fn ball_bounces_between_walls() {
    let mut ball = Sprite::new();
    ball.bind_texture(opaque(4)).unwrap();
    ball.set_position(Vec2::new(50.0, 50.0));
    ball.set_velocity(6.0, 0.0);

    for _ in 0..200 {
        ball.move_step();
        let rect = ball.bounding_rect();
        if rect.right() > 100.0 || rect.left() < 0.0 {
            ball.reflect(Vec2::new(0.0, 1.0));
        }
        assert!(ball.speed() <= ball.max_speed() + 1e-4);
    }
    let x = ball.position().x;
    assert!(x > -7.0 && x < 103.0, "ball escaped to {x}");
}

#[test]
fn animated_marker_plays_once_then_rests() {
    let strip = AlphaMask::opaque(48, 16).unwrap();
    let config = SpriteConfig::default()
        .with_continuous_animation(false)
        .with_frame_interval(100);
    let mut marker = Sprite::from_config(&config, 'X');
    marker.bind_texture_strip(strip, 3).unwrap();
    assert!(!marker.is_animating());

    marker.start_animation_short(0, 2, 0);
    let mut frames = Vec::new();
    for now in (0..=500).step_by(50) {
        marker.animate(now);
        frames.push(marker.current_frame());
    }
    assert_eq!(frames, vec![0, 0, 1, 1, 2, 2, 0, 0, 0, 0, 0]);
    assert!(!marker.is_animating());
    assert_eq!(marker.source_rect().unwrap().x, 0);
    assert_eq!(marker.tag, 'X');
}

#[test]
fn vanished_sprites_stop_colliding() {
    let mut shot = Sprite::new();
    shot.bind_texture(opaque(4)).unwrap();
    shot.set_position(Vec2::new(-2.0, 10.0));
    shot.set_velocity(-5.0, 0.0);

    let mut wall = Sprite::new();
    wall.bind_texture(opaque(4)).unwrap();
    wall.set_position(Vec2::new(-8.0, 10.0));

    shot.move_and_vanish(200.0, 200.0);
    assert!(!shot.is_alive());
    assert_eq!(shot.collision_with(&wall), CollisionOutcome::Inactive);
}

#[test]
fn looping_marker_cycles_its_short_sequence() {
    let strip = AlphaMask::opaque(96, 16).unwrap();
    let mut marker = Sprite::from_config(&SpriteConfig::default(), ());
    marker.bind_texture_strip(strip, 6).unwrap();

    marker.start_animation_short(1, 2, 4);
    let mut frames = vec![marker.current_frame()];
    for now in 1..=5 {
        marker.animate(now);
        frames.push(marker.current_frame());
    }
    assert_eq!(frames, vec![1, 2, 0, 1, 2, 0]);
    assert!(marker.is_animating());
}
