pub const APP_NAME: &str = "vr-surf";
pub const SETTINGS_FILE: &str = "locomotion.json";

pub const GRAVITY: f32 = 9.81;

pub const CAPSULE_MIN_HEIGHT: f32 = 1.0;
pub const CAPSULE_MAX_HEIGHT: f32 = 2.0;
pub const CAPSULE_RADIUS: f32 = 0.25;
pub const CAPSULE_FIT_EPSILON: f32 = 0.001;

pub const PLAYER_SPEED: f32 = 3.0;
pub const STICK_DEADZONE: f32 = 0.1;
pub const PLAYER_JUMP_HEIGHT: f32 = 1.0;

pub const MAX_ACCELERATION: f32 = 3.0;
pub const ACCELERATION_DECAY: f32 = 0.05;
pub const ACCELERATION_RESET_TIME: f32 = 0.5;
// Rad/s of yaw that add one unit to the raw acceleration factor.
pub const TURN_RATE_PER_ACCELERATION: f32 = 3.0;

pub const GLIDING_DECAY: f32 = 0.5;

pub const LOW_FRICTION: f32 = 0.0;
pub const HIGH_FRICTION: f32 = 1.0;
pub const SLEEP_SPEED: f32 = 0.05;

pub const RESPAWN_POSITION: [f32; 3] = [0.0, 1.0, 0.0];
