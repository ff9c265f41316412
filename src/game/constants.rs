pub const TICK_MS: u64 = 50;
pub const SNAKE_SPEED: f64 = 8.0;
pub const TURN_RATE: f64 = 0.1;
pub const STARTING_LENGTH: usize = 20;
pub const SEGMENT_SPACING: f64 = 5.0;
pub const SPAWN_X: f64 = 600.0;
pub const SPAWN_Y: f64 = 100.0;
pub const WORLD_SIZE: f64 = 3000.0;
// Wire coordinates carry two decimal places; canonical keys scale by this.
pub const COORD_SCALE: f64 = 100.0;
