// DOM hooks expected in the page markup.

pub const CONTAINER_SELECTOR: &str = ".wasserwaage";
pub const ROTOR_SELECTOR: &str = ".rotor";
pub const BUBBLE_VERTICAL_SELECTOR: &str = ".bubble.vertical";
pub const BUBBLE_HORIZONTAL_SELECTOR: &str = ".bubble.horizontal";
pub const BUBBLE_ROTATING_SELECTOR: &str = ".bubble.rotating";

// Optional elements
pub const READOUT_ALPHA_ID: &str = "alpha";
pub const READOUT_BETA_ID: &str = "beta";
pub const READOUT_GAMMA_ID: &str = "gamma";
pub const PERMISSION_BUTTON_ID: &str = "request-permission";
pub const ROTATE_HINT_ID: &str = "rotate-hint";

// Container attribute overriding the sensor throttle interval (ms)
pub const THROTTLE_ATTR: &str = "data-throttle-ms";
