pub mod cli;
pub mod clock;
pub mod config;
pub mod console;
pub mod format;
pub mod greeting;
pub mod render;
pub mod resolver;
pub mod surface;
pub mod timezone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, ConfigError, Settings, StoredSettings};
pub use console::{Console, VerbosityLevel, console, init_console};
pub use format::{DateFormatError, format_date, sanitize_date_format};
pub use greeting::Period;
pub use render::{Attributes, Display, RenderRequest};
pub use resolver::{GreetingResolver, ResolvedInstant, resolve};
pub use surface::{admin_preview, echo_greeting, expand_shortcodes, render_block, render_greeting};
pub use timezone::{EffectiveZone, ZoneSource, resolve_zone};
