mod gracefull;
mod logs;
mod mark;
mod month;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::mark::mask_card_number;
pub use self::month::{current_month_bounds, min_query_instant};
