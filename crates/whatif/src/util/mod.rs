pub mod format;
pub mod io;

pub use format::{
    format_currency, format_currency_change, format_currency_short, format_delta,
    format_percent_change, format_percentage, format_users,
};
pub use io::atomic_write;
