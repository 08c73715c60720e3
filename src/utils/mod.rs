pub(crate) mod date;
pub(crate) mod pace;

pub(crate) use date::{month_windows, parse_date};
pub(crate) use pace::{Pacer, SleepPacer};
