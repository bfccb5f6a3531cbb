use time::Duration;

pub trait StrExt: AsRef<str> {
    fn nonblank_to_some(&self) -> Option<String> {
        Some(self.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}

impl<T: AsRef<str>> StrExt for T {}

// the remote service counts decay in whole minutes
pub fn decay_to_whole_minutes(decay: Duration) -> i64 {
    let ms = decay.whole_milliseconds().max(0) as i64;
    ((ms + 30_000) / 60_000).max(1)
}

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        ::log::error!($($arg)*);
        eprintln!($($arg)*);
        ::std::process::exit(1)
    }};
}
