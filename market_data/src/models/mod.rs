pub mod bar;
pub mod interval;
pub mod news;
pub mod request_params;
pub mod timeframe;
pub mod tz;
