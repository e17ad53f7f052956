pub mod sample_source;
pub mod session_delegate;
pub mod storage;
pub mod wall_clock;
