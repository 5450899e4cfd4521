pub mod capability;
pub mod disclosure;
pub mod leaderboard;
pub mod locale;
pub mod menu;
pub mod particles;
pub mod platform;
pub mod scroll;
pub mod storage;
pub mod timing;
